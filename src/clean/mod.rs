//! Corpus cleaning for Gutenberg-style texts.
//!
//! This module removes the boilerplate header/footer that Project Gutenberg
//! wraps around every text, then excises repeated chapter headings so that
//! downstream statistics see prose only.

pub mod boilerplate;
pub mod chapters;

pub use boilerplate::{strip_header_footer, BarrierConfig};
pub use chapters::{filter_chapter_tokens, find_chapter_words, remove_chapters, ChapterConfig};

use crate::error::Result;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;

/// Line-level cleaning: strip the boilerplate, then the chapter headings.
pub fn clean_lines(text: &str, barriers: &BarrierConfig, chapters: &ChapterConfig) -> Vec<String> {
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    let lines = strip_header_footer(lines, barriers);
    remove_chapters(lines, chapters)
}

/// Full text cleanup: boilerplate and chapter excision, tokenization,
/// stopword filtering, and the token-level chapter pass.
///
/// This is the library-level shortcut; [`crate::Pipeline`] runs the same
/// steps with per-stage timing and observer hooks.
pub fn cleanup_text(
    text: &str,
    barriers: &BarrierConfig,
    chapters: &ChapterConfig,
    tokenizer: &Tokenizer,
    stopwords: &StopwordFilter,
) -> Result<Vec<String>> {
    let lines = clean_lines(text, barriers, chapters);
    let tokens = tokenizer.tokenize(&lines.join("\n"));
    let tokens = stopwords.filter_tokens(tokens);
    filter_chapter_tokens(tokens)
}
