//! Chapter-heading detection and excision.
//!
//! Gutenberg texts typically list every chapter twice: once in the table of
//! contents and once as a heading at the start of the chapter body. The
//! detector looks for short lines ("Chapter I", "CHAPTER TWO", …) whose
//! leading word recurs often enough to be structural rather than prose, then
//! excises the heading lines and the table of contents from the document.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

/// Tuning knobs for the chapter-boundary heuristic.
#[derive(Debug, Clone)]
pub struct ChapterConfig {
    /// Minimum length (in characters) of a candidate leading word.
    pub minimal_length: usize,
    /// A leading word must head more than this many short lines to qualify.
    pub appearance_threshold: usize,
    /// How many times a heading line is expected to occur in the document.
    pub expected_appearances: usize,
    /// Marker word that always qualifies as structural.
    pub barrier_word: String,
}

impl Default for ChapterConfig {
    fn default() -> Self {
        Self {
            minimal_length: 4,
            appearance_threshold: 4,
            expected_appearances: 2,
            barrier_word: "***".to_string(),
        }
    }
}

/// Find words that plausibly lead chapter headings.
///
/// Headings are mostly of the form "Chapter N", so only lines with at most
/// two words are considered. The leading word qualifies when it is long
/// enough, recurs on more than `appearance_threshold` such lines, and looks
/// structural: title-case, upper-case, or the barrier marker itself.
///
/// The result is sorted for deterministic downstream behavior.
pub fn find_chapter_words(lines: &[String], cfg: &ChapterConfig) -> Vec<String> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();

    for line in lines {
        let mut words = line.split_whitespace();
        let Some(first_word) = words.next() else {
            continue;
        };
        // One more word at most after the leading one.
        if words.nth(1).is_some() || first_word.chars().count() < cfg.minimal_length {
            continue;
        }
        *counts.entry(first_word).or_insert(0) += 1;
    }

    let mut found: Vec<String> = counts
        .into_iter()
        .filter(|&(word, count)| {
            count > cfg.appearance_threshold
                && (is_title_case(word) || is_upper_case(word) || word == cfg.barrier_word)
        })
        .map(|(word, _)| word.to_string())
        .collect();
    found.sort_unstable();
    found
}

/// Excise the chapter headings and the table of contents.
///
/// Every full line starting with a detected chapter word is tallied; lines
/// occurring exactly `expected_appearances` times are treated as real
/// headings (contents entry + body heading). The document is truncated at the
/// last heading's second occurrence, the remaining second occurrences are
/// deleted, and everything before the first chapter's body heading (i.e. the
/// front matter and table of contents) is dropped.
///
/// When no chapter structure is detected the input is returned unchanged.
pub fn remove_chapters(mut lines: Vec<String>, cfg: &ChapterConfig) -> Vec<String> {
    let chapter_words = find_chapter_words(&lines, cfg);
    if chapter_words.is_empty() {
        return lines;
    }
    tracing::debug!(?chapter_words, "detected chapter words");

    let mut heading_positions: FxHashMap<&str, Vec<usize>> = FxHashMap::default();
    for (line_number, line) in lines.iter().enumerate() {
        if chapter_words.iter().any(|word| line.starts_with(word.as_str())) {
            heading_positions
                .entry(line.as_str())
                .or_default()
                .push(line_number);
        }
    }

    let mut second_occurrences: Vec<usize> = heading_positions
        .into_values()
        .filter(|positions| positions.len() == cfg.expected_appearances)
        .map(|positions| positions[1])
        .collect();
    if second_occurrences.is_empty() {
        return lines;
    }

    // Descending order so deletions never shift a pending position.
    second_occurrences.sort_unstable_by(|a, b| b.cmp(a));
    let last = second_occurrences[0];
    let first = *second_occurrences.last().expect("non-empty");

    lines.truncate(last);
    for &pos in &second_occurrences[1..] {
        lines.remove(pos);
    }
    lines.drain(..first.min(lines.len()));
    lines
}

/// Second-pass chapter filter over the cleaned token stream.
///
/// A token starting with `chapter` marks the following token as a chapter
/// label. Each label may appear at most twice; a third occurrence means the
/// heading heuristic misfired and the run is aborted. Tokens before the first
/// chapter marker (front matter that survived line-level cleaning) are
/// dropped.
pub fn filter_chapter_tokens(tokens: Vec<String>) -> Result<Vec<String>> {
    use std::collections::hash_map::Entry;

    let mut filtered: Vec<String> = Vec::with_capacity(tokens.len());
    let mut first_chapter: Option<usize> = None;
    let mut awaiting_label = false;
    // true = label seen once so far, false = twice.
    let mut labels: FxHashMap<String, bool> = FxHashMap::default();

    for token in tokens {
        if token.starts_with("chapter") {
            if first_chapter.is_none() {
                first_chapter = Some(filtered.len());
            }
            awaiting_label = true;
        } else if awaiting_label {
            match labels.entry(token) {
                Entry::Vacant(entry) => {
                    entry.insert(true);
                }
                Entry::Occupied(mut entry) => {
                    if *entry.get() {
                        entry.insert(false);
                    } else {
                        return Err(Error::ChapterLabelRepeated {
                            label: entry.key().clone(),
                            first_chapter: first_chapter.unwrap_or(0),
                        });
                    }
                }
            }
            awaiting_label = false;
        } else {
            filtered.push(token);
        }
    }

    if let Some(first) = first_chapter {
        filtered.drain(..first);
    }
    Ok(filtered)
}

/// Python-style `istitle` for a single word: the first cased character is
/// uppercase and every following cased character is lowercase.
fn is_title_case(word: &str) -> bool {
    let mut seen_cased = false;
    for c in word.chars() {
        if c.is_uppercase() {
            if seen_cased {
                return false;
            }
            seen_cased = true;
        } else if c.is_lowercase() {
            if !seen_cased {
                return false;
            }
        }
    }
    seen_cased
}

/// At least one cased character and no lowercase ones.
fn is_upper_case(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}
