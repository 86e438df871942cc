//! Pipeline runner — orchestrates the one-shot analysis.
//!
//! Calling [`Pipeline::run`] executes the stages in order — clean →
//! tokenize → filter → stats — timing each one and notifying a
//! [`PipelineObserver`] at every boundary. Each stage runs inside a tracing
//! span.
//!
//! Use [`PipelineBuilder`] to override individual stage configurations.

use crate::clean::{clean_lines, filter_chapter_tokens, BarrierConfig, ChapterConfig};
use crate::error::Result;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, STAGE_CLEAN, STAGE_FILTER, STAGE_STATS,
    STAGE_TOKENIZE,
};
use crate::stats::report::CorpusReport;

/// Enter a tracing span for a pipeline stage.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::debug_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Options for the statistics stage.
#[derive(Debug, Clone)]
pub struct StatsOptions {
    /// Rows shown in each frequency table.
    pub top: usize,
    /// Optional n-gram model: (order, add-k smoothing).
    pub ngram: Option<(usize, f64)>,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self { top: 10, ngram: None }
    }
}

/// The one-shot analysis pipeline.
#[derive(Debug, Clone)]
pub struct Pipeline {
    barriers: BarrierConfig,
    chapters: ChapterConfig,
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
    stats: StatsOptions,
    strip_chapters: bool,
}

impl Default for Pipeline {
    fn default() -> Self {
        PipelineBuilder::new().build()
    }
}

impl Pipeline {
    /// Build a pipeline with all defaults: Gutenberg barriers, chapter
    /// excision on, lowercasing tokenizer, English stopwords.
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute the pipeline on raw text, producing a [`CorpusReport`].
    pub fn run(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<CorpusReport> {
        // Stage 0: line-level cleaning
        trace_stage!(STAGE_CLEAN);
        observer.on_stage_start(STAGE_CLEAN);
        let clock = StageClock::start();
        let lines = if self.strip_chapters {
            clean_lines(text, &self.barriers, &self.chapters)
        } else {
            let raw: Vec<String> = text.lines().map(str::to_string).collect();
            crate::clean::strip_header_footer(raw, &self.barriers)
        };
        let report = StageReport::new(clock.elapsed()).with_items(lines.len());
        observer.on_stage_end(STAGE_CLEAN, &report);
        tracing::debug!(lines = lines.len(), "cleaned");

        // Stage 1: tokenize
        trace_stage!(STAGE_TOKENIZE);
        observer.on_stage_start(STAGE_TOKENIZE);
        let clock = StageClock::start();
        let joined = lines.join("\n");
        let tokens = self.tokenizer.tokenize(&joined);
        let report = StageReport::new(clock.elapsed()).with_items(tokens.len());
        observer.on_stage_end(STAGE_TOKENIZE, &report);
        tracing::debug!(tokens = tokens.len(), "tokenized");

        // Stage 2: filter stopwords and residual chapter markers
        trace_stage!(STAGE_FILTER);
        observer.on_stage_start(STAGE_FILTER);
        let clock = StageClock::start();
        let tokens = self.stopwords.filter_tokens(tokens);
        let tokens = if self.strip_chapters {
            filter_chapter_tokens(tokens)?
        } else {
            tokens
        };
        let report = StageReport::new(clock.elapsed()).with_items(tokens.len());
        observer.on_stage_end(STAGE_FILTER, &report);
        tracing::debug!(tokens = tokens.len(), "filtered");

        // Stage 3: statistics
        trace_stage!(STAGE_STATS);
        observer.on_stage_start(STAGE_STATS);
        let clock = StageClock::start();
        let report_out = CorpusReport::from_tokens(&tokens, self.stats.top, self.stats.ngram);
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_STATS, &report);

        Ok(report_out)
    }
}

/// Fluent builder for a [`Pipeline`].
#[derive(Debug, Clone)]
pub struct PipelineBuilder {
    barriers: BarrierConfig,
    chapters: ChapterConfig,
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
    stats: StatsOptions,
    strip_chapters: bool,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineBuilder {
    /// Start from the default configuration.
    pub fn new() -> Self {
        Self {
            barriers: BarrierConfig::default(),
            chapters: ChapterConfig::default(),
            tokenizer: Tokenizer::new(),
            stopwords: StopwordFilter::default(),
            stats: StatsOptions::default(),
            strip_chapters: true,
        }
    }

    /// Override the boilerplate barrier markers.
    pub fn barriers(mut self, barriers: BarrierConfig) -> Self {
        self.barriers = barriers;
        self
    }

    /// Override the chapter-detection heuristics.
    pub fn chapters(mut self, chapters: ChapterConfig) -> Self {
        self.chapters = chapters;
        self
    }

    /// Override the tokenizer.
    pub fn tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Use the stopword list for the given language.
    pub fn language(mut self, language: &str) -> Self {
        self.stopwords = StopwordFilter::new(language);
        self
    }

    /// Keep stopwords in the token stream.
    pub fn keep_stopwords(mut self) -> Self {
        self.stopwords = StopwordFilter::empty();
        self
    }

    /// Skip chapter detection and excision entirely.
    pub fn skip_chapter_removal(mut self) -> Self {
        self.strip_chapters = false;
        self
    }

    /// Override the statistics options.
    pub fn stats(mut self, stats: StatsOptions) -> Self {
        self.stats = stats;
        self
    }

    /// Consume the builder and produce a [`Pipeline`].
    pub fn build(self) -> Pipeline {
        Pipeline {
            barriers: self.barriers,
            chapters: self.chapters,
            tokenizer: self.tokenizer,
            stopwords: self.stopwords,
            stats: self.stats,
            strip_chapters: self.strip_chapters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::observer::{NoopObserver, StageTimingObserver};

    const SAMPLE: &str = "\
The Project Gutenberg eBook of Example
*** START OF THIS PROJECT GUTENBERG EBOOK EXAMPLE ***
The creature walked. The creature spoke. A laboratory appeared.
*** END OF THIS PROJECT GUTENBERG EBOOK EXAMPLE ***
End matter.";

    #[test]
    fn test_pipeline_runs_end_to_end() {
        let pipeline = Pipeline::new();
        let report = pipeline.run(SAMPLE, &mut NoopObserver).unwrap();

        // Stopwords ("the", "a") are gone; content words survive.
        assert!(report
            .top_words
            .iter()
            .any(|entry| entry.sample == "creature"));
        assert!(!report.top_words.iter().any(|entry| entry.sample == "the"));
        assert!(report.token_count >= 3);
        assert!(report.token_count < 9);
    }

    #[test]
    fn test_pipeline_notifies_all_stages() {
        let pipeline = Pipeline::new();
        let mut observer = StageTimingObserver::new();
        pipeline.run(SAMPLE, &mut observer).unwrap();

        let stages: Vec<&str> = observer.reports().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            stages,
            vec!["clean", "tokenize", "filter", "stats"]
        );
    }

    #[test]
    fn test_pipeline_keep_stopwords() {
        let pipeline = PipelineBuilder::new().keep_stopwords().build();
        let report = pipeline.run(SAMPLE, &mut NoopObserver).unwrap();

        assert!(report.top_words.iter().any(|entry| entry.sample == "the"));
    }

    #[test]
    fn test_pipeline_empty_input() {
        let pipeline = Pipeline::new();
        let report = pipeline.run("", &mut NoopObserver).unwrap();

        assert_eq!(report.token_count, 0);
        assert_eq!(report.type_count, 0);
    }

    #[test]
    fn test_pipeline_with_ngram_stats() {
        let pipeline = PipelineBuilder::new()
            .keep_stopwords()
            .stats(StatsOptions {
                top: 5,
                ngram: Some((2, 0.0)),
            })
            .build();
        let report = pipeline.run(SAMPLE, &mut NoopObserver).unwrap();

        assert!(report.ngram.is_some());
    }

    #[test]
    fn test_pipeline_skip_chapter_removal_is_plain_cleaning() {
        let pipeline = PipelineBuilder::new().skip_chapter_removal().build();
        let report = pipeline.run(SAMPLE, &mut NoopObserver).unwrap();

        assert!(report.token_count > 0);
    }
}
