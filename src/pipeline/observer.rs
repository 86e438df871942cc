//! Pipeline observer — hooks for timing, logging, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages and emitting structured
//! telemetry. Pass [`NoopObserver`] for zero-overhead execution.

use std::time::{Duration, Instant};

/// Stage names, in execution order.
pub const STAGE_CLEAN: &str = "clean";
pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_FILTER: &str = "filter";
pub const STAGE_STATS: &str = "stats";

/// Wall-clock timer for a single stage.
#[derive(Debug)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    /// Start timing.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Elapsed time since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Measurements reported at the end of a stage.
#[derive(Debug, Clone)]
pub struct StageReport {
    /// Wall-clock time the stage took.
    pub elapsed: Duration,
    /// Items flowing out of the stage (lines or tokens), when meaningful.
    pub items: Option<usize>,
}

impl StageReport {
    /// Create a report with timing only.
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    /// Attach the stage's output item count.
    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }
}

/// Callbacks fired at stage boundaries.
///
/// Every method has an empty default body, so an observer implements only
/// what it needs.
pub trait PipelineObserver {
    /// A stage is about to run.
    fn on_stage_start(&mut self, _stage: &'static str) {}

    /// A stage finished with the given report.
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records each stage's report in execution order.
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    /// Create an empty timing observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports collected so far, one per completed stage.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}
