//! One-shot analysis pipeline
//!
//! Orchestrates cleaning, tokenization, filtering, and statistics for a
//! single text, with observer hooks at every stage boundary.

pub mod observer;
pub mod runner;

pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use runner::{Pipeline, PipelineBuilder, StatsOptions};
