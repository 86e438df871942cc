//! gutenstats — corpus cleaning and descriptive statistics for
//! Gutenberg-style plain-text corpora.
//!
//! The crate turns a raw Project Gutenberg text into a cleaned token stream
//! and reports descriptive statistics over it:
//!
//! - Boilerplate and chapter-heading excision ([`clean`])
//! - Word/sentence tokenization and stopword filtering ([`nlp`])
//! - Frequency distributions, entropy, and n-gram language models ([`stats`])
//! - A tagged-line document corpus parser ([`document`])
//! - A one-shot pipeline tying the stages together ([`pipeline`])
//!
//! # Quick start
//!
//! ```rust,ignore
//! use gutenstats::{Pipeline, TextSource};
//! use gutenstats::pipeline::NoopObserver;
//!
//! let text = TextSource::Url("https://www.gutenberg.org/files/84/84-0.txt".into()).fetch()?;
//! let report = Pipeline::new().run(&text, &mut NoopObserver)?;
//! println!("{report}");
//! ```

pub mod clean;
pub mod document;
pub mod error;
pub mod nlp;
pub mod pipeline;
pub mod source;
pub mod stats;

pub use error::{Error, Result};
pub use pipeline::{Pipeline, PipelineBuilder, StatsOptions};
pub use source::TextSource;
pub use stats::CorpusReport;
