//! Descriptive corpus statistics
//!
//! Frequency distributions, Shannon entropy, n-gram language models, and the
//! aggregate report printed by the CLI.

pub mod entropy;
pub mod freq;
pub mod ngram;
pub mod report;

pub use entropy::entropy;
pub use freq::FreqDist;
pub use ngram::NGramModel;
pub use report::{CorpusReport, FreqEntry, NGramReport};
