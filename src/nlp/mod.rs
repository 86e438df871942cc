//! Natural Language Processing components
//!
//! This module provides word and sentence tokenization plus stopword
//! filtering for cleaned corpus text.

pub mod stopwords;
pub mod tokenizer;

pub use stopwords::StopwordFilter;
pub use tokenizer::{Tokenizer, TokenizerConfig};
