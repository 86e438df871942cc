//! Word and sentence tokenization.
//!
//! The word tokenizer splits on whitespace and strips every non-alphanumeric
//! character from the resulting tokens, so punctuation never reaches the
//! frequency counts. The sentence tokenizer additionally splits lines on
//! terminal punctuation before tokenizing each sentence.

/// Configuration for the tokenizer.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Lowercase tokens during tokenization.
    pub lowercase: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self { lowercase: true }
    }
}

/// Whitespace-and-punctuation word tokenizer.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a tokenizer with the default config (lowercasing on).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer with a custom config.
    pub fn with_config(config: TokenizerConfig) -> Self {
        Self { config }
    }

    /// Set whether tokens are lowercased.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.config.lowercase = lowercase;
        self
    }

    /// Split text into word tokens.
    ///
    /// Tokens that are empty after punctuation stripping are dropped, so
    /// e.g. a standalone `--` never becomes a token.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|raw| self.normalize(raw))
            .filter(|token| !token.is_empty())
            .collect()
    }

    /// Split lines into sentences on terminal punctuation, then tokenize
    /// each sentence. Empty sentences are dropped.
    pub fn tokenize_sentences(&self, lines: &[String]) -> Vec<Vec<String>> {
        let mut sentences = Vec::new();
        for line in lines {
            for sentence in line.split(['.', '!', '?']) {
                let tokens = self.tokenize(sentence);
                if !tokens.is_empty() {
                    sentences.push(tokens);
                }
            }
        }
        sentences
    }

    fn normalize(&self, raw: &str) -> String {
        let cleaned: String = raw.chars().filter(|c| c.is_alphanumeric()).collect();
        if self.config.lowercase {
            cleaned.to_lowercase()
        } else {
            cleaned
        }
    }
}
