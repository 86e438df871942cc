//! Aggregate corpus report.
//!
//! [`CorpusReport`] bundles the descriptive statistics computed from one
//! cleaned token stream. It serializes to JSON for machine consumers and
//! implements `Display` for the terminal.

use std::fmt;

use serde::Serialize;

use super::entropy::entropy;
use super::freq::FreqDist;
use super::ngram::NGramModel;

/// One row of a frequency table.
#[derive(Debug, Clone, Serialize)]
pub struct FreqEntry {
    /// The sample (a word or a single letter).
    pub sample: String,
    /// How many times it was observed.
    pub count: usize,
}

/// Statistics of an n-gram model evaluated on the token stream it was
/// trained on.
#[derive(Debug, Clone, Serialize)]
pub struct NGramReport {
    pub order: usize,
    pub smoothing: f64,
    /// Bits per scored token.
    pub cross_entropy: f64,
    pub perplexity: f64,
}

/// Descriptive statistics for a cleaned token stream.
#[derive(Debug, Clone, Serialize)]
pub struct CorpusReport {
    /// Number of word tokens.
    pub token_count: usize,
    /// Number of distinct word types.
    pub type_count: usize,
    /// Words observed exactly once.
    pub hapax_count: usize,
    /// Shannon entropy of the letter distribution, in bits.
    pub letter_entropy: f64,
    /// Shannon entropy of the word distribution, in bits.
    pub word_entropy: f64,
    /// Most frequent letters.
    pub top_letters: Vec<FreqEntry>,
    /// Most frequent words.
    pub top_words: Vec<FreqEntry>,
    /// Present when an n-gram order was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngram: Option<NGramReport>,
}

impl CorpusReport {
    /// Compute the report from a cleaned token stream.
    ///
    /// `top` bounds the frequency tables; `ngram` optionally requests an
    /// (order, add-k smoothing) language model evaluated on the stream.
    pub fn from_tokens(tokens: &[String], top: usize, ngram: Option<(usize, f64)>) -> Self {
        let word_dist: FreqDist<String> = tokens.iter().cloned().collect();
        let letter_dist: FreqDist<char> = tokens.iter().flat_map(|t| t.chars()).collect();

        let ngram = ngram.and_then(|(order, smoothing)| {
            let model = NGramModel::from_tokens(order, tokens).with_smoothing(smoothing);
            let cross_entropy = model.cross_entropy(tokens)?;
            let perplexity = model.perplexity(tokens)?;
            Some(NGramReport {
                order: model.order(),
                smoothing,
                cross_entropy,
                perplexity,
            })
        });

        Self {
            token_count: word_dist.total(),
            type_count: word_dist.distinct(),
            hapax_count: word_dist.hapaxes().len(),
            letter_entropy: entropy(&letter_dist),
            word_entropy: entropy(&word_dist),
            top_letters: to_entries(letter_dist.most_common(top)),
            top_words: to_entries(word_dist.most_common(top)),
            ngram,
        }
    }
}

fn to_entries<T: ToString>(items: Vec<(&T, usize)>) -> Vec<FreqEntry> {
    items
        .into_iter()
        .map(|(sample, count)| FreqEntry {
            sample: sample.to_string(),
            count,
        })
        .collect()
}

impl fmt::Display for CorpusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tokens:         {}", self.token_count)?;
        writeln!(f, "Types:          {}", self.type_count)?;
        writeln!(f, "Hapax legomena: {}", self.hapax_count)?;
        writeln!(f, "Letter entropy: {:.4} bits", self.letter_entropy)?;
        writeln!(f, "Word entropy:   {:.4} bits", self.word_entropy)?;
        if let Some(ngram) = &self.ngram {
            writeln!(
                f,
                "{}-gram model:   {:.4} bits/token (perplexity {:.2})",
                ngram.order, ngram.cross_entropy, ngram.perplexity
            )?;
        }
        if !self.top_letters.is_empty() {
            writeln!(f, "Top letters:")?;
            for entry in &self.top_letters {
                writeln!(f, "  {:<12} {}", entry.sample, entry.count)?;
            }
        }
        if !self.top_words.is_empty() {
            writeln!(f, "Top words:")?;
            for entry in &self.top_words {
                writeln!(f, "  {:<12} {}", entry.sample, entry.count)?;
            }
        }
        Ok(())
    }
}
