//! N-gram language models.
//!
//! An order-n maximum-likelihood model with optional add-k (Lidstone)
//! smoothing. The model scores token streams with cross-entropy and
//! perplexity; scoring the training stream itself estimates the corpus
//! entropy rate.

use rustc_hash::{FxHashMap, FxHashSet};

/// Order-n language model estimated by maximum likelihood.
#[derive(Debug, Clone)]
pub struct NGramModel {
    order: usize,
    /// add-k smoothing constant; 0.0 means pure MLE.
    smoothing: f64,
    ngram_counts: FxHashMap<Vec<String>, usize>,
    context_counts: FxHashMap<Vec<String>, usize>,
    vocabulary: FxHashSet<String>,
}

impl NGramModel {
    /// Create an untrained model of the given order (clamped to at least 1).
    pub fn new(order: usize) -> Self {
        Self {
            order: order.max(1),
            smoothing: 0.0,
            ngram_counts: FxHashMap::default(),
            context_counts: FxHashMap::default(),
            vocabulary: FxHashSet::default(),
        }
    }

    /// Set the add-k smoothing constant (negative values are treated as 0).
    pub fn with_smoothing(mut self, k: f64) -> Self {
        self.smoothing = k.max(0.0);
        self
    }

    /// Train a model of the given order on a token stream.
    pub fn from_tokens(order: usize, tokens: &[String]) -> Self {
        let mut model = Self::new(order);
        model.train(tokens);
        model
    }

    /// Count every full n-gram window in the token stream.
    ///
    /// Streams shorter than the order contribute vocabulary only.
    pub fn train(&mut self, tokens: &[String]) {
        for token in tokens {
            self.vocabulary.insert(token.clone());
        }
        if tokens.len() < self.order {
            return;
        }
        for window in tokens.windows(self.order) {
            let context = window[..self.order - 1].to_vec();
            *self.ngram_counts.entry(window.to_vec()).or_insert(0) += 1;
            *self.context_counts.entry(context).or_insert(0) += 1;
        }
    }

    /// The model order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of distinct tokens seen during training.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of distinct n-grams seen during training.
    pub fn distinct_ngrams(&self) -> usize {
        self.ngram_counts.len()
    }

    /// P(word | context) under MLE with add-k smoothing.
    ///
    /// With no smoothing an unseen context or n-gram has probability 0.
    pub fn probability(&self, context: &[String], word: &str) -> f64 {
        let mut ngram: Vec<String> = context.to_vec();
        ngram.push(word.to_string());
        let ngram_count = self.ngram_counts.get(&ngram).copied().unwrap_or(0);
        let context_count = self
            .context_counts
            .get(&ngram[..ngram.len() - 1])
            .copied()
            .unwrap_or(0);

        let vocab = self.vocabulary.len() as f64;
        let numerator = ngram_count as f64 + self.smoothing;
        let denominator = context_count as f64 + self.smoothing * vocab;
        if denominator == 0.0 {
            return 0.0;
        }
        numerator / denominator
    }

    /// Cross-entropy (bits per scored token) of the model on a token stream.
    ///
    /// Each full window contributes -log2 P(last | rest). Returns `None`
    /// when the stream is shorter than the model order; a zero-probability
    /// window yields infinity, as there is no mass to assign.
    pub fn cross_entropy(&self, tokens: &[String]) -> Option<f64> {
        if tokens.len() < self.order {
            return None;
        }
        let mut bits = 0.0;
        let mut scored = 0usize;
        for window in tokens.windows(self.order) {
            let (word, context) = window.split_last().expect("windows are non-empty");
            let p = self.probability(context, word);
            if p <= 0.0 {
                return Some(f64::INFINITY);
            }
            bits -= p.log2();
            scored += 1;
        }
        Some(bits / scored as f64)
    }

    /// Perplexity of the model on a token stream: 2^cross-entropy.
    pub fn perplexity(&self, tokens: &[String]) -> Option<f64> {
        self.cross_entropy(tokens).map(f64::exp2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bigram_counts() {
        let stream = tokens(&["a", "b", "a", "b", "a"]);
        let model = NGramModel::from_tokens(2, &stream);

        assert_eq!(model.order(), 2);
        assert_eq!(model.vocabulary_size(), 2);
        // ab, ba, ab, ba -> two distinct bigrams.
        assert_eq!(model.distinct_ngrams(), 2);
    }

    #[test]
    fn test_deterministic_sequence_has_zero_cross_entropy() {
        // After "a" always comes "b" and vice versa, so every window has
        // probability 1 and the stream carries no surprise.
        let stream = tokens(&["a", "b", "a", "b", "a", "b"]);
        let model = NGramModel::from_tokens(2, &stream);

        let h = model.cross_entropy(&stream).unwrap();
        assert!(h.abs() < 1e-12);
        assert!((model.perplexity(&stream).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_bigram_probability() {
        // Context "a" is followed by "b" twice and "c" once.
        let stream = tokens(&["a", "b", "a", "c", "a", "b"]);
        let model = NGramModel::from_tokens(2, &stream);

        let a = tokens(&["a"]);
        assert!((model.probability(&a, "b") - 2.0 / 3.0).abs() < 1e-12);
        assert!((model.probability(&a, "c") - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(model.probability(&a, "z"), 0.0);
    }

    #[test]
    fn test_unseen_ngram_without_smoothing_is_infinite() {
        let train = tokens(&["a", "b", "a", "b"]);
        let model = NGramModel::from_tokens(2, &train);

        let test = tokens(&["b", "b"]);
        assert_eq!(model.cross_entropy(&test), Some(f64::INFINITY));
    }

    #[test]
    fn test_smoothing_makes_unseen_finite() {
        let train = tokens(&["a", "b", "a", "b"]);
        let model = NGramModel::from_tokens(2, &train).with_smoothing(1.0);

        let test = tokens(&["b", "b"]);
        let h = model.cross_entropy(&test).unwrap();
        assert!(h.is_finite());
        assert!(h > 0.0);
    }

    #[test]
    fn test_short_stream_is_none() {
        let model = NGramModel::from_tokens(3, &tokens(&["a", "b"]));
        assert_eq!(model.cross_entropy(&tokens(&["a"])), None);
    }

    #[test]
    fn test_unigram_matches_distribution_entropy() {
        // An order-1 model scored on its own training stream is exactly the
        // Shannon entropy of the unigram distribution.
        let stream = tokens(&["a", "a", "a", "b"]);
        let model = NGramModel::from_tokens(1, &stream);

        let h = model.cross_entropy(&stream).unwrap();
        assert!((h - 0.8112781244591328).abs() < 1e-12);
    }

    #[test]
    fn test_order_zero_clamps_to_one() {
        let model = NGramModel::new(0);
        assert_eq!(model.order(), 1);
    }
}
