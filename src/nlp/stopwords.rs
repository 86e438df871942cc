//! Stopword filtering
//!
//! Backed by the `stop-words` crate, with support for supplementing the
//! built-in lists with corpus-specific words.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter for dropping stopwords from a token stream.
///
/// Matching is case-insensitive; the built-in lists are lowercase and the
/// analysis pipeline lowercases tokens anyway.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a stopword filter for the given language.
    ///
    /// Accepts ISO codes or English names (en, de, fr, es, it, pt, nl, ru);
    /// unknown languages fall back to English.
    pub fn new(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            _ => LANGUAGE::English,
        };
        Self {
            stopwords: get(lang).iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create a filter that drops nothing.
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a filter from a custom word list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add extra stopwords to the filter.
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check whether a word is a stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Drop stopwords from a token stream.
    pub fn filter_tokens(&self, tokens: Vec<String>) -> Vec<String> {
        if self.stopwords.is_empty() {
            return tokens;
        }
        tokens
            .into_iter()
            .filter(|token| !self.is_stopword(token))
            .collect()
    }

    /// Number of stopwords in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Whether the filter drops nothing.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(filter.is_stopword("is"));
        assert!(!filter.is_stopword("monster"));
        assert!(!filter.is_stopword("laboratory"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let filter = StopwordFilter::new("tlh");
        assert!(filter.is_stopword("the"));
    }

    #[test]
    fn test_filter_tokens() {
        let filter = StopwordFilter::new("en");
        let tokens: Vec<String> = ["the", "creature", "is", "monstrous"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(filter.filter_tokens(tokens), vec!["creature", "monstrous"]);
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["gutenberg", "ebook"]);

        assert!(filter.is_stopword("gutenberg"));
        assert!(filter.is_stopword("Ebook"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["project"]);
        assert!(filter.is_stopword("project"));
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let filter = StopwordFilter::empty();
        let tokens: Vec<String> = ["the", "a"].iter().map(|s| s.to_string()).collect();

        assert!(filter.is_empty());
        assert_eq!(filter.filter_tokens(tokens.clone()), tokens);
    }

    #[test]
    fn test_german_stopwords() {
        let filter = StopwordFilter::new("de");

        assert!(filter.is_stopword("der"));
        assert!(filter.is_stopword("und"));
        assert!(!filter.is_stopword("ungeheuer"));
    }
}
