//! Tagged-corpus loading and aggregation.

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use super::document::Document;
use super::tagged::TaggedRecord;
use crate::error::Result;
use crate::nlp::tokenizer::Tokenizer;
use crate::stats::freq::FreqDist;

/// Label used for documents whose record carried no category tag.
pub const UNCATEGORIZED: &str = "(uncategorized)";

/// A loaded tagged-line corpus.
#[derive(Debug)]
pub struct Corpus {
    /// Successfully parsed documents, in input order.
    pub documents: Vec<Document>,
    /// Number of malformed lines that were skipped.
    pub skipped: usize,
}

impl Corpus {
    /// Parse every tagged line of the file at `path`.
    ///
    /// Malformed lines are logged and skipped rather than aborting the whole
    /// load; only I/O failures are errors.
    pub fn load(path: &Path, tokenizer: &Tokenizer) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading tagged corpus");
        Ok(Self::from_text(&raw, tokenizer))
    }

    /// Parse tagged lines from an in-memory string.
    ///
    /// Lines are independent, so parsing and tokenization fan out across
    /// threads.
    pub fn from_text(raw: &str, tokenizer: &Tokenizer) -> Self {
        let lines: Vec<&str> = raw.lines().filter(|line| !line.trim().is_empty()).collect();

        let parsed: Vec<Option<Document>> = lines
            .par_iter()
            .map(|line| match TaggedRecord::parse(line) {
                Ok(record) => Some(Document::from_record(record, tokenizer)),
                Err(err) => {
                    tracing::warn!(%err, "skipping malformed record");
                    None
                }
            })
            .collect();

        let skipped = parsed.iter().filter(|document| document.is_none()).count();
        let documents: Vec<Document> = parsed.into_iter().flatten().collect();

        Self { documents, skipped }
    }

    /// Number of parsed documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents per category. Unlabeled documents count under
    /// [`UNCATEGORIZED`].
    pub fn category_counts(&self) -> FxHashMap<String, usize> {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for document in &self.documents {
            let category = document
                .category
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED.to_string());
            *counts.entry(category).or_insert(0) += 1;
        }
        counts
    }

    /// Total word tokens across all documents.
    pub fn word_total(&self) -> usize {
        self.documents.iter().map(|d| d.word_total).sum()
    }

    /// Word frequency distribution aggregated over the whole corpus.
    pub fn word_freq(&self) -> FreqDist<String> {
        let mut dist = FreqDist::new();
        for document in &self.documents {
            for (word, &count) in &document.word_counts {
                dist.add_count(word.clone(), count);
            }
        }
        dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
<subject>why is the sky blue</subject><content>scattering of light</content><maincat>Science</maincat>
<subject>best pizza topping</subject><content>cheese. more cheese.</content><maincat>Food</maincat>
<subject>subject only record</subject>
not a record at all
<subject>another science one</subject><content>light again</content><maincat>Science</maincat>";

    #[test]
    fn test_from_text_parses_and_skips() {
        let corpus = Corpus::from_text(SAMPLE, &Tokenizer::new());

        assert_eq!(corpus.len(), 4);
        assert_eq!(corpus.skipped, 1);
    }

    #[test]
    fn test_category_counts() {
        let corpus = Corpus::from_text(SAMPLE, &Tokenizer::new());
        let counts = corpus.category_counts();

        assert_eq!(counts["Science"], 2);
        assert_eq!(counts["Food"], 1);
        assert_eq!(counts[UNCATEGORIZED], 1);
    }

    #[test]
    fn test_word_freq_aggregates_across_documents() {
        let corpus = Corpus::from_text(SAMPLE, &Tokenizer::new());
        let dist = corpus.word_freq();

        // "light" appears in two different documents.
        assert_eq!(dist.count(&"light".to_string()), 2);
        // "cheese" appears twice within one document.
        assert_eq!(dist.count(&"cheese".to_string()), 2);
        assert_eq!(dist.total(), corpus.word_total());
    }

    #[test]
    fn test_empty_input() {
        let corpus = Corpus::from_text("", &Tokenizer::new());
        assert!(corpus.is_empty());
        assert_eq!(corpus.skipped, 0);
        assert_eq!(corpus.word_total(), 0);
    }
}
