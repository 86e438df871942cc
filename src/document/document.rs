//! Parsed document with tokenized sentences and word counts.

use rustc_hash::FxHashMap;

use super::markup::{decode_entities, strip_tags};
use super::tagged::TaggedRecord;
use crate::nlp::tokenizer::Tokenizer;

/// A parsed corpus document.
#[derive(Debug, Clone)]
pub struct Document {
    pub subject: String,
    pub content: String,
    pub category: Option<String>,
    /// Tokenized sentences from subject + content, lowercased and
    /// markup-free.
    pub sentences: Vec<Vec<String>>,
    /// Word -> occurrence count across all sentences.
    pub word_counts: FxHashMap<String, usize>,
    /// Total number of word tokens.
    pub word_total: usize,
}

impl Document {
    /// Build a document from a parsed record.
    ///
    /// Subject and content are combined, lowercased, entity-decoded, and —
    /// when decoding revealed escaped markup — stripped of tags before
    /// sentence tokenization.
    pub fn from_record(record: TaggedRecord, tokenizer: &Tokenizer) -> Self {
        let combined = format!("{}\n{}", record.subject, record.content).to_lowercase();
        let unescaped = decode_entities(&combined);
        let had_entities = unescaped != combined;

        // Decoded text can carry bare carriage returns (from &#xd;), so
        // split on both newline kinds.
        let lines: Vec<String> = unescaped
            .split(['\n', '\r'])
            .map(|line| {
                if had_entities {
                    strip_tags(line)
                } else {
                    line.to_string()
                }
            })
            .collect();
        let sentences = tokenizer.tokenize_sentences(&lines);

        let mut word_counts: FxHashMap<String, usize> = FxHashMap::default();
        for sentence in &sentences {
            for word in sentence {
                *word_counts.entry(word.clone()).or_insert(0) += 1;
            }
        }
        let word_total = word_counts.values().sum();

        Self {
            subject: record.subject,
            content: record.content,
            category: record.category,
            sentences,
            word_counts,
            word_total,
        }
    }

    /// True when the record carried no content body.
    pub fn has_only_subject(&self) -> bool {
        self.content.is_empty()
    }

    /// First sentence, if any — handy for log lines and summaries.
    pub fn first_sentence(&self) -> Option<&[String]> {
        self.sentences.first().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::tagged::TaggedRecord;

    fn record(subject: &str, content: &str, category: Option<&str>) -> TaggedRecord {
        TaggedRecord {
            subject: subject.to_string(),
            content: content.to_string(),
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn test_document_tokenizes_subject_and_content() {
        let doc = Document::from_record(
            record("Why is the sky blue?", "Because of scattering.", Some("Science")),
            &Tokenizer::new(),
        );

        assert_eq!(doc.sentences.len(), 2);
        assert_eq!(doc.sentences[0], vec!["why", "is", "the", "sky", "blue"]);
        assert_eq!(doc.category.as_deref(), Some("Science"));
    }

    #[test]
    fn test_document_word_counts() {
        let doc = Document::from_record(
            record("the sky", "the sea. the land.", None),
            &Tokenizer::new(),
        );

        assert_eq!(doc.word_counts["the"], 3);
        assert_eq!(doc.word_counts["sky"], 1);
        assert_eq!(doc.word_total, 6);
    }

    #[test]
    fn test_document_decodes_escaped_markup() {
        let doc = Document::from_record(
            record("title", "first&lt;br&gt;second", None),
            &Tokenizer::new(),
        );

        // The decoded <br> is stripped, leaving two separate words.
        let words: Vec<&String> = doc.sentences.iter().flatten().collect();
        assert!(words.iter().any(|w| *w == "first"));
        assert!(words.iter().any(|w| *w == "second"));
        assert!(!words.iter().any(|w| w.contains("br")));
    }

    #[test]
    fn test_document_splits_on_decoded_carriage_return() {
        let doc = Document::from_record(
            record("title", "one&#xd;two", None),
            &Tokenizer::new(),
        );

        let words: Vec<&String> = doc.sentences.iter().flatten().collect();
        assert!(words.iter().any(|w| *w == "one"));
        assert!(words.iter().any(|w| *w == "two"));
    }

    #[test]
    fn test_has_only_subject() {
        let with_body = Document::from_record(record("s", "c", None), &Tokenizer::new());
        let without = Document::from_record(record("s", "", None), &Tokenizer::new());

        assert!(!with_body.has_only_subject());
        assert!(without.has_only_subject());
    }
}
