//! Positional tag extraction for the one-record-per-line corpus format.
//!
//! Fields appear in a fixed order (`subject`, `content`, `maincat`), so
//! extraction is a forward scan rather than an XML parse; each extraction
//! resumes where the previous one ended.

use crate::error::{Error, Result};

/// Extract `<name>…</name>` from `line`, starting the scan at byte offset
/// `from`.
///
/// Returns the payload and the offset of the closing tag, or `None` when
/// either tag is missing from the rest of the line.
pub fn extract_tag<'a>(line: &'a str, name: &str, from: usize) -> Option<(&'a str, usize)> {
    let start_tag = format!("<{name}>");
    let end_tag = format!("</{name}>");

    let rest = line.get(from..)?;
    let start = from + rest.find(&start_tag)?;
    let payload_start = start + start_tag.len();
    let payload_end = payload_start + line.get(payload_start..)?.find(&end_tag)?;

    Some((&line[payload_start..payload_end], payload_end))
}

/// The raw fields split out of one tagged line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedRecord {
    pub subject: String,
    /// Empty for subject-only records.
    pub content: String,
    /// The main category, when labeled.
    pub category: Option<String>,
}

impl TaggedRecord {
    /// Parse one line.
    ///
    /// The subject tag is required; content and category are optional
    /// (question-only records carry no body, unlabeled ones no category).
    pub fn parse(line: &str) -> Result<Self> {
        let (subject, pos) =
            extract_tag(line, "subject", 0).ok_or(Error::MissingTag("subject"))?;
        let (content, pos) = match extract_tag(line, "content", pos) {
            Some((content, pos)) => (content, pos),
            None => ("", pos),
        };
        let category = extract_tag(line, "maincat", pos).map(|(category, _)| category.to_string());

        Ok(Self {
            subject: subject.to_string(),
            content: content.to_string(),
            category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_tag_basic() {
        let line = "<subject>why is the sky blue?</subject>";
        let (payload, pos) = extract_tag(line, "subject", 0).unwrap();
        assert_eq!(payload, "why is the sky blue?");
        assert_eq!(&line[pos..], "</subject>");
    }

    #[test]
    fn test_extract_tag_respects_start_offset() {
        let line = "<a>first</a><a>second</a>";
        let (first, pos) = extract_tag(line, "a", 0).unwrap();
        assert_eq!(first, "first");
        let (second, _) = extract_tag(line, "a", pos).unwrap();
        assert_eq!(second, "second");
    }

    #[test]
    fn test_extract_tag_missing_close_is_none() {
        assert!(extract_tag("<a>unterminated", "a", 0).is_none());
    }

    #[test]
    fn test_parse_full_record() {
        let line = "<subject>S</subject><content>C</content><maincat>Science</maincat>";
        let record = TaggedRecord::parse(line).unwrap();
        assert_eq!(record.subject, "S");
        assert_eq!(record.content, "C");
        assert_eq!(record.category.as_deref(), Some("Science"));
    }

    #[test]
    fn test_parse_subject_only() {
        let record = TaggedRecord::parse("<subject>S</subject>").unwrap();
        assert_eq!(record.subject, "S");
        assert!(record.content.is_empty());
        assert!(record.category.is_none());
    }

    #[test]
    fn test_parse_missing_subject_is_error() {
        let err = TaggedRecord::parse("<content>C</content>").unwrap_err();
        assert!(matches!(err, Error::MissingTag("subject")));
    }

    #[test]
    fn test_parse_category_never_scans_backwards() {
        // A maincat tag before the content does not belong to this record's
        // category position and is ignored.
        let line = "<subject>S</subject><maincat>Early</maincat><content>C</content>";
        let record = TaggedRecord::parse(line).unwrap();
        assert_eq!(record.content, "C");
        assert!(record.category.is_none());
    }
}
