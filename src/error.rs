//! Error types for corpus loading, cleaning, and parsing.

use thiserror::Error;

/// Errors surfaced by the library.
///
/// Cleaning heuristics that simply find nothing are not errors — they leave
/// their input unchanged. An `Error` means the input could not be acquired or
/// violated a structural expectation of the corpus format.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a local file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Downloading a remote text failed.
    #[error("fetching url failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    /// A required tag was absent from a tagged corpus line.
    #[error("missing <{0}> tag in record")]
    MissingTag(&'static str),

    /// A chapter label appeared more than twice in the token stream.
    ///
    /// Headings are expected once in the table of contents and once in the
    /// body; a third occurrence means the marker heuristic misfired.
    #[error("chapter label '{label}' encountered more than twice (first chapter at token {first_chapter})")]
    ChapterLabelRepeated {
        /// The offending label token.
        label: String,
        /// Token index of the first chapter marker in the filtered stream.
        first_chapter: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
