//! Input acquisition for one-shot analysis runs.
//!
//! A [`TextSource`] abstracts over the three ways a text reaches the tool:
//! literal text, a local file, or a URL (e.g. a Project Gutenberg mirror).

use std::fs;
use std::path::PathBuf;

use crate::error::Result;

/// Where the raw text comes from.
#[derive(Debug, Clone)]
pub enum TextSource {
    /// Literal text passed on the command line.
    Inline(String),
    /// A plain-text file on disk.
    File(PathBuf),
    /// A URL to download, e.g. `https://www.gutenberg.org/files/84/84-0.txt`.
    Url(String),
}

impl TextSource {
    /// Fetch the raw text.
    ///
    /// URLs are fetched synchronously; the tool is a one-shot batch
    /// transformation, so there is nothing to overlap the download with.
    pub fn fetch(&self) -> Result<String> {
        match self {
            TextSource::Inline(text) => Ok(text.clone()),
            TextSource::File(path) => {
                tracing::debug!(path = %path.display(), "reading text file");
                Ok(fs::read_to_string(path)?)
            }
            TextSource::Url(url) => {
                tracing::debug!(%url, "downloading text");
                let body = ureq::get(url).call().map_err(Box::new)?.into_string()?;
                Ok(body)
            }
        }
    }
}
