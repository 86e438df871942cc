//! Gutenberg header/footer stripping.
//!
//! Every Project Gutenberg text wraps the body in barrier lines of the form
//! `*** START OF THIS PROJECT GUTENBERG EBOOK … ***` and
//! `*** END OF THIS PROJECT GUTENBERG EBOOK … ***`. Everything outside those
//! barriers is licensing boilerplate.

/// Markers delimiting the body of a Gutenberg-style text.
#[derive(Debug, Clone)]
pub struct BarrierConfig {
    /// Prefix of the line opening the body.
    pub start_barrier: String,
    /// Prefix of the line closing the body.
    pub end_barrier: String,
}

impl Default for BarrierConfig {
    fn default() -> Self {
        Self {
            start_barrier: "*** START".to_string(),
            end_barrier: "*** END".to_string(),
        }
    }
}

/// Return the lines strictly between the start and end barriers.
///
/// When a barrier prefix occurs on several lines the last occurrence wins.
/// A missing start barrier keeps the document head; a missing end barrier
/// keeps the tail.
pub fn strip_header_footer(lines: Vec<String>, cfg: &BarrierConfig) -> Vec<String> {
    let mut start: Option<usize> = None;
    let mut end: Option<usize> = None;

    for (pos, line) in lines.iter().enumerate() {
        if line.starts_with(&cfg.start_barrier) {
            start = Some(pos);
        } else if line.starts_with(&cfg.end_barrier) {
            end = Some(pos);
        }
    }

    let from = start.map_or(0, |pos| pos + 1);
    let to = end.unwrap_or(lines.len());
    if from >= to {
        return Vec::new();
    }

    lines[from..to].to_vec()
}
