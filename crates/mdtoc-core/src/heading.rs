//! ATX heading extraction.

use crate::fence::{LineClassifier, LineKind};

/// A heading found in the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading text, trimmed.
    pub text: String,
    /// Zero-based index of the heading line.
    pub line_index: usize,
}

/// Match an ATX heading: one to six `#`, whitespace, then at least one more
/// character.
///
/// Returns the level and the untrimmed text after the first whitespace
/// character. The line must not be indented.
#[must_use]
pub fn parse_atx_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }

    let rest = &line[hashes..];
    let separator = rest.chars().next().filter(|c| c.is_whitespace())?;
    let text = &rest[separator.len_utf8()..];
    if text.is_empty() {
        return None;
    }

    let level = u8::try_from(hashes).ok()?;
    Some((level, text))
}

/// Extract headings in document order, skipping fenced and indented code.
///
/// # Example
///
/// ```
/// use mdtoc_core::extract_headings;
///
/// let lines = ["# Title", "```", "# not a heading", "```", "## Usage"];
/// let headings = extract_headings(&lines);
///
/// assert_eq!(headings.len(), 2);
/// assert_eq!(headings[1].text, "Usage");
/// assert_eq!(headings[1].line_index, 4);
/// ```
#[must_use]
pub fn extract_headings(lines: &[&str]) -> Vec<Heading> {
    let mut classifier = LineClassifier::new();

    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| classifier.classify(line) == LineKind::Text)
        .filter_map(|(line_index, line)| {
            let (level, text) = parse_atx_heading(line)?;
            Some(Heading {
                level,
                text: text.trim().to_owned(),
                line_index,
            })
        })
        .collect()
}

/// Index of the first heading line, using the same rules as
/// [`extract_headings`].
pub(crate) fn first_heading_index<S: AsRef<str>>(lines: &[S]) -> Option<usize> {
    let mut classifier = LineClassifier::new();

    lines.iter().position(|line| {
        let line = line.as_ref();
        classifier.classify(line) == LineKind::Text && parse_atx_heading(line).is_some()
    })
}
