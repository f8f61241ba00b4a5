//! Table of contents rendering.

use std::collections::HashMap;

use crate::heading::Heading;
use crate::slug::slugify;

/// Options controlling which headings end up in the table of contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TocOptions {
    /// Deepest heading level to include (1-6).
    pub max_level: u8,
    /// Leave out the first heading, usually the document title.
    pub skip_first: bool,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            max_level: 3,
            skip_first: true,
        }
    }
}

impl TocOptions {
    /// `max_level` clamped into 1..=6.
    fn effective_max_level(self) -> u8 {
        self.max_level.clamp(1, 6)
    }
}

/// Render headings as a nested markdown list of anchor links.
///
/// Returns `None` when there are no headings left after applying
/// `skip_first`. Indentation is relative to the shallowest remaining heading.
/// Duplicate anchors get `-1`, `-2`, ... suffixes in document order.
///
/// # Example
///
/// ```
/// use mdtoc_core::{Heading, TocOptions, render_toc};
///
/// let headings = vec![
///     Heading { level: 1, text: "Title".to_owned(), line_index: 0 },
///     Heading { level: 2, text: "Usage".to_owned(), line_index: 2 },
///     Heading { level: 3, text: "Flags".to_owned(), line_index: 4 },
/// ];
///
/// let toc = render_toc(&headings, TocOptions::default()).unwrap();
/// assert_eq!(toc, "- [Usage](#usage)\n  - [Flags](#flags)");
/// ```
#[must_use]
pub fn render_toc(headings: &[Heading], options: TocOptions) -> Option<String> {
    let headings = match headings {
        [_, rest @ ..] if options.skip_first => rest,
        all => all,
    };

    let min_level = headings.iter().map(|h| h.level).min()?;
    let max_level = options.effective_max_level();

    let mut anchor_counts: HashMap<String, usize> = HashMap::new();
    let mut lines = Vec::new();

    for heading in headings.iter().filter(|h| h.level <= max_level) {
        let indent = "  ".repeat(usize::from(heading.level - min_level));
        let anchor = unique_anchor(&mut anchor_counts, slugify(&heading.text));
        lines.push(format!("{indent}- [{}](#{anchor})", heading.text));
    }

    tracing::debug!(
        entries = lines.len(),
        skipped = headings.len() - lines.len(),
        "Rendered table of contents"
    );

    Some(lines.join("\n"))
}

/// First occurrence keeps the slug, repeats get the occurrence count appended.
fn unique_anchor(counts: &mut HashMap<String, usize>, slug: String) -> String {
    if let Some(count) = counts.get_mut(&slug) {
        *count += 1;
        format!("{slug}-{count}")
    } else {
        counts.insert(slug.clone(), 0);
        slug
    }
}
