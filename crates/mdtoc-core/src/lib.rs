//! Markdown table of contents generation.
//!
//! The pipeline runs over plain text, one line at a time:
//!
//! 1. [`extract_headings`] finds ATX headings, skipping fenced and indented
//!    code (see [`LineClassifier`]).
//! 2. [`render_toc`] turns them into a nested list of links, using
//!    [`slugify`] for anchors.
//! 3. [`inject_toc`] places the list between [`TOC_START_MARKER`] and
//!    [`TOC_END_MARKER`] after the first heading, replacing any previous
//!    block.
//!
//! Every call is independent; nothing is cached between documents.
//!
//! # Example
//!
//! ```
//! use mdtoc_core::{TocOptions, update_document};
//!
//! let doc = "# Guide\n\n## Install\n\n## Usage\n";
//! let updated = update_document(doc, TocOptions::default()).unwrap();
//!
//! assert_eq!(
//!     updated,
//!     "# Guide\n\n<!-- TOC -->\n- [Install](#install)\n- [Usage](#usage)\n<!-- /TOC -->\n\n## Install\n\n## Usage\n"
//! );
//! assert_eq!(update_document(&updated, TocOptions::default()).as_ref(), Some(&updated));
//! ```

mod fence;
mod heading;
mod inject;
mod render;
mod slug;

pub use fence::{FenceMarker, FenceState, LineClassifier, LineKind};
pub use heading::{Heading, extract_headings, parse_atx_heading};
pub use inject::{TOC_END_MARKER, TOC_START_MARKER, inject_toc};
pub use render::{TocOptions, render_toc};
pub use slug::slugify;

/// Regenerate the table of contents of a whole document.
///
/// Returns `None` when there is nothing to list: no headings, or every
/// heading was filtered out by `options`. The document should then be left
/// as it is.
#[must_use]
pub fn update_document(document: &str, options: TocOptions) -> Option<String> {
    let lines: Vec<&str> = document.split('\n').collect();
    let headings = extract_headings(&lines);
    let toc = render_toc(&headings, options).filter(|toc| !toc.is_empty())?;
    Some(inject_toc(document, &toc))
}
