//! Insertion and replacement of the marker-delimited TOC block.

use crate::heading::first_heading_index;

/// Line opening a generated table of contents.
pub const TOC_START_MARKER: &str = "<!-- TOC -->";

/// Line closing a generated table of contents.
pub const TOC_END_MARKER: &str = "<!-- /TOC -->";

/// Insert `toc_body` after the first heading, replacing any previous block.
///
/// The block goes right after the first heading line, preceded by one blank
/// line. Without a heading it is prepended to the document, followed by one
/// blank line. An existing block is removed first, together with the blank
/// separator line if it sits exactly where this function puts it, so running
/// again on the output gives the same text.
///
/// # Example
///
/// ```
/// use mdtoc_core::inject_toc;
///
/// let doc = "# Title\nIntro\n## Usage\n";
/// let out = inject_toc(doc, "- [Usage](#usage)");
///
/// assert_eq!(
///     out,
///     "# Title\n\n<!-- TOC -->\n- [Usage](#usage)\n<!-- /TOC -->\nIntro\n## Usage\n"
/// );
/// assert_eq!(inject_toc(&out, "- [Usage](#usage)"), out);
/// ```
#[must_use]
pub fn inject_toc(document: &str, toc_body: &str) -> String {
    let mut lines: Vec<&str> = document.split('\n').collect();
    let removed_at = remove_toc_block(&mut lines);

    if let Some(heading_idx) = first_heading_index(&lines) {
        let insert_at = heading_idx + 1;
        if removed_at == Some(insert_at + 1) && lines.get(insert_at) == Some(&"") {
            lines.remove(insert_at);
        }
        lines.splice(
            insert_at..insert_at,
            ["", TOC_START_MARKER, toc_body, TOC_END_MARKER],
        );
    } else {
        if removed_at == Some(0) && lines.first() == Some(&"") {
            lines.remove(0);
        }
        lines.splice(0..0, [TOC_START_MARKER, toc_body, TOC_END_MARKER, ""]);
    }

    lines.join("\n")
}

/// Remove the first complete marker block, markers included.
///
/// Returns the index where the block started. Nothing is removed when the
/// start marker has no matching end marker after it.
fn remove_toc_block(lines: &mut Vec<&str>) -> Option<usize> {
    let start = lines
        .iter()
        .position(|line| line.trim() == TOC_START_MARKER)?;
    let end = start
        + lines[start..]
            .iter()
            .position(|line| line.trim() == TOC_END_MARKER)?;

    lines.drain(start..=end);
    tracing::debug!(start, end, "Removed existing TOC block");
    Some(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BODY: &str = "- [A](#a)";

    #[test]
    fn test_insert_after_first_heading() {
        let doc = "# Title\n## A\n";
        assert_eq!(
            inject_toc(doc, BODY),
            "# Title\n\n<!-- TOC -->\n- [A](#a)\n<!-- /TOC -->\n## A\n"
        );
    }

    #[test]
    fn test_insert_preserves_surrounding_text() {
        let doc = "Preamble  \n\n# Title\n\nText with trailing space \n## A";
        assert_eq!(
            inject_toc(doc, BODY),
            "Preamble  \n\n# Title\n\n<!-- TOC -->\n- [A](#a)\n<!-- /TOC -->\n\nText with trailing space \n## A"
        );
    }

    #[test]
    fn test_prepend_without_heading() {
        let doc = "just text\nmore text";
        assert_eq!(
            inject_toc(doc, BODY),
            "<!-- TOC -->\n- [A](#a)\n<!-- /TOC -->\n\njust text\nmore text"
        );
    }

    #[test]
    fn test_prepend_is_idempotent() {
        let once = inject_toc("\ntext", BODY);
        assert_eq!(once, "<!-- TOC -->\n- [A](#a)\n<!-- /TOC -->\n\n\ntext");
        assert_eq!(inject_toc(&once, BODY), once);
    }

    #[test]
    fn test_replace_existing_block() {
        let doc = "# Title\n\n<!-- TOC -->\n- [Old](#old)\n<!-- /TOC -->\n\n## A\n";
        assert_eq!(
            inject_toc(doc, BODY),
            "# Title\n\n<!-- TOC -->\n- [A](#a)\n<!-- /TOC -->\n\n## A\n"
        );
    }

    #[test]
    fn test_reinject_is_idempotent() {
        let doc = "# Title\n\nIntro\n\n## A\n";
        let once = inject_toc(doc, BODY);
        let twice = inject_toc(&once, BODY);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_block_elsewhere_is_moved() {
        let doc = "# Title\nIntro\n\n<!-- TOC -->\n- stale\n<!-- /TOC -->\n## A";
        assert_eq!(
            inject_toc(doc, BODY),
            "# Title\n\n<!-- TOC -->\n- [A](#a)\n<!-- /TOC -->\nIntro\n\n## A"
        );
    }

    #[test]
    fn test_markers_matched_after_trim() {
        let doc = "# Title\n\n  <!-- TOC -->  \n- stale\n\t<!-- /TOC -->\n## A";
        assert_eq!(
            inject_toc(doc, BODY),
            "# Title\n\n<!-- TOC -->\n- [A](#a)\n<!-- /TOC -->\n## A"
        );
    }

    #[test]
    fn test_marker_case_must_match() {
        let doc = "# Title\n<!-- toc -->\n<!-- /toc -->";
        assert_eq!(
            inject_toc(doc, BODY),
            "# Title\n\n<!-- TOC -->\n- [A](#a)\n<!-- /TOC -->\n<!-- toc -->\n<!-- /toc -->"
        );
    }

    #[test]
    fn test_unclosed_start_marker_left_alone() {
        let doc = "# Title\n<!-- TOC -->\nkeep me";
        assert_eq!(
            inject_toc(doc, BODY),
            "# Title\n\n<!-- TOC -->\n- [A](#a)\n<!-- /TOC -->\n<!-- TOC -->\nkeep me"
        );
    }

    #[test]
    fn test_end_marker_before_start_is_ignored() {
        let doc = "<!-- /TOC -->\n# Title";
        assert_eq!(
            inject_toc(doc, BODY),
            "<!-- /TOC -->\n# Title\n\n<!-- TOC -->\n- [A](#a)\n<!-- /TOC -->"
        );
    }

    #[test]
    fn test_first_start_marker_wins() {
        let doc = "# Title\n<!-- TOC -->\nx\n<!-- TOC -->\ny\n<!-- /TOC -->\nz";
        assert_eq!(
            inject_toc(doc, BODY),
            "# Title\n\n<!-- TOC -->\n- [A](#a)\n<!-- /TOC -->\nz"
        );
    }

    #[test]
    fn test_fenced_heading_is_not_insertion_point() {
        let doc = "```\n# not a heading\n```\n    # indented\n# Real";
        assert_eq!(
            inject_toc(doc, BODY),
            "```\n# not a heading\n```\n    # indented\n# Real\n\n<!-- TOC -->\n- [A](#a)\n<!-- /TOC -->"
        );
    }

    #[test]
    fn test_remove_toc_block_reports_start() {
        let mut lines = vec!["a", "<!-- TOC -->", "b", "<!-- /TOC -->", "c"];
        assert_eq!(remove_toc_block(&mut lines), Some(1));
        assert_eq!(lines, vec!["a", "c"]);

        let mut untouched = vec!["a", "<!-- TOC -->", "b"];
        assert_eq!(remove_toc_block(&mut untouched), None);
        assert_eq!(untouched, vec!["a", "<!-- TOC -->", "b"]);
    }
}
