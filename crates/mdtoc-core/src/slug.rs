//! GitHub-style anchor slugs for heading text.

use std::sync::LazyLock;

use regex::Regex;

static HTML_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<!--.*?-->").unwrap());

static CODE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

static DISALLOWED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s-]").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static HYPHENS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Convert heading text to an anchor slug.
///
/// Drops single-line HTML comments and code span backticks, lowercases ASCII
/// letters, removes everything except letters (`\p{L}`), numbers (`\p{N}`),
/// underscores, whitespace and hyphens, then turns whitespace runs into
/// single hyphens. Non-ASCII letters keep their case; combining marks are
/// dropped.
///
/// The result may be empty. Different texts may share a slug; callers
/// disambiguate duplicates.
///
/// # Examples
///
/// ```
/// use mdtoc_core::slugify;
///
/// assert_eq!(slugify("B (deep)"), "b-deep");
/// assert_eq!(slugify("Install `cargo`"), "install-cargo");
/// assert_eq!(slugify("???"), "");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let text = HTML_COMMENT_RE.replace_all(text, "");
    let text = CODE_SPAN_RE.replace_all(&text, "$1");
    let lowered = text.to_ascii_lowercase();
    let slug = DISALLOWED_RE.replace_all(&lowered, "");
    let slug = WHITESPACE_RE.replace_all(&slug, "-");
    let slug = HYPHENS_RE.replace_all(&slug, "-");
    slug.trim_matches('-').to_owned()
}
