//! Code fence and indented code tracking for heading scans.
//!
//! Lines inside fenced code blocks (and lines that look like indented code)
//! must never be mistaken for headings. The classification is line-local:
//! only the currently open fence marker is remembered.

/// Delimiter that opened a fenced code block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FenceMarker {
    /// Opened with three backticks.
    Backticks,
    /// Opened with three tildes.
    Tildes,
}

impl FenceMarker {
    /// Detect a fence delimiter at the start of an already trimmed line.
    fn detect(trimmed: &str) -> Option<Self> {
        if trimmed.starts_with("```") {
            Some(Self::Backticks)
        } else if trimmed.starts_with("~~~") {
            Some(Self::Tildes)
        } else {
            None
        }
    }
}

/// Fence state carried from one line to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FenceState {
    /// Regular markdown.
    #[default]
    Normal,
    /// Inside a fenced code block opened by the given marker.
    InFence(FenceMarker),
}

impl FenceState {
    /// Advance the state by one line.
    ///
    /// Returns the new state and whether the line itself is a fence delimiter.
    /// A delimiter of the other kind inside an open fence is plain content.
    #[must_use]
    pub fn advance(self, line: &str) -> (Self, bool) {
        let Some(marker) = FenceMarker::detect(line.trim()) else {
            return (self, false);
        };

        match self {
            Self::Normal => (Self::InFence(marker), true),
            Self::InFence(open) if open == marker => (Self::Normal, true),
            Self::InFence(_) => (self, false),
        }
    }

    /// Check if currently inside a fenced code block.
    #[must_use]
    pub fn in_fence(self) -> bool {
        matches!(self, Self::InFence(_))
    }
}

/// How a single line was classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// Opening or closing fence delimiter.
    FenceDelimiter,
    /// Content inside a fenced code block.
    Fenced,
    /// Starts with four spaces or a tab.
    IndentedCode,
    /// Anything else; the only kind that may hold a heading.
    Text,
}

/// Classifies document lines in order, tracking fence state.
#[derive(Debug, Default)]
pub struct LineClassifier {
    state: FenceState,
}

impl LineClassifier {
    /// Create a classifier in the [`FenceState::Normal`] state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current fence state.
    pub fn state(&self) -> FenceState {
        self.state
    }

    /// Classify the next line of the document.
    pub fn classify(&mut self, line: &str) -> LineKind {
        let (state, is_delimiter) = self.state.advance(line);
        self.state = state;

        if is_delimiter {
            LineKind::FenceDelimiter
        } else if state.in_fence() {
            LineKind::Fenced
        } else if is_indented_code(line) {
            LineKind::IndentedCode
        } else {
            LineKind::Text
        }
    }
}

/// Indented code heuristic. Does not look at the previous line.
fn is_indented_code(line: &str) -> bool {
    line.starts_with("    ") || line.starts_with('\t')
}
