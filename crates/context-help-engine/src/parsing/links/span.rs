/// A byte range `[start, end)` into the segmented input.
///
/// Link nodes store spans rather than copied text so the splitting phase never
/// allocates; slicing the input with a span reproduces the exact source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Borrows the text this span covers.
    ///
    /// Spans produced by the link parser always fall on ASCII delimiters or
    /// the ends of the input, so they are valid char boundaries.
    #[must_use]
    pub fn slice(self, s: &str) -> &str {
        &s[self.start..self.end]
    }
}
