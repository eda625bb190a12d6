use super::span::Span;

/// A chunk produced by the splitting phase, with byte spans into the input.
///
/// Every byte of the input belongs to exactly one node, and nodes appear in
/// source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkNode {
    /// A maximal run of text that is not part of a link.
    Text(Span),
    /// A complete `[text](href)` candidate.
    Link {
        /// Full span including brackets and parentheses.
        full: Span,
        /// Span of the label between `[` and `]`.
        text: Span,
        /// Span of the href between `(` and `)`.
        href: Span,
    },
}

impl LinkNode {
    /// Extracts the full span from any variant.
    pub fn span(&self) -> Span {
        match self {
            LinkNode::Text(sp) => *sp,
            LinkNode::Link { full, .. } => *full,
        }
    }
}
