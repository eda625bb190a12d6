use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parsing::{LinkNode, parse_links};

/// One unit of help content ready for rendering.
///
/// Serializes as `{ "kind": "text", "value": .. }` or
/// `{ "kind": "link", "text": .., "href": .. }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    /// Literal text containing no link.
    Text { value: String },
    /// A link; `href` is copied verbatim and never validated.
    Link { text: String, href: String },
}

impl Segment {
    pub fn text(value: impl Into<String>) -> Self {
        Segment::Text {
            value: value.into(),
        }
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Segment::Link {
            text: text.into(),
            href: href.into(),
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Segment::Link { .. })
    }

    /// The text a reader sees: the value of a text run or the label of a link.
    pub fn display_text(&self) -> &str {
        match self {
            Segment::Text { value } => value,
            Segment::Link { text, .. } => text,
        }
    }
}

/// Writes the segment back in its source form.
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Text { value } => f.write_str(value),
            Segment::Link { text, href } => write!(f, "[{text}]({href})"),
        }
    }
}

/// Whether `[text](href)` syntax is recognised in help content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkParsing {
    #[default]
    Enabled,
    /// Keep the whole input as one text segment.
    Disabled,
}

impl From<bool> for LinkParsing {
    fn from(parse_links: bool) -> Self {
        if parse_links {
            LinkParsing::Enabled
        } else {
            LinkParsing::Disabled
        }
    }
}

/// Splits `input` into text runs and links.
///
/// Never fails. Empty input gives an empty vector and input without links
/// gives a single [`Segment::Text`]. A `[` that does not open a complete
/// `[text](href)` is kept as ordinary text, so rendering the result with
/// [`to_markdown`] always reproduces `input` exactly.
///
/// ```
/// use context_help_engine::{Segment, segment};
///
/// assert_eq!(
///     segment("See [docs](https://example.com) first"),
///     vec![
///         Segment::text("See "),
///         Segment::link("docs", "https://example.com"),
///         Segment::text(" first"),
///     ]
/// );
/// ```
pub fn segment(input: &str) -> Vec<Segment> {
    parse_links(input)
        .into_iter()
        .map(|node| match node {
            LinkNode::Text(sp) => Segment::text(sp.slice(input)),
            LinkNode::Link { text, href, .. } => {
                Segment::link(text.slice(input), href.slice(input))
            }
        })
        .collect()
}

/// [`segment`] with link recognition switchable off.
pub fn segment_with(input: &str, parsing: LinkParsing) -> Vec<Segment> {
    match parsing {
        LinkParsing::Enabled => segment(input),
        LinkParsing::Disabled if input.is_empty() => vec![],
        LinkParsing::Disabled => vec![Segment::text(input)],
    }
}

/// Concatenates segments back into markdown source.
pub fn to_markdown(segments: &[Segment]) -> String {
    segments.iter().map(ToString::to_string).collect()
}
