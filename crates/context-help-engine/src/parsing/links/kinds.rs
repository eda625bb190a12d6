/// Delimiters of a markdown inline link `[text](href)`.
///
/// The parser refers to these constants; it never hardcodes the bytes.
pub struct MarkdownLink;

impl MarkdownLink {
    pub const OPEN_TEXT: u8 = b'[';
    pub const CLOSE_TEXT: u8 = b']';
    pub const OPEN_HREF: u8 = b'(';
    pub const CLOSE_HREF: u8 = b')';
}
