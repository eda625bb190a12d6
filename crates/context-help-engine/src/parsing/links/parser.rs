use super::{cursor::Cursor, kinds::MarkdownLink, span::Span, types::LinkNode};

/// Remembers where the next occurrence of a closing delimiter is.
///
/// Searches only ever start further right than the previous one, so a found
/// position stays valid until the cursor passes it and a miss stays a miss.
/// Every byte is searched at most once per delimiter, which keeps the whole
/// scan linear however many `[` fail to become links.
struct NextDelimiter {
    byte: u8,
    /// Search start and result of the last lookup.
    last: Option<(usize, Option<usize>)>,
}

impl NextDelimiter {
    fn new(byte: u8) -> Self {
        Self { byte, last: None }
    }

    /// Position of the first `byte` at or after `from`.
    fn find_from(&mut self, s: &str, from: usize) -> Option<usize> {
        match self.last {
            Some((searched_from, None)) if from >= searched_from => return None,
            Some((searched_from, Some(found))) if from >= searched_from && found >= from => {
                return Some(found);
            }
            _ => {}
        }
        let found = s.as_bytes()[from.min(s.len())..]
            .iter()
            .position(|&c| c == self.byte)
            .map(|offset| from + offset);
        self.last = Some((from, found));
        found
    }
}

/// Closing delimiters shared by every link attempt in one scan.
struct Closers {
    text: NextDelimiter,
    href: NextDelimiter,
}

impl Closers {
    fn new() -> Self {
        Self {
            text: NextDelimiter::new(MarkdownLink::CLOSE_TEXT),
            href: NextDelimiter::new(MarkdownLink::CLOSE_HREF),
        }
    }
}

/// Splits `s` into text runs and `[text](href)` link candidates.
///
/// The scan is forward-only and linear in the input length. At each `[` a
/// link candidate is attempted; when it does not complete, the `[` is
/// ordinary text and stays in the current text run. Text between links is
/// emitted as a single `LinkNode::Text`, so two text nodes are never adjacent
/// and no text node is empty.
///
/// # Returns
/// Nodes covering the entire input in source order. Empty input yields an
/// empty vector.
pub fn parse_links(s: &str) -> Vec<LinkNode> {
    let mut cur = Cursor::new(s);
    let mut closers = Closers::new();
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<LinkNode>, start: usize, end: usize) {
        if end > start {
            out.push(LinkNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if let Some(node) = try_parse_link(&mut cur, &mut closers) {
            flush_text(&mut out, text_start, node.span().start);
            text_start = node.span().end;
            out.push(node);
            continue;
        }
        // Either a stray `[` or plain text: step over it, then jump to the
        // next place a link could start.
        cur.bump();
        cur.skip_until(MarkdownLink::OPEN_TEXT);
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse `[text](href)` starting at the current position.
///
/// The label runs to the first `]`, which must be followed immediately by
/// `(`; the href runs to the first `)`. Neither part may be escaped.
/// Returns `None` if not at `[` or if the candidate is incomplete. On failure,
/// cursor position is restored.
fn try_parse_link(cur: &mut Cursor<'_>, closers: &mut Closers) -> Option<LinkNode> {
    if cur.peek() != Some(MarkdownLink::OPEN_TEXT) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // [
    let text_start = cur.pos();

    let Some(text_end) = closers.text.find_from(cur.s, text_start) else {
        *cur = saved;
        return None;
    };
    cur.bump_n(text_end - text_start);
    cur.bump(); // ]

    if !cur.eat(MarkdownLink::OPEN_HREF) {
        *cur = saved;
        return None;
    }
    let href_start = cur.pos();

    let Some(href_end) = closers.href.find_from(cur.s, href_start) else {
        *cur = saved;
        return None;
    };
    cur.bump_n(href_end - href_start);
    cur.bump(); // )

    Some(LinkNode::Link {
        full: Span::new(start, cur.pos()),
        text: Span::new(text_start, text_end),
        href: Span::new(href_start, href_end),
    })
}
