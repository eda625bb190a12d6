/// A forward-only byte cursor over the text being segmented.
///
/// All delimiters the link parser looks for are ASCII, so stepping byte by
/// byte never lands a span boundary inside a multi-byte character.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes, stopping at EOF.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.s.len());
    }

    /// Consumes `b` if it is the current byte.
    pub fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.i += 1;
            true
        } else {
            false
        }
    }

    /// Advances to the next occurrence of `b` without consuming it.
    ///
    /// Returns false and leaves the cursor at EOF when `b` does not occur in
    /// the rest of the input.
    pub fn skip_until(&mut self, b: u8) -> bool {
        match self.s.as_bytes()[self.i.min(self.s.len())..]
            .iter()
            .position(|&c| c == b)
        {
            Some(offset) => {
                self.i += offset;
                true
            }
            None => {
                self.i = self.s.len();
                false
            }
        }
    }
}
