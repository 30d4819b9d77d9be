/// A byte cursor used by inline variants to walk their grammar.
///
/// Every step is a forward move; variants never rewind past a decision
/// other than by restoring a saved copy, which keeps scanning linear.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Consumes `b` if it is next.
    pub fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.i += 1;
            true
        } else {
            false
        }
    }

    /// Consumes bytes while `pred` holds, returning how many were taken.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.i;
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.i += 1;
        }
        self.i - start
    }

    /// Consumes everything up to and including the next `b`.
    ///
    /// Leaves the cursor untouched and returns false if `b` never occurs.
    pub fn eat_through(&mut self, b: u8) -> bool {
        match self.s.as_bytes()[self.i.min(self.s.len())..]
            .iter()
            .position(|&c| c == b)
        {
            Some(at) => {
                self.i += at + 1;
                true
            }
            None => false,
        }
    }

    /// The consumed prefix of `s`.
    pub fn consumed(&self) -> &'a str {
        &self.s[..self.i]
    }
}
