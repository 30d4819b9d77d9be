/// The unconsumed remainder of an inline run at the scan cursor.
///
/// Keeps the whole run as `context` so variants can look behind the cursor,
/// and the run's absolute `base` offset so positions map back to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Excerpt<'a> {
    context: &'a str,
    offset: usize,
    base: usize,
}

impl<'a> Excerpt<'a> {
    /// Starts at the beginning of `context`, which sits at byte `base` of the document.
    pub fn new(context: &'a str, base: usize) -> Self {
        Self {
            context,
            offset: 0,
            base,
        }
    }

    /// Text from the cursor to the end of the run.
    pub fn text(&self) -> &'a str {
        &self.context[self.offset..]
    }

    /// Text before the cursor.
    pub fn preceding_text(&self) -> &'a str {
        &self.context[..self.offset]
    }

    /// Cursor position relative to the start of the run.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Cursor position in the document.
    pub fn position(&self) -> usize {
        self.base + self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.offset >= self.context.len()
    }

    /// Moves the cursor forward by `n` bytes.
    ///
    /// Panics if that would land past the end of the run or inside a UTF-8
    /// sequence; both mean a variant reported a width it did not match.
    #[must_use]
    pub fn adding_to_offset(self, n: usize) -> Self {
        let offset = self.offset + n;
        assert!(
            self.context.is_char_boundary(offset),
            "cursor moved to invalid offset {offset} (run length {})",
            self.context.len()
        );
        Self { offset, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_remainder_from_cursor() {
        let ex = Excerpt::new("ab<c>", 10);
        assert_eq!(ex.text(), "ab<c>");
        assert_eq!(ex.position(), 10);

        let ex = ex.adding_to_offset(2);
        assert_eq!(ex.text(), "<c>");
        assert_eq!(ex.preceding_text(), "ab");
        assert_eq!(ex.offset(), 2);
        assert_eq!(ex.position(), 12);
    }

    #[test]
    fn empty_at_end() {
        let ex = Excerpt::new("ab", 0).adding_to_offset(2);
        assert!(ex.is_empty());
        assert_eq!(ex.text(), "");
    }

    #[test]
    #[should_panic(expected = "invalid offset")]
    fn refuses_to_split_a_character() {
        let _ = Excerpt::new("é", 0).adding_to_offset(1);
    }

    #[test]
    #[should_panic(expected = "invalid offset")]
    fn refuses_to_pass_the_end() {
        let _ = Excerpt::new("ab", 0).adding_to_offset(3);
    }
}
