/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: u8 = b'>';

    /// Counts leading `>` markers, returning `(depth, content_offset)`.
    ///
    /// Each marker may be preceded by spaces and followed by one optional space,
    /// so `> text`, `>> nested` and `> > spaced` all qualify.
    pub fn strip_prefixes(line: &str) -> (u8, usize) {
        let b = line.as_bytes();
        let mut depth = 0u8;
        let mut consumed = 0usize;
        let mut i = 0usize;

        while i < b.len() {
            match b[i] {
                b' ' => i += 1,
                Self::PREFIX => {
                    depth = depth.saturating_add(1);
                    i += 1;
                    if b.get(i) == Some(&b' ') {
                        i += 1;
                    }
                    consumed = i;
                }
                _ => break,
            }
        }
        (depth, consumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hello", (0, 0))]
    #[case("> hello", (1, 2))]
    #[case("> > hello", (2, 4))]
    #[case(">> hello", (2, 3))]
    #[case(">", (1, 1))]
    #[case("   indented", (0, 0))]
    fn strips_markers(#[case] line: &str, #[case] expected: (u8, usize)) {
        assert_eq!(BlockQuote::strip_prefixes(line), expected);
    }
}
