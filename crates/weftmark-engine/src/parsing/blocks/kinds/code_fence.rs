/// Which character a fence is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// A line that looks like a fence: its kind, marker length, and info string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    pub len: usize,
    pub info: String,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: u8 = b'`';
    pub const TILDE: u8 = b'~';
    pub const MIN_LEN: usize = 3;
    pub const MAX_INDENT: usize = 3;

    /// Reads a fence signature from a line with its container prefixes removed.
    pub fn sig(remainder: &str) -> Option<FenceSig> {
        let t = remainder.trim_end_matches(['\r', '\n']);
        let indent = t.bytes().take_while(|&b| b == b' ').count();
        if indent > Self::MAX_INDENT {
            return None;
        }
        let t = &t[indent..];

        let (kind, marker) = match t.bytes().next()? {
            Self::BACKTICK => (FenceKind::Backticks, Self::BACKTICK),
            Self::TILDE => (FenceKind::Tildes, Self::TILDE),
            _ => return None,
        };
        let len = t.bytes().take_while(|&b| b == marker).count();
        if len < Self::MIN_LEN {
            return None;
        }

        let info = t[len..].trim();
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }

        Some(FenceSig {
            kind,
            len,
            info: info.to_string(),
        })
    }

    /// Whether `line` closes a fence opened by `open`: same marker, at least
    /// as long, and no info string.
    pub fn closes(open: &FenceSig, line: Option<&FenceSig>) -> bool {
        line.is_some_and(|l| l.kind == open.kind && l.len >= open.len && l.info.is_empty())
    }

    /// The first word of the info string, used as the language class.
    pub fn language(info: &str) -> Option<&str> {
        info.split_whitespace().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(kind: FenceKind, len: usize, info: &str) -> FenceSig {
        FenceSig {
            kind,
            len,
            info: info.to_string(),
        }
    }

    #[test]
    fn detect_backtick_fence_with_info() {
        assert_eq!(
            CodeFence::sig("```rust\n"),
            Some(sig(FenceKind::Backticks, 3, "rust"))
        );
    }

    #[test]
    fn detect_tilde_fence() {
        assert_eq!(CodeFence::sig("~~~~"), Some(sig(FenceKind::Tildes, 4, "")));
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello"), None);
        assert_eq!(CodeFence::sig("``"), None);
        assert_eq!(CodeFence::sig("    ```"), None);
        assert_eq!(CodeFence::sig("``` a`b"), None);
    }

    #[test]
    fn closes_with_matching_or_longer_fence() {
        let open = sig(FenceKind::Backticks, 3, "rust");
        assert!(CodeFence::closes(&open, Some(&sig(FenceKind::Backticks, 3, ""))));
        assert!(CodeFence::closes(&open, Some(&sig(FenceKind::Backticks, 5, ""))));
    }

    #[test]
    fn does_not_close_on_mismatch() {
        let open = sig(FenceKind::Backticks, 4, "");
        assert!(!CodeFence::closes(&open, None));
        assert!(!CodeFence::closes(&open, Some(&sig(FenceKind::Tildes, 4, ""))));
        assert!(!CodeFence::closes(&open, Some(&sig(FenceKind::Backticks, 3, ""))));
        assert!(!CodeFence::closes(&open, Some(&sig(FenceKind::Backticks, 4, "x"))));
    }

    #[test]
    fn language_is_first_info_word() {
        assert_eq!(CodeFence::language("rust ignore"), Some("rust"));
        assert_eq!(CodeFence::language(""), None);
    }
}
