// crates/nuggetcut-ui/src/helpers/format.rs
//
// UI-layer string utilities that don't belong in nuggetcut-core.
// Time formatting lives in nuggetcut_core::helpers::time — use those for
// anything involving seconds.

/// Truncate `s` to at most `max` bytes without splitting a codepoint.
///
/// Used by the library cards to keep clip titles from overflowing their
/// fixed-width rows. `max` is a byte count; for ASCII titles (the common
/// case) that equals the character count.
pub fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    s.char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= max)
        .last()
        .map(|i| &s[..i])
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_is_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn long_ascii_is_clipped() {
        assert_eq!(truncate("hello world", 5), "hello");
    }

    #[test]
    fn empty_input() {
        assert_eq!(truncate("", 5), "");
    }

    #[test]
    fn multibyte_does_not_split_codepoint() {
        // "é" is two bytes. max=1 must not split it.
        let t = truncate("élan", 1);
        assert!(std::str::from_utf8(t.as_bytes()).is_ok());
        assert!(t.is_empty() || t == "é");
    }
}
