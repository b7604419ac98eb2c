//! UTF-8–safe string truncation utilities.
//!
//! Rust `&str[..n]` panics when `n` falls inside a multi-byte character.
//! These helpers find the nearest char boundary so truncation never splits
//! a character, which keeps the shortened alert text valid UTF-8.

/// Truncate a string to at most `max_bytes` bytes at a char boundary.
///
/// Returns the longest prefix of `s` whose byte length is ≤ `max_bytes`
/// and that does not split a multi-byte character.
#[inline]
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    // `floor_char_boundary` is nightly-only, so implement it ourselves.
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Drop trailing characters from `s` until it is at most `max_bytes` long.
///
/// Whole characters are removed from the end, so the result is always a
/// character-wise prefix of the input. Returns the number of characters
/// removed.
pub fn shrink_to_bytes(s: &mut String, max_bytes: usize) -> usize {
    let keep = truncate_str(s, max_bytes).len();
    let removed = s[keep..].chars().count();
    s.truncate(keep);
    removed
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── truncate_str ─────────────────────────────────────────────────────

    #[test]
    fn ascii_within_limit() {
        assert_eq!(truncate_str("hello", 10), "hello");
    }

    #[test]
    fn ascii_exact_limit() {
        assert_eq!(truncate_str("hello", 5), "hello");
    }

    #[test]
    fn ascii_truncated() {
        assert_eq!(truncate_str("hello world", 5), "hello");
    }

    #[test]
    fn zero_max() {
        assert_eq!(truncate_str("hello", 0), "");
    }

    #[test]
    fn two_byte_char() {
        // 'é' is 2 bytes: c(0) a(1) f(2) é(3,4)
        let s = "café";
        assert_eq!(truncate_str(s, 3), "caf");
        assert_eq!(truncate_str(s, 4), "caf");
        assert_eq!(truncate_str(s, 5), "café");
    }

    #[test]
    fn emoji_4_byte() {
        // h(0) i(1) 🔔(2..6) b(6)
        let s = "hi🔔bye";
        assert_eq!(truncate_str(s, 3), "hi");
        assert_eq!(truncate_str(s, 5), "hi");
        assert_eq!(truncate_str(s, 6), "hi🔔");
    }

    // ── shrink_to_bytes ──────────────────────────────────────────────────

    #[test]
    fn shrink_noop_when_fits() {
        let mut s = "short".to_string();
        assert_eq!(shrink_to_bytes(&mut s, 10), 0);
        assert_eq!(s, "short");
    }

    #[test]
    fn shrink_ascii() {
        let mut s = "hello world".to_string();
        assert_eq!(shrink_to_bytes(&mut s, 5), 6);
        assert_eq!(s, "hello");
    }

    #[test]
    fn shrink_counts_characters_not_bytes() {
        // three 3-byte characters, budget of 4 keeps one
        let mut s = "日本語".to_string();
        assert_eq!(shrink_to_bytes(&mut s, 4), 2);
        assert_eq!(s, "日");
    }

    #[test]
    fn shrink_to_zero() {
        let mut s = "ñ".to_string();
        assert_eq!(shrink_to_bytes(&mut s, 1), 1);
        assert!(s.is_empty());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn shrink_yields_char_prefix(s in "\\PC{0,64}", max in 0usize..256) {
                let mut shrunk = s.clone();
                let removed = shrink_to_bytes(&mut shrunk, max);
                prop_assert!(shrunk.len() <= max || shrunk == s);
                prop_assert!(s.starts_with(shrunk.as_str()));
                prop_assert_eq!(shrunk.chars().count() + removed, s.chars().count());
            }

            #[test]
            fn truncate_is_longest_fitting_prefix(s in "\\PC{0,64}", max in 0usize..256) {
                let t = truncate_str(&s, max);
                prop_assert!(t.len() <= max || t.len() == s.len());
                if let Some(next) = s[t.len()..].chars().next() {
                    prop_assert!(t.len() + next.len_utf8() > max);
                }
            }
        }
    }
}
