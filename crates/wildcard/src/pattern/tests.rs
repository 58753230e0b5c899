use rstest::rstest;

use super::*;

fn pattern(s: &str) -> Pattern {
    Pattern::new(s)
}

fn matches(pattern: &str, text: &str) -> bool {
    Pattern::new(pattern).matches(text)
}

fn includes(p1: &str, p2: &str) -> bool {
    pattern(p1).includes(&pattern(p2))
}

#[rstest]
#[case("abc*def?ghi", &["abc", "def", "ghi"])]
#[case("hello", &["hello"])]
#[case("*xyz", &["xyz"])]
#[case("t?st", &["t", "st"])]
#[case("a**b??c", &["a", "b", "c"])]
#[case("**", &[])]
#[case("?", &[])]
#[case("", &[])]
#[case("世*界", &["世", "界"])]
fn test_decompose(#[case] raw: &str, #[case] expected: &[&str]) {
    assert_eq!(decompose(raw), expected);
    assert_eq!(pattern(raw).literals(), expected);
}

#[test]
fn test_pattern_keeps_raw_text() {
    let p = pattern("abc*def");
    assert_eq!(p.as_str(), "abc*def");
    assert_eq!(p.to_string(), "abc*def");
    assert_eq!(p.complexity(), Complexity::Star);
    assert_eq!(Pattern::from("abc*def"), p);
    assert_eq!(Pattern::from(String::from("abc*def")), p);
}

#[test]
fn test_default_pattern() {
    let p = Pattern::default();
    assert_eq!(p, pattern(""));
    assert!(p.matches(""));
    assert!(!p.matches("a"));
}

#[rstest]
#[case("hello", "hello", true)]
#[case("hello", "world", false)]
#[case("hello", "hell", false)]
#[case("hello", "helloo", false)]
fn test_exact_match(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("*", "")]
#[case("*", "anything")]
#[case("*", "multiple words")]
fn test_asterisk_match_any(#[case] pattern: &str, #[case] text: &str) {
    assert!(matches(pattern, text));
}

#[rstest]
#[case("*world", "world", true)]
#[case("*world", "hello world", true)]
#[case("*world", "xxxworld", true)]
#[case("*world", "world!", false)]
#[case("*world", "wor", false)]
fn test_asterisk_prefix(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("abc*", "abc", true)]
#[case("abc*", "abcdef", true)]
#[case("abc*", "abc def", true)]
#[case("abc*", "ab", false)]
#[case("abc*", "xabc", false)]
#[case("abc*", "", false)]
fn test_asterisk_suffix(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("foo*bar", "foobar", true)]
#[case("foo*bar", "fooxbar", true)]
#[case("foo*bar", "foo and bar", true)]
#[case("foo*bar", "foobarx", false)]
#[case("foo*bar", "xfoobar", false)]
#[case("foo*bar", "foo", false)]
fn test_asterisk_middle(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("*foo*bar*", "foobar", true)]
#[case("*foo*bar*", "xxxfooxbarxxx", true)]
#[case("*foo*bar*", "foo", false)]
#[case("*foo*bar*", "barfoo", false)]
fn test_multiple_asterisks(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("?", "a", true)]
#[case("?", "", false)]
#[case("?", "ab", false)]
#[case("123?", "1234", true)]
#[case("123?", "123", false)]
#[case("123?", "12345", false)]
#[case("t?st", "tast", true)]
#[case("t?st", "test", true)]
#[case("t?st", "tst", false)]
fn test_question_mark(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("a*b?c", "abXc", true)]
#[case("a*b?c", "aXbYc", true)]
#[case("a*b?c", "abc", false)]
#[case("a*b?c", "abYYc", false)]
#[case("a??*b", "aXXb", true)]
#[case("a??*b", "aXXYZb", true)]
#[case("a??*b", "aXb", false)]
fn test_mixed_wildcards(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("", "", true)]
#[case("", "anything", false)]
fn test_empty_pattern(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("?", "ä")]
#[case("?", "世")]
#[case("?", "🔥")]
#[case("???", "äöü")]
#[case("*世界*", "hello世界world")]
#[case("🔥*💧", "🔥test💧")]
#[case("a*ö*z", "aäöüz")]
fn test_utf8(#[case] pattern: &str, #[case] text: &str) {
    assert!(matches(pattern, text));
}

#[test]
fn test_greedy_commitment() {
    // The first occurrence of the literal after `*` is taken and never revisited.
    assert!(!matches("*ab", "abab"));
    assert!(!matches("*.txt", "a.txt.txt"));
    assert!(!matches("*a?c", "abaxc"));
    assert!(!matches("x*yz", "xyzyz"));

    assert!(matches("*ab", "xab"));
    assert!(matches("*a?c", "xabc"));
    assert!(matches("a*a", "aba"));
}

#[test]
fn test_asterisk_before_wildcard_accepts_rest() {
    assert!(matches("*?", ""));
    assert!(matches("a*?", "a"));
    assert!(matches("?*?", "a"));
    assert!(matches("a**b", "aXY"));
    assert!(!matches("?*?", ""));
}

#[test]
fn test_trailing_asterisk() {
    assert!(matches("a?*", "ab"));
    assert!(matches("a?*", "abcd"));
    assert!(!matches("a?*", "a"));
    assert!(matches("**", ""));
}

#[rstest]
#[case("abc*", "abc*def*ghi", true)]
#[case("abc*", "abcdef", true)]
#[case("*", "anything", true)]
#[case("*", "*", false)]
#[case("abc*", "abc*", false)]
#[case("abc*", "test*", false)]
#[case("abcdef", "abc*", false)]
#[case("test*data", "test*", false)]
#[case("test*", "t?st", false)]
#[case("123?", "*xyz", false)]
fn test_includes(#[case] p1: &str, #[case] p2: &str, #[case] expected: bool) {
    assert_eq!(includes(p1, p2), expected);
}

#[test]
fn test_includes_by_remainder() {
    // Literal prefix matches and the remainder after the length of `p1` starts with a wildcard.
    assert!(includes("ab", "ab*"));
    assert!(includes("ab", "ab?"));
    assert!(includes("a*c", "a*c?e"));
    assert!(!includes("a*c", "a*cde"));
}

#[test]
fn test_includes_offset_past_end() {
    assert!(!includes("abc?", "abc"));
    assert!(!includes("ab?d", "ab"));
}

#[test]
fn test_includes_uses_character_offsets() {
    assert!(includes("ä", "ä*"));
    assert!(!includes("äb", "äbc"));
}
