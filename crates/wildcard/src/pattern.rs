use std::fmt;
use std::mem::take;

use memchr::{memchr2, memmem};

use crate::complexity::Complexity;
use crate::utf8::utf8_char_width;

/// A wildcard pattern for matching text strings.
///
/// Patterns are created from strings containing wildcard characters:
/// - `*` matches zero or more characters
/// - `?` matches exactly one UTF-8 character
///
/// The raw text is kept as is, along with its literal segments and complexity score,
/// both computed once at creation.
///
/// # Examples
///
/// ```
/// use wildcard::Pattern;
///
/// let pattern = Pattern::new("*.txt");
/// assert!(pattern.matches("readme.txt"));
/// assert!(!pattern.matches("readme.md"));
///
/// let pattern = Pattern::new("test?.log");
/// assert!(pattern.matches("test1.log"));
/// assert!(!pattern.matches("test.log"));
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Pattern {
    raw: String,
    literals: Vec<String>,
    complexity: Complexity,
}

impl Pattern {
    /// Creates a new pattern from a string.
    ///
    /// This function is infallible; all input strings are valid patterns,
    /// including the empty string and strings made of wildcards only.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let literals = decompose(&raw);
        let complexity = Complexity::of(&raw);
        Self {
            raw,
            literals,
            complexity,
        }
    }

    /// Returns the raw pattern text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the maximal wildcard-free runs of the pattern, in order.
    #[inline]
    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    #[inline]
    pub fn complexity(&self) -> Complexity {
        self.complexity
    }

    /// Tests whether the pattern matches the given text.
    ///
    /// The matcher walks the pattern and the text with two cursors and never backtracks.
    /// A `*` followed by a literal run is committed to the first occurrence of that run,
    /// and a `*` directly followed by another wildcard accepts the rest of the text.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("*.rs");
    /// assert!(pattern.matches("main.rs"));
    /// assert!(!pattern.matches("main.txt"));
    ///
    /// // UTF-8 character matching
    /// let pattern = Pattern::new("??");
    /// assert!(pattern.matches("ab"));
    /// assert!(pattern.matches("🦀🎉"));
    /// assert!(!pattern.matches("a"));
    /// ```
    pub fn matches(&self, text: &str) -> bool {
        let pattern = self.raw.as_bytes();
        let text = text.as_bytes();
        let mut p = 0;
        let mut t = 0;

        while p < pattern.len() {
            match pattern[p] {
                b'*' => {
                    p += 1;
                    if p == pattern.len() {
                        return true;
                    }
                    let literal = next_literal(&pattern[p..]);
                    if literal.is_empty() {
                        return true;
                    }
                    let Some(pos) = memmem::find(&text[t..], literal) else {
                        return false;
                    };
                    t += pos + literal.len();
                    p += literal.len();
                }
                b'?' => {
                    let Some(&b) = text.get(t) else {
                        return false;
                    };
                    t += utf8_char_width(b);
                    p += 1;
                }
                b => {
                    let width = utf8_char_width(b);
                    if !text[t..].starts_with(&pattern[p..p + width]) {
                        return false;
                    }
                    t += width;
                    p += width;
                }
            }
        }

        t == text.len() || self.raw.ends_with('*')
    }

    /// Tests whether this pattern makes the `other` pattern redundant.
    ///
    /// This is a heuristic, not language inclusion. It holds when:
    /// - this pattern ends with `*` and `other` starts with everything before that `*`, or
    /// - the literal segments of this pattern are a positional prefix of the literal segments
    ///   of `other`, and either this pattern ends with `*` or the text of `other` at the
    ///   character offset equal to the length of this pattern starts with a wildcard.
    ///
    /// A pattern never includes itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// assert!(Pattern::new("abc*").includes(&Pattern::new("abc*def*ghi")));
    /// assert!(!Pattern::new("abcdef").includes(&Pattern::new("abc*")));
    /// assert!(!Pattern::new("abc*").includes(&Pattern::new("abc*")));
    /// ```
    pub fn includes(&self, other: &Pattern) -> bool {
        if self.raw == other.raw {
            return false;
        }

        let open = self.raw.ends_with('*');
        if open && other.raw.starts_with(&self.raw[..self.raw.len() - 1]) {
            return true;
        }

        if self.literals.len() > other.literals.len() {
            return false;
        }
        if self.literals.iter().zip(&other.literals).any(|(a, b)| a != b) {
            return false;
        }

        let offset = self.raw.chars().count();
        open || matches!(other.raw.chars().nth(offset), Some('*' | '?'))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Pattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Pattern {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for Pattern {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

/// Splits a pattern into its maximal wildcard-free runs.
///
/// Wildcards are boundaries and never part of a segment, empty segments are never emitted.
///
/// # Examples
///
/// ```
/// use wildcard::decompose;
///
/// assert_eq!(decompose("abc*def?ghi"), ["abc", "def", "ghi"]);
/// assert!(decompose("**").is_empty());
/// ```
pub fn decompose(raw: &str) -> Vec<String> {
    Decomposer::new().decompose(raw)
}

#[inline]
fn next_literal(pattern: &[u8]) -> &[u8] {
    match memchr2(b'*', b'?', pattern) {
        Some(end) => &pattern[..end],
        None => pattern,
    }
}

#[derive(Default)]
struct Decomposer {
    literals: Vec<String>,
    next: String,
}

impl Decomposer {
    fn new() -> Self {
        Self::default()
    }

    fn flush(&mut self) {
        if !self.next.is_empty() {
            self.literals.push(take(&mut self.next));
        }
    }

    fn decompose(mut self, raw: &str) -> Vec<String> {
        for ch in raw.chars() {
            match ch {
                '*' | '?' => self.flush(),
                _ => self.next.push(ch),
            }
        }

        self.flush();
        self.literals
    }
}

#[cfg(test)]
mod tests;
