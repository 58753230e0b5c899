use std::fmt;

/// A coarse structural classification of a wildcard pattern.
///
/// The score is computed by an ordered rule list where the first matching rule wins.
/// The rules overlap, so the classification must not be restructured into
/// independent predicates:
///
/// 1. no `*` and no `?` - [`Complexity::Literal`]
/// 2. does not start with `*` and contains no `?` - [`Complexity::Star`]
/// 3. does not start with `*` - [`Complexity::Question`]
/// 4. contains both `*` and `?` - [`Complexity::Mixed`]
/// 5. anything else - [`Complexity::Leading`]
///
/// # Examples
///
/// ```
/// use wildcard::Complexity;
///
/// assert_eq!(Complexity::of("abc").score(), 0);
/// assert_eq!(Complexity::of("abc*").score(), 1);
/// assert_eq!(Complexity::of("t?st").score(), 2);
/// assert_eq!(Complexity::of("*xyz").score(), 3);
/// assert_eq!(Complexity::of("*x?z").score(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Complexity {
    /// Pure literal, no wildcards at all.
    #[default]
    Literal = 0,
    /// Only `*` wildcards, not in leading position.
    Star = 1,
    /// Contains `?`, does not start with `*`.
    Question = 2,
    /// Starts with `*`, does not mix both wildcard kinds.
    Leading = 3,
    /// Starts with `*` and contains `?`.
    Mixed = 4,
}

impl Complexity {
    /// Classifies the given raw pattern.
    pub fn of(pattern: &str) -> Self {
        RULES
            .iter()
            .find(|(rule, _)| rule(pattern))
            .map(|&(_, complexity)| complexity)
            .unwrap_or(Self::Leading)
    }

    /// Returns the numeric score, from 0 to 4.
    #[inline]
    pub fn score(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.score())
    }
}

// ---

type Rule = fn(&str) -> bool;

const RULES: &[(Rule, Complexity)] = &[
    (is_literal, Complexity::Literal),
    (is_star_only, Complexity::Star),
    (is_unanchored, Complexity::Question),
    (is_mixed, Complexity::Mixed),
];

fn has_star(pattern: &str) -> bool {
    pattern.contains('*')
}

fn has_question(pattern: &str) -> bool {
    pattern.contains('?')
}

fn is_literal(pattern: &str) -> bool {
    !has_star(pattern) && !has_question(pattern)
}

fn is_star_only(pattern: &str) -> bool {
    !pattern.starts_with('*') && !has_question(pattern)
}

fn is_unanchored(pattern: &str) -> bool {
    !pattern.starts_with('*')
}

fn is_mixed(pattern: &str) -> bool {
    has_star(pattern) && has_question(pattern)
}
