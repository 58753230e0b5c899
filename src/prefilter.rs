// std imports
use std::collections::HashSet;

// ---

/// Set of all contiguous substrings of a candidate that are at least [`Substrings::MIN_LEN`]
/// characters long.
///
/// It is a necessary condition check only: a pattern can match the candidate only if every
/// literal segment of the pattern is a member of the set. Ordering and spacing of segments
/// are ignored, and single-character segments are never members.
#[derive(Debug, Default)]
pub struct Substrings<'a> {
    set: HashSet<&'a str>,
}

impl<'a> Substrings<'a> {
    /// Minimum substring length in characters.
    pub const MIN_LEN: usize = 2;

    pub fn new(text: &'a str) -> Self {
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();

        let mut set = HashSet::new();
        for (i, &start) in bounds.iter().enumerate() {
            for &end in bounds.iter().skip(i + Self::MIN_LEN) {
                set.insert(&text[start..end]);
            }
        }

        Self { set }
    }

    #[inline]
    pub fn contains(&self, s: &str) -> bool {
        self.set.contains(s)
    }

    /// Returns true if every one of the given literal segments is a member of the set.
    #[inline]
    pub fn admits<S: AsRef<str>>(&self, literals: &[S]) -> bool {
        literals.iter().all(|literal| self.contains(literal.as_ref()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
