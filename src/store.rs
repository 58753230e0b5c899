// std imports
use std::cmp::Ordering;

// third-party imports
use serde::Serialize;
use wildcard::{Complexity, Pattern};

// local imports
use crate::prefilter::Substrings;

// ---

/// Adaptive collection of wildcard patterns.
///
/// The store is built once from raw pattern strings, dropping exact duplicates and patterns
/// made redundant by a simpler one. Each call to [`PatternStore::matches`] reorders the
/// patterns so that the ones that matched most often, and then the structurally simplest
/// ones, are tried first, and updates the statistics of every pattern it evaluates.
///
/// # Examples
///
/// ```
/// use wildrank::PatternStore;
///
/// let mut store = PatternStore::new(["abc*", "abc*def", "*xyz"]);
/// assert_eq!(store.len(), 2);
/// assert!(store.matches("abcdef"));
/// assert!(!store.matches("xyzabc"));
/// ```
#[derive(Debug, Default)]
pub struct PatternStore {
    records: Vec<Record>,
    queries: u64,
}

impl PatternStore {
    /// Builds a store from the given raw patterns.
    ///
    /// Candidates are processed in ascending order of complexity, keeping input order for
    /// equal complexity. A candidate is dropped if it repeats an already kept pattern or if
    /// any already kept pattern [includes](Pattern::includes) it.
    pub fn new<I>(patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut candidates: Vec<Pattern> = patterns.into_iter().map(Pattern::new).collect();
        candidates.sort_by_key(|pattern| pattern.complexity());

        let mut records: Vec<Record> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if records.iter().any(|record| record.pattern == candidate) {
                log::debug!("dropping duplicate pattern {:?}", candidate.as_str());
                continue;
            }
            if let Some(record) = records.iter().find(|record| record.pattern.includes(&candidate)) {
                log::debug!(
                    "dropping pattern {:?} included by {:?}",
                    candidate.as_str(),
                    record.pattern.as_str()
                );
                continue;
            }
            log::debug!(
                "keeping pattern {:?} with complexity {}",
                candidate.as_str(),
                candidate.complexity()
            );
            records.push(Record::new(candidate));
        }

        Self { records, queries: 0 }
    }

    /// Tests whether the candidate matches at least one pattern in the store.
    ///
    /// This is not a read-only query. The patterns are reordered by descending match
    /// frequency and then by ascending complexity, and evaluated in that order until the
    /// first match. Every evaluated pattern gets its evaluation count incremented, and the
    /// matching one, if any, gets its match count incremented. Patterns after the first
    /// match are not evaluated.
    pub fn matches(&mut self, candidate: &str) -> bool {
        let substrings = Substrings::new(candidate);
        self.queries += 1;
        self.reorder();

        for record in &mut self.records {
            record.stats.evaluations += 1;
            if !substrings.admits(record.pattern.literals()) {
                log::trace!("pattern {:?} rejected by pre-filter", record.pattern.as_str());
                continue;
            }
            if record.pattern.matches(candidate) {
                record.stats.matches += 1;
                log::trace!("pattern {:?} matched {:?}", record.pattern.as_str(), candidate);
                return true;
            }
        }

        false
    }

    /// Returns the records in the order used by the most recent matching pass.
    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of matching passes served so far.
    #[inline]
    pub fn queries(&self) -> u64 {
        self.queries
    }

    /// Returns a serializable view of the current statistics.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            queries: self.queries,
            patterns: self.records.iter().map(RecordSnapshot::from).collect(),
        }
    }

    fn reorder(&mut self) {
        self.records.sort_by(Record::priority);
    }
}

impl<S: Into<String>> FromIterator<S> for PatternStore {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

// ---

/// A pattern owned by a [`PatternStore`] together with its running statistics.
#[derive(Debug, Clone)]
pub struct Record {
    pattern: Pattern,
    stats: Stats,
}

impl Record {
    fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            stats: Stats::default(),
        }
    }

    #[inline]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[inline]
    pub fn complexity(&self) -> Complexity {
        self.pattern.complexity()
    }

    #[inline]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    fn priority(a: &Self, b: &Self) -> Ordering {
        b.stats
            .frequency()
            .total_cmp(&a.stats.frequency())
            .then_with(|| a.complexity().cmp(&b.complexity()))
    }
}

// ---

/// Running statistics of a single pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Number of successful matches.
    pub matches: u64,
    /// Number of times the pattern was evaluated.
    pub evaluations: u64,
}

impl Stats {
    /// Ratio of matches to evaluations, or zero if the pattern was never evaluated.
    #[inline]
    pub fn frequency(&self) -> f64 {
        if self.evaluations == 0 {
            0.0
        } else {
            self.matches as f64 / self.evaluations as f64
        }
    }
}

// ---

#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub queries: u64,
    pub patterns: Vec<RecordSnapshot<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RecordSnapshot<'a> {
    pub pattern: &'a str,
    pub complexity: u8,
    #[serde(flatten)]
    pub stats: Stats,
    pub frequency: f64,
}

impl<'a> From<&'a Record> for RecordSnapshot<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            pattern: record.pattern.as_str(),
            complexity: record.complexity().score(),
            stats: record.stats,
            frequency: record.stats.frequency(),
        }
    }
}
