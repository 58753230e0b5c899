// std imports
use std::io::Write;

// local imports
use crate::{error::*, store::PatternStore};

// ---

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Print the statistics snapshot after the results.
    pub stats: bool,
}

/// Runs candidates through a pattern store and reports the verdicts.
pub struct App {
    store: PatternStore,
    options: Options,
}

impl App {
    pub fn new(store: PatternStore, options: Options) -> Self {
        Self { store, options }
    }

    /// Matches each candidate in order, writing one line per candidate to the output.
    ///
    /// Returns the number of matching candidates.
    pub fn run<I, S, W>(&mut self, candidates: I, output: &mut W) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write,
    {
        let mut total = 0;
        let mut matched = 0;
        for candidate in candidates {
            let candidate = candidate.as_ref();
            let verdict = self.store.matches(candidate);
            writeln!(output, "'{}' matches: {}", candidate, verdict)?;
            total += 1;
            matched += verdict as usize;
        }
        log::debug!("{} of {} candidates matched", matched, total);

        if self.options.stats {
            json::to_writer_pretty(&mut *output, &self.store.snapshot())?;
            writeln!(output)?;
        }

        output.flush()?;
        Ok(matched)
    }

    pub fn store(&self) -> &PatternStore {
        &self.store
    }
}
