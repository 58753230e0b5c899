// third-party imports
use clap::Parser;

// ---

/// Adaptive wildcard matcher, tells whether each candidate matches at least one pattern.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Configuration file path, may be repeated; an empty value or '-' discards all configuration files given before it, including the default one.
    #[arg(long, value_name = "FILE", env = "WILDRANK_CONFIG", num_args = 1)]
    pub config: Vec<String>,

    /// Wildcard pattern, may be repeated; replaces the configured patterns.
    #[arg(short, long = "pattern", value_name = "PATTERN", num_args = 1)]
    pub patterns: Vec<String>,

    /// Read candidates from standard input, one per line.
    #[arg(short = 'i', long)]
    pub stdin: bool,

    /// Print pattern statistics in JSON format after the results.
    #[arg(short, long)]
    pub stats: bool,

    /// Candidates to match; the configured samples are used if none are given.
    #[arg(value_name = "CANDIDATE")]
    pub candidates: Vec<String>,
}

impl Opt {
    /// Returns the configuration files to load and whether the default one is discarded.
    pub fn configs(&self) -> (&[String], bool) {
        let (offset, no_default) = self
            .config
            .iter()
            .rposition(|x| x.is_empty() || x == "-")
            .map(|x| (x + 1, true))
            .unwrap_or_default();
        (&self.config[offset..], no_default)
    }
}
