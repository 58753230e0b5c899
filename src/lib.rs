// public modules
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod prefilter;
pub mod settings;
pub mod store;

// public uses
pub use app::{App, Options};
pub use settings::Settings;
pub use store::{PatternStore, Record, Stats};
pub use wildcard::{Complexity, Pattern};
