// std imports
use std::path::PathBuf;

// local imports
use crate::{
    error::Result,
    settings::{Settings, Source, SourceFile},
};

// ---

pub const APP_NAME: &str = "wildrank";

/// Returns the path of the default user configuration file, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.yaml"))
}

/// Creates a loader for settings layered from the given configuration files.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    Loader {
        paths: paths.into_iter().map(Into::into).collect(),
        no_default: false,
    }
}

// ---

#[derive(Debug, Clone)]
pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    /// Skips the default user configuration file.
    pub fn no_default(self, no_default: bool) -> Self {
        Self { no_default, ..self }
    }

    pub fn load(self) -> Result<Settings> {
        Settings::load(self.sources())
    }

    fn sources(self) -> Vec<Source> {
        let default = if self.no_default { None } else { default_path() };

        default
            .map(|path| SourceFile::new(path).required(false))
            .into_iter()
            .chain(self.paths.into_iter().map(SourceFile::new))
            .map(Source::from)
            .collect()
    }
}
