// std imports
use std::include_str;
use std::path::{Path, PathBuf};

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub patterns: Vec<String>,
    pub samples: Vec<String>,
    pub stats: bool,
}

impl Settings {
    /// Loads the built-in settings and applies the given sources on top of them, in order.
    ///
    /// Each source replaces the values of the keys it sets as a whole,
    /// lists are never merged element by element.
    pub fn load<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = Source>,
    {
        let mut settings = Self::builtin()?;
        for source in sources {
            log::debug!("loading settings from {:?}", source);
            settings.apply(source.read()?);
        }
        Ok(settings)
    }

    /// Returns the built-in settings.
    pub fn builtin() -> Result<Self> {
        Ok(Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml))
            .build()?
            .try_deserialize()?)
    }

    fn apply(&mut self, overlay: Overlay) {
        if let Some(patterns) = overlay.patterns {
            self.patterns = patterns;
        }
        if let Some(samples) = overlay.samples {
            self.samples = samples;
        }
        if let Some(stats) = overlay.stats {
            self.stats = stats;
        }
    }
}

// ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(SourceFile),
    String(String, FileFormat),
}

impl Source {
    fn read(self) -> Result<Overlay> {
        let builder = Config::builder();
        let builder = match self {
            Self::File(file) => builder.add_source(File::from(file.path.as_path()).required(file.required)),
            Self::String(text, format) => builder.add_source(File::from_str(&text, format)),
        };
        Ok(builder.build()?.try_deserialize()?)
    }
}

impl From<SourceFile> for Source {
    fn from(file: SourceFile) -> Self {
        Self::File(file)
    }
}

// ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    required: bool,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    pub fn required(self, required: bool) -> Self {
        Self { required, ..self }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

// ---

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct Overlay {
    patterns: Option<Vec<String>>,
    samples: Option<Vec<String>>,
    stats: Option<bool>,
}
