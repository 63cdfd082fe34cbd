//! Tour configuration, loaded from TOML.
//!
//! ```toml
//! lessons = ["polymorphism", "lifecycle"]
//! color = false
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::lesson::Lesson;

pub const CONFIG_ENV: &str = "OBJECT_BASICS_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config must list at least one lesson")]
    NoLessons,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TourConfig {
    #[serde(default = "all_lessons")]
    pub lessons: Vec<Lesson>,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn all_lessons() -> Vec<Lesson> {
    Lesson::ALL.to_vec()
}

fn default_color() -> bool {
    true
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            lessons: all_lessons(),
            color: default_color(),
        }
    }
}

impl TourConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TourConfig = toml::from_str(content)?;
        config.validate()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// CLI path first, then `OBJECT_BASICS_CONFIG`, then defaults.
    pub fn resolve(cli_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = cli_path.or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));
        match path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading tour config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.lessons.is_empty() {
            return Err(ConfigError::NoLessons);
        }
        Ok(self)
    }
}
