//! Configuration file support
//!
//! Any `serde` type with a `Default` can be read from or written to a `.toml`
//! or `.ron` file through the [`Config`] trait.

use std::path::{Path, PathBuf};

pub use serde::{Deserialize, Serialize};

/// On-disk configuration formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl ConfigFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// File-backed configuration
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load from `path`; sections and fields missing from the file keep their defaults
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = match format {
            ConfigFormat::Toml => toml::from_str(&contents).map_err(|e| e.to_string()),
            ConfigFormat::Ron => ron::from_str(&contents).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Load from `path` if the file exists, otherwise use the defaults
    ///
    /// A file that exists but does not parse is still an error.
    fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            log::debug!("{} not found, using default configuration", path.display());
            Ok(Self::default())
        }
    }

    /// Write to `path`, replacing any existing file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| e.to_string()),
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| e.to_string()),
        }
        .map_err(ConfigError::Serialize)?;

        std::fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The file could not be read or written
    #[error("Cannot access {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file is not valid for its format
    #[error("Cannot parse {}: {message}", path.display())]
    Parse {
        /// File involved
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// The value could not be encoded
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// The extension is neither `.toml` nor `.ron`
    #[error("Unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// A value was parsed but is not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
