use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::config::Config;

const APP_DIR: &str = "checkmark";
const CONFIG_FILE: &str = "config.json";

/// Error type for loading and saving the task file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine the home directory")]
    NoHomeDir,
    #[error("could not create {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

impl ConfigError {
    /// True for failures that happen before the interactive session starts
    pub fn is_startup(&self) -> bool {
        !matches!(self, ConfigError::Serialize(_) | ConfigError::Write { .. })
    }
}

/// Location of the task file. Built once at startup and passed around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    dir: PathBuf,
    file: PathBuf,
}

impl ConfigStore {
    /// Store whose file is `config.json` inside `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let file = dir.join(CONFIG_FILE);
        ConfigStore { dir, file }
    }

    /// `~/.config/checkmark/config.json`
    pub fn default_location() -> Result<Self, ConfigError> {
        let home = home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(Self::new(home.join(".config").join(APP_DIR)))
    }

    pub fn path(&self) -> &Path {
        &self.file
    }

    /// Create the directory if needed and read the task file. A missing file
    /// is an empty list. The stored order is kept as-is.
    pub fn load(&self) -> Result<Config, ConfigError> {
        fs::create_dir_all(&self.dir).map_err(|e| ConfigError::CreateDir {
            path: self.dir.clone(),
            source: e,
        })?;

        let text = match fs::read_to_string(&self.file) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => {
                return Err(ConfigError::Read {
                    path: self.file.clone(),
                    source: e,
                });
            }
        };

        serde_json::from_str(&text).map_err(|e| ConfigError::Malformed {
            path: self.file.clone(),
            source: e,
        })
    }

    /// Replace the task file with `config`
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let mut content = serde_json::to_string_pretty(config)?;
        content.push('\n');
        fs::create_dir_all(&self.dir).map_err(|e| ConfigError::Write {
            path: self.dir.clone(),
            source: e,
        })?;
        atomic_write(&self.file, content.as_bytes()).map_err(|e| ConfigError::Write {
            path: self.file.clone(),
            source: e,
        })
    }
}

/// Write to a temp file in the same directory, then rename over `path`.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}
