use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::PracticeError;

/// Session log used when nothing else is configured, relative to the
/// working directory.
pub const DEFAULT_DATA_FILE: &str = "practice_sessions.txt";

/// User configuration loaded from the platform config dir
/// (e.g. `~/.config/practice/config.toml`).
///
/// All fields are optional so the config file is too.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub data_file: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self, PracticeError> {
        match Self::config_path() {
            Some(path) if path.exists() => {
                let content =
                    std::fs::read_to_string(&path).map_err(|e| PracticeError::io(&path, e))?;
                Self::parse(&content)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn parse(content: &str) -> Result<Self, PracticeError> {
        toml::from_str(content).map_err(|e| PracticeError::Config(e.to_string()))
    }

    /// Location of the config file, if the platform has a config dir.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "practice").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }
}
