use crate::error::{GradebookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "gradebook.json";
const DEFAULT_STORE_FILE: &str = "students_list.txt";
const DEFAULT_HONORS_THRESHOLD: u8 = 90;

/// Configuration for the gradebook, stored in ./gradebook.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GradebookConfig {
    /// Path of the roster file, relative to the working directory unless absolute
    #[serde(default = "default_store_file")]
    pub store_file: PathBuf,

    /// Statistics count grades strictly above this value
    #[serde(default = "default_honors_threshold")]
    pub honors_threshold: u8,
}

fn default_store_file() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

fn default_honors_threshold() -> u8 {
    DEFAULT_HONORS_THRESHOLD
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            honors_threshold: DEFAULT_HONORS_THRESHOLD,
        }
    }
}

impl GradebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GradebookError::Io)?;
        let config: GradebookConfig =
            serde_json::from_str(&content).map_err(GradebookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(GradebookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(GradebookError::Serialization)?;
        fs::write(config_path, content).map_err(GradebookError::Io)?;
        Ok(())
    }

    /// Replaces the store file, e.g. from a command-line override.
    pub fn with_store_file(mut self, store_file: impl Into<PathBuf>) -> Self {
        self.store_file = store_file.into();
        self
    }
}
