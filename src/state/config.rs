use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use rl_base::selection::Markers;

use crate::infra::constants::{CONFIG_FILE, DEFAULT_DATASET, DEFAULT_LOG_FILE, STORE_DIR};
use crate::infra::error::AppError;

/// User configuration (`.ruokalista/config.yaml`). Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset file path or http(s) URL
    pub dataset: String,
    /// Prefix for printed share links, e.g. `https://example.org/ruokalista/`
    pub share_base: String,
    /// Tag and diet vocabulary used by the filters
    pub markers: Markers,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: DEFAULT_DATASET.to_string(),
            share_base: String::new(),
            markers: Markers::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(CONFIG_FILE)
}

/// Read `path`. `Ok(None)` when the file does not exist.
pub fn load_config(path: &Path) -> Result<Option<Config>, AppError> {
    let yaml = match fs::read_to_string(path) {
        Ok(yaml) => yaml,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(AppError::Io { path: path.to_path_buf(), source }),
    };
    // An empty file deserializes as unit, not as a mapping
    if yaml.trim().is_empty() {
        return Ok(Some(Config::default()));
    }
    serde_yaml::from_str(&yaml)
        .map(Some)
        .map_err(|source| AppError::Config { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("nope.yaml")).unwrap().is_none());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dataset: https://example.org/data.tsv").unwrap();
        writeln!(file, "markers:").unwrap();
        writeln!(file, "  vegetarian: [veg]").unwrap();
        let config = load_config(file.path()).unwrap().unwrap();
        assert_eq!(config.dataset, "https://example.org/data.tsv");
        assert_eq!(config.markers.kid_friendly, "c");
        assert_eq!(config.markers.vegetarian, vec!["veg"]);
        assert_eq!(config.share_base, "");
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn empty_file_is_default() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(load_config(file.path()).unwrap(), Some(Config::default()));
    }

    #[test]
    fn malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dataset: [unclosed").unwrap();
        assert!(matches!(load_config(file.path()), Err(AppError::Config { .. })));
    }
}
