use std::path::PathBuf;

use thiserror::Error;

/// Failures at the I/O edges: reading the dataset or the config file.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_io() {
        let e = AppError::Io {
            path: PathBuf::from("data.tsv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(e.to_string(), "cannot read data.tsv: gone");
    }

    #[test]
    fn display_config() {
        let source = serde_yaml::from_str::<u32>("[").unwrap_err();
        let e = AppError::Config { path: PathBuf::from("c.yaml"), source };
        assert!(e.to_string().starts_with("invalid config c.yaml: "));
    }
}
