use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::thread;

use rl_base::dataset::Dataset;

use crate::infra::error::AppError;

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Http(String),
}

impl DatasetSource {
    pub fn from_location(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DatasetSource::Http(trimmed.to_string())
        } else {
            DatasetSource::File(PathBuf::from(trimmed))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DatasetSource::File(path) => path.display().to_string(),
            DatasetSource::Http(url) => url.clone(),
        }
    }
}

/// Outcome of the one-shot dataset load
#[derive(Debug)]
pub enum LoadEvent {
    Loaded(Dataset),
    Failed(String),
}

/// Fetch and parse the dataset on a background thread. Sends exactly one event.
pub fn spawn_load(source: DatasetSource, tx: Sender<LoadEvent>) {
    thread::spawn(move || {
        let event = match fetch_text(&source) {
            Ok(text) => LoadEvent::Loaded(Dataset::parse(&text)),
            Err(e) => LoadEvent::Failed(e.to_string()),
        };
        // Receiver gone means the app already quit
        let _ = tx.send(event);
    });
}

pub fn fetch_text(source: &DatasetSource) -> Result<String, AppError> {
    match source {
        DatasetSource::File(path) => {
            fs::read_to_string(path).map_err(|source| AppError::Io { path: path.clone(), source })
        }
        DatasetSource::Http(url) => Ok(reqwest::blocking::get(url)?.error_for_status()?.text()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn source_from_location() {
        assert_eq!(
            DatasetSource::from_location("https://example.org/data.tsv"),
            DatasetSource::Http("https://example.org/data.tsv".into())
        );
        assert_eq!(DatasetSource::from_location(" data.tsv "), DatasetSource::File(PathBuf::from("data.tsv")));
    }

    #[test]
    fn loads_file_in_background() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "id\tname\ttags\tdiet\tingredients\n1\tSoup\t\t\tonion\n2\tStew\t\t\tbeef\n").unwrap();
        let (tx, rx) = mpsc::channel();
        spawn_load(DatasetSource::File(file.path().to_path_buf()), tx);
        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            LoadEvent::Loaded(db) => assert_eq!(db.len(), 2),
            LoadEvent::Failed(e) => panic!("unexpected failure: {e}"),
        }
    }

    #[test]
    fn missing_file_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, rx) = mpsc::channel();
        spawn_load(DatasetSource::File(dir.path().join("missing.tsv")), tx);
        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            LoadEvent::Failed(e) => assert!(e.contains("missing.tsv")),
            LoadEvent::Loaded(_) => panic!("expected failure"),
        }
    }
}
