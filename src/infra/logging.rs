use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use crossterm::{
    ExecutableCommand,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

use super::constants::{ERRORS_DIR, STORE_DIR};

/// Route `log` records into `path`. Stderr is unusable while the alternate
/// screen is up, so everything goes to the file. Filter comes from RUST_LOG.
pub fn init(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(io::Error::other)
}

/// Like [`init`], but a log file that cannot be opened only costs the log.
/// Warns once on stderr (the terminal is not up yet) and returns false.
pub fn init_or_warn(path: &Path) -> bool {
    match init(path) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("warning: logging disabled, cannot open log file {}: {}", path.display(), e);
            false
        }
    }
}

/// Panic hook: restore terminal state and append the panic to the crash log.
/// Without this a panic leaves the terminal in raw mode + alternate screen and
/// the message is lost.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);

        let backtrace = std::backtrace::Backtrace::force_capture();
        let report = format!("[{}] {}\n\n{}\n\n---\n", Local::now().format("%Y-%m-%d %H:%M:%S"), info, backtrace);
        let _ = append_crash_report(&report);

        default_hook(info);
    }));
}

fn crash_log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(ERRORS_DIR).join("panic.log")
}

fn append_crash_report(report: &str) -> io::Result<()> {
    let path = crash_log_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(&path)?.write_all(report.as_bytes())
}
