// =============================================================================
// STORAGE
// =============================================================================

/// Local directory for config, logs and crash reports
pub const STORE_DIR: &str = "./.ruokalista";

/// Config file name inside STORE_DIR
pub const CONFIG_FILE: &str = "config.yaml";

/// Crash reports directory inside STORE_DIR
pub const ERRORS_DIR: &str = "errors";

/// Default log file
pub const DEFAULT_LOG_FILE: &str = "./.ruokalista/ruokalista.log";

/// Default dataset location (path or http(s) URL)
pub const DEFAULT_DATASET: &str = "data.tsv";

// =============================================================================
// EVENT LOOP
// =============================================================================

/// How long to block waiting for terminal input per loop iteration
pub const EVENT_POLL_MS: u64 = 50;

// =============================================================================
// CONTROLS
// =============================================================================

/// Upper bound for the requested amount (typed or incremented)
pub const MAX_AMOUNT: usize = 999;

/// Width of the controls sidebar
pub const SIDEBAR_WIDTH: u16 = 34;
