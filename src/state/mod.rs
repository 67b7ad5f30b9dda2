//! Session state.
//!
//! - `config` — Config, load_config
//! - `runtime` — State, Change, LoadStatus and the derivation chain

pub mod config;
pub mod runtime;

pub use config::Config;
pub use runtime::{Change, LoadStatus, State};
