//! Configuration file parsing for The Mechanical Editor
//!
//! Supports `.mechedit/config.toml` in the config directory (the working
//! directory unless `--config-dir` is given).

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings};
pub use types::*;
