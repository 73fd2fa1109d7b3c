//! Configuration file parsing for TeslaGrid
//!
//! Supports `config.toml` in the user config directory, or any file passed
//! with `--config`.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_session_settings, load_settings, save_settings,
    try_load_settings,
};
pub use types::*;
