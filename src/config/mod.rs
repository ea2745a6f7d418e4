//! Configuration module for Textswap
//!
//! This module handles user preferences, including serialization to and from
//! JSON and storage in the platform-specific config directory.

mod persistence;
mod settings;

pub use persistence::{get_config_file_path, load_config, save_config_silent};
pub use settings::{MatchMode, Settings, Theme, WindowSize};
