//! SlideKit Settings Crate
//!
//! Handles editor configuration: history depth, duplicate/paste nudge, and
//! the default slide background. Supports JSON and TOML files stored in the
//! platform-specific configuration directory.

pub mod config;
pub mod error;

pub use config::EditorConfig;
pub use error::{ConfigError, ConfigResult};
