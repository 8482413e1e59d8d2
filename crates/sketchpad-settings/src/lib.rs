//! Sketchpad Settings Crate
//!
//! Handles application configuration: canvas geometry, picking and input
//! limits, and the initial drawing style. Configuration files are JSON or
//! TOML, chosen by extension.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, DrawingSettings, InputSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
