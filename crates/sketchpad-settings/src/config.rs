//! Configuration and settings management for Sketchpad
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Canvas settings (dimensions, background)
//! - Input settings (pick radius, polygon vertex limit)
//! - Drawing settings (initial color, dash style, thickness, side counter)

use serde::{Deserialize, Serialize};
use sketchpad_core::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_POLYGON_SIDES, MAX_POLYGON_VERTICES, SEARCH_RADIUS,
};
use sketchpad_core::{DashStyle, FigureProperties, Rgba, StyleContext};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Canvas geometry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Color shown where no shape covers a pixel
    pub background: Rgba,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            background: Rgba::BLACK,
        }
    }
}

/// Input handling limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Radius, exclusive, searched around a click when picking a shape
    pub search_radius: u32,
    /// Most clicks accepted for a single polygon
    pub max_polygon_vertices: usize,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            search_radius: SEARCH_RADIUS,
            max_polygon_vertices: MAX_POLYGON_VERTICES,
        }
    }
}

/// Style in effect when the program starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    pub color: Rgba,
    pub dash: DashStyle,
    pub thick: bool,
    /// Initial regular polygon side counter
    pub polygon_sides: u32,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            color: Rgba::WHITE,
            dash: DashStyle::Solid,
            thick: false,
            polygon_sides: DEFAULT_POLYGON_SIDES,
        }
    }
}

impl DrawingSettings {
    /// The dispatcher's starting style.
    pub fn style_context(&self) -> StyleContext {
        StyleContext::new(
            FigureProperties::new(self.color, self.dash, self.thick),
            self.polygon_sides,
        )
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasSettings,
    pub input: InputSettings,
    pub drawing: DrawingSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location: `<config dir>/sketchpad/config.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("sketchpad").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!(
                "No configuration at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 || self.canvas.width > i32::MAX as u32 {
            return Err(out_of_range("canvas.width", self.canvas.width));
        }
        if self.canvas.height == 0 || self.canvas.height > i32::MAX as u32 {
            return Err(out_of_range("canvas.height", self.canvas.height));
        }
        if self.input.search_radius == 0 {
            return Err(out_of_range("input.search_radius", self.input.search_radius));
        }
        if self.input.max_polygon_vertices == 0 {
            return Err(out_of_range(
                "input.max_polygon_vertices",
                self.input.max_polygon_vertices,
            ));
        }
        Ok(())
    }
}
