//! Drawing style
//!
//! `FigureProperties` is the style a shape is built with. It is copied into
//! the shape at construction time, so later style changes never reach
//! shapes already on the canvas. `StyleContext` is the "current" style the
//! command dispatcher owns and hands to every shape it builds.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::Rgba;
use crate::constants::DEFAULT_POLYGON_SIDES;

/// Stroke pattern for lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashStyle {
    /// Every pixel drawn
    #[default]
    Solid,
    /// Two pixels on, two pixels off
    Dotted,
    /// Long dashes scaled to the line length
    Dashed,
}

impl DashStyle {
    /// The style that follows this one in the `t` key cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Solid => Self::Dotted,
            Self::Dotted => Self::Dashed,
            Self::Dashed => Self::Solid,
        }
    }
}

impl fmt::Display for DashStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid => write!(f, "solid"),
            Self::Dotted => write!(f, "dotted"),
            Self::Dashed => write!(f, "dashed"),
        }
    }
}

/// Color, dash pattern and thickness of one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FigureProperties {
    pub color: Rgba,
    pub dash: DashStyle,
    pub thick: bool,
}

impl FigureProperties {
    pub fn new(color: Rgba, dash: DashStyle, thick: bool) -> Self {
        Self { color, dash, thick }
    }

    /// Solid, thin line in `color`.
    pub fn solid(color: Rgba) -> Self {
        Self::new(color, DashStyle::Solid, false)
    }
}

impl Default for FigureProperties {
    fn default() -> Self {
        Self::solid(Rgba::WHITE)
    }
}

/// The dispatcher's current drawing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleContext {
    properties: FigureProperties,
    polygon_sides: u32,
}

impl StyleContext {
    pub fn new(properties: FigureProperties, polygon_sides: u32) -> Self {
        Self {
            properties,
            polygon_sides,
        }
    }

    /// Snapshot handed to a shape under construction.
    pub fn figure(&self) -> FigureProperties {
        self.properties
    }

    pub fn polygon_sides(&self) -> u32 {
        self.polygon_sides
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.properties.color = color;
    }

    /// Advances the dash style and returns the new one.
    pub fn cycle_dash(&mut self) -> DashStyle {
        self.properties.dash = self.properties.dash.next();
        self.properties.dash
    }

    /// Flips thickness and returns the new value.
    pub fn toggle_thick(&mut self) -> bool {
        self.properties.thick = !self.properties.thick;
        self.properties.thick
    }

    pub fn increment_sides(&mut self) -> u32 {
        self.polygon_sides = self.polygon_sides.saturating_add(1);
        self.polygon_sides
    }

    pub fn decrement_sides(&mut self) -> u32 {
        self.polygon_sides = self.polygon_sides.saturating_sub(1);
        self.polygon_sides
    }
}

impl Default for StyleContext {
    fn default() -> Self {
        Self::new(FigureProperties::default(), DEFAULT_POLYGON_SIDES)
    }
}
