//! # Sketchpad Core
//!
//! Core types, traits, and utilities for Sketchpad.
//! Provides the geometry kernel, color and style values, the input stream
//! types the command dispatcher consumes, and the output surface the
//! compositor writes to.

pub mod color;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod style;
pub mod surface;

pub use color::Rgba;
pub use error::{Error, InputError, RenderError, Result};
pub use geometry::Point;
pub use input::{ClickDetector, InputEvent, KeyCode, MouseSample};
pub use style::{DashStyle, FigureProperties, StyleContext};
pub use surface::{FrameBuffer, Surface};
