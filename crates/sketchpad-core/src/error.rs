//! Error handling for Sketchpad
//!
//! Drawing operations never fail: a missed pick or an empty pixel is an
//! `Option`, not an error. The types here cover the layers around the
//! engine:
//! - Input errors (scripted input parsing)
//! - Render errors (compositor lifecycle)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Input error type
///
/// Represents errors raised while turning a textual input script into
/// click and key events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A directive was missing arguments or had malformed ones
    #[error("Invalid directive at line {line_number}: {reason}")]
    InvalidDirective {
        /// The 1-based line number of the directive.
        line_number: usize,
        /// The reason the directive was rejected.
        reason: String,
    },

    /// The directive keyword is not recognised
    #[error("Unknown directive at line {line_number}: {directive}")]
    UnknownDirective {
        /// The 1-based line number of the directive.
        line_number: usize,
        /// The unrecognised keyword.
        directive: String,
    },

    /// A key name could not be mapped to a key code
    #[error("Invalid key name '{name}' at line {line_number}")]
    InvalidKey {
        /// The 1-based line number of the directive.
        line_number: usize,
        /// The key name as written.
        name: String,
    },
}

/// Render error type
///
/// Represents failures of the compositor task driving the output surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The compositor task panicked or was aborted
    #[error("Compositor task failed: {reason}")]
    CompositorFailed {
        /// The reason reported by the runtime.
        reason: String,
    },
}

/// Main error type for Sketchpad
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Input error
    #[error(transparent)]
    Input(#[from] InputError),

    /// Render error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an input error
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::Input(_))
    }

    /// Check if this is a render error
    pub fn is_render_error(&self) -> bool {
        matches!(self, Error::Render(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
