//! Error types for layermix-core.
//!
//! Color values themselves never fail: every blend formula is total. Errors
//! only appear at the text boundary, when a color or position is parsed from
//! user input (command line, config files).
//!
//! # Usage
//!
//! ```rust
//! use layermix_core::{CoreError, Rgba};
//!
//! let err = "#12345".parse::<Rgba>().unwrap_err();
//! assert!(matches!(err, CoreError::InvalidHex { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`CoreError`] as the error type.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors raised while parsing colors and positions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// Input matched neither the hex nor the comma separated form.
    #[error("invalid color '{input}': {reason}")]
    InvalidColor {
        /// Original input text
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// Position text was not of the form `x,y`.
    #[error("invalid position '{input}': expected 'x,y'")]
    InvalidPosition {
        /// Original input text
        input: String,
    },

    /// Hex color with a bad length or non-hex digits.
    ///
    /// Accepted lengths after `#` are 3, 6 and 8.
    #[error("invalid hex color '{input}'")]
    InvalidHex {
        /// Original input text
        input: String,
    },

    /// A single numeric component failed to parse.
    #[error("invalid {what} component '{value}'")]
    InvalidComponent {
        /// Component name (r, g, b, a, x, y)
        what: &'static str,
        /// Offending text
        value: String,
    },
}
