//! Error types for pattern generation.
//!
//! Generation itself is deliberately permissive: degenerate dimensions still
//! produce a (geometrically useless) document, matching the original tool.
//! Validation is an opt-in step, and file output is the only operation that
//! can fail on the normal path.

use std::io;
use thiserror::Error;

/// Errors that can occur while validating parameters or writing a pattern.
#[derive(Error, Debug)]
pub enum PatternError {
    /// A tray dimension is degenerate: zero or negative, or a material
    /// thickness large enough to invert the wall offsets.
    ///
    /// Only reported by [`crate::tray::TrayParameters::validate`]; the
    /// generation path never raises it.
    #[error("Invalid dimension '{name}': {value} ({reason})")]
    InvalidDimension {
        /// The parameter name.
        name: &'static str,
        /// The offending value in millimeters.
        value: f64,
        /// Why the value is rejected.
        reason: &'static str,
    },

    /// I/O error while writing the output document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for pattern operations.
pub type PatternResult<T> = Result<T, PatternError>;
