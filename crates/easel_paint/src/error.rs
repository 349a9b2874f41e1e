//! Paint error types

use thiserror::Error;

/// Errors raised by the recording surface
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaintError {
    /// Fill style is not a colour the surface understands
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    /// Font shorthand has no usable pixel size
    #[error("Invalid font: {0:?}")]
    InvalidFont(String),

    /// Image destination rectangle has a NaN or infinite component
    #[error("Non-finite image geometry: ({x}, {y}, {width}, {height})")]
    NonFiniteGeometry {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

/// Result type for paint operations
pub type Result<T> = std::result::Result<T, PaintError>;
