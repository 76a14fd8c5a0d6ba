//! Error types for wave construction and drawing.

use thiserror::Error;

use super::definition::CurveStyle;

/// Failure reported by a drawing surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct SurfaceError(String);

impl SurfaceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors raised while building or animating a wave.
#[derive(Debug, Error)]
pub enum WaveError {
    /// The host could not provide a drawing surface. Construction is aborted.
    #[error("Unable to create drawing surface: {0}")]
    SurfaceUnavailable(#[source] SurfaceError),

    /// A surface operation failed in the middle of a draw cycle.
    #[error("Drawing failed: {0}")]
    Draw(#[from] SurfaceError),

    #[error("Curve {index} has zero attenuation")]
    ZeroAttenuation { index: usize },

    #[error("Curve {index} is invalid: {reason}")]
    InvalidCurve { index: usize, reason: String },

    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    #[error("Invalid color pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Curve definitions must not be empty")]
    EmptyCurveSet,

    #[error("Curve definitions mix attenuated and banded curves")]
    MixedCurveKinds,

    #[error("Curve definitions do not match the '{0}' style")]
    StyleMismatch(CurveStyle),

    #[error("Invalid option '{name}': {reason}")]
    InvalidOption { name: &'static str, reason: String },

    #[error("Unknown property '{0}'. Expected 'speed' or 'amplitude'")]
    UnknownProperty(String),

    #[error("Unknown style '{0}'. Expected 'ios' or 'ios9'")]
    UnknownStyle(String),
}
