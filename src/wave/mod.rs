//! Animated waveform engine.
//!
//! The driver advances a phase over time, interpolates speed and amplitude
//! toward their targets and hands an immutable frame snapshot to one of two
//! curve renderers, which stroke the wave onto a host-provided surface.

pub mod banded;
pub mod classic;
pub mod color;
pub mod context;
pub mod definition;
pub mod driver;
pub mod error;
pub mod lerp;
pub mod renderer;
pub mod scheduler;
pub mod surface;

pub use color::Rgb;
pub use context::{RenderContext, WaveEnv};
pub use definition::{
    default_definitions, AttenuatedCurve, BandedCurve, CurveDefinition, CurveSet, CurveStyle,
};
pub use driver::{Options, Property, SiriWave};
pub use error::{SurfaceError, WaveError};
pub use lerp::{int_lerp, Interpolated};
pub use renderer::CurveRenderer;
pub use scheduler::{FrameHandle, FrameLoop, FrameScheduler, TIMER_FALLBACK};
pub use surface::{
    RecordingHost, RecordingSurface, StrokeStyle, StrokedPath, Surface, SurfaceHost,
    SurfaceLayout, SurfaceOp,
};
