//! Siri-style animated waveform.
//!
//! See [`SiriWave`] for the animation driver and [`Surface`] / [`SurfaceHost`]
//! for plugging in a drawing backend.

pub mod wave;

pub use wave::*;
