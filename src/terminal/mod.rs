//! Terminal host for the wave.
//!
//! Provides a braille-canvas surface, the interactive UI and an error screen.

pub mod error;
pub mod surface;
pub mod ui;

pub use error::report;
pub use surface::{TerminalHost, TerminalSurface};
pub use ui::{WaveCommand, WaveTui};
