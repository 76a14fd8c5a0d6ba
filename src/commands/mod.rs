//! Application command handlers for siriwave.
//!
//! # Commands
//! - `play`: Interactive wave in the terminal (default)
//! - `trace`: Headless run printing per-frame driver state
//! - `config`: Open configuration file in user's preferred editor
//! - `logs`: Display recent log entries

pub mod config;
pub mod logs;
pub mod play;
pub mod trace;

pub use config::handle_config;
pub use logs::handle_logs;
pub use play::handle_play;
pub use trace::handle_trace;

use siriwave::{CurveStyle, Options};

/// Command-line overrides for the `[wave]` config table.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct WaveOverrides {
    /// Curve style: ios (layered curves) or ios9 (colored bands)
    #[arg(long, value_name = "STYLE", global = true)]
    pub style: Option<CurveStyle>,

    /// Phase advance per frame, in quarter turns
    #[arg(
        short,
        long,
        value_name = "SPEED",
        global = true,
        allow_negative_numbers = true
    )]
    pub speed: Option<f64>,

    /// Wave amplitude (0 is flat)
    #[arg(short, long, value_name = "AMPLITUDE", global = true)]
    pub amplitude: Option<f64>,

    /// Angular frequency of the classic curves
    #[arg(short, long, value_name = "FREQUENCY", global = true)]
    pub frequency: Option<f64>,

    /// Classic stroke color, e.g. "#fff", "#336699" or "rgb(51, 102, 153)"
    #[arg(short, long, value_name = "COLOR", global = true)]
    pub color: Option<String>,
}

impl WaveOverrides {
    /// Applies the overrides on top of `options`.
    ///
    /// Switching style drops curves configured for the other style.
    pub fn apply(&self, options: &mut Options) {
        if let Some(style) = self.style {
            if style != options.style && options.curve_definition.take().is_some() {
                tracing::info!(
                    "Ignoring configured curves: they belong to the {} style",
                    options.style
                );
            }
            options.style = style;
        }
        if let Some(speed) = self.speed {
            options.speed = speed;
        }
        if let Some(amplitude) = self.amplitude {
            options.amplitude = amplitude;
        }
        if let Some(frequency) = self.frequency {
            options.frequency = frequency;
        }
        if let Some(color) = &self.color {
            options.color = color.clone();
        }
    }
}
