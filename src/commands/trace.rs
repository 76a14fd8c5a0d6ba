//! Headless wave trace.
//!
//! Runs the driver against an in-memory surface and prints the state of every
//! frame. Useful to check configuration changes without a terminal.

use crate::config::SiriwaveConfig;
use siriwave::{FrameLoop, RecordingHost, SiriWave, SurfaceOp};
use std::time::Instant;

use super::WaveOverrides;

/// Settings of a trace run.
#[derive(Debug, Clone)]
pub struct TraceRequest {
    pub frames: u64,
    pub width: f64,
    pub height: f64,
    pub target_speed: Option<f64>,
    pub target_amplitude: Option<f64>,
}

/// Runs `request.frames` cycles headless and prints one row per frame.
///
/// # Errors
/// - If the configuration cannot be loaded
/// - If the wave cannot be created or fails to draw
pub fn handle_trace(overrides: &WaveOverrides, request: &TraceRequest) -> anyhow::Result<()> {
    let config = SiriwaveConfig::load()?;
    let mut options = config.wave;
    overrides.apply(&mut options);
    options.autostart = false;

    let mut host = RecordingHost::new(request.width, request.height);
    let mut wave = SiriWave::new(&mut host, FrameLoop::new(), options)?;
    if let Some(speed) = request.target_speed {
        wave.set_speed(speed);
    }
    if let Some(amplitude) = request.target_amplitude {
        wave.set_amplitude(amplitude);
    }

    println!(
        "{} style, {}x{} px, height max {}, {} curves",
        wave.style(),
        wave.width(),
        wave.height(),
        wave.height_max(),
        wave.curve_count()
    );
    println!(
        "{:>6}  {:>8}  {:>8}  {:>10}  {:>7}",
        "frame", "phase", "speed", "amplitude", "strokes"
    );

    for frame in 0..request.frames {
        if frame == 0 {
            wave.start()?;
        } else {
            wave.scheduler_mut().present();
            wave.pump(Instant::now())?;
        }
        let strokes = wave
            .surface_mut()
            .take_ops()
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Stroke(_)))
            .count();
        println!(
            "{:>6}  {:>8.4}  {:>8.4}  {:>10.4}  {:>7}",
            wave.frame_count(),
            wave.phase(),
            wave.speed(),
            wave.amplitude(),
            strokes
        );
    }

    tracing::info!("Traced {} frames", wave.frame_count());
    Ok(())
}
