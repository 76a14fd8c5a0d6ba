//! Interactive wave playback.
//!
//! Hosts the wave in the terminal, drives it from a frame loop and maps key
//! presses to start/stop and speed/amplitude changes.

use crate::config::{SiriwaveConfig, TerminalConfig};
use crate::terminal::{self, TerminalSurface, WaveCommand, WaveTui};
use siriwave::{FrameLoop, Options, SiriWave};
use std::time::{Duration, Instant};

use super::WaveOverrides;

/// Delay between terminal frames (about 60 fps).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Runs the interactive wave until the user quits.
///
/// # Errors
/// - If the configuration cannot be loaded
/// - If the terminal cannot be initialized
/// - If the wave cannot be created or fails to draw
pub async fn handle_play(overrides: &WaveOverrides) -> anyhow::Result<()> {
    tracing::info!("=== siriwave started ===");

    let config = match SiriwaveConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Failed to load configuration: {err}");
            terminal::report(&format!(
                "Configuration Error:\n\n{err}\n\nPlease check your ~/.config/siriwave/siriwave.toml file and try again."
            ))?;
            return Err(anyhow::anyhow!("Configuration error: {err}"));
        }
    };

    let mut options = config.wave.clone();
    overrides.apply(&mut options);
    tracing::info!(
        "Wave options: style={}, speed={}, amplitude={}, frequency={}, color={}",
        options.style,
        options.speed,
        options.amplitude,
        options.frequency,
        options.color
    );

    let mut tui = WaveTui::new().map_err(|e| anyhow::anyhow!("Failed to initialize UI: {e}"))?;
    let result = play(&mut tui, options, &config.terminal).await;
    tui.cleanup()
        .map_err(|e| anyhow::anyhow!("Cleanup failed: {e}"))?;

    if let Err(err) = result {
        tracing::error!("Playback failed: {err}");
        terminal::report(&format!("Wave Error:\n\n{err}"))?;
        return Err(err);
    }

    tracing::info!("=== siriwave exited successfully ===");
    Ok(())
}

async fn play(
    tui: &mut WaveTui,
    options: Options,
    settings: &TerminalConfig,
) -> anyhow::Result<()> {
    let mut host = tui.host()?;
    let scheduler = if settings.frame_callbacks {
        FrameLoop::new()
    } else {
        tracing::debug!("Frame callbacks disabled, using the timer fallback");
        FrameLoop::timer_only()
    };
    let mut wave = SiriWave::new(&mut host, scheduler, options)?;

    loop {
        wave.pump(Instant::now())?;
        tui.render(&wave)
            .map_err(|e| anyhow::anyhow!("Render failed: {e}"))?;
        wave.scheduler_mut().present();

        match tui.handle_input(Duration::ZERO)? {
            WaveCommand::Continue => {}
            WaveCommand::Quit => break,
            WaveCommand::ToggleRun => {
                if wave.is_running() {
                    wave.stop();
                } else {
                    wave.start()?;
                }
            }
            WaveCommand::AmplitudeUp => step_amplitude(&mut wave, settings.amplitude_step),
            WaveCommand::AmplitudeDown => step_amplitude(&mut wave, -settings.amplitude_step),
            WaveCommand::SpeedUp => step_speed(&mut wave, settings.speed_step),
            WaveCommand::SpeedDown => step_speed(&mut wave, -settings.speed_step),
        }

        tokio::time::sleep(FRAME_INTERVAL).await;
    }

    tracing::debug!("Played {} frames", wave.frame_count());
    Ok(())
}

/// Moves the amplitude target by `delta`, never below zero.
fn step_amplitude(wave: &mut SiriWave<TerminalSurface, FrameLoop>, delta: f64) {
    let current = wave.amplitude_target().unwrap_or_else(|| wave.amplitude());
    wave.set_amplitude((current + delta).max(0.0));
}

fn step_speed(wave: &mut SiriWave<TerminalSurface, FrameLoop>, delta: f64) {
    let current = wave.speed_target().unwrap_or_else(|| wave.speed());
    wave.set_speed(current + delta);
}
