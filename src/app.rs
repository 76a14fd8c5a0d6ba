//! Application orchestration and command routing.
//!
//! Handles command-line argument parsing and delegates to appropriate command handlers.

use crate::commands::{self, trace::TraceRequest, WaveOverrides};
use crate::logging;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::process;

/// An animated Siri-style waveform in your terminal
#[derive(Parser)]
#[command(name = "siriwave")]
#[command(version)]
#[command(about = "An animated Siri-style waveform in your terminal")]
#[command(long_about = "An animated Siri-style waveform in your terminal.\n\nDEFAULT COMMAND:\n    If no command is specified, 'play' is used by default.\n    Wave options (--style, -s, -a, -f, -c) override the config file for any command.\n\nEXAMPLES:\n    # Classic layered curves\n    $ siriwave\n    \n    # Colored bands, slower and louder\n    $ siriwave --style ios9 -s 0.1 -a 2\n    \n    # Print 20 frames without a terminal UI\n    $ siriwave trace -n 20 --target-amplitude 0\n    \n    # Edit configuration file\n    $ siriwave config")]
#[command(
    after_help = "CONFIGURATION:\n    Config file:        ~/.config/siriwave/siriwave.toml\n    Logs:               ~/.local/state/siriwave/siriwave.log.*"
)]
struct Cli {
    #[command(flatten)]
    overrides: WaveOverrides,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the animated wave (default)
    ///
    /// Space starts/stops the wave, Up/Down change the amplitude,
    /// Left/Right change the speed, Escape/q quits.
    #[command(visible_alias = "p")]
    Play,

    /// Run the wave headless and print every frame
    ///
    /// Draws onto an in-memory surface and prints phase, speed, amplitude
    /// and the number of strokes per frame.
    #[command(visible_alias = "t")]
    Trace {
        /// Number of frames to run
        #[arg(short = 'n', long, default_value_t = 10)]
        frames: u64,

        /// Surface width in pixels
        #[arg(long, default_value_t = 800.0)]
        width: f64,

        /// Surface height in pixels
        #[arg(long, default_value_t = 200.0)]
        height: f64,

        /// Speed to interpolate toward after the first frame
        #[arg(long, value_name = "SPEED", allow_negative_numbers = true)]
        target_speed: Option<f64>,

        /// Amplitude to interpolate toward after the first frame
        #[arg(long, value_name = "AMPLITUDE")]
        target_amplitude: Option<f64>,
    },

    /// Open configuration file in your preferred editor
    ///
    /// Writes the default configuration first if there is none.
    /// Uses $EDITOR environment variable or falls back to nano/vi.
    #[command(visible_alias = "c")]
    Config,

    /// Show recent log entries from the application
    ///
    /// Display the last 50 lines of the most recent log file.
    Logs,

    /// Generate shell completion script
    ///
    /// Examples:
    ///   siriwave completions bash > siriwave.bash
    ///   siriwave completions zsh > _siriwave
    ///   siriwave completions fish > siriwave.fish
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Runs the main application based on command-line arguments.
///
/// # Errors
/// - If logging initialization fails
/// - If command execution fails
pub async fn run() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Commands that don't need logging
    match &cli.command {
        Some(Commands::Completions { shell }) => {
            generate(*shell, &mut Cli::command(), "siriwave", &mut io::stdout());
            return Ok(());
        }
        Some(Commands::Logs) => {
            return match commands::handle_logs() {
                Ok(()) => Ok(()),
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            };
        }
        _ => {}
    }

    logging::init_logging()?;

    match cli.command {
        None | Some(Commands::Play) => {
            commands::handle_play(&cli.overrides).await?;
        }
        Some(Commands::Trace {
            frames,
            width,
            height,
            target_speed,
            target_amplitude,
        }) => {
            let request = TraceRequest {
                frames,
                width,
                height,
                target_speed,
                target_amplitude,
            };
            commands::handle_trace(&cli.overrides, &request)?;
        }
        Some(Commands::Config) => {
            commands::handle_config()?;
        }
        Some(Commands::Completions { .. }) | Some(Commands::Logs) => {
            unreachable!("These commands are handled earlier")
        }
    }

    Ok(())
}
