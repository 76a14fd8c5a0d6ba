//! siriwave: an animated Siri-style waveform in the terminal.

mod app;
mod commands;
mod config;
mod logging;
mod terminal;

#[tokio::main]
async fn main() {
    if let Err(e) = app::run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
