//! Terminal user interface hosting the animated wave.
//!
//! Draws the wave surface above a one-line status footer and maps key presses
//! to wave controls.

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
};
use siriwave::{FrameScheduler, SiriWave};
use std::io::{stdout, Stdout};
use std::time::Duration;

use super::surface::{TerminalHost, TerminalSurface};

const FOOTER_HEIGHT: u16 = 1;

/// User input command while the wave is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveCommand {
    /// No key pressed
    Continue,
    /// Start or stop the animation (Space)
    ToggleRun,
    AmplitudeUp,
    AmplitudeDown,
    SpeedUp,
    SpeedDown,
    /// Exit (Escape, 'q' or Ctrl+C)
    Quit,
}

/// Full-screen terminal UI for the wave.
pub struct WaveTui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl WaveTui {
    /// Creates a new TUI instance and enters alternate screen mode.
    ///
    /// # Errors
    /// - If terminal cannot be initialized
    /// - If raw mode cannot be enabled
    /// - If alternate screen cannot be entered
    pub fn new() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(WaveTui { terminal })
    }

    /// Host covering the terminal area above the footer.
    ///
    /// # Errors
    /// - If the terminal size cannot be queried
    pub fn host(&self) -> anyhow::Result<TerminalHost> {
        let size = self.terminal.size()?;
        Ok(TerminalHost::new(
            size.width,
            size.height.saturating_sub(FOOTER_HEIGHT),
        ))
    }

    /// Draws the current wave frame and the status footer.
    ///
    /// # Errors
    /// - If terminal rendering fails
    pub fn render<F: FrameScheduler>(
        &mut self,
        wave: &SiriWave<TerminalSurface, F>,
    ) -> anyhow::Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.area();

            let wave_area = Rect {
                x: area.x,
                y: area.y,
                width: area.width,
                height: area.height.saturating_sub(FOOTER_HEIGHT),
            };
            frame.render_widget(
                ratatui::widgets::Block::default().style(Style::default().bg(Color::Black)),
                wave_area,
            );
            wave.surface().render(frame, wave_area);

            let footer_area = Rect {
                x: area.x,
                y: area.y + area.height.saturating_sub(FOOTER_HEIGHT),
                width: area.width,
                height: FOOTER_HEIGHT,
            };

            let indicator = if wave.is_running() {
                Span::styled("▶ ", Style::default().fg(Color::Green))
            } else {
                Span::styled("■ ", Style::default().fg(Color::Yellow))
            };

            let status = Line::from(vec![
                indicator,
                Span::raw(format!("{} ", wave.style())),
                Span::raw(format!("phase {:.2} / ", wave.phase())),
                Span::raw(format!("speed {:.2} / ", wave.speed())),
                Span::raw(format!("amplitude {:.2}", wave.amplitude())),
                Span::styled(
                    "   space start/stop  ↑↓ amplitude  ←→ speed  q quit",
                    Style::default().fg(Color::DarkGray),
                ),
            ]);

            let footer = Paragraph::new(status).style(
                Style::default()
                    .fg(Color::Rgb(185, 207, 212))
                    .bg(Color::Rgb(0, 0, 0)),
            );

            frame.render_widget(footer, footer_area);
        })?;

        Ok(())
    }

    /// Processes pending user input without blocking longer than `timeout`.
    ///
    /// # Errors
    /// - If event polling fails
    pub fn handle_input(&mut self, timeout: Duration) -> anyhow::Result<WaveCommand> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                return Ok(match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        tracing::debug!("Escape or 'q' pressed: quitting");
                        WaveCommand::Quit
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        tracing::debug!("Ctrl+C pressed: quitting");
                        WaveCommand::Quit
                    }
                    KeyCode::Char(' ') => WaveCommand::ToggleRun,
                    KeyCode::Up => WaveCommand::AmplitudeUp,
                    KeyCode::Down => WaveCommand::AmplitudeDown,
                    KeyCode::Right => WaveCommand::SpeedUp,
                    KeyCode::Left => WaveCommand::SpeedDown,
                    _ => WaveCommand::Continue,
                });
            }
        }
        Ok(WaveCommand::Continue)
    }

    /// Cleans up terminal state and exits alternate screen mode.
    ///
    /// # Errors
    /// - If terminal mode cannot be disabled
    /// - If cursor cannot be shown
    pub fn cleanup(&mut self) -> anyhow::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}
