//! Braille-canvas drawing surface for the terminal.
//!
//! Each terminal cell holds a 2x4 braille dot grid, so one dot is one device
//! pixel. Strokes are kept until the next clear and painted onto a ratatui
//! `Canvas` with their opacity pre-multiplied over the black background.

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::canvas::{Canvas, Line as CanvasLine},
};
use siriwave::{StrokeStyle, StrokedPath, Surface, SurfaceError, SurfaceHost, SurfaceLayout};

/// Braille dots per terminal cell, horizontally.
pub const DOTS_PER_COLUMN: f64 = 2.0;
/// Braille dots per terminal cell, vertically.
pub const DOTS_PER_ROW: f64 = 4.0;

/// Host backed by a rectangular terminal area.
#[derive(Debug, Clone, Copy)]
pub struct TerminalHost {
    columns: u16,
    rows: u16,
}

impl TerminalHost {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }
}

impl SurfaceHost for TerminalHost {
    type Surface = TerminalSurface;

    fn bounds(&self) -> (f64, f64) {
        (
            self.columns as f64 * DOTS_PER_COLUMN,
            self.rows as f64 * DOTS_PER_ROW,
        )
    }

    fn create_surface(&mut self) -> Result<TerminalSurface, SurfaceError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(SurfaceError::new(format!(
                "terminal area is empty ({}x{} cells)",
                self.columns, self.rows
            )));
        }
        Ok(TerminalSurface::default())
    }
}

/// Surface keeping the strokes of the current frame.
#[derive(Debug)]
pub struct TerminalSurface {
    width: f64,
    height: f64,
    layout: SurfaceLayout,
    path: Vec<(f64, f64)>,
    strokes: Vec<StrokedPath>,
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            layout: SurfaceLayout::Cover,
            path: Vec::new(),
            strokes: Vec::new(),
        }
    }
}

impl TerminalSurface {
    pub fn strokes(&self) -> &[StrokedPath] {
        &self.strokes
    }

    /// Part of `area` the surface occupies, centered when the layout is fixed.
    pub fn placement(&self, area: Rect) -> Rect {
        match self.layout {
            SurfaceLayout::Cover => area,
            SurfaceLayout::Fixed { width, height } => {
                let columns = ((width / DOTS_PER_COLUMN).ceil() as u16).min(area.width);
                let rows = ((height / DOTS_PER_ROW).ceil() as u16).min(area.height);
                Rect {
                    x: area.x + (area.width - columns) / 2,
                    y: area.y + (area.height - rows) / 2,
                    width: columns,
                    height: rows,
                }
            }
        }
    }

    /// Paints the current frame into `area` of the terminal frame.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let height = self.height;
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .background_color(Color::Black)
            .x_bounds([0.0, self.width])
            .y_bounds([0.0, self.height])
            .paint(|ctx| {
                for stroke in self.strokes() {
                    let tint = stroke.style.color.over_black(stroke.style.opacity);
                    let color = Color::Rgb(tint.r, tint.g, tint.b);
                    // Canvas y grows upward; surface y grows downward.
                    for segment in stroke.points.windows(2) {
                        ctx.draw(&CanvasLine {
                            x1: segment[0].0,
                            y1: height - segment[0].1,
                            x2: segment[1].0,
                            y2: height - segment[1].1,
                            color,
                        });
                    }
                }
            });
        frame.render_widget(canvas, self.placement(area));
    }
}

impl Surface for TerminalSurface {
    fn resize(&mut self, width: f64, height: f64, layout: SurfaceLayout) {
        self.width = width;
        self.height = height;
        self.layout = layout;
    }

    fn clear(&mut self, _width: f64, _height: f64) -> Result<(), SurfaceError> {
        self.strokes.clear();
        Ok(())
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push((x, y));
    }

    fn stroke(&mut self, style: &StrokeStyle) -> Result<(), SurfaceError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SurfaceError::new("surface has not been sized"));
        }
        self.strokes.push(StrokedPath {
            points: self.path.clone(),
            style: *style,
        });
        Ok(())
    }
}
