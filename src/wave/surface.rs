//! Drawing surface abstraction.
//!
//! The driver only needs a small path-stroking API: clear the previous frame,
//! build a polyline and stroke it. Hosts provide the surface and report the
//! bounds and pixel ratio used for default sizing.

use super::color::Rgb;
use super::error::SurfaceError;

/// How the surface is laid out inside its host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceLayout {
    /// Fill 100% of the host bounds
    Cover,
    /// Fixed logical size (device size divided by the pixel ratio)
    Fixed { width: f64, height: f64 },
}

/// Stroke parameters for one curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb,
    pub opacity: f64,
    pub line_width: f64,
}

impl StrokeStyle {
    /// CSS form of the stroke color, e.g. `rgba(255, 255, 255, 0.4)`.
    pub fn css(&self) -> String {
        self.color.rgba(self.opacity)
    }
}

/// A 2D surface the wave is drawn onto.
pub trait Surface {
    /// Sets the device-pixel dimensions and the layout inside the host.
    fn resize(&mut self, width: f64, height: f64, layout: SurfaceLayout);

    /// Erases the whole `width` x `height` area, leaving it transparent.
    fn clear(&mut self, width: f64, height: f64) -> Result<(), SurfaceError>;

    /// Starts a new empty path.
    fn begin_path(&mut self);

    /// Extends the current path. The first point of a path only positions the pen.
    fn line_to(&mut self, x: f64, y: f64);

    /// Strokes the current path.
    fn stroke(&mut self, style: &StrokeStyle) -> Result<(), SurfaceError>;
}

/// Provides drawing surfaces and the defaults they are sized from.
pub trait SurfaceHost {
    type Surface: Surface;

    /// Logical size of the host container.
    fn bounds(&self) -> (f64, f64);

    /// Device pixels per logical pixel.
    fn device_pixel_ratio(&self) -> f64 {
        1.0
    }

    /// Creates the surface the wave will own.
    fn create_surface(&mut self) -> Result<Self::Surface, SurfaceError>;
}

/// A stroked polyline as recorded by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct StrokedPath {
    pub points: Vec<(f64, f64)>,
    pub style: StrokeStyle,
}

/// Operations captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Resize {
        width: f64,
        height: f64,
        layout: SurfaceLayout,
    },
    Clear {
        width: f64,
        height: f64,
    },
    Stroke(StrokedPath),
}

/// In-memory surface that records every operation.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    path: Vec<(f64, f64)>,
    fail_after_strokes: Option<usize>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every stroke after the first `strokes` fail.
    pub fn failing_after(strokes: usize) -> Self {
        Self {
            fail_after_strokes: Some(strokes),
            ..Self::default()
        }
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drains the recorded operations.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    /// Strokes recorded since the last clear.
    pub fn current_frame(&self) -> Vec<&StrokedPath> {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, SurfaceOp::Clear { .. }))
            .map_or(0, |i| i + 1);
        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Stroke(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    pub fn stroke_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Stroke(_)))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: f64, height: f64, layout: SurfaceLayout) {
        self.ops.push(SurfaceOp::Resize {
            width,
            height,
            layout,
        });
    }

    fn clear(&mut self, width: f64, height: f64) -> Result<(), SurfaceError> {
        self.ops.push(SurfaceOp::Clear { width, height });
        Ok(())
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push((x, y));
    }

    fn stroke(&mut self, style: &StrokeStyle) -> Result<(), SurfaceError> {
        if let Some(limit) = self.fail_after_strokes {
            if self.stroke_count() >= limit {
                return Err(SurfaceError::new("stroke rejected by surface"));
            }
        }
        self.ops.push(SurfaceOp::Stroke(StrokedPath {
            points: self.path.clone(),
            style: *style,
        }));
        Ok(())
    }
}

/// Host producing [`RecordingSurface`]s with fixed bounds.
#[derive(Debug, Clone)]
pub struct RecordingHost {
    pub width: f64,
    pub height: f64,
    pub ratio: f64,
    pub available: bool,
    pub fail_after_strokes: Option<usize>,
}

impl RecordingHost {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ratio: 1.0,
            available: true,
            fail_after_strokes: None,
        }
    }
}

impl SurfaceHost for RecordingHost {
    type Surface = RecordingSurface;

    fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.ratio
    }

    fn create_surface(&mut self) -> Result<RecordingSurface, SurfaceError> {
        if !self.available {
            return Err(SurfaceError::new("no 2D context available"));
        }
        Ok(match self.fail_after_strokes {
            Some(limit) => RecordingSurface::failing_after(limit),
            None => RecordingSurface::new(),
        })
    }
}
