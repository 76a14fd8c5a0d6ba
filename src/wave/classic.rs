//! Classic style: layered attenuated curves.
//!
//! Every curve shares the frame's phase, amplitude and frequency. Each one is
//! scaled by `1 / attenuation` and stroked with its own width and opacity, so
//! the translucent layers add up to a glowing wave.

use super::context::{attenuation_envelope, RenderContext};
use super::definition::AttenuatedCurve;
use super::error::SurfaceError;
use super::renderer::CurveRenderer;
use super::surface::{StrokeStyle, Surface};

/// Share of `height_max` the tallest curve may use.
pub const AMPLITUDE_FACTOR: f64 = 0.6;

/// Vertical offset from the center line at sweep value `i`.
pub fn ypos(i: f64, ctx: &RenderContext, curve: &AttenuatedCurve) -> f64 {
    AMPLITUDE_FACTOR
        * (attenuation_envelope(i)
            * (ctx.height_max * ctx.amplitude)
            * (1.0 / curve.attenuation)
            * (ctx.env.frequency * i - ctx.phase).sin())
}

pub struct ClassicRenderer {
    curves: Vec<AttenuatedCurve>,
}

impl ClassicRenderer {
    pub fn new(curves: Vec<AttenuatedCurve>) -> Self {
        Self { curves }
    }

    fn draw_curve(
        &self,
        surface: &mut dyn Surface,
        ctx: &RenderContext,
        curve: &AttenuatedCurve,
    ) -> Result<(), SurfaceError> {
        surface.begin_path();
        for i in ctx.sweep() {
            surface.line_to(ctx.xpos(i), ctx.height_max + ypos(i, ctx, curve));
        }
        surface.stroke(&StrokeStyle {
            color: ctx.color,
            opacity: curve.opacity,
            line_width: curve.line_width,
        })
    }
}

impl CurveRenderer for ClassicRenderer {
    fn curve_count(&self) -> usize {
        self.curves.len()
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &RenderContext) -> Result<(), SurfaceError> {
        for curve in &self.curves {
            self.draw_curve(surface, ctx, curve)?;
        }
        Ok(())
    }
}
