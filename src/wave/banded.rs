//! ios9 style: colored amplitude bands.
//!
//! Bands are scaled by their position in the set instead of a per-curve
//! attenuation, and use fixed stroke constants. A band flagged as support line
//! collapses into a flat reference line through the vertical center while the
//! wave is silent.

use std::f64::consts::PI;

use super::context::{attenuation_envelope, RenderContext};
use super::definition::ResolvedBand;
use super::error::SurfaceError;
use super::renderer::CurveRenderer;
use super::surface::{StrokeStyle, Surface};

/// Share of `height_max` the outermost band may use.
pub const AMPLITUDE_FACTOR: f64 = 0.8;
/// Angular frequency shared by all bands. The configured frequency is ignored in this style.
pub const FREQUENCY: f64 = 4.0;
/// Phase offset between consecutive bands.
pub const BAND_PHASE_SHIFT: f64 = PI / 3.0;
pub const LINE_WIDTH: f64 = 2.0;
pub const OPACITY: f64 = 0.8;
pub const SUPPORT_LINE_WIDTH: f64 = 1.0;
pub const SUPPORT_OPACITY: f64 = 0.5;
/// Amplitudes below this are treated as silence.
pub const SILENCE_THRESHOLD: f64 = 1e-3;

/// Height scale of band `index` out of `bands`: 1 for the first, shrinking linearly.
pub fn band_scale(index: usize, bands: usize) -> f64 {
    if bands == 0 {
        return 0.0;
    }
    (bands - index.min(bands)) as f64 / bands as f64
}

/// Vertical offset of band `index` at sweep value `i`.
pub fn ypos(i: f64, ctx: &RenderContext, index: usize, bands: usize) -> f64 {
    AMPLITUDE_FACTOR
        * attenuation_envelope(i)
        * (ctx.height_max * ctx.amplitude)
        * band_scale(index, bands)
        * (FREQUENCY * i - ctx.phase + index as f64 * BAND_PHASE_SHIFT).sin()
}

pub struct BandedRenderer {
    bands: Vec<ResolvedBand>,
}

impl BandedRenderer {
    pub fn new(bands: Vec<ResolvedBand>) -> Self {
        Self { bands }
    }

    fn draw_support_line(
        &self,
        surface: &mut dyn Surface,
        ctx: &RenderContext,
        band: &ResolvedBand,
    ) -> Result<(), SurfaceError> {
        surface.begin_path();
        surface.line_to(0.0, ctx.height_max);
        surface.line_to(ctx.width, ctx.height_max);
        surface.stroke(&StrokeStyle {
            color: band.color,
            opacity: SUPPORT_OPACITY,
            line_width: SUPPORT_LINE_WIDTH,
        })
    }

    fn draw_band(
        &self,
        surface: &mut dyn Surface,
        ctx: &RenderContext,
        index: usize,
        band: &ResolvedBand,
    ) -> Result<(), SurfaceError> {
        let bands = self.bands.len();
        surface.begin_path();
        for i in ctx.sweep() {
            surface.line_to(ctx.xpos(i), ctx.height_max + ypos(i, ctx, index, bands));
        }
        surface.stroke(&StrokeStyle {
            color: band.color,
            opacity: OPACITY,
            line_width: LINE_WIDTH,
        })
    }
}

impl CurveRenderer for BandedRenderer {
    fn curve_count(&self) -> usize {
        self.bands.len()
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &RenderContext) -> Result<(), SurfaceError> {
        let silent = ctx.amplitude.abs() < SILENCE_THRESHOLD;
        for (index, band) in self.bands.iter().enumerate() {
            if band.support_line && silent {
                self.draw_support_line(surface, ctx, band)?;
            } else {
                self.draw_band(surface, ctx, index, band)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::color::Rgb;
    use crate::wave::context::WaveEnv;
    use crate::wave::definition::{CurveSet, CurveStyle};
    use crate::wave::surface::RecordingSurface;

    fn context(amplitude: f64) -> RenderContext {
        RenderContext {
            width: 600.0,
            height: 300.0,
            height_max: 144.0,
            color: Rgb::WHITE,
            phase: 0.7,
            amplitude,
            speed: 0.2,
            env: WaveEnv {
                frequency: 6.0,
                pixel_depth: 0.05,
            },
        }
    }

    fn default_renderer() -> BandedRenderer {
        match CurveSet::resolve(CurveStyle::Ios9, None).unwrap() {
            CurveSet::Banded(bands) => BandedRenderer::new(bands),
            CurveSet::Attenuated(_) => unreachable!(),
        }
    }

    #[test]
    fn test_band_scale_shrinks_with_index() {
        assert_eq!(band_scale(0, 4), 1.0);
        assert_eq!(band_scale(1, 4), 0.75);
        assert_eq!(band_scale(3, 4), 0.25);
        assert_eq!(band_scale(0, 0), 0.0);
    }

    #[test]
    fn test_bands_use_own_colors_and_style_constants() {
        let renderer = default_renderer();
        let mut surface = RecordingSurface::new();
        renderer.draw(&mut surface, &context(1.0)).unwrap();

        let strokes = surface.current_frame();
        assert_eq!(strokes.len(), 4);
        assert_eq!(strokes[1].style.color, Rgb::new(15, 82, 169));
        assert_eq!(strokes[3].style.color, Rgb::new(48, 220, 155));
        for stroke in &strokes {
            assert_eq!(stroke.style.opacity, OPACITY);
            assert_eq!(stroke.style.line_width, LINE_WIDTH);
        }
    }

    #[test]
    fn test_support_line_is_flat_when_silent() {
        let renderer = default_renderer();
        let mut surface = RecordingSurface::new();
        renderer.draw(&mut surface, &context(0.0)).unwrap();

        let strokes = surface.current_frame();
        assert_eq!(strokes[0].points, vec![(0.0, 144.0), (600.0, 144.0)]);
        assert_eq!(strokes[0].style.opacity, SUPPORT_OPACITY);
        assert!(strokes[1].points.len() > 2);
    }

    #[test]
    fn test_support_line_follows_wave_when_loud() {
        let renderer = default_renderer();
        let mut surface = RecordingSurface::new();
        renderer.draw(&mut surface, &context(1.0)).unwrap();

        let support = surface.current_frame()[0].clone();
        assert!(support.points.len() > 2);
        assert!(support.points.iter().any(|&(_, y)| (y - 144.0).abs() > 1.0));
    }

    #[test]
    fn test_bands_stay_within_height() {
        let renderer = default_renderer();
        let mut surface = RecordingSurface::new();
        let ctx = context(1.0);
        renderer.draw(&mut surface, &ctx).unwrap();

        let limit = AMPLITUDE_FACTOR * ctx.height_max;
        for stroke in surface.current_frame() {
            assert!(stroke
                .points
                .iter()
                .all(|&(_, y)| (y - ctx.height_max).abs() <= limit + 1e-9));
        }
    }
}
