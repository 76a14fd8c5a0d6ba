//! Renderer selection.

use super::banded::BandedRenderer;
use super::classic::ClassicRenderer;
use super::context::RenderContext;
use super::definition::CurveSet;
use super::error::SurfaceError;
use super::surface::Surface;

/// Strokes every curve it owns for one frame.
pub trait CurveRenderer {
    /// Number of curves stroked per frame.
    fn curve_count(&self) -> usize;

    /// Draws all curves, in definition order, from one frame snapshot.
    fn draw(&self, surface: &mut dyn Surface, ctx: &RenderContext) -> Result<(), SurfaceError>;
}

/// Picks the renderer matching the set's curve kind.
pub fn renderer_for(set: CurveSet) -> Box<dyn CurveRenderer> {
    match set {
        CurveSet::Attenuated(curves) => Box::new(ClassicRenderer::new(curves)),
        CurveSet::Banded(bands) => Box::new(BandedRenderer::new(bands)),
    }
}
