//! Per-frame render snapshot and the shared sweep geometry.

use serde::{Deserialize, Serialize};

use super::color::Rgb;

/// Half-width of the sweep domain `[-GRAPH_X, GRAPH_X]`.
pub const GRAPH_X: f64 = 2.0;

/// Exponent of the global attenuation envelope.
pub const ATT_FACTOR: f64 = 4.0;

/// Margin kept between the tallest crest and the surface edge, in device pixels.
pub const HEIGHT_MARGIN: f64 = 6.0;

/// Smallest accepted sweep step. Finer steps cost 40k+ points per curve per frame.
pub const MIN_PIXEL_DEPTH: f64 = 1e-4;

/// Environment parameters a renderer needs besides the live state.
///
/// This is the reduced option set handed to a renderer running outside the driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveEnv {
    pub frequency: f64,
    pub pixel_depth: f64,
}

/// Immutable snapshot handed to the renderer once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    pub width: f64,
    pub height: f64,
    pub height_max: f64,
    pub color: Rgb,
    pub phase: f64,
    pub amplitude: f64,
    pub speed: f64,
    pub env: WaveEnv,
}

impl RenderContext {
    /// Maps a sweep value onto the surface width.
    pub fn xpos(&self, i: f64) -> f64 {
        xpos(i, self.width)
    }

    /// Sweep values for this frame.
    pub fn sweep(&self) -> Sweep {
        Sweep::new(self.env.pixel_depth)
    }
}

/// `width * (i + X) / (2X)`: `-X` lands on 0 and `+X` on `width`.
pub fn xpos(i: f64, width: f64) -> f64 {
    width * ((i + GRAPH_X) / (GRAPH_X * 2.0))
}

/// Windowing function fading curves toward both ends of the sweep.
pub fn attenuation_envelope(i: f64) -> f64 {
    (ATT_FACTOR / (ATT_FACTOR + i.powf(ATT_FACTOR))).powf(ATT_FACTOR)
}

/// Iterates `i` from `-GRAPH_X` while `i <= GRAPH_X`, accumulating `step` each time.
///
/// Ends early if adding `step` no longer moves `i`.
#[derive(Debug, Clone)]
pub struct Sweep {
    next: f64,
    step: f64,
}

impl Sweep {
    pub fn new(step: f64) -> Self {
        Self {
            next: -GRAPH_X,
            step,
        }
    }
}

impl Iterator for Sweep {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.step.is_nan() || self.step <= 0.0 || self.next > GRAPH_X {
            return None;
        }
        let current = self.next;
        let advanced = current + self.step;
        if advanced <= current {
            return None;
        }
        self.next = advanced;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xpos_maps_sweep_onto_width() {
        assert_eq!(xpos(-GRAPH_X, 800.0), 0.0);
        assert_eq!(xpos(0.0, 800.0), 400.0);
        assert_eq!(xpos(GRAPH_X, 800.0), 800.0);
    }

    #[test]
    fn test_envelope_peaks_at_center_and_is_symmetric() {
        assert_eq!(attenuation_envelope(0.0), 1.0);
        assert_eq!(attenuation_envelope(1.5), attenuation_envelope(-1.5));
        assert!(attenuation_envelope(2.0) < attenuation_envelope(1.0));
        assert!(attenuation_envelope(2.0) > 0.0);
    }

    #[test]
    fn test_sweep_covers_domain() {
        let samples: Vec<f64> = Sweep::new(0.5).collect();
        assert_eq!(samples, vec![-2.0, -1.5, -1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_sweep_with_fine_step() {
        let samples: Vec<f64> = Sweep::new(0.02).collect();
        assert!(samples.len() >= 200 && samples.len() <= 201);
        assert_eq!(samples[0], -2.0);
        assert!(samples.iter().all(|i| *i <= GRAPH_X));
    }

    #[test]
    fn test_sweep_ends_when_step_is_below_precision() {
        assert_eq!(Sweep::new(1e-17).take(5).count(), 0);
    }

    #[test]
    fn test_sweep_rejects_non_positive_step() {
        assert_eq!(Sweep::new(0.0).count(), 0);
        assert_eq!(Sweep::new(-0.1).count(), 0);
    }
}
