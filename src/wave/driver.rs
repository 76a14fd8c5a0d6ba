//! Animation driver.
//!
//! Owns the wave state (phase, speed, amplitude, running flag) and runs the
//! draw cycle: clear, interpolate, draw every curve, advance the phase,
//! reschedule. Speed and amplitude changes are always interpolated.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use super::color::Rgb;
use super::context::{RenderContext, WaveEnv, HEIGHT_MARGIN, MIN_PIXEL_DEPTH};
use super::definition::{CurveDefinition, CurveSet, CurveStyle};
use super::error::WaveError;
use super::lerp::Interpolated;
use super::renderer::{renderer_for, CurveRenderer};
use super::scheduler::{FrameHandle, FrameScheduler, TIMER_FALLBACK};
use super::surface::{Surface, SurfaceHost, SurfaceLayout};

/// Construction options. Unset sizes and ratio come from the host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Options {
    /// Curve style and default curve set
    pub style: CurveStyle,
    /// Device pixel ratio (host display scale when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
    pub speed: f64,
    pub amplitude: f64,
    /// Angular frequency of the sinusoid (classic style only)
    pub frequency: f64,
    /// Base stroke color (classic style only)
    pub color: String,
    /// Fill the host instead of keeping a fixed logical size
    pub cover: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    pub autostart: bool,
    /// Sweep sampling step
    pub pixel_depth: f64,
    /// Interpolation rate per frame, in `(0, 1]`
    pub lerp_speed: f64,
    /// Overrides the style's default curves
    #[serde(rename = "curves", skip_serializing_if = "Option::is_none")]
    pub curve_definition: Option<Vec<CurveDefinition>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            style: CurveStyle::default(),
            ratio: None,
            speed: 0.2,
            amplitude: 1.0,
            frequency: 6.0,
            color: "#fff".to_string(),
            cover: false,
            width: None,
            height: None,
            autostart: true,
            pixel_depth: 0.02,
            lerp_speed: 0.1,
            curve_definition: None,
        }
    }
}

impl Options {
    fn validate(&self) -> Result<(), WaveError> {
        let invalid = |name: &'static str, reason: String| WaveError::InvalidOption { name, reason };

        if !self.pixel_depth.is_finite() || self.pixel_depth < MIN_PIXEL_DEPTH {
            return Err(invalid(
                "pixel_depth",
                format!(
                    "must be a number of at least {MIN_PIXEL_DEPTH}, got {}",
                    self.pixel_depth
                ),
            ));
        }
        if self.lerp_speed.is_nan() || self.lerp_speed <= 0.0 || self.lerp_speed > 1.0 {
            return Err(invalid(
                "lerp_speed",
                format!("must be within (0, 1], got {}", self.lerp_speed),
            ));
        }
        if let Some(ratio) = self.ratio {
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(invalid("ratio", format!("must be positive, got {ratio}")));
            }
        }
        for (name, value) in [
            ("speed", self.speed),
            ("amplitude", self.amplitude),
            ("frequency", self.frequency),
        ] {
            if !value.is_finite() {
                return Err(invalid(name, format!("must be finite, got {value}")));
            }
        }
        Ok(())
    }
}

/// Interpolated properties that can be set at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Speed,
    Amplitude,
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Speed => write!(f, "speed"),
            Self::Amplitude => write!(f, "amplitude"),
        }
    }
}

impl FromStr for Property {
    type Err = WaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "speed" => Ok(Self::Speed),
            "amplitude" => Ok(Self::Amplitude),
            other => Err(WaveError::UnknownProperty(other.to_string())),
        }
    }
}

/// An animated wave drawn onto a surface it owns.
pub struct SiriWave<S: Surface, F: FrameScheduler> {
    surface: S,
    scheduler: F,
    renderer: Box<dyn CurveRenderer>,
    style: CurveStyle,
    env: WaveEnv,
    lerp_speed: f64,
    phase: f64,
    running: bool,
    speed: Interpolated,
    amplitude: Interpolated,
    width: f64,
    height: f64,
    height_max: f64,
    color: Rgb,
    pending: Option<FrameHandle>,
    frames: u64,
}

impl<S: Surface, F: FrameScheduler> SiriWave<S, F> {
    /// Creates the wave, its surface and its curves, and starts it if `autostart` is set.
    ///
    /// # Errors
    /// - If an option is out of range or the color is malformed
    /// - If the curve definitions are invalid for the style
    /// - If the host cannot create a surface
    /// - If the first draw cycle fails (autostart only)
    pub fn new<H>(host: &mut H, scheduler: F, options: Options) -> Result<Self, WaveError>
    where
        H: SurfaceHost<Surface = S>,
    {
        options.validate()?;

        let ratio = options.ratio.unwrap_or_else(|| host.device_pixel_ratio());
        let (host_width, host_height) = host.bounds();
        let width = ratio * options.width.unwrap_or(host_width);
        let height = ratio * options.height.unwrap_or(host_height);
        if !width.is_finite() || width <= 0.0 || !height.is_finite() || height <= 0.0 {
            return Err(WaveError::InvalidOption {
                name: "width/height",
                reason: format!("surface must have a positive size, got {width}x{height}"),
            });
        }

        let color = Rgb::parse(&options.color)?;
        let curves = CurveSet::resolve(options.style, options.curve_definition.as_deref())?;

        let mut surface = host
            .create_surface()
            .map_err(WaveError::SurfaceUnavailable)?;
        let layout = if options.cover {
            SurfaceLayout::Cover
        } else {
            SurfaceLayout::Fixed {
                width: width / ratio,
                height: height / ratio,
            }
        };
        surface.resize(width, height, layout);

        tracing::debug!(
            "Wave created: style={}, {}x{} px (ratio {}), {} curves",
            options.style,
            width,
            height,
            ratio,
            curves.len()
        );

        let mut wave = SiriWave {
            surface,
            scheduler,
            renderer: renderer_for(curves),
            style: options.style,
            env: WaveEnv {
                frequency: options.frequency,
                pixel_depth: options.pixel_depth,
            },
            lerp_speed: options.lerp_speed,
            phase: 0.0,
            running: false,
            // No initial targets: the option values are held exactly from the first frame.
            speed: Interpolated::new(options.speed),
            amplitude: Interpolated::new(options.amplitude),
            width,
            height,
            height_max: height / 2.0 - HEIGHT_MARGIN,
            color,
            pending: None,
            frames: 0,
        };

        if options.autostart {
            wave.start()?;
        }

        Ok(wave)
    }

    /// Starts the animation and runs the first cycle immediately.
    ///
    /// Does nothing while already running.
    ///
    /// # Errors
    /// - If the first cycle fails to draw (the wave is stopped again)
    pub fn start(&mut self) -> Result<(), WaveError> {
        if self.running {
            tracing::trace!("Start ignored: wave already running");
            return Ok(());
        }
        self.phase = 0.0;
        self.running = true;
        tracing::debug!("Wave started");
        self.run_cycle()
    }

    /// Stops the animation, resets the phase and cancels the pending cycle.
    pub fn stop(&mut self) {
        self.phase = 0.0;
        self.halt();
        tracing::debug!("Wave stopped");
    }

    /// Installs a new interpolation target for `property`.
    ///
    /// Non-finite values are ignored.
    pub fn set(&mut self, property: Property, value: f64) {
        if !value.is_finite() {
            tracing::warn!("Ignoring non-finite {} target: {}", property, value);
            return;
        }
        tracing::debug!("Interpolating {} to {}", property, value);
        match property {
            Property::Speed => self.speed.set_target(value),
            Property::Amplitude => self.amplitude.set_target(value),
        }
    }

    /// Like [`SiriWave::set`], with the property given by name.
    ///
    /// # Errors
    /// - If `name` is neither `speed` nor `amplitude`
    pub fn set_by_name(&mut self, name: &str, value: f64) -> Result<(), WaveError> {
        let property = name.parse::<Property>()?;
        self.set(property, value);
        Ok(())
    }

    pub fn set_speed(&mut self, value: f64) {
        self.set(Property::Speed, value);
    }

    pub fn set_amplitude(&mut self, value: f64) {
        self.set(Property::Amplitude, value);
    }

    /// Runs the pending cycle if its scheduled time has come.
    ///
    /// Returns whether a cycle ran.
    ///
    /// # Errors
    /// - If the cycle fails to draw (the wave is stopped)
    pub fn pump(&mut self, now: Instant) -> Result<bool, WaveError> {
        if !self.running {
            return Ok(false);
        }
        let Some(handle) = self.pending else {
            return Ok(false);
        };
        if !self.scheduler.fire(handle, now) {
            return Ok(false);
        }
        self.pending = None;
        self.run_cycle()?;
        Ok(true)
    }

    /// Snapshot of the state the next frame is drawn from.
    pub fn render_context(&self) -> RenderContext {
        RenderContext {
            width: self.width,
            height: self.height,
            height_max: self.height_max,
            color: self.color,
            phase: self.phase,
            amplitude: self.amplitude.value(),
            speed: self.speed.value(),
            env: self.env,
        }
    }

    fn run_cycle(&mut self) -> Result<(), WaveError> {
        if let Err(err) = self.draw_cycle() {
            tracing::error!("Draw cycle failed, stopping wave: {err}");
            self.halt();
            return Err(err);
        }
        Ok(())
    }

    fn draw_cycle(&mut self) -> Result<(), WaveError> {
        self.surface.clear(self.width, self.height)?;

        self.amplitude.step(self.lerp_speed);
        self.speed.step(self.lerp_speed);

        let ctx = self.render_context();
        self.renderer.draw(&mut self.surface, &ctx)?;

        self.phase = (self.phase + FRAC_PI_2 * self.speed.value()).rem_euclid(TAU);
        self.frames += 1;
        tracing::trace!(
            "Frame {}: phase={:.4}, speed={:.4}, amplitude={:.4}",
            self.frames,
            self.phase,
            self.speed.value(),
            self.amplitude.value()
        );

        self.schedule_next();
        Ok(())
    }

    fn schedule_next(&mut self) {
        let handle = match self.scheduler.request_animation_frame() {
            Some(handle) => handle,
            None => self.scheduler.set_timeout(TIMER_FALLBACK),
        };
        self.pending = Some(handle);
    }

    fn halt(&mut self) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn speed(&self) -> f64 {
        self.speed.value()
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude.value()
    }

    /// Pending speed target, if still converging.
    pub fn speed_target(&self) -> Option<f64> {
        self.speed.target()
    }

    /// Pending amplitude target, if still converging.
    pub fn amplitude_target(&self) -> Option<f64> {
        self.amplitude.target()
    }

    /// Surface width in device pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Surface height in device pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn height_max(&self) -> f64 {
        self.height_max
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn style(&self) -> CurveStyle {
        self.style
    }

    /// Reduced environment for renderers running outside the driver.
    pub fn env(&self) -> WaveEnv {
        self.env
    }

    pub fn curve_count(&self) -> usize {
        self.renderer.curve_count()
    }

    /// Number of cycles completed since construction.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::definition::AttenuatedCurve;
    use crate::wave::scheduler::FrameLoop;
    use crate::wave::surface::{RecordingHost, RecordingSurface, SurfaceOp};
    use std::time::Duration;

    type TestWave = SiriWave<RecordingSurface, FrameLoop>;

    fn manual() -> Options {
        Options {
            autostart: false,
            ..Options::default()
        }
    }

    fn build(options: Options) -> TestWave {
        let mut host = RecordingHost::new(800.0, 200.0);
        SiriWave::new(&mut host, FrameLoop::new(), options).unwrap()
    }

    /// Presents a frame and runs the cycle it releases.
    fn advance(wave: &mut TestWave) -> bool {
        wave.scheduler_mut().present();
        wave.pump(Instant::now()).unwrap()
    }

    #[test]
    fn test_construction_defaults() {
        let wave = build(manual());
        assert_eq!(wave.phase(), 0.0);
        assert!(!wave.is_running());
        assert_eq!(wave.speed(), 0.2);
        assert_eq!(wave.amplitude(), 1.0);
        assert_eq!(wave.width(), 800.0);
        assert_eq!(wave.height_max(), 94.0);
        assert_eq!(wave.color(), Rgb::WHITE);
        assert_eq!(wave.curve_count(), 5);
        assert_eq!(
            wave.env(),
            WaveEnv {
                frequency: 6.0,
                pixel_depth: 0.02,
            }
        );
        assert_eq!(wave.pending(), None);
    }

    #[test]
    fn test_ratio_scales_surface() {
        let mut host = RecordingHost::new(400.0, 100.0);
        host.ratio = 2.0;
        let wave: TestWave = SiriWave::new(&mut host, FrameLoop::new(), manual()).unwrap();

        assert_eq!(wave.width(), 800.0);
        assert_eq!(wave.height(), 200.0);
        assert_eq!(
            wave.surface().ops()[0],
            SurfaceOp::Resize {
                width: 800.0,
                height: 200.0,
                layout: SurfaceLayout::Fixed {
                    width: 400.0,
                    height: 100.0,
                },
            }
        );
    }

    #[test]
    fn test_cover_layout_and_explicit_size() {
        let wave = build(Options {
            cover: true,
            width: Some(320.0),
            height: Some(120.0),
            ratio: Some(1.0),
            ..manual()
        });
        assert_eq!(wave.width(), 320.0);
        assert_eq!(wave.height_max(), 54.0);
        assert!(matches!(
            wave.surface().ops()[0],
            SurfaceOp::Resize {
                layout: SurfaceLayout::Cover,
                ..
            }
        ));
    }

    #[test]
    fn test_autostart_runs_first_cycle() {
        let wave = build(Options::default());
        assert!(wave.is_running());
        assert_eq!(wave.frame_count(), 1);
        assert_eq!(wave.surface().current_frame().len(), 5);
        assert!(wave.pending().is_some());
    }

    #[test]
    fn test_single_cycle_scenario() {
        let mut wave = build(manual());
        wave.start().unwrap();

        assert!((wave.phase() - FRAC_PI_2 * 0.2).abs() < 1e-15);
        assert!((wave.phase() - 0.314_159_265).abs() < 1e-8);

        // The frame was drawn with the phase from before the advance (0).
        let strokes = wave.surface().current_frame();
        assert_eq!(strokes.len(), 5);
        for stroke in &strokes {
            let center = stroke
                .points
                .iter()
                .min_by(|a, b| (a.0 - 400.0).abs().total_cmp(&(b.0 - 400.0).abs()))
                .unwrap();
            assert!((center.0 - 400.0).abs() < 1e-9);
            assert!((center.1 - wave.height_max()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_cycle_ops_order() {
        let mut wave = build(manual());
        wave.surface_mut().take_ops();
        wave.start().unwrap();

        let ops = wave.surface().ops();
        assert_eq!(
            ops[0],
            SurfaceOp::Clear {
                width: 800.0,
                height: 200.0,
            }
        );
        assert!(ops[1..].iter().all(|op| matches!(op, SurfaceOp::Stroke(_))));
        assert_eq!(ops.len(), 6);
    }

    #[test]
    fn test_phase_after_n_cycles() {
        let mut wave = build(manual());
        wave.start().unwrap();
        let cycles = 37;
        for _ in 1..cycles {
            assert!(advance(&mut wave));
        }

        let expected = (cycles as f64 * FRAC_PI_2 * 0.2) % TAU;
        assert_eq!(wave.frame_count(), cycles);
        assert!((wave.phase() - expected).abs() < 1e-9);
        assert!(wave.phase() >= 0.0 && wave.phase() < TAU);
    }

    #[test]
    fn test_phase_is_independent_of_amplitude() {
        let mut quiet = build(Options {
            amplitude: 0.1,
            ..manual()
        });
        let mut loud = build(Options {
            amplitude: 3.0,
            ..manual()
        });
        quiet.start().unwrap();
        loud.start().unwrap();
        for _ in 0..10 {
            advance(&mut quiet);
            advance(&mut loud);
        }
        assert_eq!(quiet.phase(), loud.phase());
    }

    #[test]
    fn test_stop_then_start_resets_phase() {
        let mut wave = build(manual());
        wave.start().unwrap();
        for _ in 0..5 {
            advance(&mut wave);
        }
        assert!(wave.phase() > 0.0);

        wave.stop();
        assert_eq!(wave.phase(), 0.0);
        assert!(!wave.is_running());

        wave.start().unwrap();
        assert!((wave.phase() - FRAC_PI_2 * 0.2).abs() < 1e-15);
    }

    #[test]
    fn test_start_while_running_is_idempotent() {
        let mut wave = build(manual());
        wave.start().unwrap();
        advance(&mut wave);
        let phase = wave.phase();
        let frames = wave.frame_count();

        wave.start().unwrap();
        assert_eq!(wave.phase(), phase);
        assert_eq!(wave.frame_count(), frames);
        assert_eq!(wave.scheduler().armed(), 1);
    }

    #[test]
    fn test_only_one_continuation_is_ever_armed() {
        let mut wave = build(manual());
        wave.start().unwrap();
        for _ in 0..20 {
            advance(&mut wave);
            wave.start().unwrap();
            assert_eq!(wave.scheduler().armed(), 1);
        }
    }

    #[test]
    fn test_stop_cancels_pending_cycle() {
        let mut wave = build(manual());
        wave.start().unwrap();
        wave.stop();

        assert_eq!(wave.scheduler().armed(), 0);
        assert_eq!(wave.pending(), None);
        assert!(!advance(&mut wave));
        assert_eq!(wave.frame_count(), 1);
    }

    #[test]
    fn test_pump_waits_for_next_frame() {
        let mut wave = build(manual());
        wave.start().unwrap();
        assert!(!wave.pump(Instant::now()).unwrap());
        assert!(advance(&mut wave));
    }

    #[test]
    fn test_timer_fallback_when_frame_callbacks_missing() {
        let mut host = RecordingHost::new(800.0, 200.0);
        let mut wave: TestWave =
            SiriWave::new(&mut host, FrameLoop::timer_only(), Options::default()).unwrap();

        assert!(matches!(wave.pending(), Some(FrameHandle::Timeout(_))));
        let later = Instant::now() + TIMER_FALLBACK + Duration::from_millis(5);
        assert!(wave.pump(later).unwrap());
        assert_eq!(wave.frame_count(), 2);
        assert!(matches!(wave.pending(), Some(FrameHandle::Timeout(_))));
    }

    #[test]
    fn test_set_only_installs_target() {
        let mut wave = build(manual());
        wave.set(Property::Amplitude, 2.0);
        assert_eq!(wave.amplitude(), 1.0);
        assert_eq!(wave.amplitude_target(), Some(2.0));

        wave.set_speed(0.5);
        assert_eq!(wave.speed(), 0.2);
        assert_eq!(wave.speed_target(), Some(0.5));
    }

    #[test]
    fn test_non_finite_targets_are_ignored() {
        let mut wave = build(manual());
        wave.set_speed(f64::INFINITY);
        wave.set_amplitude(f64::NAN);
        wave.set(Property::Speed, f64::NEG_INFINITY);
        assert_eq!(wave.speed_target(), None);
        assert_eq!(wave.amplitude_target(), None);

        wave.start().unwrap();
        for _ in 0..10 {
            advance(&mut wave);
            assert!(wave.phase() >= 0.0 && wave.phase() < TAU);
        }
        assert_eq!(wave.speed(), 0.2);
        assert_eq!(wave.amplitude(), 1.0);
    }

    #[test]
    fn test_option_values_hold_without_drift() {
        let mut wave = build(Options {
            speed: 0.3,
            amplitude: 0.7,
            ..manual()
        });
        assert_eq!(wave.speed_target(), None);
        wave.start().unwrap();
        for _ in 0..5 {
            advance(&mut wave);
        }
        assert_eq!(wave.speed(), 0.3);
        assert_eq!(wave.amplitude(), 0.7);
    }

    #[test]
    fn test_unadvanceable_pixel_depth_is_rejected() {
        let mut host = RecordingHost::new(800.0, 200.0);
        let result = SiriWave::new(
            &mut host,
            FrameLoop::new(),
            Options {
                pixel_depth: 1e-17,
                ..Options::default()
            },
        );
        assert!(matches!(
            result,
            Err(WaveError::InvalidOption {
                name: "pixel_depth",
                ..
            })
        ));
    }

    #[test]
    fn test_amplitude_approaches_target_without_overshoot() {
        let mut wave = build(manual());
        wave.set_by_name("amplitude", 2.0).unwrap();
        wave.start().unwrap();

        let mut last = wave.amplitude();
        assert!(last > 1.0);
        for _ in 0..500 {
            advance(&mut wave);
            let amplitude = wave.amplitude();
            assert!(amplitude <= 2.0);
            assert!(amplitude >= last);
            last = amplitude;
        }
        assert!((last - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_speed_interpolation_changes_phase_step() {
        let mut wave = build(manual());
        wave.set_speed(1.0);
        wave.start().unwrap();
        let interpolated = wave.speed();
        assert!((interpolated - 0.28).abs() < 1e-12);
        assert!((wave.phase() - FRAC_PI_2 * interpolated).abs() < 1e-15);
    }

    #[test]
    fn test_unknown_property_is_rejected() {
        let mut wave = build(manual());
        assert!(matches!(
            wave.set_by_name("frequency", 3.0),
            Err(WaveError::UnknownProperty(_))
        ));
    }

    #[test]
    fn test_surface_unavailable_aborts_construction() {
        let mut host = RecordingHost::new(800.0, 200.0);
        host.available = false;
        let result: Result<TestWave, _> = SiriWave::new(&mut host, FrameLoop::new(), manual());
        assert!(matches!(result, Err(WaveError::SurfaceUnavailable(_))));
    }

    #[test]
    fn test_zero_attenuation_aborts_construction() {
        let mut host = RecordingHost::new(800.0, 200.0);
        let options = Options {
            curve_definition: Some(vec![CurveDefinition::Attenuated(AttenuatedCurve {
                attenuation: 0.0,
                line_width: 1.0,
                opacity: 1.0,
            })]),
            ..manual()
        };
        let result: Result<TestWave, _> = SiriWave::new(&mut host, FrameLoop::new(), options);
        assert!(matches!(
            result,
            Err(WaveError::ZeroAttenuation { index: 0 })
        ));
    }

    #[test]
    fn test_invalid_options_abort_construction() {
        let cases = [
            Options {
                color: "#zzz".to_string(),
                ..manual()
            },
            Options {
                pixel_depth: 0.0,
                ..manual()
            },
            Options {
                lerp_speed: 1.5,
                ..manual()
            },
            Options {
                width: Some(0.0),
                ..manual()
            },
        ];
        for options in cases {
            let mut host = RecordingHost::new(800.0, 200.0);
            let result: Result<TestWave, _> = SiriWave::new(&mut host, FrameLoop::new(), options);
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_draw_failure_stops_cleanly() {
        let mut host = RecordingHost::new(800.0, 200.0);
        host.fail_after_strokes = Some(7);
        let mut wave: TestWave = SiriWave::new(&mut host, FrameLoop::new(), manual()).unwrap();

        wave.start().unwrap();
        wave.scheduler_mut().present();
        let result = wave.pump(Instant::now());

        assert!(matches!(result, Err(WaveError::Draw(_))));
        assert!(!wave.is_running());
        assert_eq!(wave.scheduler().armed(), 0);
        assert!(!advance(&mut wave));
    }

    #[test]
    fn test_banded_style_draws_its_set() {
        let wave = build(Options {
            style: CurveStyle::Ios9,
            ..Options::default()
        });
        assert_eq!(wave.style(), CurveStyle::Ios9);
        assert_eq!(wave.curve_count(), 4);
        assert_eq!(wave.surface().current_frame().len(), 4);
    }

    #[test]
    fn test_options_from_toml() {
        let options: Options = toml::from_str(
            r#"
            style = "ios9"
            speed = 0.5
            pixel_depth = 0.01
            "#,
        )
        .unwrap();
        assert_eq!(options.style, CurveStyle::Ios9);
        assert_eq!(options.speed, 0.5);
        assert_eq!(options.amplitude, 1.0);
        assert_eq!(options.lerp_speed, 0.1);
        assert!(options.autostart);
    }
}
