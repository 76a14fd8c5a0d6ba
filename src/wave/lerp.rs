//! Linear interpolation of animated properties.
//!
//! Speed and amplitude are never changed directly: a new value is installed as
//! a target and the live value moves toward it a fraction at a time, once per frame.

/// Linear interpolation between `v0` and `v1` at rate `t`.
#[inline]
pub fn int_lerp(v0: f64, v1: f64, t: f64) -> f64 {
    v0 * (1.0 - t) + v1 * t
}

/// A scalar that converges toward an optional target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolated {
    value: f64,
    target: Option<f64>,
}

impl Interpolated {
    /// Creates a value that holds steady (no target).
    ///
    /// Unlike seeding the target with the value itself, this never takes a
    /// rounding step away from `value` before the first real target arrives.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            target: None,
        }
    }

    /// Current live value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Pending target, if the value is still converging.
    pub fn target(&self) -> Option<f64> {
        self.target
    }

    /// Installs a new target. The live value is left untouched.
    pub fn set_target(&mut self, target: f64) {
        self.target = Some(target);
    }

    /// Advances one interpolation step and returns the new live value.
    ///
    /// The target is cleared on the step where the computed value equals it exactly.
    pub fn step(&mut self, rate: f64) -> f64 {
        if let Some(target) = self.target {
            self.value = int_lerp(self.value, target, rate);
            if self.value - target == 0.0 {
                self.target = None;
            }
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_lerp_endpoints() {
        assert_eq!(int_lerp(1.0, 3.0, 0.0), 1.0);
        assert_eq!(int_lerp(1.0, 3.0, 1.0), 3.0);
        assert_eq!(int_lerp(1.0, 3.0, 0.5), 2.0);
    }

    #[test]
    fn test_set_target_does_not_move_value() {
        let mut v = Interpolated::new(1.0);
        v.set_target(5.0);
        assert_eq!(v.value(), 1.0);
        assert_eq!(v.target(), Some(5.0));
    }

    #[test]
    fn test_step_without_target_holds_steady() {
        let mut v = Interpolated::new(0.7);
        for _ in 0..10 {
            assert_eq!(v.step(0.1), 0.7);
        }
        assert_eq!(v.target(), None);
    }

    #[test]
    fn test_full_rate_converges_in_one_step() {
        let mut v = Interpolated::new(0.2);
        v.set_target(0.9);
        assert_eq!(v.step(1.0), 0.9);
        assert_eq!(v.target(), None);
    }

    #[test]
    fn test_converges_monotonically_and_clears_on_equality() {
        for &(start, target, rate) in &[
            (0.0, 1.0, 0.5),
            (1.0, 2.0, 0.1),
            (3.0, -1.0, 0.5),
            (-2.0, 6.0, 0.5),
        ] {
            let mut v = Interpolated::new(start);
            v.set_target(target);
            let mut previous_distance = (start - target).abs();

            for _ in 0..10_000 {
                let value = v.step(rate);
                let distance = (value - target).abs();
                assert!(distance <= previous_distance);
                previous_distance = distance;

                match v.target() {
                    Some(_) => assert_ne!(value, target),
                    None => {
                        assert_eq!(value, target);
                        break;
                    }
                }
            }
        }
    }

    #[test]
    fn test_half_rate_reaches_target_exactly() {
        let mut v = Interpolated::new(0.0);
        v.set_target(1.0);
        let mut steps = 0;
        while v.target().is_some() && steps < 200 {
            v.step(0.5);
            steps += 1;
        }
        assert_eq!(v.target(), None);
        assert_eq!(v.value(), 1.0);
    }

    #[test]
    fn test_never_overshoots_upward_target() {
        let mut v = Interpolated::new(1.0);
        v.set_target(2.0);
        let mut last = 1.0;
        for _ in 0..1_000 {
            let value = v.step(0.1);
            assert!(value <= 2.0);
            assert!(value >= last);
            last = value;
        }
    }
}
