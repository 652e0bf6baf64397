//! Damped spring interpolation for scroll-driven values.
//!
//! Parameterized by stiffness, damping, and mass so the page's tuning
//! values read the same as the design they came from. Integration is
//! semi-implicit Euler with a clamped timestep; a step that would carry
//! the value past its target snaps to the target instead, so the output
//! never overshoots.

/// Largest timestep fed into the integrator. Frames delayed longer than
/// this (background tab, debugger pause) advance by this much instead.
pub const MAX_STEP: f64 = 1.0 / 30.0;

const REST_DELTA: f64 = 0.001;
const REST_SPEED: f64 = 0.005;

#[derive(Debug, Clone, Copy)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    mass: f64,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// At rest within the rest thresholds; no further frames needed until
    /// the target moves again.
    pub fn settled(&self) -> bool {
        (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn step(&mut self, dt: f64) -> f64 {
        let dt = dt.clamp(0.0, MAX_STEP);
        let displacement = self.value - self.target;
        let accel = (-self.stiffness * displacement - self.damping * self.velocity) / self.mass;
        self.velocity += accel * dt;
        let next = self.value + self.velocity * dt;
        let crossed = (displacement > 0.0 && next < self.target)
            || (displacement < 0.0 && next > self.target)
            || (displacement == 0.0 && next != self.target);
        if crossed {
            self.value = self.target;
            self.velocity = 0.0;
        } else {
            self.value = next;
        }
        if self.settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DT: f64 = 1.0 / 60.0;

    #[test]
    fn constant_target_never_overshoots() {
        let mut spring = Spring::new(120.0, 24.0, 0.4);
        spring.set_target(0.5);
        for _ in 0..600 {
            let value = spring.step(DT);
            assert!(value <= 0.5, "overshot target: {value}");
            assert!(value >= 0.0);
        }
        assert!((spring.value() - 0.5).abs() < 1e-3);
        assert!(spring.settled());
    }

    #[test]
    fn monotone_target_gives_monotone_output() {
        let mut spring = Spring::new(120.0, 24.0, 0.4);
        let mut prev = 0.0;
        for frame in 0..600 {
            // raw scroll fraction climbing from 0 to 1
            let target = (frame as f64 / 400.0).min(1.0);
            spring.set_target(target);
            let value = spring.step(DT);
            assert!(
                value >= prev,
                "non-monotone at frame {frame}: {value} < {prev}"
            );
            assert!(value <= target);
            prev = value;
        }
    }

    #[test]
    fn snaps_to_target_when_settled() {
        let mut spring = Spring::new(120.0, 24.0, 0.4);
        spring.set_target(1.0);
        for _ in 0..600 {
            spring.step(DT);
        }
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn tracks_target_downward_without_undershoot() {
        let mut spring = Spring::new(60.0, 20.0, 0.6);
        spring.set_target(100.0);
        for _ in 0..600 {
            spring.step(DT);
        }
        spring.set_target(0.0);
        for _ in 0..600 {
            let value = spring.step(DT);
            assert!(value >= 0.0, "undershot: {value}");
        }
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn oversized_timestep_is_clamped() {
        let mut a = Spring::new(120.0, 24.0, 0.4);
        let mut b = Spring::new(120.0, 24.0, 0.4);
        a.set_target(1.0);
        b.set_target(1.0);
        assert_eq!(a.step(10.0), b.step(MAX_STEP));
    }
}
