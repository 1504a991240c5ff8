//! Wheel spin physics and winner resolution
//!
//! The wheel carries its rotation in radians, normalized to [0, 2π).
//! A spin draws a random initial velocity, decays it multiplicatively each
//! tick, and resolves the winning slice once the velocity drops below the
//! stop threshold. Resolution is a pure function of the final angle and the
//! slice count; the initial draw is the only randomness involved.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::config::EngineConfig;
use crate::wrap_angle;

/// Fixed pointer position at the top of the wheel (3π/2)
pub const POINTER_ANGLE: f64 = 1.5 * std::f64::consts::PI;

/// Map a settled wheel angle to the winning slice index.
///
/// The circle is divided into `n` equal slices, slice `i` starting at
/// `angle + i * 2π/n`. The winner is the slice under the pointer:
/// `floor(((3π/2 - angle) mod 2π) / (2π/n)) mod n`, with a non-negative
/// modulo so angles past the pointer wrap correctly.
pub fn resolve_index(angle: f64, n: usize) -> usize {
    let slice = TAU / n as f64;
    let relative = (POINTER_ANGLE - angle).rem_euclid(TAU);
    (relative / slice) as usize % n
}

/// Spin state for the wheel of names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WheelSpinner {
    /// Current rotation (radians, [0, 2π))
    angle: f64,
    /// Angular velocity (radians/tick)
    angular_vel: f64,
    spinning: bool,
    /// Winning slice index, set when the wheel settles
    selected: Option<usize>,
    speed_min: f64,
    speed_max: f64,
    friction: f64,
    stop_threshold: f64,
}

impl WheelSpinner {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            angle: 0.0,
            angular_vel: 0.0,
            spinning: false,
            selected: None,
            speed_min: config.spin_speed_min,
            speed_max: config.spin_speed_max,
            friction: config.friction,
            stop_threshold: config.stop_threshold,
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn angular_vel(&self) -> f64 {
        self.angular_vel
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    /// Winning slice index from the last settled spin
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Start a spin. No-op if already spinning or the wheel has no slices;
    /// a running spin cannot be restarted or cancelled.
    pub fn start_spin<R: Rng>(&mut self, slice_count: usize, rng: &mut R) {
        if self.spinning || slice_count == 0 {
            return;
        }
        self.spinning = true;
        self.angular_vel = rng.random_range(self.speed_min..self.speed_max);
        self.selected = None;
        log::info!(
            "Wheel spinning at {:.4} rad/tick over {slice_count} slices",
            self.angular_vel
        );
    }

    /// Advance the spin by one tick. Returns the winning slice index on the
    /// tick the wheel settles, `None` otherwise.
    pub fn tick(&mut self, slice_count: usize) -> Option<usize> {
        if !self.spinning {
            return None;
        }
        self.angle = wrap_angle(self.angle + self.angular_vel);
        self.angular_vel *= self.friction;
        if self.angular_vel >= self.stop_threshold {
            return None;
        }
        self.spinning = false;
        self.angular_vel = 0.0;
        self.selected = (slice_count > 0).then(|| resolve_index(self.angle, slice_count));
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn spinner() -> WheelSpinner {
        WheelSpinner::new(&EngineConfig::default())
    }

    #[test]
    fn test_resolve_index_at_pointer() {
        // With 4 slices and no rotation, the pointer at 3π/2 sits in slice 3
        assert_eq!(resolve_index(0.0, 4), 3);
    }

    #[test]
    fn test_resolve_index_single_slice() {
        assert_eq!(resolve_index(0.0, 1), 0);
        assert_eq!(resolve_index(3.0, 1), 0);
    }

    #[test]
    fn test_spin_terminates_within_bound() {
        // Worst case: top of the draw range (0.2), friction 0.99,
        // threshold 0.01 -> just under 300 ticks
        let mut wheel = spinner();
        let mut rng = Pcg32::seed_from_u64(7);
        wheel.start_spin(4, &mut rng);
        assert!(wheel.is_spinning());

        let mut ticks = 0;
        while wheel.is_spinning() {
            wheel.tick(4);
            ticks += 1;
            assert!(ticks < 300, "spin did not settle within 300 ticks");
            assert!(wheel.angle() >= 0.0 && wheel.angle() < TAU);
        }
        assert_eq!(wheel.angular_vel(), 0.0);
        assert!(wheel.selected().unwrap() < 4);
    }

    #[test]
    fn test_start_spin_while_spinning_is_noop() {
        let mut wheel = spinner();
        let mut rng = Pcg32::seed_from_u64(42);
        wheel.start_spin(3, &mut rng);
        let vel = wheel.angular_vel();
        wheel.start_spin(3, &mut rng);
        assert_eq!(wheel.angular_vel(), vel);
    }

    #[test]
    fn test_start_spin_without_slices_is_noop() {
        let mut wheel = spinner();
        let mut rng = Pcg32::seed_from_u64(42);
        wheel.start_spin(0, &mut rng);
        assert!(!wheel.is_spinning());
        assert!(wheel.tick(0).is_none());
    }

    #[test]
    fn test_start_spin_clears_selection() {
        let mut wheel = spinner();
        let mut rng = Pcg32::seed_from_u64(9);
        wheel.start_spin(2, &mut rng);
        while wheel.is_spinning() {
            wheel.tick(2);
        }
        assert!(wheel.selected().is_some());
        wheel.start_spin(2, &mut rng);
        assert!(wheel.selected().is_none());
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let run = |seed: u64| {
            let mut wheel = spinner();
            let mut rng = Pcg32::seed_from_u64(seed);
            wheel.start_spin(5, &mut rng);
            while wheel.is_spinning() {
                wheel.tick(5);
            }
            (wheel.angle(), wheel.selected())
        };
        assert_eq!(run(123), run(123));
    }

    proptest! {
        #[test]
        fn resolved_index_in_range(angle in 0.0..TAU, n in 1usize..64) {
            prop_assert!(resolve_index(angle, n) < n);
        }
    }
}
