//! A moving particle that is pulled around by attractors and slowly fades away.

use crate::config::BoostFactors;
use crate::errors::{InvalidMassSnafu, Result};
use crate::mode::Mode;
use crate::vector::Vector2;

/// A mass-bearing particle with a finite lifetime.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Body {
    /// Current position
    pub position: Vector2,
    /// Current velocity, in units per frame
    pub velocity: Vector2,
    /// Accumulated acceleration for the current frame. Zero outside of force accumulation.
    pub acceleration: Vector2,
    /// Fixed at creation
    mass: f32,
    /// Frames left before the body expires
    pub remaining_lifetime: i64,
}

impl Body {
    /// Instantiate
    ///
    /// # Errors
    /// When the mass isn't a finite number greater than zero.
    pub fn new(position: Vector2, velocity: Vector2, mass: f32, lifetime: i64) -> Result<Self> {
        snafu::ensure!(mass.is_finite() && mass > 0.0, InvalidMassSnafu { mass });

        Ok(Self {
            position,
            velocity,
            acceleration: Vector2::ZERO,
            mass,
            remaining_lifetime: lifetime,
        })
    }

    /// A body with zero mass, which `new` would reject.
    #[cfg(test)]
    pub(crate) const fn massless(position: Vector2) -> Self {
        Self {
            position,
            velocity: Vector2::ZERO,
            acceleration: Vector2::ZERO,
            mass: 0.0,
            remaining_lifetime: 1000,
        }
    }

    /// The body's mass.
    #[must_use]
    pub const fn mass(&self) -> f32 {
        self.mass
    }

    /// Accumulate `force / mass` into this frame's acceleration.
    ///
    /// # Errors
    /// When the mass is zero. Construction rules that out, so it signals a bug.
    pub fn apply_force(&mut self, force: Vector2) -> Result<()> {
        let acceleration = force.divide(self.mass)?;
        self.acceleration.add_in_place(acceleration);
        Ok(())
    }

    /// Integrate one frame of motion and age the body by one frame.
    ///
    /// Outside of calm mode the velocity also receives `acceleration * boost`. The boost uses
    /// this frame's acceleration, so it must happen before the acceleration is reset.
    pub fn update(&mut self, mode: Mode, boost: &BoostFactors) {
        self.velocity.add_in_place(self.acceleration);

        if mode != Mode::Calm {
            let factor = boost.for_mode(mode);
            self.velocity.add_in_place(self.acceleration.scale(factor));
        }

        self.position.add_in_place(self.velocity);
        self.acceleration = Vector2::ZERO;
        self.remaining_lifetime = self.remaining_lifetime.saturating_sub(1);
    }

    /// Has the body run out of lifetime?
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.remaining_lifetime <= 0
    }
}

#[allow(clippy::float_cmp, reason = "Tests aren't so strict")]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SimulationError;

    fn body(velocity: (f32, f32), mass: f32) -> Body {
        Body::new(Vector2::new(100.0, 100.0), velocity.into(), mass, 10).unwrap()
    }

    #[test]
    fn rejects_invalid_mass() {
        for mass in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let result = Body::new(Vector2::ZERO, Vector2::ZERO, mass, 10);
            assert!(matches!(result, Err(SimulationError::InvalidMass { .. })));
        }
    }

    #[test]
    fn forces_accumulate_divided_by_mass() {
        let mut body = body((0.0, 0.0), 4.0);
        body.apply_force(Vector2::new(8.0, 0.0)).unwrap();
        body.apply_force(Vector2::new(0.0, -4.0)).unwrap();
        assert_eq!(body.acceleration, Vector2::new(2.0, -1.0));
    }

    #[test]
    fn calm_update_integrates_and_resets_acceleration() {
        let mut body = body((1.0, 0.0), 2.0);
        body.apply_force(Vector2::new(2.0, 2.0)).unwrap();
        body.update(Mode::Calm, &BoostFactors::default());

        assert_eq!(body.velocity, Vector2::new(2.0, 1.0));
        assert_eq!(body.position, Vector2::new(102.0, 101.0));
        assert_eq!(body.acceleration, Vector2::ZERO);
        assert_eq!(body.remaining_lifetime, 9);
    }

    #[test]
    fn boost_is_added_to_velocity_before_moving() {
        let mut body = body((0.0, 0.0), 1.0);
        body.apply_force(Vector2::new(1.0, 0.0)).unwrap();
        body.update(Mode::Chaos, &BoostFactors::default());

        // 1 from normal integration plus 1 * 16 from the boost.
        assert_eq!(body.velocity, Vector2::new(17.0, 0.0));
        assert_eq!(body.position, Vector2::new(117.0, 100.0));
    }

    #[test]
    fn snow_and_wind_boosts() {
        let mut snow = body((0.0, 0.0), 1.0);
        snow.apply_force(Vector2::new(0.0, 4.0)).unwrap();
        snow.update(Mode::Snow, &BoostFactors::default());
        assert_eq!(snow.velocity, Vector2::new(0.0, 5.0));

        let mut wind = body((0.0, 0.0), 1.0);
        wind.apply_force(Vector2::new(1.0, 0.0)).unwrap();
        wind.update(Mode::Wind, &BoostFactors::default());
        assert_eq!(wind.velocity, Vector2::new(65.0, 0.0));
    }

    #[test]
    fn no_forces_means_only_existing_velocity_moves_the_body() {
        let mut body = body((3.0, -2.0), 15.0);
        body.update(Mode::Wind, &BoostFactors::default());
        assert_eq!(body.velocity, Vector2::new(3.0, -2.0));
        assert_eq!(body.position, Vector2::new(103.0, 98.0));
    }

    #[test]
    fn lifetime_counts_down_to_expiry() {
        let mut body = body((0.0, 0.0), 1.0);
        let mut previous = body.remaining_lifetime;
        for _ in 0_u8..9 {
            body.update(Mode::Calm, &BoostFactors::default());
            assert!(body.remaining_lifetime < previous);
            assert!(!body.is_expired());
            previous = body.remaining_lifetime;
        }
        body.update(Mode::Calm, &BoostFactors::default());
        assert!(body.is_expired());
        assert_eq!(body.mass(), 1.0);
    }
}
