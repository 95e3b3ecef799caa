//! A stationary gravity source.

use crate::body::Body;
use crate::errors::{InvalidConfigSnafu, InvalidMassSnafu, Result};
use crate::vector::Vector2;

/// The attraction distance never drops below this, which avoids the singularity at zero.
pub const DEFAULT_MIN_DISTANCE: f32 = 5.0;
/// The attraction distance never exceeds this, so far away bodies still feel a pull.
pub const DEFAULT_MAX_DISTANCE: f32 = 25.0;

/// A fixed point that pulls bodies towards it with an inverse-square force.
#[derive(Debug, Clone, PartialEq)]
pub struct Attractor {
    /// Where the attractor sits. Never moves.
    position: Vector2,
    /// Fixed at creation
    mass: f32,
    /// The `G` in `G * M * m / d²`
    gravitational_constant: f32,
    /// The range that the attraction distance is clamped to.
    distance_limits: (f32, f32),
}

impl Attractor {
    /// Instantiate with a gravitational constant of 1 and the default distance clamp.
    ///
    /// # Errors
    /// When the mass isn't a finite number greater than zero.
    pub fn new(position: Vector2, mass: f32) -> Result<Self> {
        snafu::ensure!(mass.is_finite() && mass > 0.0, InvalidMassSnafu { mass });

        Ok(Self {
            position,
            mass,
            gravitational_constant: 1.0,
            distance_limits: (DEFAULT_MIN_DISTANCE, DEFAULT_MAX_DISTANCE),
        })
    }

    /// Use a different gravitational constant.
    #[must_use]
    pub const fn with_gravitational_constant(mut self, gravitational_constant: f32) -> Self {
        self.gravitational_constant = gravitational_constant;
        self
    }

    /// Use a different range for clamping the attraction distance.
    ///
    /// # Errors
    /// Unless `0 < min <= max` with both limits finite.
    pub fn with_distance_limits(mut self, min: f32, max: f32) -> Result<Self> {
        snafu::ensure!(
            min > 0.0 && max.is_finite() && min <= max,
            InvalidConfigSnafu {
                reason: format!("Attraction distance limits need 0 < min <= max, got {min}, {max}"),
            }
        );
        self.distance_limits = (min, max);
        Ok(self)
    }

    /// Position
    #[must_use]
    pub const fn position(&self) -> Vector2 {
        self.position
    }

    /// Mass
    #[must_use]
    pub const fn mass(&self) -> f32 {
        self.mass
    }

    /// Gravitational constant
    #[must_use]
    pub const fn gravitational_constant(&self) -> f32 {
        self.gravitational_constant
    }

    /// The force this attractor exerts on the body, pointing from the body towards the
    /// attractor.
    ///
    /// The distance used for the strength is clamped, so very close bodies aren't flung away and
    /// very distant ones still drift in. A body sitting exactly on the attractor has no
    /// direction to be pulled in, so it gets no force.
    #[must_use]
    pub fn attract(&self, body: &Body) -> Vector2 {
        let delta = self.position.subtract(body.position);
        let (min, max) = self.distance_limits;
        let distance = delta.magnitude().clamp(min, max);

        let Ok(direction) = delta.normalize() else {
            tracing::trace!("Body is on top of attractor at {:?}", self.position);
            return Vector2::ZERO;
        };

        let strength =
            self.gravitational_constant * self.mass * body.mass() / (distance * distance);
        direction.scale(strength)
    }
}
