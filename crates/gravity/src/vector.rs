//! A small 2D vector for positions, velocities and forces.
//!
//! Every operation that returns a `Vector2` leaves its inputs untouched. Only the methods ending
//! in `_in_place` mutate, and they mutate `self`.

use glam::Vec2;

use crate::errors::{DegenerateVectorSnafu, DivideByZeroSnafu, Result};

/// A point or direction in the simulation plane.
#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vector2 {
    /// Horizontal component, increasing to the right.
    pub x: f32,
    /// Vertical component, increasing downwards like screen coordinates.
    pub y: f32,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Instantiate
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// `self + other` as a new vector.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        (Vec2::from(self) + Vec2::from(other)).into()
    }

    /// Add `other` to `self`, mutating `self`.
    pub fn add_in_place(&mut self, other: Self) {
        *self = self.add(other);
    }

    /// `self - other` as a new vector.
    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        (Vec2::from(self) - Vec2::from(other)).into()
    }

    /// `self * scalar` as a new vector.
    #[must_use]
    pub fn scale(self, scalar: f32) -> Self {
        (Vec2::from(self) * scalar).into()
    }

    /// Multiply `self` by `scalar`, mutating `self`.
    pub fn scale_in_place(&mut self, scalar: f32) {
        *self = self.scale(scalar);
    }

    /// Euclidean length.
    #[must_use]
    pub fn magnitude(self) -> f32 {
        Vec2::from(self).length()
    }

    /// A vector with the same direction and a length of 1.
    ///
    /// # Errors
    /// When the vector has no length, and therefore no direction.
    pub fn normalize(self) -> Result<Self> {
        match Vec2::from(self).try_normalize() {
            Some(unit) => Ok(unit.into()),
            None => DegenerateVectorSnafu.fail(),
        }
    }

    /// `self / scalar` as a new vector.
    ///
    /// # Errors
    /// When `scalar` is zero.
    #[expect(clippy::float_cmp, reason = "Only an exact zero can't be divided by")]
    pub fn divide(self, scalar: f32) -> Result<Self> {
        if scalar == 0.0 {
            return DivideByZeroSnafu.fail();
        }
        Ok((Vec2::from(self) / scalar).into())
    }
}

impl From<Vec2> for Vector2 {
    fn from(vector: Vec2) -> Self {
        Self::new(vector.x, vector.y)
    }
}

impl From<Vector2> for Vec2 {
    fn from(vector: Vector2) -> Self {
        Self::new(vector.x, vector.y)
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from(tuple: (f32, f32)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}
