//! A rectangular region that slows down any body inside it.

use crate::body::Body;
use crate::errors::Result;
use crate::vector::Vector2;

/// The default strength of the drag, as a fraction of velocity.
pub const DEFAULT_DRAG_COEFFICIENT: f32 = 0.1;

/// An axis-aligned rectangle applying linear drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragZone {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
    /// Drag force is `velocity * -coefficient`
    pub coefficient: f32,
}

impl DragZone {
    /// Instantiate with the default drag coefficient.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            coefficient: DEFAULT_DRAG_COEFFICIENT,
        }
    }

    /// The zone covering the middle half of a viewport in both directions.
    #[must_use]
    pub fn centred_in(width: f32, height: f32) -> Self {
        Self::new(width / 4.0, height / 4.0, width / 2.0, height / 2.0)
    }

    /// Use a different drag coefficient.
    #[must_use]
    pub const fn with_coefficient(mut self, coefficient: f32) -> Self {
        self.coefficient = coefficient;
        self
    }

    /// Is the body strictly inside the zone? Touching an edge doesn't count.
    #[must_use]
    pub fn contains(&self, body: &Body) -> bool {
        let Vector2 { x, y } = body.position;
        x > self.x && x < self.x + self.width && y > self.y && y < self.y + self.height
    }

    /// The drag force for the body, opposing its current velocity.
    #[must_use]
    pub fn drag_force(&self, body: &Body) -> Vector2 {
        body.velocity.scale(-self.coefficient)
    }

    /// Apply drag to the body. Callers check [`Self::contains`] first.
    ///
    /// # Errors
    /// When the body's force can't be applied.
    pub fn apply_effect(&self, body: &mut Body) -> Result<()> {
        body.apply_force(self.drag_force(body))
    }
}
