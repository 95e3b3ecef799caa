//! The simulation aggregate. Owns every body, attractor and the drag zone, and advances them one
//! frame at a time.
//!
//! A frame is split into three stages that can each be called on their own:
//!   1. [`World::accumulate_forces`] sums every attractor's pull, and drag where relevant.
//!   2. [`World::integrate`] moves and ages every body.
//!   3. [`World::cleanup`] purges expired and off-screen bodies.
//!
//! [`World::step`] runs all three in that order. Cleanup only ever happens after every body has
//! been integrated.

use crate::attractor::Attractor;
use crate::body::Body;
use crate::config::Config;
use crate::drag_zone::DragZone;
use crate::errors::Result;
use crate::mode::Mode;
use crate::random::SeededRandom;
use crate::vector::Vector2;

/// The visible area of the simulation, with the origin in the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Viewport {
    /// Instantiate
    ///
    /// # Errors
    /// When either dimension isn't a positive, finite number.
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let is_valid = |dimension: f32| dimension.is_finite() && dimension > 0.0;
        if !is_valid(width) || !is_valid(height) {
            snafu::whatever!("Viewport must have a positive size, got {width}x{height}");
        }
        Ok(Self { width, height })
    }

    /// The centre of the viewport.
    #[must_use]
    pub fn centre(&self) -> Vector2 {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Is the position further than `margin` outside the viewport on any side?
    #[must_use]
    pub fn is_beyond_margin(&self, position: Vector2, margin: f32) -> bool {
        position.x < -margin
            || position.x > self.width + margin
            || position.y < -margin
            || position.y > self.height + margin
    }
}

/// Everything that takes part in the simulation.
#[derive(Debug, Clone)]
pub struct World {
    /// The visible area, used to purge bodies that wander too far away.
    pub(crate) viewport: Viewport,
    /// All the moving particles, in a stable order.
    pub(crate) bodies: Vec<Body>,
    /// All the gravity sources.
    pub(crate) attractors: Vec<Attractor>,
    /// The one drag zone, fixed for the session.
    pub(crate) drag_zone: DragZone,
    /// The active mode.
    pub(crate) mode: Mode,
    /// Tunable constants.
    pub(crate) config: Config,
    /// All randomness comes from here, so a seed reproduces a whole session.
    pub(crate) random: SeededRandom,
    /// The number of frames stepped since the last reset.
    pub(crate) frame: u64,
}

impl World {
    /// Create a world and lay out the startup bodies and attractor using the given seed.
    ///
    /// # Errors
    /// When the config doesn't validate or produces invalid masses.
    pub fn new(viewport: Viewport, config: Config, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut world = Self::empty(viewport, config, seed);
        world.populate()?;
        tracing::debug!(
            "World created: {}x{}, seed {seed}",
            viewport.width,
            viewport.height
        );
        Ok(world)
    }

    /// Create a world with no bodies or attractors. Useful for setting up exact scenarios.
    ///
    /// The config isn't validated, so spawns will return errors if it's unusable.
    #[must_use]
    pub fn empty(viewport: Viewport, config: Config, seed: u64) -> Self {
        let drag_zone = DragZone::centred_in(viewport.width, viewport.height)
            .with_coefficient(config.drag_coefficient);

        Self {
            viewport,
            bodies: Vec::new(),
            attractors: Vec::new(),
            drag_zone,
            mode: Mode::default(),
            config,
            random: SeededRandom::new(seed),
            frame: 0,
        }
    }

    /// Advance the simulation by one frame.
    ///
    /// # Errors
    /// When a force can't be applied, which means a body was built with a zero mass.
    pub fn step(&mut self) -> Result<()> {
        self.accumulate_forces()?;
        self.integrate();
        let purged = self.cleanup();

        self.frame += 1;
        tracing::trace!(
            "Frame {}: {} bodies, {purged} purged",
            self.frame,
            self.bodies.len()
        );
        Ok(())
    }

    /// Apply every attractor's force to every body, and drag to the bodies inside the drag
    /// zone.
    ///
    /// Accelerations are only written back once every body's forces have been applied, so a
    /// failure leaves every body as it was.
    ///
    /// # Errors
    /// When a force can't be applied.
    pub fn accumulate_forces(&mut self) -> Result<()> {
        let mut accelerations = Vec::with_capacity(self.bodies.len());
        for body in &self.bodies {
            let mut accumulating = body.clone();
            for attractor in &self.attractors {
                let force = attractor.attract(&accumulating);
                accumulating.apply_force(force)?;
            }

            if self.drag_zone.contains(&accumulating) {
                self.drag_zone.apply_effect(&mut accumulating)?;
            }
            accelerations.push(accumulating.acceleration);
        }

        for (body, acceleration) in self.bodies.iter_mut().zip(accelerations) {
            body.acceleration = acceleration;
        }
        Ok(())
    }

    /// Move and age every body using the forces accumulated this frame.
    pub fn integrate(&mut self) {
        for body in &mut self.bodies {
            body.update(self.mode, &self.config.boost);
        }
    }

    /// Remove bodies that have expired or wandered beyond the off-screen margin. Returns how
    /// many were removed.
    pub fn cleanup(&mut self) -> usize {
        let before = self.bodies.len();
        let viewport = self.viewport;
        let margin = self.config.offscreen_margin;
        self.bodies.retain(|body| {
            !body.is_expired() && !viewport.is_beyond_margin(body.position, margin)
        });
        before - self.bodies.len()
    }

    /// Switch to a different mode.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            tracing::debug!("Mode changed from {} to {mode}", self.mode);
        }
        self.mode = mode;
    }

    /// Change the viewport used for purging off-screen bodies. The drag zone doesn't move.
    ///
    /// # Errors
    /// When the new size isn't valid.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<()> {
        self.viewport = Viewport::new(width, height)?;
        tracing::debug!("Viewport resized to {width}x{height}");
        Ok(())
    }

    /// Add an already built body.
    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Add an already built attractor.
    pub fn add_attractor(&mut self, attractor: Attractor) {
        self.attractors.push(attractor);
    }

    /// Replace the drag zone.
    pub fn set_drag_zone(&mut self, drag_zone: DragZone) {
        self.drag_zone = drag_zone;
    }

    /// Remove every body and attractor.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.attractors.clear();
    }

    /// The bodies, in a stable order.
    #[must_use]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// The attractors.
    #[must_use]
    pub fn attractors(&self) -> &[Attractor] {
        &self.attractors
    }

    /// The drag zone.
    #[must_use]
    pub const fn drag_zone(&self) -> &DragZone {
        &self.drag_zone
    }

    /// The active mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The seed the current session was started from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.random.seed()
    }

    /// The viewport.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The config.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Frames stepped since startup or the last reset.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame
    }
}
