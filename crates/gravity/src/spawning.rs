//! Functions that add bodies and attractors, and that reset the world.

use crate::attractor::Attractor;
use crate::body::Body;
use crate::errors::Result;
use crate::random::RandomSource as _;
use crate::vector::Vector2;
use crate::world::World;

impl World {
    /// Spawn bodies at the given point. How many depends on the mode. Each gets a small random
    /// velocity and a random mass. Either every body is added or, if any is invalid, none are.
    /// Returns the number of bodies added.
    ///
    /// # Errors
    /// When the configured mass or velocity ranges produce an invalid body.
    pub fn spawn_body_at(&mut self, x: f32, y: f32) -> Result<usize> {
        let count = self.config.spawn_counts.for_mode(self.mode);
        let range = self.config.spawn_velocity_range;

        let mut spawned = Vec::with_capacity(count);
        for _ in 0..count {
            let velocity = Vector2::new(
                self.random.next_float(-range, range)?,
                self.random.next_float(-range, range)?,
            );
            spawned.push(self.random_body(Vector2::new(x, y), velocity)?);
        }

        tracing::debug!("Spawned {count} bodies at ({x}, {y})");
        self.bodies.extend(spawned);
        Ok(count)
    }

    /// Add a stationary attractor at the given point. It doesn't depend on the mode.
    ///
    /// # Errors
    /// When the configured attractor mass or distance limits are invalid.
    pub fn spawn_attractor_at(&mut self, x: f32, y: f32) -> Result<()> {
        let attractor = self.configured_attractor(Vector2::new(x, y))?;
        tracing::debug!("Spawned attractor at ({x}, {y})");
        self.attractors.push(attractor);
        Ok(())
    }

    /// Clear everything and start again from the current seed. The resulting layout is
    /// identical to the one at startup.
    ///
    /// # Errors
    /// When the startup layout can't be built.
    pub fn soft_reset(&mut self) -> Result<()> {
        let seed = self.random.seed();
        tracing::debug!("Soft reset with seed {seed}");
        self.reseed_and_populate(seed)
    }

    /// Clear everything and start again from a newly drawn seed.
    ///
    /// # Errors
    /// When the startup layout can't be built.
    pub fn hard_reset(&mut self) -> Result<()> {
        let seed = self.random.next_int(self.config.seed_range);
        tracing::debug!("Hard reset with new seed {seed}");
        self.reseed_and_populate(seed)
    }

    /// Reseed the generator, then rebuild the startup layout.
    fn reseed_and_populate(&mut self, seed: u64) -> Result<()> {
        self.random.reseed(seed);
        self.frame = 0;
        self.populate()
    }

    /// Replace all bodies and attractors with the startup layout: one attractor in the centre
    /// and a few bodies scattered over the viewport.
    ///
    /// # Errors
    /// When the config produces invalid masses. The world is left untouched in that case.
    pub(crate) fn populate(&mut self) -> Result<()> {
        let attractor = self.configured_attractor(self.viewport.centre())?;

        let range = self.config.initial_velocity_range;
        let mut bodies = Vec::with_capacity(self.config.initial_body_count);
        for _ in 0..self.config.initial_body_count {
            let position = Vector2::new(
                self.random.next_float(0.0, self.viewport.width)?,
                self.random.next_float(0.0, self.viewport.height)?,
            );
            let velocity = Vector2::new(
                self.random.next_float(-range, range)?,
                self.random.next_float(-range, range)?,
            );
            bodies.push(self.random_body(position, velocity)?);
        }

        self.bodies = bodies;
        self.attractors = vec![attractor];
        Ok(())
    }

    /// A body with a random mass and the configured lifetime.
    fn random_body(&mut self, position: Vector2, velocity: Vector2) -> Result<Body> {
        let (min, max) = self.config.body_mass_range;
        let mass = self.random.next_float(min, max)?;
        Body::new(position, velocity, mass, self.config.decay_time)
    }

    /// An attractor using the configured mass, constant and distance limits.
    fn configured_attractor(&self, position: Vector2) -> Result<Attractor> {
        Attractor::new(position, self.config.attractor_mass)?
            .with_gravitational_constant(self.config.gravitational_constant)
            .with_distance_limits(
                self.config.min_attraction_distance,
                self.config.max_attraction_distance,
            )
    }
}
