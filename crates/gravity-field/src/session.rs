//! A running simulation and the display state that goes with it.
//!
//! All mutations arrive as [`Command`]s and are applied between frames, never during one.

use color_eyre::eyre::Result;

use crate::input::{Command, InputHandler};
use crate::renderer::Renderer;

/// The world plus everything the front end needs that isn't physics.
#[derive(Debug, Clone)]
pub struct Session {
    /// The simulation
    pub world: gravity::World,
    /// Whether the help and stats overlay is drawn
    pub show_overlay: bool,
    /// Builds frames from the world
    renderer: Renderer,
    /// Maps raw input to commands
    input: InputHandler,
}

impl Session {
    /// Start a new session from the user's config.
    ///
    /// A seed is drawn at random unless one is given.
    pub fn new(config: &crate::config::Config, seed: Option<u64>) -> Result<Self> {
        let viewport = gravity::Viewport::new(config.width, config.height)?;
        let seed = seed.unwrap_or_else(|| {
            gravity::random::SeededRandom::fresh_seed(config.simulation.seed_range)
        });
        let world = gravity::World::new(viewport, config.simulation.clone(), seed)?;
        tracing::info!("Starting session with seed {seed}");

        Ok(Self {
            world,
            show_overlay: config.show_overlay,
            renderer: Renderer::new(config.keybindings.clone()),
            input: InputHandler::new(config.keybindings.clone()),
        })
    }

    /// Translate a raw input message and apply it.
    pub fn handle_message(&mut self, message: gravity_protocol::InputMessages) -> Result<()> {
        tracing::trace!("Received input message: {message:?}");
        match self.input.translate(message) {
            Some(command) => self.apply(command),
            None => Ok(()),
        }
    }

    /// Apply a command to the world or the display state.
    ///
    /// A command with invalid parameters, like a spawn with a bad mass or a resize to nothing,
    /// is rejected and logged, leaving the world as it was.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        tracing::debug!("Applying command: {command:?}");
        let result = match command {
            Command::SpawnBody { x, y } => self.world.spawn_body_at(x, y).map(|_| ()),
            Command::SpawnAttractor { x, y } => self.world.spawn_attractor_at(x, y),
            Command::SetMode(mode) => {
                self.world.set_mode(mode);
                Ok(())
            }
            Command::ToggleOverlay => {
                self.show_overlay = !self.show_overlay;
                Ok(())
            }
            Command::SoftReset => self.world.soft_reset(),
            Command::HardReset => self.world.hard_reset(),
            Command::Resize { width, height } => self.world.resize(width, height),
        };

        match result {
            Ok(()) => Ok(()),
            Err(
                error @ (gravity::SimulationError::InvalidMass { .. }
                | gravity::SimulationError::InvalidRange { .. }
                | gravity::SimulationError::InvalidConfig { .. }
                | gravity::SimulationError::Whatever { .. }),
            ) => {
                tracing::error!("Rejected {command:?}: {error}");
                Ok(())
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Advance the world one frame and render it.
    pub fn tick(&mut self) -> Result<gravity_protocol::Frame> {
        self.world.step()?;
        Ok(self.renderer.frame(&self.world, self.show_overlay))
    }
}
