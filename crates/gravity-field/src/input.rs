//! Turns raw pointer and key events into operations on the simulation.

use crate::config::Keybindings;

/// Everything a user can ask the simulation to do.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum Command {
    /// Spawn bodies at a point. How many depends on the mode.
    SpawnBody {
        /// Horizontal position
        x: f32,
        /// Vertical position
        y: f32,
    },
    /// Add an attractor at a point.
    SpawnAttractor {
        /// Horizontal position
        x: f32,
        /// Vertical position
        y: f32,
    },
    /// Switch mode.
    SetMode(gravity::Mode),
    /// Show or hide the overlay.
    ToggleOverlay,
    /// Restart from the current seed.
    SoftReset,
    /// Restart from a new seed.
    HardReset,
    /// The canvas changed size.
    Resize {
        /// New width
        width: f32,
        /// New height
        height: f32,
    },
}

/// Maps input events to commands using the user's keybindings.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    /// The user's keybindings
    keybindings: Keybindings,
}

impl InputHandler {
    /// Instantiate
    #[must_use]
    pub const fn new(keybindings: Keybindings) -> Self {
        Self { keybindings }
    }

    /// The command for an input event, if it has one.
    #[must_use]
    #[expect(
        clippy::wildcard_enum_match_arm,
        reason = "The protocol is `#[non_exhaustive]` so new message kinds are just ignored"
    )]
    pub fn translate(&self, message: gravity_protocol::InputMessages) -> Option<Command> {
        match message {
            gravity_protocol::InputMessages::Click { x, y, shift } => {
                if shift {
                    Some(Command::SpawnAttractor { x, y })
                } else {
                    Some(Command::SpawnBody { x, y })
                }
            }
            gravity_protocol::InputMessages::Key { key } => self.translate_key(key),
            gravity_protocol::InputMessages::Resize { width, height } => {
                Some(Command::Resize { width, height })
            }
            _ => None,
        }
    }

    /// The command bound to a key, ignoring case.
    fn translate_key(&self, key: char) -> Option<Command> {
        let bindings = &self.keybindings;
        let is = |binding: char| binding.to_lowercase().eq(key.to_lowercase());

        let command = if is(bindings.toggle_overlay) {
            Command::ToggleOverlay
        } else if is(bindings.calm) {
            Command::SetMode(gravity::Mode::Calm)
        } else if is(bindings.chaos) {
            Command::SetMode(gravity::Mode::Chaos)
        } else if is(bindings.snow) {
            Command::SetMode(gravity::Mode::Snow)
        } else if is(bindings.wind) {
            Command::SetMode(gravity::Mode::Wind)
        } else if is(bindings.soft_reset) {
            Command::SoftReset
        } else if is(bindings.hard_reset) {
            Command::HardReset
        } else {
            tracing::trace!("No keybinding for '{key}'");
            return None;
        };

        Some(command)
    }
}
