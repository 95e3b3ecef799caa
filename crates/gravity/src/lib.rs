//! # Gravity
//! The physics core of Gravity Field: bodies pulled towards stationary attractors by simplified
//! Newtonian gravity, optionally slowed by a drag zone.
//!
//! Everything lives in a [`World`], which is stepped one frame at a time with [`World::step`].
//! Nothing here draws or reads input. Front ends read the world's bodies, attractors and mode,
//! and call its spawn, mode and reset operations between frames.

#![expect(clippy::pub_use, reason = "How else are you supposed re-export??")]

pub mod attractor;
pub mod body;
pub mod config;
pub mod drag_zone;
pub mod errors;
pub mod mode;
pub mod random;
mod spawning;
pub mod vector;
pub mod world;

pub use attractor::Attractor;
pub use body::Body;
pub use config::Config;
pub use drag_zone::DragZone;
pub use errors::SimulationError;
pub use mode::Mode;
pub use vector::Vector2;
pub use world::{Viewport, World};
