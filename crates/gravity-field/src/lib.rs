//! Gravity Field: an interactive 2D particle simulation driven by simplified Newtonian gravity.
//!
//! The physics lives in the `gravity` crate. This crate is everything around it: reading input
//! events, driving frames, rendering them to JSON, user config and logging.

pub mod cli_args;
pub mod config;
pub mod input;
pub mod renderer;
pub mod run;
pub mod session;
