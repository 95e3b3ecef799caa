//! Errors for the physics core.

/// All the known errors returned by this crate.
#[derive(Debug, snafu::Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum SimulationError {
    #[snafu(display("Mass must be a finite number greater than zero, got {mass}"))]
    /// A body or attractor was given a mass that can't take part in the simulation.
    InvalidMass {
        /// The rejected mass.
        mass: f32,
    },

    #[snafu(display("Can't normalise a vector with zero length"))]
    /// Normalising a zero-length vector has no direction to return.
    DegenerateVector,

    #[snafu(display("Invalid simulation config: {reason}"))]
    /// A config value that would break the simulation, like a non-finite or reversed range.
    InvalidConfig {
        /// What's wrong with the config.
        reason: String,
    },

    #[snafu(display("Can't draw a random number from {min} to {max}"))]
    /// A random draw was asked for with bounds that aren't finite.
    InvalidRange {
        /// Lower bound
        min: f32,
        /// Upper bound
        max: f32,
    },

    #[snafu(display("Attempted to divide a vector by zero"))]
    /// A vector was divided by zero, most likely a force divided by a zero mass.
    DivideByZero,

    /// General errors that don't need to be matched on
    #[snafu(whatever, display("{message}"))]
    Whatever {
        /// A helpful message acompanying the error
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error + Send + Sync>, Some)))]
        /// The parent error type
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Convenience alias for results from this crate.
pub type Result<T, E = SimulationError> = std::result::Result<T, E>;
