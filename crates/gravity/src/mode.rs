//! The simulation's mutually exclusive modes.

/// How the simulation "feels". Governs the spawn count, the velocity boost and the palette.
#[derive(
    serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Plain gravity, no boost.
    #[default]
    Calm,
    /// Strongly boosted velocity.
    Chaos,
    /// Gently boosted velocity, like drifting snow.
    Snow,
    /// The most boosted of all.
    Wind,
}

impl Mode {
    /// All the modes, in the order they're presented to the user.
    pub const ALL: [Self; 4] = [Self::Calm, Self::Chaos, Self::Snow, Self::Wind];

    /// The name shown to the user. Wind mode is presented as a hurricane.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Calm => "Calm",
            Self::Chaos => "Chaos",
            Self::Snow => "Snow",
            Self::Wind => "Hurricane",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.display_name())
    }
}

impl std::str::FromStr for Mode {
    type Err = crate::errors::SimulationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "calm" => Ok(Self::Calm),
            "chaos" => Ok(Self::Chaos),
            "snow" => Ok(Self::Snow),
            "wind" | "hurricane" => Ok(Self::Wind),
            _ => snafu::whatever!("Unknown mode: '{name}'"),
        }
    }
}
