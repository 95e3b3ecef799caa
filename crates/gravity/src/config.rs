//! All the variables that can be configured for the simulation

use crate::errors::{InvalidConfigSnafu, Result};
use crate::mode::Mode;

/// All the config for the simulation
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
#[non_exhaustive]
pub struct Config {
    /// The number of frames a body lives for.
    pub decay_time: i64,
    /// How far outside the viewport a body may travel before it's removed.
    pub offscreen_margin: f32,
    /// The number of bodies placed at startup and after every reset.
    pub initial_body_count: usize,
    /// Startup bodies get a velocity in `[-range, range]` on each axis.
    pub initial_velocity_range: f32,
    /// Spawned bodies get a velocity in `[-range, range]` on each axis.
    pub spawn_velocity_range: f32,
    /// The lower and upper bounds of a new body's mass.
    pub body_mass_range: (f32, f32),
    /// The mass of every attractor.
    pub attractor_mass: f32,
    /// The gravitational constant given to new attractors.
    pub gravitational_constant: f32,
    /// How strongly the drag zone opposes velocity.
    pub drag_coefficient: f32,
    /// Seeds are drawn from `[0, seed_range)`.
    pub seed_range: u64,
    /// The attraction distance is clamped to at least this.
    pub min_attraction_distance: f32,
    /// The attraction distance is clamped to at most this.
    pub max_attraction_distance: f32,
    /// Per-mode velocity boosts.
    pub boost: BoostFactors,
    /// Per-mode number of bodies added by a single spawn.
    pub spawn_counts: SpawnCounts,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decay_time: 1000,
            offscreen_margin: 50.0,
            initial_body_count: 2,
            initial_velocity_range: 1.0,
            spawn_velocity_range: 2.0,
            body_mass_range: (10.0, 30.0),
            attractor_mass: 50.0,
            gravitational_constant: 1.0,
            drag_coefficient: 0.1,
            seed_range: 10_000,
            min_attraction_distance: 5.0,
            max_attraction_distance: 25.0,
            boost: BoostFactors::default(),
            spawn_counts: SpawnCounts::default(),
        }
    }
}

impl Config {
    /// Check that every value can safely take part in the simulation. TOML accepts `inf` and
    /// `nan`, so a user's config can contain values that no range or clamp can work with.
    ///
    /// Masses aren't required to be positive here, invalid masses are rejected when a body or
    /// attractor is built.
    ///
    /// # Errors
    /// When a value isn't finite, a range is reversed or the attraction distances aren't
    /// positive and ordered.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("offscreen_margin", self.offscreen_margin),
            ("initial_velocity_range", self.initial_velocity_range),
            ("spawn_velocity_range", self.spawn_velocity_range),
            ("body_mass_range", self.body_mass_range.0),
            ("body_mass_range", self.body_mass_range.1),
            ("attractor_mass", self.attractor_mass),
            ("gravitational_constant", self.gravitational_constant),
            ("drag_coefficient", self.drag_coefficient),
            ("min_attraction_distance", self.min_attraction_distance),
            ("max_attraction_distance", self.max_attraction_distance),
            ("boost.chaos", self.boost.chaos),
            ("boost.snow", self.boost.snow),
            ("boost.wind", self.boost.wind),
        ];
        for (name, value) in finite {
            snafu::ensure!(
                value.is_finite(),
                InvalidConfigSnafu {
                    reason: format!("`{name}` must be a finite number, got {value}"),
                }
            );
        }

        for (name, value) in [
            ("offscreen_margin", self.offscreen_margin),
            ("initial_velocity_range", self.initial_velocity_range),
            ("spawn_velocity_range", self.spawn_velocity_range),
        ] {
            snafu::ensure!(
                value >= 0.0,
                InvalidConfigSnafu {
                    reason: format!("`{name}` can't be negative, got {value}"),
                }
            );
        }

        let (min_mass, max_mass) = self.body_mass_range;
        snafu::ensure!(
            min_mass <= max_mass,
            InvalidConfigSnafu {
                reason: format!("`body_mass_range` is reversed: ({min_mass}, {max_mass})"),
            }
        );

        let (min_distance, max_distance) =
            (self.min_attraction_distance, self.max_attraction_distance);
        snafu::ensure!(
            min_distance > 0.0 && min_distance <= max_distance,
            InvalidConfigSnafu {
                reason: format!(
                    "Attraction distances need 0 < min <= max, got {min_distance}, {max_distance}"
                ),
            }
        );

        Ok(())
    }
}

/// Every non-calm mode adds `acceleration * factor` to a body's velocity on top of the normal
/// integration. These are tuned by eye, not derived from anything physical.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
#[non_exhaustive]
pub struct BoostFactors {
    /// Chaos mode boost
    pub chaos: f32,
    /// Snow mode boost
    pub snow: f32,
    /// Wind mode boost
    pub wind: f32,
}

impl Default for BoostFactors {
    fn default() -> Self {
        Self {
            chaos: 16.0,
            snow: 0.25,
            wind: 64.0,
        }
    }
}

impl BoostFactors {
    /// The boost for the given mode. Calm mode has none.
    #[must_use]
    pub const fn for_mode(&self, mode: Mode) -> f32 {
        match mode {
            Mode::Calm => 0.0,
            Mode::Chaos => self.chaos,
            Mode::Snow => self.snow,
            Mode::Wind => self.wind,
        }
    }
}

/// How many bodies a single click spawns in each mode.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
#[non_exhaustive]
pub struct SpawnCounts {
    /// Calm
    pub calm: usize,
    /// Chaos
    pub chaos: usize,
    /// Snow
    pub snow: usize,
    /// Wind
    pub wind: usize,
}

impl Default for SpawnCounts {
    fn default() -> Self {
        Self {
            calm: 1,
            chaos: 2,
            snow: 3,
            wind: 4,
        }
    }
}

impl SpawnCounts {
    /// The spawn count for the given mode.
    #[must_use]
    pub const fn for_mode(&self, mode: Mode) -> usize {
        match mode {
            Mode::Calm => self.calm,
            Mode::Chaos => self.chaos,
            Mode::Snow => self.snow,
            Mode::Wind => self.wind,
        }
    }
}

#[allow(clippy::float_cmp, reason = "Tests aren't so strict")]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SimulationError;

    #[test]
    fn boost_per_mode() {
        let boost = BoostFactors::default();
        assert_eq!(boost.for_mode(Mode::Calm), 0.0);
        assert_eq!(boost.for_mode(Mode::Chaos), 16.0);
        assert_eq!(boost.for_mode(Mode::Snow), 0.25);
        assert_eq!(boost.for_mode(Mode::Wind), 64.0);
    }

    #[test]
    fn spawn_count_per_mode() {
        let counts = SpawnCounts::default();
        let all: Vec<usize> = Mode::ALL.iter().map(|mode| counts.for_mode(*mode)).collect();
        assert_eq!(all, vec![1, 2, 3, 4]);
    }

    #[test]
    fn default_config_is_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn non_finite_values_are_invalid() {
        let config: Config = toml::from_str("spawn_velocity_range = inf").unwrap();
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidConfig { .. })
        ));

        let config: Config = toml::from_str("body_mass_range = [nan, 30.0]").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn reversed_ranges_are_invalid() {
        let config = Config {
            body_mass_range: (30.0, 10.0),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn attraction_distances_must_be_positive_and_ordered() {
        for (min, max) in [(f32::NAN, f32::NAN), (0.0, 25.0), (30.0, 25.0)] {
            let config = Config {
                min_attraction_distance: min,
                max_attraction_distance: max,
                ..Config::default()
            };
            assert!(config.validate().is_err(), "{min}, {max}");
        }
    }

    #[test]
    fn negative_masses_are_left_to_construction() {
        let config = Config {
            body_mass_range: (-5.0, -1.0),
            ..Config::default()
        };
        config.validate().unwrap();
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: Config = toml::from_str(indoc::indoc! {"
            decay_time = 20

            [boost]
            wind = 8.0
        "})
        .unwrap();
        assert_eq!(config.decay_time, 20);
        assert_eq!(config.boost.wind, 8.0);
        assert_eq!(config.boost.chaos, 16.0);
        assert_eq!(config.offscreen_margin, 50.0);
    }
}
