//! All of the user config for Gravity Field.

use color_eyre::eyre::{ContextCompat as _, Result};

/// A copy of the default config file. It gets copied to the user's config folder the first time
/// they start Gravity Field.
static DEFAULT_CONFIG: &str = include_str!("../default_config.toml");

/// The valid log levels. Based on our `tracing` crate.
#[derive(serde::Serialize, serde::Deserialize, clap::ValueEnum, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Error
    Error,
    /// Warnings
    Warn,
    /// Info
    Info,
    /// Debug
    Debug,
    /// Trace
    Trace,
    /// No logging
    Off,
}

/// Managing user config.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
#[non_exhaustive]
pub struct Config {
    /// The maximum log level
    pub log_level: LogLevel,
    /// The location of the log file.
    pub log_path: std::path::PathBuf,
    /// Target frame rate
    pub frame_rate: u32,
    /// Viewport width
    pub width: f32,
    /// Viewport height
    pub height: f32,
    /// Whether the overlay is shown at startup
    pub show_overlay: bool,
    /// Keybindings
    pub keybindings: Keybindings,
    /// The physics
    pub simulation: gravity::Config,
}

impl Default for Config {
    fn default() -> Self {
        let log_directory = match dirs::state_dir() {
            Some(directory) => directory,
            None => std::path::PathBuf::new().join("./"),
        };
        let log_path = log_directory.join("gravity-field").join("gravity-field.log");

        Self {
            log_level: LogLevel::Off,
            log_path,
            frame_rate: 60,
            width: 800.0,
            height: 600.0,
            show_overlay: true,
            keybindings: Keybindings::default(),
            simulation: gravity::Config::default(),
        }
    }
}

/// The key for each action. Matching is case-insensitive.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
#[non_exhaustive]
pub struct Keybindings {
    /// Show or hide the overlay
    pub toggle_overlay: char,
    /// Calm mode
    pub calm: char,
    /// Chaos mode
    pub chaos: char,
    /// Snow mode
    pub snow: char,
    /// Wind mode
    pub wind: char,
    /// Restart from the current seed
    pub soft_reset: char,
    /// Restart from a new seed
    pub hard_reset: char,
}

impl Default for Keybindings {
    fn default() -> Self {
        Self {
            toggle_overlay: 't',
            calm: 'm',
            chaos: 'l',
            snow: 's',
            wind: 'w',
            soft_reset: 'r',
            hard_reset: 'n',
        }
    }
}

impl Config {
    /// Get the stable location of Gravity Field's config directory on the user's system.
    pub fn default_directory() -> Result<std::path::PathBuf> {
        Ok(dirs::config_dir()
            .context("Couldn't get standard config directory")?
            .join("gravity-field"))
    }

    /// Figure out where our config is being stored, and create the directory if needed.
    pub fn setup_directory(
        maybe_custom_path: Option<std::path::PathBuf>,
    ) -> Result<std::path::PathBuf> {
        let path = match maybe_custom_path {
            None => Self::default_directory()?,
            Some(path) => path,
        };

        std::fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Load the main config. The default config is written out first if it doesn't exist yet.
    pub fn load(directory: &std::path::Path, file_name: &std::path::Path) -> Result<Self> {
        let config_path = directory.join(file_name);
        let is_default_config = file_name.as_os_str() == crate::cli_args::DEFAULT_CONFIG_FILE_NAME;
        if is_default_config && !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_CONFIG)?;
        }

        tracing::info!("Loading the main Gravity Field config from: {config_path:?}");
        match std::fs::read_to_string(&config_path) {
            Ok(data) => {
                tracing::trace!("Using config file:\n{data}");
                Self::parse(&data)
            }
            Err(err) => {
                tracing::error!("Loading config: {err:?}");
                color_eyre::eyre::bail!(
                    "Couldn't load config at {config_path:?}: {}",
                    err.to_string()
                );
            }
        }
    }

    /// Parse config from a TOML string. Simulation values that would break the physics, like
    /// `inf` or `nan`, are rejected here rather than when they're first used.
    pub fn parse(data: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(data)?;
        config.simulation.validate()?;
        Ok(config)
    }

    /// Parse the shipped default config.
    pub fn parse_default_config() -> Result<Self> {
        Self::parse(DEFAULT_CONFIG)
    }
}

#[allow(clippy::float_cmp, reason = "Tests aren't so strict")]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_config_matches_the_defaults() {
        let shipped = Config::parse_default_config().unwrap();
        let defaults = Config::default();
        assert_eq!(shipped.simulation, defaults.simulation);
        assert_eq!(shipped.keybindings, defaults.keybindings);
        assert_eq!(shipped.frame_rate, defaults.frame_rate);
        assert_eq!(shipped.log_level, LogLevel::Off);
    }

    #[test]
    fn partial_config() {
        let config = Config::parse(indoc::indoc! {r#"
            frame_rate = 30

            [keybindings]
            chaos = "c"

            [simulation]
            decay_time = 50
        "#})
        .unwrap();
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.keybindings.chaos, 'c');
        assert_eq!(config.keybindings.calm, 'm');
        assert_eq!(config.simulation.decay_time, 50);
        assert_eq!(config.width, 800.0);
    }

    #[test]
    fn bad_config_is_an_error() {
        assert!(Config::parse("frame_rate = \"fast\"").is_err());
    }

    #[test]
    fn unusable_simulation_values_are_rejected_at_load() {
        for data in [
            "[simulation]\nspawn_velocity_range = inf",
            "[simulation]\nbody_mass_range = [nan, 30.0]",
            "[simulation]\nmin_attraction_distance = nan\nmax_attraction_distance = nan",
        ] {
            assert!(Config::parse(data).is_err(), "{data}");
        }
    }

    #[test]
    fn default_config_is_written_on_first_load() {
        let directory = tempfile::tempdir().unwrap();
        let file_name = std::path::Path::new(crate::cli_args::DEFAULT_CONFIG_FILE_NAME);

        let config = Config::load(directory.path(), file_name).unwrap();

        assert!(directory.path().join(file_name).exists());
        assert_eq!(config.simulation, gravity::Config::default());
    }

    #[test]
    fn missing_custom_config_is_an_error() {
        let directory = tempfile::tempdir().unwrap();
        let result = Config::load(directory.path(), std::path::Path::new("custom.toml"));
        assert!(result.is_err());
    }
}
