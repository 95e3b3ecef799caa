//! All the CLI arguments for Gravity Field

/// The default name of the main config file.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "gravity-field.toml";

/// Run an interactive gravity simulation, reading input events as JSON lines on STDIN and
/// writing rendered frames as JSON lines to STDOUT.
#[derive(clap::Parser, Debug, Clone, Default)]
#[command(version, about, long_about = None)]
#[non_exhaustive]
pub struct CliArgs {
    /// Use a custom config directory.
    #[arg(long)]
    pub config_dir: Option<std::path::PathBuf>,

    /// The name of the main config file, relative to the config directory.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE_NAME)]
    pub main_config: std::path::PathBuf,

    /// Start from this seed instead of a random one.
    #[arg(long)]
    pub seed: Option<u64>,

    /// The mode to start in.
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Stop after this many frames. Without it, the simulation runs until STDIN closes.
    #[arg(long)]
    pub frames: Option<u64>,

    /// Override the target frame rate from the config.
    #[arg(long)]
    pub frame_rate: Option<u32>,

    /// Override the log level from the config.
    #[arg(long, value_enum)]
    pub log_level: Option<crate::config::LogLevel>,

    /// Override the log path from the config.
    #[arg(long)]
    pub log_path: Option<std::path::PathBuf>,
}

/// The modes as CLI values.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Plain gravity
    Calm,
    /// Strongly boosted
    Chaos,
    /// Gently boosted
    Snow,
    /// Hurricane
    Wind,
}

impl From<ModeArg> for gravity::Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Calm => Self::Calm,
            ModeArg::Chaos => Self::Chaos,
            ModeArg::Snow => Self::Snow,
            ModeArg::Wind => Self::Wind,
        }
    }
}
