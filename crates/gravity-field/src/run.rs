//! Main entrypoint for running Gravity Field

use clap::Parser as _;
use color_eyre::eyre::{ContextCompat as _, Result};
use tokio::io::{AsyncBufReadExt as _, AsyncWriteExt as _};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, Layer as _};

use crate::cli_args::CliArgs;
use crate::config::{Config, LogLevel};
use crate::session::Session;

/// The number of microseconds in a second.
pub const ONE_MICROSECOND: u64 = 1_000_000;

/// The most input lines applied between two frames before the next frame is rendered.
pub const MAX_INPUT_LINES_PER_FRAME: usize = 256;

/// How the frame loop should run.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct DriverSettings {
    /// Target frames per second.
    pub frame_rate: u32,
    /// Stop after this many frames. When `None` the loop ends once input closes.
    pub max_frames: Option<u64>,
    /// Input lines applied between two frames. Once reached, further input waits for the next
    /// frame.
    pub max_lines_per_frame: usize,
}

impl DriverSettings {
    /// Instantiate
    #[must_use]
    pub const fn new(frame_rate: u32, max_frames: Option<u64>) -> Self {
        Self {
            frame_rate,
            max_frames,
            max_lines_per_frame: MAX_INPUT_LINES_PER_FRAME,
        }
    }

    /// Use a different limit for the input lines applied between two frames.
    #[must_use]
    pub const fn with_max_lines_per_frame(mut self, max_lines_per_frame: usize) -> Self {
        self.max_lines_per_frame = max_lines_per_frame;
        self
    }
}

/// Paces the frame loop.
struct FrameTicker {
    /// The duration of one frame.
    frame_duration: std::time::Duration,
    /// The time at which the previous frame was rendered.
    last_frame_tick: tokio::time::Instant,
}

impl FrameTicker {
    /// Instantiate
    fn new(frame_rate: u32) -> Self {
        let target = ONE_MICROSECOND.wrapping_div(u64::from(frame_rate.max(1)));
        Self {
            frame_duration: std::time::Duration::from_micros(target),
            last_frame_tick: tokio::time::Instant::now(),
        }
    }

    /// Sleep until the next frame render is due.
    async fn sleep_until_next_frame_tick(&mut self) {
        if let Some(wait) = self
            .frame_duration
            .checked_sub(self.last_frame_tick.elapsed())
        {
            tokio::time::sleep(wait).await;
        }
        self.last_frame_tick = tokio::time::Instant::now();
    }
}

/// Main entrypoint
pub async fn run() -> Result<()> {
    let cli_args = CliArgs::parse();
    let config = setup(&cli_args)?;

    let mut session = Session::new(&config, cli_args.seed)?;
    if let Some(mode) = cli_args.mode {
        session.world.set_mode(mode.into());
    }

    let settings = DriverSettings::new(
        cli_args.frame_rate.unwrap_or(config.frame_rate),
        cli_args.frames,
    );
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let output = tokio::io::stdout();
    let frames = drive(&mut session, input, output, settings).await?;

    tracing::info!("Gravity Field is exiting after {frames} frames");
    Ok(())
}

/// Load config and start logging.
fn setup(cli_args: &CliArgs) -> Result<Config> {
    let directory = Config::setup_directory(cli_args.config_dir.clone())?;
    let config = match Config::load(&directory, &cli_args.main_config) {
        Ok(config) => config,
        Err(config_error) => {
            let path = directory.join(&cli_args.main_config);
            color_eyre::eyre::bail!(
                "Bad config file: {config_error:?}\n\nConfig path: {}",
                path.display()
            );
        }
    };

    setup_logging(cli_args, &config)?;
    tracing::info!("Starting Gravity Field");
    tracing::debug!("Loaded config: {config:?}");

    Ok(config)
}

/// Setup logging. Logs go to a file because STDOUT carries the rendered frames.
fn setup_logging(cli_args: &CliArgs, config: &Config) -> Result<()> {
    let are_log_filters_manually_set = std::env::var("GRAVITY_LOG").is_ok();

    let path = cli_args
        .log_path
        .clone()
        .unwrap_or_else(|| config.log_path.clone());
    let level = cli_args
        .log_level
        .clone()
        .unwrap_or_else(|| config.log_level.clone());
    let level_as_string = format!("{level:?}").to_lowercase();

    let is_loggable = !matches!(level, LogLevel::Off) || are_log_filters_manually_set;
    if !is_loggable {
        return Ok(());
    }

    let directory = path.parent().context("Couldn't get log path's parent")?;
    std::fs::create_dir_all(directory)?;
    let file = std::fs::File::create(&path)?;

    let filters = if are_log_filters_manually_set {
        let user_filters = std::env::var("GRAVITY_LOG").unwrap_or_default();
        tracing_subscriber::EnvFilter::builder()
            .with_default_directive("error".parse()?)
            .parse_lossy(user_filters)
    } else {
        tracing_subscriber::EnvFilter::builder()
            .with_default_directive("off".parse()?)
            .parse_lossy("")
            .add_directive(format!("gravity={level_as_string}").parse()?)
            .add_directive(format!("gravity_field={level_as_string}").parse()?)
    };

    let logfile_layer = tracing_subscriber::fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_filter(filters);

    tracing_subscriber::registry().with(logfile_layer).init();
    Ok(())
}

/// Run the frame loop: apply input messages as they arrive and step the simulation at the
/// target frame rate, writing each frame as a line of JSON.
///
/// Input is only ever applied between frames. Pending input takes priority over the next frame,
/// but only up to `max_lines_per_frame` lines, so a constant stream of input can't hold frames
/// back. Returns the number of frames rendered.
pub async fn drive<R, W>(
    session: &mut Session,
    input: R,
    mut output: W,
    settings: DriverSettings,
) -> Result<u64>
where
    R: tokio::io::AsyncBufRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut is_input_open = true;
    let mut ticker = FrameTicker::new(settings.frame_rate);
    let mut frames: u64 = 0;
    let mut lines_since_frame: usize = 0;

    #[expect(
        clippy::integer_division_remainder_used,
        reason = "This is caused by the `tokio::select!`"
    )]
    loop {
        if settings.max_frames.is_some_and(|max| frames >= max) {
            break;
        }
        if !is_input_open && settings.max_frames.is_none() {
            break;
        }

        tokio::select! {
            biased;
            line = lines.next_line(),
                if is_input_open && lines_since_frame < settings.max_lines_per_frame =>
            {
                match line? {
                    Some(line) => {
                        handle_line(session, &line)?;
                        lines_since_frame += 1;
                    }
                    None => {
                        tracing::debug!("Input closed");
                        is_input_open = false;
                    }
                }
            },
            () = ticker.sleep_until_next_frame_tick() => {
                let frame = session.tick()?;
                send_output(&mut output, frame).await?;
                frames += 1;
                lines_since_frame = 0;
            }
        }
    }

    output.flush().await?;
    Ok(frames)
}

/// Parse and apply a single line of input. Malformed lines are logged and skipped.
fn handle_line(session: &mut Session, line: &str) -> Result<()> {
    if line.trim().is_empty() {
        return Ok(());
    }

    match serde_json::from_str::<gravity_protocol::InputMessages>(line) {
        Ok(message) => session.handle_message(message),
        Err(error) => {
            tracing::error!("Couldn't parse input message '{line}': {error:?}");
            Ok(())
        }
    }
}

/// Send a frame to the front end.
async fn send_output<W>(output: &mut W, frame: gravity_protocol::Frame) -> Result<()>
where
    W: tokio::io::AsyncWrite + Unpin,
{
    let mut json = serde_json::to_string(&gravity_protocol::OutputMessages::Frame(frame))?;
    json.push('\n');
    output.write_all(json.as_bytes()).await?;
    Ok(())
}
