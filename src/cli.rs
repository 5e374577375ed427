use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use exprquiz::expression::{DEFAULT_INDENT, MAX_INDENT};
use exprquiz::{GameConfig, play_on_console};
use log::info;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Exprquiz - Guess the value of arithmetic expression trees
#[derive(Parser, Debug)]
#[command(name = "exprquiz")]
#[command(about = "Console quiz that draws expression trees and asks for their result")]
#[command(version)]
pub struct CliArgs {
    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Skip the welcome banner and loading animation
    #[arg(long)]
    pub skip_intro: bool,

    /// Columns per level in the tree diagram
    #[arg(
        long,
        default_value_t = DEFAULT_INDENT as u16,
        value_parser = clap::value_parser!(u16).range(0..=MAX_INDENT as i64)
    )]
    pub indent: u16,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub game: GameConfig,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        CliConfig {
            game: GameConfig {
                indent: usize::from(args.indent),
                show_intro: !args.skip_intro,
                ..GameConfig::default()
            },
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> CliConfig {
    CliArgs::parse().into()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args();

    init_logging(&config.log_level)?;

    info!("Starting quiz with {:?}", config.game);

    let summary = play_on_console(config.game).context("Quiz aborted")?;
    info!("Final score: {}/{}", summary.score, summary.total);
    Ok(())
}
