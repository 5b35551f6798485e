use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, debug};
use remap_cli::cli::{Context, DecodeArgs, InspectArgs, RangesArgs};
use remap_cli::config::{CliConfig, OutputFormat};
use remap_cli::lookup::OverlayLookup;

/// Inspect 16-bit keyboard firmware keycodes
#[derive(Parser, Debug)]
#[command(name = "remap", author, version, about, long_about = None)]
struct Cli {
    /// Config file, `remap.toml` in the working directory by default
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format, overrides the config file
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Log level (off, error, warn, info, debug, trace), overrides the config file and RUST_LOG
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<LevelFilter>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Decode(DecodeArgs),
    Ranges(RangesArgs),
    Inspect(InspectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_path) = CliConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level.or(config.log_level()?) {
        builder.filter_level(level);
    }
    builder.init();

    match &config_path {
        Some(path) => debug!("Loaded config from {}", path.display()),
        None => debug!("No config file, using defaults"),
    }

    let ctx = Context {
        format: cli.format.unwrap_or(config.output.format),
        radix: config.output.radix,
        lookup: OverlayLookup::new(config.label_overrides()?),
    };

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Decode(args) => args.execute(&ctx, &mut stdout),
        Command::Ranges(args) => args.execute(&ctx, &mut stdout),
        Command::Inspect(args) => args.execute(&ctx, &mut stdout),
    }
}
