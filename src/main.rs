use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use overmark::Config;
use overmark::notification::DesktopNotifier;
use overmark::overlay::{
    HeadlessHost, LogNotifier, Notifier, OverlayError, OverlaySession, RunState, StaticPermission,
};
use overmark::script::Script;
use std::fs::File;
use std::path::{Path, PathBuf};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("OVERMARK_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "overmark")]
#[command(version = VERSION, about = "Floating-toolbar screen annotation overlay")]
struct Cli {
    /// Replay a TOML input script against a headless overlay
    #[arg(long, short = 'r', value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Where to write the PNG snapshot after a replay
    #[arg(long, short = 'o', value_name = "FILE", default_value = "overmark.png")]
    output: PathBuf,

    /// Surface width (overrides the config file)
    #[arg(long, value_name = "PIXELS", value_parser = clap::value_parser!(i32).range(1..=16384))]
    width: Option<i32>,

    /// Surface height (overrides the config file)
    #[arg(long, value_name = "PIXELS", value_parser = clap::value_parser!(i32).range(1..=16384))]
    height: Option<i32>,

    /// Load settings from this file instead of the default location
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Behave as if the overlay permission was not granted
    #[arg(long, action = ArgAction::SetTrue)]
    deny_overlay: bool,

    /// Send notices to the desktop notification daemon instead of the log
    #[arg(long, action = ArgAction::SetTrue)]
    desktop_notify: bool,

    /// Write the example configuration to ~/.config/overmark/config.toml
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote example config to {}", path.display());
        return Ok(());
    }

    let Some(script_path) = cli.replay.as_deref() else {
        print_usage();
        return Ok(());
    };

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let notifier: Box<dyn Notifier> = if cli.desktop_notify {
        Box::new(DesktopNotifier::new().context("Failed to start notification runtime")?)
    } else {
        Box::new(LogNotifier)
    };

    replay(&cli, &config, script_path, notifier.as_ref())
}

fn replay(cli: &Cli, config: &Config, script_path: &Path, notifier: &dyn Notifier) -> Result<()> {
    let script = Script::load(script_path)?;
    let run_state = RunState::new();

    let mut session = match OverlaySession::start(
        HeadlessHost::default(),
        config,
        &StaticPermission(!cli.deny_overlay),
        notifier,
        &run_state,
    ) {
        Ok(session) => session,
        Err(OverlayError::PermissionDenied) => {
            return Err(anyhow::anyhow!("Overlay permission not granted"));
        }
        Err(err) => return Err(err.into()),
    };

    if cli.width.is_some() || cli.height.is_some() {
        let (width, height) = session.surface().size();
        session
            .surface_mut()
            .resize(cli.width.unwrap_or(width), cli.height.unwrap_or(height));
    }

    let summary = script.replay(&mut session, notifier);
    log::info!(
        "Replayed {} steps ({} drawn, {} passed through)",
        summary.applied,
        summary.consumed,
        summary.passed_through
    );

    let image = session
        .surface()
        .snapshot()
        .context("Failed to render snapshot")?;
    let mut file = File::create(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    image
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    println!(
        "{} shapes written to {}",
        session.surface().shapes().len(),
        cli.output.display()
    );

    session.stop();
    Ok(())
}

fn print_usage() {
    println!("overmark: Floating-toolbar screen annotation overlay");
    println!();
    println!("Usage:");
    println!("  overmark --replay <FILE>    Replay an input script and save a PNG snapshot");
    println!("  overmark --init-config      Write the example config file");
    println!("  overmark --help             Show help");
    println!();
    println!("Replay options:");
    println!("  --output <FILE>             Snapshot path (default: overmark.png)");
    println!("  --width/--height <PIXELS>   Override the surface size");
    println!("  --deny-overlay              Simulate a missing overlay permission");
    println!("  --desktop-notify            Show notices on the desktop");
}
