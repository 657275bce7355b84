use clap::Parser;
use std::path::PathBuf;
use teleplot_core::SessionConfig;
use teleplot_gui::{run_gui, GuiConfig};
use teleplot_runtime::run_headless;

/// Live charts for line-oriented telemetry printed by a child process.
#[derive(Parser)]
#[command(name = "teleplot", version, about = "Live telemetry plotter")]
struct Cli {
    /// Instrumented script to launch (defaults to the bundled demo emitter)
    script: Option<String>,
    /// Load a saved session configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Render tick interval in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,
    /// Idle ticks tolerated before timeout while warming up in START
    #[arg(long)]
    warmup_ticks: Option<u32>,
    /// Idle ticks tolerated before timeout once samples flow in RUN
    #[arg(long)]
    steady_ticks: Option<u32>,
    /// Bound the sample queue; oldest samples are dropped on overflow
    #[arg(long)]
    queue_capacity: Option<usize>,
    /// Run without a window; logs state transitions and exits on STOP
    #[arg(long)]
    no_gui: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    if let Some(script) = cli.script {
        config.script_path = script;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_interval_ms = tick_ms;
    }
    if let Some(warmup) = cli.warmup_ticks {
        config.warmup_ticks = warmup;
    }
    if let Some(steady) = cli.steady_ticks {
        config.steady_ticks = steady;
    }
    if let Some(capacity) = cli.queue_capacity {
        config.queue_capacity = Some(capacity);
    }
    config.validate()?;
    log::info!(
        "launching {} (tick {} ms, warmup {}, steady {})",
        config.script_path,
        config.tick_interval_ms,
        config.warmup_ticks,
        config.steady_ticks
    );

    if cli.no_gui {
        run_headless(&config)?;
    } else {
        run_gui(config, GuiConfig::default())?;
    }
    Ok(())
}
