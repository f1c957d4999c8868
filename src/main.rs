//! Traffic light simulator — host entry point.
//!
//! Stands in for a timer interrupt: drives the [`SignalService`] from a
//! plain loop, one tick per iteration, and logs every event.
//!
//! ```text
//! ┌───────────┐   tick()   ┌───────────────┐   emit()   ┌──────────────┐
//! │ loop (N)  │───────────▶│ SignalService │───────────▶│ LogEventSink │
//! └───────────┘            └───────────────┘            └──────────────┘
//!                                  │ --verify
//!                                  ▼
//!                          replay::state_after
//! ```
#![deny(unused_must_use)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use clap::Parser;
use log::info;
use tracing_subscriber::EnvFilter;

use trafficlight::adapters::log_sink::LogEventSink;
use trafficlight::app::service::SignalService;
use trafficlight::config::DriverConfig;
use trafficlight::fsm::states::CYCLE_TICKS;
use trafficlight::replay;

/// Drive a simulated traffic light for a number of ticks.
#[derive(Debug, Parser)]
#[command(name = "traffic-sim", version, about)]
struct Args {
    /// Number of ticks to run (defaults to one full cycle).
    #[arg(short, long, default_value_t = CYCLE_TICKS as u64)]
    ticks: u64,

    /// JSON file with a `DriverConfig`.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `tick_interval_ms`.
    #[arg(long)]
    tick_interval_ms: Option<u32>,

    /// Override `telemetry_interval_ticks` (0 disables telemetry).
    #[arg(long)]
    telemetry_interval: Option<u32>,

    /// Cross-check every tick against the closed-form replay.
    #[arg(long)]
    verify: bool,
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    // The fmt subscriber also bridges `log` records from the library.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("installing log subscriber")?;

    let args = Args::parse();
    info!("traffic-sim v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration (file, then CLI overrides) ───────────
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => DriverConfig::default(),
    };
    if let Some(ms) = args.tick_interval_ms {
        config.tick_interval_ms = ms;
    }
    if let Some(every) = args.telemetry_interval {
        config.telemetry_interval_ticks = every;
    }

    // ── 3. Run ────────────────────────────────────────────────
    let mut app = SignalService::new(config).context("invalid driver configuration")?;
    let mut sink = LogEventSink::new();
    app.start(&mut sink);

    for _ in 0..args.ticks {
        let state = app.tick(&mut sink);
        if args.verify {
            let expected = replay::state_after(app.total_ticks());
            ensure!(
                state == expected,
                "controller diverged from replay at tick {}: got {}, expected {}",
                app.total_ticks(),
                state,
                expected
            );
        }
    }

    info!(
        "finished after {} ticks in {} ({:.1}s in state at {}ms/tick)",
        app.total_ticks(),
        app.state(),
        app.secs_in_state(),
        app.config().tick_interval_ms
    );
    if args.verify {
        info!("replay check passed for all {} ticks", app.total_ticks());
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<DriverConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}
