//! `state-runtime` binary.

use anyhow::{Context, Result};
use clap::Parser;
use shared_types::WalletState;
use state_runtime::{Args, DerivedStateRuntime};
use state_telemetry::{init_logging, TelemetryConfig};
use tracing::debug;

fn main() -> Result<()> {
    let args = Args::parse();

    let telemetry = TelemetryConfig::from_env();
    init_logging(&telemetry).context("Failed to initialize logging")?;
    debug!(?args, "Starting state-runtime");

    let state = WalletState::load(&args.snapshot)
        .with_context(|| format!("Failed to load snapshot {}", args.snapshot.display()))?;

    let runtime = DerivedStateRuntime::new();
    let report = runtime.report(&state, args.route_id.as_deref(), args.origin.as_deref());

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{rendered}");
    } else {
        print!("{report}");
    }

    Ok(())
}
