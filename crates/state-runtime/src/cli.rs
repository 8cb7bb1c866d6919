//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Print every derived value for a wallet state snapshot
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "state-runtime")]
#[command(about = "Evaluate the derived-state selectors against a wallet state snapshot")]
pub struct Args {
    /// Path to the JSON snapshot
    pub snapshot: PathBuf,

    /// Confirmation id taken from the route; the latest approval is used when absent
    #[arg(long, env = "DS_ROUTE_ID")]
    pub route_id: Option<String>,

    /// Origin to order accounts for; the active tab's origin when absent
    #[arg(long, env = "DS_ORIGIN")]
    pub origin: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}
