//! # State Telemetry
//!
//! Subscriber setup for the derivation crates, which only emit `tracing`
//! events and never install a subscriber themselves.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use state_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DS_LOG_LEVEL` | `RUST_LOG`, then `info` | Log filter directive |
//! | `DS_JSON_LOGS` | `false` | Emit JSON lines instead of text |
//! | `DS_SERVICE_NAME` | `derived-state` | Service name attached to the startup event |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter '{directive}': {reason}")]
    Filter { directive: String, reason: String },

    #[error("A global subscriber is already installed: {0}")]
    AlreadyInitialized(String),
}
