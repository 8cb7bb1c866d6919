//! # DS-01: Confirmation Resolution
//!
//! Decides which single pending confirmation (a signature request or a
//! transaction) the wallet should show right now, if any.
//!
//! ## Architecture
//!
//! - **Domain**: `Confirmation`, `ConfirmationKind`, `GateDecision`, `Outcome`
//! - **Algorithms**: target selection, gate evaluation, type dispatch
//! - **Ports**: Inbound (`ConfirmationResolutionApi`)
//! - **Application**: memoized `ConfirmationResolver`
//!
//! ## Pipeline
//!
//! ```text
//! pendingApprovals ──► target (route id or latest) ──► gate ──► dispatch
//!                                                              │
//!                              ┌───────────────────────────────┤
//!                              ▼                               ▼
//!                    message lookup + SIWE          transaction lookup +
//!                                                   chain/status/type checks
//! ```
//!
//! Every unmet precondition resolves to `None`. Nothing here returns an
//! error or panics.

#![warn(clippy::all)]

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use algorithms::{evaluate_gate, is_siwe_message, latest_pending_approval, select_target};
pub use application::service::ConfirmationResolver;
pub use config::ResolverConfig;
pub use domain::entities::{Confirmation, ResolutionTrace};
pub use domain::value_objects::{ConfirmationKind, GateDecision, GateReason, Outcome};
pub use ports::inbound::ConfirmationResolutionApi;

use lazy_static::lazy_static;
use shared_types::WalletState;

lazy_static! {
    static ref DEFAULT_RESOLVER: ConfirmationResolver = ConfirmationResolver::new();
}

/// Resolve the current confirmation with the process-wide default resolver.
pub fn resolve_current_confirmation(
    state: &WalletState,
    route_id: Option<&str>,
) -> Option<Confirmation> {
    DEFAULT_RESOLVER.resolve_current_confirmation(state, route_id)
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
