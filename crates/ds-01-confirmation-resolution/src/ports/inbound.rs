//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{Confirmation, ResolutionTrace};
use shared_types::{PendingApproval, WalletState};
use std::sync::Arc;

/// Primary Confirmation Resolution API
pub trait ConfirmationResolutionApi: Send + Sync {
    /// The confirmation to display for `state`, or `None`.
    ///
    /// With `route_id` set, only the approval with that id is considered.
    /// Otherwise the most recent pending approval is the target.
    fn resolve_current_confirmation(
        &self,
        state: &WalletState,
        route_id: Option<&str>,
    ) -> Option<Confirmation>;

    /// Same resolution, with the target and the reason it did or did not
    /// resolve.
    fn explain(&self, state: &WalletState, route_id: Option<&str>) -> Arc<ResolutionTrace>;

    /// Most recent pending approval by `time`.
    fn latest_pending_approval(&self, state: &WalletState) -> Option<PendingApproval>;
}
