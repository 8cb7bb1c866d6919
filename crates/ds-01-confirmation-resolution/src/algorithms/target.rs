//! Target Selection
//!
//! Picks the pending approval a resolution is about: the one named by the
//! route, or else the most recent one.

use shared_types::{IdMap, PendingApproval};

/// Select the target approval.
///
/// A route id that names no pending approval selects nothing; it does not
/// fall back to the latest approval. An empty route id counts as absent.
pub fn select_target<'a>(
    approvals: &'a IdMap<PendingApproval>,
    route_id: Option<&str>,
) -> Option<&'a PendingApproval> {
    match route_id.filter(|id| !id.is_empty()) {
        Some(id) => approvals.get(id),
        None => latest_pending_approval(approvals),
    }
}

/// The approval with the greatest `time`. Ties go to the first one in
/// insertion order.
pub fn latest_pending_approval(approvals: &IdMap<PendingApproval>) -> Option<&PendingApproval> {
    approvals.values().fold(None, |best, candidate| match best {
        Some(current) if current.time >= candidate.time => Some(current),
        _ => Some(candidate),
    })
}
