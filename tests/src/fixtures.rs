//! Snapshot fixtures shared by the integration tests and benchmarks.

use shared_types::{SnapshotError, WalletState};

/// Origin with five permitted addresses and five account records, two of
/// which share an address.
pub const REMIX: &str = "https://remix.ethereum.org";

/// Origin permitted a single address.
pub const PEEPETH: &str = "peepeth.com";

const REMIX_PERMISSIONS: &str = include_str!("../fixtures/remix_permissions.json");
const PENDING_CONFIRMATIONS: &str = include_str!("../fixtures/pending_confirmations.json");
const CONNECTED_SUBJECTS: &str = include_str!("../fixtures/connected_subjects.json");

/// Permissions, accounts, keyrings and history for the remix tab.
pub fn remix_permissions() -> Result<WalletState, SnapshotError> {
    WalletState::from_json_str(REMIX_PERMISSIONS)
}

/// A queue of messages and transactions on chain `0x5`, with a bridge
/// destination of `0x38`.
pub fn pending_confirmations() -> Result<WalletState, SnapshotError> {
    WalletState::from_json_str(PENDING_CONFIRMATIONS)
}

/// One selected account permitted on peepeth, then on remix.
pub fn connected_subjects() -> Result<WalletState, SnapshotError> {
    WalletState::from_json_str(CONNECTED_SUBJECTS)
}

/// The confirmation queue combined with the permission slices, so every
/// derivation has input.
pub fn full_snapshot() -> Result<WalletState, SnapshotError> {
    let accounts = remix_permissions()?;
    let mut state = pending_confirmations()?;

    state.subjects = accounts.subjects;
    state.subject_metadata = accounts.subject_metadata;
    state.permission_history = accounts.permission_history;
    state.internal_accounts = accounts.internal_accounts;
    state.keyrings = accounts.keyrings;
    state.active_tab = accounts.active_tab;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_parse() {
        let remix = remix_permissions().unwrap();
        assert_eq!(remix.internal_accounts.accounts.len(), 5);
        assert_eq!(remix.active_origin(), Some(REMIX));

        let pending = pending_confirmations().unwrap();
        assert_eq!(pending.pending_approvals.len(), 8);
        assert_eq!(pending.transactions.len(), 4);

        let connected = connected_subjects().unwrap();
        assert_eq!(connected.subjects.len(), 2);
    }

    #[test]
    fn test_full_snapshot_keeps_both_halves() {
        let state = full_snapshot().unwrap();
        assert_eq!(state.pending_approvals.len(), 8);
        assert_eq!(state.subjects.len(), 2);
        assert_eq!(state.active_origin(), Some(REMIX));
    }
}
