//! Domain invariants for Account Ordering

use crate::algorithms::{addresses_match, sort_key};
use shared_types::{AccountRecord, Address, InternalAccounts, KeyringGroup};

/// INVARIANT-1: Scoped
/// Every returned account is on the origin's allow-list.
pub fn invariant_scoped(ordered: &[AccountRecord], permitted: &[Address]) -> bool {
    ordered
        .iter()
        .all(|account| permitted.iter().any(|p| addresses_match(p, &account.address)))
}

/// INVARIANT-2: Ordered
/// Adjacent accounts never violate the recency-then-keyring order.
pub fn invariant_ordered(ordered: &[AccountRecord], keyrings: &[KeyringGroup]) -> bool {
    ordered
        .windows(2)
        .all(|pair| sort_key(&pair[0], keyrings) <= sort_key(&pair[1], keyrings))
}

/// INVARIANT-3: No Deduplication
/// One entry per matching account record, with no id repeated.
pub fn invariant_one_entry_per_record(
    ordered: &[AccountRecord],
    permitted: &[Address],
    accounts: &InternalAccounts,
) -> bool {
    let expected = accounts
        .accounts
        .values()
        .filter(|record| permitted.iter().any(|p| addresses_match(p, &record.address)))
        .count();

    let mut ids: Vec<&str> = ordered.iter().map(|a| a.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();

    ordered.len() == expected && ids.len() == ordered.len()
}
