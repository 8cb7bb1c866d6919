//! Allow-list extraction
//!
//! The `restrictReturnedAccounts` caveat on an origin's `eth_accounts`
//! permission is the authoritative list of addresses that origin may see.

use crate::config::OrderingConfig;
use shared_types::{Address, IdMap, Subject};

/// Addresses exposed to `origin`, in caveat order.
///
/// Empty when the origin has no subject record, no account permission, or
/// no allow-list caveat.
pub fn get_permitted_accounts(
    subjects: &IdMap<Subject>,
    origin: &str,
    config: &OrderingConfig,
) -> Vec<Address> {
    subjects
        .get(origin)
        .map(|subject| subject_permitted_accounts(subject, config))
        .unwrap_or_default()
}

/// The allow-list carried by one subject record.
pub fn subject_permitted_accounts(subject: &Subject, config: &OrderingConfig) -> Vec<Address> {
    subject
        .permissions
        .get(&config.eth_accounts_capability)
        .and_then(|permission| permission.caveat(&config.restrict_returned_accounts_caveat))
        .map(|caveat| caveat.addresses())
        .unwrap_or_default()
}

/// Hex addresses compare without regard to checksum casing.
pub fn addresses_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}
