//! Algorithms module for Account Ordering
//!
//! Contains:
//! - Allow-list extraction from permission records
//! - Account resolution, enrichment and ordering
//! - Per-origin permission summaries

pub mod ordering;
pub mod permitted;
pub mod summaries;

pub use ordering::{keyring_position, order_connected_accounts, sort_key, OrderingInputs};
pub use permitted::{addresses_match, get_permitted_accounts, subject_permitted_accounts};
pub use summaries::{connected_subjects_for_address, last_connected_info, permissions_for_origin};
