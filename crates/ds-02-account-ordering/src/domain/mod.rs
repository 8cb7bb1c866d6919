//! Domain layer for Account Ordering

pub mod invariants;
pub mod value_objects;

pub use value_objects::{
    ConnectedAccountsInfo, ConnectedSubject, LastConnectedInfo, PermissionEntry, SortKey,
};
