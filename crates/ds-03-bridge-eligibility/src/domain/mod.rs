//! Domain layer for Bridge Eligibility

pub mod value_objects;

pub use value_objects::{BridgeEligibility, BridgeReason};
