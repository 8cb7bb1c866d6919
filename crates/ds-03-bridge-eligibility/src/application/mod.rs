//! Application layer for Bridge Eligibility

pub mod service;

pub use service::BridgeEligibilityService;
