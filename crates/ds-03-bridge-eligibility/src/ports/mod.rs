//! Ports module for Bridge Eligibility

pub mod inbound;

pub use inbound::BridgeEligibilityApi;
