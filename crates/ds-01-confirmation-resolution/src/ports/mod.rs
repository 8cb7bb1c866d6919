//! Ports module for Confirmation Resolution
//!
//! Only a driving port: the resolver reads snapshots handed to it and has no
//! outbound dependencies.

pub mod inbound;

pub use inbound::ConfirmationResolutionApi;
