//! Ports module for Account Ordering

pub mod inbound;

pub use inbound::AccountOrderingApi;
