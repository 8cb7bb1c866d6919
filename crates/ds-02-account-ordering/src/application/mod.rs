//! Application layer for Account Ordering

pub mod service;

pub use service::AccountOrderingService;
