//! Application layer for Confirmation Resolution

pub mod service;

pub use service::ConfirmationResolver;
