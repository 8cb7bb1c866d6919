//! # Shared Types Crate
//!
//! This crate contains the immutable wallet state snapshot (`WalletState`) and
//! every record type the derivation crates read from it.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate record types are defined here.
//! - **Read-Only Snapshot**: Nothing in the derivation layer mutates a
//!   snapshot. An update produces a new `WalletState` whose unchanged slices
//!   are shared with the previous one.
//! - **Identity by Slice**: Every top-level slice lives behind an `Arc`, so
//!   selectors can detect "unchanged" with a pointer comparison.

pub mod entities;
pub mod errors;
pub mod id_map;
pub mod state;

pub use entities::*;
pub use errors::*;
pub use id_map::IdMap;
pub use state::WalletState;
