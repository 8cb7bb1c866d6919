//! # Derived-State Runtime
//!
//! Wires the three derivation crates behind one entry point and renders
//! their results for a snapshot loaded from disk.
//!
//! ## Flow
//!
//! ```text
//! snapshot.json ──► WalletState ──┬──► ds-01 ConfirmationResolver
//!                                 ├──► ds-02 AccountOrderingService
//!                                 └──► ds-03 BridgeEligibilityService
//!                                               │
//!                                               ▼
//!                                        DerivedReport (text / JSON)
//! ```

pub mod cli;
pub mod report;

pub use cli::Args;
pub use report::{DerivedReport, DerivedStateRuntime};
