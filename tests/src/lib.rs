//! # Derived-State Test Suite
//!
//! Unified test crate exercising the three derivations together.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── fixtures/          # JSON wallet state snapshots
//! │   ├── pending_confirmations.json
//! │   └── remix_permissions.json
//! ├── src/
//! │   ├── fixtures.rs    # Snapshot loaders
//! │   └── integration/   # Cross-derivation flows and memoization
//! └── benches/           # Selector hit vs recompute
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ds-tests
//!
//! # By category
//! cargo test -p ds-tests integration::flows
//! cargo test -p ds-tests integration::memoization
//!
//! # Benchmarks
//! cargo bench -p ds-tests
//! ```

pub mod fixtures;
