//! # Shared Selectors - Memoized Derivations
//!
//! Every derived value in the workspace is computed through a [`Selector`]:
//! a named, single-entry cache that remembers the last declared input slice
//! and the output computed from it.
//!
//! ## Rules
//!
//! - **Identity, not equality:** `Arc` inputs are "unchanged" only when they
//!   point at the same allocation. A structurally equal but newly built slice
//!   is a change.
//! - **One entry:** a changed input replaces the cache entry. Caches never
//!   grow.
//! - **Stable outputs:** a cache hit hands back the same `Arc<O>`, so
//!   consumers can compare results with `Arc::ptr_eq`.
//!
//! ## Composition
//!
//! ```text
//!   WalletState slices ──► Selector A ──► Arc<A> ─┐
//!                                                 ├──► Selector C ──► Arc<C>
//!   WalletState slices ──► Selector B ──► Arc<B> ─┘
//! ```
//!
//! Because an output `Arc` is itself a valid dependency, a downstream
//! selector only recomputes when an upstream selector actually recomputed.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod dependencies;
pub mod selector;

pub use dependencies::Dependencies;
pub use selector::{Selector, SelectorStats};
