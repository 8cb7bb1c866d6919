//! Algorithms module for Confirmation Resolution
//!
//! Contains:
//! - Target selection (route id or latest approval)
//! - Gate evaluation
//! - Type dispatch to the message or transaction branch

pub mod dispatch;
pub mod gate;
pub mod target;

pub use dispatch::{is_siwe_message, resolve, resolve_target, ResolutionInputs};
pub use gate::evaluate_gate;
pub use target::{latest_pending_approval, select_target};
