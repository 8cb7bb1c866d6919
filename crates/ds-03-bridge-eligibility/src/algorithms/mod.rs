//! Algorithms module for Bridge Eligibility

pub mod eligibility;

pub use eligibility::{evaluate_bridge, get_from_chain, get_to_chain, is_bridge_enabled};
