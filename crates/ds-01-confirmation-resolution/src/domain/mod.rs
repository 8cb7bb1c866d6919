//! Domain module for Confirmation Resolution
//!
//! Contains the resolved entity, the gate/outcome value objects, and
//! invariants.

pub mod entities;
pub mod invariants;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
