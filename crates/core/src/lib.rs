//! Tripwise Core - travel budget planning domain.
//!
//! This crate holds the deterministic budget optimizer: the minimum budget
//! table, the destination classifier and the allocation engine. It performs
//! no I/O; transport and persistence belong to the callers.

pub mod budget_optimizer;
pub mod constants;
pub mod errors;

pub use budget_optimizer::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
