//! Core error types for the Tripwise planner.
//!
//! Transport concerns (HTTP status codes, response bodies) are mapped from
//! these types by the server crate.

use thiserror::Error;

use crate::budget_optimizer::BudgetError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the planner.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Budget(#[from] BudgetError),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Client-facing rejection of a request; the message is shown verbatim.
    #[error("{0}")]
    InvalidRequest(String),
}
