use rust_decimal::Decimal;
use thiserror::Error;

use crate::budget_optimizer::DurationBucket;

/// Errors raised by the budget optimizer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BudgetError {
    /// The requested budget is under the floor for the destination and trip
    /// length. Surfaced to the traveller as-is; never clamped.
    #[error("The budget of ₹{requested_amount} is below the minimum recommended budget of ₹{minimum_amount} for {destination} for {duration}. Please increase your budget for a better travel experience.")]
    TooLow {
        requested_amount: Decimal,
        minimum_amount: Decimal,
        destination: String,
        duration: DurationBucket,
    },
}
