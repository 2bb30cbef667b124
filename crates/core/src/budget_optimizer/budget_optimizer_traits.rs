use crate::budget_optimizer::{BudgetPlan, BudgetRequest, DurationBucket, MinimumBudgetQuote};
use crate::errors::Result;

/// Trait for budget optimizer service operations
pub trait BudgetOptimizerServiceTrait: Send + Sync {
    /// Checks the request against the destination floor and returns the plan.
    fn optimize(&self, request: &BudgetRequest) -> Result<BudgetPlan>;
    fn minimum_budget(&self, destination: &str, duration: DurationBucket) -> MinimumBudgetQuote;
    fn durations(&self) -> Vec<DurationBucket>;
}
