use log::debug;

use crate::budget_optimizer::allocation_engine::compute_plan;
use crate::budget_optimizer::budget_optimizer_traits::BudgetOptimizerServiceTrait;
use crate::budget_optimizer::minimum_budget::{ensure_minimum_budget, quote_minimum_budget};
use crate::budget_optimizer::{BudgetPlan, BudgetRequest, DurationBucket, MinimumBudgetQuote};
use crate::errors::Result;

/// Rule-based budget optimizer. Stateless; one instance can serve any number
/// of concurrent callers.
#[derive(Debug, Default, Clone)]
pub struct BudgetOptimizerService;

impl BudgetOptimizerService {
    pub fn new() -> Self {
        BudgetOptimizerService
    }
}

impl BudgetOptimizerServiceTrait for BudgetOptimizerService {
    fn optimize(&self, request: &BudgetRequest) -> Result<BudgetPlan> {
        let minimum = ensure_minimum_budget(request)?;
        let plan = compute_plan(request);
        debug!(
            "Optimized budget {} for '{}' (minimum {}): estimated savings {}",
            plan.total_budget, request.destination, minimum, plan.estimated_savings
        );
        Ok(plan)
    }

    fn minimum_budget(&self, destination: &str, duration: DurationBucket) -> MinimumBudgetQuote {
        quote_minimum_budget(destination, duration)
    }

    fn durations(&self) -> Vec<DurationBucket> {
        DurationBucket::ALL.to_vec()
    }
}
