//! Budget optimizer module - domain models, lookup tables, allocation engine and service.

pub mod allocation_engine;
mod budget_optimizer_constants;
mod budget_optimizer_errors;
mod budget_optimizer_model;
mod budget_optimizer_service;
mod budget_optimizer_traits;
pub mod destination_classifier;
pub mod minimum_budget;


pub use allocation_engine::{category_split, compute_plan, round_amount};
pub use budget_optimizer_constants::*;
pub use budget_optimizer_errors::BudgetError;
pub use budget_optimizer_model::{
    BudgetBreakdown, BudgetCategory, BudgetPlan, BudgetRequest, CategoryAllocation,
    CategorySplit, DurationBucket, MinimumBudgetQuote, Terrain, INVALID_BUDGET_MESSAGE,
    MISSING_FIELDS_MESSAGE,
};
pub use budget_optimizer_service::BudgetOptimizerService;
pub use budget_optimizer_traits::BudgetOptimizerServiceTrait;
pub use destination_classifier::{classify_terrain, has_flights};
pub use minimum_budget::{
    default_minimum_budget, ensure_minimum_budget, minimum_budget_for, quote_minimum_budget,
    MinimumBudgetRow, MINIMUM_BUDGETS,
};
