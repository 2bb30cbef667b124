//! Deterministic budget allocation.
//!
//! A plan is computed by splitting the effective budget over the four
//! categories with a terrain-dependent split. The "original" amount of each
//! category models a naive booking and is the optimized share marked up by
//! [`INEFFICIENCY_FACTOR`].

use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::budget_optimizer::destination_classifier::{classify_terrain, has_flights};
use crate::budget_optimizer::minimum_budget::minimum_budget_for;
use crate::budget_optimizer::{
    BudgetBreakdown, BudgetCategory, BudgetPlan, BudgetRequest, CategoryAllocation,
    CategorySplit, Terrain,
};
use crate::constants::{AMOUNT_DECIMAL_PRECISION, INEFFICIENCY_FACTOR};

const GENERIC_SPLIT: CategorySplit = CategorySplit {
    flights: dec!(0.35),
    accommodation: dec!(0.30),
    activities: dec!(0.20),
    food: dec!(0.15),
};

const BEACH_SPLIT: CategorySplit = CategorySplit {
    flights: dec!(0.30),
    accommodation: dec!(0.35),
    activities: dec!(0.20),
    food: dec!(0.15),
};

const MOUNTAIN_SPLIT: CategorySplit = CategorySplit {
    flights: dec!(0.30),
    accommodation: dec!(0.30),
    activities: dec!(0.25),
    food: dec!(0.15),
};

pub fn category_split(terrain: Terrain) -> CategorySplit {
    match terrain {
        Terrain::Beach => BEACH_SPLIT,
        Terrain::Mountain => MOUNTAIN_SPLIT,
        Terrain::Generic => GENERIC_SPLIT,
    }
}

/// Rounds to whole currency units, halves away from zero.
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        AMOUNT_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

fn allocate(effective_budget: Decimal, share: Decimal, available: bool) -> CategoryAllocation {
    let optimized_amount = round_amount(effective_budget * share);
    let original_amount = round_amount(effective_budget * share * INEFFICIENCY_FACTOR);
    CategoryAllocation {
        available,
        original_amount,
        optimized_amount,
        savings: original_amount - optimized_amount,
    }
}

/// Computes the plan for a request.
///
/// Never fails. Budgets below the destination floor are allocated as if the
/// floor had been requested; rejecting them is the caller's job (see
/// [`ensure_minimum_budget`](crate::budget_optimizer::ensure_minimum_budget)).
pub fn compute_plan(request: &BudgetRequest) -> BudgetPlan {
    let minimum = minimum_budget_for(&request.destination, request.duration);
    let effective_budget = request.total_budget.max(minimum);
    let terrain = classify_terrain(&request.destination);
    let split = category_split(terrain);
    let flights_available = has_flights(&request.destination);

    debug!(
        "Allocating {} for '{}' ({}) as {:?}, flights available: {}",
        effective_budget, request.destination, request.duration, terrain, flights_available
    );

    let breakdown = BudgetBreakdown {
        flights: allocate(
            effective_budget,
            split.share(BudgetCategory::Flights),
            flights_available,
        ),
        accommodation: allocate(
            effective_budget,
            split.share(BudgetCategory::Accommodation),
            true,
        ),
        activities: allocate(effective_budget, split.share(BudgetCategory::Activities), true),
        food: allocate(effective_budget, split.share(BudgetCategory::Food), true),
    };

    // Unavailable categories still count towards the savings figure.
    let estimated_savings = breakdown.iter().map(|(_, a)| a.savings).sum();

    BudgetPlan {
        total_budget: effective_budget,
        estimated_savings,
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget_optimizer::DurationBucket;

    fn request(budget: Decimal, destination: &str, duration: DurationBucket) -> BudgetRequest {
        BudgetRequest::new(budget, destination, duration).unwrap()
    }

    #[test]
    fn test_splits_sum_to_one() {
        for terrain in [Terrain::Beach, Terrain::Mountain, Terrain::Generic] {
            assert_eq!(category_split(terrain).total(), Decimal::ONE, "{:?}", terrain);
        }
    }

    #[test]
    fn test_round_amount_half_away_from_zero() {
        assert_eq!(round_amount(dec!(3703.5)), dec!(3704));
        assert_eq!(round_amount(dec!(4320.75)), dec!(4321));
        assert_eq!(round_amount(dec!(2469.0)), dec!(2469));
        assert_eq!(round_amount(dec!(1851.25)), dec!(1851));
    }

    #[test]
    fn test_goa_beach_plan() {
        let plan = compute_plan(&request(dec!(12000), "Goa", DurationBucket::ThreeToFiveDays));

        let accommodation = plan.breakdown.accommodation;
        assert_eq!(accommodation.optimized_amount, dec!(4200));
        assert_eq!(accommodation.original_amount, dec!(5040));
        assert_eq!(accommodation.savings, dec!(840));

        assert_eq!(plan.breakdown.flights.optimized_amount, dec!(3600));
        assert_eq!(plan.breakdown.activities.optimized_amount, dec!(2400));
        assert_eq!(plan.breakdown.food.optimized_amount, dec!(1800));
        assert!(plan.breakdown.flights.available);
        assert_eq!(plan.total_budget, dec!(12000));
        assert_eq!(plan.total_optimized(), dec!(12000));
        assert_eq!(plan.estimated_savings, dec!(2400));
    }

    #[test]
    fn test_metro_plan_hides_flights_but_counts_their_savings() {
        let plan = compute_plan(&request(
            dec!(5000),
            "Mumbai weekend",
            DurationBucket::OneToTwoDays,
        ));

        let flights = plan.breakdown.flights;
        assert!(!flights.available);
        assert_eq!(flights.optimized_amount, dec!(1750));
        assert_eq!(flights.original_amount, dec!(2100));
        assert_eq!(flights.savings, dec!(350));

        assert!(plan.breakdown.accommodation.available);
        assert!(plan.breakdown.activities.available);
        assert!(plan.breakdown.food.available);

        // 350 + 300 + 200 + 150
        assert_eq!(plan.estimated_savings, dec!(1000));
        assert_eq!(plan.estimated_savings, plan.total_original() - plan.total_optimized());
    }

    #[test]
    fn test_shimla_mountain_plan() {
        let plan = compute_plan(&request(dec!(50000), "Shimla", DurationBucket::TwoWeeks));

        assert_eq!(plan.breakdown.flights.optimized_amount, dec!(15000));
        assert_eq!(plan.breakdown.accommodation.optimized_amount, dec!(15000));
        assert_eq!(plan.breakdown.activities.optimized_amount, dec!(12500));
        assert_eq!(plan.breakdown.food.optimized_amount, dec!(7500));
        assert_eq!(plan.total_optimized(), dec!(50000));
    }

    #[test]
    fn test_rounding_drift_stays_within_one_unit_per_category() {
        let plan = compute_plan(&request(dec!(12345), "Jaipur", DurationBucket::ThreeToFiveDays));
        assert_eq!(plan.breakdown.flights.optimized_amount, dec!(4321));
        assert_eq!(plan.breakdown.accommodation.optimized_amount, dec!(3704));
        assert_eq!(plan.breakdown.activities.optimized_amount, dec!(2469));
        assert_eq!(plan.breakdown.food.optimized_amount, dec!(1852));

        let drift = (plan.total_optimized() - plan.total_budget).abs();
        assert!(drift <= dec!(4), "drift {}", drift);
    }

    #[test]
    fn test_budget_below_floor_is_allocated_against_floor() {
        let plan = compute_plan(&request(dec!(2000), "Goa", DurationBucket::OneWeek));
        assert_eq!(plan.total_budget, dec!(12000));
        assert_eq!(plan.total_optimized(), dec!(12000));
    }

    #[test]
    fn test_breakdown_iterates_in_rendering_order() {
        let plan = compute_plan(&request(dec!(20000), "Kerala", DurationBucket::ThreeToFiveDays));
        let order: Vec<BudgetCategory> = plan.breakdown.iter().map(|(c, _)| c).collect();
        assert_eq!(order, BudgetCategory::ALL.to_vec());
    }
}
