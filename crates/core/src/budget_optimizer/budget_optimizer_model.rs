//! Budget optimizer domain models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget_optimizer::budget_optimizer_constants::*;
use crate::errors::{Result, ValidationError};

/// Message returned when any of the three request fields is absent.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: budget, destination, duration";

/// Message returned when the budget is not a positive number.
pub const INVALID_BUDGET_MESSAGE: &str = "Budget must be a positive number";

/// Trip length, restricted to the fixed set of buckets offered to travellers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum DurationBucket {
    OneToTwoDays,
    ThreeToFiveDays,
    OneWeek,
    TwoWeeks,
    ThreeWeeks,
    OneMonth,
}

impl DurationBucket {
    /// All buckets, shortest first.
    pub const ALL: [DurationBucket; 6] = [
        DurationBucket::OneToTwoDays,
        DurationBucket::ThreeToFiveDays,
        DurationBucket::OneWeek,
        DurationBucket::TwoWeeks,
        DurationBucket::ThreeWeeks,
        DurationBucket::OneMonth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DurationBucket::OneToTwoDays => DURATION_ONE_TO_TWO_DAYS,
            DurationBucket::ThreeToFiveDays => DURATION_THREE_TO_FIVE_DAYS,
            DurationBucket::OneWeek => DURATION_ONE_WEEK,
            DurationBucket::TwoWeeks => DURATION_TWO_WEEKS,
            DurationBucket::ThreeWeeks => DURATION_THREE_WEEKS,
            DurationBucket::OneMonth => DURATION_ONE_MONTH,
        }
    }

    /// Comma separated list of accepted labels, for error messages.
    pub fn accepted_labels() -> String {
        DurationBucket::ALL
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DurationBucket {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        DurationBucket::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid duration '{}'. Expected one of: {}",
                    s,
                    DurationBucket::accepted_labels()
                )
            })
    }
}

impl TryFrom<String> for DurationBucket {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DurationBucket> for &'static str {
    fn from(value: DurationBucket) -> Self {
        value.as_str()
    }
}

/// Spending categories of a trip budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Flights,
    Accommodation,
    Activities,
    Food,
}

impl BudgetCategory {
    /// Stable rendering order.
    pub const ALL: [BudgetCategory; 4] = [
        BudgetCategory::Flights,
        BudgetCategory::Accommodation,
        BudgetCategory::Activities,
        BudgetCategory::Food,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetCategory::Flights => "flights",
            BudgetCategory::Accommodation => "accommodation",
            BudgetCategory::Activities => "activities",
            BudgetCategory::Food => "food",
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse destination type used to bias the budget split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Beach,
    Mountain,
    Generic,
}

/// Fraction of the budget assigned to each category. The four shares of a
/// split always add up to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySplit {
    pub flights: Decimal,
    pub accommodation: Decimal,
    pub activities: Decimal,
    pub food: Decimal,
}

impl CategorySplit {
    pub fn share(&self, category: BudgetCategory) -> Decimal {
        match category {
            BudgetCategory::Flights => self.flights,
            BudgetCategory::Accommodation => self.accommodation,
            BudgetCategory::Activities => self.activities,
            BudgetCategory::Food => self.food,
        }
    }

    pub fn total(&self) -> Decimal {
        self.flights + self.accommodation + self.activities + self.food
    }
}

/// A validated request for a budget plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRequest {
    pub total_budget: Decimal,
    pub destination: String,
    pub duration: DurationBucket,
}

impl BudgetRequest {
    /// Builds a request, rejecting non-positive budgets and blank destinations.
    pub fn new(
        total_budget: Decimal,
        destination: impl Into<String>,
        duration: DurationBucket,
    ) -> Result<Self> {
        let destination = destination.into();
        if destination.trim().is_empty() {
            return Err(ValidationError::InvalidRequest(MISSING_FIELDS_MESSAGE.to_string()).into());
        }
        if total_budget <= Decimal::ZERO {
            return Err(ValidationError::InvalidRequest(INVALID_BUDGET_MESSAGE.to_string()).into());
        }
        Ok(Self {
            total_budget,
            destination,
            duration,
        })
    }

    /// Builds a request from loosely typed client fields.
    ///
    /// Presence of all three fields is checked first, then the budget sign,
    /// then the duration label.
    pub fn parse(
        total_budget: Option<Decimal>,
        destination: Option<&str>,
        duration: Option<&str>,
    ) -> Result<Self> {
        let (Some(total_budget), Some(destination), Some(duration)) = (
            total_budget,
            destination.filter(|d| !d.trim().is_empty()),
            duration.filter(|d| !d.is_empty()),
        ) else {
            return Err(ValidationError::InvalidRequest(MISSING_FIELDS_MESSAGE.to_string()).into());
        };

        if total_budget <= Decimal::ZERO {
            return Err(ValidationError::InvalidRequest(INVALID_BUDGET_MESSAGE.to_string()).into());
        }

        let duration = duration
            .parse::<DurationBucket>()
            .map_err(ValidationError::InvalidRequest)?;

        Self::new(total_budget, destination, duration)
    }
}

/// Planned spend for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAllocation {
    /// False when the category does not apply to the trip (no flights for a
    /// metro destination). The amounts are still computed.
    pub available: bool,
    /// Cost when booked naively
    #[serde(rename = "original")]
    pub original_amount: Decimal,
    /// Recommended cost
    #[serde(rename = "optimized")]
    pub optimized_amount: Decimal,
    pub savings: Decimal,
}

/// The four category allocations of a plan, always all present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetBreakdown {
    pub flights: CategoryAllocation,
    pub accommodation: CategoryAllocation,
    pub activities: CategoryAllocation,
    pub food: CategoryAllocation,
}

impl BudgetBreakdown {
    pub fn get(&self, category: BudgetCategory) -> &CategoryAllocation {
        match category {
            BudgetCategory::Flights => &self.flights,
            BudgetCategory::Accommodation => &self.accommodation,
            BudgetCategory::Activities => &self.activities,
            BudgetCategory::Food => &self.food,
        }
    }

    /// Iterates the categories in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = (BudgetCategory, &CategoryAllocation)> + '_ {
        BudgetCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Result of a budget optimization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPlan {
    /// Budget the split was computed against
    pub total_budget: Decimal,
    /// Sum of savings over all four categories, available or not
    pub estimated_savings: Decimal,
    pub breakdown: BudgetBreakdown,
}

impl BudgetPlan {
    pub fn total_optimized(&self) -> Decimal {
        self.breakdown.iter().map(|(_, a)| a.optimized_amount).sum()
    }

    pub fn total_original(&self) -> Decimal {
        self.breakdown.iter().map(|(_, a)| a.original_amount).sum()
    }
}

/// Minimum recommended spend for a destination and trip length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimumBudgetQuote {
    pub destination: String,
    pub duration: DurationBucket,
    pub minimum_budget: Decimal,
    /// Table keyword that matched the destination, `None` for the default row
    pub matched_keyword: Option<String>,
}
