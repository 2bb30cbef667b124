//! Minimum recommended spend per destination and trip length.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::budget_optimizer::{
    BudgetError, BudgetRequest, DurationBucket, DurationBucket::*, MinimumBudgetQuote,
};
use crate::errors::Result;

/// Floors for destinations whose name contains `keyword`.
#[derive(Debug)]
pub struct MinimumBudgetRow {
    pub keyword: &'static str,
    pub amounts: &'static [(DurationBucket, Decimal)],
}

impl MinimumBudgetRow {
    fn matches(&self, destination_lower: &str) -> bool {
        destination_lower.contains(&self.keyword.to_lowercase())
    }

    pub fn amount_for(&self, duration: DurationBucket) -> Option<Decimal> {
        self.amounts
            .iter()
            .find(|(d, _)| *d == duration)
            .map(|(_, amount)| *amount)
    }
}

/// Rows are matched in declaration order; the first keyword contained in the
/// destination wins.
pub const MINIMUM_BUDGETS: &[MinimumBudgetRow] = &[
    MinimumBudgetRow {
        keyword: "Goa",
        amounts: &[
            (OneToTwoDays, dec!(3000)),
            (ThreeToFiveDays, dec!(7000)),
            (OneWeek, dec!(12000)),
            (TwoWeeks, dec!(20000)),
            (ThreeWeeks, dec!(28000)),
            (OneMonth, dec!(35000)),
        ],
    },
    MinimumBudgetRow {
        keyword: "Mumbai",
        amounts: &[
            (OneToTwoDays, dec!(4000)),
            (ThreeToFiveDays, dec!(9000)),
            (OneWeek, dec!(15000)),
            (TwoWeeks, dec!(25000)),
            (ThreeWeeks, dec!(35000)),
            (OneMonth, dec!(45000)),
        ],
    },
    MinimumBudgetRow {
        keyword: "Delhi",
        amounts: &[
            (OneToTwoDays, dec!(3500)),
            (ThreeToFiveDays, dec!(8000)),
            (OneWeek, dec!(14000)),
            (TwoWeeks, dec!(23000)),
            (ThreeWeeks, dec!(32000)),
            (OneMonth, dec!(40000)),
        ],
    },
    MinimumBudgetRow {
        keyword: "Bangalore",
        amounts: &[
            (OneToTwoDays, dec!(4000)),
            (ThreeToFiveDays, dec!(9000)),
            (OneWeek, dec!(16000)),
            (TwoWeeks, dec!(28000)),
            (ThreeWeeks, dec!(38000)),
            (OneMonth, dec!(48000)),
        ],
    },
    MinimumBudgetRow {
        keyword: "Shimla",
        amounts: &[
            (OneToTwoDays, dec!(5000)),
            (ThreeToFiveDays, dec!(12000)),
            (OneWeek, dec!(20000)),
            (TwoWeeks, dec!(35000)),
            (ThreeWeeks, dec!(48000)),
            (OneMonth, dec!(60000)),
        ],
    },
    MinimumBudgetRow {
        keyword: "Manali",
        amounts: &[
            (OneToTwoDays, dec!(6000)),
            (ThreeToFiveDays, dec!(15000)),
            (OneWeek, dec!(25000)),
            (TwoWeeks, dec!(40000)),
            (ThreeWeeks, dec!(55000)),
            (OneMonth, dec!(70000)),
        ],
    },
    MinimumBudgetRow {
        keyword: "Kashmir",
        amounts: &[
            (OneToTwoDays, dec!(8000)),
            (ThreeToFiveDays, dec!(20000)),
            (OneWeek, dec!(35000)),
            (TwoWeeks, dec!(60000)),
            (ThreeWeeks, dec!(85000)),
            (OneMonth, dec!(110000)),
        ],
    },
    MinimumBudgetRow {
        keyword: "Kerala",
        amounts: &[
            (OneToTwoDays, dec!(6000)),
            (ThreeToFiveDays, dec!(15000)),
            (OneWeek, dec!(25000)),
            (TwoWeeks, dec!(40000)),
            (ThreeWeeks, dec!(55000)),
            (OneMonth, dec!(70000)),
        ],
    },
    MinimumBudgetRow {
        keyword: "Rajasthan",
        amounts: &[
            (OneToTwoDays, dec!(5000)),
            (ThreeToFiveDays, dec!(12000)),
            (OneWeek, dec!(22000)),
            (TwoWeeks, dec!(38000)),
            (ThreeWeeks, dec!(52000)),
            (OneMonth, dec!(65000)),
        ],
    },
    MinimumBudgetRow {
        keyword: "Andaman",
        amounts: &[
            (OneToTwoDays, dec!(10000)),
            (ThreeToFiveDays, dec!(25000)),
            (OneWeek, dec!(45000)),
            (TwoWeeks, dec!(80000)),
            (ThreeWeeks, dec!(110000)),
            (OneMonth, dec!(140000)),
        ],
    },
];

/// Floor for destinations not in [`MINIMUM_BUDGETS`], and for buckets a
/// matched row does not list.
pub fn default_minimum_budget(duration: DurationBucket) -> Decimal {
    match duration {
        OneToTwoDays => dec!(4000),
        ThreeToFiveDays => dec!(9000),
        OneWeek => dec!(16000),
        TwoWeeks => dec!(28000),
        ThreeWeeks => dec!(38000),
        OneMonth => dec!(48000),
    }
}

fn matching_row<'a>(
    table: &'a [MinimumBudgetRow],
    destination: &str,
) -> Option<&'a MinimumBudgetRow> {
    let destination_lower = destination.to_lowercase();
    table.iter().find(|row| row.matches(&destination_lower))
}

fn lookup_in(
    table: &'static [MinimumBudgetRow],
    destination: &str,
    duration: DurationBucket,
) -> (Decimal, Option<&'static MinimumBudgetRow>) {
    let row = matching_row(table, destination);
    let amount = row
        .and_then(|r| r.amount_for(duration))
        .unwrap_or_else(|| default_minimum_budget(duration));
    (amount, row)
}

/// Returns the minimum recommended budget for a trip.
pub fn minimum_budget_for(destination: &str, duration: DurationBucket) -> Decimal {
    lookup_in(MINIMUM_BUDGETS, destination, duration).0
}

/// Same lookup as [`minimum_budget_for`], also reporting which keyword matched.
pub fn quote_minimum_budget(destination: &str, duration: DurationBucket) -> MinimumBudgetQuote {
    let (minimum_budget, row) = lookup_in(MINIMUM_BUDGETS, destination, duration);
    MinimumBudgetQuote {
        destination: destination.to_string(),
        duration,
        minimum_budget,
        matched_keyword: row.map(|r| r.keyword.to_string()),
    }
}

/// Rejects requests below the floor. Returns the floor on success.
pub fn ensure_minimum_budget(request: &BudgetRequest) -> Result<Decimal> {
    let minimum = minimum_budget_for(&request.destination, request.duration);
    if request.total_budget < minimum {
        debug!(
            "Rejecting budget {} for '{}' ({}): minimum is {}",
            request.total_budget, request.destination, request.duration, minimum
        );
        return Err(BudgetError::TooLow {
            requested_amount: request.total_budget,
            minimum_amount: minimum,
            destination: request.destination.clone(),
            duration: request.duration,
        }
        .into());
    }
    Ok(minimum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_known_destination_lookup() {
        assert_eq!(minimum_budget_for("Goa", ThreeToFiveDays), dec!(7000));
        assert_eq!(minimum_budget_for("Goa", OneWeek), dec!(12000));
        assert_eq!(minimum_budget_for("Mumbai", OneToTwoDays), dec!(4000));
        assert_eq!(minimum_budget_for("Andaman", OneMonth), dec!(140000));
    }

    #[test]
    fn test_lookup_is_case_insensitive_substring() {
        assert_eq!(minimum_budget_for("north GOA beaches", OneWeek), dec!(12000));
        assert_eq!(minimum_budget_for("mumbai weekend", OneToTwoDays), dec!(4000));
    }

    #[test]
    fn test_unknown_destination_uses_default() {
        for duration in DurationBucket::ALL {
            assert_eq!(
                minimum_budget_for("Reykjavik", duration),
                default_minimum_budget(duration)
            );
        }
        assert_eq!(minimum_budget_for("Jaipur", TwoWeeks), dec!(28000));
    }

    #[test]
    fn test_first_declared_keyword_wins() {
        // Goa is declared before Kashmir.
        assert_eq!(minimum_budget_for("Kashmir then Goa", OneWeek), dec!(12000));
        // Delhi is declared before Manali.
        assert_eq!(minimum_budget_for("Manali via Delhi", OneWeek), dec!(14000));
    }

    #[test]
    fn test_every_row_lists_every_bucket() {
        for row in MINIMUM_BUDGETS {
            for duration in DurationBucket::ALL {
                assert!(
                    row.amount_for(duration).is_some(),
                    "{} is missing {}",
                    row.keyword,
                    duration
                );
            }
        }
    }

    #[test]
    fn test_missing_bucket_falls_back_to_default() {
        const PARTIAL: &[MinimumBudgetRow] = &[MinimumBudgetRow {
            keyword: "Ladakh",
            amounts: &[(OneWeek, dec!(30000))],
        }];

        let (amount, row) = lookup_in(PARTIAL, "Ladakh", OneWeek);
        assert_eq!(amount, dec!(30000));
        assert_eq!(row.map(|r| r.keyword), Some("Ladakh"));

        // Keyword matches but the bucket is not listed.
        let (amount, row) = lookup_in(PARTIAL, "Ladakh", OneMonth);
        assert_eq!(amount, dec!(48000));
        assert_eq!(amount, default_minimum_budget(OneMonth));
        assert_eq!(row.map(|r| r.keyword), Some("Ladakh"));
    }

    #[test]
    fn test_quote_reports_matched_keyword() {
        let quote = quote_minimum_budget("Trip to kerala backwaters", ThreeToFiveDays);
        assert_eq!(quote.minimum_budget, dec!(15000));
        assert_eq!(quote.matched_keyword.as_deref(), Some("Kerala"));

        let quote = quote_minimum_budget("Tokyo", ThreeToFiveDays);
        assert_eq!(quote.minimum_budget, dec!(9000));
        assert_eq!(quote.matched_keyword, None);
    }

    #[test]
    fn test_gate_accepts_budget_equal_to_minimum() {
        let request = BudgetRequest::new(dec!(12000), "Goa", OneWeek).unwrap();
        assert_eq!(ensure_minimum_budget(&request).unwrap(), dec!(12000));
    }

    #[test]
    fn test_gate_rejects_budget_below_minimum() {
        let request = BudgetRequest::new(dec!(2000), "Goa", OneWeek).unwrap();
        match ensure_minimum_budget(&request) {
            Err(Error::Budget(BudgetError::TooLow {
                requested_amount,
                minimum_amount,
                destination,
                duration,
            })) => {
                assert_eq!(requested_amount, dec!(2000));
                assert_eq!(minimum_amount, dec!(12000));
                assert_eq!(destination, "Goa");
                assert_eq!(duration, OneWeek);
            }
            other => panic!("expected TooLow, got {:?}", other),
        }
    }
}
