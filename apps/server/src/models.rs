use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tripwise_core::errors::ValidationError;
use tripwise_core::{BudgetPlan, BudgetRequest, DurationBucket};
use utoipa::{IntoParams, ToSchema};

/// Body of `POST /budget-optimizer/optimize`.
///
/// Fields are loosely typed so that missing or mistyped values produce the
/// optimizer's own validation messages instead of a deserializer error.
#[derive(Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeBudgetBody {
    #[schema(value_type = Option<f64>)]
    pub budget: Option<Value>,
    pub destination: Option<String>,
    #[schema(example = "3-5 days")]
    pub duration: Option<String>,
}

/// Message returned for a positive budget too large to represent.
pub const BUDGET_OUT_OF_RANGE_MESSAGE: &str = "Budget is too large";

#[derive(Clone, Copy)]
enum BudgetField {
    Missing,
    Amount(Decimal),
    OutOfRange,
}

impl OptimizeBudgetBody {
    fn budget_field(&self) -> BudgetField {
        match &self.budget {
            None | Some(Value::Null) => BudgetField::Missing,
            Some(Value::String(s)) if s.is_empty() => BudgetField::Missing,
            Some(Value::Number(n)) => match n.as_f64() {
                Some(f) if f > 0.0 => Decimal::from_f64(f)
                    .map(|d| BudgetField::Amount(d.normalize()))
                    .unwrap_or(BudgetField::OutOfRange),
                _ => BudgetField::Amount(Decimal::ZERO),
            },
            // Present but not a number: rejected after the presence checks
            Some(_) => BudgetField::Amount(Decimal::ZERO),
        }
    }

    pub fn into_request(self) -> tripwise_core::Result<BudgetRequest> {
        let field = self.budget_field();
        let budget = match field {
            BudgetField::Missing => None,
            BudgetField::Amount(amount) => Some(amount),
            BudgetField::OutOfRange => Some(Decimal::MAX),
        };
        let request = BudgetRequest::parse(
            budget,
            self.destination.as_deref(),
            self.duration.as_deref(),
        )?;
        // Presence and duration errors take precedence over the range check
        if let BudgetField::OutOfRange = field {
            return Err(ValidationError::InvalidRequest(
                BUDGET_OUT_OF_RANGE_MESSAGE.to_string(),
            )
            .into());
        }
        Ok(request)
    }
}

/// Success envelope shared by the optimizer endpoints.
#[derive(Serialize, Debug)]
pub struct ApiEnvelope<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

pub type BudgetPlanResponse = ApiEnvelope<BudgetPlan>;

#[derive(Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct MinimumBudgetQuery {
    pub destination: String,
    /// One of the duration labels, e.g. `1 week`
    pub duration: String,
}

impl MinimumBudgetQuery {
    pub fn duration_bucket(&self) -> tripwise_core::Result<DurationBucket> {
        self.duration.parse::<DurationBucket>().map_err(|e| {
            ValidationError::InvalidRequest(e).into()
        })
    }
}
