use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use tripwise_core::{BudgetOptimizerService, BudgetOptimizerServiceTrait};

use crate::config::Config;

pub struct AppState {
    pub budget_optimizer_service: Arc<dyn BudgetOptimizerServiceTrait>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let budget_optimizer_service: Arc<dyn BudgetOptimizerServiceTrait> =
        Arc::new(BudgetOptimizerService::new());
    tracing::info!(
        "Budget optimizer ready (request timeout {:?})",
        config.request_timeout
    );
    Arc::new(AppState {
        budget_optimizer_service,
    })
}
