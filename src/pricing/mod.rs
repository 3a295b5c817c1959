mod catalog;
mod estimator;
mod provider;

pub(crate) use catalog::PricingCatalog;
pub(crate) use estimator::{InferenceRun, compare_costs, format_cost_comparison, format_usd};
