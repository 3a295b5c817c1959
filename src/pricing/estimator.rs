//! Cost comparison between a local inference run and reference cloud pricing.
//!
//! Local runs cost nothing; the point of the demo is showing what the same
//! token volumes would have been billed at on commercial APIs.

use super::catalog::PricingCatalog;

/// One measured streaming invocation. Transient: built right after the final
/// chunk arrives, formatted once, then dropped.
///
/// Negative values are a caller bug; the constructor clamps them to zero
/// rather than propagating nonsense into the display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct InferenceRun {
    pub(crate) elapsed_seconds: f64,
    pub(crate) input_tokens: i64,
    pub(crate) output_tokens: i64,
}

impl InferenceRun {
    pub(crate) fn new(elapsed_seconds: f64, input_tokens: i64, output_tokens: i64) -> Self {
        Self {
            elapsed_seconds: elapsed_seconds.max(0.0),
            input_tokens: input_tokens.max(0),
            output_tokens: output_tokens.max(0),
        }
    }

    /// Generation throughput, or `None` for an instantaneous/empty run.
    pub(crate) fn tokens_per_second(&self) -> Option<f64> {
        if self.elapsed_seconds > 0.0 {
            Some(self.output_tokens as f64 / self.elapsed_seconds)
        } else {
            None
        }
    }
}

/// Computed cost of one run on one schedule.
#[derive(Debug, Clone)]
pub(crate) struct ScheduleCost {
    pub(crate) name: &'static str,
    pub(crate) cost: f64,
}

/// Read-only comparison result: $0.00 locally vs. each catalog schedule,
/// in catalog order.
#[derive(Debug, Clone)]
pub(crate) struct CostComparison {
    pub(crate) local_cost: f64,
    pub(crate) schedules: Vec<ScheduleCost>,
}

pub(crate) fn compare_costs(catalog: &PricingCatalog, run: &InferenceRun) -> CostComparison {
    let schedules = catalog
        .schedules()
        .iter()
        .map(|schedule| ScheduleCost {
            name: schedule.name,
            cost: (run.input_tokens as f64 / 1e6) * schedule.input_rate
                + (run.output_tokens as f64 / 1e6) * schedule.output_rate,
        })
        .collect();

    CostComparison {
        local_cost: 0.0,
        schedules,
    }
}

/// Format a USD amount. Precision rule, applied everywhere a cost is shown:
/// amounts of at least one cent use 2 decimal places; smaller non-zero
/// amounts use 4 so short runs don't all collapse to "$0.00"; exact zero is
/// "$0.00".
pub(crate) fn format_usd(amount: f64) -> String {
    if amount > 0.0 && amount < 0.01 {
        format!("${amount:.4}")
    } else {
        format!("${amount:.2}")
    }
}

/// Render the one-line comparison printed after every demo run, e.g.
/// `$0.00 locally (vs. ~$0.0025 on GPT-4o, ~$0.0007 on Claude Haiku 3.5)`.
///
/// Pure and infallible: zero tokens and zero elapsed time are ordinary
/// inputs, not errors.
pub(crate) fn format_cost_comparison(catalog: &PricingCatalog, run: &InferenceRun) -> String {
    let comparison = compare_costs(catalog, run);
    let cloud: Vec<String> = comparison
        .schedules
        .iter()
        .map(|s| format!("~{} on {}", format_usd(s.cost), s.name))
        .collect();
    format!(
        "{} locally (vs. {})",
        format_usd(comparison.local_cost),
        cloud.join(", ")
    )
}
