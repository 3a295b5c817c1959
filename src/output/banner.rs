//! Console banners and footers for the demo flow.

use chrono::Local;

use crate::consts::RULE_WIDTH;
use crate::output::format::{NumberFormat, format_number, format_seconds};
use crate::pricing::{InferenceRun, PricingCatalog, format_cost_comparison};

pub(crate) fn heavy_rule() -> String {
    "═".repeat(RULE_WIDTH)
}

pub(crate) fn light_rule() -> String {
    "─".repeat(RULE_WIDTH)
}

fn hostname() -> String {
    whoami::fallible::hostname().unwrap_or_else(|_| "this machine".to_string())
}

/// Title block printed at the start of a demo run.
pub(crate) fn print_header(title: &str, model: &str, host: &str) {
    let now = Local::now().format("%B %d, %Y at %I:%M:%S %p");
    println!("\n{}", heavy_rule());
    println!("  {title}");
    println!("{}\n", heavy_rule());
    println!("Host:  {} ({host})", hostname());
    println!("Model: {model}");
    println!("Time:  {now}");
    println!("Data:  never leaves {}\n", hostname());
}

pub(crate) fn print_prompt(label: &str, prompt: &str) {
    println!("{}", light_rule());
    println!("{label}: {prompt}\n");
    println!("Response:\n");
}

/// Timing + cost footer printed after a streamed response.
pub(crate) fn print_run_footer(
    run: &InferenceRun,
    catalog: &PricingCatalog,
    number_format: NumberFormat,
) {
    let mut summary = format!(
        "{} · {} tokens",
        format_seconds(run.elapsed_seconds),
        format_number(run.output_tokens, number_format)
    );
    if let Some(tps) = run.tokens_per_second() {
        summary.push_str(&format!(" · {tps:.0} tok/s"));
    }

    println!("\n\n{}", light_rule());
    println!("{summary}");
    println!("{}", format_cost_comparison(catalog, run));
    println!("{}", light_rule());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_span_the_banner_width() {
        assert_eq!(heavy_rule().chars().count(), RULE_WIDTH);
        assert_eq!(light_rule().chars().count(), RULE_WIDTH);
    }
}
