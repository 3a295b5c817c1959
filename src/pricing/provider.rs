//! Fetches current per-token rates for the catalog models from LiteLLM's
//! published pricing table. Only the entries the catalog references are kept;
//! the rest of LiteLLM's model map is irrelevant to the demo.

use std::collections::HashMap;
use std::time::Duration;

use super::catalog::RawRates;

const LITELLM_PRICING_URL: &str =
    "https://raw.githubusercontent.com/BerriAI/litellm/main/model_prices_and_context_window.json";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const FETCH_RETRIES: usize = 3;
const RETRY_BACKOFF_MS: u64 = 250;

/// Pull out the two rate fields, tolerating whatever else an entry carries.
/// Non-numeric or missing fields become `None` and leave built-in rates alone.
fn rates_from_entry(entry: &serde_json::Value) -> RawRates {
    let rate = |field: &str| entry.get(field).and_then(|v| v.as_f64());
    RawRates {
        input_cost_per_token: rate("input_cost_per_token"),
        output_cost_per_token: rate("output_cost_per_token"),
    }
}

/// Fetch rates for `keys`, retrying transient failures with backoff. Returns
/// `None` when every attempt fails; the catalog then falls back to the cache
/// or its built-in rates.
pub(super) fn fetch_litellm_rates(keys: &[&str]) -> Option<HashMap<String, RawRates>> {
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(FETCH_TIMEOUT))
        .build()
        .into();

    for attempt in 1..=FETCH_RETRIES {
        if let Ok(response) = agent.get(LITELLM_PRICING_URL).call() {
            let mut body = response.into_body();
            if let Ok(table) =
                serde_json::from_reader::<_, HashMap<String, serde_json::Value>>(body.as_reader())
            {
                let rates = keys
                    .iter()
                    .filter_map(|key| {
                        table
                            .get(*key)
                            .map(|entry| (key.to_string(), rates_from_entry(entry)))
                    })
                    .collect();
                return Some(rates);
            }
        }

        if attempt < FETCH_RETRIES {
            std::thread::sleep(Duration::from_millis(RETRY_BACKOFF_MS * attempt as u64));
        }
    }

    None
}
