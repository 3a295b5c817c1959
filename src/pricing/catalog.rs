use std::collections::HashMap;
use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime};

use serde::{Deserialize, Serialize};

use super::provider::fetch_litellm_rates;

/// One reference cloud pricing entry. Rates are USD per 1,000,000 tokens.
#[derive(Debug, Clone)]
pub(crate) struct PricingSchedule {
    pub(crate) name: &'static str,
    /// Key under which LiteLLM publishes this model's rates
    pub(crate) litellm_key: &'static str,
    pub(crate) input_rate: f64,
    pub(crate) output_rate: f64,
}

/// Published per-token rates for one catalog model, as LiteLLM reports them.
/// Also the on-disk cache format, keyed by `litellm_key`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub(crate) struct RawRates {
    #[serde(default)]
    pub(crate) input_cost_per_token: Option<f64>,
    #[serde(default)]
    pub(crate) output_cost_per_token: Option<f64>,
}

/// Fixed, ordered catalog of reference schedules. Built once at startup and
/// immutable afterwards; entry order is the display order.
#[derive(Debug, Clone)]
pub(crate) struct PricingCatalog {
    schedules: Vec<PricingSchedule>,
}

const PRICING_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

fn builtin_schedules() -> Vec<PricingSchedule> {
    vec![
        PricingSchedule {
            name: "GPT-4o",
            litellm_key: "gpt-4o",
            input_rate: 2.50,
            output_rate: 10.00,
        },
        PricingSchedule {
            name: "GPT-4o mini",
            litellm_key: "gpt-4o-mini",
            input_rate: 0.15,
            output_rate: 0.60,
        },
        PricingSchedule {
            name: "Claude Sonnet 4",
            litellm_key: "claude-sonnet-4-20250514",
            input_rate: 3.00,
            output_rate: 15.00,
        },
        PricingSchedule {
            name: "Claude Haiku 3.5",
            litellm_key: "claude-3-5-haiku-20241022",
            input_rate: 0.80,
            output_rate: 4.00,
        },
    ]
}

fn cache_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".cache").join("civicdemo").join("pricing.json"))
}

fn load_cached_rates() -> Option<HashMap<String, RawRates>> {
    let file = File::open(cache_path()?).ok()?;
    serde_json::from_reader(file).ok()
}

fn load_cached_rates_if_fresh() -> Option<(HashMap<String, RawRates>, Duration)> {
    let path = cache_path()?;
    let modified = std::fs::metadata(&path).ok()?.modified().ok()?;
    let age = SystemTime::now().duration_since(modified).ok()?;
    if age > PRICING_CACHE_TTL {
        return None;
    }
    let rates = serde_json::from_reader(File::open(&path).ok()?).ok()?;
    Some((rates, age))
}

fn save_cached_rates(rates: &HashMap<String, RawRates>) {
    let Some(path) = cache_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Ok(mut file) = File::create(&path) {
        let _ = serde_json::to_writer(&mut file, rates);
    }
}

impl Default for PricingCatalog {
    fn default() -> Self {
        Self {
            schedules: builtin_schedules(),
        }
    }
}

impl PricingCatalog {
    pub(crate) fn schedules(&self) -> &[PricingSchedule] {
        &self.schedules
    }

    /// Overlay published LiteLLM per-token rates onto the built-in catalog.
    /// The schedule set and order never change; entries missing from the
    /// published data keep their built-in rates.
    fn with_rates(rates: &HashMap<String, RawRates>) -> Self {
        let mut schedules = builtin_schedules();
        for schedule in &mut schedules {
            let Some(raw) = rates.get(schedule.litellm_key) else {
                continue;
            };
            if let Some(rate) = raw.input_cost_per_token
                && rate >= 0.0
            {
                schedule.input_rate = rate * 1e6;
            }
            if let Some(rate) = raw.output_cost_per_token
                && rate >= 0.0
            {
                schedule.output_rate = rate * 1e6;
            }
        }
        Self { schedules }
    }

    pub(crate) fn load(offline: bool) -> Self {
        Self::load_internal(offline, false)
    }

    pub(crate) fn load_quiet(offline: bool) -> Self {
        Self::load_internal(offline, true)
    }

    fn load_internal(offline: bool, quiet: bool) -> Self {
        let start = Instant::now();

        if offline {
            if let Some(rates) = load_cached_rates() {
                if !quiet {
                    eprintln!(
                        "Using cached pricing ({:.2}ms)",
                        start.elapsed().as_secs_f64() * 1000.0
                    );
                }
                return Self::with_rates(&rates);
            }
            return Self::default();
        }

        if let Some((rates, age)) = load_cached_rates_if_fresh() {
            if !quiet {
                eprintln!("Using cached pricing ({:.1}h old)", age.as_secs_f64() / 3600.0);
            }
            return Self::with_rates(&rates);
        }

        let keys: Vec<&str> = builtin_schedules().iter().map(|s| s.litellm_key).collect();
        if let Some(rates) = fetch_litellm_rates(&keys) {
            let catalog = Self::with_rates(&rates);
            save_cached_rates(&rates);
            if !quiet {
                eprintln!(
                    "Refreshed cloud pricing ({:.2}ms)",
                    start.elapsed().as_secs_f64() * 1000.0
                );
            }
            return catalog;
        }

        if let Some(rates) = load_cached_rates() {
            if !quiet {
                eprintln!("Pricing refresh failed, using stale cache");
            }
            return Self::with_rates(&rates);
        }

        Self::default()
    }
}
