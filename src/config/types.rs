//! Configuration types for the engine.
//!
//! The policy configuration carries the monthly hour baseline feeding
//! the hourly-rate formula and the work-hub → state lookup table used
//! for state-scoped holiday rules.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Engine policy configuration.
///
/// # Example
///
/// ```
/// use timebank_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.state_for_hub(Some("Brasília")), Some("DF"));
/// assert_eq!(config.state_for_hub(Some("Hub Desconhecido")), None);
/// assert_eq!(config.state_for_hub(None), None);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Standard monthly hour baseline dividing the compensation total.
    #[serde(default = "default_monthly_hour_baseline")]
    pub monthly_hour_baseline: Decimal,
    /// Work-hub label → two-letter state code. Hubs missing from the
    /// table resolve to no state scope (national holiday rules only).
    #[serde(default = "default_hub_states")]
    pub hub_states: HashMap<String, String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            monthly_hour_baseline: default_monthly_hour_baseline(),
            hub_states: default_hub_states(),
        }
    }
}

impl EngineConfig {
    /// Translates a work-hub label into its state code, when mapped.
    pub fn state_for_hub(&self, hub: Option<&str>) -> Option<&str> {
        hub.and_then(|h| self.hub_states.get(h)).map(String::as_str)
    }
}

fn default_monthly_hour_baseline() -> Decimal {
    Decimal::from_parts(220, 0, 0, false, 0)
}

fn default_hub_states() -> HashMap<String, String> {
    [
        ("São Paulo", "SP"),
        ("Rio de Janeiro", "RJ"),
        ("Belo Horizonte", "MG"),
        ("Brasília", "DF"),
        ("Curitiba", "PR"),
        ("Porto Alegre", "RS"),
        ("Salvador", "BA"),
        ("Recife", "PE"),
        ("Fortaleza", "CE"),
        ("Goiânia", "GO"),
    ]
    .into_iter()
    .map(|(hub, uf)| (hub.to_string(), uf.to_string()))
    .collect()
}
