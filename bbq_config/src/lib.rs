#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! TOML configuration schema for the prediction engine: Monte Carlo run
//! defaults, per-equipment smoker-noise overrides, and logging.
//!
//! `Config` is deserialized from TOML and then validated; nothing here
//! touches the filesystem directly, so hosts can load config from a
//! file, an environment variable, or a test fixture uniformly.
use std::collections::HashMap;

use bbq_traits::EquipmentCatalog;
use serde::Deserialize;

/// Default variance (°F) for an equipment label with no override and no
/// match in `default_equipment_variance`'s built-in table.
const FALLBACK_EQUIPMENT_VARIANCE_F: f32 = 12.0;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MonteCarloCfg {
    /// Iteration count for a full prediction run.
    pub n_iterations: u32,
    /// Iteration count for a fast first-pass estimate, e.g. rendered
    /// while the full run is still in flight.
    pub initial_iterations: u32,
    /// Fixed RNG seed; omit for nondeterministic sampling.
    pub seed: Option<u64>,
}

impl Default for MonteCarloCfg {
    fn default() -> Self {
        Self {
            n_iterations: 5_000,
            initial_iterations: 1_000,
            seed: None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,
    pub level: Option<String>,
    pub rotation: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub monte_carlo: MonteCarloCfg,
    pub logging: Logging,
    /// Per-equipment smoker-noise standard deviation (°F), overriding
    /// `bbq_core::catalog::default_equipment_variance` for the matching
    /// label. Keys match `Equipment`'s lowercase variant names.
    pub equipment_overrides: HashMap<String, f32>,
    /// Default altitude (ft) applied to sessions that don't specify one.
    pub default_altitude_ft: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            monte_carlo: MonteCarloCfg::default(),
            logging: Logging::default(),
            equipment_overrides: HashMap::new(),
            default_altitude_ft: 0.0,
        }
    }
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        if self.monte_carlo.n_iterations == 0 {
            eyre::bail!("monte_carlo.n_iterations must be >= 1");
        }
        if self.monte_carlo.n_iterations > 1_000_000 {
            eyre::bail!("monte_carlo.n_iterations is unreasonably large (>1,000,000)");
        }
        if self.monte_carlo.initial_iterations == 0 {
            eyre::bail!("monte_carlo.initial_iterations must be >= 1");
        }
        if self.monte_carlo.initial_iterations > self.monte_carlo.n_iterations {
            eyre::bail!("monte_carlo.initial_iterations must not exceed n_iterations");
        }
        if !(-2000.0..=30_000.0).contains(&self.default_altitude_ft) {
            eyre::bail!("default_altitude_ft is out of a plausible range");
        }
        for (label, variance) in &self.equipment_overrides {
            if *variance <= 0.0 {
                eyre::bail!("equipment_overrides[{label}] must be > 0");
            }
        }
        Ok(())
    }
}

impl EquipmentCatalog for Config {
    fn variance_for(&self, equipment: &str) -> f32 {
        self.equipment_overrides
            .get(equipment)
            .copied()
            .unwrap_or(FALLBACK_EQUIPMENT_VARIANCE_F)
    }
}
