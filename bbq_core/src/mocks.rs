//! Test and helper mocks for bbq_core's external collaborator traits.

use bbq_traits::{EquipmentCatalog, WeatherProvider, WeatherSnapshot};

/// A weather provider that always reports no data, as if the host has no
/// location configured or the lookup failed.
pub struct NoWeather;

impl WeatherProvider for NoWeather {
    fn fetch_weather(&self, _lat: f64, _lon: f64) -> Option<WeatherSnapshot> {
        None
    }
}

/// A weather provider that always returns a fixed snapshot, for tests that
/// need deterministic wind/humidity sampling.
pub struct FixedWeather(pub WeatherSnapshot);

impl WeatherProvider for FixedWeather {
    fn fetch_weather(&self, _lat: f64, _lon: f64) -> Option<WeatherSnapshot> {
        Some(self.0)
    }
}

/// An equipment catalog that reports the same variance for every
/// equipment type, overriding `bbq_core`'s built-in defaults.
pub struct FixedVariance(pub f32);

impl EquipmentCatalog for FixedVariance {
    fn variance_for(&self, _equipment: &str) -> f32 {
        self.0
    }
}
