#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Seam traits between the prediction engine and its host.
//!
//! - `WeatherProvider` and `EquipmentCatalog` are the two external
//!   collaborators the core consults but never owns.
//! - `CancelSignal` lets a host request cooperative cancellation of a
//!   running Monte Carlo driver between iterations.
//! - `clock` offers a `Clock` abstraction for timing instrumentation,
//!   kept separate from the simulation's own internal minute-stepping.
pub mod clock;

pub use clock::{Clock, MonotonicClock};

/// Ambient conditions at the smoker's location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherSnapshot {
    pub ambient_temp_f: f32,
    pub wind_speed_mph: f32,
    pub humidity_pct: f32,
}

/// Supplies ambient weather for a session, if available.
///
/// The core treats a missing or failed lookup identically: wind and
/// humidity factors default to 1.0.
pub trait WeatherProvider {
    fn fetch_weather(&self, lat: f64, lon: f64) -> Option<WeatherSnapshot>;
}

/// Maps an equipment identifier to its smoker-temperature standard
/// deviation (°F), used by the Monte Carlo driver to sample smoker noise.
pub trait EquipmentCatalog {
    fn variance_for(&self, equipment: &str) -> f32;
}

/// Cooperative cancellation checked by the Monte Carlo driver between
/// iterations. Implementations must be cheap to poll.
pub trait CancelSignal {
    fn is_cancelled(&self) -> bool;
}

/// A `CancelSignal` that never cancels; the default when the host does
/// not supply one.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverCancel;

impl CancelSignal for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl CancelSignal for std::sync::atomic::AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(std::sync::atomic::Ordering::Relaxed)
    }
}

impl<T: ?Sized + CancelSignal> CancelSignal for std::sync::Arc<T> {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}
