//! The cook session view the core operates on, and the bits of mutable
//! state the core is allowed to touch: current state, stall state, and
//! the appended slope history. Everything else is constructed and
//! owned by the host.

use bbq_traits::WeatherSnapshot;

use crate::types::{Cut, Equipment, CookState, Wrap};

/// A single temperature reading from the meat probe.
///
/// Invariants: `32.0 <= probe_temp_f <= 212.0`; `elapsed_minutes` is
/// non-decreasing within a session. The core trusts the host to
/// maintain these; it does not re-validate every reading on ingest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeReading {
    pub elapsed_minutes: f64,
    pub probe_temp_f: f64,
    pub smoker_temp_f: Option<f64>,
}

/// Stall detection bookkeeping, mutated only by `advance_state`.
#[derive(Debug, Clone, Default)]
pub struct StallState {
    pub in_stall: bool,
    pub stall_start_temp_f: Option<f64>,
    pub stall_start_minutes: Option<f64>,
    pub stall_duration_minutes: f64,
    pub slope_history: Vec<f64>,
}

const SLOPE_HISTORY_WINDOW: usize = 15;

impl StallState {
    /// Append a slope sample, keeping the history bounded to the most
    /// recent `SLOPE_HISTORY_WINDOW` entries.
    pub(crate) fn push_slope(&mut self, slope: f64) {
        self.slope_history.push(slope);
        if self.slope_history.len() > SLOPE_HISTORY_WINDOW {
            self.slope_history.remove(0);
        }
    }
}

/// The cook session view consumed by `predict`, `advance_state`, and
/// `evaluate_trust`.
#[derive(Debug, Clone)]
pub struct CookSession {
    pub cut: Cut,
    pub thickness_inches: f64,
    pub equipment: Equipment,
    pub smoker_setpoint_f: f64,
    pub target_f: f64,
    pub altitude_ft: f64,
    pub wrap: Wrap,
    pub wrap_event_temp_f: Option<f64>,
    pub weather: Option<WeatherSnapshot>,
    pub readings: Vec<ProbeReading>,
    pub current_state: CookState,
    pub stall: StallState,
}

impl CookSession {
    pub fn last_reading(&self) -> Option<&ProbeReading> {
        self.readings.last()
    }

    /// Temperature history across all readings so far, used to compute
    /// the current-step slope.
    pub(crate) fn temps(&self) -> Vec<f64> {
        self.readings.iter().map(|r| r.probe_temp_f).collect()
    }
}
