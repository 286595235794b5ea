//! The engine's one scalar output type.

use crate::types::{ConfidenceTier, CookState};

/// Output of a single Monte Carlo `predict` call.
///
/// Invariant: `p10_minutes <= p50_minutes <= p90_minutes`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub p10_minutes: f64,
    pub p50_minutes: f64,
    pub p90_minutes: f64,
    pub confidence: ConfidenceTier,
    pub current_state: CookState,
    pub stall_probability: f64,
    pub readings_count: usize,
}

/// Distinguishes a completed run from one a host cancelled mid-flight.
/// Cancellation is never folded into a `PredictionResult` — a cancelled
/// run has no meaningful percentiles to report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PredictionOutcome {
    Completed(PredictionResult),
    Cancelled,
}
