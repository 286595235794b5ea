//! Per-session trust/confidence evaluator.
//!
//! Combines the Monte Carlo driver's raw confidence tier with anomaly
//! detection against the reading stream. An anomaly freezes confidence
//! at `very_low` until 3 consecutive normal readings release it.

use crate::result::PredictionResult;
use crate::session::CookSession;
use crate::types::ConfidenceTier;

const ANOMALY_DROP_F: f64 = -5.0;
const ANOMALY_JUMP_F: f64 = 20.0;
const ANOMALY_SMOKER_DELTA_F: f64 = 50.0;
const FREEZE_RELEASE_READINGS: u32 = 3;

#[derive(Debug, Clone, Default)]
pub struct TrustEvaluator {
    pub anomaly_count: u32,
    pub consecutive_normal: u32,
    pub frozen: bool,
}

impl TrustEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate the confidence tier to report for this reading, folding
    /// in anomaly-driven freezing. Mutates the evaluator's counters.
    pub fn evaluate(
        &mut self,
        session: &CookSession,
        raw_prediction: &PredictionResult,
    ) -> ConfidenceTier {
        if self.has_anomaly(session) {
            self.anomaly_count += 1;
            self.consecutive_normal = 0;
            self.frozen = true;
            tracing::warn!(anomaly_count = self.anomaly_count, "confidence frozen at very_low");
            return ConfidenceTier::VeryLow;
        }

        self.consecutive_normal += 1;
        if self.frozen && self.consecutive_normal >= FREEZE_RELEASE_READINGS {
            self.frozen = false;
            tracing::debug!("confidence freeze released");
        }

        if self.frozen {
            return ConfidenceTier::VeryLow;
        }

        raw_prediction.confidence
    }

    fn has_anomaly(&self, session: &CookSession) -> bool {
        let readings = &session.readings;
        if readings.len() < 2 {
            return false;
        }
        let last = readings[readings.len() - 1];
        let prev = readings[readings.len() - 2];
        let delta = last.probe_temp_f - prev.probe_temp_f;

        if delta < ANOMALY_DROP_F || delta > ANOMALY_JUMP_F {
            return true;
        }
        if let Some(smoker_f) = last.smoker_temp_f
            && (smoker_f - session.smoker_setpoint_f).abs() > ANOMALY_SMOKER_DELTA_F
        {
            return true;
        }
        false
    }
}

/// Free-function form of `TrustEvaluator::evaluate`, for hosts that keep
/// the evaluator separate from the call site that owns the session.
pub fn evaluate_trust(
    evaluator: &mut TrustEvaluator,
    session: &CookSession,
    raw_prediction: &PredictionResult,
) -> ConfidenceTier {
    evaluator.evaluate(session, raw_prediction)
}

/// Raw confidence tier from Monte Carlo spread and reading count alone,
/// before the trust evaluator's anomaly-driven freeze is applied.
pub fn raw_confidence_tier(p10: f64, p90: f64, readings_count: usize) -> ConfidenceTier {
    let spread = p90 - p10;
    let n = readings_count;
    if n >= 10 && spread < 60.0 {
        ConfidenceTier::High
    } else if n >= 5 && spread < 120.0 {
        ConfidenceTier::Moderate
    } else if n >= 2 && spread < 240.0 {
        ConfidenceTier::Low
    } else {
        ConfidenceTier::VeryLow
    }
}
