//! Stall probability curve and the slope-based override used by the
//! cook state machine to decide whether `pre_stall` should advance
//! into `stall`.

use crate::util::logistic;

pub const STALL_TEMP_LOW: f64 = 140.0;
pub const STALL_TEMP_HIGH: f64 = 185.0;
const SLOPE_THRESHOLD: f64 = 0.02;
const MIN_STALL_SAMPLES: usize = 10;

/// Probability of stall at a given probe temperature. Zero outside
/// [140, 185]; rises monotonically across the zone, crossing 0.5 at
/// 160 °F.
///
/// Two overlapping logistic formulas appear in the source this was
/// distilled from; the second (`logit = -4 + 0.2*(T-140)`) is the one
/// actually returned, so that is the curve implemented here.
pub fn stall_probability(temp_f: f64) -> f64 {
    if temp_f < STALL_TEMP_LOW || temp_f > STALL_TEMP_HIGH {
        return 0.0;
    }
    let logit = -4.0 + 0.2 * (temp_f - STALL_TEMP_LOW);
    logistic(logit)
}

/// Declare a stall override when the current temperature is in the
/// stall zone and the last 10 consecutive slope samples are each below
/// the stall-slope threshold.
pub fn detect_stall_override(slope_history: &[f64], current_temp_f: f64) -> bool {
    if !(STALL_TEMP_LOW..=STALL_TEMP_HIGH).contains(&current_temp_f) {
        return false;
    }
    if slope_history.len() < MIN_STALL_SAMPLES {
        return false;
    }
    slope_history[slope_history.len() - MIN_STALL_SAMPLES..]
        .iter()
        .all(|&s| s < SLOPE_THRESHOLD)
}

/// Slope between the last two readings, °F per minute.
#[inline]
pub fn slope(prev_temp_f: f64, last_temp_f: f64, dt_minutes: f64) -> f64 {
    (last_temp_f - prev_temp_f) / dt_minutes
}

/// Pairwise slopes over the last `window` readings, bounded in size.
pub fn slope_history(temps: &[f64], window: usize, dt_minutes: f64) -> Vec<f64> {
    if temps.len() < 2 {
        return Vec::new();
    }
    let start = temps.len().saturating_sub(window + 1);
    temps[start..]
        .windows(2)
        .map(|w| slope(w[0], w[1], dt_minutes))
        .collect()
}
