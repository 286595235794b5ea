//! Hold/rest phase calculator using Newton's Law of Cooling.
//!
//! After pulling meat off the smoker, its temperature continues to rise
//! briefly (carryover cooking) before decaying toward ambient. This
//! estimates the carryover peak, the time to reach serving temperature,
//! and a recommended rest duration.

/// Carryover rise after pulling off the smoker (°F).
pub const CARRYOVER_RISE_F: f64 = 7.0;
/// Newton's Law of Cooling decay constant (1/min) for wrapped meat resting
/// in an insulated cooler.
pub const COOLING_CONSTANT: f64 = 0.005;
/// Ambient temperature during rest in an insulated cooler (°F).
pub const REST_AMBIENT_F: f64 = 150.0;
/// Floor on the recommended rest duration (minutes).
pub const MIN_REST_MINUTES: f64 = 30.0;
/// Ceiling on the recommended rest duration (minutes).
pub const MAX_REST_MINUTES: f64 = 120.0;
/// Default serving temperature target (°F).
pub const SERVING_TEMP_F: f64 = 165.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoldPhaseResult {
    pub carryover_peak_f: f64,
    pub time_to_serving_temp_minutes: f64,
    pub recommended_rest_minutes: f64,
}

/// Calculate rest-phase behavior using `T(t) = T_ambient + (T_peak -
/// T_ambient) * exp(-k * t)`, solved for `t` at `serving_temp_f`.
pub fn calculate_hold_phase(
    pull_temp_f: f64,
    ambient_temp_f: f64,
    serving_temp_f: f64,
    is_wrapped: bool,
) -> HoldPhaseResult {
    let peak = pull_temp_f + CARRYOVER_RISE_F;

    let k = if is_wrapped {
        COOLING_CONSTANT
    } else {
        COOLING_CONSTANT * 2.0
    };

    let time_to_serving = if peak <= serving_temp_f {
        0.0
    } else if serving_temp_f <= ambient_temp_f {
        f64::INFINITY
    } else {
        let ratio = (serving_temp_f - ambient_temp_f) / (peak - ambient_temp_f);
        if ratio <= 0.0 || ratio >= 1.0 {
            0.0
        } else {
            -ratio.ln() / k
        }
    };

    let recommended_rest = time_to_serving.min(MAX_REST_MINUTES).max(MIN_REST_MINUTES);

    HoldPhaseResult {
        carryover_peak_f: crate::round_to_tenth(peak),
        time_to_serving_temp_minutes: crate::round_to_tenth(time_to_serving),
        recommended_rest_minutes: crate::round_to_tenth(recommended_rest),
    }
}

/// `calculate_hold_phase` with the default ambient and serving
/// temperatures, wrapped.
pub fn calculate_hold_phase_with_defaults(pull_temp_f: f64) -> HoldPhaseResult {
    calculate_hold_phase(pull_temp_f, REST_AMBIENT_F, SERVING_TEMP_F, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_brisket_pulled_at_203_has_a_sane_rest() {
        let result = calculate_hold_phase_with_defaults(203.0);
        assert_eq!(result.carryover_peak_f, 210.0);
        assert!(result.recommended_rest_minutes >= MIN_REST_MINUTES);
        assert!(result.recommended_rest_minutes <= MAX_REST_MINUTES);
    }

    #[test]
    fn unwrapped_meat_cools_faster_so_rest_is_shorter_or_equal() {
        let wrapped = calculate_hold_phase(203.0, REST_AMBIENT_F, SERVING_TEMP_F, true);
        let unwrapped = calculate_hold_phase(203.0, REST_AMBIENT_F, SERVING_TEMP_F, false);
        assert!(unwrapped.time_to_serving_temp_minutes <= wrapped.time_to_serving_temp_minutes);
    }

    #[test]
    fn peak_already_at_or_below_serving_temp_needs_no_rest_time() {
        let result = calculate_hold_phase(150.0, REST_AMBIENT_F, 165.0, true);
        assert_eq!(result.time_to_serving_temp_minutes, 0.0);
        assert_eq!(result.recommended_rest_minutes, MIN_REST_MINUTES);
    }

    #[test]
    fn serving_temp_at_or_below_ambient_never_converges() {
        let result = calculate_hold_phase(203.0, 150.0, 140.0, true);
        assert!(result.time_to_serving_temp_minutes.is_infinite());
        assert_eq!(result.recommended_rest_minutes, MAX_REST_MINUTES);
    }

    #[test]
    fn recommended_rest_is_clamped_to_the_documented_window() {
        // A huge carryover peak with a tiny ambient gap drives time_to_serving
        // far past the 120-minute ceiling.
        let result = calculate_hold_phase(400.0, 164.0, 165.0, true);
        assert_eq!(result.recommended_rest_minutes, MAX_REST_MINUTES);
    }
}
