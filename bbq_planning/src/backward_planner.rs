//! Backward planner: dinner time → fire-start time.
//!
//! Given a target dinner time, works backward from the P90 (conservative)
//! cook estimate to determine when to start the fire and put the meat on.

use chrono::{DateTime, TimeDelta, Utc};

use bbq_core::PredictionResult;

pub const DEFAULT_PREHEAT_MINUTES: f64 = 30.0;
pub const DEFAULT_REST_MINUTES: f64 = 30.0;

/// Milestone times for a cook ending at `dinner_time`.
///
/// Timeline: `fire_start_time` → preheat → `meat_on_time` → cook (P90) →
/// rest → `dinner_time`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackwardPlan {
    pub dinner_time: DateTime<Utc>,
    pub estimated_cook_minutes_p90: f64,
    pub rest_minutes: f64,
    pub fire_start_time: DateTime<Utc>,
    pub meat_on_time: DateTime<Utc>,
    pub preheat_minutes: f64,
}

/// Compute a backward plan from a dinner time using the P90 estimate.
pub fn compute_backward_plan(
    dinner_time: DateTime<Utc>,
    prediction: &PredictionResult,
    preheat_minutes: f64,
    rest_minutes: f64,
) -> BackwardPlan {
    let cook_minutes_p90 = prediction.p90_minutes;

    let total_before_dinner = cook_minutes_p90 + rest_minutes;
    let meat_on_time = dinner_time - minutes(total_before_dinner);
    let fire_start_time = meat_on_time - minutes(preheat_minutes);

    BackwardPlan {
        dinner_time,
        estimated_cook_minutes_p90: crate::round_to_tenth(cook_minutes_p90),
        rest_minutes,
        fire_start_time,
        meat_on_time,
        preheat_minutes,
    }
}

/// `compute_backward_plan` with the default 30-minute preheat and rest
/// windows.
pub fn compute_backward_plan_with_defaults(
    dinner_time: DateTime<Utc>,
    prediction: &PredictionResult,
) -> BackwardPlan {
    compute_backward_plan(
        dinner_time,
        prediction,
        DEFAULT_PREHEAT_MINUTES,
        DEFAULT_REST_MINUTES,
    )
}

fn minutes(m: f64) -> TimeDelta {
    TimeDelta::milliseconds((m * 60_000.0).round() as i64)
}
