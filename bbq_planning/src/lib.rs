#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Scheduling helpers built on top of a `bbq_core` prediction: a
//! backward planner from a target dinner time, and a post-cook hold/rest
//! phase calculator.
//!
//! Kept separate from `bbq_core` because both operations reason about
//! wall-clock time (`chrono`) or post-cook resting, neither of which the
//! core's minute-elapsed simulation touches.

pub mod backward_planner;
pub mod hold_phase;

pub use backward_planner::{compute_backward_plan, compute_backward_plan_with_defaults, BackwardPlan};
pub use hold_phase::{calculate_hold_phase, calculate_hold_phase_with_defaults, HoldPhaseResult};

pub(crate) fn round_to_tenth(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    (x * 10.0).round() / 10.0
}
