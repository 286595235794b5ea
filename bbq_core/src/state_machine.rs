//! Nine-state cook state machine, advanced by one reading at a time.
//!
//! A reading drives at most one transition per call — the machine is
//! never looped to a fixed point, so a single `advance_state` call can
//! leave the session in an intermediate state even if the reading
//! would, in principle, justify skipping further ahead.

use crate::session::{CookSession, ProbeReading};
use crate::stall::{detect_stall_override, slope};
use crate::types::CookState;

const EARLY_COOK_TEMP: f64 = 100.0;
const PRE_STALL_TEMP: f64 = 130.0;
const STALL_ENTRY_TEMP: f64 = 140.0;
const STALL_EXIT_TEMP: f64 = 175.0;
const APPROACHING_DELTA: f64 = 10.0;

/// Returns the states reachable from `from` in a single `advance_state`
/// call. Used only to validate the transition actually taken; it is not
/// consulted to pick the transition itself.
fn valid_targets(from: CookState) -> &'static [CookState] {
    use CookState::*;
    match from {
        Setup => &[Preheat],
        Preheat => &[EarlyCook],
        EarlyCook => &[PreStall],
        PreStall => &[Stall, PostStall],
        Stall => &[PostStall],
        PostStall => &[ApproachingTarget],
        ApproachingTarget => &[Rest, Done],
        Rest => &[Done],
        Done => &[],
    }
}

/// Evaluate and potentially advance the cook state machine based on a
/// newly-arrived reading. Mutates `session.current_state`,
/// `session.stall`, and appends to the slope history.
pub fn advance_state(session: &mut CookSession, reading: ProbeReading) -> CookState {
    let current = session.current_state;
    let temp = reading.probe_temp_f;
    let target = session.target_f;

    let mut new_state = current;

    match current {
        CookState::Setup => new_state = CookState::Preheat,
        CookState::Preheat => {
            if temp >= EARLY_COOK_TEMP {
                new_state = CookState::EarlyCook;
            }
        }
        CookState::EarlyCook => {
            if temp >= PRE_STALL_TEMP {
                new_state = CookState::PreStall;
            }
        }
        CookState::PreStall => {
            if temp >= STALL_ENTRY_TEMP {
                let slopes = &session.stall.slope_history;
                if detect_stall_override(slopes, temp) {
                    new_state = CookState::Stall;
                    session.stall.in_stall = true;
                    session.stall.stall_start_temp_f = Some(temp);
                    session.stall.stall_start_minutes = Some(reading.elapsed_minutes);
                } else if temp >= STALL_EXIT_TEMP {
                    new_state = CookState::PostStall;
                }
            }
        }
        CookState::Stall => {
            let start = session.stall.stall_start_minutes.unwrap_or(0.0);
            session.stall.stall_duration_minutes = reading.elapsed_minutes - start;
            if temp >= STALL_EXIT_TEMP {
                new_state = CookState::PostStall;
                session.stall.in_stall = false;
            }
        }
        CookState::PostStall => {
            if temp >= target - APPROACHING_DELTA {
                new_state = CookState::ApproachingTarget;
            }
        }
        CookState::ApproachingTarget => {
            if temp >= target {
                new_state = CookState::Done;
            }
        }
        CookState::Rest | CookState::Done => {}
    }

    if new_state != current {
        if valid_targets(current).contains(&new_state) {
            session.current_state = new_state;
        } else {
            new_state = current;
        }
    }

    session.readings.push(reading);
    let temps = session.temps();
    if temps.len() >= 2 {
        let n = temps.len();
        let s = slope(temps[n - 2], temps[n - 1], 1.0);
        session.stall.push_slope(s);
        tracing::debug!(state = ?session.current_state, slope = s, "cook state advanced");
    }

    session.current_state
}

/// Force the session into `done` unconditionally, e.g. when the host
/// ends the cook manually or moves a `rest`-phase session forward.
pub fn finish(session: &mut CookSession) -> CookState {
    session.current_state = CookState::Done;
    session.current_state
}
