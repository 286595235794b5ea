#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Hardware-agnostic BBQ meat-temperature prediction engine.
//!
//! This crate provides the physics-based Monte Carlo simulator, the cook
//! state machine, the stall model, and the trust/confidence evaluator.
//! It owns no I/O: weather and equipment data are supplied by the host
//! through the `bbq_traits::WeatherProvider`/`EquipmentCatalog` seams,
//! and probe readings are pushed in by the host one at a time.
//!
//! ## Architecture
//!
//! - **Kernel** (`kernel` module): single-iteration finite-difference
//!   heat diffusion with coupled evaporative cooling.
//! - **Monte Carlo driver** (`montecarlo` module): samples stochastic
//!   inputs and aggregates many kernel runs into P10/P50/P90.
//! - **Stall model** (`stall` module): the stall probability curve and
//!   the slope-based override used by the state machine.
//! - **State machine** (`state_machine` module): advances a session
//!   through the nine-state cook lifecycle, one reading at a time.
//! - **Trust evaluator** (`trust` module): anomaly detection that can
//!   freeze reported confidence independent of the Monte Carlo spread.
//! - **Builder** (`builder` module): type-state `CookSessionBuilder`.

pub mod altitude;
pub mod builder;
pub mod catalog;
pub mod error;
pub mod kernel;
pub mod mocks;
pub mod montecarlo;
pub mod result;
pub mod session;
pub mod stall;
pub mod state_machine;
pub mod trust;
pub mod types;
pub mod util;

pub use builder::CookSessionBuilder;
pub use error::{BbqError, BuildError, Report, Result};
pub use montecarlo::predict;
pub use result::{PredictionOutcome, PredictionResult};
pub use session::{CookSession, ProbeReading, StallState};
pub use stall::stall_probability;
pub use state_machine::{advance_state, finish};
pub use trust::{evaluate_trust, TrustEvaluator};
pub use types::{ConfidenceTier, Cut, CookState, Equipment, Wrap};
