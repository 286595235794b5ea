//! Subcommand implementations: assemble a `CookSession` from CLI flags,
//! run the requested operation, and print the result.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use bbq_config::Config;
use bbq_core::{predict, CookSessionBuilder, PredictionOutcome, PredictionResult, ProbeReading};
use chrono::{DateTime, Utc};
use eyre::{Context, Result};
use serde_json::json;

use crate::cli::SessionArgs;

fn build_session(args: &SessionArgs) -> Result<bbq_core::CookSession> {
    let builder = CookSessionBuilder::new()
        .cut(args.cut.into())
        .equipment(args.equipment.into())
        .target_f(args.target_f)
        .thickness_inches(args.thickness_inches)
        .smoker_setpoint_f(args.smoker_setpoint_f)
        .altitude_ft(args.altitude_ft)
        .wrap(args.wrap.into());
    let mut session = builder.build().wrap_err("build cook session")?;

    if let Some(probe_temp_f) = args.probe_temp_f {
        session.readings.push(ProbeReading {
            elapsed_minutes: args.elapsed_minutes,
            probe_temp_f,
            smoker_temp_f: None,
        });
    }
    Ok(session)
}

pub fn run_predict(
    args: &SessionArgs,
    cfg: &Config,
    cancel: Arc<AtomicBool>,
    json: bool,
) -> Result<()> {
    let session = build_session(args)?;
    let n_iterations = args.n_iterations.unwrap_or(cfg.monte_carlo.n_iterations);
    let seed = args.seed.or(cfg.monte_carlo.seed);

    tracing::info!(n_iterations, ?seed, "starting Monte Carlo prediction");
    let outcome = predict(
        &session,
        n_iterations,
        seed,
        Some(cfg as &dyn bbq_traits::EquipmentCatalog),
        cancel.as_ref(),
    );

    match outcome {
        PredictionOutcome::Completed(result) => print_prediction(&result, json),
        PredictionOutcome::Cancelled => {
            tracing::warn!("prediction cancelled by user");
            if json {
                println!("{}", json!({ "cancelled": true }));
            } else {
                println!("prediction cancelled");
            }
        }
    }
    Ok(())
}

pub fn run_plan(
    args: &SessionArgs,
    dinner_time: &str,
    preheat_minutes: f64,
    rest_minutes: f64,
    cfg: &Config,
    cancel: Arc<AtomicBool>,
    json: bool,
) -> Result<()> {
    let dinner_time: DateTime<Utc> = dinner_time
        .parse()
        .wrap_err("parse --dinner-time as RFC 3339")?;

    let session = build_session(args)?;
    let n_iterations = args.n_iterations.unwrap_or(cfg.monte_carlo.n_iterations);
    let seed = args.seed.or(cfg.monte_carlo.seed);

    let outcome = predict(
        &session,
        n_iterations,
        seed,
        Some(cfg as &dyn bbq_traits::EquipmentCatalog),
        cancel.as_ref(),
    );
    let PredictionOutcome::Completed(result) = outcome else {
        println!("prediction cancelled; no plan computed");
        return Ok(());
    };

    let plan = bbq_planning::compute_backward_plan(dinner_time, &result, preheat_minutes, rest_minutes);

    if json {
        println!(
            "{}",
            json!({
                "dinner_time": plan.dinner_time.to_rfc3339(),
                "fire_start_time": plan.fire_start_time.to_rfc3339(),
                "meat_on_time": plan.meat_on_time.to_rfc3339(),
                "estimated_cook_minutes_p90": plan.estimated_cook_minutes_p90,
                "preheat_minutes": plan.preheat_minutes,
                "rest_minutes": plan.rest_minutes,
            })
        );
    } else {
        println!("fire start:   {}", plan.fire_start_time.to_rfc3339());
        println!("meat on:      {}", plan.meat_on_time.to_rfc3339());
        println!("dinner:       {}", plan.dinner_time.to_rfc3339());
        println!(
            "cook estimate (P90): {:.1} minutes",
            plan.estimated_cook_minutes_p90
        );
    }
    Ok(())
}

pub fn run_hold(
    pull_temp_f: f64,
    ambient_temp_f: f64,
    serving_temp_f: f64,
    is_wrapped: bool,
    json: bool,
) -> Result<()> {
    let result = bbq_planning::calculate_hold_phase(
        pull_temp_f,
        ambient_temp_f,
        serving_temp_f,
        is_wrapped,
    );

    if json {
        println!(
            "{}",
            json!({
                "carryover_peak_f": result.carryover_peak_f,
                "time_to_serving_temp_minutes": result.time_to_serving_temp_minutes,
                "recommended_rest_minutes": result.recommended_rest_minutes,
            })
        );
    } else {
        println!("carryover peak:   {:.1} °F", result.carryover_peak_f);
        println!(
            "time to serving: {:.1} minutes",
            result.time_to_serving_temp_minutes
        );
        println!(
            "recommended rest: {:.1} minutes",
            result.recommended_rest_minutes
        );
    }
    Ok(())
}

fn print_prediction(result: &PredictionResult, json: bool) {
    if json {
        println!(
            "{}",
            json!({
                "p10_minutes": result.p10_minutes,
                "p50_minutes": result.p50_minutes,
                "p90_minutes": result.p90_minutes,
                "confidence": format!("{:?}", result.confidence),
                "current_state": format!("{:?}", result.current_state),
                "stall_probability": result.stall_probability,
            })
        );
    } else {
        println!("P10: {:.1} min", result.p10_minutes);
        println!("P50: {:.1} min", result.p50_minutes);
        println!("P90: {:.1} min", result.p90_minutes);
        println!("confidence: {:?}", result.confidence);
        println!("stall probability: {:.3}", result.stall_probability);
    }
}
