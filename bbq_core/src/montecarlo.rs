//! Monte Carlo driver: samples thermal diffusivity, smoker-temperature
//! noise, and weather factors, invokes the physics kernel `n_iterations`
//! times, and aggregates the results into P10/P50/P90 and a confidence
//! tier.
//!
//! Every stochastic input is pre-sampled before the per-iteration loop
//! so the hot path (the kernel invocation itself) touches no RNG state.

use bbq_traits::{CancelSignal, EquipmentCatalog};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, LogNormal, Normal};

use crate::catalog::{base_diffusivity, default_equipment_variance};
use crate::kernel::{self, KernelInputs};
use crate::result::{PredictionOutcome, PredictionResult};
use crate::session::CookSession;
use crate::stall::stall_probability;
use crate::trust::raw_confidence_tier;
use crate::util::round_to;

const SIMULATION_HORIZON_MINUTES: u32 = 1800;
const DIFFUSIVITY_CV: f64 = 0.08;

/// Run `n_iterations` perturbed kernel invocations and aggregate into a
/// prediction. Checks `cancel` between iterations; a cancellation mid-run
/// discards partial results rather than returning them.
pub fn predict(
    session: &CookSession,
    n_iterations: u32,
    seed: Option<u64>,
    equipment_catalog: Option<&dyn EquipmentCatalog>,
    cancel: &dyn CancelSignal,
) -> PredictionOutcome {
    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let current_temp = session
        .last_reading()
        .map(|r| r.probe_temp_f)
        .unwrap_or(40.0);
    let elapsed_minutes = session.last_reading().map(|r| r.elapsed_minutes).unwrap_or(0.0);
    let max_remaining = (SIMULATION_HORIZON_MINUTES as f64 - elapsed_minutes.floor())
        .max(60.0) as u32;

    let diffusivities = sample_diffusivities(session, n_iterations, &mut rng);
    let variance = equipment_catalog
        .map(|cat| cat.variance_for(equipment_label(session)) as f64)
        .unwrap_or_else(|| default_equipment_variance(session.equipment));
    let smoker_noise = sample_smoker_noise(n_iterations, max_remaining, variance, &mut rng);
    let (wind_factors, humidity_factors) = sample_weather_factors(session, n_iterations, &mut rng);

    let wrap_event_temp_f = session.wrap_event_temp_f;
    let mut finish_times = Vec::with_capacity(n_iterations as usize);

    for i in 0..n_iterations as usize {
        if cancel.is_cancelled() {
            return PredictionOutcome::Cancelled;
        }

        let inputs = KernelInputs {
            thickness_inches: session.thickness_inches,
            smoker_setpoint_f: session.smoker_setpoint_f,
            initial_temp_f: current_temp,
            target_f: session.target_f,
            diffusivity_mm2s: diffusivities[i],
            wrap: session.wrap,
            wrap_event_temp_f,
            altitude_ft: session.altitude_ft,
            smoker_noise: &smoker_noise[i],
            wind_factor: wind_factors[i],
            humidity_factor: humidity_factors[i],
            dt_minutes: 1.0,
            max_minutes: max_remaining,
        };
        let out = kernel::run(&inputs);
        finish_times.push(out.finish_time_minutes + elapsed_minutes);
    }

    let result = aggregate(
        &finish_times,
        n_iterations,
        max_remaining,
        elapsed_minutes,
        current_temp,
        session.readings.len(),
        session.current_state,
    );
    PredictionOutcome::Completed(result)
}

fn equipment_label(session: &CookSession) -> &'static str {
    use crate::types::Equipment::*;
    match session.equipment {
        Offset => "offset",
        Pellet => "pellet",
        Kamado => "kamado",
        Wsm => "wsm",
        Custom => "custom",
    }
}

fn sample_diffusivities(session: &CookSession, n: u32, rng: &mut StdRng) -> Vec<f64> {
    let mean = base_diffusivity(session.cut);
    let sigma = mean * DIFFUSIVITY_CV;
    let mu_ln = (mean * mean / (sigma * sigma + mean * mean).sqrt()).ln();
    let sigma_ln = (1.0 + (sigma / mean).powi(2)).ln().sqrt();
    let dist = LogNormal::new(mu_ln, sigma_ln).expect("valid log-normal parameters");
    (0..n).map(|_| dist.sample(rng)).collect()
}

fn sample_smoker_noise(n: u32, n_steps: u32, variance: f64, rng: &mut StdRng) -> Vec<Vec<f64>> {
    let dist = Normal::new(0.0, variance).expect("valid smoker-noise std dev");
    (0..n)
        .map(|_| (0..n_steps).map(|_| dist.sample(rng)).collect())
        .collect()
}

fn sample_weather_factors(session: &CookSession, n: u32, rng: &mut StdRng) -> (Vec<f64>, Vec<f64>) {
    match session.weather {
        Some(weather) => {
            let wind_mean = (1.0 + 0.02 * (weather.wind_speed_mph as f64 - 5.0)).max(0.5);
            let wind_dist = Normal::new(wind_mean, 0.1).expect("valid wind std dev");
            let wind = (0..n)
                .map(|_| wind_dist.sample(rng).clamp(0.3, 2.0))
                .collect();

            let humidity_mean = (1.0 + 0.005 * (weather.humidity_pct as f64 - 50.0)).max(0.5);
            let humidity_dist = Normal::new(humidity_mean, 0.05).expect("valid humidity std dev");
            let humidity = (0..n)
                .map(|_| humidity_dist.sample(rng).clamp(0.3, 2.0))
                .collect();

            (wind, humidity)
        }
        None => (vec![1.0; n as usize], vec![1.0; n as usize]),
    }
}

fn aggregate(
    finish_times: &[f64],
    n_iterations: u32,
    max_remaining: u32,
    elapsed_minutes: f64,
    current_temp: f64,
    readings_count: usize,
    current_state: crate::types::CookState,
) -> PredictionResult {
    let mut valid: Vec<f64> = finish_times.iter().copied().filter(|f| f.is_finite()).collect();
    valid.sort_by(|a, b| a.total_cmp(b));

    let (p10, p50, p90, confidence) = if valid.len() as f64 >= 0.5 * n_iterations as f64 {
        let p10 = crate::util::percentile_sorted(&valid, 10.0);
        let p50 = crate::util::percentile_sorted(&valid, 50.0);
        let p90 = crate::util::percentile_sorted(&valid, 90.0);
        let confidence = raw_confidence_tier(p10, p90, readings_count);
        (p10, p50, p90, confidence)
    } else if !valid.is_empty() {
        tracing::warn!(
            valid = valid.len(),
            n_iterations,
            "fewer than half of Monte Carlo iterations converged"
        );
        let p10 = crate::util::percentile_sorted(&valid, 10.0);
        let p50 = crate::util::percentile_sorted(&valid, 50.0);
        let p90 = max_remaining as f64 + elapsed_minutes;
        (p10, p50, p90, crate::types::ConfidenceTier::VeryLow)
    } else {
        tracing::warn!(n_iterations, "no Monte Carlo iterations converged");
        let pinned = max_remaining as f64 + elapsed_minutes;
        (pinned, pinned, pinned, crate::types::ConfidenceTier::VeryLow)
    };

    PredictionResult {
        p10_minutes: round_to(p10, 1),
        p50_minutes: round_to(p50, 1),
        p90_minutes: round_to(p90, 1),
        confidence,
        current_state,
        stall_probability: round_to(stall_probability(current_temp), 3),
        readings_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CookSessionBuilder;
    use crate::session::ProbeReading;
    use crate::types::{Cut, Equipment, Wrap};
    use bbq_traits::NeverCancel;

    fn baseline_session() -> CookSession {
        let mut session = CookSessionBuilder::new()
            .cut(Cut::Brisket)
            .equipment(Equipment::Offset)
            .target_f(203.0)
            .thickness_inches(5.0)
            .smoker_setpoint_f(250.0)
            .wrap(Wrap::None)
            .build()
            .unwrap();
        session.readings.push(ProbeReading {
            elapsed_minutes: 0.0,
            probe_temp_f: 40.0,
            smoker_temp_f: None,
        });
        session
    }

    #[test]
    fn scenario_brisket_baseline_percentiles_are_ordered_and_finite() {
        let session = baseline_session();
        let outcome = predict(&session, 200, Some(42), None, &NeverCancel);
        let PredictionOutcome::Completed(result) = outcome else {
            panic!("expected a completed prediction");
        };
        assert!(result.p10_minutes <= result.p50_minutes);
        assert!(result.p50_minutes <= result.p90_minutes);
        assert!(result.p50_minutes > 60.0 && result.p50_minutes < 1800.0);
        assert!(result.p90_minutes.is_finite());
    }

    #[test]
    fn scenario_foil_wrap_does_not_increase_median_finish() {
        let mut bare = baseline_session();
        bare.wrap = Wrap::None;
        let mut wrapped = baseline_session();
        wrapped.wrap = Wrap::Foil;

        let bare_out = predict(&bare, 200, Some(42), None, &NeverCancel);
        let wrapped_out = predict(&wrapped, 200, Some(42), None, &NeverCancel);
        let (PredictionOutcome::Completed(bare_r), PredictionOutcome::Completed(wrapped_r)) =
            (bare_out, wrapped_out)
        else {
            panic!("expected completed predictions");
        };
        assert!(wrapped_r.p50_minutes <= bare_r.p50_minutes);
    }

    #[test]
    fn same_seed_is_bit_identical() {
        let session = baseline_session();
        let a = predict(&session, 100, Some(7), None, &NeverCancel);
        let b = predict(&session, 100, Some(7), None, &NeverCancel);
        let (PredictionOutcome::Completed(a), PredictionOutcome::Completed(b)) = (a, b) else {
            panic!("expected completed predictions");
        };
        assert_eq!(a.p10_minutes, b.p10_minutes);
        assert_eq!(a.p50_minutes, b.p50_minutes);
        assert_eq!(a.p90_minutes, b.p90_minutes);
    }

    #[test]
    fn cancellation_short_circuits_before_completion() {
        use std::sync::atomic::{AtomicBool, Ordering};
        let session = baseline_session();
        let cancel = AtomicBool::new(true);
        let outcome = predict(&session, 50, Some(1), None, &cancel);
        assert_eq!(outcome, PredictionOutcome::Cancelled);
        cancel.store(false, Ordering::Relaxed);
    }

    #[test]
    fn stall_probability_reflects_current_reading() {
        let mut session = baseline_session();
        session.readings.last_mut().unwrap().probe_temp_f = 160.0;
        let outcome = predict(&session, 50, Some(1), None, &NeverCancel);
        let PredictionOutcome::Completed(result) = outcome else {
            panic!("expected a completed prediction");
        };
        assert!(result.stall_probability > 0.0);
    }
}
