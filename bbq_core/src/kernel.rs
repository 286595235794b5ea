//! Single-iteration 1-D finite-difference heat solver with coupled
//! evaporative cooling.
//!
//! The slab is discretized into 51 uniform nodes (`N_NODES` intervals)
//! with a Robin (convective) boundary condition on both surfaces. The
//! evaporative term is applied inside the same per-step update as the
//! diffusion term — it is not a post-hoc delay added after the fact,
//! because wrap intervention, the altitude clamp, and the driving-delta
//! scaling all interact with the diffusion state at every step.

use crate::altitude::boiling_point_f;
use crate::catalog::wrap_reduction;
use crate::types::Wrap;
use crate::util::logistic;

const N_NODES: usize = 50;
const CENTER_IDX: usize = N_NODES / 2;
const BIOT_NUMBER: f64 = 0.3;
const BASE_EVAP_RATE: f64 = 1.0;
const STALL_LOW: f64 = 140.0;

/// Inputs to a single Monte Carlo kernel invocation. Everything
/// stochastic (diffusivity, smoker noise, wind/humidity factors) is
/// pre-sampled by the caller; the kernel itself performs no sampling.
pub struct KernelInputs<'a> {
    pub thickness_inches: f64,
    pub smoker_setpoint_f: f64,
    pub initial_temp_f: f64,
    pub target_f: f64,
    pub diffusivity_mm2s: f64,
    pub wrap: Wrap,
    pub wrap_event_temp_f: Option<f64>,
    pub altitude_ft: f64,
    pub smoker_noise: &'a [f64],
    pub wind_factor: f64,
    pub humidity_factor: f64,
    pub dt_minutes: f64,
    pub max_minutes: u32,
}

#[derive(Debug, Clone)]
pub struct KernelOutput {
    /// First simulated minute the center node reaches `target_f`, or
    /// `f64::INFINITY` if the target was never reached within
    /// `max_minutes`.
    pub finish_time_minutes: f64,
    /// Center-node temperature sampled at 1-minute cadence. May be
    /// discarded by the Monte Carlo driver once the finish time is
    /// extracted.
    pub center_history: Vec<f64>,
}

/// Run the kernel once. Contract violations (`thickness_inches <= 0` or
/// `diffusivity_mm2s <= 0`) are not recovered from — the caller has
/// breached the interface, and the kernel returns an infinite finish
/// time with an empty history rather than attempt a guess.
pub fn run(inputs: &KernelInputs<'_>) -> KernelOutput {
    if inputs.thickness_inches <= 0.0 || inputs.diffusivity_mm2s <= 0.0 {
        return KernelOutput {
            finish_time_minutes: f64::INFINITY,
            center_history: Vec::new(),
        };
    }

    let l_mm = inputs.thickness_inches * 25.4;
    let dx = l_mm / N_NODES as f64;
    let mut dt_s = inputs.dt_minutes * 60.0;
    let alpha = inputs.diffusivity_mm2s;

    let bi = BIOT_NUMBER * inputs.wind_factor;
    let mut fo = alpha * dt_s / (dx * dx);
    let fo_max = 0.45 / (1.0 + bi);
    if fo > fo_max {
        tracing::trace!(fo, fo_max, "shrinking dt to maintain Fourier stability");
        dt_s = fo_max * dx * dx / alpha;
        fo = fo_max;
    }

    let dt_min_actual = dt_s / 60.0;
    let n_steps = (inputs.max_minutes as f64 / dt_min_actual) as usize + 1;
    let bp = boiling_point_f(inputs.altitude_ft);

    let mut temps = vec![inputs.initial_temp_f; N_NODES + 1];
    let output_interval = (1.0 / dt_min_actual).max(1.0) as usize;
    let n_output = inputs.max_minutes as usize + 1;
    let mut center_history = Vec::with_capacity(n_output);

    let stall_high = 185.0f64.min(bp);
    let evap_base = BASE_EVAP_RATE * inputs.humidity_factor;
    let reduction_if_wrapped = wrap_reduction(inputs.wrap);

    let mut finish_time = f64::INFINITY;

    for step in 0..n_steps {
        let current_time_min = step as f64 * dt_min_actual;

        let mut smoker_eff = inputs.smoker_setpoint_f;
        let noise_idx = current_time_min as usize;
        if let Some(n) = inputs.smoker_noise.get(noise_idx) {
            smoker_eff += n;
        }

        let mut next = temps.clone();
        for i in 1..N_NODES {
            next[i] = temps[i] + fo * (temps[i - 1] - 2.0 * temps[i] + temps[i + 1]);
        }
        next[0] = temps[0] + fo * (temps[1] - temps[0]) + fo * bi * (smoker_eff - temps[0]);
        next[N_NODES] = temps[N_NODES]
            + fo * (temps[N_NODES - 1] - temps[N_NODES])
            + fo * bi * (smoker_eff - temps[N_NODES]);

        let surface_temp = (next[0] + next[N_NODES]) / 2.0;
        if (STALL_LOW..=stall_high).contains(&surface_temp) {
            let wrap_active = inputs.wrap != Wrap::None
                && inputs
                    .wrap_event_temp_f
                    .is_none_or(|wrap_temp| surface_temp >= wrap_temp);
            let reduction = if wrap_active { reduction_if_wrapped } else { 0.0 };
            let effective_evap = evap_base * (1.0 - reduction);

            let midpoint = (STALL_LOW + stall_high) / 2.0;
            let spread = (stall_high - STALL_LOW) / 6.0;
            let ramp = logistic((surface_temp - midpoint) / spread);

            let driving_delta = (smoker_eff - surface_temp).max(0.0);
            let driving_scale = (driving_delta / 100.0).min(1.0);

            let evap_cooling = effective_evap * ramp * dt_min_actual * driving_scale;

            for i in 0..=N_NODES {
                let dist_from_surface = i.min(N_NODES - i) as f64 / (N_NODES as f64 / 2.0);
                let surface_weight = 1.0 - 0.7 * dist_from_surface;
                next[i] -= evap_cooling * surface_weight;
            }
        }

        temps = next;
        for t in temps.iter_mut() {
            *t = t.min(bp);
        }

        let center_temp = temps[CENTER_IDX];
        if step % output_interval == 0 && center_history.len() < n_output {
            center_history.push(center_temp);
        }
        if center_temp >= inputs.target_f && finish_time.is_infinite() {
            finish_time = current_time_min;
        }
    }

    KernelOutput {
        finish_time_minutes: finish_time,
        center_history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline_inputs(noise: &[f64]) -> KernelInputs<'_> {
        KernelInputs {
            thickness_inches: 5.0,
            smoker_setpoint_f: 250.0,
            initial_temp_f: 40.0,
            target_f: 203.0,
            diffusivity_mm2s: 0.130,
            wrap: Wrap::None,
            wrap_event_temp_f: None,
            altitude_ft: 0.0,
            smoker_noise: noise,
            wind_factor: 1.0,
            humidity_factor: 1.0,
            dt_minutes: 1.0,
            max_minutes: 1800,
        }
    }

    #[test]
    fn contract_violation_returns_infinite_finish_time() {
        let noise = vec![0.0; 1800];
        let mut inputs = baseline_inputs(&noise);
        inputs.thickness_inches = 0.0;
        let out = run(&inputs);
        assert!(out.finish_time_minutes.is_infinite());
        assert!(out.center_history.is_empty());

        let mut inputs = baseline_inputs(&noise);
        inputs.diffusivity_mm2s = -0.1;
        let out = run(&inputs);
        assert!(out.finish_time_minutes.is_infinite());
    }

    #[test]
    fn brisket_baseline_finishes_within_a_plausible_window() {
        let noise = vec![0.0; 1800];
        let inputs = baseline_inputs(&noise);
        let out = run(&inputs);
        assert!(out.finish_time_minutes.is_finite());
        assert!(out.finish_time_minutes > 60.0 && out.finish_time_minutes < 1800.0);
    }

    #[test]
    fn higher_setpoint_finishes_sooner() {
        let noise = vec![0.0; 1800];
        let mut cool = baseline_inputs(&noise);
        cool.smoker_setpoint_f = 225.0;
        let mut hot = baseline_inputs(&noise);
        hot.smoker_setpoint_f = 275.0;

        let cool_out = run(&cool);
        let hot_out = run(&hot);
        assert!(hot_out.finish_time_minutes < cool_out.finish_time_minutes);
    }

    #[test]
    fn doubling_thickness_increases_finish_time() {
        let noise = vec![0.0; 1800];
        let thin = baseline_inputs(&noise);
        let mut thick = baseline_inputs(&noise);
        thick.thickness_inches = thin.thickness_inches * 2.0;

        let thin_out = run(&thin);
        let thick_out = run(&thick);
        assert!(thick_out.finish_time_minutes > thin_out.finish_time_minutes);
    }

    #[test]
    fn foil_wrap_does_not_increase_finish_time() {
        let noise = vec![0.0; 1800];
        let bare = baseline_inputs(&noise);
        let mut wrapped = baseline_inputs(&noise);
        wrapped.wrap = Wrap::Foil;

        let bare_out = run(&bare);
        let wrapped_out = run(&wrapped);
        assert!(wrapped_out.finish_time_minutes <= bare_out.finish_time_minutes);
    }

    #[test]
    fn center_history_is_sampled_at_one_minute_cadence() {
        let noise = vec![0.0; 200];
        let mut inputs = baseline_inputs(&noise);
        inputs.max_minutes = 120;
        let out = run(&inputs);
        assert_eq!(out.center_history.len(), 121);
    }

    #[test]
    fn every_node_is_clamped_to_boiling_point_at_altitude() {
        let noise = vec![200.0; 2000];
        let mut inputs = baseline_inputs(&noise);
        inputs.max_minutes = 300;
        inputs.smoker_setpoint_f = 600.0;
        let out = run(&inputs);
        let bp = boiling_point_f(inputs.altitude_ft);
        for &t in &out.center_history {
            assert!(t <= bp + 1e-9);
        }
    }
}
