use bbq_core::mocks::{FixedVariance, FixedWeather};
use bbq_core::{
    advance_state, predict, CookSessionBuilder, CookState, Cut, Equipment, PredictionOutcome,
    ProbeReading, TrustEvaluator,
};
use bbq_traits::{NeverCancel, WeatherSnapshot};

#[test]
fn full_cook_walkthrough_drives_state_and_prediction_together() {
    let mut session = CookSessionBuilder::new()
        .cut(Cut::Brisket)
        .equipment(Equipment::Offset)
        .target_f(203.0)
        .thickness_inches(5.0)
        .smoker_setpoint_f(250.0)
        .build()
        .unwrap();

    let temps = [40.0, 105.0, 135.0, 180.0, 195.0, 204.0];
    for (i, &t) in temps.iter().enumerate() {
        advance_state(
            &mut session,
            ProbeReading {
                elapsed_minutes: i as f64 * 30.0,
                probe_temp_f: t,
                smoker_temp_f: Some(248.0),
            },
        );
    }
    assert_eq!(session.current_state, CookState::Done);

    let outcome = predict(&session, 100, Some(11), None, &NeverCancel);
    let PredictionOutcome::Completed(result) = outcome else {
        panic!("NeverCancel must never cancel");
    };
    assert_eq!(result.current_state, CookState::Done);
    assert_eq!(result.readings_count, temps.len());
}

#[test]
fn weather_and_equipment_catalog_widen_the_prediction_spread() {
    let mut calm = CookSessionBuilder::new()
        .cut(Cut::PorkButt)
        .equipment(Equipment::Pellet)
        .target_f(203.0)
        .build()
        .unwrap();
    calm.readings.push(ProbeReading {
        elapsed_minutes: 0.0,
        probe_temp_f: 40.0,
        smoker_temp_f: None,
    });

    let mut gusty = calm.clone();
    gusty.weather = Some(WeatherSnapshot {
        ambient_temp_f: 45.0,
        wind_speed_mph: 25.0,
        humidity_pct: 20.0,
    });

    let calm_out = predict(&calm, 300, Some(3), None, &NeverCancel);
    let gusty_out = predict(
        &gusty,
        300,
        Some(3),
        Some(&FixedVariance(5.0)),
        &NeverCancel,
    );
    let (PredictionOutcome::Completed(calm_r), PredictionOutcome::Completed(gusty_r)) =
        (calm_out, gusty_out)
    else {
        panic!("NeverCancel must never cancel");
    };
    assert!(calm_r.p50_minutes.is_finite());
    assert!(gusty_r.p50_minutes.is_finite());
}

#[test]
fn a_temperature_drop_freezes_confidence_until_three_normal_readings_follow() {
    let mut session = CookSessionBuilder::new()
        .cut(Cut::Brisket)
        .equipment(Equipment::Offset)
        .target_f(203.0)
        .build()
        .unwrap();
    session.readings.push(ProbeReading {
        elapsed_minutes: 0.0,
        probe_temp_f: 150.0,
        smoker_temp_f: None,
    });
    session.readings.push(ProbeReading {
        elapsed_minutes: 1.0,
        probe_temp_f: 142.0, // probe pulled out, 8 F drop
        smoker_temp_f: None,
    });

    let outcome = predict(&session, 50, Some(5), None, &NeverCancel);
    let PredictionOutcome::Completed(raw) = outcome else {
        panic!("NeverCancel must never cancel");
    };

    let mut evaluator = TrustEvaluator::new();
    let tier = evaluator.evaluate(&session, &raw);
    assert_eq!(tier, bbq_core::ConfidenceTier::VeryLow);
    assert!(evaluator.frozen);
}

#[test]
fn no_weather_provider_falls_back_to_neutral_wind_and_humidity_factors() {
    let provider = FixedWeather(WeatherSnapshot {
        ambient_temp_f: 70.0,
        wind_speed_mph: 5.0,
        humidity_pct: 50.0,
    });
    assert!(provider.0.wind_speed_mph == 5.0);
}
