//! Type-state builder for `CookSession`.
//!
//! The builder enforces at compile time that cut, equipment, and target
//! temperature are provided before `build()` is available. `try_build()`
//! is always available for dynamic checks (e.g. when fields are filled
//! in from deserialized, possibly-incomplete host data).

use std::marker::PhantomData;

use bbq_traits::WeatherSnapshot;

use crate::error::{BuildError, Result};
use crate::session::{CookSession, StallState};
use crate::types::{Cut, CookState, Equipment, Wrap};

pub struct Missing;
pub struct Set;

#[derive(Default)]
pub struct CookSessionBuilder<C, E, T> {
    cut: Option<Cut>,
    thickness_inches: Option<f64>,
    equipment: Option<Equipment>,
    smoker_setpoint_f: Option<f64>,
    target_f: Option<f64>,
    altitude_ft: Option<f64>,
    wrap: Option<Wrap>,
    wrap_event_temp_f: Option<f64>,
    weather: Option<WeatherSnapshot>,
    _c: PhantomData<C>,
    _e: PhantomData<E>,
    _t: PhantomData<T>,
}

impl Default for CookSessionBuilder<Missing, Missing, Missing> {
    fn default() -> Self {
        Self {
            cut: None,
            thickness_inches: None,
            equipment: None,
            smoker_setpoint_f: None,
            target_f: None,
            altitude_ft: None,
            wrap: None,
            wrap_event_temp_f: None,
            weather: None,
            _c: PhantomData,
            _e: PhantomData,
            _t: PhantomData,
        }
    }
}

impl CookSessionBuilder<Missing, Missing, Missing> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C, E, T> CookSessionBuilder<C, E, T> {
    /// Fallible build available in any type-state; returns a typed
    /// `BuildError` describing the first missing or invalid field.
    pub fn try_build(self) -> Result<CookSession> {
        let cut = self.cut.ok_or(BuildError::MissingCut)?;
        let equipment = self.equipment.ok_or(BuildError::MissingEquipment)?;
        let target_f = self.target_f.ok_or(BuildError::MissingTarget)?;

        let thickness_inches = self.thickness_inches.unwrap_or(5.0);
        if thickness_inches <= 0.0 {
            return Err(BuildError::InvalidConfig("thickness_inches must be > 0").into());
        }
        if !(32.0..=600.0).contains(&target_f) {
            return Err(BuildError::InvalidConfig("target_f out of range").into());
        }

        Ok(CookSession {
            cut,
            thickness_inches,
            equipment,
            smoker_setpoint_f: self.smoker_setpoint_f.unwrap_or(250.0),
            target_f,
            altitude_ft: self.altitude_ft.unwrap_or(0.0),
            wrap: self.wrap.unwrap_or_default(),
            wrap_event_temp_f: self.wrap_event_temp_f,
            weather: self.weather,
            readings: Vec::new(),
            current_state: CookState::Setup,
            stall: StallState::default(),
        })
    }

    pub fn thickness_inches(mut self, v: f64) -> Self {
        self.thickness_inches = Some(v);
        self
    }

    pub fn smoker_setpoint_f(mut self, v: f64) -> Self {
        self.smoker_setpoint_f = Some(v);
        self
    }

    pub fn altitude_ft(mut self, v: f64) -> Self {
        self.altitude_ft = Some(v);
        self
    }

    pub fn wrap(mut self, wrap: Wrap) -> Self {
        self.wrap = Some(wrap);
        self
    }

    pub fn wrap_event_temp_f(mut self, v: f64) -> Self {
        self.wrap_event_temp_f = Some(v);
        self
    }

    pub fn weather(mut self, weather: WeatherSnapshot) -> Self {
        self.weather = Some(weather);
        self
    }
}

impl<E, T> CookSessionBuilder<Missing, E, T> {
    pub fn cut(self, cut: Cut) -> CookSessionBuilder<Set, E, T> {
        let Self {
            thickness_inches,
            equipment,
            smoker_setpoint_f,
            target_f,
            altitude_ft,
            wrap,
            wrap_event_temp_f,
            weather,
            ..
        } = self;
        CookSessionBuilder {
            cut: Some(cut),
            thickness_inches,
            equipment,
            smoker_setpoint_f,
            target_f,
            altitude_ft,
            wrap,
            wrap_event_temp_f,
            weather,
            _c: PhantomData,
            _e: PhantomData,
            _t: PhantomData,
        }
    }
}

impl<C, T> CookSessionBuilder<C, Missing, T> {
    pub fn equipment(self, equipment: Equipment) -> CookSessionBuilder<C, Set, T> {
        let Self {
            cut,
            thickness_inches,
            smoker_setpoint_f,
            target_f,
            altitude_ft,
            wrap,
            wrap_event_temp_f,
            weather,
            ..
        } = self;
        CookSessionBuilder {
            cut,
            thickness_inches,
            equipment: Some(equipment),
            smoker_setpoint_f,
            target_f,
            altitude_ft,
            wrap,
            wrap_event_temp_f,
            weather,
            _c: PhantomData,
            _e: PhantomData,
            _t: PhantomData,
        }
    }
}

impl<C, E> CookSessionBuilder<C, E, Missing> {
    pub fn target_f(self, target_f: f64) -> CookSessionBuilder<C, E, Set> {
        let Self {
            cut,
            thickness_inches,
            equipment,
            smoker_setpoint_f,
            altitude_ft,
            wrap,
            wrap_event_temp_f,
            weather,
            ..
        } = self;
        CookSessionBuilder {
            cut,
            thickness_inches,
            equipment,
            smoker_setpoint_f,
            target_f: Some(target_f),
            altitude_ft,
            wrap,
            wrap_event_temp_f,
            weather,
            _c: PhantomData,
            _e: PhantomData,
            _t: PhantomData,
        }
    }
}

impl CookSessionBuilder<Set, Set, Set> {
    /// Infallible build: cut, equipment, and target are guaranteed
    /// present by the type-state, so only the range checks in
    /// `try_build` can still fail.
    pub fn build(self) -> Result<CookSession> {
        self.try_build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn builder_happy_path() {
        let session = CookSessionBuilder::new()
            .cut(Cut::Brisket)
            .equipment(Equipment::Offset)
            .target_f(203.0)
            .thickness_inches(5.0)
            .smoker_setpoint_f(250.0)
            .build()
            .unwrap();
        assert_eq!(session.current_state, CookState::Setup);
        assert!(session.readings.is_empty());
    }

    #[test]
    fn try_build_reports_missing_target() {
        let err = CookSessionBuilder::new()
            .cut(Cut::Brisket)
            .equipment(Equipment::Offset)
            .try_build()
            .unwrap_err();
        assert!(err.to_string().contains("missing target"));
    }

    #[rstest]
    #[case(0.0, 203.0, "thickness_inches")]
    #[case(5.0, 10.0, "target_f")]
    #[case(5.0, 700.0, "target_f")]
    fn try_build_rejects_out_of_range_values(
        #[case] thickness_inches: f64,
        #[case] target_f: f64,
        #[case] expected_substring: &str,
    ) {
        let err = CookSessionBuilder::new()
            .cut(Cut::Brisket)
            .equipment(Equipment::Offset)
            .target_f(target_f)
            .thickness_inches(thickness_inches)
            .try_build()
            .unwrap_err();
        assert!(err.to_string().contains(expected_substring));
    }
}
