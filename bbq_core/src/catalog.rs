//! Read-only catalog constants: the cut-to-diffusivity table, wrap
//! evaporation reduction factors, and the default equipment variance
//! table. These are consulted but never mutated by the kernel or the
//! Monte Carlo driver.

use crate::types::{Cut, Equipment, Wrap};

/// Base thermal diffusivity (mm²/s) per cut, calibrated so a 5" brisket
/// at 250 °F finishes in roughly 10-14 hours.
pub fn base_diffusivity(cut: Cut) -> f64 {
    match cut {
        Cut::Brisket => 0.130,
        Cut::PorkButt => 0.125,
        Cut::PorkRibs => 0.140,
        Cut::BeefRibs => 0.135,
        Cut::ChickenWhole => 0.145,
        Cut::TurkeyBreast => 0.140,
        Cut::LegOfLamb => 0.132,
    }
}

/// Fraction by which a wrap reduces surface evaporative cooling.
pub fn wrap_reduction(wrap: Wrap) -> f64 {
    match wrap {
        Wrap::None => 0.00,
        Wrap::Foil => 0.95,
        Wrap::ButcherPaper => 0.60,
        Wrap::FoilBoat => 0.45,
    }
}

/// Default smoker-temperature standard deviation (°F) per equipment
/// type, consulted when the host supplies no `EquipmentCatalog`.
pub fn default_equipment_variance(equipment: Equipment) -> f64 {
    match equipment {
        Equipment::Offset => 15.0,
        Equipment::Pellet => 5.0,
        Equipment::Kamado => 8.0,
        Equipment::Wsm => 10.0,
        Equipment::Custom => 12.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brisket_diffusivity_matches_catalog() {
        assert_eq!(base_diffusivity(Cut::Brisket), 0.130);
    }

    #[test]
    fn foil_reduces_evaporation_the_most() {
        let reductions = [
            wrap_reduction(Wrap::Foil),
            wrap_reduction(Wrap::ButcherPaper),
            wrap_reduction(Wrap::FoilBoat),
        ];
        assert!(reductions.iter().all(|&r| r <= wrap_reduction(Wrap::Foil)));
        assert_eq!(wrap_reduction(Wrap::None), 0.0);
    }

    #[test]
    fn custom_equipment_has_the_default_variance() {
        assert_eq!(default_equipment_variance(Equipment::Custom), 12.0);
    }
}
