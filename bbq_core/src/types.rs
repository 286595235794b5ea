//! Closed enumerations that make up the data model's tagged fields.

/// A cut of meat, each with its own base thermal diffusivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cut {
    Brisket,
    PorkButt,
    PorkRibs,
    BeefRibs,
    ChickenWhole,
    TurkeyBreast,
    LegOfLamb,
}

/// User-applied wrap intervention, which reduces surface evaporation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Wrap {
    #[default]
    None,
    Foil,
    ButcherPaper,
    FoilBoat,
}

/// Smoker equipment, each with its own temperature-noise standard
/// deviation used by the Monte Carlo driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Equipment {
    Offset,
    Pellet,
    Kamado,
    Wsm,
    Custom,
}

/// Prediction confidence, ordered from most to least trustworthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfidenceTier {
    VeryLow,
    Low,
    Moderate,
    High,
}

/// Where in the cook the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CookState {
    Setup,
    Preheat,
    EarlyCook,
    PreStall,
    Stall,
    PostStall,
    ApproachingTarget,
    Rest,
    Done,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_tier_orders_low_to_high() {
        assert!(ConfidenceTier::VeryLow < ConfidenceTier::Low);
        assert!(ConfidenceTier::Low < ConfidenceTier::Moderate);
        assert!(ConfidenceTier::Moderate < ConfidenceTier::High);
    }

    #[test]
    fn wrap_default_is_none() {
        assert_eq!(Wrap::default(), Wrap::None);
    }
}
