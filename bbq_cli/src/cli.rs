//! CLI argument definitions and the clap-facing enums that mirror
//! `bbq_core`'s domain enums.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "bbqcast", version, about = "BBQ meat-temperature prediction CLI")]
pub struct Cli {
    /// Path to config TOML (equipment overrides, Monte Carlo defaults)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit structured JSON instead of pretty text
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CutArg {
    Brisket,
    PorkButt,
    PorkRibs,
    BeefRibs,
    ChickenWhole,
    TurkeyBreast,
    LegOfLamb,
}

impl From<CutArg> for bbq_core::Cut {
    fn from(c: CutArg) -> Self {
        match c {
            CutArg::Brisket => bbq_core::Cut::Brisket,
            CutArg::PorkButt => bbq_core::Cut::PorkButt,
            CutArg::PorkRibs => bbq_core::Cut::PorkRibs,
            CutArg::BeefRibs => bbq_core::Cut::BeefRibs,
            CutArg::ChickenWhole => bbq_core::Cut::ChickenWhole,
            CutArg::TurkeyBreast => bbq_core::Cut::TurkeyBreast,
            CutArg::LegOfLamb => bbq_core::Cut::LegOfLamb,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum EquipmentArg {
    Offset,
    Pellet,
    Kamado,
    Wsm,
    Custom,
}

impl From<EquipmentArg> for bbq_core::Equipment {
    fn from(e: EquipmentArg) -> Self {
        match e {
            EquipmentArg::Offset => bbq_core::Equipment::Offset,
            EquipmentArg::Pellet => bbq_core::Equipment::Pellet,
            EquipmentArg::Kamado => bbq_core::Equipment::Kamado,
            EquipmentArg::Wsm => bbq_core::Equipment::Wsm,
            EquipmentArg::Custom => bbq_core::Equipment::Custom,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default, ValueEnum)]
pub enum WrapArg {
    #[default]
    None,
    Foil,
    ButcherPaper,
    FoilBoat,
}

impl From<WrapArg> for bbq_core::Wrap {
    fn from(w: WrapArg) -> Self {
        match w {
            WrapArg::None => bbq_core::Wrap::None,
            WrapArg::Foil => bbq_core::Wrap::Foil,
            WrapArg::ButcherPaper => bbq_core::Wrap::ButcherPaper,
            WrapArg::FoilBoat => bbq_core::Wrap::FoilBoat,
        }
    }
}

/// Shared session-shaping flags, reused by both `predict` and `plan`.
#[derive(clap::Args, Debug)]
pub struct SessionArgs {
    #[arg(long, value_enum)]
    pub cut: CutArg,
    #[arg(long, value_enum)]
    pub equipment: EquipmentArg,
    #[arg(long)]
    pub target_f: f64,
    #[arg(long, default_value_t = 5.0)]
    pub thickness_inches: f64,
    #[arg(long, default_value_t = 250.0)]
    pub smoker_setpoint_f: f64,
    #[arg(long, default_value_t = 0.0)]
    pub altitude_ft: f64,
    #[arg(long, value_enum, default_value_t = WrapArg::None)]
    pub wrap: WrapArg,
    /// Most recent probe reading (°F); omit for a cold-start prediction
    #[arg(long)]
    pub probe_temp_f: Option<f64>,
    /// Elapsed minutes since the cook began, paired with `--probe-temp-f`
    #[arg(long, default_value_t = 0.0)]
    pub elapsed_minutes: f64,
    /// Monte Carlo iteration count; defaults to the config's `n_iterations`
    #[arg(long)]
    pub n_iterations: Option<u32>,
    /// Fixed RNG seed, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a Monte Carlo prediction for a single cook session
    Predict {
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Work backward from a target dinner time to a fire-start time
    Plan {
        #[command(flatten)]
        session: SessionArgs,
        /// Target dinner time, RFC 3339 (e.g. 2024-12-25T17:00:00Z)
        #[arg(long)]
        dinner_time: String,
        #[arg(long, default_value_t = bbq_planning::backward_planner::DEFAULT_PREHEAT_MINUTES)]
        preheat_minutes: f64,
        #[arg(long, default_value_t = bbq_planning::backward_planner::DEFAULT_REST_MINUTES)]
        rest_minutes: f64,
    },
    /// Estimate the post-cook hold/rest phase
    Hold {
        /// Temperature when the meat was pulled off the smoker (°F)
        #[arg(long)]
        pull_temp_f: f64,
        #[arg(long, default_value_t = bbq_planning::hold_phase::REST_AMBIENT_F)]
        ambient_temp_f: f64,
        #[arg(long, default_value_t = bbq_planning::hold_phase::SERVING_TEMP_F)]
        serving_temp_f: f64,
        /// The meat is not wrapped during rest (wrapped is the default)
        #[arg(long, action = ArgAction::SetTrue)]
        unwrapped: bool,
    },
}
