//! Workout variants and their metric formulas.
//!
//! Each variant computes three derived metrics from its raw sensor fields:
//! distance (km), mean speed (km/h) and spent calories (kcal). Distance and
//! mean speed have shared default formulas; calories are always
//! variant-specific.

use serde::{Deserialize, Serialize};

/// Metres per kilometre
pub const M_IN_KM: f64 = 1000.0;
/// Minutes per hour
pub const MIN_IN_HOUR: f64 = 60.0;

// ============================================================================
// Shared metric capability
// ============================================================================

/// Metric computations shared by every workout variant.
///
/// `distance_km` and `mean_speed_kmh` come with default formulas that
/// variants may override (swimming measures speed from pool laps, not
/// strokes). `calories_kcal` has no default: every variant must supply its
/// own formula.
pub trait Training {
    /// Raw action count from the sensor unit (steps or strokes)
    fn action(&self) -> u32;

    /// Workout duration in hours, always positive
    fn duration_h(&self) -> f64;

    /// Athlete body weight in kilograms
    fn weight_kg(&self) -> f64;

    /// Distance covered by a single action, in metres
    fn step_len_m(&self) -> f64;

    /// Bare variant name as shown in reports
    fn label(&self) -> &'static str;

    /// Total distance covered, in kilometres
    fn distance_km(&self) -> f64 {
        f64::from(self.action()) * self.step_len_m() / M_IN_KM
    }

    /// Mean speed over the whole duration, in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h()
    }

    /// Energy spent, in kilocalories
    fn calories_kcal(&self) -> f64;
}

// ============================================================================
// Variants
// ============================================================================

/// Running workout: actions are steps.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Running {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
}

impl Running {
    const STEP_LEN_M: f64 = 0.65;
    const SPEED_MULTIPLIER: f64 = 18.0;
    const SPEED_SHIFT: f64 = 1.79;
}

impl Training for Running {
    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn step_len_m(&self) -> f64 {
        Self::STEP_LEN_M
    }

    fn label(&self) -> &'static str {
        "Running"
    }

    fn calories_kcal(&self) -> f64 {
        (Self::SPEED_MULTIPLIER * self.mean_speed_kmh() + Self::SPEED_SHIFT)
            * self.weight_kg
            / M_IN_KM
            * (self.duration_h * MIN_IN_HOUR)
    }
}

/// Sports walking workout: actions are steps, height feeds the calorie model.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SportsWalking {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl SportsWalking {
    const STEP_LEN_M: f64 = 0.65;
    const WEIGHT_MULTIPLIER: f64 = 0.035;
    const WEIGHT_SHIFT: f64 = 0.029;
    const KMH_IN_MSEC: f64 = 0.278;
    const CM_IN_M: f64 = 100.0;
}

impl Training for SportsWalking {
    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn step_len_m(&self) -> f64 {
        Self::STEP_LEN_M
    }

    fn label(&self) -> &'static str {
        "SportsWalking"
    }

    // Grouping kept exactly as published upstream: the WEIGHT_SHIFT factor
    // scales only the squared-speed term, not the whole sum.
    fn calories_kcal(&self) -> f64 {
        let speed_msec = self.mean_speed_kmh() * Self::KMH_IN_MSEC;
        let height_m = self.height_cm / Self::CM_IN_M;

        (Self::WEIGHT_MULTIPLIER * self.weight_kg
            + speed_msec.powi(2) / height_m * Self::WEIGHT_SHIFT * self.weight_kg)
            * (self.duration_h * MIN_IN_HOUR)
    }
}

/// Swimming workout: actions are strokes, speed comes from pool laps.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Swimming {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
    pub pool_length_m: f64,
    pub lap_count: u32,
}

impl Swimming {
    const STROKE_LEN_M: f64 = 1.38;
    const SPEED_SHIFT: f64 = 1.1;
    const WEIGHT_MULTIPLIER: f64 = 2.0;
}

impl Training for Swimming {
    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn step_len_m(&self) -> f64 {
        Self::STROKE_LEN_M
    }

    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.lap_count) / M_IN_KM / self.duration_h
    }

    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + Self::SPEED_SHIFT)
            * Self::WEIGHT_MULTIPLIER
            * self.weight_kg
            * self.duration_h
    }
}

// ============================================================================
// Closed variant set
// ============================================================================

/// A workout instance built from one sensor reading.
///
/// The set of variants is closed; dispatch from type codes happens in
/// [`crate::dispatch::create_workout`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(t) => t,
            Workout::SportsWalking(t) => t,
            Workout::Swimming(t) => t,
        }
    }

    /// Bare variant name as shown in reports
    pub fn label(&self) -> &'static str {
        self.as_training().label()
    }

    /// Workout duration in hours
    pub fn duration_h(&self) -> f64 {
        self.as_training().duration_h()
    }

    /// Total distance covered, in kilometres
    pub fn distance_km(&self) -> f64 {
        self.as_training().distance_km()
    }

    /// Mean speed over the whole duration, in km/h
    pub fn mean_speed_kmh(&self) -> f64 {
        self.as_training().mean_speed_kmh()
    }

    /// Energy spent, in kilocalories
    pub fn calories_kcal(&self) -> f64 {
        self.as_training().calories_kcal()
    }
}
