use serde::{Deserialize, Serialize};

/// Sodium target per pound used when the user doesn't pick one (about 1/2 tsp kosher salt).
pub const DEFAULT_TARGET_SODIUM_PER_LB_MG: f64 = 1000.0;

/// Sodium in 1/4 tsp of kosher salt. Fixed.
pub const KOSHER_SALT_SODIUM_PER_QUARTER_TSP_MG: f64 = 480.0;

/// Pinch threshold for the advisory, in teaspoons.
pub const PINCH_THRESHOLD_TSP: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaltInputs {
    pub weight_lbs: f64,
    pub rub_sodium_per_quarter_tsp: f64,
    pub rub_amount_tsp: f64,
    pub target_salt_per_lb_mg: f64,
}

impl SaltInputs {
    pub fn new(weight_lbs: f64, rub_sodium_per_quarter_tsp: f64, rub_amount_tsp: f64) -> Self {
        Self {
            weight_lbs,
            rub_sodium_per_quarter_tsp,
            rub_amount_tsp,
            target_salt_per_lb_mg: DEFAULT_TARGET_SODIUM_PER_LB_MG,
        }
    }

    pub fn with_target(mut self, target_salt_per_lb_mg: f64) -> Self {
        self.target_salt_per_lb_mg = target_salt_per_lb_mg;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaltResult {
    pub weight_lbs: f64,
    pub rub_amount_tsp: f64,
    pub target_total_sodium_mg: f64,
    pub sodium_from_rub_mg: f64,
    /// Never negative.
    pub additional_sodium_needed_mg: f64,
    /// Rounded to 2 decimals.
    pub additional_kosher_salt_tsp: f64,
    /// Rounded to 2 decimals.
    pub additional_kosher_salt_quarter_tsp: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advisory {
    NoSaltNeeded,
    Pinch,
    AddSalt(f64),
}
