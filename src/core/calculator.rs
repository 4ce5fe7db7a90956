use crate::domain::model::{SaltInputs, SaltResult, KOSHER_SALT_SODIUM_PER_QUARTER_TSP_MG};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_negative, validate_positive, Validate};

/// Works out how much kosher salt to add on top of a rub that already carries sodium.
///
/// No input checks are made here; see [`compute`] for the checked variant.
pub fn compute_additional_salt(
    weight_lbs: f64,
    rub_sodium_per_quarter_tsp: f64,
    rub_amount_tsp: f64,
    target_salt_per_lb_mg: f64,
) -> SaltResult {
    let target_total_sodium_mg = weight_lbs * target_salt_per_lb_mg;

    let quarter_tsp_of_rub = rub_amount_tsp * 4.0;
    let sodium_from_rub_mg = quarter_tsp_of_rub * rub_sodium_per_quarter_tsp;

    // The rub may already exceed the target; there is no negative salt.
    let additional_sodium_needed_mg = (target_total_sodium_mg - sodium_from_rub_mg).max(0.0);

    let quarter_tsp = additional_sodium_needed_mg / KOSHER_SALT_SODIUM_PER_QUARTER_TSP_MG;
    let tsp = quarter_tsp / 4.0;

    SaltResult {
        weight_lbs,
        rub_amount_tsp,
        target_total_sodium_mg,
        sodium_from_rub_mg,
        additional_sodium_needed_mg,
        additional_kosher_salt_tsp: round2(tsp),
        additional_kosher_salt_quarter_tsp: round2(quarter_tsp),
    }
}

/// Checked entry point: rejects negative amounts, a non-positive target, and non-finite input.
pub fn compute(inputs: &SaltInputs) -> Result<SaltResult> {
    inputs.validate()?;

    let result = compute_additional_salt(
        inputs.weight_lbs,
        inputs.rub_sodium_per_quarter_tsp,
        inputs.rub_amount_tsp,
        inputs.target_salt_per_lb_mg,
    );
    tracing::debug!(
        "Computed {:.2} tsp additional salt for {} lbs",
        result.additional_kosher_salt_tsp,
        result.weight_lbs
    );
    Ok(result)
}

impl Validate for SaltInputs {
    fn validate(&self) -> Result<()> {
        validate_non_negative("weight_lbs", self.weight_lbs)?;
        validate_non_negative("rub_sodium_per_quarter_tsp", self.rub_sodium_per_quarter_tsp)?;
        validate_non_negative("rub_amount_tsp", self.rub_amount_tsp)?;
        validate_positive("target_salt_per_lb_mg", self.target_salt_per_lb_mg)?;
        Ok(())
    }
}

// Exact halves go to the even neighbour: 1.125 -> 1.12.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
