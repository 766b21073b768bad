use zerowaste_common::{format_fixed, Inputs, ValidationError, WasteStream};

/// Allowed deviation of the characterization sum from 100%.
pub const CHARACTERIZATION_TOLERANCE: f64 = 0.01;

/// Check every input invariant and collect all violations.
///
/// Never short-circuits: each check runs independently, so the sum check and
/// the per-stream range checks can both fire for the same record. An empty
/// list means the record is valid. Whether to block derivation is up to the
/// caller.
pub fn validate_inputs(inputs: &Inputs) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if inputs.population < 1 {
        errors.push(ValidationError::new(
            "population",
            "Population must be at least 1",
        ));
    }

    if inputs.waste_per_capita_kg_day <= 0.0 {
        errors.push(ValidationError::new(
            "wastePerCapitaKgDay",
            "Waste generation rate must be positive",
        ));
    }

    if inputs.baseline_cost_per_ton < 0.0 {
        errors.push(ValidationError::new(
            "baselineCostPerTon",
            "Baseline cost cannot be negative",
        ));
    }

    let sum = inputs.characterization.sum();
    if (sum - 100.0).abs() > CHARACTERIZATION_TOLERANCE {
        errors.push(ValidationError::new(
            "characterization",
            format!(
                "Waste characterization must sum to 100% (currently {}%)",
                format_fixed(sum, 1)
            ),
        ));
    }

    for stream in WasteStream::ALL {
        let pct = inputs.characterization.get(stream);
        if !(0.0..=100.0).contains(&pct) {
            errors.push(ValidationError::new(
                format!("characterization.{}", stream.field_name()),
                format!("{} must be 0-100%", stream.label()),
            ));
        }
    }

    if !(0.0..=1.0).contains(&inputs.composting_adoption) {
        errors.push(ValidationError::new(
            "compostingAdoption",
            "Adoption rate must be between 0 and 1",
        ));
    }

    if !(0.0..=1.0).contains(&inputs.diversion_efficiency) {
        errors.push(ValidationError::new(
            "diversionEfficiency",
            "Diversion efficiency must be between 0 and 1",
        ));
    }

    if inputs.compost_price_per_kg < 0.0 {
        errors.push(ValidationError::new(
            "compostPricePerKg",
            "Compost price cannot be negative",
        ));
    }

    errors
}
