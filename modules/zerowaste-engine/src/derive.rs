use tracing::debug;
use zerowaste_common::{Derived, Inputs, StreamShares};

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const KG_PER_TON: f64 = 1000.0;

/// Compute every derived metric from `inputs`.
///
/// Total over all numeric inputs: invalid records still produce numbers so the
/// UI can preview them. No rounding happens here, and each field is a single
/// expression in a fixed evaluation order, so identical inputs always give
/// bit-identical output.
pub fn calculate_derived(inputs: &Inputs) -> Derived {
    let total_daily_kg = inputs.population as f64 * inputs.waste_per_capita_kg_day;
    let total_annual_tons = (total_daily_kg * DAYS_PER_YEAR) / KG_PER_TON;

    let c = &inputs.characterization;
    let shares = StreamShares {
        organics: (total_annual_tons * c.organics) / 100.0,
        recyclables: (total_annual_tons * c.recyclables) / 100.0,
        residuals: (total_annual_tons * c.residuals) / 100.0,
        special: (total_annual_tons * c.special) / 100.0,
    };

    let baseline_cost = total_annual_tons * inputs.baseline_cost_per_ton;

    let diverted_organics_tons =
        shares.organics * inputs.composting_adoption * inputs.diversion_efficiency;
    let compost_kg = diverted_organics_tons * KG_PER_TON;
    let compost_revenue = compost_kg * inputs.compost_price_per_kg;
    let avoided_disposal_savings = diverted_organics_tons * inputs.baseline_cost_per_ton;
    let after_zw_cost = baseline_cost - avoided_disposal_savings;

    debug!(
        total_annual_tons,
        baseline_cost, diverted_organics_tons, after_zw_cost, "Derived metrics"
    );

    Derived {
        total_daily_kg,
        total_annual_tons,
        shares,
        baseline_cost,
        diverted_organics_tons,
        compost_kg,
        compost_revenue,
        avoided_disposal_savings,
        after_zw_cost,
    }
}
