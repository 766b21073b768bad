//! Figures shown on the results page, the printable report and the charts.
//! Everything here is read off an already computed `Derived`.

use serde::Serialize;
use zerowaste_common::{Derived, WasteStream};

/// A labelled bar or pie slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: f64,
}

impl ChartPoint {
    fn new(label: &'static str, value: f64) -> Self {
        Self { label, value }
    }
}

/// Headline figures for the "Program Impact" and "Key Findings" sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub net_savings: f64,
    pub cost_reduction_fraction: f64,
    pub waste_composition: Vec<ChartPoint>,
    pub cost_comparison: Vec<ChartPoint>,
    pub savings: Vec<ChartPoint>,
}

impl ReportSummary {
    pub fn from_derived(derived: &Derived) -> Self {
        Self {
            net_savings: net_savings(derived),
            cost_reduction_fraction: cost_reduction_fraction(derived),
            waste_composition: waste_composition_series(derived),
            cost_comparison: cost_comparison_series(derived),
            savings: savings_series(derived),
        }
    }
}

/// Avoided disposal plus compost revenue, less the drop in disposal cost.
pub fn net_savings(derived: &Derived) -> f64 {
    derived.avoided_disposal_savings + derived.compost_revenue
        - (derived.baseline_cost - derived.after_zw_cost)
}

/// Share of the baseline cost removed by diversion. Zero when there is no baseline.
pub fn cost_reduction_fraction(derived: &Derived) -> f64 {
    if derived.baseline_cost == 0.0 {
        return 0.0;
    }
    (derived.baseline_cost - derived.after_zw_cost) / derived.baseline_cost
}

pub fn waste_composition_series(derived: &Derived) -> Vec<ChartPoint> {
    WasteStream::ALL
        .iter()
        .map(|s| ChartPoint::new(s.label(), derived.shares.get(*s)))
        .collect()
}

pub fn cost_comparison_series(derived: &Derived) -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("Before ZW Program", derived.baseline_cost),
        ChartPoint::new("After Diversion (Organics)", derived.after_zw_cost),
    ]
}

pub fn savings_series(derived: &Derived) -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("Avoided Disposal", derived.avoided_disposal_savings),
        ChartPoint::new("Compost Revenue", derived.compost_revenue),
    ]
}
