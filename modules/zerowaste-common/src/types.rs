use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// --- Waste Streams ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum WasteStream {
    Organics,
    Recyclables,
    Residuals,
    Special,
}

impl WasteStream {
    /// Display order used by the characterization form, the pie chart and the report.
    pub const ALL: [WasteStream; 4] = [
        WasteStream::Organics,
        WasteStream::Recyclables,
        WasteStream::Residuals,
        WasteStream::Special,
    ];

    /// Field name inside `characterization` / `shares`.
    pub fn field_name(&self) -> &'static str {
        match self {
            WasteStream::Organics => "organics",
            WasteStream::Recyclables => "recyclables",
            WasteStream::Residuals => "residuals",
            WasteStream::Special => "special",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WasteStream::Organics => "Organics",
            WasteStream::Recyclables => "Recyclables",
            WasteStream::Residuals => "Residuals",
            WasteStream::Special => "Special",
        }
    }
}

impl std::fmt::Display for WasteStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

// --- Inputs ---

/// Percentage breakdown of total waste mass. The four values are meant to sum
/// to 100 but nothing here enforces it; see `validate_inputs`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Characterization {
    pub organics: f64,
    pub recyclables: f64,
    pub residuals: f64,
    pub special: f64,
}

impl Characterization {
    pub const fn new(organics: f64, recyclables: f64, residuals: f64, special: f64) -> Self {
        Self {
            organics,
            recyclables,
            residuals,
            special,
        }
    }

    /// Build a split from three streams, giving `special` whatever is left of 100%.
    pub fn from_three(organics: f64, recyclables: f64, residuals: f64) -> Self {
        Self::new(
            organics,
            recyclables,
            residuals,
            100.0 - organics - recyclables - residuals,
        )
    }

    pub fn get(&self, stream: WasteStream) -> f64 {
        match stream {
            WasteStream::Organics => self.organics,
            WasteStream::Recyclables => self.recyclables,
            WasteStream::Residuals => self.residuals,
            WasteStream::Special => self.special,
        }
    }

    /// Sum of the four percentages, added in stream order.
    pub fn sum(&self) -> f64 {
        self.organics + self.recyclables + self.residuals + self.special
    }
}

/// Numeric inputs edited by the user. Owned by the caller; the engine only
/// ever reads it and hands back new records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Inputs {
    /// People served. Signed so zero/negative edits reach validation intact.
    pub population: i64,
    pub waste_per_capita_kg_day: f64,
    pub characterization: Characterization,
    /// Currency units per ton; the currency comes from the selected country.
    pub baseline_cost_per_ton: f64,
    /// Fraction (0-1) of the population participating in composting.
    pub composting_adoption: f64,
    pub compost_price_per_kg: f64,
    /// Fraction (0-1) of participating organics actually diverted.
    pub diversion_efficiency: f64,
}

impl Inputs {
    /// Global starting record, before any scenario is applied.
    pub const DEFAULTS: Inputs = Inputs {
        population: 5000,
        waste_per_capita_kg_day: 0.4,
        characterization: Characterization::new(52.0, 24.0, 20.0, 4.0),
        baseline_cost_per_ton: 3500.0,
        composting_adoption: 0.15,
        compost_price_per_kg: 3.0,
        diversion_efficiency: 0.6,
    };
}

impl Default for Inputs {
    fn default() -> Self {
        Self::DEFAULTS
    }
}

// --- Derived ---

/// Annual tonnage per stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StreamShares {
    pub organics: f64,
    pub recyclables: f64,
    pub residuals: f64,
    pub special: f64,
}

impl StreamShares {
    pub fn get(&self, stream: WasteStream) -> f64 {
        match stream {
            WasteStream::Organics => self.organics,
            WasteStream::Recyclables => self.recyclables,
            WasteStream::Residuals => self.residuals,
            WasteStream::Special => self.special,
        }
    }
}

/// Metrics recomputed from scratch on every `Inputs` change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Derived {
    pub total_daily_kg: f64,
    pub total_annual_tons: f64,
    pub shares: StreamShares,
    pub baseline_cost: f64,
    pub diverted_organics_tons: f64,
    pub compost_kg: f64,
    pub compost_revenue: f64,
    pub avoided_disposal_savings: f64,
    #[serde(rename = "afterZWCost")]
    pub after_zw_cost: f64,
}

// --- Validation ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationError {
    /// Input field path, e.g. `population` or `characterization.organics`.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

// --- Scenario Tags ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ScenarioTag {
    #[serde(rename = "LGU")]
    Lgu,
    Community,
    Campus,
}

impl std::fmt::Display for ScenarioTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioTag::Lgu => write!(f, "LGU"),
            ScenarioTag::Community => write!(f, "Community"),
            ScenarioTag::Campus => write!(f, "Campus"),
        }
    }
}

// --- Export ---

/// One-shot export of a finished estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub inputs: Inputs,
    pub derived: Derived,
    pub created_at: DateTime<Utc>,
    /// Semantic version of the tool that produced the snapshot.
    pub version: String,
}
