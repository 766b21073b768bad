//! Qualitative context answers used to pick a starting scenario.
//!
//! Each enum serializes with the exact label shown in the context form, so
//! answers captured by the UI deserialize without translation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::{Result, ZeroWasteError};

/// Maximum number of dominant-activity tags a mapping may carry.
pub const MAX_DOMINANT_ACTIVITIES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum Country {
    #[default]
    #[serde(alias = "philippines", alias = "PH", alias = "ph")]
    Philippines,
    #[serde(alias = "indonesia", alias = "ID", alias = "id")]
    Indonesia,
}

impl std::str::FromStr for Country {
    type Err = ZeroWasteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "philippines" | "ph" => Ok(Country::Philippines),
            "indonesia" | "id" => Ok(Country::Indonesia),
            other => Err(ZeroWasteError::Config(format!("unsupported country: {other}"))),
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Country::Philippines => write!(f, "Philippines"),
            Country::Indonesia => write!(f, "Indonesia"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum AreaType {
    Urban,
    #[serde(rename = "Peri-urban")]
    PeriUrban,
    Rural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Activity {
    Residential,
    Commercial,
    Tourism,
    Agriculture,
    Mixed,
    Unsure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Terrain {
    Flatland,
    Mountainous,
    Unsure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum CoastalIsland {
    Yes,
    No,
    Unsure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum PopulationBand {
    #[serde(rename = "<25k")]
    Under25k,
    #[serde(rename = "25-100k")]
    From25kTo100k,
    #[serde(rename = "100-500k")]
    From100kTo500k,
    #[serde(rename = ">500k")]
    Over500k,
    Unsure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum CollectionFrequency {
    Daily,
    #[serde(rename = "3x/week")]
    ThreeTimesWeekly,
    Weekly,
    #[serde(rename = "Irregular/Unsure")]
    IrregularOrUnsure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum SegregationParticipation {
    Low,
    Medium,
    High,
    Unsure,
}

/// Context answers gathered before the numeric inputs are shown. Only used to
/// choose a scenario; discarded once the scenario has been applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioMappingInputs {
    #[builder(default)]
    #[serde(default)]
    pub country: Country,
    pub area_type: AreaType,
    #[builder(default)]
    #[serde(default)]
    pub dominant_activities: Vec<Activity>,
    pub terrain: Terrain,
    pub is_coastal_island: CoastalIsland,
    pub population_band: PopulationBand,
    #[builder(default = CollectionFrequency::IrregularOrUnsure)]
    #[serde(default = "default_collection_frequency")]
    pub collection_frequency: CollectionFrequency,
    #[builder(default = SegregationParticipation::Unsure)]
    #[serde(default = "default_segregation")]
    pub segregation_participation: SegregationParticipation,
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality_name: Option<String>,
}

fn default_collection_frequency() -> CollectionFrequency {
    CollectionFrequency::IrregularOrUnsure
}

fn default_segregation() -> SegregationParticipation {
    SegregationParticipation::Unsure
}

impl ScenarioMappingInputs {
    pub fn has_activity(&self, activity: Activity) -> bool {
        self.dominant_activities.contains(&activity)
    }

    /// Structural check for answers coming from outside the form (files, APIs).
    pub fn check(&self) -> Result<()> {
        let count = self.dominant_activities.len();
        if count > MAX_DOMINANT_ACTIVITIES {
            return Err(ZeroWasteError::TooManyActivities {
                count,
                max: MAX_DOMINANT_ACTIVITIES,
            });
        }
        Ok(())
    }
}
