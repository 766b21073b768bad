//! Fixed catalogue of preset input bundles.

use serde::Serialize;
use zerowaste_common::{Characterization, Inputs, ScenarioTag};

pub const URBAN_ID: &str = "urban-organics-recycling";
pub const ISLAND_ID: &str = "island-organics-recycling";
pub const MOUNTAIN_ID: &str = "mountain-organics";
pub const RURAL_ID: &str = "rural-organics";
pub const DEFAULT_ID: &str = "default";

/// How `Scenario::apply_with` picks the population of the merged record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopulationPolicy {
    /// Keep the caller's population unless it is zero, then use the preset's.
    #[default]
    KeepCallerUnlessZero,
    /// Always use the preset's population.
    UsePreset,
}

impl PopulationPolicy {
    pub fn resolve(&self, caller: i64, preset: i64) -> i64 {
        match self {
            PopulationPolicy::KeepCallerUnlessZero if caller != 0 => caller,
            _ => preset,
        }
    }
}

/// A named archetype of community context with the inputs it implies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scenario {
    pub id: &'static str,
    pub name: &'static str,
    pub tag: ScenarioTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<&'static str>,
    /// Every field a scenario sets. `population` is only the fallback.
    pub preset: Inputs,
}

impl Scenario {
    /// Merge this preset onto `inputs`, keeping a non-zero caller population.
    pub fn apply(&self, inputs: &Inputs) -> Inputs {
        self.apply_with(inputs, PopulationPolicy::default())
    }

    /// Merge this preset onto `inputs`. All fields other than population are
    /// overwritten wholesale; population follows `policy`.
    pub fn apply_with(&self, inputs: &Inputs, policy: PopulationPolicy) -> Inputs {
        Inputs {
            population: policy.resolve(inputs.population, self.preset.population),
            ..self.preset
        }
    }

    pub fn is_default(&self) -> bool {
        self.id == DEFAULT_ID
    }
}

const fn preset(
    population: i64,
    waste_per_capita_kg_day: f64,
    characterization: [f64; 4],
    baseline_cost_per_ton: f64,
    composting_adoption: f64,
    diversion_efficiency: f64,
    compost_price_per_kg: f64,
) -> Inputs {
    Inputs {
        population,
        waste_per_capita_kg_day,
        characterization: Characterization {
            organics: characterization[0],
            recyclables: characterization[1],
            residuals: characterization[2],
            special: characterization[3],
        },
        baseline_cost_per_ton,
        composting_adoption,
        compost_price_per_kg,
        diversion_efficiency,
    }
}

/// Catalogue in presentation order. The default preset is always last.
pub static SCENARIOS: [Scenario; 5] = [
    Scenario {
        id: URBAN_ID,
        name: "Urban LGU — Organics + Recycling",
        tag: ScenarioTag::Lgu,
        description: Some("Typical urban municipality with mixed residential and commercial waste"),
        rationale: Some(
            "Urban areas typically have higher waste generation and better segregation potential. \
             Higher organics (50-55%) with moderate recyclables.",
        ),
        preset: preset(50_000, 0.45, [52.0, 26.0, 18.0, 4.0], 4000.0, 0.2, 0.65, 3.5),
    },
    Scenario {
        id: ISLAND_ID,
        name: "Island LGU — Organics + Recycling",
        tag: ScenarioTag::Lgu,
        description: Some("Coastal island municipality with tourism and seafood industry"),
        rationale: Some(
            "Island communities often have higher organics from seafood and tourism. \
             Higher baseline costs due to logistics.",
        ),
        preset: preset(15_000, 0.5, [58.0, 22.0, 16.0, 4.0], 5500.0, 0.18, 0.6, 4.0),
    },
    Scenario {
        id: MOUNTAIN_ID,
        name: "Mountain LGU — Organics Only",
        tag: ScenarioTag::Lgu,
        description: Some("Mountainous municipality with agricultural focus"),
        rationale: Some(
            "Mountain communities have high organics from agriculture. \
             Recycling infrastructure may be limited.",
        ),
        preset: preset(8_000, 0.35, [65.0, 15.0, 16.0, 4.0], 3000.0, 0.25, 0.7, 2.5),
    },
    Scenario {
        id: RURAL_ID,
        name: "Rural LGU — Organics Only",
        tag: ScenarioTag::Lgu,
        description: Some("Rural barangay or small municipality"),
        rationale: Some(
            "Rural areas typically have very high organics (60-70%) from agriculture and livestock. \
             Lower baseline costs.",
        ),
        preset: preset(3_000, 0.3, [68.0, 12.0, 16.0, 4.0], 2500.0, 0.3, 0.75, 2.0),
    },
    Scenario {
        id: DEFAULT_ID,
        name: "Default (Mixed/Unsure)",
        tag: ScenarioTag::Lgu,
        description: Some("Balanced default scenario for general use"),
        rationale: Some("Moderate assumptions suitable for initial exploration."),
        // Resets everything to the global defaults.
        preset: Inputs::DEFAULTS,
    },
];

pub fn find_scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

pub fn default_scenario() -> &'static Scenario {
    &SCENARIOS[SCENARIOS.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_inputs;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<&str> = SCENARIOS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SCENARIOS.len());
    }

    #[test]
    fn default_is_last_and_matches_global_defaults() {
        let default = default_scenario();
        assert_eq!(default.id, DEFAULT_ID);
        assert!(default.is_default());
        assert_eq!(default.preset, Inputs::default());
    }

    #[test]
    fn every_preset_is_valid() {
        for scenario in &SCENARIOS {
            let errors = validate_inputs(&scenario.preset);
            assert!(errors.is_empty(), "{}: {errors:?}", scenario.id);
        }
    }

    #[test]
    fn apply_keeps_caller_population() {
        let inputs = Inputs {
            population: 12_345,
            ..Inputs::default()
        };
        for scenario in &SCENARIOS {
            assert_eq!(scenario.apply(&inputs).population, 12_345);
        }
    }

    #[test]
    fn apply_uses_preset_population_when_caller_has_none() {
        let inputs = Inputs {
            population: 0,
            ..Inputs::default()
        };
        let island = find_scenario(ISLAND_ID).unwrap();
        assert_eq!(island.apply(&inputs).population, 15_000);
        assert_eq!(default_scenario().apply(&inputs).population, 5_000);
    }

    #[test]
    fn negative_caller_population_is_kept() {
        let inputs = Inputs {
            population: -5,
            ..Inputs::default()
        };
        let rural = find_scenario(RURAL_ID).unwrap();
        assert_eq!(rural.apply(&inputs).population, -5);
    }

    #[test]
    fn use_preset_policy_overrides_caller() {
        let inputs = Inputs {
            population: 12_345,
            ..Inputs::default()
        };
        let urban = find_scenario(URBAN_ID).unwrap();
        let applied = urban.apply_with(&inputs, PopulationPolicy::UsePreset);
        assert_eq!(applied.population, 50_000);
    }

    #[test]
    fn apply_overwrites_every_other_field() {
        let edited = Inputs {
            population: 900,
            waste_per_capita_kg_day: 9.9,
            characterization: Characterization::new(1.0, 2.0, 3.0, 94.0),
            baseline_cost_per_ton: 1.0,
            composting_adoption: 0.99,
            compost_price_per_kg: 99.0,
            diversion_efficiency: 0.01,
        };
        let mountain = find_scenario(MOUNTAIN_ID).unwrap();
        let applied = mountain.apply(&edited);
        assert_eq!(
            applied,
            Inputs {
                population: 900,
                ..mountain.preset
            }
        );
        assert_eq!(applied.characterization.organics, 65.0);
        assert_eq!(applied.compost_price_per_kg, 2.5);
    }

    #[test]
    fn default_apply_resets_edits() {
        let edited = Inputs {
            population: 777,
            waste_per_capita_kg_day: 2.0,
            baseline_cost_per_ton: 1.0,
            ..Inputs::default()
        };
        let reset = default_scenario().apply(&edited);
        assert_eq!(
            reset,
            Inputs {
                population: 777,
                ..Inputs::default()
            }
        );
    }

    #[test]
    fn apply_does_not_mutate_input() {
        let inputs = Inputs::default();
        let before = inputs;
        let _ = find_scenario(URBAN_ID).unwrap().apply(&inputs);
        assert_eq!(inputs, before);
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(find_scenario("campus-zero-waste").is_none());
    }
}
