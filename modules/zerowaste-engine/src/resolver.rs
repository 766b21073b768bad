//! Scenario suggestion from qualitative context answers.
//!
//! A priority-ordered cascade, not a score: several rules can hold at once and
//! only the first one listed wins (geography and land use before population).

use tracing::debug;
use zerowaste_common::{
    Activity, AreaType, CoastalIsland, PopulationBand, ScenarioMappingInputs, Terrain,
};

use crate::scenarios::{
    default_scenario, find_scenario, Scenario, ISLAND_ID, MOUNTAIN_ID, RURAL_ID, URBAN_ID,
};

/// One step of the cascade.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&ScenarioMappingInputs) -> bool,
    pub scenario_id: &'static str,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("scenario_id", &self.scenario_id)
            .finish()
    }
}

/// Evaluated top to bottom; first match wins. No match means the default scenario.
pub static RULES: &[Rule] = &[
    Rule {
        name: "coastal-island",
        matches: is_coastal_island,
        scenario_id: ISLAND_ID,
    },
    Rule {
        name: "mountain-or-agriculture",
        matches: is_mountain_or_agriculture,
        scenario_id: MOUNTAIN_ID,
    },
    // Tourism areas reuse the island bundle, and take precedence over commercial.
    Rule {
        name: "tourism",
        matches: is_tourism,
        scenario_id: ISLAND_ID,
    },
    Rule {
        name: "commercial-or-urban-mixed",
        matches: is_commercial_or_urban_mixed,
        scenario_id: URBAN_ID,
    },
    Rule {
        name: "residential-rural-or-small",
        matches: is_residential_rural_or_small,
        scenario_id: RURAL_ID,
    },
    Rule {
        name: "urban-or-large",
        matches: is_urban_or_large,
        scenario_id: URBAN_ID,
    },
    Rule {
        name: "peri-urban-mid-size",
        matches: is_peri_urban_mid_size,
        scenario_id: RURAL_ID,
    },
    Rule {
        name: "peri-urban-large",
        matches: is_peri_urban_large,
        scenario_id: URBAN_ID,
    },
];

fn is_coastal_island(m: &ScenarioMappingInputs) -> bool {
    m.is_coastal_island == CoastalIsland::Yes
}

fn is_mountain_or_agriculture(m: &ScenarioMappingInputs) -> bool {
    m.terrain == Terrain::Mountainous || m.has_activity(Activity::Agriculture)
}

fn is_tourism(m: &ScenarioMappingInputs) -> bool {
    m.has_activity(Activity::Tourism)
}

fn is_commercial_or_urban_mixed(m: &ScenarioMappingInputs) -> bool {
    m.has_activity(Activity::Commercial)
        || (m.area_type == AreaType::Urban && m.has_activity(Activity::Mixed))
}

fn is_residential_rural_or_small(m: &ScenarioMappingInputs) -> bool {
    m.has_activity(Activity::Residential)
        || m.area_type == AreaType::Rural
        || m.population_band == PopulationBand::Under25k
}

fn is_urban_or_large(m: &ScenarioMappingInputs) -> bool {
    m.area_type == AreaType::Urban || m.population_band == PopulationBand::Over500k
}

fn is_peri_urban_mid_size(m: &ScenarioMappingInputs) -> bool {
    m.area_type == AreaType::PeriUrban && m.population_band == PopulationBand::From25kTo100k
}

// <25k and >500k are already taken by earlier rules, so this is the 100-500k band.
// An unsure band gives no signal and falls through to the default.
fn is_peri_urban_large(m: &ScenarioMappingInputs) -> bool {
    m.area_type == AreaType::PeriUrban && m.population_band == PopulationBand::From100kTo500k
}

/// First rule that matches `mapping`, if any.
pub fn matching_rule(mapping: &ScenarioMappingInputs) -> Option<&'static Rule> {
    RULES.iter().find(|rule| (rule.matches)(mapping))
}

/// Suggest the best-fit scenario for `mapping`. Total and deterministic.
pub fn suggest_scenario(mapping: &ScenarioMappingInputs) -> &'static Scenario {
    match matching_rule(mapping) {
        Some(rule) => {
            let scenario = find_scenario(rule.scenario_id).unwrap_or_else(default_scenario);
            debug!(rule = rule.name, scenario = scenario.id, "Scenario suggested");
            scenario
        }
        None => {
            let scenario = default_scenario();
            debug!(scenario = scenario.id, "No rule matched, using default scenario");
            scenario
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::{DEFAULT_ID, SCENARIOS};

    fn mapping(
        area_type: AreaType,
        activities: Vec<Activity>,
        terrain: Terrain,
        coastal: CoastalIsland,
        band: PopulationBand,
    ) -> ScenarioMappingInputs {
        ScenarioMappingInputs::builder()
            .area_type(area_type)
            .dominant_activities(activities)
            .terrain(terrain)
            .is_coastal_island(coastal)
            .population_band(band)
            .build()
    }

    fn neutral() -> ScenarioMappingInputs {
        mapping(
            AreaType::PeriUrban,
            vec![Activity::Unsure],
            Terrain::Flatland,
            CoastalIsland::No,
            PopulationBand::Unsure,
        )
    }

    #[test]
    fn every_rule_points_at_a_catalogue_entry() {
        for rule in RULES {
            assert!(
                SCENARIOS.iter().any(|s| s.id == rule.scenario_id),
                "{} -> {}",
                rule.name,
                rule.scenario_id
            );
        }
    }

    #[test]
    fn coastal_island_beats_mountain() {
        let m = ScenarioMappingInputs {
            is_coastal_island: CoastalIsland::Yes,
            terrain: Terrain::Mountainous,
            ..neutral()
        };
        assert_eq!(suggest_scenario(&m).id, ISLAND_ID);
        assert_eq!(matching_rule(&m).unwrap().name, "coastal-island");
    }

    #[test]
    fn coastal_urban_island() {
        let m = mapping(
            AreaType::Urban,
            vec![],
            Terrain::Flatland,
            CoastalIsland::Yes,
            PopulationBand::From25kTo100k,
        );
        assert_eq!(suggest_scenario(&m).id, ISLAND_ID);
    }

    #[test]
    fn mountain_terrain_and_agriculture() {
        let terrain = ScenarioMappingInputs {
            terrain: Terrain::Mountainous,
            population_band: PopulationBand::From25kTo100k,
            ..neutral()
        };
        assert_eq!(suggest_scenario(&terrain).id, MOUNTAIN_ID);

        let farming = mapping(
            AreaType::Rural,
            vec![Activity::Agriculture],
            Terrain::Flatland,
            CoastalIsland::No,
            PopulationBand::Under25k,
        );
        assert_eq!(suggest_scenario(&farming).id, MOUNTAIN_ID);
    }

    #[test]
    fn agriculture_beats_tourism() {
        let m = ScenarioMappingInputs {
            dominant_activities: vec![Activity::Tourism, Activity::Agriculture],
            ..neutral()
        };
        assert_eq!(suggest_scenario(&m).id, MOUNTAIN_ID);
    }

    #[test]
    fn tourism_uses_island_bundle_and_beats_commercial() {
        let m = ScenarioMappingInputs {
            dominant_activities: vec![Activity::Commercial, Activity::Tourism],
            area_type: AreaType::Urban,
            ..neutral()
        };
        assert_eq!(suggest_scenario(&m).id, ISLAND_ID);
        assert_eq!(matching_rule(&m).unwrap().name, "tourism");
    }

    #[test]
    fn commercial_is_urban_even_in_rural_area() {
        let m = ScenarioMappingInputs {
            dominant_activities: vec![Activity::Commercial, Activity::Residential],
            area_type: AreaType::Rural,
            population_band: PopulationBand::Under25k,
            ..neutral()
        };
        assert_eq!(suggest_scenario(&m).id, URBAN_ID);
    }

    #[test]
    fn mixed_is_urban_only_in_urban_areas() {
        let urban = ScenarioMappingInputs {
            dominant_activities: vec![Activity::Mixed],
            area_type: AreaType::Urban,
            ..neutral()
        };
        assert_eq!(matching_rule(&urban).unwrap().name, "commercial-or-urban-mixed");

        let rural = ScenarioMappingInputs {
            dominant_activities: vec![Activity::Mixed],
            area_type: AreaType::Rural,
            ..neutral()
        };
        assert_eq!(suggest_scenario(&rural).id, RURAL_ID);
    }

    #[test]
    fn residential_beats_large_urban() {
        let m = mapping(
            AreaType::Urban,
            vec![Activity::Residential],
            Terrain::Flatland,
            CoastalIsland::No,
            PopulationBand::Over500k,
        );
        assert_eq!(suggest_scenario(&m).id, RURAL_ID);
    }

    #[test]
    fn small_population_is_rural() {
        let m = ScenarioMappingInputs {
            population_band: PopulationBand::Under25k,
            ..neutral()
        };
        assert_eq!(suggest_scenario(&m).id, RURAL_ID);
    }

    #[test]
    fn large_population_is_urban() {
        let m = ScenarioMappingInputs {
            population_band: PopulationBand::Over500k,
            ..neutral()
        };
        assert_eq!(suggest_scenario(&m).id, URBAN_ID);
        assert_eq!(matching_rule(&m).unwrap().name, "urban-or-large");
    }

    #[test]
    fn urban_area_is_urban_without_large_band() {
        let m = mapping(
            AreaType::Urban,
            vec![Activity::Unsure],
            Terrain::Flatland,
            CoastalIsland::No,
            PopulationBand::From100kTo500k,
        );
        assert_eq!(suggest_scenario(&m).id, URBAN_ID);
        assert_eq!(matching_rule(&m).unwrap().name, "urban-or-large");

        let unsure_band = ScenarioMappingInputs {
            population_band: PopulationBand::Unsure,
            ..m
        };
        assert_eq!(matching_rule(&unsure_band).unwrap().name, "urban-or-large");
    }

    #[test]
    fn peri_urban_splits_on_population_band() {
        let mid = ScenarioMappingInputs {
            population_band: PopulationBand::From25kTo100k,
            ..neutral()
        };
        assert_eq!(suggest_scenario(&mid).id, RURAL_ID);

        let large = ScenarioMappingInputs {
            population_band: PopulationBand::From100kTo500k,
            ..neutral()
        };
        assert_eq!(suggest_scenario(&large).id, URBAN_ID);
    }

    #[test]
    fn unsure_answers_fall_back_to_default() {
        assert!(matching_rule(&neutral()).is_none());
        assert_eq!(suggest_scenario(&neutral()).id, DEFAULT_ID);

        let all_unsure = mapping(
            AreaType::PeriUrban,
            vec![Activity::Unsure],
            Terrain::Unsure,
            CoastalIsland::Unsure,
            PopulationBand::Unsure,
        );
        assert_eq!(suggest_scenario(&all_unsure).id, DEFAULT_ID);
    }

    #[test]
    fn suggestion_is_deterministic() {
        let m = mapping(
            AreaType::Urban,
            vec![Activity::Mixed, Activity::Residential],
            Terrain::Flatland,
            CoastalIsland::Unsure,
            PopulationBand::From100kTo500k,
        );
        assert_eq!(suggest_scenario(&m).id, suggest_scenario(&m).id);
    }
}
