//! Deterministic calculation core for the zero-waste estimator.
//!
//! Three pure pieces, no I/O and no shared state:
//! `validate_inputs` (field-level checks), `calculate_derived` (closed-form
//! waste and cost metrics) and `suggest_scenario` (first-match cascade over a
//! fixed preset catalogue). Report metrics, chart series and the export
//! snapshot are thin layers over `Derived`.

pub mod derive;
pub mod report;
pub mod resolver;
pub mod scenarios;
pub mod snapshot;
pub mod validation;

pub use derive::calculate_derived;
pub use report::{ChartPoint, ReportSummary};
pub use resolver::{matching_rule, suggest_scenario, Rule, RULES};
pub use scenarios::{default_scenario, find_scenario, PopulationPolicy, Scenario, SCENARIOS};
pub use snapshot::{create_snapshot, create_snapshot_at, write_snapshot};
pub use validation::validate_inputs;
