//! # survey-pattern
//!
//! Boundary, coverage-line and flight-path generation for drone survey
//! missions, plus the progress-to-position mapping used to place a drone
//! marker on an active mission.
//!
//! Everything here is pure: no I/O beyond optional config loading, no shared
//! state, and every call produces a fresh result from its inputs.
//!
//! ```
//! use survey_pattern::{BoundingArea, GeoPoint, PatternConfig, generate_survey_pattern};
//!
//! let area = BoundingArea::Center(GeoPoint::new(37.7749, -122.4194));
//! let generated = generate_survey_pattern(&area, "crosshatch", &PatternConfig::default());
//! assert!(generated.is_exact());
//! assert_eq!(generated.pattern.flight_path.len(), 11);
//! ```
//!
//! ## Rust Lesson #4: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod boundary;
pub mod config;
pub mod geometry;
pub mod mission;
pub mod parameters;
pub mod patterns;
pub mod progress;
pub mod survey;

// Re-export common types at crate root for convenience.
pub use boundary::{BoundingArea, DerivedBoundary, derive_boundary};
pub use config::{ConfigError, PatternConfig};
pub use geometry::{Bounds, GeoPoint, Segment, path_length};
pub use mission::{LocationRecord, MissionRecord, MissionStatus};
pub use parameters::{ParameterError, StoredParameters, SurveyParameters};
pub use patterns::{PatternLayout, PatternMetadata, PatternType};
pub use progress::{progress_index, progress_to_position};
pub use survey::{GeneratedPattern, Recovery, SurveyPattern, generate_for_type, generate_survey_pattern};
