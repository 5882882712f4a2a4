//! Survey pattern generation - the crate's main entry point.
//!
//! Generation never fails. Missing geometry and unknown mission types are
//! replaced with defaults so a dashboard always has something to draw, and
//! each substitution is reported as a [`Recovery`] next to the pattern.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::boundary::{BoundingArea, derive_boundary};
use crate::config::PatternConfig;
use crate::geometry::{GeoPoint, Segment, path_length};
use crate::patterns::{PatternMetadata, PatternType};
use crate::progress::progress_to_position;

/// Boundary, overlay lines, flight path and flight defaults for one mission.
///
/// Serialized as-is into the mission's survey-pattern field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyPattern {
    /// Closed ring: SW, SE, NE, NW, SW
    pub boundary: Vec<GeoPoint>,
    /// Independent display segments
    pub internal_lines: Vec<Segment>,
    /// Single polyline the drone follows
    pub flight_path: Vec<GeoPoint>,
    pub metadata: PatternMetadata,
}

/// A substitution made while generating a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovery {
    /// No usable location geometry; the configured default region was used.
    DefaultRegion,
    /// The location's corners enclosed no area; a square was derived around
    /// their midpoint instead.
    ExpandedCollapsedArea,
    /// The mission type was not recognized; crosshatch was used.
    DefaultPatternType { requested: String },
}

impl std::fmt::Display for Recovery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recovery::DefaultRegion => write!(f, "no location geometry, using default region"),
            Recovery::ExpandedCollapsedArea => {
                write!(f, "location corners enclose no area, expanded around their midpoint")
            }
            Recovery::DefaultPatternType { requested } => write!(
                f,
                "unknown mission type '{}', using {}",
                requested,
                PatternType::FALLBACK
            ),
        }
    }
}

/// A generated pattern together with any substitutions made for it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPattern {
    pub pattern: SurveyPattern,
    pub recoveries: Vec<Recovery>,
}

impl GeneratedPattern {
    /// True when no default was substituted.
    pub fn is_exact(&self) -> bool {
        self.recoveries.is_empty()
    }

    pub fn into_pattern(self) -> SurveyPattern {
        self.pattern
    }
}

impl SurveyPattern {
    /// Approximate drone position at `completion_percentage`.
    /// See [`progress_to_position`].
    pub fn position_at(&self, completion_percentage: f64) -> Option<GeoPoint> {
        progress_to_position(&self.flight_path, completion_percentage)
    }

    /// Flat-plane length of the flight path, in degrees.
    pub fn flight_path_length(&self) -> f64 {
        path_length(&self.flight_path)
    }
}

/// Generate a survey pattern from a mission-type token.
///
/// Tokens are `"perimeter"`, `"crosshatch"` or `"grid"` (case-sensitive);
/// anything else produces a crosshatch pattern and a
/// [`Recovery::DefaultPatternType`].
pub fn generate_survey_pattern(area: &BoundingArea, mission_type: &str, config: &PatternConfig) -> GeneratedPattern {
    match PatternType::from_name(mission_type) {
        Some(pattern_type) => generate_for_type(area, pattern_type, config),
        None => {
            let mut generated = generate_for_type(area, PatternType::FALLBACK, config);
            let recovery = Recovery::DefaultPatternType { requested: mission_type.to_string() };
            warn!("{}", recovery);
            generated.recoveries.push(recovery);
            generated
        }
    }
}

/// Generate a survey pattern for a known pattern type.
pub fn generate_for_type(area: &BoundingArea, pattern_type: PatternType, config: &PatternConfig) -> GeneratedPattern {
    let derived = derive_boundary(area, config);
    let layout = pattern_type.generate(&derived.ring, config);

    let mut recoveries = Vec::new();
    if let Some(recovery) = derived.recovery {
        warn!("{}", recovery);
        recoveries.push(recovery);
    }

    debug!(
        "generated {} pattern: {} internal lines, {} waypoints",
        pattern_type,
        layout.internal_lines.len(),
        layout.flight_path.len()
    );

    GeneratedPattern {
        pattern: SurveyPattern {
            boundary: derived.ring,
            internal_lines: layout.internal_lines,
            flight_path: layout.flight_path,
            metadata: pattern_type.metadata(),
        },
        recoveries,
    }
}

// ============================================================================
// TESTS
// ============================================================================
