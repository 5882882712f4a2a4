//! Adapters for the stored location and mission records.
//!
//! Records arrive as the dashboard stores them: camelCase JSON with
//! coordinates as strings. Anything missing or unparseable simply makes that
//! geometry unavailable; it is never an error.

use serde::{Deserialize, Serialize};

use crate::boundary::BoundingArea;
use crate::config::PatternConfig;
use crate::geometry::GeoPoint;
use crate::parameters::{StoredParameters, SurveyParameters};
use crate::patterns::PatternType;
use crate::survey::{GeneratedPattern, SurveyPattern, generate_survey_pattern};

/// Location geometry as stored. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationRecord {
    pub start_latitude: Option<String>,
    pub start_longitude: Option<String>,
    pub end_latitude: Option<String>,
    pub end_longitude: Option<String>,
    /// Older records carry a single center point instead of corners
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// Mission lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionStatus {
    Scheduled,
    InProgress,
    Completed,
    Aborted,
}

/// The mission fields the pattern engine reads.
///
/// Every field may be absent or `null` in a stored record. A missing
/// completion counts as 0%, missing parameters come from the pattern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MissionRecord {
    pub mission_type: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub survey_parameters: Option<StoredParameters>,
}

fn parse_coordinate(value: &Option<String>) -> Option<f64> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

fn parse_point(lat: &Option<String>, lng: &Option<String>) -> Option<GeoPoint> {
    Some(GeoPoint::new(parse_coordinate(lat)?, parse_coordinate(lng)?))
}

impl LocationRecord {
    /// Corner pair if complete, else the center point, else `Missing`.
    pub fn bounding_area(&self) -> BoundingArea {
        let start = parse_point(&self.start_latitude, &self.start_longitude);
        let end = parse_point(&self.end_latitude, &self.end_longitude);

        match (start, end) {
            (Some(start), Some(end)) => BoundingArea::Corners { start, end },
            _ => match parse_point(&self.latitude, &self.longitude) {
                Some(center) => BoundingArea::Center(center),
                None => BoundingArea::Missing,
            },
        }
    }
}

impl MissionStatus {
    pub fn from_name(name: &str) -> Option<MissionStatus> {
        match name {
            "scheduled" => Some(MissionStatus::Scheduled),
            "in-progress" => Some(MissionStatus::InProgress),
            "completed" => Some(MissionStatus::Completed),
            "aborted" => Some(MissionStatus::Aborted),
            _ => None,
        }
    }
}

impl MissionRecord {
    pub fn status(&self) -> Option<MissionStatus> {
        MissionStatus::from_name(&self.status)
    }

    /// Pattern for this mission's type, crosshatch when unrecognized.
    pub fn pattern_type(&self) -> PatternType {
        PatternType::from_name_or_fallback(&self.mission_type)
    }

    /// Survey parameters as stored, with gaps filled from the pattern's
    /// defaults.
    pub fn effective_parameters(&self) -> SurveyParameters {
        let defaults = self.pattern_type().default_parameters();
        self.survey_parameters
            .map_or(defaults, |stored| stored.or_defaults(defaults))
    }

    /// Drone marker position. Only in-progress missions have one.
    pub fn drone_marker(&self, pattern: &SurveyPattern) -> Option<GeoPoint> {
        if self.status() != Some(MissionStatus::InProgress) {
            return None;
        }
        pattern.position_at(self.completion_percentage.unwrap_or(0.0))
    }

    /// Generate this mission's pattern over `location` (absent locations use
    /// the default region).
    pub fn plan(&self, location: Option<&LocationRecord>, config: &PatternConfig) -> GeneratedPattern {
        let area = location.map_or(BoundingArea::Missing, LocationRecord::bounding_area);
        generate_survey_pattern(&area, &self.mission_type, config)
    }
}
