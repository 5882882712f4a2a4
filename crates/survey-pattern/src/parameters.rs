//! Survey parameters a mission is flown with, and their allowed ranges.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Allowed altitude, meters.
pub const ALTITUDE_RANGE: RangeInclusive<f64> = 10.0..=120.0;
/// Allowed image overlap, percent.
pub const OVERLAP_RANGE: RangeInclusive<f64> = 20.0..=90.0;
/// Allowed speed, meters per second.
pub const SPEED_RANGE: RangeInclusive<f64> = 1.0..=10.0;
/// Overlap a new mission starts with.
pub const DEFAULT_OVERLAP: f64 = 75.0;

/// Error type for survey parameter validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    AltitudeOutOfRange(f64),
    OverlapOutOfRange(f64),
    SpeedOutOfRange(f64),
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterError::AltitudeOutOfRange(v) => write!(
                f, "altitude {}m is outside {}-{}m", v, ALTITUDE_RANGE.start(), ALTITUDE_RANGE.end()
            ),
            ParameterError::OverlapOutOfRange(v) => write!(
                f, "overlap {}% is outside {}-{}%", v, OVERLAP_RANGE.start(), OVERLAP_RANGE.end()
            ),
            ParameterError::SpeedOutOfRange(v) => write!(
                f, "speed {}m/s is outside {}-{}m/s", v, SPEED_RANGE.start(), SPEED_RANGE.end()
            ),
        }
    }
}

impl std::error::Error for ParameterError {}

/// Altitude, overlap and speed for a survey flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurveyParameters {
    /// Meters above ground
    pub altitude: f64,
    /// Image overlap, percent
    pub overlap: f64,
    /// Meters per second
    pub speed: f64,
}

/// Survey parameters as a mission record stores them.
///
/// The stored object is loose: any field may be absent or `null`, and absent
/// fields take the pattern's defaults in [`StoredParameters::or_defaults`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl StoredParameters {
    /// Fill every missing field from `defaults`.
    pub fn or_defaults(&self, defaults: SurveyParameters) -> SurveyParameters {
        SurveyParameters {
            altitude: self.altitude.unwrap_or(defaults.altitude),
            overlap: self.overlap.unwrap_or(defaults.overlap),
            speed: self.speed.unwrap_or(defaults.speed),
        }
    }
}

impl SurveyParameters {
    /// Check every field against its range. NaN is never in range.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !ALTITUDE_RANGE.contains(&self.altitude) {
            return Err(ParameterError::AltitudeOutOfRange(self.altitude));
        }
        if !OVERLAP_RANGE.contains(&self.overlap) {
            return Err(ParameterError::OverlapOutOfRange(self.overlap));
        }
        if !SPEED_RANGE.contains(&self.speed) {
            return Err(ParameterError::SpeedOutOfRange(self.speed));
        }
        Ok(())
    }
}
