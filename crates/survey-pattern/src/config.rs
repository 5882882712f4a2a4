//! Tunable constants for pattern generation.
//!
//! Every magic number the generators use lives here with its default, so
//! tests can inject smaller or larger layouts and deployments can override
//! them from a YAML file:
//!
//! ```yaml
//! offset: 0.004
//! crosshatch_rows: 7
//! default_region:
//!   south: 51.50
//!   west: -0.13
//!   north: 51.51
//!   east: -0.12
//! ```
//!
//! Fields missing from the file keep their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geometry::Bounds;

/// Half-size of the square derived around a center point, in degrees (~500m).
pub const DEFAULT_OFFSET: f64 = 0.005;
/// Horizontal and vertical overlay lines for crosshatch, edges included.
pub const DEFAULT_CROSSHATCH_LINES: usize = 5;
/// Bands swept by the crosshatch zigzag.
pub const DEFAULT_CROSSHATCH_ROWS: usize = 5;
/// Horizontal and vertical overlay lines for grid, edges included.
pub const DEFAULT_GRID_LINES: usize = 6;
/// Bands swept by the grid lawn-mower path.
pub const DEFAULT_GRID_COLUMNS: usize = 6;

/// Region used when a mission has no usable location: the San Francisco
/// block the dashboard has always fallen back to.
pub const DEFAULT_REGION: Bounds = Bounds {
    south: 37.7749,
    west: -122.4194,
    north: 37.7849,
    east: -122.4094,
};

/// Error type for configuration loading and validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Failed to read pattern config: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Failed to parse pattern config YAML: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid pattern config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Generation constants. See the module docs for the YAML shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Half-size of the square derived around a center point (degrees)
    pub offset: f64,
    /// Overlay lines per axis for crosshatch
    pub crosshatch_lines: usize,
    /// Zigzag bands for the crosshatch flight path
    pub crosshatch_rows: usize,
    /// Overlay lines per axis for grid
    pub grid_lines: usize,
    /// Lawn-mower bands for the grid flight path
    pub grid_columns: usize,
    /// Region substituted when no location geometry is available
    pub default_region: Bounds,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            crosshatch_lines: DEFAULT_CROSSHATCH_LINES,
            crosshatch_rows: DEFAULT_CROSSHATCH_ROWS,
            grid_lines: DEFAULT_GRID_LINES,
            grid_columns: DEFAULT_GRID_COLUMNS,
            default_region: DEFAULT_REGION,
        }
    }
}

impl PatternConfig {
    /// Load and validate a config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.as_ref().display(), e)))?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate a config from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PatternConfig = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the generators cannot lay out.
    ///
    /// A single overlay line is allowed (it becomes the centerline); zero is not.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.offset.is_finite() || self.offset <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "offset must be a positive number of degrees, got {}",
                self.offset
            )));
        }

        let counts = [
            ("crosshatch_lines", self.crosshatch_lines),
            ("crosshatch_rows", self.crosshatch_rows),
            ("grid_lines", self.grid_lines),
            ("grid_columns", self.grid_columns),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{} must be at least 1", name)));
            }
        }

        let region = &self.default_region;
        let finite = [region.south, region.west, region.north, region.east]
            .iter()
            .all(|v| v.is_finite());
        if !finite || region.is_collapsed() {
            return Err(ConfigError::Invalid(
                "default_region must have north > south and east > west".to_string(),
            ));
        }

        Ok(())
    }
}
