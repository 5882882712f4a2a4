//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Read};

use serde::Serialize;

use survey_pattern::{BoundingArea, GeoPoint, PatternConfig};

/// Read a file, or stdin when `path` is `-`.
pub fn read_input(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("Failed to read from stdin: {}", e))?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))
    }
}

/// Write to a file, or stdout when `output` is `None` or `-`.
pub fn write_output(content: &str, output: Option<&str>) -> Result<(), String> {
    match output {
        Some(path) if path != "-" => {
            fs::write(path, content).map_err(|e| format!("Failed to write {}: {}", path, e))?;
            eprintln!("Wrote {}", path);
            Ok(())
        }
        _ => {
            println!("{}", content);
            Ok(())
        }
    }
}

/// Serialize to compact or pretty JSON.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, String> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.map_err(|e| format!("Failed to serialize JSON: {}", e))
}

/// Load a YAML config, or the defaults when no path is given.
pub fn load_config(path: Option<&str>) -> Result<PatternConfig, String> {
    match path {
        Some(path) => PatternConfig::load(path).map_err(|e| e.to_string()),
        None => Ok(PatternConfig::default()),
    }
}

/// Parse a coordinate argument.
pub fn parse_number(value: &str, what: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("Invalid {}: {}", what, value))
}

/// Parse `lat1,lng1,lat2,lng2` into a corner pair.
pub fn parse_bounds(value: &str) -> Result<BoundingArea, String> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 4 {
        return Err(format!("Bounds must be lat1,lng1,lat2,lng2, got: {}", value));
    }

    let start = GeoPoint::new(parse_number(parts[0], "latitude")?, parse_number(parts[1], "longitude")?);
    let end = GeoPoint::new(parse_number(parts[2], "latitude")?, parse_number(parts[3], "longitude")?);
    Ok(BoundingArea::Corners { start, end })
}

/// True for arguments that are values, not flags (negative numbers included).
pub fn is_value(arg: &str) -> bool {
    !arg.starts_with('-') || arg == "-" || arg.parse::<f64>().is_ok()
}
