//! Generate command implementation.

use log::info;

use survey_pattern::{BoundingArea, GeoPoint, LocationRecord, generate_survey_pattern};

use super::common::{is_value, load_config, parse_bounds, parse_number, read_input, to_json, write_output};

/// Execute the generate command.
///
/// Prints the survey pattern JSON that gets stored on the mission record.
pub fn cmd_generate(args: &[String]) -> Result<(), String> {
    let mut positional: Vec<&str> = Vec::new();
    let mut mission_type = "crosshatch";
    let mut bounds: Option<&str> = None;
    let mut location_path: Option<&str> = None;
    let mut config_path: Option<&str> = None;
    let mut output_path: Option<&str> = None;
    let mut pretty = false;
    let mut strict = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-p" | "--pattern" => {
                i += 1;
                if i < args.len() {
                    mission_type = &args[i];
                }
            }
            "--bounds" => {
                i += 1;
                if i < args.len() {
                    bounds = Some(&args[i]);
                }
            }
            "--location" => {
                i += 1;
                if i < args.len() {
                    location_path = Some(&args[i]);
                }
            }
            "--config" => {
                i += 1;
                if i < args.len() {
                    config_path = Some(&args[i]);
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(&args[i]);
                }
            }
            "--pretty" => {
                pretty = true;
            }
            "--strict" => {
                strict = true;
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            value if is_value(value) => {
                positional.push(value);
            }
            unknown => {
                return Err(format!("Unknown option: {}", unknown));
            }
        }
        i += 1;
    }

    let config = load_config(config_path)?;

    let area = if let Some(bounds) = bounds {
        parse_bounds(bounds)?
    } else if let Some(path) = location_path {
        let content = read_input(path)?;
        let location: LocationRecord = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse location JSON: {}", e))?;
        location.bounding_area()
    } else {
        match positional.as_slice() {
            [lat, lng] => BoundingArea::Center(GeoPoint::new(
                parse_number(lat, "latitude")?,
                parse_number(lng, "longitude")?,
            )),
            [] => BoundingArea::Missing,
            _ => {
                print_usage();
                return Err("Expected <lat> <lng>, --bounds or --location".to_string());
            }
        }
    };

    let generated = generate_survey_pattern(&area, mission_type, &config);

    if strict && !generated.is_exact() {
        let reasons: Vec<String> = generated.recoveries.iter().map(|r| r.to_string()).collect();
        return Err(format!("Refusing fallback output: {}", reasons.join("; ")));
    }

    let pattern = &generated.pattern;
    info!(
        "{} pattern: {} internal lines, {} waypoints, path length {:.5} deg",
        pattern.metadata.pattern_type,
        pattern.internal_lines.len(),
        pattern.flight_path.len(),
        pattern.flight_path_length()
    );

    let json = to_json(pattern, pretty)?;
    write_output(&json, output_path)
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  survey-pattern generate <lat> <lng> [options]");
    eprintln!("  survey-pattern generate --bounds <lat1>,<lng1>,<lat2>,<lng2> [options]");
    eprintln!("  survey-pattern generate --location <location.json|-> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -p, --pattern <type>   perimeter, crosshatch, grid (default: crosshatch)");
    eprintln!("  --config <file.yaml>   Override generation constants");
    eprintln!("  -o, --output <file>    Output file (default: stdout)");
    eprintln!("  --pretty               Pretty-print JSON");
    eprintln!("  --strict               Fail instead of substituting defaults");
}
