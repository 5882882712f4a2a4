//! Position command implementation.

use survey_pattern::{MissionRecord, SurveyPattern};

use super::common::{is_value, parse_number, read_input, to_json};

/// Execute the position command.
///
/// Prints `{"lat":..,"lng":..}`, or `null` when there is no marker to show.
pub fn cmd_position(args: &[String]) -> Result<(), String> {
    let mut pattern_path: Option<&str> = None;
    let mut completion: Option<f64> = None;
    let mut mission_path: Option<&str> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--completion" => {
                i += 1;
                if i < args.len() {
                    completion = Some(parse_number(&args[i], "completion percentage")?);
                }
            }
            "--mission" => {
                i += 1;
                if i < args.len() {
                    mission_path = Some(&args[i]);
                }
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            value if is_value(value) => {
                if pattern_path.is_some() {
                    return Err(format!("Unexpected argument: {}", value));
                }
                pattern_path = Some(value);
            }
            unknown => {
                return Err(format!("Unknown option: {}", unknown));
            }
        }
        i += 1;
    }

    let Some(pattern_path) = pattern_path else {
        print_usage();
        return Err("Pattern JSON file required (use '-' for stdin)".to_string());
    };

    let pattern: SurveyPattern = serde_json::from_str(&read_input(pattern_path)?)
        .map_err(|e| format!("Failed to parse survey pattern JSON: {}", e))?;

    let position = match (completion, mission_path) {
        (Some(pct), None) => pattern.position_at(pct),
        (None, Some(path)) => {
            let mission: MissionRecord = serde_json::from_str(&read_input(path)?)
                .map_err(|e| format!("Failed to parse mission JSON: {}", e))?;
            mission.drone_marker(&pattern)
        }
        _ => {
            print_usage();
            return Err("Give exactly one of --completion or --mission".to_string());
        }
    };

    if position.is_none() {
        eprintln!("No drone position available");
    }
    println!("{}", to_json(&position, false)?);
    Ok(())
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  survey-pattern position <pattern.json|-> -c <percent>");
    eprintln!("  survey-pattern position <pattern.json|-> --mission <mission.json>");
}
