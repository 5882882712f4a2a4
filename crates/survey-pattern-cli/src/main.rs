//! survey-pattern - CLI for drone survey pattern generation
//!
//! Usage:
//!   survey-pattern generate <lat> <lng> -p <type>   Generate a survey pattern as JSON
//!   survey-pattern position <pattern.json> -c <pct> Drone position along a pattern
//!   survey-pattern patterns                         List available pattern types
//!
//! Set `RUST_LOG=info` to see generation summaries on stderr.

mod cli;

use std::env;

use survey_pattern::PatternType;

use cli::{cmd_generate, cmd_position};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let prog = args.first().map(String::as_str).unwrap_or("survey-pattern");

    let Some(command) = args.get(1) else {
        print_usage(prog);
        std::process::exit(1);
    };

    let result = match command.as_str() {
        "generate" => cmd_generate(&args[2..]),
        "position" => cmd_position(&args[2..]),
        "patterns" => {
            cmd_patterns();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage(prog);
            Ok(())
        }
        unknown => Err(format!("Unknown command: {}", unknown)),
    };

    if let Err(message) = result {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}

fn print_usage(prog: &str) {
    eprintln!("survey-pattern - boundary and flight-path generation for drone surveys");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} generate <lat> <lng> [-p <type>] [options]", prog);
    eprintln!("  {} generate --bounds <lat1>,<lng1>,<lat2>,<lng2> [-p <type>]", prog);
    eprintln!("  {} generate --location <location.json|-> [-p <type>]", prog);
    eprintln!("  {} position <pattern.json|-> -c <percent>", prog);
    eprintln!("  {} position <pattern.json|-> --mission <mission.json>", prog);
    eprintln!("  {} patterns", prog);
    eprintln!();
    eprintln!("Generate options:");
    eprintln!("  -p, --pattern <type>   perimeter, crosshatch, grid (default: crosshatch)");
    eprintln!("  --config <file.yaml>   Override generation constants");
    eprintln!("  -o, --output <file>    Output file (default: stdout)");
    eprintln!("  --pretty               Pretty-print JSON");
    eprintln!("  --strict               Fail instead of substituting defaults");
    eprintln!();
    eprintln!("Unknown pattern types fall back to crosshatch.");
}

fn cmd_patterns() {
    println!("Available patterns:");
    for pattern in PatternType::all() {
        let metadata = pattern.metadata();
        let spacing = metadata
            .line_spacing_hint
            .map(|s| format!("{}m", s))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<12} altitude {}m, speed {}m/s, spacing {:<4} {}",
            pattern.name(),
            metadata.suggested_altitude,
            metadata.suggested_speed,
            spacing,
            pattern.description()
        );
    }
}
