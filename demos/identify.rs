//! Command-line interface for name_colors
//!
//! Names a single color given as three channel values or a hex string

use name_colors::{ColorNamer, NamingConfig, RgbSample, Strategy};
use std::{env, path::Path, process};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut strategy = None;
    let mut config_path = None;
    let mut color_args = Vec::new();

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--strategy" | "-s" => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("Error: --strategy needs a value");
                    process::exit(1);
                };
                match value.parse::<Strategy>() {
                    Ok(parsed) => strategy = Some(parsed),
                    Err(error) => {
                        eprintln!("Error: {}", error);
                        eprintln!("Suggestion: {}", error.user_message());
                        process::exit(1);
                    }
                }
                i += 1;
            }
            "--config" | "-c" => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("Error: --config needs a path");
                    process::exit(1);
                };
                config_path = Some(value.clone());
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => color_args.push(arg.to_string()),
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let sample = match parse_color(&color_args) {
        Some(sample) => sample,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let namer = match config_path {
        Some(path) => match NamingConfig::from_json_file(Path::new(&path)) {
            Ok(config) => config.namer(),
            Err(error) => {
                eprintln!("Error loading config file: {}", error);
                process::exit(1);
            }
        },
        None => ColorNamer::default(),
    };

    let description = namer.describe(sample, strategy);

    // JSON to stdout for programmatic use
    match serde_json::to_string_pretty(&description) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }

    // Summary to stderr for human reading
    eprintln!();
    eprintln!("Color Naming Summary:");
    eprintln!("  Sample: {} {}", description.sample, description.hex);
    eprintln!(
        "  HSV: h={:.1}, s={:.2}, v={:.2}",
        description.hsv.hue, description.hsv.saturation, description.hsv.value
    );
    eprintln!("  Strategy: {}", description.strategy);
    eprintln!("  Label: {}", description.label);
}

fn parse_color(args: &[String]) -> Option<RgbSample> {
    match args {
        [hex] => match RgbSample::from_hex(hex) {
            Ok(sample) => Some(sample),
            Err(error) => {
                eprintln!("Error: {}", error);
                None
            }
        },
        [r, g, b] => {
            let channel = |s: &String| s.trim().parse::<i64>().ok();
            match (channel(r), channel(g), channel(b)) {
                (Some(r), Some(g), Some(b)) => Some(RgbSample::from_clamped(r, g, b)),
                _ => {
                    eprintln!("Error: channels must be integers");
                    None
                }
            }
        }
        _ => None,
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <R> <G> <B>", program_name);
    eprintln!("       {} [OPTIONS] <#RRGGBB>", program_name);
    eprintln!();
    eprintln!("Name a color sample.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --strategy, -s NAME  hsv-rules (default), tone-grid, web-colors, rgb-thresholds");
    eprintln!("  --config, -c PATH    JSON config whose default strategy is used");
    eprintln!("  --help, -h           Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} 200 0 0", program_name);
    eprintln!("  {} --strategy web-colors '#008080'", program_name);
}
