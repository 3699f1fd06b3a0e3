//! Batch CLI for the swatch dataset exporter
//!
//! Reads an R,G,B,Label table and writes jittered swatch images per label

use name_colors::{DatasetExporter, NamingConfig};
use std::{env, path::Path, process};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_help(&args[0]);
        process::exit(1);
    }

    let table_path = Path::new(&args[1]);

    if !table_path.exists() {
        eprintln!("Error: Table file '{}' does not exist", table_path.display());
        process::exit(1);
    }

    // Load configuration
    let config = match args.get(2) {
        Some(config_path) => match NamingConfig::from_json_file(Path::new(config_path)) {
            Ok(cfg) => {
                eprintln!("Loaded configuration from {}", config_path);
                cfg
            }
            Err(e) => {
                eprintln!("Error loading config file: {}", e);
                process::exit(1);
            }
        },
        None => NamingConfig::default(),
    };

    eprintln!("Output path: {}", config.export.output_root.display());
    eprintln!(
        "Variants per row: {}, jitter: ±{}, size: {}x{} {}",
        config.export.variants_per_row,
        config.export.jitter,
        config.export.image_width,
        config.export.image_height,
        config.export.format.extension()
    );
    eprintln!();

    let mut exporter = match DatasetExporter::new(config.export) {
        Ok(exporter) => exporter,
        Err(e) => {
            eprintln!("Invalid export configuration: {}", e);
            process::exit(1);
        }
    };

    let report = match exporter.export_file(table_path) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Export failed: {}", e);
            process::exit(1);
        }
    };

    eprintln!();
    eprintln!("Dataset export complete:");
    eprintln!("  Rows exported: {}", report.rows_exported);
    eprintln!("  Rows skipped: {}", report.rows_skipped);
    eprintln!("  Images written: {}", report.images_written);
    eprintln!("  Label groups: {}", report.groups.len());

    if env::var("VERBOSE").is_ok() {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing report: {}", e),
        }
    }

    if !report.is_complete() {
        process::exit(1);
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} <table.csv> [config.json]", program_name);
    eprintln!();
    eprintln!("Write jittered color swatches for every row of an R,G,B,Label table.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  table.csv      Delimited table; first line is a header by default");
    eprintln!("  config.json    Optional configuration (see generate_config)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  VERBOSE=1      Print the full export report as JSON");
    eprintln!("  RUST_LOG=debug Log every written image");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} color_tones_dataset.csv", program_name);
    eprintln!("  VERBOSE=1 {} colors.csv export.json", program_name);
}
