//! Generate the default configuration file
//!
//! Creates a JSON config with all default parameters

use name_colors::NamingConfig;
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} config/naming.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    // Create parent directory if needed
    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = NamingConfig::default();

    match config.to_json_file(output_path) {
        Ok(_) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!("  Default strategy: {}", config.classification.default_strategy);
            eprintln!("  Export root: {}", config.export.output_root.display());
            eprintln!(
                "  Export: {} variants per row, jitter ±{}, {}x{} {}",
                config.export.variants_per_row,
                config.export.jitter,
                config.export.image_width,
                config.export.image_height,
                config.export.format.extension()
            );
            eprintln!("  Announce cooldown: {} ms", config.announce.cooldown_ms);
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}
