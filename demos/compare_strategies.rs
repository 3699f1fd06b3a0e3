//! Compare every naming strategy on a set of colors
//!
//! Usage: cargo run --example compare_strategies [#RRGGBB ...]
//! Without arguments a built-in sample set is used.

use name_colors::{identify, RgbSample, Strategy};
use std::env;

const DEFAULT_SAMPLES: [RgbSample; 10] = [
    RgbSample::new(200, 0, 0),
    RgbSample::new(128, 0, 0),
    RgbSample::new(255, 165, 0),
    RgbSample::new(240, 230, 140),
    RgbSample::new(34, 139, 34),
    RgbSample::new(0, 128, 128),
    RgbSample::new(0, 0, 128),
    RgbSample::new(128, 0, 128),
    RgbSample::new(128, 128, 128),
    RgbSample::new(250, 250, 250),
];

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let samples: Vec<RgbSample> = if args.is_empty() {
        DEFAULT_SAMPLES.to_vec()
    } else {
        args.iter()
            .filter_map(|arg| match RgbSample::from_hex(arg) {
                Ok(sample) => Some(sample),
                Err(e) => {
                    eprintln!("Skipping '{}': {}", arg, e);
                    None
                }
            })
            .collect()
    };

    if samples.is_empty() {
        eprintln!("No valid colors given");
        std::process::exit(1);
    }

    print!("{:<10}", "Color");
    for strategy in Strategy::ALL {
        print!("{:<22}", strategy.name());
    }
    println!();
    println!("{}", "-".repeat(10 + 22 * Strategy::ALL.len()));

    for sample in samples {
        print!("{:<10}", sample.to_hex());
        for strategy in Strategy::ALL {
            print!("{:<22}", identify(sample, strategy));
        }
        println!();
    }
}
