//! Runs the complete validation study and prints the report
//!
//! ```bash
//! cargo run --release --example validate -- <DATA DIR> [PHENOTYPE] [ALPHA] [D_MAX] [FIGURES DIR]
//! ```
//!
//! Set `RUST_LOG=info` (or `debug`) to follow the individual stages.
use std::process;

use gba_validation::{pipeline, BaselineMode, ValidationConfig};

fn main() {
    simple_logger::SimpleLogger::new().env().init().unwrap();

    let mut args = std::env::args().skip(1);
    let Some(data_dir) = args.next() else {
        println!("Validate GBA centrality predictions\n\n");
        println!("Usage:\nvalidate <DATA DIR> [PHENOTYPE] [ALPHA] [D_MAX] [FIGURES DIR]");
        println!("e.g.:\nvalidate data/ MMAF 0.5 5 figures/\n");
        process::exit(1)
    };

    let mut builder = ValidationConfig::builder()
        .data_dir(data_dir)
        .baseline_mode(BaselineMode::IndependentDraws);
    if let Some(phenotype) = args.next() {
        builder = builder.phenotype(&phenotype);
    }
    if let Some(alpha) = args.next() {
        builder = builder.alpha(alpha.parse().expect("alpha must be a number"));
    }
    if let Some(d_max) = args.next() {
        builder = builder.d_max(d_max.parse().expect("d_max must be an integer"));
    }
    if let Some(figures) = args.next() {
        builder = builder.figures_dir(figures);
    }

    let config = match builder.build() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1)
        }
    };

    match pipeline::run(&config) {
        Ok(report) => println!("{report}"),
        Err(err) => {
            eprintln!("Validation failed: {err}");
            process::exit(1)
        }
    }
}
