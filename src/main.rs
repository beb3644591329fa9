use std::path::PathBuf;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use weightgen::config::{DEFAULT_DIVISIONS, DEFAULT_OBJECTIVES};
use weightgen::io_utils::weight_cli_error;
use weightgen::{dat, generate_with_progress, logging, GeneratorConfig};

/// Generate uniformly spaced weight vectors and save them as `W{obj}D_{n}.dat`.
#[derive(Parser)]
#[command(name = "weightgen")]
struct Args {
    /// Number of objectives (vector length)
    #[arg(long, default_value_t = DEFAULT_OBJECTIVES)]
    objectives: usize,
    /// Discrete levels per objective, at least 2
    #[arg(long, default_value_t = DEFAULT_DIVISIONS)]
    divisions: usize,
    /// Directory the weight file is written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Generate and report without writing the file
    #[arg(long)]
    dry_run: bool,
    /// Do not print the full matrix
    #[arg(long)]
    quiet: bool,
    /// Print a JSON summary instead of the text report
    #[arg(long)]
    json: bool,
    /// Show a progress bar over the candidate walk
    #[arg(long)]
    progress: bool,
}

#[derive(Serialize)]
struct Report {
    objectives: usize,
    divisions: usize,
    rows: usize,
    path: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing();
    let args = Args::parse();

    let config = GeneratorConfig::new(args.objectives, args.divisions);
    config
        .validate()
        .map_err(|e| weight_cli_error("checking configuration", &args.out_dir, e))?;

    let bar = match (args.progress, config.candidate_space()) {
        (true, Some(space)) => {
            let bar = ProgressBar::new(space);
            bar.set_style(ProgressStyle::with_template(
                "{elapsed_precise} [{bar:40}] {pos}/{len} candidates",
            )?);
            Some(bar)
        }
        _ => None,
    };

    let matrix = generate_with_progress(&config, |visited| {
        if let Some(bar) = &bar {
            if visited % 4096 == 0 {
                bar.set_position(visited);
            }
        }
    })
    .map_err(|e| weight_cli_error("generating weights", &args.out_dir, e))?;

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    if !args.json {
        println!("number of weight = {}", matrix.len());
        if !args.quiet {
            println!("weights = ");
            print!("{matrix}");
        }
    }

    let path = if args.dry_run {
        tracing::info!("dry run, skipping write");
        None
    } else {
        let target = args.out_dir.join(matrix.file_name());
        let path = dat::save(&matrix, &args.out_dir)
            .map_err(|e| weight_cli_error("writing weight file", &target, e))?;
        Some(path)
    };

    if args.json {
        let report = Report {
            objectives: config.objectives,
            divisions: config.divisions,
            rows: matrix.len(),
            path,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(path) = &path {
        println!("weights are saved to {}", path.display());
    } else {
        println!("(dry run) {} not written", matrix.file_name());
    }

    Ok(())
}
