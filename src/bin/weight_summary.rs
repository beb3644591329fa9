use clap::Parser;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use weightgen::dat;
use weightgen::io_utils::{io_cli_error, simple_cli_error, weight_cli_error};
use weightgen::logging;
use weightgen::weights::SUM_TOLERANCE;

#[derive(Parser)]
struct Args {
    /// Weight file to check
    input: PathBuf,
    /// Allowed deviation of a row sum from 1
    #[arg(long, default_value_t = SUM_TOLERANCE)]
    tolerance: f64,
    /// Only print summary totals
    #[arg(long)]
    summary: bool,
    /// Optional CSV output path for per-row results
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Optional JSON output path for per-row results
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Serialize)]
struct Record {
    row: usize,
    sum: f64,
    min: f64,
    max: f64,
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

    if !(args.tolerance >= 0.0) {
        return Err(simple_cli_error("tolerance must be a non-negative number").into());
    }

    let matrix = dat::load(&args.input)
        .map_err(|e| weight_cli_error("reading weight file", &args.input, e))?;

    if let Some((objectives, rows)) = dat::parse_file_name(&args.input) {
        if objectives != matrix.objectives() || rows != matrix.len() {
            return Err(simple_cli_error(&format!(
                "'{}' names {} objectives and {} rows but holds {} and {}",
                args.input.display(),
                objectives,
                rows,
                matrix.objectives(),
                matrix.len()
            ))
            .into());
        }
    } else {
        tracing::warn!(path = %args.input.display(), "file name does not follow W{{obj}}D_{{rows}}.dat");
    }

    matrix
        .check_simplex(args.tolerance)
        .map_err(|e| weight_cli_error("checking weights", &args.input, e))?;

    let records: Vec<Record> = matrix
        .rows()
        .iter()
        .enumerate()
        .map(|(idx, row)| Record {
            row: idx + 1,
            sum: row.iter().sum(),
            min: row.iter().copied().fold(f64::INFINITY, f64::min),
            max: row.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        })
        .collect();

    if let Some(p) = &args.csv {
        let f = File::create(p).map_err(|e| io_cli_error("creating csv", p, e))?;
        let mut wtr = csv::Writer::from_writer(f);
        for r in &records {
            wtr.serialize(r)?;
        }
        wtr.flush()?;
    }
    if let Some(path) = &args.json {
        let mut f = File::create(path).map_err(|e| io_cli_error("creating json", path, e))?;
        serde_json::to_writer_pretty(&mut f, &records)?;
        f.write_all(b"\n")?;
    }

    if !args.summary {
        for r in &records {
            println!(
                "row {}: sum {:.8} min {:.8} max {:.8}",
                r.row, r.sum, r.min, r.max
            );
        }
    }

    // extreme vectors put all weight on a single objective
    let corners = matrix
        .rows()
        .iter()
        .filter(|row| row.iter().any(|&v| (v - 1.0).abs() <= args.tolerance))
        .count();

    println!("#objectives: {}", matrix.objectives());
    println!("#rows: {}", matrix.len());
    println!("#corner vectors: {}", corners);
    println!("simplex check: ok");

    Ok(())
}
