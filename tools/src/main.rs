//! dataset-gen: one-shot synthetic dataset generator.
//!
//! Usage:
//!   dataset-gen [--rows N] [--output PATH] [--seed S]
//!
//! Defaults: 1,500,000 rows, data/transactions.csv, seed 42.

use anyhow::Result;
use explorer_core::{dataset, generator};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let rows = parse_arg(&args, "--rows", 1_500_000i64);
    let seed = parse_arg(&args, "--seed", 42u64);
    let output = args
        .windows(2)
        .find(|w| w[0] == "--output")
        .map(|w| w[1].clone())
        .unwrap_or_else(|| "data/transactions.csv".to_string());
    let out_path = Path::new(&output);

    log::info!("run parameters: rows={rows} seed={seed} output={output}");

    println!("Generating {rows} rows (seed {seed}) ...");
    let t_gen = Instant::now();
    let table = generator::generate(rows, seed)?;
    println!("  generated in {:.1}s", t_gen.elapsed().as_secs_f64());

    println!("Writing to {output} ...");
    let t_write = Instant::now();
    table.write_csv(out_path)?;
    println!("  written in {:.1}s", t_write.elapsed().as_secs_f64());

    let size_mb = fs::metadata(out_path)?.len() as f64 / (1024.0 * 1024.0);
    println!(
        "Done — {} rows, {} columns, {size_mb:.1} MB",
        table.len(),
        dataset::COLUMN_COUNT
    );
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
