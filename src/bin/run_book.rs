//! Run every client in a data directory and write a summary CSV
//!
//! Usage: cargo run --bin run_book -- [data_dir] [output.csv]

use anyhow::Context;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;
use wealth_advisory::{client::DEFAULT_DATA_PATH, ClientBook, EngineConfig, ScenarioRunner};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let data_dir = args.next().unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());
    let output_path = args.next().unwrap_or_else(|| "book_summary.csv".to_string());

    let start = Instant::now();
    println!("Loading clients from {}...", data_dir);
    let book = ClientBook::load_from(&data_dir)
        .with_context(|| format!("failed to load clients from {}", data_dir))?;
    println!("Loaded {} clients in {:?}", book.len(), start.elapsed());

    let runner = ScenarioRunner::new(EngineConfig::default());
    let start_year = ScenarioRunner::current_year();
    let clients = book.to_vec();

    println!("Running projections...");
    let run_start = Instant::now();
    let reports = runner.run_batch(&clients, start_year);
    println!("Projections complete in {:?}", run_start.elapsed());

    // Summary rows are formatted in parallel, written in client order
    let rows: Vec<String> = reports
        .par_iter()
        .map(|r| {
            let final_value = r
                .curve
                .as_ref()
                .and_then(|c| c.final_value())
                .map(|v| format!("{:.2}", v))
                .unwrap_or_default();
            let (alignment, category) = match &r.alignment {
                Some(a) => (format!("{:.2}", a.alignment), a.category.to_string()),
                None => (String::new(), String::new()),
            };
            let goals_met = r.suggestions.iter().filter(|s| s.is_achieved()).count();
            let monthly_total: i64 = r
                .suggestions
                .iter()
                .filter_map(|s| s.monthly_suggestion)
                .filter(|&m| m > 0)
                .sum();
            format!(
                "{},{},{},{},{},{}",
                r.client_id, final_value, alignment, category, goals_met, monthly_total
            )
        })
        .collect();

    let mut file = BufWriter::new(
        File::create(&output_path).with_context(|| format!("failed to create {}", output_path))?,
    );
    writeln!(file, "ClientId,FinalValue,AlignmentPct,Category,GoalsMet,MonthlySuggestionTotal")?;
    for row in &rows {
        writeln!(file, "{}", row)?;
    }
    file.flush()?;

    println!("Output written to {}", output_path);
    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
