//! Wealth Advisory CLI
//!
//! Loads client records from a data directory and prints the wealth curve,
//! goal alignment and savings suggestions for one client.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use wealth_advisory::{
    client::DEFAULT_DATA_PATH, ClientBook, ClientReport, EngineConfig, ScenarioRunner,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "wealth_advisory", version, about = "Project wealth and advise on client goals")]
struct Cli {
    /// Client id to evaluate
    #[arg(long)]
    client: u32,

    /// Directory holding clients.csv, wallets.csv, goals.csv, events.csv, insurance.csv
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    data_dir: PathBuf,

    /// JSON engine configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Nominal annual return rate
    #[arg(long, allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Last projected calendar year
    #[arg(long)]
    terminal_year: Option<i32>,

    /// Project this many years instead of through the terminal year
    #[arg(long)]
    years: Option<u32>,

    /// Suggestion horizon in months
    #[arg(long)]
    months: Option<u32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl Cli {
    fn engine_config(&self) -> anyhow::Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_json_path(path)
                .with_context(|| format!("failed to read config {}", path.display()))?,
            None => EngineConfig::default(),
        };

        if let Some(rate) = self.rate {
            config.annual_rate = rate;
        }
        if let Some(year) = self.terminal_year {
            config.terminal_year = year;
        }
        if let Some(years) = self.years {
            config.horizon_years = Some(years);
        }
        if let Some(months) = self.months {
            config.suggestion_months = months;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.engine_config()?;

    let book = ClientBook::load_from(&cli.data_dir)
        .with_context(|| format!("failed to load clients from {}", cli.data_dir.display()))?;
    let client = book.require(cli.client)?;

    let runner = ScenarioRunner::new(config);
    let report = runner.run(client, ScenarioRunner::current_year());

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_report(&client.name, runner.config(), &report),
    }

    Ok(())
}

fn print_report(name: &str, config: &EngineConfig, report: &ClientReport) {
    println!("Client {} {}", report.client_id, name);
    println!("{}", "=".repeat(40));

    match &report.curve {
        Some(curve) => {
            println!("\nWealth curve ({:.2}% annual):", config.annual_rate * 100.0);
            println!("{:>6} {:>16}", "Year", "Projected");
            println!("{}", "-".repeat(23));
            for point in curve {
                println!("{:>6} {:>16.2}", point.year, point.projected_value);
            }
        }
        None => println!("\nWealth curve: no wallet on record"),
    }

    match &report.alignment {
        Some(a) => println!("\nAlignment: {:.2}% ({})", a.alignment, a.category),
        None => println!("\nAlignment: insufficient data"),
    }

    println!("\nSuggestions ({} months):", config.suggestion_months);
    for s in &report.suggestions {
        println!("  - {}", s.message);
    }
}
