//! SCPI Simulator CLI
//!
//! Command-line interface for running SCPI investment simulations

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;

use scpi_simulator::export::{export_filename, write_projections_csv};
use scpi_simulator::{
    OwnershipMode, SavingsFrequency, ScenarioRunner, ScpiKind, Settings, SimulationRequest, SimulationResults,
};

#[derive(Parser)]
#[command(name = "scpi-sim")]
#[command(about = "SCPI investment simulator", long_about = None)]
struct Cli {
    /// Load the SCPI catalog from this CSV file
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured SCPIs
    List,
    /// Show the characteristics of one SCPI
    Info {
        /// SCPI identifier (comete, activimmo)
        scpi: String,
    },
    /// Check a simulation request without running it
    Validate(RequestArgs),
    /// Run a simulation
    Simulate {
        #[command(flatten)]
        request: RequestArgs,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Write yearly projections to this CSV file ("auto" picks a name)
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Compare several dividend reinvestment rates
    Compare {
        #[command(flatten)]
        request: RequestArgs,

        /// Reinvestment rates to compare
        #[arg(long, value_delimiter = ',', default_values_t = vec![0.0, 0.5, 1.0])]
        rates: Vec<f64>,
    },
}

#[derive(Args)]
struct RequestArgs {
    /// SCPI identifier (comete, activimmo)
    #[arg(long, default_value = "comete")]
    scpi: String,

    /// Investment type (pleine_propriete/full, nue_propriete/bare)
    #[arg(long, default_value = "pleine_propriete")]
    ownership: String,

    /// Initial investment in euros
    #[arg(long)]
    amount: f64,

    /// Duration in years
    #[arg(long)]
    years: u32,

    /// Programmed savings amount per contribution
    #[arg(long)]
    savings: Option<f64>,

    /// Programmed savings frequency (mensuelle, trimestrielle, semestrielle)
    #[arg(long)]
    frequency: Option<String>,

    /// Fraction of dividends reinvested (0-1)
    #[arg(long)]
    reinvest: Option<f64>,
}

impl RequestArgs {
    fn to_request(&self) -> Result<SimulationRequest> {
        let scpi: ScpiKind = self.scpi.parse()?;
        let ownership: OwnershipMode = self.ownership.parse()?;

        let mut request = SimulationRequest::new(scpi, ownership, self.amount, self.years);
        request.programmed_savings_amount = self.savings;
        request.programmed_savings_frequency = self
            .frequency
            .as_deref()
            .map(str::parse::<SavingsFrequency>)
            .transpose()
            .map_err(anyhow::Error::msg)?;
        request.dividend_reinvestment_rate = self.reinvest;

        request.check_fields().map_err(anyhow::Error::msg)?;
        Ok(request)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::from_env().context("Invalid configuration")?;
    if let Some(path) = &cli.catalog {
        settings.catalog_path = Some(path.clone());
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(settings.log_level.as_str())).init();

    let simulator = settings.simulator().context("Unable to build the SCPI catalog")?;

    match cli.command {
        Commands::List => {
            println!("{:<10} {:<18} {:>8} {:>10} {:>7} {:>7}  {}", "Id", "Name", "Price", "Minimum", "Yield", "Appr.", "Types");
            println!("{}", "-".repeat(90));
            for info in simulator.list_scpis() {
                let types: Vec<_> = info.supported_investment_types.iter().map(|t| t.as_str()).collect();
                println!(
                    "{:<10} {:<18} {:>8.2} {:>10.2} {:>6.2}% {:>6.2}%  {}",
                    info.scpi_type,
                    info.name,
                    info.price_per_share,
                    info.minimum_investment,
                    info.annual_yield * 100.0,
                    info.capital_appreciation * 100.0,
                    types.join(", "),
                );
            }
        }
        Commands::Info { scpi } => {
            let kind: ScpiKind = scpi.parse()?;
            let info = simulator.get_scpi_info(kind)?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Commands::Validate(args) => {
            let request = args.to_request()?;
            simulator.validate_simulation_request(&request)?;
            println!("Parameters are valid");
        }
        Commands::Simulate { request, json, csv } => {
            let request = request.to_request()?;
            let results = simulator.calculate_simulation(&request)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_results(&results);
            }

            if let Some(path) = csv {
                let path = if path.as_os_str() == "auto" {
                    PathBuf::from(export_filename(&results, chrono::Local::now().date_naive(), "csv"))
                } else {
                    path
                };
                let file = File::create(&path).with_context(|| format!("Unable to create {}", path.display()))?;
                write_projections_csv(&results, file)?;
                println!("\nYearly projections written to: {}", path.display());
            }
        }
        Commands::Compare { request, rates } => {
            let request = request.to_request()?;
            let runner = ScenarioRunner::with_simulator(simulator);

            println!("{:>8} {:>14} {:>14} {:>14} {:>12} {:>9}", "Reinvest", "Invested", "Final capital", "Dividends", "Shares", "Yield");
            println!("{}", "-".repeat(76));
            for (rate, result) in rates.iter().zip(runner.compare_reinvestment(&request, &rates)) {
                match result {
                    Ok(results) => {
                        let s = results.summary();
                        println!(
                            "{:>7.0}% {:>14.2} {:>14.2} {:>14.2} {:>12.4} {:>8.2}%",
                            rate * 100.0,
                            s.total_invested,
                            s.final_capital_value,
                            s.total_dividends_received,
                            s.final_shares,
                            s.annual_yield,
                        );
                    }
                    Err(e) => println!("{:>7.0}% {}", rate * 100.0, e),
                }
            }
        }
    }

    Ok(())
}

fn print_results(results: &SimulationResults) {
    println!("SCPI: {} ({})", results.scpi_type, results.investment_type);
    println!("  Initial investment: €{:.2} ({} shares at €{:.2})", results.initial_investment, results.initial_shares, results.price_per_share);
    println!("  Duration: {} years", results.duration_years);
    println!();

    println!("{:>4} {:>12} {:>12} {:>12} {:>12} {:>10} {:>14} {:>14}",
        "Year", "Dividends", "Reinvested", "Savings", "Shares", "Share val", "Capital", "Cum. div.");
    println!("{}", "-".repeat(98));
    for row in &results.yearly_projections {
        println!("{:>4} {:>12.2} {:>12.2} {:>12.2} {:>12.4} {:>10.2} {:>14.2} {:>14.2}",
            row.year,
            row.dividends_received,
            row.dividends_reinvested,
            row.programmed_savings,
            row.total_shares,
            row.share_value,
            row.total_capital_value,
            row.cumulative_dividends,
        );
    }

    println!("\nSummary:");
    println!("  Total invested: €{:.2}", results.total_invested);
    println!("  Final capital value: €{:.2}", results.final_capital_value);
    println!("  Total dividends: €{:.2}", results.total_dividends_received);
    println!("  Total return: €{:.2}", results.total_return);
    println!("  Average annual yield: {:.2}%", results.annual_yield);

    println!("\nRisks:");
    for risk in &results.risks {
        println!("  - {}", risk);
    }
}
