//! Alcohol Intake Calculator
//!
//! Works out how much of a drink to pour for a target amount of pure alcohol.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use alcohol_calc::calculator::{self, format_volume};
use alcohol_calc::models::AlcoholPercentage;
use alcohol_calc::reference::{Cautions, ReferenceTables};
use alcohol_calc::{logging, parse, web};

#[derive(Parser)]
#[command(name = "alcohol-calc")]
#[command(about = "Drink volume calculator for a target pure-alcohol intake")]
struct Cli {
    /// Tracing filter, e.g. "debug" or "alcohol_calc=trace"
    #[arg(long, global = true, env = "ALCOHOL_CALC_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate how much of a drink contains the target amount of alcohol
    Calc {
        /// Alcohol percentage of the drink (e.g. "5", "12.5%")
        #[arg(default_value = "5.0")]
        percentage: String,

        /// Target amount of pure alcohol in grams (e.g. "20", "20g")
        #[arg(default_value = "20.0")]
        grams: String,

        /// Also show the reference tables
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how much pure alcohol a given volume of a drink contains
    Content {
        /// Alcohol percentage of the drink
        percentage: String,

        /// Volume of the drink in mL (e.g. "350", "500ml")
        volume: String,
    },

    /// Print typical alcohol percentages and intake guidance
    Reference,

    /// Serve the calculator as a web page
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = "127.0.0.1:8501")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Calc { verbose: true, .. });
    logging::init(cli.log_level.as_deref(), verbose);

    match cli.command {
        Commands::Calc {
            percentage,
            grams,
            verbose,
        } => {
            let calc = calculator::calculate_raw(
                parse::parse_percentage(&percentage)?,
                parse::parse_grams(&grams)?,
            )?;
            println!("{}", calc);

            if verbose {
                println!("{}", ReferenceTables);
            }
            print!("{}", Cautions);
        }

        Commands::Content { percentage, volume } => {
            let percentage = AlcoholPercentage::new(parse::parse_percentage(&percentage)?)?;
            let volume = parse::parse_volume_ml(&volume)?;

            let grams = calculator::pure_alcohol_grams(percentage.value(), volume);
            println!(
                "{} of a {} drink contains {:.1} g of pure alcohol",
                format_volume(volume),
                percentage,
                grams
            );
        }

        Commands::Reference => {
            println!("{}", ReferenceTables);
            print!("{}", Cautions);
        }

        Commands::Serve { addr } => {
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;
            tracing::info!("Serving calculator on http://{}", addr);
            axum::serve(listener, web::router())
                .await
                .context("Web server stopped")?;
        }
    }

    Ok(())
}
