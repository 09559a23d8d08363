pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;

#[derive(Parser)]
#[command(name = "gpuplan")]
#[command(about = "Monthly GPU infrastructure cost planner for LLM serving", long_about = None)]
struct Cli {
    /// Pricing file (JSON). Defaults to the user config dir, then built-in tables
    #[arg(long, global = true)]
    pricing: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List models in the pricing tables
    Models,
    /// Estimate monthly cost for a number of concurrent users
    Plan {
        /// Model id, e.g. t-lite
        #[arg(long)]
        model: String,
        /// Concurrent users
        #[arg(long, allow_hyphen_values = true)]
        users: i64,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
        /// Also print the assumptions behind the figures
        #[arg(long)]
        assumptions: bool,
    },
    /// Find the cheapest server combination for an exact GPU count
    Bundle {
        /// Model id whose server catalog to use
        #[arg(long)]
        model: String,
        /// Required GPUs
        #[arg(long, allow_hyphen_values = true)]
        gpus: i64,
        /// Print the bundle as JSON
        #[arg(long)]
        json: bool,
    },
    /// Plan a range of user counts
    Sweep {
        #[arg(long)]
        model: String,
        #[arg(long, default_value = "5")]
        from: u64,
        #[arg(long, default_value = "500")]
        to: u64,
        #[arg(long, default_value = "5")]
        step: u64,
        /// Print the plans as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the active pricing tables to a file for editing
    ExportPricing {
        /// Destination path
        #[arg(long)]
        output: PathBuf,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let pricing = commands::load_pricing(cli.pricing)?;

    match cli.command {
        Commands::Models => commands::models(&pricing),
        Commands::Plan {
            model,
            users,
            json,
            assumptions,
        } => commands::plan(&pricing, model, users, json, assumptions),
        Commands::Bundle { model, gpus, json } => commands::bundle(&pricing, &model, gpus, json),
        Commands::Sweep {
            model,
            from,
            to,
            step,
            json,
        } => commands::sweep(&pricing, &model, from, to, step, json),
        Commands::ExportPricing { output } => commands::export_pricing(&pricing, &output),
    }
}
