use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "weather-report")]
#[command(about = "Human-readable reports over daily temperature CSV data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the multi-day overview report
    Summary {
        #[arg(short, long, help = "Input CSV file with date,min,max rows")]
        input: PathBuf,
    },

    /// Print the day-by-day breakdown report
    Daily {
        #[arg(short, long, help = "Input CSV file with date,min,max rows")]
        input: PathBuf,
    },
}
