use tracing::info;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::readers::ReadingsReader;
use crate::reports::{generate_daily_summary, generate_summary};

pub fn run(cli: Cli) -> Result<()> {
    let reader = ReadingsReader::new();

    match cli.command {
        Commands::Summary { input } => {
            info!(path = %input.display(), "generating overview report");

            let table = reader.read_table(&input)?;
            let report = generate_summary(&table)?;

            // Reports carry their own trailing newline.
            print!("{}", report);
        }

        Commands::Daily { input } => {
            info!(path = %input.display(), "generating daily report");

            let table = reader.read_table(&input)?;
            let report = generate_daily_summary(&table)?;

            print!("{}", report);
        }
    }

    Ok(())
}
