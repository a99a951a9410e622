//! Config command - print or write the effective search configuration

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::config::SearchArgs;

#[derive(Parser, Debug)]
#[command(about = "Print the search configuration as JSON")]
pub struct ConfigArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// Write the configuration to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn execute(args: ConfigArgs) -> Result<()> {
    let config = args.search.resolve()?;

    match &args.output {
        Some(path) => {
            config.to_json_file(path)?;
            println!("Configuration written to: {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&config)?),
    }

    Ok(())
}
