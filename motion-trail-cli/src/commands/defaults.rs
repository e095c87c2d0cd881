//! `defaults` command: print or write the default configuration.

use std::path::PathBuf;

use clap::Args;
use motion_trail::TrailConfig;

use crate::error::CliError;

#[derive(Debug, Args)]
pub struct DefaultsArgs {
    /// Write the INI to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: DefaultsArgs) -> Result<(), CliError> {
    let config = TrailConfig::default();

    match args.output {
        Some(path) => {
            config.save(&path)?;
            println!("Wrote default config to {}", path.display());
        }
        None => print!("{}", config.to_ini_string()?),
    }

    Ok(())
}
