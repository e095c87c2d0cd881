//! Motion Trail CLI - render sampled motion trails to images
//!
//! This binary drives the `motion-trail` library as a small host: it moves a
//! point along a scripted path, ticks a trail once per simulated frame, and
//! writes the final frame to disk.

mod commands;
mod error;

use clap::{ArgAction, Parser, Subcommand};

use crate::error::CliError;

#[derive(Debug, Parser)]
#[command(name = "motion-trail", version, about = "Render tapering motion trails")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Simulate a moving object and render its trail to an image
    Render(commands::render::RenderArgs),

    /// Print the default trail configuration as INI
    Defaults(commands::defaults::DefaultsArgs),
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Defaults(args) => commands::defaults::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    motion_trail::logging::init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
