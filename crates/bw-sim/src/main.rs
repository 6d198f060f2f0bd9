use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    count::{self, CountArgs},
    generate::{self, GenerateArgs},
    place::{self, PlaceArgs},
    run::{self, RunArgs},
    version::{self, VersionArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "bw-sim", about = "Uniform blocks-world state generator CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print uniformly random configurations.
    Generate(GenerateArgs),
    /// Execute a generator run from a YAML configuration and write its artefacts.
    Run(RunArgs),
    /// Place a configuration in the world model and print its towers.
    Place(PlaceArgs),
    /// Print the exact number of configurations for a block count.
    Count(CountArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => generate::run(&args),
        Command::Run(args) => run::run(&args),
        Command::Place(args) => place::run(&args),
        Command::Count(args) => count::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
