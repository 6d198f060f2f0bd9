use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use bw_gen::UniformStateSampler;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: bwstates <nr of blocks> <seed nr> <nr of iterations>";

/// Prints uniformly random blocks-world states, one per line.
#[derive(Parser, Debug)]
#[command(name = "bwstates")]
struct Args {
    /// Number of blocks.
    blocks: usize,
    /// Seed for the random source.
    #[arg(allow_negative_numbers = true)]
    seed: i64,
    /// Number of states to print.
    iterations: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            tracing::debug!(%err, "rejected arguments");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match print_states(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bwstates: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_states(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut sampler = UniformStateSampler::new(args.blocks, args.seed as u64)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for _ in 0..args.iterations {
        writeln!(out, "{}", sampler.next_state()?)?;
    }
    out.flush()?;
    Ok(())
}
