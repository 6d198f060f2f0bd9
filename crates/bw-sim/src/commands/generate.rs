use std::error::Error;
use std::io::{self, BufWriter, Write};

use bw_gen::{UniformStateSampler, DEFAULT_RAW_LIMIT, STATISTICS_DISABLED};
use clap::Args;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of blocks.
    pub blocks: usize,
    /// Seed for the random source.
    #[arg(allow_negative_numbers = true)]
    pub seed: i64,
    /// Number of configurations to print.
    pub iterations: usize,
    /// Separator between entries of a configuration.
    #[arg(long, default_value = ",")]
    pub delimiter: String,
    /// Count states and print a summary to stderr when done.
    #[arg(long)]
    pub stats: bool,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let mut sampler = UniformStateSampler::new(args.blocks, args.seed as u64)?;
    if args.stats {
        sampler = sampler.track_statistics();
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for _ in 0..args.iterations {
        let state = sampler.next_state()?;
        writeln!(out, "{}", state.render(&args.delimiter))?;
    }
    out.flush()?;

    if args.stats {
        match sampler.statistics() {
            None => eprintln!("{STATISTICS_DISABLED}"),
            Some(stats) => match stats.summary(DEFAULT_RAW_LIMIT) {
                Some(summary) => eprintln!("{summary}"),
                None => eprintln!("no states sampled"),
            },
        }
    }
    Ok(())
}
