use std::error::Error;
use std::fs;
use std::path::PathBuf;

use bw_gen::{GeneratorConfig, RunManifest};
use clap::Args;

const STATES_FILE: &str = "states.txt";

#[derive(Args, Debug)]
pub struct RunArgs {
    /// YAML configuration describing the generator run.
    #[arg(long)]
    pub config: PathBuf,
    /// Output directory for run artefacts.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&args.out)?;
    let config = GeneratorConfig::load(&args.config)?;
    let output = bw_gen::run(&config)?;

    fs::write(args.out.join(STATES_FILE), output.render(&config.delimiter))?;
    let manifest = RunManifest::new(&config, &output, STATES_FILE, chrono::Utc::now().to_rfc3339());
    manifest.write(&args.out.join("manifest.json"))?;

    // Keep the configuration next to its output.
    fs::copy(&args.config, args.out.join("config.yaml")).ok();

    tracing::info!(
        blocks = config.blocks,
        states = output.states.len(),
        out = %args.out.display(),
        "generator run complete"
    );
    if let Some(summary) = &manifest.statistics {
        println!("{summary}");
    }
    Ok(())
}
