use std::error::Error;
use std::path::PathBuf;

use bw_core::{BlockId, Configuration};
use bw_world::{BlocksWorld, StartConfig};
use clap::Args;
use serde_json::json;

#[derive(Args, Debug)]
pub struct PlaceArgs {
    /// Configuration such as `0,1,0` or `"0 1 0"`; eight blocks on the table when
    /// neither this nor `--file` is given.
    pub config: Option<String>,
    /// File of whitespace separated support numbers.
    #[arg(long, conflicts_with = "config")]
    pub file: Option<PathBuf>,
    /// Emit JSON instead of one line per tower.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &PlaceArgs) -> Result<(), Box<dyn Error>> {
    let config: Configuration = match (&args.config, &args.file) {
        (Some(text), _) => text.parse()?,
        (None, Some(path)) => StartConfig::File(path.clone()).resolve()?,
        (None, None) => StartConfig::Default.resolve()?,
    };
    let world = BlocksWorld::from_configuration(&config)?;
    let towers = world.towers();

    if args.json {
        let stacks = towers
            .iter()
            .map(|tower| world.stack_number(tower[0]))
            .collect::<Result<Vec<_>, _>>()?;
        let body = json!({
            "configuration": config.as_slice(),
            "towers": towers
                .iter()
                .map(|tower| tower.iter().map(BlockId::as_raw).collect::<Vec<_>>())
                .collect::<Vec<_>>(),
            "stacks": stacks,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    for tower in &towers {
        let stack = world.stack_number(tower[0])?;
        let names: Vec<String> = tower.iter().map(BlockId::to_string).collect();
        println!("stack {stack}: {}", names.join(" "));
    }
    Ok(())
}
