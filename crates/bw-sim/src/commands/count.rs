use std::error::Error;

use bw_gen::total_states;
use clap::Args;

#[derive(Args, Debug)]
pub struct CountArgs {
    /// Number of blocks.
    pub blocks: usize,
}

pub fn run(args: &CountArgs) -> Result<(), Box<dyn Error>> {
    match total_states(args.blocks) {
        Some(count) => println!("{count}"),
        None => println!("overflow"),
    }
    Ok(())
}
