// logmask/src/main.rs
//! logmask entry point.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use logmask::cli::{Cli, Commands};
use logmask::commands::{mask::run_mask, templates::run_templates};
use logmask::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.quiet {
        Some(LevelFilter::Off)
    } else if args.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    match &args.command {
        Commands::Mask(cmd) => run_mask(cmd),
        Commands::Templates => run_templates(&mut std::io::stdout().lock()),
    }
}
