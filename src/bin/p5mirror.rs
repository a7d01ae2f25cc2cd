//! p5mirror CLI Binary
//!
//! Mirrors a p5.js web editor account into `output/<username>/`.

use anyhow::Context;
use clap::Parser;
use p5mirror::logging::init_logging;
use p5mirror::tooling::cli::{Cli, CliContext};
use std::process;

fn run(cli: &Cli) -> anyhow::Result<String> {
    let context = CliContext::new(cli).context("Error loading configuration")?;
    init_logging(Some(context.logging_config())).context("Error initializing logging")?;
    let output = context
        .execute(cli)
        .with_context(|| format!("Error mirroring projects for {}", cli.username))?;
    Ok(output)
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(1);
        }
    }
}
