use anyhow::Result;
use clap::Parser;

use latency_report::cli;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    cli::run(args)
}
