//! Command-line scorer for punctuation and capitalization tags

use clap::Parser;
use tagscore_cli::commands::ScoreArgs;

/// Score predicted punctuation/capitalization tags against ground truth
#[derive(Debug, Parser)]
#[command(name = "tagscore", version, about)]
struct Cli {
    #[command(flatten)]
    args: ScoreArgs,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.args.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
