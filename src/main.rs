use clap::Parser;

use taxonium_tools::cli::Args;
use taxonium_tools::commands;

fn main() {
    let args = Args::parse();
    if let Err(e) = commands::convert::run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
