//! `ironyang` command line entry point.

use clap::Parser;
use ironyang::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = ironyang::cli::run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
