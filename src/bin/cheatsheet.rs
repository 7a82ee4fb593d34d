//! cheatsheet — command-line front end for the text helpers

use anyhow::Result;
use cheatsheet::{cli, load_config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    for line in cli::run(args.as_slice(), load_config())? {
        println!("{line}");
    }

    Ok(())
}
