mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("thrp=info".parse()?)
                .add_directive("thrp_core=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Decode {
            file,
            json,
            max_size,
        } => commands::decode::run(&file, json, max_size),
        Command::Scan { dir, max_size } => commands::scan::run(&dir, max_size),
    }
}
