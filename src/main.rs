mod cli;
mod commands;
mod config;
mod constants;
mod git;
mod process;
mod sync;
mod ui;


use anyhow::Result;
use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    commands::run(cli.command, &config)
}
