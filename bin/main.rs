use anyhow::Error as Anyhow;
use clap::Parser;

mod applet;
mod backend;
mod cli;
mod config;

fn main() -> Result<(), Anyhow> {
    cli::Cli::parse().execute()
}
