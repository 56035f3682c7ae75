use anyhow::Result;
use clap::Parser;
use img2ico::cli::Cli;
use img2ico::convert;

fn main() -> Result<()> {
    let cli = Cli::parse();
    convert::run(&cli)
}
