//! CLI entry point for photomosaic generation

use clap::Parser;
use tesserae::io::cli::{Cli, MosaicRunner};

fn main() -> tesserae::Result<()> {
    let cli = Cli::parse();
    let runner = MosaicRunner::new(cli);
    runner.process()
}
