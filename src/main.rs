//! CLI entry point for sample-driven binary texture synthesis

use clap::Parser;
use convchain::io::cli::{Cli, FileProcessor};

fn main() -> convchain::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
