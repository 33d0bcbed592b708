//! CLI entry point for border-matching tile assembly

use clap::Parser;
use tileseam::io::cli::{Cli, Runner};

// The report is the program's output
#[allow(clippy::print_stdout)]
fn main() -> tileseam::Result<()> {
    let cli = Cli::parse();
    let report = Runner::new(cli).run()?;
    println!("{report}");
    Ok(())
}
