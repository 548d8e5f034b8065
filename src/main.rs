use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use dirtree::cli::Cli;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let roots = cli.roots();

    let failed = dirtree::run(&roots, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
