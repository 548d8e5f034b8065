pub mod cli;
pub mod tree;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use tree::print_tree;

/// Prints one tree per root, in order. Each root gets its own error
/// boundary: a failure under one root is reported through `errors` and the
/// remaining roots are still walked.
///
/// Returns the number of roots that failed.
pub fn run(roots: &[PathBuf], out: &mut impl Write, errors: &mut impl Write) -> Result<usize> {
    let mut failed = 0;
    for root in roots {
        if let Err(err) = print_tree(root, out) {
            writeln!(errors, "dirtree: {:#}", err)?;
            failed += 1;
        }
    }
    Ok(failed)
}
