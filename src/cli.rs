use std::path::PathBuf;

use clap::Parser;

/// Print directories as indented trees with box-drawing connectors.
#[derive(Parser, Debug)]
#[command(name = "dirtree", version)]
pub struct Cli {
    /// Root directories to print, one tree per root, in order.
    /// Defaults to `src` then `include` when none are given.
    pub roots: Vec<PathBuf>,
}

impl Cli {
    pub fn roots(&self) -> Vec<PathBuf> {
        if self.roots.is_empty() {
            vec![PathBuf::from("src"), PathBuf::from("include")]
        } else {
            self.roots.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_src_then_include() {
        let cli = Cli::parse_from(["dirtree"]);
        let roots = cli.roots();
        assert_eq!(roots, vec![PathBuf::from("src"), PathBuf::from("include")]);
    }

    #[test]
    fn explicit_roots_replace_defaults() {
        let cli = Cli::parse_from(["dirtree", "a", "b", "c"]);
        let roots = cli.roots();
        assert_eq!(
            roots,
            vec![PathBuf::from("a"), PathBuf::from("b"), PathBuf::from("c")]
        );
    }
}
