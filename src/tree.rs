use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// One pending entry of the walk: where it lives, the continuation prefix
/// accumulated from its ancestors, and whether it closes its sibling list.
pub struct TreeItem {
    pub path: PathBuf,
    pub prefix: String,
    pub is_dir: bool,
    pub last: bool,
}

/// Immediate children of `dir`, directories first, each partition sorted
/// by name so the output is stable across platforms.
fn ordered_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let listing = fs::read_dir(dir).with_context(|| format!("cannot list {}", dir.display()))?;
    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in listing {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        } else {
            files.push(path);
        }
    }
    dirs.sort();
    files.sort();
    dirs.extend(files);
    Ok(dirs)
}

fn items_of(dir: &Path, prefix: &str) -> Result<Vec<TreeItem>> {
    let entries = ordered_entries(dir)?;
    let count = entries.len();
    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(i, path)| {
            let is_dir = path.is_dir();
            TreeItem {
                path,
                prefix: prefix.to_string(),
                is_dir,
                last: i + 1 == count,
            }
        })
        .collect())
}

/// Writes the tree under `root` to `out`, one line per entry, depth-first.
/// The root's own name is not printed, only its children.
///
/// The walk is iterative with an explicit stack, so depth is bounded by
/// heap rather than by the call stack. Lines are written as the walk
/// proceeds; a listing failure partway through leaves the portion already
/// walked on the output and aborts the rest of this root.
pub fn print_tree(root: &Path, out: &mut impl Write) -> Result<()> {
    let mut stack = items_of(root, "")?;
    stack.reverse();
    while let Some(item) = stack.pop() {
        let connector = if item.last { "└── " } else { "├── " };
        writeln!(
            out,
            "{}{}{}",
            item.prefix,
            connector,
            item.path.file_name().unwrap_or_default().to_string_lossy()
        )?;
        if item.is_dir {
            let sub_prefix = if item.last {
                format!("{}    ", item.prefix)
            } else {
                format!("{}│   ", item.prefix)
            };
            let mut children = items_of(&item.path, &sub_prefix)?;
            children.reverse();
            stack.append(&mut children);
        }
    }
    Ok(())
}
