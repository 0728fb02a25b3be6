use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use super::{Node, TraversalError, TreeConfig};

/// A directory entry kept after filtering, before recursion.
struct RawEntry {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Build a GlobSet from user patterns. Invalid patterns are skipped with a warning.
pub fn build_ignore_set(user_patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    let mut invalid = Vec::new();
    for pattern in user_patterns {
        match Glob::new(pattern) {
            Ok(g) => {
                builder.add(g);
            }
            Err(_) => {
                invalid.push(pattern.clone());
            }
        }
    }
    if !invalid.is_empty() {
        warn!("invalid ignore pattern(s), skipped: {:?}", invalid);
    }
    builder.build().unwrap_or_else(|e| {
        warn!("failed to build ignore set: {}", e);
        GlobSet::empty()
    })
}

/// Build the tree rooted at `root`, labelling the root with the path as given.
pub fn build_tree(root: &Path, config: &TreeConfig) -> Result<Node, TraversalError> {
    let mut node = build_node(root, config.max_depth, config)?;
    node.name = root.display().to_string();
    Ok(node)
}

/// Build the subtree for `path` with `remaining_depth` levels left to enumerate.
///
/// A budget of 0 yields a childless directory without touching the filesystem.
/// Children keep the order the directory enumeration produced them in, which
/// varies across platforms and filesystems. The first unreadable directory
/// aborts the whole build.
pub fn build_node(
    path: &Path,
    remaining_depth: usize,
    config: &TreeConfig,
) -> Result<Node, TraversalError> {
    let name = entry_name(path);
    if remaining_depth == 0 {
        return Ok(Node::directory(name, Vec::new()));
    }

    let entries = read_entries(path, config)?;
    let mut children = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.is_dir {
            let mut child = build_node(&entry.path, remaining_depth - 1, config)?;
            child.name = entry.name;
            children.push(child);
        } else {
            children.push(Node::file(entry.name));
        }
    }
    Ok(Node::directory(name, children))
}

/// Enumerate the direct entries of `dir`, dropping hidden and ignored names.
///
/// The walkdir iterator (and its directory handle) is consumed and dropped
/// before this returns, so no handle outlives its directory's enumeration.
fn read_entries(dir: &Path, config: &TreeConfig) -> Result<Vec<RawEntry>, TraversalError> {
    let meta = fs::metadata(dir).map_err(|source| TraversalError::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(TraversalError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut entries = Vec::new();
    for entry_result in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry_result.map_err(|e| walk_error(dir, e))?;

        let name = entry.file_name().to_string_lossy().to_string();
        if !config.show_hidden && name.starts_with('.') {
            trace!(name = %name, "skipping hidden entry");
            continue;
        }
        if config.ignore_patterns.is_match(&name) {
            trace!(name = %name, "skipping ignored entry");
            continue;
        }

        let is_dir = if entry.file_type().is_dir() {
            true
        } else if entry.path_is_symlink() && config.follow_symlinks {
            // Dangling links stay files.
            fs::metadata(entry.path())
                .map(|m| m.is_dir())
                .unwrap_or(false)
        } else {
            false
        };

        entries.push(RawEntry {
            name,
            path: entry.into_path(),
            is_dir,
        });
    }

    debug!(path = %dir.display(), entries = entries.len(), "enumerated directory");
    Ok(entries)
}

/// Unwrap a walkdir error to its OS error, so the message carries the path
/// and the reason once each.
fn walk_error(dir: &Path, e: walkdir::Error) -> TraversalError {
    let path = e
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.to_path_buf());
    // Symlink loops carry no io error; they only arise when following links.
    let fallback = e.to_string();
    let source = e
        .into_io_error()
        .unwrap_or_else(|| io::Error::other(fallback));
    TraversalError::Read { path, source }
}

/// Base name of `path`, falling back to the whole path for `/`, `.` and the like.
fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
