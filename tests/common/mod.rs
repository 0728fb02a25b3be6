#![allow(dead_code)]

use bettertree::render::RenderConfig;
use bettertree::tree::{Node, TreeConfig};
use std::fs;
use tempfile::TempDir;

/// TreeConfig with the given depth and no hidden entries or ignores.
pub fn tree_config(max_depth: usize) -> TreeConfig {
    TreeConfig {
        max_depth,
        ..TreeConfig::default()
    }
}

/// RenderConfig with color disabled.
pub fn no_color() -> RenderConfig {
    RenderConfig { use_color: false }
}

/// RenderConfig with color enabled.
pub fn color() -> RenderConfig {
    RenderConfig { use_color: true }
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Names of a node's direct children, sorted (enumeration order is not stable).
pub fn child_names(node: &Node) -> Vec<String> {
    let mut names: Vec<String> = node.children().iter().map(|c| c.name.clone()).collect();
    names.sort();
    names
}

/// Find a direct child by name.
pub fn child<'a>(node: &'a Node, name: &str) -> &'a Node {
    node.children()
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("no child named {name:?} under {:?}", node.name))
}
