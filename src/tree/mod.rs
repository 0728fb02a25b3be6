//! Directory tree model and construction.

mod error;
pub(crate) mod walk;

use globset::GlobSet;
use std::path::Path;

pub use error::TraversalError;
pub use walk::{build_ignore_set, build_node, build_tree};

/// A single entry in the directory tree.
///
/// The canonical `name` is never rewritten by the renderers; any truncation
/// or padding happens on a separate display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Base name of the entry, or the path as given for the root.
    pub name: String,
    pub kind: NodeKind,
}

/// File or directory. Only directories own children, in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory(Vec<Node>),
}

impl Node {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
        }
    }

    pub fn directory(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory(children),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory(_))
    }

    /// Children in stored order. Always empty for files.
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::File => &[],
            NodeKind::Directory(children) => children,
        }
    }

    /// Number of edges on the longest path from this node down to a leaf.
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }
}

/// Configuration for tree building.
pub struct TreeConfig {
    /// Number of directory levels to enumerate below the root (0 = root only).
    pub max_depth: usize,
    /// Whether to include hidden entries (names starting with `.`).
    pub show_hidden: bool,
    /// Whether symlinks to directories are descended into.
    pub follow_symlinks: bool,
    /// Glob patterns matched against entry names to exclude.
    pub ignore_patterns: GlobSet,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 1,
            show_hidden: false,
            follow_symlinks: true,
            ignore_patterns: GlobSet::empty(),
        }
    }
}

/// Abstraction over tree construction so it can be swapped or mocked.
pub trait TreeBuilder {
    fn build_tree(&self, root: &Path, config: &TreeConfig) -> Result<Node, TraversalError>;
}

/// Default `TreeBuilder` that delegates to the walkdir-based implementation.
pub struct WalkdirTreeBuilder;

impl TreeBuilder for WalkdirTreeBuilder {
    fn build_tree(&self, root: &Path, config: &TreeConfig) -> Result<Node, TraversalError> {
        build_tree(root, config)
    }
}
