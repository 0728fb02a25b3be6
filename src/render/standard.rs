use super::{display_name, RenderConfig};
use crate::tree::Node;

const BRANCH: &str = "\u{251c}\u{2500}\u{2500}"; // ├──
const LAST_BRANCH: &str = "\u{2514}\u{2500}\u{2500}"; // └──
const PIPE_SEGMENT: &str = "\u{2502}   "; // │
const BLANK_SEGMENT: &str = "    ";

/// Render the connector tree: the root name bare, then every descendant
/// depth-first as `{prefix}{connector}{name}`.
pub fn render_standard(root: &Node, config: &RenderConfig) -> Vec<String> {
    let mut lines = Vec::with_capacity(root.node_count());
    lines.push(display_name(root, config));
    push_children(root, "", config, &mut lines);
    lines
}

fn push_children(node: &Node, prefix: &str, config: &RenderConfig, lines: &mut Vec<String>) {
    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        lines.push(format!("{prefix}{connector}{}", display_name(child, config)));

        if !child.children().is_empty() {
            // Guide line continues only while siblings still follow.
            let segment = if is_last { BLANK_SEGMENT } else { PIPE_SEGMENT };
            let child_prefix = format!("{prefix}{segment}");
            push_children(child, &child_prefix, config, lines);
        }
    }
}
