//! Tree rendering into printable lines.

mod fancy;
mod standard;

use crate::tree::Node;
use crossterm::style::{style, Stylize};

pub use fancy::{render_fancy, CELL_WIDTH};
pub use standard::render_standard;

/// Configuration for the rendering pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    /// Whether to emit ANSI color styling.
    pub use_color: bool,
}

/// Which layout to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Indented `├──`/`└──` connector tree.
    #[default]
    Standard,
    /// Files as a row of fixed-width cells joined into a trunk, per level.
    Fancy,
}

/// Render `root` in the given mode. Rendering never touches the filesystem,
/// so the same tree always yields the same lines.
pub fn render(root: &Node, mode: Mode, config: &RenderConfig) -> Vec<String> {
    match mode {
        Mode::Standard => render_standard(root, config),
        Mode::Fancy => render_fancy(root, config),
    }
}

/// Escape control characters so names cannot inject terminal sequences.
pub fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Sanitized name of `node`, bold blue for directories when color is on.
fn display_name(node: &Node, config: &RenderConfig) -> String {
    let safe_name = sanitize_terminal_text(&node.name);
    paint_dir(safe_name, node.is_dir(), config)
}

fn paint_dir(text: String, is_dir: bool, config: &RenderConfig) -> String {
    if config.use_color && is_dir {
        style(text).blue().bold().to_string()
    } else {
        text
    }
}
