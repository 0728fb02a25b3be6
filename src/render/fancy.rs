//! Columnar layout: each directory level draws its files as a row of
//! fixed-width cells, joins the cells into a single trunk with box-drawing
//! glyphs, then lists its subdirectories and recurses into them.
//!
//! ```text
//! project
//!  a.txt   b.txt
//!    │       │
//!    │       │
//!    └───┬───┘
//!        │
//! src/
//!     lib.rs
//!        │
//!        │
//!        │
//!        │
//! ```
//!
//! Files and directories are not merged into one ordering: every level
//! draws all of its files first, then its subdirectories, each group in
//! stored order.

use super::{paint_dir, sanitize_terminal_text, RenderConfig};
use crate::tree::Node;

/// Display width of one file cell.
pub const CELL_WIDTH: usize = 7;
const CELL_GAP: &str = " ";
const ELLIPSIS: &str = "..";
const LEVEL_INDENT: &str = "    ";

const VERTICAL: char = '\u{2502}'; // │
const HORIZONTAL: char = '\u{2500}'; // ─
const LEFT_END: char = '\u{2514}'; // └
const RIGHT_END: char = '\u{2518}'; // ┘
const LEG_TEE: char = '\u{2534}'; // ┴
const TRUNK_TEE: char = '\u{252c}'; // ┬
const TRUNK_CROSS: char = '\u{253c}'; // ┼

/// Render the root name bare, followed by the fancy layout of its children.
pub fn render_fancy(root: &Node, config: &RenderConfig) -> Vec<String> {
    let mut lines = vec![paint_dir(
        sanitize_terminal_text(&root.name),
        root.is_dir(),
        config,
    )];
    push_level(root, 0, config, &mut lines);
    lines
}

fn push_level(node: &Node, level: usize, config: &RenderConfig, lines: &mut Vec<String>) {
    let indent = LEVEL_INDENT.repeat(level);

    let cells: Vec<String> = node
        .children()
        .iter()
        .filter(|c| !c.is_dir())
        .map(|c| fit_cell(&sanitize_terminal_text(&c.name)))
        .collect();
    for row in file_band(&cells) {
        lines.push(format!("{indent}{row}"));
    }

    for dir in node.children().iter().filter(|c| c.is_dir()) {
        let label = paint_dir(sanitize_terminal_text(&dir.name), true, config);
        lines.push(format!("{indent}{label}/"));
        push_level(dir, level + 1, config, lines);
    }
}

/// Fit `name` into exactly `CELL_WIDTH` characters: truncated with `..`
/// when too long, centered (extra space on the right) otherwise.
fn fit_cell(name: &str) -> String {
    let len = name.chars().count();
    if len > CELL_WIDTH {
        let keep = CELL_WIDTH - ELLIPSIS.len();
        let mut cell: String = name.chars().take(keep).collect();
        cell.push_str(ELLIPSIS);
        cell
    } else {
        let pad = CELL_WIDTH - len;
        let left = pad / 2;
        format!("{}{}{}", " ".repeat(left), name, " ".repeat(pad - left))
    }
}

/// Column of the midpoint of cell `index`.
fn midpoint(index: usize) -> usize {
    index * (CELL_WIDTH + CELL_GAP.len()) + CELL_WIDTH / 2
}

/// Box row, two vertical rows, connector row and trunk row for `cells`.
/// An empty level draws nothing.
fn file_band(cells: &[String]) -> Vec<String> {
    if cells.is_empty() {
        return Vec::new();
    }

    let mids: Vec<usize> = (0..cells.len()).map(midpoint).collect();
    let (connector, trunk) = connector_row(&mids);

    let legs = marks(&mids, VERTICAL);
    vec![
        cells.join(CELL_GAP).trim_end().to_string(),
        legs.clone(),
        legs,
        connector,
        marks(&[trunk], VERTICAL),
    ]
}

/// The horizontal band joining every leg into one trunk, plus the trunk column.
fn connector_row(mids: &[usize]) -> (String, usize) {
    match mids {
        [] => (String::new(), 0),
        [only] => (marks(&[*only], VERTICAL), *only),
        [left, right] => {
            let joint = (left + right) / 2;
            let mut row = blank_row(*right);
            fill(&mut row, *left, *right);
            row[*left] = LEFT_END;
            row[joint] = TRUNK_TEE;
            row[*right] = RIGHT_END;
            (row.into_iter().collect(), joint)
        }
        [first, .., last] => {
            let trunk = mids[(mids.len() - 1) / 2];
            let mut row = blank_row(*last);
            fill(&mut row, *first, *last);
            for &m in &mids[1..mids.len() - 1] {
                row[m] = LEG_TEE;
            }
            row[*first] = LEFT_END;
            row[*last] = RIGHT_END;
            row[trunk] = TRUNK_CROSS;
            (row.into_iter().collect(), trunk)
        }
    }
}

fn blank_row(last_col: usize) -> Vec<char> {
    vec![' '; last_col + 1]
}

fn fill(row: &mut [char], from: usize, to: usize) {
    for c in &mut row[from..=to] {
        *c = HORIZONTAL;
    }
}

/// A row of spaces with `glyph` at each column in `cols` (sorted ascending).
fn marks(cols: &[usize], glyph: char) -> String {
    let width = cols.last().map_or(0, |c| c + 1);
    let mut row = vec![' '; width];
    for &c in cols {
        row[c] = glyph;
    }
    row.into_iter().collect()
}
