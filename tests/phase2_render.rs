mod common;

use bettertree::render::{render, render_standard, Mode};
use bettertree::tree::{build_tree, Node};
use common::{color, create_fixture, no_color, tree_config};

fn sample_tree() -> Node {
    Node::directory(
        "project",
        vec![
            Node::directory(
                "src",
                vec![
                    Node::file("main.rs"),
                    Node::directory("util", vec![Node::file("mod.rs")]),
                ],
            ),
            Node::directory("docs", vec![Node::file("guide.md")]),
            Node::file("Cargo.toml"),
        ],
    )
}

#[test]
fn test_example_dir_then_file() {
    let root = Node::directory("R", vec![Node::directory("A", vec![]), Node::file("b.txt")]);
    let lines = render_standard(&root, &no_color());
    assert_eq!(lines, vec!["R", "├──A", "└──b.txt"]);
}

#[test]
fn test_full_sample_layout() {
    let lines = render_standard(&sample_tree(), &no_color());
    assert_eq!(
        lines,
        vec![
            "project",
            "├──src",
            "│   ├──main.rs",
            "│   └──util",
            "│       └──mod.rs",
            "├──docs",
            "│   └──guide.md",
            "└──Cargo.toml",
        ]
    );
}

#[test]
fn test_root_has_no_connector() {
    let lines = render_standard(&sample_tree(), &no_color());
    assert_eq!(lines[0], "project");
    assert!(lines.iter().skip(1).all(|l| l.contains('├') || l.contains('└')));
}

#[test]
fn test_one_line_per_node() {
    let tree = sample_tree();
    assert_eq!(render_standard(&tree, &no_color()).len(), tree.node_count());
}

#[test]
fn test_last_child_prefix_is_blank() {
    let root = Node::directory(
        "R",
        vec![
            Node::file("first"),
            Node::directory("last", vec![Node::directory("x", vec![Node::file("y")])]),
        ],
    );
    let lines = render_standard(&root, &no_color());
    assert_eq!(lines[2], "└──last");
    assert_eq!(lines[3], "    └──x");
    assert_eq!(lines[4], "        └──y");
}

#[test]
fn test_non_last_child_prefix_has_guide() {
    let root = Node::directory(
        "R",
        vec![
            Node::directory("a", vec![Node::file("a1"), Node::file("a2")]),
            Node::file("b"),
        ],
    );
    let lines = render_standard(&root, &no_color());
    assert_eq!(lines[1], "├──a");
    assert_eq!(lines[2], "│   ├──a1");
    assert_eq!(lines[3], "│   └──a2");
    assert_eq!(lines[4], "└──b");
}

#[test]
fn test_last_is_by_position_not_kind() {
    let root = Node::directory("R", vec![Node::file("f"), Node::directory("d", vec![])]);
    let lines = render_standard(&root, &no_color());
    assert_eq!(lines, vec!["R", "├──f", "└──d"]);
}

#[test]
fn test_render_is_idempotent() {
    let tree = sample_tree();
    let first = render(&tree, Mode::Standard, &no_color());
    let second = render(&tree, Mode::Standard, &no_color());
    assert_eq!(first, second);
}

#[test]
fn test_color_styles_directory_names() {
    let lines = render_standard(&sample_tree(), &color());
    let src = lines.iter().find(|l| l.contains("src")).unwrap();
    assert!(src.starts_with("├──\u{1b}["), "connector stays unstyled: {src:?}");
    let cargo = lines.iter().find(|l| l.contains("Cargo.toml")).unwrap();
    assert_eq!(cargo, "└──Cargo.toml");
}

// --- From the filesystem ---

#[test]
fn test_rendered_chain_from_disk() {
    let tmp = create_fixture(&["a/b/c.txt"]);
    let root = build_tree(tmp.path(), &tree_config(3)).unwrap();
    let lines = render_standard(&root, &no_color());
    assert_eq!(
        lines,
        vec![
            tmp.path().display().to_string(),
            "└──a".to_string(),
            "    └──b".to_string(),
            "        └──c.txt".to_string(),
        ]
    );
}

#[test]
fn test_depth_zero_renders_root_name_only() {
    let tmp = create_fixture(&["a/", "b.txt", "c/d.txt"]);
    let root = build_tree(tmp.path(), &tree_config(0)).unwrap();
    let lines = render_standard(&root, &no_color());
    assert_eq!(lines, vec![tmp.path().display().to_string()]);
}

#[test]
fn test_hidden_entries_absent_from_output() {
    let tmp = create_fixture(&[".secret", "public.txt"]);
    let root = build_tree(tmp.path(), &tree_config(1)).unwrap();
    let text = render_standard(&root, &no_color()).join("\n");
    assert!(!text.contains(".secret"));
    assert!(text.contains("public.txt"));
}
