#![forbid(unsafe_code)]
//! BetterTree: prints a directory subtree as a connector-drawn or columnar tree.

pub mod app;
pub mod assets;
pub mod cli;
pub mod logging;
pub mod render;
pub mod tree;
