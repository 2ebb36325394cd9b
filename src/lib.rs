#![forbid(unsafe_code)]
//! ztree — prints a directory tree, folding single-child directory chains
//! onto one line and coloring entries from an `LS_COLORS` specification.

pub mod assets;
pub mod classify;
pub mod cli;
pub mod colors;
pub mod error;
pub mod logging;
pub mod render;
pub mod tree;
