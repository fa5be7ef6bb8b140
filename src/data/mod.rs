//! Dataset wire formats and loading.

pub mod graph;
pub mod loader;
pub mod tree;
