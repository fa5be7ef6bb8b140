//! View components and the visual utilities they share.

pub mod force_graph;
pub mod matrix;
pub mod scales;
pub mod theme;
pub mod tree;
