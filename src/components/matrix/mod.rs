//! Adjacency matrix visualization.
//!
//! The builder turns a node-link graph into a dense n×n cell grid with
//! three precomputed axis orders; the component renders it on a canvas with
//! animated reordering and hover highlighting.

pub mod builder;
mod component;
mod render;
pub mod state;

pub use builder::{build, AdjacencyMatrix, MatrixCell, MatrixNode, OrderKey, OrderSet};
pub use component::MatrixCanvas;
pub use state::MatrixConfig;
