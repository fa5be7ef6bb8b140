//! Dendrogram and radial tree visualization.

mod component;
pub mod layout;
pub mod render;

pub use component::{TreeCanvas, TreeMode};
pub use render::TreeConfig;
