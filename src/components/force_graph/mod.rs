//! Force-directed network visualization.
//!
//! Renders an interactive force-directed graph on an HTML canvas with:
//! - Physics-based node positioning via force simulation
//! - Pan, zoom, and node dragging interactions
//! - Node radius by weighted degree, link width by log weight, color by group

mod component;
mod render;
mod state;

pub use component::ForceGraphCanvas;
