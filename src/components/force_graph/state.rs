//! Force simulation state and interaction tracking.
//!
//! Wraps the `force_graph` physics simulation with per-node display
//! metadata derived from the dataset (palette color by group, radius by
//! weighted degree) and the view transform for pan/zoom.

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::components::scales::clamp_world_size;
use crate::components::theme::Theme;
use crate::data::graph::Graph;

/// Per-node display metadata attached to each node in the simulation.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub name: String,
	pub color: String,
	/// Node radius in world units, derived from weighted degree.
	pub radius: f64,
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0).
	pub k: f64,
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Node radius from the node's share of the maximum weighted degree.
/// Square root for softer scaling, so hubs don't dwarf the rest.
fn node_radius(weight: f64, max_weight: f64) -> f64 {
	let share = if max_weight > 0.0 {
		(weight / max_weight).sqrt()
	} else {
		0.0
	};
	4.0 + 10.0 * share
}

/// Link display width: log10 of the weight, floored so unit-weight links
/// stay visible.
fn link_display_width(value: f64) -> f64 {
	value.max(1.0).log10().max(0.5)
}

/// Core graph state combining physics simulation with interaction tracking.
///
/// Created once when the component mounts, then mutated each frame by the
/// animation loop.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	link_widths: HashMap<(DefaultNodeIdx, DefaultNodeIdx), f64>,
}

impl ForceGraphState {
	/// Builds the simulation from a validated graph.
	///
	/// Link endpoints index straight into the node list; the graph was
	/// validated at the load boundary, so the indices are in range.
	pub fn new(data: &Graph, width: f64, height: f64, theme: &Theme) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});

		// Weighted degree per node, for sizing.
		let mut degrees = vec![0.0f64; data.nodes.len()];
		for link in &data.links {
			degrees[link.source] += link.value;
			degrees[link.target] += link.value;
		}
		let max_degree = degrees.iter().copied().fold(0.0f64, f64::max);

		let mut indices = Vec::with_capacity(data.nodes.len());
		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len().max(1) as f64;
			let (x, y) = (
				(width / 2.0 + 100.0 * angle.cos()) as f32,
				(height / 2.0 + 100.0 * angle.sin()) as f32,
			);
			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					name: node.name.clone(),
					color: theme.palette.get(node.group as usize).to_css(),
					radius: node_radius(degrees[i], max_degree),
				},
			});
			indices.push(idx);
		}

		let mut link_widths = HashMap::new();
		for link in &data.links {
			let (src, tgt) = (indices[link.source], indices[link.target]);
			graph.add_edge(src, tgt, EdgeData::default());
			link_widths.insert((src, tgt), link_display_width(link.value));
		}

		Self {
			graph,
			link_widths,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			width,
			height,
			animation_running: true,
		}
	}

	/// Display width of the link between two simulation nodes.
	pub fn link_width(&self, a: DefaultNodeIdx, b: DefaultNodeIdx) -> f64 {
		self.link_widths
			.get(&(a, b))
			.or_else(|| self.link_widths.get(&(b, a)))
			.copied()
			.unwrap_or(0.5)
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node under a screen position, if any.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let k = self.transform.k;
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let hit = clamp_world_size(node.data.user_data.radius + 4.0, k, 10.0);
			if (dx * dx + dy * dy).sqrt() < hit {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn radius_grows_with_weighted_degree() {
		assert_eq!(node_radius(0.0, 10.0), 4.0);
		assert_eq!(node_radius(10.0, 10.0), 14.0);
		let mid = node_radius(5.0, 10.0);
		assert!(mid > 4.0 && mid < 14.0);
	}

	#[test]
	fn radius_survives_an_edgeless_graph() {
		assert_eq!(node_radius(0.0, 0.0), 4.0);
	}

	#[test]
	fn link_width_is_log_scaled_with_a_floor() {
		assert_eq!(link_display_width(1.0), 0.5);
		assert_eq!(link_display_width(100.0), 2.0);
		assert_eq!(link_display_width(0.2), 0.5);
	}
}
