//! Cluster (dendrogram) layout and its radial projection.
//!
//! Pure geometry: a hierarchy goes in, per-node coordinates come out.
//! Leaves are placed along the cross axis by accumulated separation (1
//! between siblings, 2 across parents), internal nodes sit at the mean of
//! their children, and the depth axis is normalized so every leaf lands on
//! the far edge regardless of its depth. The radial view reuses the same
//! layout with the cross axis read as an angle in degrees.

use crate::data::tree::TreeNode;

/// A laid-out hierarchy node.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedNode {
	pub name: String,
	/// Cross-axis coordinate in `[0, x_extent]`.
	pub x: f64,
	/// Depth-axis coordinate: 0 at the root, `y_extent` at every leaf.
	pub y: f64,
	pub depth: usize,
	pub leaf: bool,
}

/// Layout result: placed nodes plus parent-child link pairs.
#[derive(Clone, Debug)]
pub struct Layout {
	pub nodes: Vec<PlacedNode>,
	/// `(parent, child)` indices into `nodes`.
	pub links: Vec<(usize, usize)>,
}

struct Slot {
	name: String,
	parent: Option<usize>,
	children: Vec<usize>,
	depth: usize,
	x: f64,
	/// Levels between this node and the deepest leaf of its subtree.
	rise: usize,
}

fn flatten(node: &TreeNode, parent: Option<usize>, depth: usize, slots: &mut Vec<Slot>) -> usize {
	let index = slots.len();
	slots.push(Slot {
		name: node.name.clone(),
		parent,
		children: Vec::new(),
		depth,
		x: 0.0,
		rise: 0,
	});
	for child in &node.children {
		let child_index = flatten(child, Some(index), depth + 1, slots);
		slots[index].children.push(child_index);
	}
	index
}

/// Computes the cluster layout of `root` over a `x_extent` × `y_extent`
/// area.
pub fn cluster(root: &TreeNode, x_extent: f64, y_extent: f64) -> Layout {
	let mut slots = Vec::with_capacity(root.node_count());
	flatten(root, None, 0, &mut slots);

	// Leaves left to right; pre-order index order is leaf order.
	let mut previous: Option<usize> = None;
	for i in 0..slots.len() {
		if slots[i].children.is_empty() {
			slots[i].x = match previous {
				None => 0.0,
				Some(prev) => {
					let gap = if slots[prev].parent == slots[i].parent {
						1.0
					} else {
						2.0
					};
					slots[prev].x + gap
				}
			};
			previous = Some(i);
		}
	}

	// Children always follow their parent in pre-order, so a reverse scan
	// sees every subtree before the node above it.
	for i in (0..slots.len()).rev() {
		if slots[i].children.is_empty() {
			continue;
		}
		let sum: f64 = slots[i].children.iter().map(|&c| slots[c].x).sum();
		slots[i].x = sum / slots[i].children.len() as f64;
		slots[i].rise = slots[i]
			.children
			.iter()
			.map(|&c| 1 + slots[c].rise)
			.max()
			.unwrap_or(0);
	}

	let min_x = slots.iter().map(|s| s.x).fold(f64::INFINITY, f64::min);
	let max_x = slots.iter().map(|s| s.x).fold(f64::NEG_INFINITY, f64::max);
	let span = max_x - min_x;
	let root_rise = slots[0].rise;

	let nodes = slots
		.iter()
		.map(|slot| PlacedNode {
			name: slot.name.clone(),
			x: if span > 0.0 {
				(slot.x - min_x) / span * x_extent
			} else {
				x_extent / 2.0
			},
			y: if root_rise == 0 {
				0.0
			} else {
				(1.0 - slot.rise as f64 / root_rise as f64) * y_extent
			},
			depth: slot.depth,
			leaf: slot.children.is_empty(),
		})
		.collect();

	let links = slots
		.iter()
		.enumerate()
		.filter_map(|(i, slot)| slot.parent.map(|p| (p, i)))
		.collect();

	Layout { nodes, links }
}

/// Projects a cluster coordinate onto the circle: the cross-axis value is
/// an angle in degrees (0 pointing up), the depth value the radius.
pub fn project_radial(angle_deg: f64, radius: f64) -> (f64, f64) {
	let angle = (angle_deg - 90.0).to_radians();
	(radius * angle.cos(), radius * angle.sin())
}

/// Control points of one cubic link path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Diagonal {
	pub start: (f64, f64),
	pub ctrl1: (f64, f64),
	pub ctrl2: (f64, f64),
	pub end: (f64, f64),
}

/// Cubic link for the horizontal dendrogram. The depth axis runs
/// horizontally, so the control points sit at the midpoint depth.
pub fn diagonal(source: &PlacedNode, target: &PlacedNode) -> Diagonal {
	let mid = (source.y + target.y) / 2.0;
	Diagonal {
		start: (source.y, source.x),
		ctrl1: (mid, source.x),
		ctrl2: (mid, target.x),
		end: (target.y, target.x),
	}
}

/// Cubic link for the radial view: control points hold each endpoint's
/// angle at the midpoint radius, then everything is projected.
pub fn diagonal_radial(source: &PlacedNode, target: &PlacedNode) -> Diagonal {
	let mid = (source.y + target.y) / 2.0;
	Diagonal {
		start: project_radial(source.x, source.y),
		ctrl1: project_radial(source.x, mid),
		ctrl2: project_radial(target.x, mid),
		end: project_radial(target.x, target.y),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn leaf(name: &str) -> TreeNode {
		TreeNode {
			name: name.to_string(),
			children: Vec::new(),
		}
	}

	fn parent(name: &str, children: Vec<TreeNode>) -> TreeNode {
		TreeNode {
			name: name.to_string(),
			children,
		}
	}

	const EPS: f64 = 1e-9;

	#[test]
	fn two_leaves_span_the_cross_axis() {
		let tree = parent("root", vec![leaf("a"), leaf("b")]);
		let layout = cluster(&tree, 100.0, 50.0);
		let [root, a, b] = &layout.nodes[..] else {
			panic!("expected 3 nodes");
		};
		assert_eq!(a.x, 0.0);
		assert_eq!(b.x, 100.0);
		assert!((root.x - 50.0).abs() < EPS);
		assert_eq!(root.y, 0.0);
		assert_eq!(a.y, 50.0);
		assert_eq!(b.y, 50.0);
	}

	#[test]
	fn leaves_align_on_the_far_edge_regardless_of_depth() {
		// "b" is a direct child of the root, "a1"/"a2" are one level down.
		let tree = parent(
			"root",
			vec![parent("a", vec![leaf("a1"), leaf("a2")]), leaf("b")],
		);
		let layout = cluster(&tree, 300.0, 200.0);
		for node in layout.nodes.iter().filter(|node| node.leaf) {
			assert_eq!(node.y, 200.0, "{}", node.name);
		}
		// The shallow internal node sits between root and leaves.
		let a = layout.nodes.iter().find(|node| node.name == "a").unwrap();
		assert_eq!(a.y, 100.0);
	}

	#[test]
	fn sibling_gap_is_half_the_cross_parent_gap() {
		let tree = parent(
			"root",
			vec![parent("a", vec![leaf("a1"), leaf("a2")]), parent("b", vec![leaf("b1")])],
		);
		// Raw leaf positions 0, 1, 3; normalized over extent 300.
		let layout = cluster(&tree, 300.0, 100.0);
		let pos = |name: &str| layout.nodes.iter().find(|node| node.name == name).unwrap().x;
		assert!((pos("a1") - 0.0).abs() < EPS);
		assert!((pos("a2") - 100.0).abs() < EPS);
		assert!((pos("b1") - 300.0).abs() < EPS);
	}

	#[test]
	fn internal_nodes_average_their_children() {
		let tree = parent("root", vec![parent("a", vec![leaf("a1"), leaf("a2")]), leaf("b")]);
		let layout = cluster(&tree, 300.0, 100.0);
		let pos = |name: &str| layout.nodes.iter().find(|node| node.name == name).unwrap().x;
		assert!((pos("a") - (pos("a1") + pos("a2")) / 2.0).abs() < EPS);
	}

	#[test]
	fn links_connect_every_node_to_its_parent() {
		let tree = parent("root", vec![parent("a", vec![leaf("a1"), leaf("a2")]), leaf("b")]);
		let layout = cluster(&tree, 300.0, 100.0);
		assert_eq!(layout.links.len(), layout.nodes.len() - 1);
		for &(parent, child) in &layout.links {
			assert!(layout.nodes[parent].depth + 1 == layout.nodes[child].depth);
		}
	}

	#[test]
	fn single_node_sits_at_center_depth_zero() {
		let layout = cluster(&leaf("solo"), 100.0, 100.0);
		assert_eq!(layout.nodes.len(), 1);
		assert_eq!(layout.nodes[0].x, 50.0);
		assert_eq!(layout.nodes[0].y, 0.0);
		assert!(layout.links.is_empty());
	}

	#[test]
	fn radial_projection_compass_points() {
		let (x, y) = project_radial(0.0, 10.0);
		assert!(x.abs() < EPS && (y + 10.0).abs() < EPS);
		let (x, y) = project_radial(90.0, 10.0);
		assert!((x - 10.0).abs() < EPS && y.abs() < EPS);
		let (x, y) = project_radial(180.0, 10.0);
		assert!(x.abs() < EPS && (y - 10.0).abs() < EPS);
	}

	#[test]
	fn diagonal_control_points_hold_cross_positions() {
		let source = PlacedNode {
			name: "s".into(),
			x: 10.0,
			y: 0.0,
			depth: 0,
			leaf: false,
		};
		let target = PlacedNode {
			name: "t".into(),
			x: 40.0,
			y: 100.0,
			depth: 1,
			leaf: true,
		};
		let d = diagonal(&source, &target);
		assert_eq!(d.start, (0.0, 10.0));
		assert_eq!(d.ctrl1, (50.0, 10.0));
		assert_eq!(d.ctrl2, (50.0, 40.0));
		assert_eq!(d.end, (100.0, 40.0));
	}

	#[test]
	fn radial_diagonal_endpoints_match_projection() {
		let source = PlacedNode {
			name: "s".into(),
			x: 0.0,
			y: 50.0,
			depth: 1,
			leaf: false,
		};
		let target = PlacedNode {
			name: "t".into(),
			x: 90.0,
			y: 150.0,
			depth: 2,
			leaf: true,
		};
		let d = diagonal_radial(&source, &target);
		assert_eq!(d.start, project_radial(0.0, 50.0));
		assert_eq!(d.end, project_radial(90.0, 150.0));
		assert_eq!(d.ctrl1, project_radial(0.0, 100.0));
		assert_eq!(d.ctrl2, project_radial(90.0, 100.0));
	}
}
