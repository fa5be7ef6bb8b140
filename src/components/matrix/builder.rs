//! Dense adjacency matrix construction from a node-link graph.
//!
//! `build` converts a validated graph into an n×n cell grid plus three
//! precomputed axis orders. It is a pure function: same graph in, same
//! matrix out, no state held anywhere between calls. The rendering side
//! only ever reads the result.

use std::cmp::Ordering;

use crate::data::graph::Graph;
use crate::error::InvalidGraphError;

/// Which precomputed axis order the matrix view is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderKey {
	/// Ascending lexicographic by node name (the initial order).
	#[default]
	Name,
	/// Descending by aggregate incident link weight.
	Count,
	/// Descending by group id.
	Group,
}

impl OrderKey {
	/// All keys, in the order the select control lists them.
	pub const ALL: [OrderKey; 3] = [OrderKey::Name, OrderKey::Count, OrderKey::Group];

	/// Stable value used in the order select control.
	pub fn as_str(self) -> &'static str {
		match self {
			OrderKey::Name => "name",
			OrderKey::Count => "count",
			OrderKey::Group => "group",
		}
	}

	/// Human-readable option label.
	pub fn label(self) -> &'static str {
		match self {
			OrderKey::Name => "by Name",
			OrderKey::Count => "by Frequency",
			OrderKey::Group => "by Cluster",
		}
	}

	/// Parses the select control value back to a key.
	pub fn parse(value: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|key| key.as_str() == value)
	}
}

/// One cell of the dense matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatrixCell {
	/// Column (target node index).
	pub x: usize,
	/// Row (source node index).
	pub y: usize,
	/// Accumulated link weight; 0 for unconnected pairs.
	pub z: f64,
}

/// A node with its derived aggregate weight.
#[derive(Clone, Debug, PartialEq)]
pub struct MatrixNode {
	/// Position in the input node list; the node's identity.
	pub index: usize,
	pub name: String,
	pub group: u32,
	/// Sum of incident link weights, filled in during `build`.
	pub count: f64,
}

/// The three axis permutations, computed once per build.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderSet {
	name: Vec<usize>,
	count: Vec<usize>,
	group: Vec<usize>,
}

impl OrderSet {
	/// The permutation for an order key. `order[slot]` is the node index
	/// occupying that slot along the axis.
	pub fn get(&self, key: OrderKey) -> &[usize] {
		match key {
			OrderKey::Name => &self.name,
			OrderKey::Count => &self.count,
			OrderKey::Group => &self.group,
		}
	}
}

/// Output of `build`: nodes with derived counts, the dense cell grid, and
/// the order permutations. Row-major: cell `(x, y)` lives at `y * n + x`.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyMatrix {
	nodes: Vec<MatrixNode>,
	cells: Vec<MatrixCell>,
	orders: OrderSet,
}

impl AdjacencyMatrix {
	/// Number of nodes (and rows, and columns).
	pub fn n(&self) -> usize {
		self.nodes.len()
	}

	pub fn nodes(&self) -> &[MatrixNode] {
		&self.nodes
	}

	pub fn orders(&self) -> &OrderSet {
		&self.orders
	}

	/// Cell at column `x`, row `y`.
	pub fn cell(&self, x: usize, y: usize) -> &MatrixCell {
		&self.cells[y * self.n() + x]
	}

	/// All cells in row-major order.
	pub fn cells(&self) -> &[MatrixCell] {
		&self.cells
	}

	/// Cells with accumulated weight, the only ones drawn.
	pub fn occupied_cells(&self) -> impl Iterator<Item = &MatrixCell> {
		self.cells.iter().filter(|cell| cell.z != 0.0)
	}
}

/// Builds the dense matrix, node counts, and axis orders for a graph.
///
/// Validation runs first so a bad link can never index outside the grid.
/// Every link `(s, t, v)` adds `v` to the symmetric pair `(s,t)`/`(t,s)`
/// and to both endpoint diagonal cells `(s,s)`/`(t,t)`, so the diagonal
/// encodes each node's total connection weight. A self-loop consequently
/// lands on one cell four times. That diagonal inflation is an inherited
/// quirk of the visual encoding and is preserved as-is.
pub fn build(graph: &Graph) -> Result<AdjacencyMatrix, InvalidGraphError> {
	graph.validate()?;
	let n = graph.nodes.len();

	let mut nodes: Vec<MatrixNode> = graph
		.nodes
		.iter()
		.enumerate()
		.map(|(index, node)| MatrixNode {
			index,
			name: node.name.clone(),
			group: node.group,
			count: 0.0,
		})
		.collect();

	let mut cells = Vec::with_capacity(n * n);
	for y in 0..n {
		for x in 0..n {
			cells.push(MatrixCell { x, y, z: 0.0 });
		}
	}

	for link in &graph.links {
		let (s, t, v) = (link.source, link.target, link.value);
		cells[s * n + t].z += v;
		cells[t * n + s].z += v;
		cells[s * n + s].z += v;
		cells[t * n + t].z += v;
		nodes[s].count += v;
		nodes[t].count += v;
	}

	let orders = compute_orders(&nodes);

	Ok(AdjacencyMatrix {
		nodes,
		cells,
		orders,
	})
}

/// Sorts are stable, so equal keys keep their original index order.
fn compute_orders(nodes: &[MatrixNode]) -> OrderSet {
	let identity: Vec<usize> = (0..nodes.len()).collect();

	let mut name = identity.clone();
	name.sort_by(|&a, &b| nodes[a].name.cmp(&nodes[b].name));

	let mut count = identity.clone();
	// Counts are finite: weights were validated before accumulation.
	count.sort_by(|&a, &b| {
		nodes[b]
			.count
			.partial_cmp(&nodes[a].count)
			.unwrap_or(Ordering::Equal)
	});

	let mut group = identity;
	group.sort_by(|&a, &b| nodes[b].group.cmp(&nodes[a].group));

	OrderSet { name, count, group }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::graph::{GraphLink, GraphNode};

	fn node(name: &str, group: u32) -> GraphNode {
		GraphNode {
			name: name.to_string(),
			group,
		}
	}

	fn link(source: usize, target: usize, value: f64) -> GraphLink {
		GraphLink {
			source,
			target,
			value,
		}
	}

	fn two_node_graph() -> Graph {
		Graph {
			nodes: vec![node("A", 1), node("B", 2)],
			links: vec![link(0, 1, 3.0)],
		}
	}

	#[test]
	fn two_node_scenario() {
		let matrix = build(&two_node_graph()).unwrap();
		assert_eq!(matrix.cell(0, 0).z, 3.0);
		assert_eq!(matrix.cell(1, 0).z, 3.0);
		assert_eq!(matrix.cell(0, 1).z, 3.0);
		assert_eq!(matrix.cell(1, 1).z, 3.0);
		assert_eq!(matrix.nodes()[0].count, 3.0);
		assert_eq!(matrix.nodes()[1].count, 3.0);
		assert_eq!(matrix.orders().get(OrderKey::Name), &[0, 1]);
		assert_eq!(matrix.orders().get(OrderKey::Group), &[1, 0]);
	}

	#[test]
	fn build_is_deterministic() {
		let graph = Graph {
			nodes: vec![node("C", 2), node("A", 1), node("B", 3)],
			links: vec![link(0, 1, 2.0), link(1, 2, 5.0), link(0, 2, 1.0)],
		};
		assert_eq!(build(&graph).unwrap(), build(&graph).unwrap());
	}

	#[test]
	fn counts_sum_incident_weights() {
		let graph = Graph {
			nodes: vec![node("A", 0), node("B", 0), node("C", 0)],
			links: vec![link(0, 1, 2.0), link(0, 2, 3.0), link(1, 2, 5.0)],
		};
		let matrix = build(&graph).unwrap();
		assert_eq!(matrix.nodes()[0].count, 5.0);
		assert_eq!(matrix.nodes()[1].count, 7.0);
		assert_eq!(matrix.nodes()[2].count, 8.0);
	}

	#[test]
	fn matrix_is_symmetric() {
		let graph = Graph {
			nodes: vec![node("A", 0), node("B", 1), node("C", 2), node("D", 1)],
			links: vec![link(0, 1, 2.0), link(2, 0, 4.5), link(3, 2, 1.0)],
		};
		let matrix = build(&graph).unwrap();
		for y in 0..matrix.n() {
			for x in 0..matrix.n() {
				assert_eq!(matrix.cell(x, y).z, matrix.cell(y, x).z);
			}
		}
	}

	#[test]
	fn matrix_is_dense_even_without_links() {
		let graph = Graph {
			nodes: vec![node("A", 0), node("B", 0), node("C", 0)],
			links: vec![],
		};
		let matrix = build(&graph).unwrap();
		assert_eq!(matrix.cells().len(), 9);
		assert!(matrix.cells().iter().all(|cell| cell.z == 0.0));
		assert_eq!(matrix.occupied_cells().count(), 0);
	}

	#[test]
	fn cells_carry_their_coordinates() {
		let matrix = build(&two_node_graph()).unwrap();
		for y in 0..2 {
			for x in 0..2 {
				let cell = matrix.cell(x, y);
				assert_eq!((cell.x, cell.y), (x, y));
			}
		}
	}

	#[test]
	fn self_loop_quadruples_its_diagonal_cell() {
		let graph = Graph {
			nodes: vec![node("A", 0), node("B", 0)],
			links: vec![link(0, 0, 2.0)],
		};
		let matrix = build(&graph).unwrap();
		assert_eq!(matrix.cell(0, 0).z, 8.0);
		assert_eq!(matrix.cell(1, 0).z, 0.0);
		assert_eq!(matrix.cell(0, 1).z, 0.0);
		assert_eq!(matrix.cell(1, 1).z, 0.0);
		// The node counts the loop once per endpoint role.
		assert_eq!(matrix.nodes()[0].count, 4.0);
	}

	#[test]
	fn name_order_is_sorted_and_a_permutation() {
		let graph = Graph {
			nodes: vec![node("delta", 0), node("alpha", 0), node("charlie", 0), node("bravo", 0)],
			links: vec![],
		};
		let matrix = build(&graph).unwrap();
		let order = matrix.orders().get(OrderKey::Name);
		assert_eq!(order, &[1, 3, 2, 0]);
		let mut sorted = order.to_vec();
		sorted.sort_unstable();
		assert_eq!(sorted, vec![0, 1, 2, 3]);
	}

	#[test]
	fn count_order_is_non_increasing() {
		let graph = Graph {
			nodes: vec![node("A", 0), node("B", 0), node("C", 0)],
			links: vec![link(0, 1, 1.0), link(1, 2, 9.0)],
		};
		let matrix = build(&graph).unwrap();
		let order = matrix.orders().get(OrderKey::Count);
		for pair in order.windows(2) {
			assert!(matrix.nodes()[pair[0]].count >= matrix.nodes()[pair[1]].count);
		}
		assert_eq!(order[0], 1);
	}

	#[test]
	fn ties_keep_original_index_order() {
		let graph = Graph {
			nodes: vec![node("same", 7), node("same", 7), node("same", 7)],
			links: vec![],
		};
		let matrix = build(&graph).unwrap();
		assert_eq!(matrix.orders().get(OrderKey::Name), &[0, 1, 2]);
		assert_eq!(matrix.orders().get(OrderKey::Count), &[0, 1, 2]);
		assert_eq!(matrix.orders().get(OrderKey::Group), &[0, 1, 2]);
	}

	#[test]
	fn out_of_range_link_is_rejected() {
		let graph = Graph {
			nodes: vec![node("A", 0), node("B", 0)],
			links: vec![link(5, 1, 1.0)],
		};
		assert!(matches!(
			build(&graph),
			Err(InvalidGraphError::LinkOutOfRange { index: 5, .. })
		));
	}

	#[test]
	fn negative_weight_is_rejected() {
		let graph = Graph {
			nodes: vec![node("A", 0), node("B", 0)],
			links: vec![link(0, 1, -2.0)],
		};
		assert!(matches!(
			build(&graph),
			Err(InvalidGraphError::BadWeight { link: 0, .. })
		));
	}

	#[test]
	fn empty_graph_builds_an_empty_matrix() {
		let matrix = build(&Graph::default()).unwrap();
		assert_eq!(matrix.n(), 0);
		assert!(matrix.cells().is_empty());
		assert!(matrix.orders().get(OrderKey::Name).is_empty());
	}
}
