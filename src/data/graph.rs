//! Node-link graph wire format.
//!
//! The network and adjacency datasets share one JSON shape:
//! `{ nodes: [{name, group}], links: [{source, target, value}] }`, where
//! `source`/`target` are 0-based indices into `nodes`.

use serde::Deserialize;

use crate::error::InvalidGraphError;

/// A named node with a categorical group.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GraphNode {
	/// Display label, also the key for the alphabetic matrix order.
	pub name: String,
	/// Categorical group id; drives palette coloring and the group order.
	/// Optional in the wire format, defaulting to 0.
	#[serde(default)]
	pub group: u32,
}

/// A weighted, undirected relation between two node indices.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GraphLink {
	/// Index of one endpoint in the node list.
	pub source: usize,
	/// Index of the other endpoint.
	pub target: usize,
	/// Non-negative weight.
	pub value: f64,
}

/// A complete node-link graph as loaded from a dataset file.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Graph {
	/// Nodes in input order; a node's position is its identity.
	pub nodes: Vec<GraphNode>,
	/// Weighted links between node indices.
	pub links: Vec<GraphLink>,
}

impl Graph {
	/// Checks every link against the node list before any downstream
	/// structure is built from it.
	///
	/// Rejects endpoints outside `[0, n)` and weights that are negative or
	/// non-finite. `!(value >= 0.0)` deliberately catches NaN as well: a NaN
	/// weight would silently poison every accumulated cell and count.
	pub fn validate(&self) -> Result<(), InvalidGraphError> {
		let n = self.nodes.len();
		for (i, link) in self.links.iter().enumerate() {
			for endpoint in [link.source, link.target] {
				if endpoint >= n {
					return Err(InvalidGraphError::LinkOutOfRange {
						link: i,
						index: endpoint,
						nodes: n,
					});
				}
			}
			if !(link.value >= 0.0) || !link.value.is_finite() {
				return Err(InvalidGraphError::BadWeight {
					link: i,
					value: link.value,
				});
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn two_nodes_one_link(source: usize, target: usize, value: f64) -> Graph {
		Graph {
			nodes: vec![
				GraphNode {
					name: "A".into(),
					group: 1,
				},
				GraphNode {
					name: "B".into(),
					group: 2,
				},
			],
			links: vec![GraphLink {
				source,
				target,
				value,
			}],
		}
	}

	#[test]
	fn parses_the_wire_format() {
		let graph: Graph = serde_json::from_str(
			r#"{
				"nodes": [{"name": "Myriel", "group": 1}, {"name": "Napoleon", "group": 1}],
				"links": [{"source": 1, "target": 0, "value": 1}]
			}"#,
		)
		.unwrap();
		assert_eq!(graph.nodes.len(), 2);
		assert_eq!(graph.nodes[0].name, "Myriel");
		assert_eq!(graph.links[0].value, 1.0);
	}

	#[test]
	fn group_defaults_to_zero() {
		let graph: Graph =
			serde_json::from_str(r#"{"nodes": [{"name": "lone"}], "links": []}"#).unwrap();
		assert_eq!(graph.nodes[0].group, 0);
	}

	#[test]
	fn missing_name_is_a_parse_error() {
		let result: Result<Graph, _> =
			serde_json::from_str(r#"{"nodes": [{"group": 3}], "links": []}"#);
		assert!(result.is_err());
	}

	#[test]
	fn accepts_valid_links() {
		assert_eq!(two_nodes_one_link(0, 1, 3.0).validate(), Ok(()));
	}

	#[test]
	fn rejects_out_of_range_source() {
		let err = two_nodes_one_link(5, 1, 3.0).validate().unwrap_err();
		assert_eq!(
			err,
			InvalidGraphError::LinkOutOfRange {
				link: 0,
				index: 5,
				nodes: 2,
			}
		);
	}

	#[test]
	fn rejects_out_of_range_target() {
		let err = two_nodes_one_link(0, 2, 3.0).validate().unwrap_err();
		assert_eq!(
			err,
			InvalidGraphError::LinkOutOfRange {
				link: 0,
				index: 2,
				nodes: 2,
			}
		);
	}

	#[test]
	fn rejects_negative_weight() {
		let err = two_nodes_one_link(0, 1, -1.0).validate().unwrap_err();
		assert!(matches!(err, InvalidGraphError::BadWeight { link: 0, .. }));
	}

	#[test]
	fn rejects_nan_and_infinite_weights() {
		assert!(two_nodes_one_link(0, 1, f64::NAN).validate().is_err());
		assert!(two_nodes_one_link(0, 1, f64::INFINITY).validate().is_err());
	}

	#[test]
	fn empty_graph_is_valid() {
		assert_eq!(Graph::default().validate(), Ok(()));
	}
}
