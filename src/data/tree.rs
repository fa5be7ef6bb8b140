//! Hierarchy wire format for the tree views.

use serde::Deserialize;

/// A named hierarchy node as loaded from a dataset file.
///
/// Leaves simply omit `children`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TreeNode {
	pub name: String,
	#[serde(default)]
	pub children: Vec<TreeNode>,
}

impl TreeNode {
	pub fn is_leaf(&self) -> bool {
		self.children.is_empty()
	}

	/// Total number of nodes in the subtree, this node included.
	pub fn node_count(&self) -> usize {
		1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
	}

	/// Number of leaves in the subtree.
	pub fn leaf_count(&self) -> usize {
		if self.is_leaf() {
			1
		} else {
			self.children.iter().map(TreeNode::leaf_count).sum()
		}
	}

	/// Edges from this node to its deepest leaf.
	pub fn height(&self) -> usize {
		self.children
			.iter()
			.map(|child| 1 + child.height())
			.max()
			.unwrap_or(0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> TreeNode {
		serde_json::from_str(
			r#"{
				"name": "root",
				"children": [
					{"name": "a", "children": [{"name": "a1"}, {"name": "a2"}]},
					{"name": "b"}
				]
			}"#,
		)
		.unwrap()
	}

	#[test]
	fn parses_nested_hierarchies() {
		let tree = sample();
		assert_eq!(tree.name, "root");
		assert_eq!(tree.children.len(), 2);
		assert_eq!(tree.children[0].children[1].name, "a2");
	}

	#[test]
	fn leaves_omit_children() {
		let leaf: TreeNode = serde_json::from_str(r#"{"name": "solo"}"#).unwrap();
		assert!(leaf.is_leaf());
		assert_eq!(leaf.height(), 0);
	}

	#[test]
	fn counts_and_height() {
		let tree = sample();
		assert_eq!(tree.node_count(), 5);
		assert_eq!(tree.leaf_count(), 3);
		assert_eq!(tree.height(), 2);
	}
}
