//! Canvas rendering for the dendrogram and radial tree views.
//!
//! Both views draw the same cluster layout; only the projection differs.
//! These are static drawings, done once per dataset load.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::layout::{self, Layout};
use crate::components::theme::Theme;

/// Tree view geometry, overridable as component props.
#[derive(Clone, Copy, Debug)]
pub struct TreeConfig {
	/// Dendrogram canvas width.
	pub width: f64,
	/// Dendrogram canvas height.
	pub height: f64,
	/// Horizontal space reserved for leaf labels in the dendrogram.
	pub label_gutter: f64,
	/// Left inset of the dendrogram root.
	pub inset: f64,
	/// Radial view canvas side length.
	pub diameter: f64,
	/// Radius of the radial layout; the rest of the diameter holds labels.
	pub radial_extent: f64,
}

impl Default for TreeConfig {
	fn default() -> Self {
		Self {
			width: 700.0,
			height: 350.0,
			label_gutter: 80.0,
			inset: 50.0,
			diameter: 1100.0,
			radial_extent: 400.0,
		}
	}
}

impl TreeConfig {
	/// Cluster extents for the horizontal dendrogram: cross axis down the
	/// canvas, depth axis across it, minus the label gutter.
	pub fn dendrogram_extents(&self) -> (f64, f64) {
		(self.height, self.width - self.label_gutter)
	}
}

/// Draws the horizontal dendrogram: depth runs left to right, leaves
/// aligned on the right edge with their labels in the gutter.
pub fn render_dendrogram(
	layout: &Layout,
	ctx: &CanvasRenderingContext2d,
	config: &TreeConfig,
	theme: &Theme,
) {
	ctx.set_fill_style_str(&theme.background.color.to_css());
	ctx.fill_rect(0.0, 0.0, config.width, config.height);

	ctx.save();
	let _ = ctx.translate(config.inset, 0.0);

	ctx.set_stroke_style_str(&theme.tree.link_color.to_css());
	ctx.set_line_width(theme.tree.link_width);
	for &(parent, child) in &layout.links {
		let d = layout::diagonal(&layout.nodes[parent], &layout.nodes[child]);
		ctx.begin_path();
		ctx.move_to(d.start.0, d.start.1);
		let _ = ctx.bezier_curve_to(d.ctrl1.0, d.ctrl1.1, d.ctrl2.0, d.ctrl2.1, d.end.0, d.end.1);
		ctx.stroke();
	}

	ctx.set_line_width(1.5);
	ctx.set_font(&format!("{}px sans-serif", theme.tree.label_size));
	for node in &layout.nodes {
		let (sx, sy) = (node.y, node.x);

		ctx.begin_path();
		let _ = ctx.arc(sx, sy, 6.0, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&theme.tree.node_fill.to_css());
		ctx.fill();
		ctx.set_stroke_style_str(&theme.tree.node_stroke.to_css());
		ctx.stroke();

		ctx.set_fill_style_str(&theme.tree.label_color.to_css());
		if node.leaf {
			ctx.set_text_align("start");
			let _ = ctx.fill_text(&node.name, sx + 10.0, sy + 20.0);
		} else {
			ctx.set_text_align("end");
			let _ = ctx.fill_text(&node.name, sx - 10.0, sy + 20.0);
		}
	}

	ctx.restore();
}

/// Draws the radial tree: the cluster's cross axis becomes a full-circle
/// sweep, labels rotated outward along each node's spoke.
pub fn render_radial(
	layout: &Layout,
	ctx: &CanvasRenderingContext2d,
	config: &TreeConfig,
	theme: &Theme,
) {
	ctx.set_fill_style_str(&theme.background.color.to_css());
	ctx.fill_rect(0.0, 0.0, config.diameter, config.diameter);

	ctx.save();
	let _ = ctx.translate(config.diameter / 2.0, config.diameter / 2.0);

	ctx.set_stroke_style_str(&theme.tree.link_color.to_css());
	ctx.set_line_width(theme.tree.link_width);
	for &(parent, child) in &layout.links {
		let d = layout::diagonal_radial(&layout.nodes[parent], &layout.nodes[child]);
		ctx.begin_path();
		ctx.move_to(d.start.0, d.start.1);
		let _ = ctx.bezier_curve_to(d.ctrl1.0, d.ctrl1.1, d.ctrl2.0, d.ctrl2.1, d.end.0, d.end.1);
		ctx.stroke();
	}

	ctx.set_font(&format!("{}px sans-serif", theme.tree.label_size));
	for node in &layout.nodes {
		let (px, py) = layout::project_radial(node.x, node.y);

		ctx.begin_path();
		let _ = ctx.arc(px, py, 2.0, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&theme.tree.node_stroke.to_css());
		ctx.fill();

		// Rotate onto the node's spoke; flip labels on the left half so
		// they stay upright.
		ctx.save();
		let _ = ctx.rotate((node.x - 90.0).to_radians());
		let _ = ctx.translate(node.y, 0.0);
		ctx.set_fill_style_str(&theme.tree.label_color.to_css());
		if node.x < 180.0 {
			ctx.set_text_align("start");
			let _ = ctx.fill_text(&node.name, 8.0, 3.0);
		} else {
			let _ = ctx.rotate(PI);
			ctx.set_text_align("end");
			let _ = ctx.fill_text(&node.name, -8.0, 3.0);
		}
		ctx.restore();
	}

	ctx.restore();
}
