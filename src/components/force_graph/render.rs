//! Canvas rendering for the force graph.
//!
//! Drawing runs in passes for correct z-ordering: background in screen
//! space, then links and nodes in world space inside the pan/zoom
//! transform. Link width encodes weight, node radius weighted degree, and
//! node color the group; every node keeps its label.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{ForceGraphState, NodeInfo};
use crate::components::theme::Theme;

/// Label font size in screen pixels, and the zoom floor below which the
/// labels stop growing.
const LABEL_SIZE: f64 = 10.0;
const LABEL_MIN_K: f64 = 0.5;

/// Renders the complete graph to the canvas.
pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_links(state, ctx, theme);
	draw_nodes(state, ctx, theme);

	ctx.restore();
}

fn draw_background(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	if theme.background.use_gradient {
		let gradient = ctx
			.create_radial_gradient(
				state.width / 2.0,
				state.height / 2.0,
				0.0,
				state.width / 2.0,
				state.height / 2.0,
				(state.width.max(state.height)) * 0.8,
			)
			.unwrap();

		gradient
			.add_color_stop(0.0, &theme.background.color_secondary.to_css())
			.unwrap();
		gradient
			.add_color_stop(1.0, &theme.background.color.to_css())
			.unwrap();

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	} else {
		ctx.set_fill_style_str(&theme.background.color.to_css());
	}

	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_links(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let k = state.transform.k;
	ctx.set_stroke_style_str(&theme.edge.color.to_css());

	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		// Line width is screen-space: divide out the zoom.
		ctx.set_line_width(state.link_width(n1.index(), n2.index()) / k);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	});
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let k = state.transform.k;
	let label_font = format!("{}px sans-serif", LABEL_SIZE / k.max(LABEL_MIN_K));

	state.graph.visit_nodes(|node| {
		draw_node(ctx, node, theme, k);
	});

	// Labels in a second pass so no circle overdraws a neighbor's text.
	ctx.set_font(&label_font);
	ctx.set_fill_style_str(&theme.node.label_color.to_css());
	state.graph.visit_nodes(|node| {
		let info = &node.data.user_data;
		let _ = ctx.fill_text(
			&info.name,
			node.x() as f64 + info.radius + 4.0,
			node.y() as f64 + 3.0,
		);
	});
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	node: &force_graph::Node<NodeInfo>,
	theme: &Theme,
	k: f64,
) {
	let (x, y) = (node.x() as f64, node.y() as f64);
	let info = &node.data.user_data;

	ctx.begin_path();
	let _ = ctx.arc(x, y, info.radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&info.color);
	ctx.fill();

	if theme.node.border_width > 0.0 {
		ctx.set_stroke_style_str(&theme.node.border_color.to_css());
		ctx.set_line_width(theme.node.border_width / k);
		ctx.stroke();
	}
}
