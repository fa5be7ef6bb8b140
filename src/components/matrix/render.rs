//! Canvas rendering for the adjacency matrix.
//!
//! Drawing happens in passes inside the margin transform: plot background,
//! band grid lines, occupied cells, then the row and column labels with the
//! hover highlight.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::builder::AdjacencyMatrix;
use super::state::MatrixState;
use crate::components::scales::LinearScale;
use crate::components::theme::Theme;

/// Renders the complete matrix view to the canvas.
pub fn render(
	state: &MatrixState,
	matrix: &AdjacencyMatrix,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
) {
	let config = &state.config;

	ctx.set_fill_style_str(&theme.background.color.to_css());
	ctx.fill_rect(0.0, 0.0, config.canvas_width(), config.canvas_height());

	ctx.save();
	let _ = ctx.translate(config.margin_left, config.margin_top);

	draw_plot(state, matrix, ctx, theme);
	draw_labels(state, matrix, ctx, theme);

	ctx.restore();
}

fn draw_plot(
	state: &MatrixState,
	matrix: &AdjacencyMatrix,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
) {
	let size = state.config.plot_size;
	let band = state.band_width();

	ctx.set_fill_style_str(&theme.matrix.background.to_css());
	ctx.fill_rect(0.0, 0.0, size, size);

	// Band separators along both axes.
	ctx.set_stroke_style_str(&theme.matrix.grid.to_css());
	ctx.set_line_width(1.0);
	for index in 0..matrix.n() {
		let offset = state.offset(index);
		ctx.begin_path();
		ctx.move_to(0.0, offset);
		ctx.line_to(size, offset);
		ctx.stroke();
		ctx.begin_path();
		ctx.move_to(offset, 0.0);
		ctx.line_to(offset, size);
		ctx.stroke();
	}

	// Only occupied cells are drawn; opacity encodes the accumulated
	// weight, and same-group pairs take the group's palette color.
	let opacity = LinearScale::new(state.config.z_domain).clamped();
	let nodes = matrix.nodes();
	for cell in matrix.occupied_cells() {
		let color = if nodes[cell.x].group == nodes[cell.y].group {
			theme.palette.get(nodes[cell.x].group as usize)
		} else {
			theme.matrix.cell
		};
		ctx.set_fill_style_str(&color.with_alpha(opacity.apply(cell.z)).to_css());
		ctx.fill_rect(state.offset(cell.x), state.offset(cell.y), band, band);
	}
}

fn draw_labels(
	state: &MatrixState,
	matrix: &AdjacencyMatrix,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
) {
	let band = state.band_width();
	let center = band / 2.0;
	let label = theme.matrix.label_color.to_css();
	let active = theme.matrix.active_label_color.to_css();
	let (active_row, active_col) = match state.hover {
		Some((row, col)) => (Some(row), Some(col)),
		None => (None, None),
	};

	ctx.set_font(&format!("{}px sans-serif", theme.matrix.label_size));
	ctx.set_text_baseline("middle");

	// Row labels sit in the left margin, right-aligned against the plot.
	ctx.set_text_align("end");
	for node in matrix.nodes() {
		let is_active = active_row == Some(node.index);
		ctx.set_fill_style_str(if is_active { &active } else { &label });
		let _ = ctx.fill_text(&node.name, -6.0, state.offset(node.index) + center);
	}

	// Column labels run up from the plot edge, rotated a quarter turn.
	ctx.set_text_align("start");
	for node in matrix.nodes() {
		let is_active = active_col == Some(node.index);
		ctx.set_fill_style_str(if is_active { &active } else { &label });
		ctx.save();
		let _ = ctx.translate(state.offset(node.index) + center, 0.0);
		let _ = ctx.rotate(-PI / 2.0);
		let _ = ctx.fill_text(&node.name, 6.0, 0.0);
		ctx.restore();
	}
}
