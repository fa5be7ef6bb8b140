//! Leptos component for the tree views.
//!
//! Unlike the force and matrix views there is no animation loop here: the
//! layout is computed and drawn once when the component mounts.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::layout;
use super::render::{self, TreeConfig};
use crate::components::theme::Theme;
use crate::data::tree::TreeNode;

/// Which projection of the cluster layout to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeMode {
	/// Horizontal dendrogram, leaves aligned on the right edge.
	Dendrogram,
	/// Full-circle radial dendrogram.
	Radial,
}

/// Renders a hierarchy as a dendrogram or radial tree on a canvas.
#[component]
pub fn TreeCanvas(
	/// The hierarchy to display.
	data: TreeNode,
	mode: TreeMode,
	#[prop(default = TreeConfig::default())] config: TreeConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (width, height) = match mode {
			TreeMode::Dendrogram => (config.width, config.height),
			TreeMode::Radial => (config.diameter, config.diameter),
		};
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let theme = Theme::default();
		match mode {
			TreeMode::Dendrogram => {
				let (x_extent, y_extent) = config.dendrogram_extents();
				let layout = layout::cluster(&data, x_extent, y_extent);
				render::render_dendrogram(&layout, &ctx, &config, &theme);
			}
			TreeMode::Radial => {
				let layout = layout::cluster(&data, 360.0, config.radial_extent);
				render::render_radial(&layout, &ctx, &config, &theme);
			}
		}
	});

	view! { <canvas node_ref=canvas_ref class="tree-canvas" /> }
}
