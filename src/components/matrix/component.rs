//! Leptos component wrapping the adjacency matrix canvas.
//!
//! Owns the order select control and the canvas. An animation loop runs via
//! `requestAnimationFrame`, advancing the reorder transition and auto-switch
//! countdown each frame. Mouse movement drives the row/column label
//! highlight.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::builder::{AdjacencyMatrix, OrderKey};
use super::render;
use super::state::{MatrixConfig, MatrixState};
use crate::components::theme::Theme;

/// Bundles the immutable matrix with the animated view state.
struct MatrixContext {
	matrix: AdjacencyMatrix,
	state: MatrixState,
	theme: Theme,
}

/// Renders an adjacency matrix with selectable, animated row orders.
///
/// The matrix is built once by the caller; this component only projects it.
/// Five seconds after mount the view switches itself to the group order,
/// unless the user has picked an order from the control first.
#[component]
pub fn MatrixCanvas(
	/// The prebuilt matrix to display.
	matrix: AdjacencyMatrix,
	#[prop(default = MatrixConfig::default())] config: MatrixConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<MatrixContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let order_signal = RwSignal::new(OrderKey::Name);
	let (context_init, animate_init) = (context.clone(), animate.clone());

	let canvas_width = config.canvas_width();
	let canvas_height = config.canvas_height();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(canvas_width as u32);
		canvas.set_height(canvas_height as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		*context_init.borrow_mut() = Some(MatrixContext {
			state: MatrixState::new(&matrix, config),
			matrix: matrix.clone(),
			theme: Theme::default(),
		});

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		let mut last_ms = js_sys::Date::now();
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let now_ms = js_sys::Date::now();
			let dt_ms = (now_ms - last_ms).clamp(0.0, 100.0);
			last_ms = now_ms;

			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.tick(&c.matrix, dt_ms);
				// The auto switch changes the order from inside the
				// loop; keep the select control in step with it.
				if order_signal.get_untracked() != c.state.active_order {
					order_signal.set(c.state.active_order);
				}
				render::render(&c.state, &c.matrix, &ctx, &c.theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_sel = context.clone();
	let on_order_change = move |ev| {
		let Some(key) = OrderKey::parse(&event_target_value(&ev)) else {
			return;
		};
		debug!("matrix: order changed to {}", key.as_str());
		order_signal.set(key);
		if let Some(ref mut c) = *context_sel.borrow_mut() {
			c.state.select_order(&c.matrix, key);
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			let (px, py) = (x - c.state.config.margin_left, y - c.state.config.margin_top);
			c.state.set_hover(&c.matrix, px, py);
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.clear_hover();
		}
	};

	view! {
		<div class="matrix-view">
			<p class="matrix-controls">
				"Order: "
				<select id="order" on:change=on_order_change prop:value=move || order_signal.get().as_str()>
					{OrderKey::ALL
						.into_iter()
						.map(|key| view! { <option value=key.as_str()>{key.label()}</option> })
						.collect_view()}
				</select>
			</p>
			<canvas
				node_ref=canvas_ref
				class="matrix-canvas"
				on:mousemove=on_mousemove
				on:mouseleave=on_mouseleave
			/>
		</div>
	}
}
