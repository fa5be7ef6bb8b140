//! Matrix view state: active order, animated band offsets, hover tracking.
//!
//! Created once when the component mounts, then mutated each frame by the
//! animation loop. Switching orders starts a staggered eased transition of
//! every band towards its slot in the new permutation; the matrix itself is
//! never recomputed.

use crate::components::matrix::builder::{AdjacencyMatrix, OrderKey};
use crate::components::scales::BandScale;

/// Matrix plot geometry and timing, overridable as component props.
#[derive(Clone, Copy, Debug)]
pub struct MatrixConfig {
	/// Side length of the square plot area in pixels.
	pub plot_size: f64,
	pub margin_top: f64,
	pub margin_right: f64,
	pub margin_bottom: f64,
	pub margin_left: f64,
	/// Cell weight domain mapped onto fill opacity.
	pub z_domain: (f64, f64),
	/// Reorder transition duration in milliseconds.
	pub transition_ms: f64,
	/// Per-band stagger: delay in milliseconds per pixel of target offset.
	pub stagger_ms_per_px: f64,
	/// Time until the view switches itself to the group order, unless the
	/// user picks an order first.
	pub auto_switch_ms: f64,
}

impl Default for MatrixConfig {
	fn default() -> Self {
		Self {
			plot_size: 1000.0,
			margin_top: 80.0,
			margin_right: 0.0,
			margin_bottom: 10.0,
			margin_left: 80.0,
			z_domain: (0.0, 4.0),
			transition_ms: 2500.0,
			stagger_ms_per_px: 4.0,
			auto_switch_ms: 5000.0,
		}
	}
}

impl MatrixConfig {
	/// Canvas width including margins.
	pub fn canvas_width(&self) -> f64 {
		self.margin_left + self.plot_size + self.margin_right
	}

	/// Canvas height including margins.
	pub fn canvas_height(&self) -> f64 {
		self.margin_top + self.plot_size + self.margin_bottom
	}
}

/// One band's animation bookkeeping along an axis.
#[derive(Clone, Copy, Debug)]
struct Band {
	start: f64,
	target: f64,
	delay_ms: f64,
	offset: f64,
}

/// Mutable state of the matrix view.
pub struct MatrixState {
	pub config: MatrixConfig,
	pub active_order: OrderKey,
	/// Hovered cell as `(row node index, column node index)`.
	pub hover: Option<(usize, usize)>,
	bands: Vec<Band>,
	band_width: f64,
	clock_ms: f64,
	animating: bool,
	/// Countdown to the automatic group-order switch; `None` once fired
	/// or cancelled by a user selection.
	auto_switch_ms: Option<f64>,
}

/// Symmetric cubic ease: accelerate in, decelerate out.
fn ease_cubic_in_out(t: f64) -> f64 {
	let t = t.clamp(0.0, 1.0);
	if t < 0.5 {
		4.0 * t * t * t
	} else {
		let u = 2.0 * t - 2.0;
		0.5 * u * u * u + 1.0
	}
}

impl MatrixState {
	/// State for a freshly built matrix, showing the name order with the
	/// auto-switch countdown armed.
	pub fn new(matrix: &AdjacencyMatrix, config: MatrixConfig) -> Self {
		let scale = BandScale::new(matrix.orders().get(OrderKey::Name), config.plot_size);
		let bands = (0..matrix.n())
			.map(|index| {
				let position = scale.position(index);
				Band {
					start: position,
					target: position,
					delay_ms: 0.0,
					offset: position,
				}
			})
			.collect();

		Self {
			auto_switch_ms: Some(config.auto_switch_ms),
			config,
			active_order: OrderKey::Name,
			hover: None,
			bands,
			band_width: scale.band(),
			clock_ms: 0.0,
			animating: false,
		}
	}

	/// Current offset of a node's band along both axes.
	pub fn offset(&self, index: usize) -> f64 {
		self.bands[index].offset
	}

	/// Width of one band.
	pub fn band_width(&self) -> f64 {
		self.band_width
	}

	/// Whether a reorder transition is in flight.
	pub fn is_animating(&self) -> bool {
		self.animating
	}

	/// Whether the auto-switch countdown is still armed.
	pub fn auto_switch_pending(&self) -> bool {
		self.auto_switch_ms.is_some()
	}

	/// User-initiated order change: cancels the pending auto switch.
	pub fn select_order(&mut self, matrix: &AdjacencyMatrix, key: OrderKey) {
		self.auto_switch_ms = None;
		self.begin_transition(matrix, key);
	}

	/// Starts the staggered transition towards `key`'s permutation.
	///
	/// Each band's delay is proportional to its target offset, so the
	/// reorder sweeps across the plot instead of jumping at once.
	fn begin_transition(&mut self, matrix: &AdjacencyMatrix, key: OrderKey) {
		if key == self.active_order {
			return;
		}
		let scale = BandScale::new(matrix.orders().get(key), self.config.plot_size);
		for (index, band) in self.bands.iter_mut().enumerate() {
			band.start = band.offset;
			band.target = scale.position(index);
			band.delay_ms = band.target * self.config.stagger_ms_per_px;
		}
		self.active_order = key;
		self.clock_ms = 0.0;
		self.animating = !self.bands.is_empty();
	}

	/// Advances animation clocks by `dt_ms` milliseconds.
	///
	/// Fires the automatic switch to the group order when its countdown
	/// expires, then moves every band along its eased trajectory.
	pub fn tick(&mut self, matrix: &AdjacencyMatrix, dt_ms: f64) {
		if let Some(remaining) = self.auto_switch_ms {
			let remaining = remaining - dt_ms;
			if remaining <= 0.0 {
				self.auto_switch_ms = None;
				self.begin_transition(matrix, OrderKey::Group);
			} else {
				self.auto_switch_ms = Some(remaining);
			}
		}

		if !self.animating {
			return;
		}
		self.clock_ms += dt_ms;

		let mut done = true;
		for band in &mut self.bands {
			let t = (self.clock_ms - band.delay_ms) / self.config.transition_ms;
			if t < 1.0 {
				done = false;
			}
			let eased = ease_cubic_in_out(t);
			band.offset = band.start + (band.target - band.start) * eased;
		}
		if done {
			for band in &mut self.bands {
				band.offset = band.target;
			}
			self.animating = false;
		}
	}

	/// Node whose band currently covers `coord` on either plot axis.
	///
	/// Scans live offsets, so hit-testing stays correct mid-transition.
	pub fn node_at(&self, coord: f64) -> Option<usize> {
		self.bands
			.iter()
			.position(|band| coord >= band.offset && coord < band.offset + self.band_width)
	}

	/// Updates hover from plot-space mouse coordinates, keeping only cells
	/// that carry weight, matching which cells are actually drawn.
	pub fn set_hover(&mut self, matrix: &AdjacencyMatrix, px: f64, py: f64) {
		self.hover = match (self.node_at(px), self.node_at(py)) {
			(Some(col), Some(row)) if matrix.cell(col, row).z != 0.0 => Some((row, col)),
			_ => None,
		};
	}

	/// Clears hover, e.g. when the pointer leaves the canvas.
	pub fn clear_hover(&mut self) {
		self.hover = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::matrix::builder::build;
	use crate::data::graph::{Graph, GraphLink, GraphNode};

	fn sample_matrix() -> AdjacencyMatrix {
		// Name order [1, 0, 2]; group order [2, 0, 1]; count order [0, 1, 2].
		let graph = Graph {
			nodes: vec![
				GraphNode {
					name: "beta".into(),
					group: 2,
				},
				GraphNode {
					name: "alpha".into(),
					group: 1,
				},
				GraphNode {
					name: "gamma".into(),
					group: 3,
				},
			],
			links: vec![
				GraphLink {
					source: 0,
					target: 1,
					value: 4.0,
				},
				GraphLink {
					source: 0,
					target: 2,
					value: 2.0,
				},
			],
		};
		build(&graph).unwrap()
	}

	fn config() -> MatrixConfig {
		MatrixConfig {
			plot_size: 300.0,
			..MatrixConfig::default()
		}
	}

	#[test]
	fn initial_offsets_follow_the_name_order() {
		let matrix = sample_matrix();
		let state = MatrixState::new(&matrix, config());
		// alpha (1), beta (0), gamma (2).
		assert_eq!(state.offset(1), 0.0);
		assert_eq!(state.offset(0), 100.0);
		assert_eq!(state.offset(2), 200.0);
		assert_eq!(state.band_width(), 100.0);
		assert!(!state.is_animating());
	}

	#[test]
	fn transition_reaches_the_new_order() {
		let matrix = sample_matrix();
		let mut state = MatrixState::new(&matrix, config());
		state.select_order(&matrix, OrderKey::Group);
		assert!(state.is_animating());

		// Duration plus the worst-case stagger delay.
		let total = state.config.transition_ms + 300.0 * state.config.stagger_ms_per_px;
		let mut elapsed = 0.0;
		while elapsed < total + 32.0 {
			state.tick(&matrix, 16.0);
			elapsed += 16.0;
		}
		assert!(!state.is_animating());
		// Group descending: gamma (2), beta (0), alpha (1).
		assert_eq!(state.offset(2), 0.0);
		assert_eq!(state.offset(0), 100.0);
		assert_eq!(state.offset(1), 200.0);
	}

	#[test]
	fn mid_transition_offsets_are_between_start_and_target() {
		let matrix = sample_matrix();
		let mut state = MatrixState::new(&matrix, config());
		state.select_order(&matrix, OrderKey::Group);
		state.tick(&matrix, 600.0);
		// alpha moves 0 -> 200; partway there, strictly between.
		let offset = state.offset(1);
		assert!(offset > 0.0 && offset < 200.0, "offset = {offset}");
	}

	#[test]
	fn reselecting_the_active_order_is_a_no_op() {
		let matrix = sample_matrix();
		let mut state = MatrixState::new(&matrix, config());
		state.select_order(&matrix, OrderKey::Name);
		assert!(!state.is_animating());
	}

	#[test]
	fn auto_switch_fires_after_the_countdown() {
		let matrix = sample_matrix();
		let mut state = MatrixState::new(&matrix, config());
		assert!(state.auto_switch_pending());
		state.tick(&matrix, 4999.0);
		assert_eq!(state.active_order, OrderKey::Name);
		state.tick(&matrix, 1.0);
		assert_eq!(state.active_order, OrderKey::Group);
		assert!(!state.auto_switch_pending());
		assert!(state.is_animating());
	}

	#[test]
	fn user_selection_cancels_the_auto_switch() {
		let matrix = sample_matrix();
		let mut state = MatrixState::new(&matrix, config());
		state.select_order(&matrix, OrderKey::Count);
		state.tick(&matrix, 10_000.0);
		assert_eq!(state.active_order, OrderKey::Count);
	}

	#[test]
	fn node_lookup_matches_band_offsets() {
		let matrix = sample_matrix();
		let state = MatrixState::new(&matrix, config());
		assert_eq!(state.node_at(0.0), Some(1));
		assert_eq!(state.node_at(150.0), Some(0));
		assert_eq!(state.node_at(299.9), Some(2));
		assert_eq!(state.node_at(301.0), None);
		assert_eq!(state.node_at(-5.0), None);
	}

	#[test]
	fn hover_only_lands_on_occupied_cells() {
		let matrix = sample_matrix();
		let mut state = MatrixState::new(&matrix, config());
		// alpha's column (slot 0), beta's row (slot 1): linked, weight 4.
		state.set_hover(&matrix, 50.0, 150.0);
		assert_eq!(state.hover, Some((0, 1)));
		// alpha x gamma carries no weight: no hover.
		state.set_hover(&matrix, 50.0, 250.0);
		assert_eq!(state.hover, None);
		state.set_hover(&matrix, 50.0, 150.0);
		state.clear_hover();
		assert_eq!(state.hover, None);
	}

	#[test]
	fn ease_boundaries() {
		assert_eq!(ease_cubic_in_out(0.0), 0.0);
		assert_eq!(ease_cubic_in_out(1.0), 1.0);
		assert_eq!(ease_cubic_in_out(0.5), 0.5);
		// Clamped outside [0, 1].
		assert_eq!(ease_cubic_in_out(-1.0), 0.0);
		assert_eq!(ease_cubic_in_out(2.0), 1.0);
	}
}
