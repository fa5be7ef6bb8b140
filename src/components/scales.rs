//! Coordinate scales shared by the canvas views.
//!
//! `BandScale` slices an axis into equal bands for the matrix view,
//! `LinearScale` maps a value domain to an output range with clamping, and
//! `clamp_world_size` keeps zoomed-out world-space sizes readable on screen.

/// Maps node indices to equal-width bands along one axis.
///
/// The band a node lands in is decided by an order permutation, so swapping
/// the permutation re-slots every node without touching the underlying data.
#[derive(Clone, Debug)]
pub struct BandScale {
	positions: Vec<f64>,
	band: f64,
}

impl BandScale {
	/// Builds a scale over `[0, extent)` from an order permutation.
	///
	/// `order[slot]` names the node occupying that slot, so the resulting
	/// scale answers the reverse question: where does node `i` sit.
	pub fn new(order: &[usize], extent: f64) -> Self {
		let n = order.len();
		let band = if n == 0 { 0.0 } else { extent / n as f64 };
		let mut positions = vec![0.0; n];
		for (slot, &index) in order.iter().enumerate() {
			positions[index] = slot as f64 * band;
		}
		Self { positions, band }
	}

	/// Start of the band occupied by `index`.
	pub fn position(&self, index: usize) -> f64 {
		self.positions[index]
	}

	/// Width of one band.
	pub fn band(&self) -> f64 {
		self.band
	}

	/// Number of bands.
	pub fn len(&self) -> usize {
		self.positions.len()
	}

	/// Whether the scale has no bands.
	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}
}

/// Linear mapping from a value domain to an output range.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
	domain: (f64, f64),
	range: (f64, f64),
	clamp: bool,
}

impl LinearScale {
	/// Scale mapping `domain` onto `[0, 1]`, unclamped.
	pub fn new(domain: (f64, f64)) -> Self {
		Self {
			domain,
			range: (0.0, 1.0),
			clamp: false,
		}
	}

	/// Replaces the output range.
	pub fn range(mut self, range: (f64, f64)) -> Self {
		self.range = range;
		self
	}

	/// Clamps output to the range bounds.
	pub fn clamped(mut self) -> Self {
		self.clamp = true;
		self
	}

	/// Maps a domain value to the output range.
	pub fn apply(&self, value: f64) -> f64 {
		let (d0, d1) = self.domain;
		let (r0, r1) = self.range;
		let mut t = if d1 == d0 {
			0.5
		} else {
			(value - d0) / (d1 - d0)
		};
		if self.clamp {
			t = t.clamp(0.0, 1.0);
		}
		r0 + (r1 - r0) * t
	}
}

/// World-space size with a minimum on-screen pixel size at zoom level `k`.
///
/// Used after the canvas transform is applied, so a screen size of
/// `min_screen` corresponds to a world size of `min_screen / k`.
pub fn clamp_world_size(base: f64, k: f64, min_screen: f64) -> f64 {
	base.max(min_screen / k)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn band_scale_slots_follow_the_order() {
		// Order [2, 0, 1]: node 2 first, node 0 second, node 1 last.
		let scale = BandScale::new(&[2, 0, 1], 300.0);
		assert_eq!(scale.band(), 100.0);
		assert_eq!(scale.position(2), 0.0);
		assert_eq!(scale.position(0), 100.0);
		assert_eq!(scale.position(1), 200.0);
	}

	#[test]
	fn band_scale_handles_empty_domain() {
		let scale = BandScale::new(&[], 1000.0);
		assert!(scale.is_empty());
		assert_eq!(scale.band(), 0.0);
	}

	#[test]
	fn linear_scale_maps_and_clamps() {
		let scale = LinearScale::new((0.0, 4.0)).clamped();
		assert_eq!(scale.apply(0.0), 0.0);
		assert_eq!(scale.apply(2.0), 0.5);
		assert_eq!(scale.apply(4.0), 1.0);
		assert_eq!(scale.apply(9.0), 1.0);
		assert_eq!(scale.apply(-3.0), 0.0);
	}

	#[test]
	fn linear_scale_unclamped_extrapolates() {
		let scale = LinearScale::new((0.0, 10.0)).range((0.0, 100.0));
		assert_eq!(scale.apply(15.0), 150.0);
	}

	#[test]
	fn linear_scale_degenerate_domain_hits_midrange() {
		let scale = LinearScale::new((3.0, 3.0)).range((0.0, 10.0));
		assert_eq!(scale.apply(3.0), 5.0);
	}

	#[test]
	fn world_size_clamps_when_zoomed_out() {
		// At k = 0.25, 5 world units are 1.25px on screen; the 5px floor wins.
		assert_eq!(clamp_world_size(5.0, 0.25, 5.0), 20.0);
		// At k = 2, 5 world units are 10px; no clamping.
		assert_eq!(clamp_world_size(5.0, 2.0, 5.0), 5.0);
	}
}
