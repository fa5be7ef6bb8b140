//! Visual theming shared by all canvas views.
//!
//! Provides the color type, palettes, and per-view style configuration.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// A color palette cycled by node group.
#[derive(Clone, Debug)]
pub struct NodePalette {
	pub colors: Vec<Color>,
}

impl NodePalette {
	/// The classic ten-color categorical palette (default).
	pub fn categorical() -> Self {
		Self {
			colors: vec![
				Color::rgb(0x1f, 0x77, 0xb4), // Blue
				Color::rgb(0xff, 0x7f, 0x0e), // Orange
				Color::rgb(0x2c, 0xa0, 0x2c), // Green
				Color::rgb(0xd6, 0x27, 0x28), // Red
				Color::rgb(0x94, 0x67, 0xbd), // Purple
				Color::rgb(0x8c, 0x56, 0x4b), // Brown
				Color::rgb(0xe3, 0x77, 0xc2), // Pink
				Color::rgb(0x7f, 0x7f, 0x7f), // Gray
				Color::rgb(0xbc, 0xbd, 0x22), // Olive
				Color::rgb(0x17, 0xbe, 0xcf), // Cyan
			],
		}
	}

	/// Muted slate blues and teals, easier on dark backgrounds.
	pub fn slate() -> Self {
		Self {
			colors: vec![
				Color::rgb(94, 129, 172),  // Steel blue
				Color::rgb(129, 161, 193), // Light steel
				Color::rgb(100, 148, 160), // Teal gray
				Color::rgb(136, 160, 175), // Cadet blue
				Color::rgb(108, 142, 173), // Air force blue
				Color::rgb(119, 158, 165), // Desaturated cyan
				Color::rgb(143, 163, 180), // Cool gray
				Color::rgb(122, 153, 168), // Dusty blue
			],
		}
	}

	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

/// Background style for the force view.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary background color
	pub color: Color,
	/// Secondary color for gradients
	pub color_secondary: Color,
	/// Whether to use radial gradient
	pub use_gradient: bool,
}

/// Edge visual style for the force view.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	pub color: Color,
}

/// Node visual style for the force view.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Whether nodes have inner gradients
	pub use_gradient: bool,
	/// Border/stroke width (0 = no border)
	pub border_width: f64,
	pub border_color: Color,
	pub label_color: Color,
}

/// Matrix view style: plot background, band grid, cells, axis labels.
#[derive(Clone, Debug)]
pub struct MatrixStyle {
	pub background: Color,
	pub grid: Color,
	/// Fill for cells whose endpoints sit in different groups.
	pub cell: Color,
	pub label_color: Color,
	/// Label color while the hovered cell's row/column is active.
	pub active_label_color: Color,
	/// Axis label font size in pixels.
	pub label_size: f64,
}

/// Tree view style shared by the dendrogram and radial renderings.
#[derive(Clone, Debug)]
pub struct TreeStyle {
	pub link_color: Color,
	pub link_width: f64,
	pub node_fill: Color,
	pub node_stroke: Color,
	pub label_color: Color,
	pub label_size: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub background: BackgroundStyle,
	pub edge: EdgeStyle,
	pub node: NodeStyle,
	pub matrix: MatrixStyle,
	pub tree: TreeStyle,
	pub palette: NodePalette,
}

impl Theme {
	/// White-page look matching the original deployment (default).
	pub fn light() -> Self {
		Self {
			name: "light",
			background: BackgroundStyle {
				color: Color::rgb(255, 255, 255),
				color_secondary: Color::rgb(255, 255, 255),
				use_gradient: false,
			},
			edge: EdgeStyle {
				color: Color::rgba(153, 153, 153, 0.6),
			},
			node: NodeStyle {
				use_gradient: false,
				border_width: 1.5,
				border_color: Color::rgb(255, 255, 255),
				label_color: Color::rgb(51, 51, 51),
			},
			matrix: MatrixStyle {
				background: Color::rgb(0xee, 0xee, 0xee),
				grid: Color::rgb(255, 255, 255),
				cell: Color::rgb(0, 0, 0),
				label_color: Color::rgb(0, 0, 0),
				active_label_color: Color::rgb(0xd6, 0x27, 0x28),
				label_size: 10.0,
			},
			tree: TreeStyle {
				link_color: Color::rgba(204, 204, 204, 1.0),
				link_width: 1.5,
				node_fill: Color::rgb(255, 255, 255),
				node_stroke: Color::rgb(0x4a, 0x90, 0xd9),
				label_color: Color::rgb(51, 51, 51),
				label_size: 11.0,
			},
			palette: NodePalette::categorical(),
		}
	}

	/// Dark variant for embedding on dark pages.
	pub fn midnight() -> Self {
		Self {
			name: "midnight",
			background: BackgroundStyle {
				color: Color::rgb(18, 20, 28),
				color_secondary: Color::rgb(25, 28, 38),
				use_gradient: true,
			},
			edge: EdgeStyle {
				color: Color::rgba(100, 120, 150, 0.45),
			},
			node: NodeStyle {
				use_gradient: true,
				border_width: 0.0,
				border_color: Color::rgba(255, 255, 255, 0.0),
				label_color: Color::rgba(255, 255, 255, 0.85),
			},
			matrix: MatrixStyle {
				background: Color::rgb(25, 28, 38),
				grid: Color::rgb(18, 20, 28),
				cell: Color::rgb(200, 210, 225),
				label_color: Color::rgba(255, 255, 255, 0.8),
				active_label_color: Color::rgb(0xff, 0x7f, 0x0e),
				label_size: 10.0,
			},
			tree: TreeStyle {
				link_color: Color::rgba(100, 120, 150, 0.5),
				link_width: 1.5,
				node_fill: Color::rgb(25, 28, 38),
				node_stroke: Color::rgb(129, 161, 193),
				label_color: Color::rgba(255, 255, 255, 0.85),
				label_size: 11.0,
			},
			palette: NodePalette::slate(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::light()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_output_formats() {
		assert_eq!(Color::rgb(31, 119, 180).to_css(), "#1f77b4");
		assert_eq!(
			Color::rgba(31, 119, 180, 0.5).to_css(),
			"rgba(31, 119, 180, 0.5)"
		);
	}

	#[test]
	fn lighten_and_darken_stay_in_range() {
		let c = Color::rgb(100, 150, 200);
		let lighter = c.lighten(1.0);
		assert_eq!((lighter.r, lighter.g, lighter.b), (255, 255, 255));
		let darker = c.darken(1.0);
		assert_eq!((darker.r, darker.g, darker.b), (0, 0, 0));
	}

	#[test]
	fn palette_wraps_around() {
		let palette = NodePalette::categorical();
		assert_eq!(palette.get(0), palette.get(10));
		assert_eq!(palette.get(3), palette.get(13));
	}
}
