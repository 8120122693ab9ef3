//! Visual styling for the portal map renderer.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
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

	/// CSS color string: hex for opaque colors, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Colors, fonts and stroke metrics for the renderer.
#[derive(Clone, Debug)]
pub struct MapTheme {
	/// Solid background fill.
	pub background: Color,
	/// Portal outline and link stroke color.
	pub stroke: Color,
	/// Backdrop behind a portal's inset image.
	pub backdrop: Color,
	/// Translucent darkening laid over a hovered portal.
	pub hover_overlay: Color,
	/// Hover label color.
	pub label_color: Color,
	/// CSS font shorthand for hover labels.
	pub label_font: String,
	/// Stroke width in world units. On screen it is multiplied by the zoom,
	/// so strokes thicken as you zoom in rather than staying constant.
	pub stroke_width: f64,
	/// Inset image size as a fraction of the portal diameter.
	pub image_inset: f64,
	/// Gap in screen pixels between a portal's rim and its hover label.
	pub label_offset: f64,
}

impl Default for MapTheme {
	fn default() -> Self {
		Self {
			background: Color::rgb(0, 0, 0),
			stroke: Color::rgb(255, 255, 255),
			backdrop: Color::rgb(0, 0, 0),
			hover_overlay: Color::rgba(0, 0, 0, 0.35),
			label_color: Color::rgb(255, 255, 255),
			label_font: "bold 14px sans-serif".to_string(),
			stroke_width: 10.0,
			image_inset: 0.5,
			label_offset: 20.0,
		}
	}
}
