//! A single portal: a circular map entity with hover animation state.

use web_sys::HtmlImageElement;

use super::viewport::Viewport;

/// Visual scale a hovered portal grows toward.
pub const HOVER_GROWTH: f64 = 1.1;

/// Smoothing speed for the hover animation. Higher = snappier.
const HOVER_SPEED: f64 = 10.0;

/// A circular entity on the map, either content-bearing (clickable, with an
/// image and a hover label) or decorative ("empty": outline only).
#[derive(Clone, Debug)]
pub struct Portal {
	/// World-space center.
	pub x: f64,
	pub y: f64,
	/// Radius in world units.
	pub radius: f64,
	/// Display name, doubling as the image asset key.
	pub label: String,
	/// Navigation target. Empty portals carry an empty string.
	pub href: String,
	/// Decorative portal: never hoverable, never clickable, never grows.
	pub is_empty: bool,
	/// Pointer currently over this portal.
	pub hover: bool,
	/// Animated visual scale, eased toward `target_hover_scale` each frame.
	pub hover_scale: f64,
	pub target_hover_scale: f64,
	/// Loaded image asset. `None` until the async load completes, and
	/// forever for empty portals or failed loads.
	pub image: Option<HtmlImageElement>,
}

impl Portal {
	/// Create a portal at a world position. Animation state starts at rest.
	pub fn new(
		x: f64,
		y: f64,
		radius: f64,
		label: impl Into<String>,
		href: impl Into<String>,
		is_empty: bool,
	) -> Self {
		Self {
			x,
			y,
			radius,
			label: label.into(),
			href: href.into(),
			is_empty,
			hover: false,
			hover_scale: 1.0,
			target_hover_scale: 1.0,
			image: None,
		}
	}

	/// Advance the hover animation by `dt` seconds.
	///
	/// Exponential smoothing toward the target; the `min(1, ..)` clamp keeps
	/// a large `dt` (tab was backgrounded) from overshooting past it.
	pub fn update(&mut self, dt: f64) {
		self.hover_scale +=
			(self.target_hover_scale - self.hover_scale) * (dt * HOVER_SPEED).min(1.0);
	}

	/// Center and radius mapped through the viewport: `(sx, sy, sr)`.
	///
	/// The radius here ignores the hover animation; growth is cosmetic and
	/// applied at draw time only.
	pub fn screen_geometry(&self, viewport: &Viewport) -> (f64, f64, f64) {
		let (sx, sy) = viewport.world_to_screen(self.x, self.y);
		(sx, sy, self.radius * viewport.scale)
	}

	/// Whether a screen-space point lies inside the portal's hit circle.
	///
	/// Empty portals never hit. The hit circle uses the unscaled radius from
	/// [`Portal::screen_geometry`], so the hit area stays stable while the
	/// drawn circle grows.
	pub fn contains_point(&self, px: f64, py: f64, viewport: &Viewport) -> bool {
		if self.is_empty {
			return false;
		}
		let (sx, sy, sr) = self.screen_geometry(viewport);
		let (dx, dy) = (px - sx, py - sy);
		dx * dx + dy * dy <= sr * sr
	}

	/// Set the hover flag and retarget the grow animation.
	/// No-op on empty portals.
	pub fn set_hover(&mut self, hovered: bool) {
		if self.is_empty {
			return;
		}
		self.hover = hovered;
		self.target_hover_scale = if hovered { HOVER_GROWTH } else { 1.0 };
	}
}
