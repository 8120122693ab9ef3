//! Pan/zoom view transform between world and screen space.
//!
//! Portal positions and radii live in world space; pointer events and canvas
//! drawing happen in screen pixels. The viewport owns the single affine
//! transform between the two: a uniform scale followed by a translation.
//! Both drawing and hit-testing go through it, so the map can never disagree
//! with the pointer about where a portal is.

/// Initial zoom applied at startup, sized so the whole grid is in view.
pub const DEFAULT_SCALE: f64 = 0.2;

/// Multiplier applied per wheel zoom-in step; zoom-out divides by it, so a
/// wheel-down exactly undoes a wheel-up.
pub const ZOOM_STEP: f64 = 1.1;

/// Screen-space translation and uniform zoom applied to the whole map.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
	pub offset_x: f64,
	pub offset_y: f64,
	/// Zoom factor. At 1.0, world units equal screen pixels. Always > 0.
	pub scale: f64,
}

impl Default for Viewport {
	fn default() -> Self {
		Self::new(DEFAULT_SCALE)
	}
}

impl Viewport {
	/// Create a viewport with the given initial zoom and no translation.
	pub fn new(scale: f64) -> Self {
		Self {
			offset_x: 0.0,
			offset_y: 0.0,
			scale,
		}
	}

	/// Map a world point to screen pixels.
	pub fn world_to_screen(&self, wx: f64, wy: f64) -> (f64, f64) {
		(wx * self.scale + self.offset_x, wy * self.scale + self.offset_y)
	}

	/// Map a screen point back to world coordinates.
	pub fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.offset_x) / self.scale,
			(sy - self.offset_y) / self.scale,
		)
	}

	/// Translate the view by a pointer delta in screen pixels.
	pub fn pan(&mut self, dx: f64, dy: f64) {
		self.offset_x += dx;
		self.offset_y += dy;
	}

	/// Multiply the zoom by `factor`, keeping the world point currently under
	/// the screen position `(sx, sy)` visually fixed.
	///
	/// The scale is not clamped; sustained zooming in one direction will
	/// eventually lose float precision, and zooming back out recovers.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let (wx, wy) = self.screen_to_world(sx, sy);
		self.scale *= factor;
		self.offset_x = sx - wx * self.scale;
		self.offset_y = sy - wy * self.scale;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	#[test]
	fn test_world_screen_round_trip() {
		let mut viewport = Viewport::new(0.37);
		viewport.pan(123.5, -88.25);

		for &(wx, wy) in &[(0.0, 0.0), (600.0, 800.0), (-1500.0, 42.0)] {
			let (sx, sy) = viewport.world_to_screen(wx, wy);
			let (rx, ry) = viewport.screen_to_world(sx, sy);
			assert!((rx - wx).abs() < EPS, "x round trip: {rx} vs {wx}");
			assert!((ry - wy).abs() < EPS, "y round trip: {ry} vs {wy}");
		}
	}

	#[test]
	fn test_pan_moves_offset_only() {
		let mut viewport = Viewport::new(0.2);
		viewport.pan(10.0, -4.0);
		viewport.pan(2.5, 2.5);

		assert_eq!(viewport.offset_x, 12.5);
		assert_eq!(viewport.offset_y, -1.5);
		assert_eq!(viewport.scale, 0.2);
	}

	#[test]
	fn test_zoom_at_anchors_pointer() {
		let mut viewport = Viewport::new(0.2);
		viewport.pan(40.0, 70.0);

		let (px, py) = (312.0, 145.0);
		let before = viewport.screen_to_world(px, py);
		viewport.zoom_at(px, py, ZOOM_STEP);
		let after = viewport.screen_to_world(px, py);

		assert!((before.0 - after.0).abs() < EPS);
		assert!((before.1 - after.1).abs() < EPS);
		assert!((viewport.scale - 0.2 * ZOOM_STEP).abs() < EPS);
	}

	#[test]
	fn test_zoom_out_undoes_zoom_in() {
		let mut viewport = Viewport::new(1.0);
		viewport.zoom_at(100.0, 100.0, ZOOM_STEP);
		viewport.zoom_at(100.0, 100.0, 1.0 / ZOOM_STEP);

		assert!((viewport.scale - 1.0).abs() < EPS);
		assert!(viewport.offset_x.abs() < 1e-6);
		assert!(viewport.offset_y.abs() < 1e-6);
	}

	#[test]
	fn test_zoom_is_unbounded() {
		let mut viewport = Viewport::new(1.0);
		for _ in 0..100 {
			viewport.zoom_at(0.0, 0.0, ZOOM_STEP);
		}
		assert!(viewport.scale > 1000.0);

		for _ in 0..300 {
			viewport.zoom_at(0.0, 0.0, 1.0 / ZOOM_STEP);
		}
		assert!(viewport.scale > 0.0);
		assert!(viewport.scale < 1.0);
	}
}
