//! Pointer interaction state machine.
//!
//! Centralizes the click/drag/hover logic that would otherwise be smeared
//! across independent event handlers. Handlers feed canvas-local coordinates
//! in; the controller mutates the viewport and portal hover state and returns
//! the hrefs of clicked portals, leaving actual navigation to the caller so
//! the machine is testable without a pointer device.

use super::portal::Portal;
use super::viewport::{Viewport, ZOOM_STEP};

/// Maximum pointer displacement per axis, in screen pixels, still classified
/// as a click rather than a drag.
pub const CLICK_THRESHOLD: f64 = 5.0;

/// Gesture phase for the tracked pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
	#[default]
	Idle,
	/// Button down, displacement so far within the click threshold.
	Pressed,
	/// Button down, threshold exceeded at least once since the press.
	Dragging,
}

/// Tracks one pointer through press/drag/click gestures.
#[derive(Clone, Debug, Default)]
pub struct PointerController {
	phase: Phase,
	press_x: f64,
	press_y: f64,
	last_x: f64,
	last_y: f64,
}

impl PointerController {
	/// Current gesture phase.
	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// Button pressed at canvas-local `(x, y)`.
	pub fn on_press(&mut self, x: f64, y: f64) {
		self.phase = Phase::Pressed;
		self.press_x = x;
		self.press_y = y;
		self.last_x = x;
		self.last_y = y;
	}

	/// Pointer moved to `(x, y)`.
	///
	/// While the button is held, the viewport pans by the delta since the
	/// previous move — from the press itself, not only once the threshold is
	/// crossed, so the map tracks the pointer without a dead zone. Crossing
	/// the threshold on either axis turns the gesture into a drag for good.
	/// Hover state is recomputed on every move regardless of gesture phase.
	pub fn on_move(&mut self, x: f64, y: f64, viewport: &mut Viewport, portals: &mut [Portal]) {
		if self.phase != Phase::Idle {
			if (x - self.press_x).abs() > CLICK_THRESHOLD
				|| (y - self.press_y).abs() > CLICK_THRESHOLD
			{
				self.phase = Phase::Dragging;
			}
			viewport.pan(x - self.last_x, y - self.last_y);
			self.last_x = x;
			self.last_y = y;
		}

		for portal in portals.iter_mut() {
			let hovered = portal.contains_point(x, y, viewport);
			portal.set_hover(hovered);
		}
	}

	/// Button released at `(x, y)`.
	///
	/// If the gesture never crossed the click threshold this was a click:
	/// returns the href of every non-empty portal under the release point,
	/// in portal order. A drag (or a release with no tracked press) returns
	/// nothing. The controller returns to idle either way.
	pub fn on_release(
		&mut self,
		x: f64,
		y: f64,
		viewport: &Viewport,
		portals: &[Portal],
	) -> Vec<String> {
		let was_click = self.phase == Phase::Pressed;
		self.phase = Phase::Idle;
		if !was_click {
			return Vec::new();
		}

		portals
			.iter()
			.filter(|p| p.contains_point(x, y, viewport))
			.map(|p| p.href.clone())
			.collect()
	}

	/// Pointer left the canvas.
	///
	/// Aborts any in-flight gesture without dispatching a click; pan already
	/// applied stays applied. Hover state is cleared.
	pub fn on_leave(&mut self, portals: &mut [Portal]) {
		self.phase = Phase::Idle;
		for portal in portals.iter_mut() {
			portal.set_hover(false);
		}
	}

	/// Wheel scrolled by `delta_y` with the pointer at canvas-local `(x, y)`:
	/// one zoom step in (negative delta) or out, anchored at the pointer.
	pub fn on_wheel(&self, x: f64, y: f64, delta_y: f64, viewport: &mut Viewport) {
		let factor = if delta_y < 0.0 {
			ZOOM_STEP
		} else {
			1.0 / ZOOM_STEP
		};
		viewport.zoom_at(x, y, factor);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn portals() -> Vec<Portal> {
		vec![
			Portal::new(100.0, 100.0, 50.0, "A", "articles/A.html", false),
			Portal::new(400.0, 100.0, 50.0, "B", "articles/B.html", false),
			Portal::new(100.0, 400.0, 50.0, "Hub", "", true),
		]
	}

	fn rig() -> (PointerController, Viewport, Vec<Portal>) {
		(PointerController::default(), Viewport::new(1.0), portals())
	}

	#[test]
	fn test_click_within_threshold_dispatches_once() {
		let (mut pointer, mut viewport, mut portals) = rig();

		pointer.on_press(100.0, 100.0);
		pointer.on_move(103.0, 102.0, &mut viewport, &mut portals);
		pointer.on_move(101.0, 99.0, &mut viewport, &mut portals);
		assert_eq!(pointer.phase(), Phase::Pressed);

		// Portal A's center has been dragged along with the view.
		let hrefs = pointer.on_release(101.0, 99.0, &viewport, &portals);
		assert_eq!(hrefs, vec!["articles/A.html".to_string()]);
		assert_eq!(pointer.phase(), Phase::Idle);
	}

	#[test]
	fn test_drag_suppresses_click() {
		let (mut pointer, mut viewport, mut portals) = rig();

		pointer.on_press(100.0, 100.0);
		pointer.on_move(110.0, 100.0, &mut viewport, &mut portals);
		assert_eq!(pointer.phase(), Phase::Dragging);

		// Returning near the press point does not demote the drag.
		pointer.on_move(101.0, 100.0, &mut viewport, &mut portals);
		assert_eq!(pointer.phase(), Phase::Dragging);

		let hrefs = pointer.on_release(101.0, 100.0, &viewport, &portals);
		assert!(hrefs.is_empty());
	}

	#[test]
	fn test_threshold_is_per_axis() {
		let (mut pointer, mut viewport, mut portals) = rig();

		pointer.on_press(100.0, 100.0);
		// Within threshold on x, past it on y.
		pointer.on_move(102.0, 106.0, &mut viewport, &mut portals);
		assert_eq!(pointer.phase(), Phase::Dragging);
	}

	#[test]
	fn test_pan_starts_at_press_without_dead_zone() {
		let (mut pointer, mut viewport, mut portals) = rig();

		pointer.on_press(100.0, 100.0);
		pointer.on_move(103.0, 100.0, &mut viewport, &mut portals);
		assert_eq!(viewport.offset_x, 3.0);

		// Deltas accumulate per move event, not from the press position.
		pointer.on_move(104.0, 100.0, &mut viewport, &mut portals);
		assert_eq!(viewport.offset_x, 4.0);
	}

	#[test]
	fn test_move_without_press_does_not_pan() {
		let (mut pointer, mut viewport, mut portals) = rig();

		pointer.on_move(250.0, 250.0, &mut viewport, &mut portals);
		assert_eq!(viewport.offset_x, 0.0);
		assert_eq!(viewport.offset_y, 0.0);
	}

	#[test]
	fn test_hover_tracks_pointer() {
		let (mut pointer, mut viewport, mut portals) = rig();

		pointer.on_move(100.0, 100.0, &mut viewport, &mut portals);
		assert!(portals[0].hover);
		assert!(!portals[1].hover);

		pointer.on_move(400.0, 100.0, &mut viewport, &mut portals);
		assert!(!portals[0].hover);
		assert!(portals[1].hover);
	}

	#[test]
	fn test_empty_portal_never_hovers() {
		let (mut pointer, mut viewport, mut portals) = rig();

		// Dead center of the empty portal.
		pointer.on_move(100.0, 400.0, &mut viewport, &mut portals);
		assert!(!portals[2].hover);
		assert_eq!(portals[2].target_hover_scale, 1.0);
	}

	#[test]
	fn test_click_on_empty_portal_dispatches_nothing() {
		let (mut pointer, viewport, portals) = rig();

		pointer.on_press(100.0, 400.0);
		let hrefs = pointer.on_release(100.0, 400.0, &viewport, &portals);
		assert!(hrefs.is_empty());
	}

	#[test]
	fn test_leave_while_pressed_aborts_gesture() {
		let (mut pointer, mut viewport, mut portals) = rig();

		pointer.on_press(100.0, 100.0);
		pointer.on_move(130.0, 100.0, &mut viewport, &mut portals);
		assert_eq!(pointer.phase(), Phase::Dragging);
		let offset_after_drag = viewport.offset_x;

		pointer.on_leave(&mut portals);
		assert_eq!(pointer.phase(), Phase::Idle);
		// Applied pan is not reverted by the abort.
		assert_eq!(viewport.offset_x, offset_after_drag);

		// A stray release after the abort dispatches nothing.
		let hrefs = pointer.on_release(130.0, 100.0, &viewport, &portals);
		assert!(hrefs.is_empty());

		// The next press starts a fresh gesture with its own threshold.
		pointer.on_press(200.0, 200.0);
		pointer.on_move(202.0, 201.0, &mut viewport, &mut portals);
		assert_eq!(pointer.phase(), Phase::Pressed);
	}

	#[test]
	fn test_wheel_zooms_anchored_at_pointer() {
		let (pointer, mut viewport, _) = rig();

		let (px, py) = (320.0, 200.0);
		let before = viewport.screen_to_world(px, py);

		pointer.on_wheel(px, py, -120.0, &mut viewport);
		assert!((viewport.scale - ZOOM_STEP).abs() < 1e-9);
		let after = viewport.screen_to_world(px, py);
		assert!((before.0 - after.0).abs() < 1e-9);
		assert!((before.1 - after.1).abs() < 1e-9);

		pointer.on_wheel(px, py, 120.0, &mut viewport);
		assert!((viewport.scale - 1.0).abs() < 1e-9);
	}

	#[test]
	fn test_click_hits_all_overlapping_portals() {
		let mut portals = vec![
			Portal::new(100.0, 100.0, 50.0, "A", "articles/A.html", false),
			Portal::new(110.0, 100.0, 50.0, "B", "articles/B.html", false),
		];
		let mut viewport = Viewport::new(1.0);
		let mut pointer = PointerController::default();

		pointer.on_press(105.0, 100.0);
		pointer.on_move(105.0, 100.0, &mut viewport, &mut portals);
		let hrefs = pointer.on_release(105.0, 100.0, &viewport, &portals);
		assert_eq!(
			hrefs,
			vec!["articles/A.html".to_string(), "articles/B.html".to_string()]
		);
	}
}
