//! Pan/zoom state for the diagram surface.

/// Width of the logical coordinate space node positions are expressed in.
pub const LOGICAL_WIDTH: f64 = 1000.0;
/// Height of the logical coordinate space node positions are expressed in.
pub const LOGICAL_HEIGHT: f64 = 700.0;

/// Per-notch wheel zoom factor.
pub const ZOOM_FACTOR: f64 = 1.1;
/// Smallest visible width, in logical units.
pub const MIN_EXTENT: f64 = 1.0;
/// Largest visible width, in logical units.
pub const MAX_EXTENT: f64 = 1_000_000.0;

/// Visible region of the logical canvas, written to the surface's `viewBox`.
///
/// `w` and `h` stay strictly positive; the only mutators are
/// [`ViewBox::translate`] and [`ViewBox::scale`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
	pub x: f64,
	pub y: f64,
	pub w: f64,
	pub h: f64,
}

impl Default for ViewBox {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			w: LOGICAL_WIDTH,
			h: LOGICAL_HEIGHT,
		}
	}
}

impl ViewBox {
	pub fn translate(&mut self, dx: f64, dy: f64) {
		if dx.is_finite() && dy.is_finite() {
			self.x += dx;
			self.y += dy;
		}
	}

	/// Multiplies both extents by `factor`, keeping the origin fixed.
	///
	/// Returns `false` and leaves the box untouched when the result would leave
	/// `[MIN_EXTENT, MAX_EXTENT]` or the factor is not a positive number.
	pub fn scale(&mut self, factor: f64) -> bool {
		if !(factor.is_finite() && factor > 0.0) {
			return false;
		}
		let w = self.w * factor;
		if !(MIN_EXTENT..=MAX_EXTENT).contains(&w) {
			return false;
		}
		self.w = w;
		self.h *= factor;
		true
	}

	/// Value for the SVG `viewBox` attribute.
	pub fn to_attr(&self) -> String {
		format!("{} {} {} {}", self.x, self.y, self.w, self.h)
	}
}

/// Pan gesture state. Only lives between pointer-down and pointer-up/leave.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PanPhase {
	#[default]
	Idle,
	Panning {
		last_x: f64,
		last_y: f64,
	},
}

/// Turns pointer drags and wheel steps into changes of a [`ViewBox`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewportController {
	pub view: ViewBox,
	pub pan: PanPhase,
}

impl ViewportController {
	pub fn new() -> Self {
		Self::default()
	}

	/// Back to the full logical extent with no gesture in progress.
	pub fn reset(&mut self) {
		*self = Self::default();
	}

	pub fn is_panning(&self) -> bool {
		matches!(self.pan, PanPhase::Panning { .. })
	}

	pub fn pointer_down(&mut self, x: f64, y: f64) {
		self.pan = PanPhase::Panning {
			last_x: x,
			last_y: y,
		};
	}

	/// Pans by the pointer delta since the last event. `rendered_w`/`rendered_h`
	/// are the surface's on-screen size in pixels; one pixel covers the same
	/// number of logical units on both axes.
	///
	/// Returns whether the view changed.
	pub fn pointer_move(&mut self, x: f64, y: f64, rendered_w: f64, rendered_h: f64) -> bool {
		let PanPhase::Panning { last_x, last_y } = self.pan else {
			return false;
		};
		if rendered_w <= 0.0 || rendered_h <= 0.0 {
			return false;
		}
		// `xMidYMid meet` draws both axes at the larger of the two ratios.
		let scale = (self.view.w / rendered_w).max(self.view.h / rendered_h);
		// Dragging right moves the visible window left.
		self.view.translate(-(x - last_x) * scale, -(y - last_y) * scale);
		self.pan = PanPhase::Panning {
			last_x: x,
			last_y: y,
		};
		true
	}

	pub fn pointer_up(&mut self) {
		self.pan = PanPhase::Idle;
	}

	pub fn pointer_leave(&mut self) {
		self.pan = PanPhase::Idle;
	}

	/// Zooms in for negative (forward) wheel deltas, out otherwise.
	pub fn wheel(&mut self, delta_y: f64) -> bool {
		let factor = if delta_y < 0.0 {
			1.0 / ZOOM_FACTOR
		} else {
			ZOOM_FACTOR
		};
		self.view.scale(factor)
	}

	pub fn cursor(&self) -> &'static str {
		if self.is_panning() { "grabbing" } else { "grab" }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	fn assert_close(a: ViewBox, b: ViewBox) {
		assert!(
			(a.x - b.x).abs() < EPS
				&& (a.y - b.y).abs() < EPS
				&& (a.w - b.w).abs() < EPS
				&& (a.h - b.h).abs() < EPS,
			"{a:?} != {b:?}"
		);
	}

	#[test]
	fn default_is_full_extent() {
		let vp = ViewportController::new();
		assert_eq!(vp.view, ViewBox { x: 0.0, y: 0.0, w: 1000.0, h: 700.0 });
		assert_eq!(vp.view.to_attr(), "0 0 1000 700");
		assert_eq!(vp.cursor(), "grab");
	}

	#[test]
	fn wheel_forward_shrinks_and_backward_grows() {
		let mut vp = ViewportController::new();
		assert!(vp.wheel(-120.0));
		assert!(vp.view.w < 1000.0 && vp.view.h < 700.0);
		assert_eq!((vp.view.x, vp.view.y), (0.0, 0.0));

		let mut vp = ViewportController::new();
		assert!(vp.wheel(120.0));
		assert!(vp.view.w > 1000.0 && vp.view.h > 700.0);
	}

	#[test]
	fn zoom_never_degenerates() {
		let mut vp = ViewportController::new();
		for _ in 0..20_000 {
			vp.wheel(-1.0);
			assert!(vp.view.w > 0.0 && vp.view.h > 0.0);
		}
		assert!(vp.view.w >= MIN_EXTENT);
		for _ in 0..20_000 {
			vp.wheel(1.0);
			assert!(vp.view.w.is_finite() && vp.view.h.is_finite());
		}
		assert!(vp.view.w <= MAX_EXTENT);
		for i in 0..5_000 {
			vp.wheel(if i % 3 == 0 { 1.0 } else { -1.0 });
			assert!(vp.view.w > 0.0 && vp.view.h > 0.0);
		}
	}

	#[test]
	fn zoom_preserves_aspect_ratio() {
		let mut vp = ViewportController::new();
		for _ in 0..7 {
			vp.wheel(-1.0);
		}
		assert!((vp.view.w / vp.view.h - 1000.0 / 700.0).abs() < EPS);
	}

	#[test]
	fn move_while_idle_is_noop() {
		let mut vp = ViewportController::new();
		assert!(!vp.pointer_move(40.0, 40.0, 500.0, 350.0));
		assert_eq!(vp.view, ViewBox::default());
	}

	#[test]
	fn pan_scales_by_rendered_size_and_inverts() {
		let mut vp = ViewportController::new();
		vp.pointer_down(100.0, 100.0);
		assert_eq!(vp.cursor(), "grabbing");
		// Surface drawn at half the logical size: 1px == 2 units.
		assert!(vp.pointer_move(110.0, 95.0, 500.0, 350.0));
		assert_close(vp.view, ViewBox { x: -20.0, y: 10.0, w: 1000.0, h: 700.0 });

		// Baseline was re-recorded.
		vp.pointer_move(110.0, 95.0, 500.0, 350.0);
		assert_close(vp.view, ViewBox { x: -20.0, y: 10.0, w: 1000.0, h: 700.0 });
	}

	#[test]
	fn drag_there_and_back_restores_view() {
		let mut vp = ViewportController::new();
		vp.wheel(-1.0);
		let before = vp.view;

		vp.pointer_down(10.0, 20.0);
		vp.pointer_move(60.0, 45.0, 800.0, 560.0);
		vp.pointer_move(137.5, 3.25, 800.0, 560.0);
		vp.pointer_up();
		vp.pointer_down(137.5, 3.25);
		vp.pointer_move(10.0, 20.0, 800.0, 560.0);
		vp.pointer_up();

		assert_close(vp.view, before);
	}

	#[test]
	fn release_and_leave_end_the_gesture() {
		let mut vp = ViewportController::new();
		vp.pointer_down(0.0, 0.0);
		vp.pointer_up();
		assert!(!vp.is_panning());
		assert!(!vp.pointer_move(50.0, 50.0, 100.0, 100.0));

		vp.pointer_down(0.0, 0.0);
		vp.pointer_leave();
		assert_eq!(vp.pan, PanPhase::Idle);
		assert_eq!(vp.view, ViewBox::default());
	}

	#[test]
	fn pan_follows_pointer_on_letterboxed_surface() {
		let mut vp = ViewportController::new();
		// Twice as wide as the view's aspect: drawn at 1 unit per pixel, pillarboxed.
		vp.pointer_down(0.0, 0.0);
		vp.pointer_move(10.0, 10.0, 2000.0, 700.0);
		assert_close(vp.view, ViewBox { x: -10.0, y: -10.0, w: 1000.0, h: 700.0 });

		// Taller than the view's aspect: 2 units per pixel on both axes.
		let mut vp = ViewportController::new();
		vp.pointer_down(0.0, 0.0);
		vp.pointer_move(10.0, 10.0, 500.0, 700.0);
		assert_close(vp.view, ViewBox { x: -20.0, y: -20.0, w: 1000.0, h: 700.0 });
	}

	#[test]
	fn zero_sized_surface_is_ignored() {
		let mut vp = ViewportController::new();
		vp.pointer_down(0.0, 0.0);
		assert!(!vp.pointer_move(30.0, 30.0, 0.0, 350.0));
		assert_eq!(vp.view, ViewBox::default());
	}

	#[test]
	fn reset_restores_default() {
		let mut vp = ViewportController::new();
		vp.wheel(1.0);
		vp.pointer_down(0.0, 0.0);
		vp.pointer_move(5.0, 5.0, 100.0, 100.0);
		vp.reset();
		assert_eq!(vp, ViewportController::default());
	}
}
