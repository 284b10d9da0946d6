//! Pointer position tracking.

/// Last known pointer position in surface coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
	pub x: f64,
	pub y: f64,
}

/// Single-writer holder for the pointer position.
///
/// Pointer-move events overwrite the value, and the frame tick reads it. Until
/// the first event arrives the pointer sits at the origin.
#[derive(Clone, Debug, Default)]
pub struct InputTracker {
	pointer: PointerState,
}

impl InputTracker {
	/// Record a pointer move. Non-finite coordinates are ignored.
	pub fn set(&mut self, x: f64, y: f64) {
		if x.is_finite() && y.is_finite() {
			self.pointer = PointerState { x, y };
		}
	}

	pub fn pointer(&self) -> PointerState {
		self.pointer
	}
}
