//! Logical size of the drawable surface.

/// Width and height of the surface in surface units (CSS pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceBounds {
	pub width: f64,
	pub height: f64,
}

impl SurfaceBounds {
	/// Bounds with negative or non-finite sides normalised to zero.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width: sanitize(width),
			height: sanitize(height),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.width <= 0.0 || self.height <= 0.0
	}
}

fn sanitize(v: f64) -> f64 {
	if v.is_finite() { v.max(0.0) } else { 0.0 }
}

/// Owns the surface bounds and follows viewport resizes.
///
/// Resizing never touches particles; they drift back inside through the
/// reflect-and-clamp step of the next updates.
#[derive(Clone, Debug)]
pub struct SurfaceManager {
	bounds: SurfaceBounds,
}

impl SurfaceManager {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			bounds: SurfaceBounds::new(width, height),
		}
	}

	/// Match the viewport. Returns `true` when the bounds actually changed.
	pub fn resize(&mut self, width: f64, height: f64) -> bool {
		let next = SurfaceBounds::new(width, height);
		let changed = next != self.bounds;
		self.bounds = next;
		changed
	}

	pub fn bounds(&self) -> SurfaceBounds {
		self.bounds
	}

	/// Canvas backing-store size for the current bounds.
	pub fn pixel_size(&self) -> (u32, u32) {
		(self.bounds.width as u32, self.bounds.height as u32)
	}
}
