//! Links between nearby particles.
//!
//! Every unordered pair is checked each frame, which is O(n²). That is fine for
//! the default 120 particles (~7k pairs). Much larger counts want a spatial
//! grid, and any such index has to keep the exact `dist < threshold` rule so
//! visual density does not change.

use super::particles::Particle;

/// Peak line alpha, reached when two particles coincide.
pub const MAX_CONNECTION_ALPHA: f64 = 0.3;

/// A line to draw between two particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	pub from: usize,
	pub to: usize,
	pub alpha: f64,
}

/// Line alpha for two particles `dist` apart. Zero at or beyond `max_dist`.
pub fn connection_alpha(dist: f64, max_dist: f64) -> f64 {
	if dist < max_dist {
		(max_dist - dist) / max_dist * MAX_CONNECTION_ALPHA
	} else {
		0.0
	}
}

/// All pairs closer than `max_dist`, with `from < to`.
pub fn find_connections(particles: &[Particle], max_dist: f64) -> Vec<Connection> {
	let mut links = Vec::new();
	for (i, a) in particles.iter().enumerate() {
		for (j, b) in particles.iter().enumerate().skip(i + 1) {
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist < max_dist {
				links.push(Connection {
					from: i,
					to: j,
					alpha: connection_alpha(dist, max_dist),
				});
			}
		}
	}
	links
}
