//! Particle population and per-tick physics.
//!
//! Motion advances one implicit unit step per tick, so perceived speed follows
//! the frame rate. Decorations are driven by wall-clock time instead.

use super::config::ParticleConfig;
use super::input::PointerState;
use super::random::RandomSource;
use super::surface::SurfaceBounds;

/// Visual role of a particle, fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
	/// Larger hub that pulses and carries an outer ring.
	Node,
	/// Small glowing packet.
	Data,
}

/// A single simulated point.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub opacity: f64,
	pub kind: ParticleKind,
}

/// Fixed-size particle collection.
#[derive(Clone, Debug)]
pub struct ParticleSystem {
	pub particles: Vec<Particle>,
	influence_outer: f64,
	influence_inner: f64,
	attraction: f64,
	repulsion: f64,
}

impl ParticleSystem {
	/// Create `config.count` particles spread uniformly over `bounds`.
	pub fn initialize(config: &ParticleConfig, bounds: SurfaceBounds, rng: &mut RandomSource) -> Self {
		let speed = config.max_initial_speed;
		let particles = (0..config.count)
			.map(|_| Particle {
				x: rng.range(0.0, bounds.width),
				y: rng.range(0.0, bounds.height),
				vx: rng.range(-speed, speed),
				vy: rng.range(-speed, speed),
				size: rng.range(config.size_min, config.size_max),
				opacity: rng.range(config.opacity_min, config.opacity_max),
				kind: if rng.chance(config.node_ratio) {
					ParticleKind::Node
				} else {
					ParticleKind::Data
				},
			})
			.collect();

		Self {
			particles,
			influence_outer: config.influence_outer,
			influence_inner: config.influence_inner,
			attraction: config.attraction,
			repulsion: config.repulsion,
		}
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Advance every particle by one tick.
	///
	/// Order per particle: integrate, pointer impulse, reflect, clamp. The
	/// pointer impulse only affects velocity, so it shows up in position on
	/// the following tick. Negative or NaN bounds behave like zero.
	pub fn update(&mut self, bounds: SurfaceBounds, pointer: PointerState) {
		// `f64::max` drops NaN, so both limits are >= 0 and clamp cannot panic.
		let (width, height) = (bounds.width.max(0.0), bounds.height.max(0.0));
		let (outer, inner) = (self.influence_outer, self.influence_inner);
		let (attraction, repulsion) = (self.attraction, self.repulsion);

		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			let (dx, dy) = (pointer.x - p.x, pointer.y - p.y);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist > 0.0 && dist < outer {
				let (ux, uy) = (dx / dist, dy / dist);
				let falloff = (outer - dist) / outer;
				p.vx += ux * falloff * attraction;
				p.vy += uy * falloff * attraction;
				if dist < inner {
					p.vx -= ux * falloff * repulsion;
					p.vy -= uy * falloff * repulsion;
				}
			}

			if p.x < 0.0 || p.x > width {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > height {
				p.vy = -p.vy;
			}

			p.x = p.x.clamp(0.0, width);
			p.y = p.y.clamp(0.0, height);
		}
	}
}

/// Alpha multiplier for a node particle; each index gets its own phase.
pub fn node_pulse(index: usize, now_ms: f64) -> f64 {
	(now_ms * 0.005 + index as f64).sin() * 0.3 + 0.7
}
