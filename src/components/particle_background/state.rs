//! Owned simulation state for one mounted background.
//!
//! Built once by [`SimulationState::init`] and mutated only through the frame
//! scheduler. Rendering reads it without mutation.

use super::config::BackdropConfig;
use super::decorations::{self, FallingGlyph};
use super::input::InputTracker;
use super::particles::ParticleSystem;
use super::random::RandomSource;
use super::surface::{SurfaceBounds, SurfaceManager};

/// Everything a frame needs: particles, inputs, clock and per-frame glyphs.
#[derive(Clone, Debug)]
pub struct SimulationState {
	pub config: BackdropConfig,
	pub surface: SurfaceManager,
	pub input: InputTracker,
	pub particles: ParticleSystem,
	/// Milliseconds of wall-clock time accumulated across ticks.
	pub elapsed_ms: f64,
	/// Falling characters for the current frame, re-rolled every tick.
	pub falling: Vec<FallingGlyph>,
	rng: RandomSource,
}

impl SimulationState {
	/// Populate particles over the initial surface size.
	pub fn init(config: BackdropConfig, width: f64, height: f64, mut rng: RandomSource) -> Self {
		let surface = SurfaceManager::new(width, height);
		let particles = ParticleSystem::initialize(&config.particles, surface.bounds(), &mut rng);
		let falling =
			decorations::falling_glyphs(surface.bounds(), 0.0, &config.decorations, &mut rng);

		Self {
			config,
			surface,
			input: InputTracker::default(),
			particles,
			elapsed_ms: 0.0,
			falling,
			rng,
		}
	}

	pub fn bounds(&self) -> SurfaceBounds {
		self.surface.bounds()
	}

	/// One simulation step at the current elapsed time.
	pub fn advance(&mut self) {
		let bounds = self.surface.bounds();
		self.particles.update(bounds, self.input.pointer());
		self.falling = decorations::falling_glyphs(
			bounds,
			self.elapsed_ms,
			&self.config.decorations,
			&mut self.rng,
		);
	}
}
