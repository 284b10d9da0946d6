//! Tunable constants for the simulation and decorations.
//!
//! Everything here defaults to the reference look. Hosts may override any
//! subset through JSON; missing fields keep their defaults.

use serde::Deserialize;

use super::decorations::MIN_GRID_SPACING;
use super::error::BackdropError;

/// Particle physics and population settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
	/// Number of particles, fixed for the lifetime of the system.
	pub count: usize,
	/// Maximum absolute initial velocity per axis (units per tick).
	pub max_initial_speed: f64,
	pub size_min: f64,
	pub size_max: f64,
	pub opacity_min: f64,
	pub opacity_max: f64,
	/// Probability that a particle is created as a `Node`.
	pub node_ratio: f64,
	/// Pointer attraction radius.
	pub influence_outer: f64,
	/// Pointer repulsion radius. Must not exceed `influence_outer`.
	pub influence_inner: f64,
	pub attraction: f64,
	pub repulsion: f64,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			count: 120,
			max_initial_speed: 0.25,
			size_min: 1.0,
			size_max: 3.0,
			opacity_min: 0.2,
			opacity_max: 0.7,
			node_ratio: 0.3,
			influence_outer: 150.0,
			influence_inner: 50.0,
			attraction: 0.03,
			repulsion: 0.05,
		}
	}
}

/// Decorative layer settings. Phase speeds are radians per millisecond.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DecorationConfig {
	pub grid_spacing: f64,
	pub flow_lines: usize,
	pub flow_speed: f64,
	pub dot_pulse_speed: f64,
	pub scan_speed: f64,
	/// Left circuit vertex phase speeds, one per oscillating vertex.
	pub circuit_speeds: [f64; 3],
	/// Right circuit vertex phase speeds.
	pub circuit_speeds_right: [f64; 3],
	pub primary_glyphs: usize,
	pub secondary_glyphs: usize,
	pub falling_count: usize,
	pub falling_spacing: f64,
	pub falling_offset: f64,
	/// Falling speed in units per millisecond.
	pub falling_speed: f64,
}

impl Default for DecorationConfig {
	fn default() -> Self {
		Self {
			grid_spacing: 50.0,
			flow_lines: 7,
			flow_speed: 0.002,
			dot_pulse_speed: 0.005,
			scan_speed: 0.0005,
			circuit_speeds: [0.001, 0.0015, 0.0012],
			circuit_speeds_right: [0.0013, 0.0009, 0.0017],
			primary_glyphs: 8,
			secondary_glyphs: 6,
			falling_count: 20,
			falling_spacing: 100.0,
			falling_offset: 50.0,
			falling_speed: 0.05,
		}
	}
}

/// Complete configuration for one mounted background.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BackdropConfig {
	pub particles: ParticleConfig,
	pub decorations: DecorationConfig,
	/// Particles closer than this are linked.
	pub connection_distance: f64,
	/// Fixed RNG seed; entropy when absent.
	pub seed: Option<u64>,
	/// Theme name, see [`super::theme::Theme::by_name`].
	pub theme: String,
}

impl Default for BackdropConfig {
	fn default() -> Self {
		Self {
			particles: ParticleConfig::default(),
			decorations: DecorationConfig::default(),
			connection_distance: 180.0,
			seed: None,
			theme: "circuit".to_string(),
		}
	}
}

impl BackdropConfig {
	/// Parse a JSON override and validate it.
	pub fn from_json(json: &str) -> Result<Self, BackdropError> {
		let config: Self = serde_json::from_str(json)
			.map_err(|e| BackdropError::InvalidConfig(e.to_string()))?;
		config.validate()?;
		Ok(config)
	}

	/// Reject values the simulation cannot run with.
	pub fn validate(&self) -> Result<(), BackdropError> {
		let p = &self.particles;
		if p.count == 0 {
			return Err(BackdropError::InvalidConfig(
				"particle count must be positive".into(),
			));
		}
		if !(self.connection_distance > 0.0) {
			return Err(BackdropError::InvalidConfig(format!(
				"connection distance must be positive, got {}",
				self.connection_distance
			)));
		}
		if !(p.influence_inner >= 0.0 && p.influence_inner <= p.influence_outer) {
			return Err(BackdropError::InvalidConfig(format!(
				"influence radii must satisfy 0 <= inner <= outer, got {} / {}",
				p.influence_inner, p.influence_outer
			)));
		}
		if p.size_min > p.size_max || p.opacity_min > p.opacity_max {
			return Err(BackdropError::InvalidConfig(
				"size and opacity ranges must be ordered".into(),
			));
		}
		if !(0.0..=1.0).contains(&p.node_ratio) {
			return Err(BackdropError::InvalidConfig(format!(
				"node ratio must be within [0, 1], got {}",
				p.node_ratio
			)));
		}
		if !(self.decorations.grid_spacing >= MIN_GRID_SPACING) {
			return Err(BackdropError::InvalidConfig(format!(
				"grid spacing must be at least {}, got {}",
				MIN_GRID_SPACING, self.decorations.grid_spacing
			)));
		}
		Ok(())
	}
}
