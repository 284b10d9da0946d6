//! Geometry for the time-driven decorative layers.
//!
//! Everything here is a pure function of elapsed milliseconds and surface
//! bounds, so the layers move at the same speed regardless of frame rate. The
//! falling-character glyphs are the one exception: they are re-rolled from the
//! random source on every tick to produce a flicker.

use std::f64::consts::PI;

use super::config::DecorationConfig;
use super::random::RandomSource;
use super::surface::SurfaceBounds;

/// First code point of the falling-character range (Katakana block).
pub const FALLING_GLYPH_START: u32 = 0x30A0;
/// Number of code points in the falling-character range.
pub const FALLING_GLYPH_SPAN: u32 = 96;

/// Smallest grid spacing drawn; finer grids are skipped.
pub const MIN_GRID_SPACING: f64 = 1.0;

const PRIMARY_GLYPHS: [char; 8] = ['{', '}', '<', '>', '/', ';', '#', 'λ'];
const SECONDARY_GLYPHS: [char; 6] = ['0', '1', '∑', '∆', '∞', '≠'];

/// Grid line offsets along each axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLines {
	pub vertical: Vec<f64>,
	pub horizontal: Vec<f64>,
}

/// Static grid at a fixed spacing, starting at the origin. Empty when the
/// spacing is below [`MIN_GRID_SPACING`].
pub fn grid_lines(bounds: SurfaceBounds, spacing: f64) -> GridLines {
	let axis = |limit: f64| {
		if !(spacing >= MIN_GRID_SPACING) {
			return Vec::new();
		}
		let steps = (limit / spacing).floor() as usize;
		(0..=steps).map(|i| i as f64 * spacing).collect()
	};
	GridLines {
		vertical: axis(bounds.width),
		horizontal: axis(bounds.height),
	}
}

/// Polyline vertices for one circuit trace, in left-edge coordinates.
fn circuit_vertices(anchor_y: f64, t: f64, speeds: [f64; 3], phase: f64) -> Vec<(f64, f64)> {
	let [s0, s1, s2] = speeds;
	vec![
		(0.0, anchor_y),
		(100.0 + (t * s0 + phase).sin() * 20.0, anchor_y),
		(150.0, anchor_y + (t * s1 + phase).cos() * 30.0),
		(
			250.0 + (t * s2 + phase).sin() * 25.0,
			anchor_y + 60.0 + (t * s1 + phase).cos() * 30.0,
		),
		(300.0, anchor_y + 120.0 + (t * s0 + phase).sin() * 20.0),
	]
}

/// The two circuit traces: one hugging the left edge, one mirrored on the right.
/// Each trace oscillates at its own speeds so the two never move in lockstep.
pub fn circuit_paths(
	bounds: SurfaceBounds,
	t: f64,
	left_speeds: [f64; 3],
	right_speeds: [f64; 3],
) -> [Vec<(f64, f64)>; 2] {
	let left = circuit_vertices(bounds.height * 0.3, t, left_speeds, 0.0);
	let right = circuit_vertices(bounds.height * 0.55, t, right_speeds, PI)
		.into_iter()
		.map(|(x, y)| (bounds.width - x, y))
		.collect();
	[left, right]
}

/// A vertical data-flow line from the top edge down to `end_y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowLine {
	pub x: f64,
	pub end_y: f64,
	/// Alpha of the pulsing dot at the terminus.
	pub dot_alpha: f64,
}

/// Evenly spaced flow lines whose ends bob with a per-line phase.
pub fn flow_lines(bounds: SurfaceBounds, t: f64, config: &DecorationConfig) -> Vec<FlowLine> {
	let n = config.flow_lines;
	(0..n)
		.map(|i| {
			let phase = i as f64;
			FlowLine {
				x: bounds.width * (i + 1) as f64 / (n + 1) as f64,
				end_y: bounds.height * 0.5
					+ (t * config.flow_speed + phase).sin() * bounds.height * 0.3,
				dot_alpha: 0.5 + (t * config.dot_pulse_speed + phase).sin() * 0.3,
			}
		})
		.collect()
}

/// Vertical position of the scan line; sweeps the full height.
pub fn scan_line_y(bounds: SurfaceBounds, t: f64, speed: f64) -> f64 {
	let half = bounds.height / 2.0;
	half + (t * speed).sin() * half
}

/// Which floating glyph set a glyph belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphSet {
	/// Upper band, brighter.
	Primary,
	/// Lower band, dimmer.
	Secondary,
}

/// A code glyph drifting in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingGlyph {
	pub ch: char,
	pub x: f64,
	pub y: f64,
	pub alpha: f64,
	pub set: GlyphSet,
}

/// Both floating glyph sets, primary first.
pub fn floating_glyphs(bounds: SurfaceBounds, t: f64, config: &DecorationConfig) -> Vec<FloatingGlyph> {
	let primary_n = config.primary_glyphs;
	let secondary_n = config.secondary_glyphs;

	let primary = (0..primary_n).map(|i| {
		let fi = i as f64;
		FloatingGlyph {
			ch: PRIMARY_GLYPHS[i % PRIMARY_GLYPHS.len()],
			x: bounds.width * (fi + 0.5) / primary_n as f64 + (t * 0.001 + fi * 0.8).sin() * 20.0,
			y: 60.0 + (t * 0.0013 + fi).cos() * 15.0,
			alpha: 0.25 + (t * 0.002 + fi).sin() * 0.1,
			set: GlyphSet::Primary,
		}
	});

	let secondary = (0..secondary_n).map(|i| {
		let fi = i as f64;
		FloatingGlyph {
			ch: SECONDARY_GLYPHS[i % SECONDARY_GLYPHS.len()],
			x: bounds.width * (fi + 0.5) / secondary_n as f64
				+ (t * 0.0008 + fi * 1.3).cos() * 25.0,
			y: bounds.height - 60.0 + (t * 0.0011 + fi).sin() * 15.0,
			alpha: 0.12 + (t * 0.0015 + fi * 0.5).sin() * 0.06,
			set: GlyphSet::Secondary,
		}
	});

	primary.chain(secondary).collect()
}

/// One falling character for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallingGlyph {
	pub ch: char,
	pub x: f64,
	pub y: f64,
}

/// Deterministic positions of the falling characters. Empty on a zero-area surface.
pub fn falling_positions(bounds: SurfaceBounds, t: f64, config: &DecorationConfig) -> Vec<(f64, f64)> {
	if bounds.is_empty() {
		return Vec::new();
	}
	(0..config.falling_count)
		.map(|i| {
			let fi = i as f64;
			(
				(fi * config.falling_spacing).rem_euclid(bounds.width),
				(t * config.falling_speed + fi * config.falling_offset).rem_euclid(bounds.height),
			)
		})
		.collect()
}

/// Pick a fresh glyph from the falling-character range.
pub fn roll_glyph(rng: &mut RandomSource) -> char {
	let offset = rng.index(FALLING_GLYPH_SPAN as usize) as u32;
	char::from_u32(FALLING_GLYPH_START + offset).unwrap_or('\u{30A2}')
}

/// Positions for this frame paired with freshly rolled glyphs.
pub fn falling_glyphs(
	bounds: SurfaceBounds,
	t: f64,
	config: &DecorationConfig,
	rng: &mut RandomSource,
) -> Vec<FallingGlyph> {
	falling_positions(bounds, t, config)
		.into_iter()
		.map(|(x, y)| FallingGlyph {
			ch: roll_glyph(rng),
			x,
			y,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	const BOUNDS: SurfaceBounds = SurfaceBounds {
		width: 800.0,
		height: 600.0,
	};

	#[test]
	fn grid_covers_surface_at_spacing() {
		let grid = grid_lines(BOUNDS, 50.0);
		assert_eq!(grid.vertical.len(), 17);
		assert_eq!(grid.horizontal.len(), 13);
		assert_eq!(grid.vertical[1], 50.0);
		assert_eq!(*grid.horizontal.last().unwrap(), 600.0);
	}

	#[test]
	fn grid_skips_sub_unit_spacing() {
		for spacing in [1e-12, 0.5, 0.0, -50.0, f64::NAN] {
			assert_eq!(grid_lines(BOUNDS, spacing), GridLines::default(), "{spacing}");
		}
		assert_eq!(grid_lines(BOUNDS, MIN_GRID_SPACING).vertical.len(), 801);
	}

	const LEFT: [f64; 3] = [0.001, 0.0015, 0.0012];
	const RIGHT: [f64; 3] = [0.0013, 0.0009, 0.0017];

	#[test]
	fn right_circuit_mirrors_left_edge() {
		let [left, right] = circuit_paths(BOUNDS, 0.0, LEFT, RIGHT);
		assert_eq!(left.len(), right.len());
		assert_eq!(left[0].0, 0.0);
		assert_eq!(right[0].0, 800.0);
		assert_eq!(right[2].0, 800.0 - 150.0);
	}

	#[test]
	fn circuit_vertices_move_over_time() {
		let [a, _] = circuit_paths(BOUNDS, 0.0, LEFT, RIGHT);
		let [b, _] = circuit_paths(BOUNDS, 1000.0, LEFT, RIGHT);
		assert_ne!(a[1], b[1]);
		assert_eq!(a[0], b[0]);
	}

	#[test]
	fn circuits_oscillate_independently() {
		for t in [1000.0, 2500.0, 5000.0] {
			let [left, right] = circuit_paths(BOUNDS, t, LEFT, RIGHT);
			// Horizontal wobble of the second vertex, measured from each edge.
			let left_offset = left[1].0 - 100.0;
			let right_offset = (800.0 - right[1].0) - 100.0;
			assert!(
				(left_offset + right_offset).abs() > 1e-3,
				"t = {t}: right wobble mirrors left ({left_offset} vs {right_offset})"
			);
		}
	}

	#[test]
	fn flow_lines_are_evenly_spaced_and_bounded() {
		let config = DecorationConfig::default();
		for t in [0.0, 500.0, 12345.0] {
			let lines = flow_lines(BOUNDS, t, &config);
			assert_eq!(lines.len(), 7);
			assert_eq!(lines[0].x, 100.0);
			assert_eq!(lines[6].x, 700.0);
			for line in &lines {
				assert!((0.2 * 600.0 - 1e-9..=0.8 * 600.0 + 1e-9).contains(&line.end_y));
				assert!((0.2 - 1e-9..=0.8 + 1e-9).contains(&line.dot_alpha));
			}
		}
	}

	#[test]
	fn scan_line_sweeps_full_height() {
		assert_eq!(scan_line_y(BOUNDS, 0.0, 0.0005), 300.0);
		let quarter = PI / 2.0 / 0.0005;
		assert!((scan_line_y(BOUNDS, quarter, 0.0005) - 600.0).abs() < 1e-9);
		assert!(scan_line_y(BOUNDS, 3.0 * quarter, 0.0005).abs() < 1e-9);
	}

	#[test]
	fn glyph_sets_have_configured_sizes_and_alpha_ranges() {
		let config = DecorationConfig::default();
		let glyphs = floating_glyphs(BOUNDS, 4321.0, &config);
		let primary: Vec<_> = glyphs.iter().filter(|g| g.set == GlyphSet::Primary).collect();
		let secondary: Vec<_> = glyphs.iter().filter(|g| g.set == GlyphSet::Secondary).collect();
		assert_eq!(primary.len(), 8);
		assert_eq!(secondary.len(), 6);
		assert!(primary.iter().all(|g| (0.15..=0.35).contains(&g.alpha) && g.y < 100.0));
		assert!(secondary.iter().all(|g| (0.06..=0.18).contains(&g.alpha) && g.y > 500.0));
	}

	#[test]
	fn falling_positions_follow_formula() {
		let config = DecorationConfig::default();
		let positions = falling_positions(BOUNDS, 2000.0, &config);
		assert_eq!(positions.len(), 20);
		// i = 9: x = 900 mod 800, y = (2000 * 0.05 + 450) mod 600
		let (x, y) = positions[9];
		assert_eq!(x, 100.0);
		assert!((y - 550.0).abs() < 1e-9);
		for (x, y) in &positions {
			assert!((0.0..800.0).contains(x) && (0.0..600.0).contains(y));
		}
		assert_eq!(positions, falling_positions(BOUNDS, 2000.0, &config));
	}

	#[test]
	fn falling_skipped_on_empty_surface() {
		let config = DecorationConfig::default();
		assert!(falling_positions(SurfaceBounds::new(0.0, 600.0), 10.0, &config).is_empty());
	}

	#[test]
	fn rolled_glyphs_stay_in_range() {
		let mut rng = RandomSource::seeded(21);
		for _ in 0..500 {
			let cp = roll_glyph(&mut rng) as u32;
			assert!((FALLING_GLYPH_START..FALLING_GLYPH_START + FALLING_GLYPH_SPAN).contains(&cp));
		}
	}
}
