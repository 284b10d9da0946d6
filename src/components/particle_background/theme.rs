//! Visual theming for the particle background.
//!
//! Two related blues separate data packets from nodes; everything else is a
//! low-alpha tint of the same family.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self {
			a: a.clamp(0.0, 1.0),
			..self
		}
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Diagonal background wash.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	pub color: Color,
	/// Alpha at the start, middle and end of the diagonal.
	pub bands: [f64; 3],
}

/// Particle and connection colors.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	pub data: Color,
	pub node: Color,
	pub connection: Color,
	/// Blur radius of the data-particle halo.
	pub glow_blur: f64,
	/// Lightening applied to the data color for the inner highlight.
	pub highlight_lighten: f64,
	/// Stroke alpha multiplier for node rings.
	pub ring_alpha: f64,
}

/// Decoration layer colors. Alphas are baked into the colors except where
/// the layer animates its own alpha.
#[derive(Clone, Debug)]
pub struct DecorationStyle {
	pub grid: Color,
	pub circuit: Color,
	pub flow: Color,
	pub flow_dot: Color,
	pub scan: Color,
	pub scan_glow: f64,
	pub glyph_primary: Color,
	pub glyph_secondary: Color,
	pub glyph_glow: f64,
	pub falling: Color,
	pub glyph_font: &'static str,
	pub falling_font: &'static str,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub background: BackgroundStyle,
	pub particles: ParticleStyle,
	pub decorations: DecorationStyle,
}

impl Theme {
	/// Bright blue circuit board look (default).
	pub fn circuit() -> Self {
		Self {
			name: "circuit",
			background: BackgroundStyle {
				color: Color::rgb(59, 130, 246),
				bands: [0.05, 0.02, 0.05],
			},
			particles: ParticleStyle {
				data: Color::rgb(59, 130, 246),
				node: Color::rgb(96, 165, 250),
				connection: Color::rgb(59, 130, 246),
				glow_blur: 8.0,
				highlight_lighten: 0.85,
				ring_alpha: 0.3,
			},
			decorations: DecorationStyle {
				grid: Color::rgba(59, 130, 246, 0.05),
				circuit: Color::rgba(96, 165, 250, 0.15),
				flow: Color::rgba(59, 130, 246, 0.1),
				flow_dot: Color::rgb(96, 165, 250),
				scan: Color::rgba(96, 165, 250, 0.2),
				scan_glow: 10.0,
				glyph_primary: Color::rgb(96, 165, 250),
				glyph_secondary: Color::rgb(59, 130, 246),
				glyph_glow: 6.0,
				falling: Color::rgba(59, 130, 246, 0.15),
				glyph_font: "16px monospace",
				falling_font: "14px monospace",
			},
		}
	}

	/// Darker indigo variant with softer glows.
	pub fn midnight() -> Self {
		Self {
			name: "midnight",
			background: BackgroundStyle {
				color: Color::rgb(49, 46, 129),
				bands: [0.08, 0.03, 0.08],
			},
			particles: ParticleStyle {
				data: Color::rgb(99, 102, 241),
				node: Color::rgb(129, 140, 248),
				connection: Color::rgb(99, 102, 241),
				glow_blur: 5.0,
				highlight_lighten: 0.7,
				ring_alpha: 0.25,
			},
			decorations: DecorationStyle {
				grid: Color::rgba(99, 102, 241, 0.04),
				circuit: Color::rgba(129, 140, 248, 0.12),
				flow: Color::rgba(99, 102, 241, 0.08),
				flow_dot: Color::rgb(129, 140, 248),
				scan: Color::rgba(129, 140, 248, 0.15),
				scan_glow: 6.0,
				glyph_primary: Color::rgb(129, 140, 248),
				glyph_secondary: Color::rgb(99, 102, 241),
				glyph_glow: 4.0,
				falling: Color::rgba(99, 102, 241, 0.12),
				glyph_font: "16px monospace",
				falling_font: "14px monospace",
			},
		}
	}

	/// Look up a theme by name.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"circuit" => Some(Self::circuit()),
			"midnight" => Some(Self::midnight()),
			_ => None,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::circuit()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_uses_hex_when_opaque() {
		assert_eq!(Color::rgb(59, 130, 246).to_css(), "#3b82f6");
		assert_eq!(
			Color::rgb(59, 130, 246).with_alpha(0.5).to_css(),
			"rgba(59, 130, 246, 0.5)"
		);
	}

	#[test]
	fn lighten_moves_toward_white() {
		let c = Color::rgb(0, 100, 200).lighten(1.0);
		assert_eq!((c.r, c.g, c.b), (255, 255, 255));
	}

	#[test]
	fn data_and_node_tones_differ() {
		for theme in [Theme::circuit(), Theme::midnight()] {
			assert_ne!(theme.particles.data, theme.particles.node);
		}
	}

	#[test]
	fn lookup_by_name() {
		assert_eq!(Theme::by_name("midnight").map(|t| t.name), Some("midnight"));
		assert!(Theme::by_name("neon").is_none());
	}
}
