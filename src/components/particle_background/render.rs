//! Canvas rendering for the particle background.
//!
//! Draws one frame from a [`SimulationState`] in the z-order given by
//! [`FRAME_ORDER`]: connections, then particles, then the seven decoration
//! layers (background wash, grid, circuit paths, flow lines, scan line,
//! floating glyphs, falling characters) on top.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::connections::find_connections;
use super::decorations::{self, GlyphSet};
use super::particles::{ParticleKind, node_pulse};
use super::state::SimulationState;
use super::surface::SurfaceBounds;
use super::theme::Theme;

/// One paint pass of a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Layer {
	Connections,
	Particles,
	Background,
	Grid,
	Circuits,
	FlowLines,
	ScanLine,
	FloatingGlyphs,
	FallingChars,
}

/// Paint order, bottom to top.
const FRAME_ORDER: [Layer; 9] = [
	Layer::Connections,
	Layer::Particles,
	Layer::Background,
	Layer::Grid,
	Layer::Circuits,
	Layer::FlowLines,
	Layer::ScanLine,
	Layer::FloatingGlyphs,
	Layer::FallingChars,
];

/// Renders the complete frame to the canvas.
pub fn render(state: &SimulationState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let bounds = state.bounds();
	let t = state.elapsed_ms;
	let deco = &state.config.decorations;

	ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);
	if bounds.is_empty() {
		return;
	}

	for layer in FRAME_ORDER {
		match layer {
			Layer::Connections => draw_connections(state, ctx, theme),
			Layer::Particles => draw_particles(state, ctx, theme, t),
			Layer::Background => draw_background(ctx, bounds, theme),
			Layer::Grid => draw_grid(ctx, bounds, deco.grid_spacing, theme),
			Layer::Circuits => draw_circuits(
				ctx,
				bounds,
				t,
				deco.circuit_speeds,
				deco.circuit_speeds_right,
				theme,
			),
			Layer::FlowLines => draw_flow_lines(state, ctx, bounds, t, theme),
			Layer::ScanLine => draw_scan_line(state, ctx, bounds, t, theme),
			Layer::FloatingGlyphs => draw_floating_glyphs(state, ctx, bounds, t, theme),
			Layer::FallingChars => draw_falling(state, ctx, theme),
		}
	}

	reset_shadow(ctx);
	ctx.set_global_alpha(1.0);
}

fn reset_shadow(ctx: &CanvasRenderingContext2d) {
	ctx.set_shadow_blur(0.0);
	ctx.set_shadow_color("rgba(0, 0, 0, 0)");
}

fn draw_background(ctx: &CanvasRenderingContext2d, bounds: SurfaceBounds, theme: &Theme) {
	let bg = &theme.background;
	let gradient = ctx.create_linear_gradient(0.0, 0.0, bounds.width, bounds.height);
	let [start, middle, end] = bg.bands;
	let _ = gradient.add_color_stop(0.0, &bg.color.with_alpha(start).to_css());
	let _ = gradient.add_color_stop(0.5, &bg.color.with_alpha(middle).to_css());
	let _ = gradient.add_color_stop(1.0, &bg.color.with_alpha(end).to_css());

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, bounds.width, bounds.height);
}

fn draw_grid(ctx: &CanvasRenderingContext2d, bounds: SurfaceBounds, spacing: f64, theme: &Theme) {
	let grid = decorations::grid_lines(bounds, spacing);
	ctx.set_stroke_style_str(&theme.decorations.grid.to_css());
	ctx.set_line_width(1.0);

	ctx.begin_path();
	for x in &grid.vertical {
		ctx.move_to(*x, 0.0);
		ctx.line_to(*x, bounds.height);
	}
	for y in &grid.horizontal {
		ctx.move_to(0.0, *y);
		ctx.line_to(bounds.width, *y);
	}
	ctx.stroke();
}

fn draw_connections(state: &SimulationState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let particles = &state.particles.particles;
	let color = theme.particles.connection;
	ctx.set_line_width(1.0);

	for link in find_connections(particles, state.config.connection_distance) {
		let (a, b) = (&particles[link.from], &particles[link.to]);
		ctx.set_stroke_style_str(&color.with_alpha(link.alpha).to_css());
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

fn draw_particles(state: &SimulationState, ctx: &CanvasRenderingContext2d, theme: &Theme, t: f64) {
	let style = &theme.particles;

	for (i, p) in state.particles.particles.iter().enumerate() {
		match p.kind {
			ParticleKind::Data => {
				ctx.set_shadow_blur(style.glow_blur);
				ctx.set_shadow_color(&style.data.with_alpha(p.opacity).to_css());
				ctx.set_fill_style_str(&style.data.with_alpha(p.opacity).to_css());
				ctx.begin_path();
				let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
				ctx.fill();
				reset_shadow(ctx);

				let highlight = style.data.lighten(style.highlight_lighten);
				ctx.set_fill_style_str(&highlight.with_alpha(p.opacity * 0.3).to_css());
				ctx.begin_path();
				let _ = ctx.arc(p.x, p.y, p.size * 0.5, 0.0, PI * 2.0);
				ctx.fill();
			}
			ParticleKind::Node => {
				let alpha = p.opacity * node_pulse(i, t);
				ctx.set_fill_style_str(&style.node.with_alpha(alpha).to_css());
				ctx.begin_path();
				let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
				ctx.fill();

				ctx.set_stroke_style_str(
					&style.node.with_alpha(p.opacity * style.ring_alpha).to_css(),
				);
				ctx.set_line_width(0.5);
				ctx.begin_path();
				let _ = ctx.arc(p.x, p.y, p.size * 2.0, 0.0, PI * 2.0);
				ctx.stroke();
			}
		}
	}
}

fn draw_circuits(
	ctx: &CanvasRenderingContext2d,
	bounds: SurfaceBounds,
	t: f64,
	left_speeds: [f64; 3],
	right_speeds: [f64; 3],
	theme: &Theme,
) {
	ctx.set_stroke_style_str(&theme.decorations.circuit.to_css());
	ctx.set_line_width(1.5);

	for path in decorations::circuit_paths(bounds, t, left_speeds, right_speeds) {
		let mut points = path.iter();
		let Some(&(x0, y0)) = points.next() else {
			continue;
		};
		ctx.begin_path();
		ctx.move_to(x0, y0);
		for &(x, y) in points {
			ctx.line_to(x, y);
		}
		ctx.stroke();
	}
}

fn draw_flow_lines(
	state: &SimulationState,
	ctx: &CanvasRenderingContext2d,
	bounds: SurfaceBounds,
	t: f64,
	theme: &Theme,
) {
	let style = &theme.decorations;
	for line in decorations::flow_lines(bounds, t, &state.config.decorations) {
		ctx.set_stroke_style_str(&style.flow.to_css());
		ctx.set_line_width(1.0);
		ctx.begin_path();
		ctx.move_to(line.x, 0.0);
		ctx.line_to(line.x, line.end_y);
		ctx.stroke();

		ctx.set_fill_style_str(&style.flow_dot.with_alpha(line.dot_alpha).to_css());
		ctx.begin_path();
		let _ = ctx.arc(line.x, line.end_y, 3.0, 0.0, PI * 2.0);
		ctx.fill();
	}
}

fn draw_scan_line(
	state: &SimulationState,
	ctx: &CanvasRenderingContext2d,
	bounds: SurfaceBounds,
	t: f64,
	theme: &Theme,
) {
	let style = &theme.decorations;
	let y = decorations::scan_line_y(bounds, t, state.config.decorations.scan_speed);

	ctx.set_shadow_blur(style.scan_glow);
	ctx.set_shadow_color(&style.scan.with_alpha(style.scan.a * 2.0).to_css());
	ctx.set_stroke_style_str(&style.scan.to_css());
	ctx.set_line_width(2.0);
	ctx.begin_path();
	ctx.move_to(0.0, y);
	ctx.line_to(bounds.width, y);
	ctx.stroke();
	reset_shadow(ctx);
}

fn draw_floating_glyphs(
	state: &SimulationState,
	ctx: &CanvasRenderingContext2d,
	bounds: SurfaceBounds,
	t: f64,
	theme: &Theme,
) {
	let style = &theme.decorations;
	ctx.set_font(style.glyph_font);

	let mut buf = [0u8; 4];
	for glyph in decorations::floating_glyphs(bounds, t, &state.config.decorations) {
		let base = match glyph.set {
			GlyphSet::Primary => style.glyph_primary,
			GlyphSet::Secondary => style.glyph_secondary,
		};
		let color = base.with_alpha(glyph.alpha).to_css();
		let text = glyph.ch.encode_utf8(&mut buf);

		// Glow pass, then a crisp pass on top.
		ctx.set_shadow_blur(style.glyph_glow);
		ctx.set_shadow_color(&color);
		ctx.set_fill_style_str(&color);
		let _ = ctx.fill_text(text, glyph.x, glyph.y);
		reset_shadow(ctx);
		let _ = ctx.fill_text(text, glyph.x, glyph.y);
	}
}

fn draw_falling(state: &SimulationState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let style = &theme.decorations;
	ctx.set_font(style.falling_font);
	ctx.set_fill_style_str(&style.falling.to_css());

	let mut buf = [0u8; 4];
	for glyph in &state.falling {
		let _ = ctx.fill_text(glyph.ch.encode_utf8(&mut buf), glyph.x, glyph.y);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn position(layer: Layer) -> usize {
		FRAME_ORDER.iter().position(|l| *l == layer).unwrap()
	}

	#[test]
	fn particles_sit_under_every_decoration() {
		let decorations = [
			Layer::Background,
			Layer::Grid,
			Layer::Circuits,
			Layer::FlowLines,
			Layer::ScanLine,
			Layer::FloatingGlyphs,
			Layer::FallingChars,
		];
		assert!(position(Layer::Connections) < position(Layer::Particles));
		for layer in decorations {
			assert!(position(Layer::Particles) < position(layer), "{layer:?}");
		}
		// Decoration layers keep their own fixed order.
		assert!(decorations.windows(2).all(|w| position(w[0]) < position(w[1])));
	}

	#[test]
	fn every_layer_painted_once() {
		for (i, a) in FRAME_ORDER.iter().enumerate() {
			assert_eq!(FRAME_ORDER.iter().filter(|b| *b == a).count(), 1, "layer {i}");
		}
	}
}
