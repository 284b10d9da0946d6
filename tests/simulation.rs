//! End-to-end simulation behaviour through the public scheduler API.

use circuit_backdrop::components::particle_background::random::RandomSource;
use circuit_backdrop::components::particle_background::scheduler::Phase;
use circuit_backdrop::{BackdropConfig, FrameScheduler, SimulationState};

fn config(count: usize, seed: u64) -> BackdropConfig {
	let mut config = BackdropConfig {
		seed: Some(seed),
		..BackdropConfig::default()
	};
	config.particles.count = count;
	config
}

fn running(count: usize, seed: u64) -> FrameScheduler {
	let mut scheduler = FrameScheduler::new(SimulationState::init(
		config(count, seed),
		800.0,
		600.0,
		RandomSource::seeded(seed),
	));
	assert!(scheduler.start());
	scheduler
}

#[test]
fn single_tick_moves_by_initial_velocity() {
	let mut scheduler = running(10, 2024);
	let before = scheduler.state().particles.particles.clone();

	assert!(scheduler.tick(16.0));

	let after = &scheduler.state().particles.particles;
	assert_eq!(after.len(), 10);
	for (old, new) in before.iter().zip(after) {
		let (ex, ey) = (old.x + old.vx, old.y + old.vy);
		// Reflection and clamping only kick in past an edge.
		let expected_x = ex.clamp(0.0, 800.0);
		let expected_y = ey.clamp(0.0, 600.0);
		assert!((new.x - expected_x).abs() < 1e-12, "x {} vs {}", new.x, expected_x);
		assert!((new.y - expected_y).abs() < 1e-12, "y {} vs {}", new.y, expected_y);
		assert!((0.0..=800.0).contains(&new.x));
		assert!((0.0..=600.0).contains(&new.y));
	}
}

#[test]
fn same_seed_reproduces_initial_state() {
	let a = running(25, 77);
	let b = running(25, 77);
	assert_eq!(a.state().particles.particles, b.state().particles.particles);
}

#[test]
fn count_and_bounds_hold_across_resizes() {
	let mut scheduler = running(120, 9);
	for tick in 0..600 {
		if tick == 200 {
			scheduler.resized(320.0, 240.0);
		}
		if tick == 400 {
			scheduler.resized(1280.0, 720.0);
		}
		scheduler.pointer_moved((tick as f64 * 7.0) % 800.0, (tick as f64 * 3.0) % 600.0);
		scheduler.tick(16.0);

		let bounds = scheduler.state().bounds();
		let particles = &scheduler.state().particles.particles;
		assert_eq!(particles.len(), 120);
		for p in particles {
			assert!(p.x >= 0.0 && p.x <= bounds.width);
			assert!(p.y >= 0.0 && p.y <= bounds.height);
		}
	}
}

#[test]
fn nothing_moves_after_teardown() {
	let mut scheduler = running(30, 5);
	scheduler.pointer_moved(400.0, 300.0);
	scheduler.tick(16.0);

	scheduler.teardown();
	assert_eq!(scheduler.phase(), Phase::TornDown);

	let particles = scheduler.state().particles.particles.clone();
	let bounds = scheduler.state().bounds();
	let pointer = scheduler.state().input.pointer();
	let elapsed = scheduler.state().elapsed_ms;
	let ticks = scheduler.ticks();

	assert!(!scheduler.pointer_moved(10.0, 10.0));
	assert!(!scheduler.resized(100.0, 100.0));
	for _ in 0..10 {
		assert!(!scheduler.tick(16.0));
	}

	assert_eq!(scheduler.state().particles.particles, particles);
	assert_eq!(scheduler.state().bounds(), bounds);
	assert_eq!(scheduler.state().input.pointer(), pointer);
	assert_eq!(scheduler.state().elapsed_ms, elapsed);
	assert_eq!(scheduler.ticks(), ticks);
}

#[test]
fn stopped_scheduler_ignores_events() {
	let mut scheduler = running(10, 3);
	scheduler.stop();
	assert!(!scheduler.pointer_moved(50.0, 50.0));
	assert!(!scheduler.resized(10.0, 10.0));
	assert_eq!(scheduler.state().input.pointer().x, 0.0);
	assert_eq!(scheduler.state().bounds().width, 800.0);
}

#[test]
fn falling_positions_advance_with_wall_clock() {
	let mut scheduler = running(10, 4);
	scheduler.tick(1000.0);
	let first: Vec<_> = scheduler.state().falling.iter().map(|g| (g.x, g.y)).collect();
	scheduler.tick(1000.0);
	let second: Vec<_> = scheduler.state().falling.iter().map(|g| (g.x, g.y)).collect();

	assert_eq!(first.len(), 20);
	for ((x1, y1), (x2, y2)) in first.iter().zip(&second) {
		assert_eq!(x1, x2);
		// 1000 ms at 0.05 units/ms, wrapped over the 600-unit height.
		let moved = (y2 - y1).rem_euclid(600.0);
		assert!((moved - 50.0).abs() < 1e-9);
	}
}
