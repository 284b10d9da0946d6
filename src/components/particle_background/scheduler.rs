//! Frame lifecycle: start, stop, tick, and event intake.
//!
//! The browser's `requestAnimationFrame` loop calls [`FrameScheduler::tick`]
//! with the time since the previous frame. Tests call it directly with fixed
//! deltas, so physics can be exercised without a real clock.
//!
//! The running flag doubles as the liveness flag for event listeners: pointer
//! and resize events delivered while the scheduler is not running are dropped.

use super::state::SimulationState;

/// Lifecycle phase of a scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	/// Created but not yet started.
	Idle,
	Running,
	Stopped,
	/// Stopped for good; `start` is a no-op.
	TornDown,
}

/// Drives update ticks over an owned [`SimulationState`].
#[derive(Debug)]
pub struct FrameScheduler {
	state: SimulationState,
	phase: Phase,
	ticks: u64,
}

impl FrameScheduler {
	pub fn new(state: SimulationState) -> Self {
		Self {
			state,
			phase: Phase::Idle,
			ticks: 0,
		}
	}

	/// Begin accepting ticks and events. Returns `false` after teardown.
	pub fn start(&mut self) -> bool {
		match self.phase {
			Phase::TornDown => false,
			_ => {
				self.phase = Phase::Running;
				true
			}
		}
	}

	pub fn stop(&mut self) {
		if self.phase != Phase::TornDown {
			self.phase = Phase::Stopped;
		}
	}

	/// Stop permanently. Called once when the view unmounts.
	pub fn teardown(&mut self) {
		self.phase = Phase::TornDown;
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn is_running(&self) -> bool {
		self.phase == Phase::Running
	}

	/// Number of ticks processed so far.
	pub fn ticks(&self) -> u64 {
		self.ticks
	}

	pub fn state(&self) -> &SimulationState {
		&self.state
	}

	/// Advance one frame. `dt_ms` only feeds the decoration clock; particle
	/// motion is one step per tick regardless. Negative or non-finite deltas
	/// count as zero. Returns `false` when not running.
	pub fn tick(&mut self, dt_ms: f64) -> bool {
		if !self.is_running() {
			return false;
		}
		if dt_ms.is_finite() && dt_ms > 0.0 {
			self.state.elapsed_ms += dt_ms;
		}
		self.state.advance();
		self.ticks += 1;
		true
	}

	/// Record a pointer move. Dropped unless running.
	pub fn pointer_moved(&mut self, x: f64, y: f64) -> bool {
		if !self.is_running() {
			return false;
		}
		self.state.input.set(x, y);
		true
	}

	/// Follow a viewport resize. Dropped unless running; returns `true` when
	/// the bounds changed and the canvas needs resizing.
	pub fn resized(&mut self, width: f64, height: f64) -> bool {
		if !self.is_running() {
			return false;
		}
		self.state.surface.resize(width, height)
	}
}
