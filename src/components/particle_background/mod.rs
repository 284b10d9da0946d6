//! Animated particle-network background.
//!
//! Renders a full-viewport canvas behind the page's interactive UI with:
//! - A fixed population of drifting particles that react to the pointer
//! - Lines between nearby particles, fading with distance
//! - Time-driven decorations: grid, circuit traces, data-flow lines, a scan
//!   line, floating code glyphs and flickering falling characters
//!
//! Simulation and decoration geometry are plain Rust and run without a
//! browser; only [`ParticleBackground`] and the renderer touch the DOM.
//!
//! # Example
//!
//! ```ignore
//! use circuit_backdrop::ParticleBackground;
//!
//! view! {
//!     <ParticleBackground />
//!     <main class="content">...</main>
//! }
//! ```

mod component;
pub mod config;
pub mod connections;
pub mod decorations;
pub mod error;
pub mod input;
pub mod particles;
pub mod random;
mod render;
pub mod scheduler;
pub mod state;
pub mod surface;
pub mod theme;

pub use component::ParticleBackground;
pub use config::BackdropConfig;
pub use error::BackdropError;
pub use scheduler::FrameScheduler;
pub use state::SimulationState;
pub use theme::Theme;
