//! circuit-backdrop: animated particle-network background for Leptos apps.
//!
//! This crate provides a WASM canvas component that renders drifting,
//! pointer-reactive particles linked by proximity lines, layered with
//! time-driven circuit decorations.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Enables the `js` entropy backend that `rand` needs on wasm32.
use getrandom as _;

pub mod components;

pub use components::particle_background::{
	BackdropConfig, BackdropError, FrameScheduler, ParticleBackground, SimulationState, Theme,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("circuit-backdrop: logging initialized");
}

/// Load an optional config override from a script element with id="backdrop-config".
/// Expected format: JSON matching [`BackdropConfig`]; missing fields keep defaults.
fn load_config() -> Option<BackdropConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("backdrop-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match BackdropConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"circuit-backdrop: loaded config ({} particles, theme {:?})",
				config.particles.count, config.theme
			);
			Some(config)
		}
		Err(e) => {
			warn!("circuit-backdrop: ignoring config override: {}", e);
			None
		}
	}
}

/// Demo application: the background behind a simple landing panel.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="circuit-backdrop" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleBackground config=config />
		<div class="backdrop-overlay" style="position: relative; z-index: 1;">
			<h1>"circuit-backdrop"</h1>
			<p class="subtitle">"Move the pointer to pull particles in; get close to push them away."</p>
		</div>
	}
}
