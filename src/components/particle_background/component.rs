//! Leptos component wrapping the particle background canvas.
//!
//! The component creates a fixed, full-viewport canvas that ignores pointer
//! events. On mount it acquires the 2D context, registers window `mousemove`
//! and `resize` listeners, and starts a `requestAnimationFrame` loop that ticks
//! the scheduler and renders each frame. On unmount everything is torn down.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::BackdropConfig;
use super::error::BackdropError;
use super::random::RandomSource;
use super::render;
use super::scheduler::FrameScheduler;
use super::state::SimulationState;
use super::theme::Theme;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Bundles the scheduler with the theme it renders with.
struct BackdropContext {
	scheduler: FrameScheduler,
	theme: Theme,
}

/// Live browser resources for one mounted background.
///
/// Dropping it tears everything down, so a disposed owner can never leave a
/// listener pointing at a freed closure.
struct MountedBackdrop {
	window: Window,
	context: Rc<RefCell<BackdropContext>>,
	frame: FrameCallback,
	frame_id: Rc<Cell<Option<i32>>>,
	pointer_cb: Closure<dyn FnMut(MouseEvent)>,
	resize_cb: Closure<dyn FnMut()>,
	torn_down: bool,
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let w = window.inner_width().ok()?.as_f64()?;
	let h = window.inner_height().ok()?.as_f64()?;
	Some((w, h))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, BackdropError> {
	canvas
		.get_context("2d")
		.map_err(|e| BackdropError::ContextUnavailable(format!("{:?}", e)))?
		.ok_or_else(|| BackdropError::ContextUnavailable("canvas returned no 2d context".into()))?
		.dyn_into::<CanvasRenderingContext2d>()
		.map_err(|_| BackdropError::ContextUnavailable("unexpected context type".into()))
}

fn resolve_theme(name: &str) -> Theme {
	Theme::by_name(name).unwrap_or_else(|| {
		warn!("circuit-backdrop: unknown theme {:?}, using default", name);
		Theme::default()
	})
}

impl MountedBackdrop {
	fn mount(canvas: HtmlCanvasElement, config: BackdropConfig) -> Result<Self, BackdropError> {
		config.validate()?;
		let window = web_sys::window().ok_or(BackdropError::NoWindow)?;
		let ctx = context_2d(&canvas)?;
		let (w, h) = viewport_size(&window).unwrap_or((0.0, 0.0));

		let theme = resolve_theme(&config.theme);
		let rng = RandomSource::from_seed_option(config.seed);
		let count = config.particles.count;
		let mut scheduler = FrameScheduler::new(SimulationState::init(config, w, h, rng));
		let (pw, ph) = scheduler.state().surface.pixel_size();
		canvas.set_width(pw);
		canvas.set_height(ph);
		scheduler.start();

		let context = Rc::new(RefCell::new(BackdropContext { scheduler, theme }));

		let context_pointer = context.clone();
		let pointer_cb = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			if let Ok(mut c) = context_pointer.try_borrow_mut() {
				c.scheduler
					.pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
			}
		});
		let _ = window
			.add_event_listener_with_callback("mousemove", pointer_cb.as_ref().unchecked_ref());

		let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
		let resize_cb = Closure::<dyn FnMut()>::new(move || {
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
				return;
			};
			if let Ok(mut c) = context_resize.try_borrow_mut() {
				if c.scheduler.resized(nw, nh) {
					let (pw, ph) = c.scheduler.state().surface.pixel_size();
					canvas_resize.set_width(pw);
					canvas_resize.set_height(ph);
					debug!("circuit-backdrop: resized to {}x{}", pw, ph);
				}
			}
		});
		let _ =
			window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());

		let frame: FrameCallback = Rc::new(RefCell::new(None));
		let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
		let (context_anim, frame_inner, id_inner) =
			(context.clone(), frame.clone(), frame_id.clone());
		let last_frame: Cell<Option<f64>> = Cell::new(None);
		*frame.borrow_mut() = Some(Closure::new(move |now: f64| {
			let dt = last_frame.replace(Some(now)).map_or(0.0, |prev| now - prev);
			let keep_going = match context_anim.try_borrow_mut() {
				Ok(mut c) => {
					let c = &mut *c;
					let ticked = c.scheduler.tick(dt);
					if ticked {
						render::render(c.scheduler.state(), &ctx, &c.theme);
					}
					ticked
				}
				Err(_) => true,
			};
			if !keep_going {
				id_inner.set(None);
				return;
			}
			if let Some(ref cb) = *frame_inner.borrow() {
				id_inner.set(
					web_sys::window()
						.and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()),
				);
			}
		}));
		if let Some(ref cb) = *frame.borrow() {
			frame_id.set(
				window
					.request_animation_frame(cb.as_ref().unchecked_ref())
					.ok(),
			);
		}

		info!(
			"circuit-backdrop: mounted {} particles on {}x{} surface",
			count, pw, ph
		);

		Ok(Self {
			window,
			context,
			frame,
			frame_id,
			pointer_cb,
			resize_cb,
			torn_down: false,
		})
	}

	/// Stop ticking, cancel the pending frame, then detach both listeners.
	fn teardown(&mut self) {
		if self.torn_down {
			return;
		}
		self.torn_down = true;

		if let Ok(mut c) = self.context.try_borrow_mut() {
			c.scheduler.teardown();
		}
		if let Some(id) = self.frame_id.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		self.frame.borrow_mut().take();

		let pointer: &js_sys::Function = self.pointer_cb.as_ref().unchecked_ref();
		let _ = self
			.window
			.remove_event_listener_with_callback("mousemove", pointer);
		let resize: &js_sys::Function = self.resize_cb.as_ref().unchecked_ref();
		let _ = self.window.remove_event_listener_with_callback("resize", resize);

		info!("circuit-backdrop: torn down");
	}
}

impl Drop for MountedBackdrop {
	fn drop(&mut self) {
		self.teardown();
	}
}

/// Full-viewport animated particle background.
///
/// Place it once near the root of the page; interactive UI stacks on top of
/// it and receives all pointer events. Without a `config` the reference look
/// is used. If the canvas cannot be set up the component renders nothing
/// and logs a warning.
#[component]
pub fn ParticleBackground(#[prop(optional)] config: Option<BackdropConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted = StoredValue::new_local(None::<MountedBackdrop>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if mounted.with_value(Option::is_some) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		match MountedBackdrop::mount(canvas, config.clone().unwrap_or_default()) {
			Ok(backdrop) => mounted.set_value(Some(backdrop)),
			Err(e) => warn!("circuit-backdrop: rendering disabled: {}", e),
		}
	});

	on_cleanup(move || {
		// Dropping the handle runs teardown.
		let _ = mounted.try_update_value(Option::take);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-background"
			aria-hidden="true"
			style="position: fixed; inset: 0; width: 100vw; height: 100vh; display: block; pointer-events: none; z-index: 0;"
		/>
	}
}
