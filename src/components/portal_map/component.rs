//! Leptos component wrapping the portal map canvas.
//!
//! The component creates an HTML canvas element and wires mouse/wheel event
//! handlers into the pointer controller. An animation loop runs via
//! `requestAnimationFrame`, advancing each portal's hover animation by the
//! elapsed frame time and redrawing. Image assets load asynchronously and
//! attach to their portals as they arrive.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, MouseEvent, WheelEvent, Window,
};

use super::graph::{GridLayout, PortalMap};
use super::pointer::PointerController;
use super::render;
use super::theme::MapTheme;
use super::types::MapData;
use super::viewport::Viewport;

/// Everything the event handlers and the frame loop share.
struct MapContext {
	map: PortalMap,
	viewport: Viewport,
	pointer: PointerController,
	theme: MapTheme,
	width: f64,
	height: f64,
	/// Timestamp of the previous animation frame, ms since page load.
	last_frame: Option<f64>,
}

/// Renders an interactive portal map on a canvas element.
///
/// Pass layout data via the reactive `data` signal. The component sizes
/// itself to its parent container by default; set `fullscreen = true` to fill
/// the viewport and resize automatically with the window. Explicit
/// `width`/`height` override automatic sizing.
#[component]
pub fn PortalMapCanvas(
	#[prop(into)] data: Signal<MapData>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<MapContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = if fullscreen {
			(
				window.inner_width().unwrap().as_f64().unwrap(),
				window.inner_height().unwrap().as_f64().unwrap(),
			)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		*context_init.borrow_mut() = Some(MapContext {
			map: PortalMap::build(&data.get(), &GridLayout::default()),
			viewport: Viewport::default(),
			pointer: PointerController::default(),
			theme: MapTheme::default(),
			width: w,
			height: h,
			last_frame: None,
		});

		load_portal_images(&context_init);

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let win: Window = web_sys::window().unwrap();
				let (nw, nh) = (
					win.inner_width().unwrap().as_f64().unwrap(),
					win.inner_height().unwrap().as_f64().unwrap(),
				);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.width = nw;
					c.height = nh;
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let now = web_sys::window()
				.and_then(|w| w.performance())
				.map(|p| p.now())
				.unwrap_or_default();

			if let Some(ref mut c) = *context_anim.borrow_mut() {
				// The first frame only establishes the clock baseline.
				let dt = match c.last_frame {
					Some(prev) => (now - prev) / 1000.0,
					None => 0.0,
				};
				c.last_frame = Some(now);

				for portal in &mut c.map.portals {
					portal.update(dt);
				}
				render::render(&c.map, &c.viewport, &ctx, &c.theme, c.width, c.height);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_md.borrow_mut() {
			c.pointer.on_press(x, y);
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			let MapContext {
				map,
				viewport,
				pointer,
				..
			} = c;
			pointer.on_move(x, y, viewport, &mut map.portals);
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		// Collect hrefs first so navigation runs outside the borrow.
		let hrefs = match *context_mu.borrow_mut() {
			Some(ref mut c) => {
				let MapContext {
					map,
					viewport,
					pointer,
					..
				} = c;
				pointer.on_release(x, y, viewport, &map.portals)
			}
			None => Vec::new(),
		};
		for href in hrefs {
			navigate(&href);
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			let MapContext { map, pointer, .. } = c;
			pointer.on_leave(&mut map.portals);
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_wh.borrow_mut() {
			let MapContext {
				viewport, pointer, ..
			} = c;
			pointer.on_wheel(x, y, ev.delta_y(), viewport);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="portal-map-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			on:contextmenu=move |ev: MouseEvent| ev.prevent_default()
			style="display: block; cursor: grab;"
		/>
	}
}

/// Hand an href to the browser. The page transition is fire-and-forget.
fn navigate(href: &str) {
	if let Some(window) = web_sys::window() {
		let _ = window.location().set_href(href);
	}
}

/// Kick off the async image load for every non-empty portal.
///
/// Each `load` callback swaps the portal's image handle from absent to
/// present; a failed load never fires it and the portal stays imageless.
fn load_portal_images(context: &Rc<RefCell<Option<MapContext>>>) {
	let targets: Vec<(usize, String)> = match context.borrow().as_ref() {
		Some(c) => c
			.map
			.portals
			.iter()
			.enumerate()
			.filter(|(_, p)| !p.is_empty)
			.map(|(i, p)| (i, p.label.clone()))
			.collect(),
		None => return,
	};

	for (index, label) in targets {
		let Ok(image) = HtmlImageElement::new() else {
			continue;
		};

		let (context, handle) = (context.clone(), image.clone());
		let onload = Closure::once_into_js(move || {
			if let Some(ref mut c) = *context.borrow_mut() {
				if let Some(portal) = c.map.portals.get_mut(index) {
					portal.image = Some(handle);
				}
			}
		});
		image.set_onload(Some(onload.unchecked_ref::<js_sys::Function>()));
		image.set_src(&format!("assets/portals/{label}.png"));
	}
}
