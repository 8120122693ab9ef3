//! portal-map: Interactive pannable map of portal nodes.
//!
//! This crate provides a WASM-based map component that renders circular
//! "portal" nodes connected by curved links, with pan/zoom, hover growth,
//! and click-to-navigate.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::portal_map::{MapData, PortalMapCanvas};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portal-map: logging initialized");
}

/// Load map layout data from a script element with id="map-data".
/// Expected format: JSON with { grid: [...], names: [...], links: [...] }
fn load_map_data() -> Option<MapData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("map-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<MapData>(&json_text) {
		Ok(data) => {
			info!(
				"portal-map: loaded {} grid rows, {} names, {} links",
				data.grid.len(),
				data.names.len(),
				data.links.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("portal-map: failed to parse map data: {}", e);
			None
		}
	}
}

/// Built-in demo layout used when the host page embeds no data.
fn demo_map() -> MapData {
	MapData {
		grid: vec![
			vec![0, 2, 0, 0],
			vec![1, 1, 1, 0],
			vec![0, 1, 0, 1],
			vec![0, 1, 1, 0],
		],
		names: [
			"Hub",
			"Compilers",
			"Parsers",
			"Type-Systems",
			"Automata",
			"Logic",
			"Set-Theory",
			"Category-Theory",
		]
		.into_iter()
		.map(str::to_string)
		.collect(),
		links: [
			("Hub", "Compilers"),
			("Hub", "Parsers"),
			("Hub", "Type-Systems"),
			("Compilers", "Automata"),
			("Parsers", "Automata"),
			("Type-Systems", "Logic"),
			("Automata", "Set-Theory"),
			("Logic", "Category-Theory"),
			("Set-Theory", "Category-Theory"),
		]
		.into_iter()
		.map(|(a, b)| (a.to_string(), b.to_string()))
		.collect(),
	}
}

/// Main application component.
/// Loads map data from the DOM and renders the portal map fullscreen.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let map_data = load_map_data().unwrap_or_else(|| {
		info!("portal-map: no embedded map data, using the demo map");
		demo_map()
	});
	let map_signal = Signal::derive(move || map_data.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Portal Map" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-map">
			<PortalMapCanvas data=map_signal fullscreen=true />
			<div class="map-overlay">
				<h1>"Portal Map"</h1>
				<p class="subtitle">
					"Drag to pan. Scroll to zoom. Click a portal to open its article."
				</p>
			</div>
		</div>
	}
}
