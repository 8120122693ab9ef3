//! Portal map construction from static grid layout data.
//!
//! The grid supplies positions only; nothing here computes a layout. Data
//! quality problems (a grid cell with no name, a link naming an unknown
//! portal) are logged and skipped, never fatal.

use std::collections::HashMap;

use log::warn;

use super::portal::Portal;
use super::types::MapData;

/// Grid cell code: no portal.
const CELL_NONE: u8 = 0;
/// Grid cell code: decorative portal.
const CELL_EMPTY: u8 = 2;

/// Spacing configuration for the grid layout.
#[derive(Clone, Debug)]
pub struct GridLayout {
	/// Portal radius in world units.
	pub radius: f64,
	/// Horizontal gap between neighboring cells, beyond the two radii.
	pub h_padding: f64,
	/// Vertical gap between neighboring rows, beyond the two radii.
	pub v_padding: f64,
}

impl Default for GridLayout {
	fn default() -> Self {
		Self {
			radius: 200.0,
			h_padding: 200.0,
			v_padding: 400.0,
		}
	}
}

impl GridLayout {
	/// World position of a grid cell center.
	pub fn cell_position(&self, row: usize, col: usize) -> (f64, f64) {
		(
			col as f64 * (self.radius * 2.0 + self.h_padding),
			row as f64 * (self.radius * 2.0 + self.v_padding),
		)
	}
}

/// Immutable portal set plus drawing links, built once at startup.
///
/// Portals keep their grid scan order, so indices are stable for the
/// lifetime of the map.
#[derive(Debug, Default)]
pub struct PortalMap {
	pub portals: Vec<Portal>,
	/// Links as (source, destination) portal indices, directed for drawing.
	pub links: Vec<(usize, usize)>,
}

impl PortalMap {
	/// Build the map from layout data.
	///
	/// Names are consumed in row-major order over the nonzero grid cells.
	/// A cell without a name entry is skipped; a link with an unresolved
	/// endpoint is dropped. Both emit a diagnostic and continue.
	pub fn build(data: &MapData, layout: &GridLayout) -> Self {
		let mut portals = Vec::new();
		let mut name_to_index = HashMap::new();

		let mut name_cursor = 0usize;
		for (row, cells) in data.grid.iter().enumerate() {
			for (col, &cell) in cells.iter().enumerate() {
				if cell == CELL_NONE {
					continue;
				}

				let name = data.names.get(name_cursor).cloned();
				name_cursor += 1;
				let Some(name) = name else {
					warn!("no name mapped for grid cell ({row}, {col})");
					continue;
				};

				let is_empty = cell == CELL_EMPTY;
				let (x, y) = layout.cell_position(row, col);
				let href = if is_empty {
					String::new()
				} else {
					format!("articles/{name}.html")
				};

				name_to_index.insert(name.clone(), portals.len());
				portals.push(Portal::new(x, y, layout.radius, name, href, is_empty));
			}
		}

		let mut links = Vec::new();
		for (a, b) in &data.links {
			match (name_to_index.get(a), name_to_index.get(b)) {
				(Some(&ai), Some(&bi)) => links.push((ai, bi)),
				_ => warn!("link skipped: {a} -> {b}, missing portal"),
			}
		}

		Self { portals, links }
	}
}
