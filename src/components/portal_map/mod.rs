//! Interactive portal map component.
//!
//! Renders a set of circular "portal" nodes on an HTML canvas with:
//! - Infinite pan and pointer-anchored zoom
//! - Click-to-navigate portals with click/drag disambiguation
//! - Smooth hover grow animation driven by the frame clock
//! - Curved links between portals
//!
//! Positions come from a static grid layout supplied as data; nothing here
//! computes a layout.
//!
//! # Example
//!
//! ```ignore
//! use portal_map::{MapData, PortalMapCanvas};
//!
//! let data = MapData {
//!     grid: vec![vec![1, 0], vec![0, 1]],
//!     names: vec!["A".into(), "B".into()],
//!     links: vec![("A".into(), "B".into())],
//! };
//!
//! view! { <PortalMapCanvas data=data.into() fullscreen=true /> }
//! ```

mod component;
mod graph;
mod pointer;
mod portal;
mod render;
pub mod theme;
mod types;
mod viewport;

pub use component::PortalMapCanvas;
pub use graph::{GridLayout, PortalMap};
pub use pointer::PointerController;
pub use portal::Portal;
pub use theme::MapTheme;
pub use types::MapData;
pub use viewport::Viewport;
