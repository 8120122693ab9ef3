//! Canvas rendering for the portal map.
//!
//! Draws in screen space: every point is mapped through the viewport rather
//! than the canvas transform stack, so drawing shares one transform with
//! hit-testing. Per frame: background, link curves, then portals on top.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::graph::PortalMap;
use super::portal::Portal;
use super::theme::MapTheme;
use super::viewport::Viewport;

/// Render a complete frame to the canvas.
pub fn render(
	map: &PortalMap,
	viewport: &Viewport,
	ctx: &CanvasRenderingContext2d,
	theme: &MapTheme,
	width: f64,
	height: f64,
) {
	ctx.set_fill_style_str(&theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, width, height);

	draw_links(map, viewport, ctx, theme);

	for portal in &map.portals {
		draw_portal(portal, viewport, ctx, theme);
	}
}

/// Each link is a cubic curve from the bottom of its source portal to the top
/// of its destination, control points offset vertically by a third of the
/// world-space vertical span for a vertical S shape.
fn draw_links(
	map: &PortalMap,
	viewport: &Viewport,
	ctx: &CanvasRenderingContext2d,
	theme: &MapTheme,
) {
	ctx.set_stroke_style_str(&theme.stroke.to_css());
	ctx.set_line_width(theme.stroke_width * viewport.scale);

	for &(a, b) in &map.links {
		let (Some(src), Some(dst)) = (map.portals.get(a), map.portals.get(b)) else {
			continue;
		};

		// World-space anchors.
		let (x0, y0) = (src.x, src.y + src.radius);
		let (x3, y3) = (dst.x, dst.y - dst.radius);
		let h = (y3 - y0) / 3.0;

		let (sx0, sy0) = viewport.world_to_screen(x0, y0);
		let (cx1, cy1) = viewport.world_to_screen(x0, y0 + h);
		let (cx2, cy2) = viewport.world_to_screen(x3, y3 - h);
		let (sx3, sy3) = viewport.world_to_screen(x3, y3);

		ctx.begin_path();
		ctx.move_to(sx0, sy0);
		ctx.bezier_curve_to(cx1, cy1, cx2, cy2, sx3, sy3);
		ctx.stroke();
	}
}

fn draw_portal(
	portal: &Portal,
	viewport: &Viewport,
	ctx: &CanvasRenderingContext2d,
	theme: &MapTheme,
) {
	let (sx, sy, sr) = portal.screen_geometry(viewport);

	// Empty portals never grow; the rest scale with the hover animation.
	let r = if portal.is_empty {
		sr
	} else {
		sr * portal.hover_scale
	};

	if !portal.is_empty {
		ctx.save();
		ctx.begin_path();
		let _ = ctx.arc(sx, sy, r, 0.0, PI * 2.0);
		ctx.close_path();
		ctx.clip();

		ctx.set_fill_style_str(&theme.backdrop.to_css());
		ctx.fill_rect(sx - r, sy - r, r * 2.0, r * 2.0);

		// Image may still be loading; the portal renders without it.
		if let Some(image) = &portal.image {
			let size = r * 2.0 * theme.image_inset;
			let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
				image,
				sx - size / 2.0,
				sy - size / 2.0,
				size,
				size,
			);
		}

		if portal.hover {
			ctx.set_fill_style_str(&theme.hover_overlay.to_css());
			ctx.fill_rect(sx - r, sy - r, r * 2.0, r * 2.0);
		}

		ctx.restore();
	}

	ctx.begin_path();
	let _ = ctx.arc(sx, sy, r, 0.0, PI * 2.0);
	ctx.set_stroke_style_str(&theme.stroke.to_css());
	ctx.set_line_width(theme.stroke_width * viewport.scale);
	ctx.stroke();

	if !portal.is_empty && portal.hover {
		ctx.set_font(&theme.label_font);
		ctx.set_fill_style_str(&theme.label_color.to_css());
		ctx.set_text_align("center");
		let _ = ctx.fill_text(&portal.label, sx, sy + r + theme.label_offset);
	}
}
