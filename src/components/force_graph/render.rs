use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::ForceGraphState;
use crate::graph::{encode, encode_edge, encode_tooltip};

const BACKGROUND: &str = "#1a1a2e";
const EDGE_COLOR: (u8, u8, u8) = (100, 180, 255);
const LABEL_COLOR: &str = "rgba(255, 255, 255, 0.85)";

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
	draw_tooltip(state, ctx);
}

fn edge_rgba(alpha: f64) -> String {
	let (r, g, b) = EDGE_COLOR;
	format!("rgba({r}, {g}, {b}, {alpha})")
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let has_highlight = state.has_active_highlight();

	state.graph.visit_edges(|n1, n2, edge| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}

		let enc = encode_edge(&edge.user_data.edge);
		let (r1, r2) = (
			encode(&n1.data.user_data).radius,
			encode(&n2.data.user_data).radius,
		);

		let dimmed =
			has_highlight && !(state.is_highlighted(n1.index()) && state.is_highlighted(n2.index()));
		let (line_alpha, arrow_alpha, text_alpha) = if dimmed {
			(0.15, 0.15, 0.1)
		} else {
			(0.6, 0.8, 0.7)
		};

		// Fixed perpendicular bow; opposite edges between the same pair bow
		// to opposite sides, so they never overlap.
		let (ux, uy) = (dx / dist, dy / dist);
		let (mx, my) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
		let bow = enc.curvature * dist;
		let (cx, cy) = (mx - uy * bow, my + ux * bow);

		// End tangent of the quadratic runs from the control point into the
		// target; back the tip off to the target's rim.
		let (tx, ty) = (x2 - cx, y2 - cy);
		let tlen = (tx * tx + ty * ty).sqrt().max(0.001);
		let (tux, tuy) = (tx / tlen, ty / tlen);
		let arrow = enc.arrow_length;
		let (tip_x, tip_y) = (x2 - tux * r2, y2 - tuy * r2);
		let (back_x, back_y) = (tip_x - tux * arrow, tip_y - tuy * arrow);

		ctx.set_stroke_style_str(&edge_rgba(line_alpha));
		ctx.set_line_width(2.0 / k);
		ctx.begin_path();
		ctx.move_to(x1 + ux * r1, y1 + uy * r1);
		ctx.quadratic_curve_to(cx, cy, back_x, back_y);
		ctx.stroke();

		ctx.set_fill_style_str(&edge_rgba(arrow_alpha));
		let (px, py) = (-tuy * arrow * 0.5, tux * arrow * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();

		if !enc.label.is_empty() {
			// Curve midpoint: q(0.5) = p1/4 + c/2 + p2/4.
			let (lx, ly) = (
				0.25 * x1 + 0.5 * cx + 0.25 * x2,
				0.25 * y1 + 0.5 * cy + 0.25 * y2,
			);
			ctx.set_fill_style_str(&format!("rgba(200, 220, 255, {text_alpha})"));
			ctx.set_font(&format!("{}px sans-serif", 9.0 / k.max(0.5)));
			ctx.set_text_align("center");
			ctx.set_text_baseline("middle");
			let _ = ctx.fill_text(&enc.label, lx, ly);
		}
	});
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let has_highlight = state.has_active_highlight();

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let enc = encode(&node.data.user_data);
		let (x, y) = (node.x() as f64, node.y() as f64);
		let dimmed = has_highlight && !state.is_highlighted(idx);

		ctx.set_global_alpha(if dimmed { 0.25 } else { 1.0 });
		ctx.begin_path();
		let _ = ctx.arc(x, y, enc.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&enc.fill_color);
		ctx.fill();

		if state.hover.node == Some(idx) {
			ctx.begin_path();
			let _ = ctx.arc(x, y, enc.radius + 2.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}

		ctx.set_fill_style_str(LABEL_COLOR);
		ctx.set_font(&format!("{}px sans-serif", 12.0 / k.max(0.5)));
		ctx.set_text_align("center");
		ctx.set_text_baseline("top");
		let _ = ctx.fill_text(&enc.display_label, x, y + enc.radius + 2.0);
		ctx.set_global_alpha(1.0);
	});
}

fn draw_tooltip(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let Some(hovered) = state.hover.node else {
		return;
	};

	let mut anchor = None;
	state.graph.visit_nodes(|node| {
		if node.index() == hovered {
			let enc = encode(&node.data.user_data);
			anchor = Some((
				node.x() as f64,
				node.y() as f64,
				enc.radius,
				encode_tooltip(&node.data.user_data),
			));
		}
	});
	let Some((gx, gy, radius, text)) = anchor else {
		return;
	};

	let (sx, sy) = state.graph_to_screen(gx, gy);
	let sy = sy - radius * state.transform.k - 10.0;

	ctx.set_font("12px sans-serif");
	let width = ctx
		.measure_text(&text)
		.map(|m| m.width())
		.unwrap_or(8.0 * text.len() as f64);
	let (pad, height) = (6.0, 20.0);

	ctx.set_fill_style_str("rgba(0, 0, 0, 0.75)");
	ctx.fill_rect(sx - width / 2.0 - pad, sy - height, width + 2.0 * pad, height);
	ctx.set_fill_style_str("white");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(&text, sx, sy - height / 2.0);
}
