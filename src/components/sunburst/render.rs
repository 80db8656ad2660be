use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::SunburstState;
use super::theme::{BACKGROUND_COLOR, NEUTRAL_COLOR, WEDGE_STROKE, text_style};
use super::types::{Point, TooltipView};

const TOOLTIP_FONT: &str = "12px sans-serif";
const TOOLTIP_PAD: f64 = 6.0;
const SWATCH: f64 = 10.0;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &SunburstState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND_COLOR);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	draw_root(state, ctx);
	draw_wedges(state, ctx);
	draw_labels(state, ctx);
	if let Some(tip) = state.hover.current_tooltip() {
		draw_tooltip(state, &tip, ctx);
	}
	ctx.restore();
}

fn draw_root(state: &SunburstState, ctx: &CanvasRenderingContext2d) {
	let root = &state.layout.root;
	ctx.begin_path();
	let _ = ctx.arc(0.0, 0.0, state.layout.ring, 0.0, TAU);
	ctx.set_fill_style_str(root.color().unwrap_or(NEUTRAL_COLOR));
	ctx.fill();
}

fn draw_wedges(state: &SunburstState, ctx: &CanvasRenderingContext2d) {
	let has_highlight = state.highlight.path.is_some();
	let t = ease_out_cubic(state.highlight.t);

	for wedge in &state.layout.wedges {
		let g = &wedge.geometry;
		if g.angle <= g.angle0 {
			continue;
		}
		let Some(node) = state.layout.node(&wedge.path) else {
			continue;
		};
		let highlighted = state.is_highlighted(&wedge.path);
		// Hovered subtree stays opaque, the rest fades back
		let alpha = if !has_highlight || highlighted {
			1.0
		} else {
			1.0 - 0.5 * t
		};

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(0.0, 0.0, g.radius, g.angle0, g.angle);
		let _ = ctx.arc_with_anticlockwise(0.0, 0.0, g.radius0, g.angle, g.angle0, true);
		ctx.close_path();
		ctx.set_fill_style_str(node.color().unwrap_or(NEUTRAL_COLOR));
		ctx.fill();
		ctx.set_stroke_style_str(WEDGE_STROKE);
		ctx.set_line_width(1.0);
		ctx.stroke();
		ctx.set_global_alpha(1.0);

		let hovered = state.highlight.path.as_deref() == Some(wedge.path.as_slice());
		if hovered && t > 0.01 {
			ctx.set_stroke_style_str(&format!("rgba(0, 0, 0, {})", 0.6 * t));
			ctx.set_line_width(1.5);
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(4.0),
				&JsValue::from_f64(3.0),
			));
			ctx.stroke();
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}
	}
}

fn draw_labels(state: &SunburstState, ctx: &CanvasRenderingContext2d) {
	ctx.set_text_align("center");
	// Label offsets are y-up
	for label in &state.labels {
		let style = text_style(label.style);
		ctx.set_fill_style_str(style.fill);
		ctx.set_font(style.font);
		let _ = ctx.fill_text(&label.label, label.x, -label.y);
	}
}

fn draw_tooltip(state: &SunburstState, tip: &TooltipView, ctx: &CanvasRenderingContext2d) {
	ctx.set_font(TOOLTIP_FONT);
	ctx.set_text_align("left");
	let text_width = ctx
		.measure_text(&tip.label)
		.map(|m| m.width())
		.unwrap_or(tip.label.len() as f64 * 6.0);
	let (w, h) = (
		SWATCH + text_width + TOOLTIP_PAD * 3.0,
		SWATCH + TOOLTIP_PAD * 2.0,
	);
	let Point { x, y } = state.tooltip_origin(tip.anchor, w, h);

	ctx.set_fill_style_str("rgba(58, 58, 72, 0.9)");
	ctx.fill_rect(x, y, w, h);

	ctx.set_fill_style_str(tip.color.as_deref().unwrap_or(NEUTRAL_COLOR));
	ctx.fill_rect(x + TOOLTIP_PAD, y + TOOLTIP_PAD, SWATCH, SWATCH);

	ctx.set_fill_style_str("white");
	let _ = ctx.fill_text(
		&tip.label,
		x + SWATCH + TOOLTIP_PAD * 2.0,
		y + TOOLTIP_PAD + SWATCH - 1.0,
	);
}
