use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::Editor;
use super::types::{Node, Point};

const ICON_FONT_PX: f64 = 20.0;
const PENDING_RING_GAP: f64 = 6.0;

pub fn render(editor: &Editor, ctx: &CanvasRenderingContext2d) {
	let config = editor.config();
	ctx.set_fill_style_str(config.background);
	ctx.fill_rect(0.0, 0.0, editor.width, editor.height);
	draw_links(editor, ctx);
	draw_nodes(editor, ctx);
	draw_markers(editor, ctx);
}

fn draw_links(editor: &Editor, ctx: &CanvasRenderingContext2d) {
	let config = editor.config();
	ctx.set_stroke_style_str(config.link_stroke);
	ctx.set_line_width(config.link_width);
	for link in editor.scene().links() {
		let (start, end) = (link.line.start, link.line.end);
		ctx.begin_path();
		ctx.move_to(start.x, start.y);
		ctx.line_to(end.x, end.y);
		ctx.stroke();
	}
}

fn draw_nodes(editor: &Editor, ctx: &CanvasRenderingContext2d) {
	let pending = editor.pending_source();
	for node in editor.scene().nodes() {
		draw_node(editor, node, ctx);
		if pending == Some(node.id) {
			draw_pending_ring(editor, node, ctx);
		}
	}
}

fn draw_node(editor: &Editor, node: &Node, ctx: &CanvasRenderingContext2d) {
	let config = editor.config();
	let style = config.style(node.kind);
	let Point { x, y } = node.position;

	ctx.begin_path();
	let _ = ctx.arc(x, y, style.radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(style.fill);
	ctx.fill();
	ctx.set_stroke_style_str(style.stroke);
	ctx.set_line_width(style.stroke_width);
	ctx.stroke();

	ctx.set_text_align("center");
	if let Some(icon) = style.icon {
		ctx.set_text_baseline("middle");
		ctx.set_fill_style_str(style.stroke);
		ctx.set_font(&format!("{ICON_FONT_PX}px sans-serif"));
		let _ = ctx.fill_text(icon, x, y);
	}
	if let Some(label) = &node.label {
		ctx.set_text_baseline("top");
		ctx.set_fill_style_str(config.label_color);
		ctx.set_font(&format!("{}px sans-serif", config.label_font_px));
		let _ = ctx.fill_text(label, x, y + config.label_offset);
	}
}

fn draw_pending_ring(editor: &Editor, node: &Node, ctx: &CanvasRenderingContext2d) {
	let config = editor.config();
	let radius = config.style(node.kind).radius + PENDING_RING_GAP;
	ctx.set_stroke_style_str(config.pending_ring);
	ctx.set_line_width(2.0);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(6.0),
		&JsValue::from_f64(4.0),
	));
	ctx.begin_path();
	let _ = ctx.arc(node.position.x, node.position.y, radius, 0.0, 2.0 * PI);
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_markers(editor: &Editor, ctx: &CanvasRenderingContext2d) {
	let config = editor.config();
	ctx.set_fill_style_str(config.marker_fill);
	for marker in editor.traffic().markers() {
		let Point { x, y } = marker.position();
		ctx.begin_path();
		let _ = ctx.arc(x, y, config.marker_radius, 0.0, 2.0 * PI);
		ctx.fill();
	}
}

