use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{EDGE_COLOR, GraphView, NODE_BORDER, NODE_FILL, NODE_RADIUS, edge_key};

const BACKGROUND: &str = "#ffffff";
const LABEL_COLOR: &str = "#343434";

pub fn render(view: &GraphView, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, view.width, view.height);
	ctx.save();
	let _ = ctx.translate(view.transform.x, view.transform.y);
	let _ = ctx.scale(view.transform.k, view.transform.k);
	draw_edges(view, ctx);
	draw_nodes(view, ctx);
	ctx.restore();
}

fn draw_edges(view: &GraphView, ctx: &CanvasRenderingContext2d) {
	let k = view.transform.k;
	ctx.set_font(&format!("{}px sans-serif", 11.0 / k.max(0.5)));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	view.graph.visit_edges(|n1, n2, _| {
		let Some(edge) = view.edges.get(&edge_key(n1.index(), n2.index())) else {
			return;
		};
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);

		let color = edge.color.as_deref().unwrap_or(EDGE_COLOR);
		ctx.set_stroke_style_str(color);
		ctx.set_line_width(if edge.color.is_some() { 3.0 } else { 1.0 });
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();

		if let Some(label) = &edge.label {
			let (mx, my) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
			let width = ctx
				.measure_text(label)
				.map(|m| m.width())
				.unwrap_or(0.0);
			ctx.set_fill_style_str(BACKGROUND);
			ctx.fill_rect(mx - width / 2.0 - 2.0, my - 7.0, width + 4.0, 14.0);
			ctx.set_fill_style_str(LABEL_COLOR);
			let _ = ctx.fill_text(label, mx, my);
		}
	});
}

fn draw_nodes(view: &GraphView, ctx: &CanvasRenderingContext2d) {
	ctx.set_font("12px sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	view.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);
		let dragged = view.drag.node_idx == Some(node.index());

		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(NODE_FILL);
		ctx.fill();
		ctx.set_stroke_style_str(NODE_BORDER);
		ctx.set_line_width(if dragged { 2.0 } else { 1.0 });
		ctx.stroke();

		ctx.set_fill_style_str(LABEL_COLOR);
		let _ = ctx.fill_text(&node.data.user_data.label, x, y);
	});
}
