use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::handle::GraphHandle;
use super::render;
use super::state::GraphView;
use crate::api::NetworkGraph;

const FALLBACK_WIDTH: f64 = 800.0;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Bind `graph` to `canvas`: size it to its container, lay the network out
/// and install the view into `handle`. Returns the drawing context.
pub fn initialize(
	handle: &GraphHandle,
	canvas: &HtmlCanvasElement,
	graph: &NetworkGraph,
	height: f64,
) -> Option<CanvasRenderingContext2d> {
	let Some(ctx) = context_2d(canvas) else {
		error!("Network container has no 2d context");
		return None;
	};
	let width = canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|&w| w > 0.0)
		.unwrap_or(FALLBACK_WIDTH);
	canvas.set_width(width as u32);
	canvas.set_height(height as u32);

	let view = GraphView::new(graph, width, height);
	info!("drawing network with {} nodes", view.node_count());
	handle.install(view);
	Some(ctx)
}

fn pointer_position(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Static drawing of the fetched network. Stays blank while `data` is empty.
#[component]
pub fn NetworkGraphCanvas(
	handle: GraphHandle,
	#[prop(into)] data: Signal<Option<NetworkGraph>>,
	#[prop(default = 600.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (handle_init, animate_init) = (handle.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(graph) = data.get() else {
			return;
		};
		if handle_init.is_initialized() {
			return;
		}
		let Some(canvas) = canvas_ref.get() else {
			error!("Network container not found");
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(ctx) = initialize(&handle_init, &canvas, &graph, height) else {
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};

		let (handle_anim, animate_inner) = (handle_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			handle_anim.with_view(|view| render::render(view, &ctx));
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let handle_md = handle.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		handle_md.with_view_mut(|view| match view.node_at_position(x, y) {
			Some(idx) => view.begin_drag(idx, x, y),
			None => view.begin_pan(x, y),
		});
	};

	let handle_mm = handle.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		handle_mm.with_view_mut(|view| view.pointer_moved(x, y));
	};

	let handle_mu = handle.clone();
	let on_mouseup = move |_: MouseEvent| {
		handle_mu.with_view_mut(GraphView::release_pointer);
	};

	let handle_ml = handle.clone();
	let on_mouseleave = move |_: MouseEvent| {
		handle_ml.with_view_mut(GraphView::release_pointer);
	};

	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		handle.with_view_mut(|view| view.zoom_at(x, y, ev.delta_y() < 0.0));
	};

	view! {
		<div id="network-container" class="network-container">
			<canvas
				node_ref=canvas_ref
				class="network-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>
		</div>
	}
}
