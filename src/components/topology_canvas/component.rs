use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::error::SurfaceError;
use super::render;
use super::state::Editor;
use super::types::Point;
use crate::components::toast::Toaster;

/// Longest step fed to the markers in one frame, in seconds.
const MAX_FRAME_STEP: f64 = 0.1;
const FALLBACK_SIZE: (f64, f64) = (800.0, 600.0);

type FrameLoop = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type ResizeHook = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[component]
pub fn TopologyCanvas(editor: Rc<RefCell<Editor>>, toaster: Toaster) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animate: FrameLoop = Rc::new(RefCell::new(None));
	let resize_cb: ResizeHook = Rc::new(RefCell::new(None));
	let editor_init = editor.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		match mount(canvas.into(), &editor_init, &animate, &resize_cb) {
			Ok(()) => info!("canvas mounted"),
			Err(err) => warn!("canvas disabled: {err}"),
		}
	});

	let editor_md = editor.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(at) = pointer(&canvas_ref, &ev) else {
			return;
		};
		editor_md.borrow_mut().pointer_down(at);
	};

	let editor_mm = editor.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(at) = pointer(&canvas_ref, &ev) else {
			return;
		};
		let mut editor = editor_mm.borrow_mut();
		editor.pointer_move(at);
		let _ = web_sys::HtmlElement::style(&canvas).set_property("cursor", editor.cursor(at));
	};

	let editor_mu = editor.clone();
	let on_mouseup = move |_: MouseEvent| {
		let notice = editor_mu.borrow_mut().pointer_up();
		if let Some(notice) = notice {
			toaster.show(notice);
		}
	};

	let editor_ml = editor;
	let on_mouseleave = move |_: MouseEvent| {
		editor_ml.borrow_mut().pointer_leave();
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="topology-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block;"
		/>
	}
}

/// Sizes the canvas to its container, follows window resizes and starts the frame loop.
fn mount(
	canvas: HtmlCanvasElement,
	editor: &Rc<RefCell<Editor>>,
	animate: &FrameLoop,
	resize_cb: &ResizeHook,
) -> Result<(), SurfaceError> {
	let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
	let ctx = context_2d(&canvas)?;
	fit_to_container(&canvas, &mut editor.borrow_mut());

	let (editor_resize, canvas_resize) = (editor.clone(), canvas.clone());
	*resize_cb.borrow_mut() = Some(Closure::new(move || {
		fit_to_container(&canvas_resize, &mut editor_resize.borrow_mut());
	}));
	if let Some(ref cb) = *resize_cb.borrow() {
		window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
	}

	let (editor_anim, animate_inner) = (editor.clone(), animate.clone());
	let last_frame = Cell::new(None::<f64>);
	*animate.borrow_mut() = Some(Closure::new(move |now: f64| {
		// rAF timestamps are in milliseconds
		let dt = last_frame
			.replace(Some(now))
			.map_or(0.0, |prev| ((now - prev) / 1000.0).clamp(0.0, MAX_FRAME_STEP));
		{
			let mut editor = editor_anim.borrow_mut();
			editor.tick(dt);
			render::render(&editor, &ctx);
		}
		if let (Some(window), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		window.request_animation_frame(cb.as_ref().unchecked_ref())?;
	}
	Ok(())
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
	canvas
		.get_context("2d")?
		.ok_or(SurfaceError::NoContext)?
		.dyn_into()
		.map_err(|_| SurfaceError::NoContext)
}

fn fit_to_container(canvas: &HtmlCanvasElement, editor: &mut Editor) {
	let (w, h) = canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or(FALLBACK_SIZE);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	editor.resize(w, h);
}

fn pointer(canvas_ref: &NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}
