use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use super::toast::Toaster;
use super::topology_canvas::{Editor, NodeKind, Point};

#[component]
pub fn Toolbar(editor: Rc<RefCell<Editor>>, toaster: Toaster) -> impl IntoView {
	let link_mode = RwSignal::new(editor.borrow().link_mode());
	let presets = editor.borrow().config().presets.clone();

	let add = {
		let editor = editor.clone();
		move |kind: NodeKind| {
			let editor = editor.clone();
			move |_: MouseEvent| toaster.show(editor.borrow_mut().add_device(kind))
		}
	};

	let ed = editor.clone();
	let on_clear = move |_: MouseEvent| toaster.show(ed.borrow_mut().clear());

	let ed = editor.clone();
	let on_link_mode = move |_: MouseEvent| {
		let mut editor = ed.borrow_mut();
		let notice = editor.toggle_link_mode();
		link_mode.set(editor.link_mode());
		toaster.show(notice);
	};

	let ed = editor.clone();
	let on_simulate = move |_: MouseEvent| {
		ed.borrow_mut().simulate();
	};

	let ed = editor;
	let on_preset = move |ev: MouseEvent| {
		let Some(name) = ev
			.current_target()
			.and_then(|t| t.dyn_into::<Element>().ok())
			.and_then(|el| el.get_attribute("data-name"))
		else {
			debug!("preset button without a name");
			return;
		};
		let mut editor = ed.borrow_mut();
		let (w, h) = editor.config().preset_area;
		let at = Point::new(js_sys::Math::random() * w, js_sys::Math::random() * h);
		toaster.show(editor.add_building(&name, at));
	};

	view! {
		<div class="toolbar">
			<button id="add-server" on:click=add(NodeKind::Server)>"Add Server"</button>
			<button id="add-switch" on:click=add(NodeKind::Switch)>"Add Switch"</button>
			<button id="add-ap" on:click=add(NodeKind::AccessPoint)>"Add Access Point"</button>
			<span class="separator" />
			{presets
				.into_iter()
				.map(|name| {
					let data_name = name.clone();
					view! {
						<button class="preset-building" data-name=data_name on:click=on_preset.clone()>
							{name}
						</button>
					}
				})
				.collect_view()}
			<span class="separator" />
			<button id="link-mode" class:active=move || link_mode.get() on:click=on_link_mode>
				"Link Mode"
			</button>
			<button id="simulate" on:click=on_simulate>"Simulate Traffic"</button>
			<button id="clear" on:click=on_clear>"Clear"</button>
		</div>
	}
}
