use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::components::toast::{Toast, Toaster};
use crate::components::toolbar::Toolbar;
use crate::components::topology_canvas::{Editor, EditorConfig, TopologyCanvas};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let config = EditorConfig::default();
	let toaster = Toaster::new(config.toast_duration);
	let editor = Rc::new(RefCell::new(Editor::new(config)));

	view! {
		<div class="editor">
			<Toolbar editor=editor.clone() toaster=toaster />
			<div id="container" class="canvas-container">
				<TopologyCanvas editor=editor toaster=toaster />
			</div>
			<Toast toaster=toaster />
		</div>
	}
}
