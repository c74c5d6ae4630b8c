use std::fmt::Display;
use std::time::Duration;

use leptos::prelude::*;

/// Handle for the single-message toast. Cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct Toaster {
	message: RwSignal<Option<String>>,
	/// Bumped on every message so an older hide timer leaves a newer message alone.
	serial: RwSignal<u64>,
	duration: Duration,
}

impl Toaster {
	pub fn new(duration: Duration) -> Self {
		Self {
			message: RwSignal::new(None),
			serial: RwSignal::new(0),
			duration,
		}
	}

	pub fn show(&self, message: impl Display) {
		let serial = self.serial.get_untracked().wrapping_add(1);
		self.serial.set(serial);
		self.message.set(Some(message.to_string()));

		let (current, text) = (self.serial, self.message);
		set_timeout(
			move || {
				if current.try_get_untracked() == Some(serial) {
					let _ = text.try_set(None);
				}
			},
			self.duration,
		);
	}
}

#[component]
pub fn Toast(toaster: Toaster) -> impl IntoView {
	let visible = move || toaster.message.with(Option::is_some);
	view! {
		<div class="toast" style:display=move || if visible() { "block" } else { "none" }>
			{move || toaster.message.get().unwrap_or_default()}
		</div>
	}
}
