// The bin only mounts the app; the rest of the dependency list belongs to the lib.
#![allow(unused_crate_dependencies)]

use campus_net_sketch::{App, init_logging};
use leptos::prelude::*;

fn main() {
	init_logging();
	mount_to_body(App);
}
