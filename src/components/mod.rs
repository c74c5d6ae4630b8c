pub mod toast;
pub mod toolbar;
pub mod topology_canvas;
