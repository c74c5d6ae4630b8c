mod component;
mod config;
mod error;
mod interaction;
mod render;
mod scene;
mod state;
mod traffic;
mod types;

pub use component::TopologyCanvas;
pub use config::EditorConfig;
pub use state::Editor;
pub use types::{NodeKind, Point};
