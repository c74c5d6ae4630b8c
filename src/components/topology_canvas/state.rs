use std::fmt;

use log::info;

use super::config::EditorConfig;
use super::interaction::{LinkClick, LinkTool, Press, Release};
use super::scene::Scene;
use super::traffic::Traffic;
use super::types::{NodeId, NodeKind, Point};

/// Informational message surfaced through the toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
	SourceSelected,
	LinkCreated,
	CanvasCleared,
	LinkMode(bool),
	Added(NodeKind),
}

impl fmt::Display for Notice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Notice::SourceSelected => f.write_str("Source selected"),
			Notice::LinkCreated => f.write_str("Link created"),
			Notice::CanvasCleared => f.write_str("Canvas cleared"),
			Notice::LinkMode(true) => f.write_str("Link Mode ON"),
			Notice::LinkMode(false) => f.write_str("Link Mode OFF"),
			Notice::Added(kind) => write!(f, "Added {kind}"),
		}
	}
}

/// All editor state behind the canvas: the diagram, link picking, the press in progress
/// and the markers in flight.
pub struct Editor {
	config: EditorConfig,
	scene: Scene,
	link_tool: LinkTool,
	traffic: Traffic,
	press: Option<Press>,
	pub width: f64,
	pub height: f64,
}

impl Editor {
	pub fn new(config: EditorConfig) -> Self {
		let mut editor = Self::empty(config);
		for seed in editor.config.seed.clone() {
			editor.add_node(seed.kind, seed.label, Some(seed.position));
		}
		info!("editor ready with {} nodes", editor.scene.nodes().len());
		editor
	}

	pub fn empty(config: EditorConfig) -> Self {
		Self {
			link_tool: LinkTool::new(config.clear_pending_on_toggle),
			config,
			scene: Scene::default(),
			traffic: Traffic::default(),
			press: None,
			width: 0.0,
			height: 0.0,
		}
	}

	pub fn config(&self) -> &EditorConfig {
		&self.config
	}

	pub fn scene(&self) -> &Scene {
		&self.scene
	}

	pub fn traffic(&self) -> &Traffic {
		&self.traffic
	}

	pub fn link_mode(&self) -> bool {
		self.link_tool.enabled()
	}

	pub fn pending_source(&self) -> Option<NodeId> {
		self.link_tool.pending()
	}

	pub fn is_dragging(&self) -> bool {
		self.press.is_some_and(|p| p.is_dragging())
	}

	/// Places a node, falling back to the kind's default position.
	pub fn add_node(&mut self, kind: NodeKind, label: Option<String>, at: Option<Point>) -> NodeId {
		let position = at.unwrap_or_else(|| self.config.default_position(kind));
		self.scene.add_node(kind, label, position)
	}

	/// Toolbar entry point for servers, switches and access points.
	pub fn add_device(&mut self, kind: NodeKind) -> Notice {
		let at = self.config.spawn_position(kind);
		self.add_node(kind, None, Some(at));
		Notice::Added(kind)
	}

	/// Preset building buttons land here with their name and a caller-chosen spot.
	pub fn add_building(&mut self, name: &str, at: Point) -> Notice {
		self.add_node(NodeKind::Building, Some(name.to_owned()), Some(at));
		Notice::Added(NodeKind::Building)
	}

	/// Drops every node and link. Markers already in flight finish on their own.
	pub fn clear(&mut self) -> Notice {
		self.scene.clear();
		self.link_tool.reset();
		self.press = None;
		info!("canvas cleared");
		Notice::CanvasCleared
	}

	pub fn toggle_link_mode(&mut self) -> Notice {
		Notice::LinkMode(self.link_tool.toggle())
	}

	pub fn click_node(&mut self, id: NodeId) -> Option<Notice> {
		match self.link_tool.click(id)? {
			LinkClick::SourceSelected(_) => Some(Notice::SourceSelected),
			LinkClick::Complete { from, to } => self
				.scene
				.create_link(from, to)
				.map(|_| Notice::LinkCreated),
		}
	}

	/// Moves a node to `to`, keeping its links attached.
	pub fn drag_node(&mut self, id: NodeId, to: Point) -> bool {
		self.scene.move_node(id, to)
	}

	pub fn node_under(&self, at: Point) -> Option<NodeId> {
		self.scene.node_at(at, |kind| self.config.style(kind).radius)
	}

	/// CSS cursor for the pointer at `at`.
	pub fn cursor(&self, at: Point) -> &'static str {
		if self.is_dragging() {
			"grabbing"
		} else if self.node_under(at).is_none() {
			"default"
		} else if self.link_mode() {
			"crosshair"
		} else {
			"grab"
		}
	}

	/// Starts a press if `at` hits a node. Returns whether something was hit.
	pub fn pointer_down(&mut self, at: Point) -> bool {
		self.press = self
			.node_under(at)
			.and_then(|id| self.scene.node(id))
			.map(|node| Press::new(node.id, node.position, at));
		self.press.is_some()
	}

	pub fn pointer_move(&mut self, at: Point) {
		let threshold = self.config.drag_threshold;
		let Some(press) = self.press.as_mut() else {
			return;
		};
		if let Some(to) = press.track(at, threshold) {
			let id = press.node;
			self.drag_node(id, to);
		}
	}

	/// Ends the press; a press that never turned into a drag counts as a click.
	pub fn pointer_up(&mut self) -> Option<Notice> {
		match self.press.take()?.release() {
			Release::Click(id) => self.click_node(id),
			Release::Dropped(_) => None,
		}
	}

	/// Pointer left the surface: finish any drag without clicking.
	pub fn pointer_leave(&mut self) {
		self.press = None;
	}

	/// Launches one marker per link and returns how many were sent.
	pub fn simulate(&mut self) -> usize {
		self.traffic
			.launch(self.scene.links(), self.config.marker_duration)
	}

	pub fn tick(&mut self, dt: f64) {
		self.traffic.tick(dt);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
