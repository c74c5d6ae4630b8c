use std::time::Duration;

use super::types::{NodeKind, Point};

#[derive(Clone, Debug, PartialEq)]
pub struct NodeStyle {
	pub radius: f64,
	pub fill: &'static str,
	pub stroke: &'static str,
	pub stroke_width: f64,
	/// Glyph drawn in the middle of device nodes.
	pub icon: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeedNode {
	pub kind: NodeKind,
	pub label: Option<String>,
	pub position: Point,
}

/// Everything tunable about the editor: look, placement, timings and input handling.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
	pub building: NodeStyle,
	pub server: NodeStyle,
	pub switch: NodeStyle,
	pub access_point: NodeStyle,
	pub background: &'static str,
	pub label_color: &'static str,
	pub label_font_px: f64,
	/// Distance from a building's center to the top of its label.
	pub label_offset: f64,
	pub link_stroke: &'static str,
	pub link_width: f64,
	pub pending_ring: &'static str,
	pub marker_radius: f64,
	pub marker_fill: &'static str,
	/// Seconds a traffic marker takes to travel its link.
	pub marker_duration: f64,
	pub default_building_position: Point,
	pub default_device_position: Point,
	pub server_spawn: Point,
	pub switch_spawn: Point,
	pub access_point_spawn: Point,
	/// Preset buildings land uniformly inside `[0, w) x [0, h)`.
	pub preset_area: (f64, f64),
	pub presets: Vec<String>,
	pub seed: Vec<SeedNode>,
	pub toast_duration: Duration,
	/// Pointer travel (px) after which a press on a node becomes a drag.
	pub drag_threshold: f64,
	/// When set, toggling link mode also forgets a half-chosen link source.
	pub clear_pending_on_toggle: bool,
}

const DEVICE_RADIUS: f64 = 25.0;

impl Default for EditorConfig {
	fn default() -> Self {
		let device = |stroke, icon| NodeStyle {
			radius: DEVICE_RADIUS,
			fill: "#fff",
			stroke,
			stroke_width: 3.0,
			icon: Some(icon),
		};
		Self {
			building: NodeStyle {
				radius: 40.0,
				fill: "#f3f4f6",
				stroke: "#0ea5a4",
				stroke_width: 3.0,
				icon: None,
			},
			server: device("#6b7280", "🖥"),
			switch: device("#3b82f6", "🔀"),
			access_point: device("#22c55e", "📶"),
			background: "#ffffff",
			label_color: "#111827",
			label_font_px: 14.0,
			label_offset: 45.0,
			link_stroke: "#93c5fd",
			link_width: 3.0,
			pending_ring: "#f59e0b",
			marker_radius: 6.0,
			marker_fill: "#10b981",
			marker_duration: 1.5,
			default_building_position: Point::new(200.0, 200.0),
			default_device_position: Point::new(300.0, 300.0),
			server_spawn: Point::new(400.0, 200.0),
			switch_spawn: Point::new(450.0, 250.0),
			access_point_spawn: Point::new(500.0, 300.0),
			preset_area: (500.0, 300.0),
			presets: ["CSC", "ECE", "Library", "Admin Block", "Hostel"]
				.into_iter()
				.map(String::from)
				.collect(),
			seed: vec![
				SeedNode {
					kind: NodeKind::Building,
					label: Some("CSC".into()),
					position: Point::new(200.0, 200.0),
				},
				SeedNode {
					kind: NodeKind::Building,
					label: Some("ECE".into()),
					position: Point::new(600.0, 200.0),
				},
				SeedNode {
					kind: NodeKind::AccessPoint,
					label: None,
					position: Point::new(400.0, 300.0),
				},
			],
			toast_duration: Duration::from_millis(2000),
			drag_threshold: 3.0,
			clear_pending_on_toggle: false,
		}
	}
}

impl EditorConfig {
	pub fn style(&self, kind: NodeKind) -> &NodeStyle {
		match kind {
			NodeKind::Building => &self.building,
			NodeKind::Server => &self.server,
			NodeKind::Switch => &self.switch,
			NodeKind::AccessPoint => &self.access_point,
		}
	}

	/// Where a node lands when the caller gives no position.
	pub fn default_position(&self, kind: NodeKind) -> Point {
		if kind.is_device() {
			self.default_device_position
		} else {
			self.default_building_position
		}
	}

	/// Where the toolbar drops a freshly added device.
	pub fn spawn_position(&self, kind: NodeKind) -> Point {
		match kind {
			NodeKind::Building => self.default_building_position,
			NodeKind::Server => self.server_spawn,
			NodeKind::Switch => self.switch_spawn,
			NodeKind::AccessPoint => self.access_point_spawn,
		}
	}
}
