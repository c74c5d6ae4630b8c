use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		(dx * dx + dy * dy).sqrt()
	}

	/// Linear interpolation towards `other`, `t` in `[0, 1]`.
	pub fn lerp(self, other: Point, t: f64) -> Point {
		Point::new(
			self.x + (other.x - self.x) * t,
			self.y + (other.y - self.y) * t,
		)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "n{}", self.0)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LinkId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
	Building,
	Server,
	Switch,
	AccessPoint,
}

impl NodeKind {
	pub fn is_device(self) -> bool {
		!matches!(self, NodeKind::Building)
	}
}

impl fmt::Display for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			NodeKind::Building => "building",
			NodeKind::Server => "server",
			NodeKind::Switch => "switch",
			NodeKind::AccessPoint => "access point",
		})
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: NodeId,
	pub kind: NodeKind,
	pub label: Option<String>,
	pub position: Point,
}

/// Rendered segment of a link, kept in sync with its endpoints' positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkLine {
	pub start: Point,
	pub end: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Link {
	pub from: NodeId,
	pub to: NodeId,
	pub line: LinkLine,
}

impl Link {
	pub fn touches(&self, node: NodeId) -> bool {
		self.from == node || self.to == node
	}
}
