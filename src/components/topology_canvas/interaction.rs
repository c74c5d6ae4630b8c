use log::debug;

use super::types::{NodeId, Point};

/// Progress of picking the two ends of a new link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
	#[default]
	Idle,
	AwaitingTarget(NodeId),
}

/// Outcome of a node click while link mode is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkClick {
	SourceSelected(NodeId),
	/// Second click; the caller decides whether the pair makes a valid link.
	Complete { from: NodeId, to: NodeId },
}

#[derive(Clone, Debug, Default)]
pub struct LinkTool {
	enabled: bool,
	selection: Selection,
	clear_pending_on_toggle: bool,
}

impl LinkTool {
	pub fn new(clear_pending_on_toggle: bool) -> Self {
		Self {
			clear_pending_on_toggle,
			..Self::default()
		}
	}

	pub fn enabled(&self) -> bool {
		self.enabled
	}

	pub fn pending(&self) -> Option<NodeId> {
		match self.selection {
			Selection::Idle => None,
			Selection::AwaitingTarget(id) => Some(id),
		}
	}

	/// Flips link mode and returns the new mode. A half-picked source survives unless
	/// `clear_pending_on_toggle` is set.
	pub fn toggle(&mut self) -> bool {
		self.enabled = !self.enabled;
		if self.clear_pending_on_toggle {
			self.selection = Selection::Idle;
		}
		debug!("link mode {}", if self.enabled { "on" } else { "off" });
		self.enabled
	}

	pub fn click(&mut self, node: NodeId) -> Option<LinkClick> {
		if !self.enabled {
			return None;
		}
		let (next, outcome) = match self.selection {
			Selection::Idle => (
				Selection::AwaitingTarget(node),
				LinkClick::SourceSelected(node),
			),
			Selection::AwaitingTarget(from) => {
				(Selection::Idle, LinkClick::Complete { from, to: node })
			}
		};
		self.selection = next;
		Some(outcome)
	}

	pub fn reset(&mut self) {
		self.selection = Selection::Idle;
	}
}

/// A mouse press on a node that has not been released yet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Press {
	pub node: NodeId,
	origin: Point,
	/// Pointer position relative to the node center at press time.
	grab: Point,
	dragging: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
	Click(NodeId),
	Dropped(NodeId),
}

impl Press {
	pub fn new(node: NodeId, node_position: Point, pointer: Point) -> Self {
		Self {
			node,
			origin: pointer,
			grab: Point::new(pointer.x - node_position.x, pointer.y - node_position.y),
			dragging: false,
		}
	}

	pub fn is_dragging(&self) -> bool {
		self.dragging
	}

	/// Where the node should sit for the current pointer, once the press has become a drag.
	pub fn track(&mut self, pointer: Point, threshold: f64) -> Option<Point> {
		if !self.dragging && self.origin.distance(pointer) > threshold {
			self.dragging = true;
		}
		self.dragging
			.then(|| Point::new(pointer.x - self.grab.x, pointer.y - self.grab.y))
	}

	pub fn release(self) -> Release {
		if self.dragging {
			Release::Dropped(self.node)
		} else {
			Release::Click(self.node)
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn clicks_are_ignored_outside_link_mode() {
		let mut tool = LinkTool::default();
		assert_eq!(tool.click(NodeId(1)), None);
		assert_eq!(tool.pending(), None);
	}

	#[test]
	fn two_clicks_complete_a_pair() {
		let mut tool = LinkTool::default();
		assert!(tool.toggle());
		assert_eq!(
			tool.click(NodeId(1)),
			Some(LinkClick::SourceSelected(NodeId(1)))
		);
		assert_eq!(tool.pending(), Some(NodeId(1)));
		assert_eq!(
			tool.click(NodeId(2)),
			Some(LinkClick::Complete {
				from: NodeId(1),
				to: NodeId(2),
			})
		);
		assert_eq!(tool.pending(), None);
	}

	#[test]
	fn toggling_twice_restores_mode() {
		let mut tool = LinkTool::default();
		let before = tool.enabled();
		tool.toggle();
		tool.toggle();
		assert_eq!(tool.enabled(), before);
	}

	#[test]
	fn pending_source_survives_toggle_by_default() {
		let mut tool = LinkTool::default();
		tool.toggle();
		tool.click(NodeId(3));
		tool.toggle();
		assert_eq!(tool.pending(), Some(NodeId(3)));
		tool.toggle();
		assert_eq!(
			tool.click(NodeId(4)),
			Some(LinkClick::Complete {
				from: NodeId(3),
				to: NodeId(4),
			})
		);
	}

	#[test]
	fn pending_source_can_be_cleared_on_toggle() {
		let mut tool = LinkTool::new(true);
		tool.toggle();
		tool.click(NodeId(3));
		tool.toggle();
		assert_eq!(tool.pending(), None);
	}

	#[test]
	fn small_wiggle_stays_a_click() {
		let mut press = Press::new(NodeId(1), Point::new(100.0, 100.0), Point::new(110.0, 95.0));
		assert_eq!(press.track(Point::new(112.0, 96.0), 3.0), None);
		assert_eq!(press.release(), Release::Click(NodeId(1)));
	}

	#[test]
	fn drag_keeps_the_grab_offset() {
		let mut press = Press::new(NodeId(1), Point::new(100.0, 100.0), Point::new(110.0, 95.0));
		assert_eq!(
			press.track(Point::new(210.0, 195.0), 3.0),
			Some(Point::new(200.0, 200.0))
		);
		// Once dragging, even a move back near the origin keeps dragging.
		assert_eq!(
			press.track(Point::new(110.0, 95.0), 3.0),
			Some(Point::new(100.0, 100.0))
		);
		assert_eq!(press.release(), Release::Dropped(NodeId(1)));
	}
}
