use log::info;

use super::types::{Link, Point};

/// Packet marker flying along a snapshot of a link.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
	from: Point,
	to: Point,
	elapsed: f64,
	duration: f64,
}

impl Marker {
	pub fn position(&self) -> Point {
		let t = if self.duration > 0.0 {
			(self.elapsed / self.duration).min(1.0)
		} else {
			1.0
		};
		self.from.lerp(self.to, t)
	}

	fn finished(&self) -> bool {
		self.elapsed >= self.duration
	}
}

#[derive(Clone, Debug, Default)]
pub struct Traffic {
	markers: Vec<Marker>,
}

impl Traffic {
	pub fn markers(&self) -> &[Marker] {
		&self.markers
	}

	/// Sends one marker down every link, from its current start to its current end.
	pub fn launch<'a>(&mut self, links: impl IntoIterator<Item = &'a Link>, duration: f64) -> usize {
		let before = self.markers.len();
		self.markers.extend(links.into_iter().map(|l| Marker {
			from: l.line.start,
			to: l.line.end,
			elapsed: 0.0,
			duration,
		}));
		let launched = self.markers.len() - before;
		if launched > 0 {
			info!("simulating traffic on {launched} links");
		}
		launched
	}

	/// Advances every marker by `dt` seconds and drops the ones that arrived.
	pub fn tick(&mut self, dt: f64) {
		for marker in &mut self.markers {
			marker.elapsed += dt;
		}
		self.markers.retain(|m| !m.finished());
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::components::topology_canvas::types::{LinkLine, NodeId};

	fn link(start: Point, end: Point) -> Link {
		Link {
			from: NodeId(1),
			to: NodeId(2),
			line: LinkLine { start, end },
		}
	}

	#[test]
	fn marker_moves_linearly_then_disappears() {
		let mut traffic = Traffic::default();
		let links = [link(Point::new(0.0, 0.0), Point::new(100.0, 50.0))];
		assert_eq!(traffic.launch(&links, 1.5), 1);
		assert_eq!(traffic.markers()[0].position(), Point::new(0.0, 0.0));

		traffic.tick(0.75);
		assert_eq!(traffic.markers()[0].position(), Point::new(50.0, 25.0));

		traffic.tick(0.75);
		assert!(traffic.markers().is_empty());
	}

	#[test]
	fn markers_keep_their_snapshot() {
		let mut traffic = Traffic::default();
		let mut links = vec![link(Point::new(0.0, 0.0), Point::new(10.0, 0.0))];
		traffic.launch(&links, 1.0);
		links[0].line.end = Point::new(500.0, 500.0);
		traffic.tick(0.5);
		assert_eq!(traffic.markers()[0].position(), Point::new(5.0, 0.0));
	}

	#[test]
	fn no_links_no_markers() {
		let mut traffic = Traffic::default();
		let links: [Link; 0] = [];
		assert_eq!(traffic.launch(&links, 1.5), 0);
		assert!(traffic.markers().is_empty());
	}

	#[test]
	fn markers_are_independent() {
		let mut traffic = Traffic::default();
		traffic.launch(&[link(Point::new(0.0, 0.0), Point::new(10.0, 0.0))], 1.0);
		traffic.tick(0.5);
		traffic.launch(&[link(Point::new(0.0, 0.0), Point::new(0.0, 10.0))], 1.0);
		traffic.tick(0.6);
		assert_eq!(traffic.markers().len(), 1);
		assert_eq!(traffic.markers()[0].position(), Point::new(0.0, 6.0));
	}
}
