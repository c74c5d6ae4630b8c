use log::debug;

use super::types::{Link, LinkId, LinkLine, Node, NodeId, NodeKind, Point};

/// Ordered store of every node and link on the canvas.
///
/// Nodes are appended with monotonically increasing ids and only ever removed all at once,
/// so `nodes` stays sorted by id and lookups can binary search. Draw order is insertion
/// order; the last node is on top.
#[derive(Clone, Debug)]
pub struct Scene {
	nodes: Vec<Node>,
	links: Vec<Link>,
	next_node: u32,
	next_link: u32,
}

impl Default for Scene {
	fn default() -> Self {
		Self {
			nodes: Vec::new(),
			links: Vec::new(),
			next_node: 1,
			next_link: 1,
		}
	}
}

impl Scene {
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn links(&self) -> &[Link] {
		&self.links
	}

	pub fn add_node(&mut self, kind: NodeKind, label: Option<String>, position: Point) -> NodeId {
		let id = NodeId(self.next_node);
		self.next_node += 1;
		debug!("added {kind} {id} at ({}, {})", position.x, position.y);
		self.nodes.push(Node {
			id,
			kind,
			label,
			position,
		});
		id
	}

	pub fn node(&self, id: NodeId) -> Option<&Node> {
		find(&self.nodes, id)
	}

	/// Topmost node whose disc contains `point`.
	pub fn node_at(&self, point: Point, radius: impl Fn(NodeKind) -> f64) -> Option<NodeId> {
		self.nodes
			.iter()
			.rev()
			.find(|n| n.position.distance(point) <= radius(n.kind))
			.map(|n| n.id)
	}

	/// Connects two nodes. Self-links and links to unknown nodes are dropped.
	pub fn create_link(&mut self, from: NodeId, to: NodeId) -> Option<LinkId> {
		if from == to {
			debug!("ignored self-link on {from}");
			return None;
		}
		let line = line_between(&self.nodes, from, to)?;
		let id = LinkId(self.next_link);
		self.next_link += 1;
		debug!("link {}: {from} -> {to}", id.0);
		self.links.push(Link { from, to, line });
		Some(id)
	}

	/// Moves a node and drags the ends of its links along with it.
	pub fn move_node(&mut self, id: NodeId, position: Point) -> bool {
		let Ok(i) = self.nodes.binary_search_by_key(&id, |n| n.id) else {
			return false;
		};
		self.nodes[i].position = position;
		self.refresh_links_for(id);
		true
	}

	/// Recomputes the rendered endpoints of every link touching `id`.
	pub fn refresh_links_for(&mut self, id: NodeId) {
		let nodes = &self.nodes;
		for link in self.links.iter_mut().filter(|l| l.touches(id)) {
			if let Some(line) = line_between(nodes, link.from, link.to) {
				link.line = line;
			}
		}
	}

	pub fn clear(&mut self) {
		self.nodes.clear();
		self.links.clear();
	}
}

fn find(nodes: &[Node], id: NodeId) -> Option<&Node> {
	nodes
		.binary_search_by_key(&id, |n| n.id)
		.ok()
		.map(|i| &nodes[i])
}

fn line_between(nodes: &[Node], from: NodeId, to: NodeId) -> Option<LinkLine> {
	Some(LinkLine {
		start: find(nodes, from)?.position,
		end: find(nodes, to)?.position,
	})
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	use super::*;

	fn radius(kind: NodeKind) -> f64 {
		if kind == NodeKind::Building { 40.0 } else { 25.0 }
	}

	#[test]
	fn ids_are_never_reused_after_clear() {
		let mut scene = Scene::default();
		let a = scene.add_node(NodeKind::Server, None, Point::default());
		scene.clear();
		let b = scene.add_node(NodeKind::Switch, None, Point::default());
		assert_eq!(a, NodeId(1));
		assert_eq!(b, NodeId(2));
		assert_eq!(b.to_string(), "n2");
	}

	#[test]
	fn self_link_is_dropped() {
		let mut scene = Scene::default();
		let a = scene.add_node(NodeKind::Building, Some("CSC".into()), Point::default());
		assert_eq!(scene.create_link(a, a), None);
		assert!(scene.links().is_empty());
	}

	#[test]
	fn link_to_missing_node_is_dropped() {
		let mut scene = Scene::default();
		let a = scene.add_node(NodeKind::Server, None, Point::default());
		assert_eq!(scene.create_link(a, NodeId(99)), None);
		assert!(scene.links().is_empty());
	}

	#[test]
	fn duplicate_links_are_kept() {
		let mut scene = Scene::default();
		let a = scene.add_node(NodeKind::Server, None, Point::new(0.0, 0.0));
		let b = scene.add_node(NodeKind::Switch, None, Point::new(10.0, 0.0));
		scene.create_link(a, b);
		scene.create_link(b, a);
		scene.create_link(a, b);
		assert_eq!(scene.links().len(), 3);
	}

	#[test]
	fn moving_a_node_drags_its_link_ends() {
		let mut scene = Scene::default();
		let a = scene.add_node(NodeKind::Building, None, Point::new(0.0, 0.0));
		let b = scene.add_node(NodeKind::Building, None, Point::new(100.0, 0.0));
		let c = scene.add_node(NodeKind::Server, None, Point::new(0.0, 100.0));
		scene.create_link(a, b);
		scene.create_link(c, a);
		scene.create_link(b, c);

		assert!(scene.move_node(a, Point::new(50.0, 50.0)));

		let lines: Vec<LinkLine> = scene.links().iter().map(|l| l.line).collect();
		assert_eq!(
			lines,
			vec![
				LinkLine {
					start: Point::new(50.0, 50.0),
					end: Point::new(100.0, 0.0),
				},
				LinkLine {
					start: Point::new(0.0, 100.0),
					end: Point::new(50.0, 50.0),
				},
				LinkLine {
					start: Point::new(100.0, 0.0),
					end: Point::new(0.0, 100.0),
				},
			]
		);
	}

	#[test]
	fn move_unknown_node_is_a_no_op() {
		let mut scene = Scene::default();
		assert!(!scene.move_node(NodeId(7), Point::new(1.0, 1.0)));
	}

	#[test]
	fn hit_test_prefers_topmost_node() {
		let mut scene = Scene::default();
		let below = scene.add_node(NodeKind::Building, None, Point::new(0.0, 0.0));
		let above = scene.add_node(NodeKind::Server, None, Point::new(20.0, 0.0));
		assert_eq!(scene.node_at(Point::new(10.0, 0.0), radius), Some(above));
		assert_eq!(scene.node_at(Point::new(-30.0, 0.0), radius), Some(below));
		assert_eq!(scene.node_at(Point::new(200.0, 0.0), radius), None);
	}

	#[test]
	fn clear_empties_everything() {
		let mut scene = Scene::default();
		let a = scene.add_node(NodeKind::Server, None, Point::default());
		let b = scene.add_node(NodeKind::Switch, None, Point::new(5.0, 5.0));
		scene.create_link(a, b);
		scene.clear();
		assert!(scene.nodes().is_empty());
		assert!(scene.links().is_empty());
		assert_eq!(scene.node(a), None);
	}

	fn kind() -> impl Strategy<Value = NodeKind> {
		prop_oneof![
			Just(NodeKind::Building),
			Just(NodeKind::Server),
			Just(NodeKind::Switch),
			Just(NodeKind::AccessPoint),
		]
	}

	proptest! {
		#[test]
		fn fresh_ids_are_unique(ops in prop::collection::vec((kind(), any::<bool>()), 1..64)) {
			let mut scene = Scene::default();
			let mut seen = HashSet::new();
			for (kind, clear) in ops {
				if clear {
					scene.clear();
				}
				let id = scene.add_node(kind, None, Point::default());
				prop_assert!(seen.insert(id));
			}
		}

		#[test]
		fn links_follow_dragged_nodes(
			count in 2usize..8,
			pairs in prop::collection::vec((0usize..8, 0usize..8), 0..16),
			moves in prop::collection::vec((0usize..8, -500.0f64..500.0, -500.0f64..500.0), 1..16),
		) {
			let mut scene = Scene::default();
			let ids: Vec<NodeId> = (0..count)
				.map(|i| scene.add_node(NodeKind::Server, None, Point::new(i as f64 * 10.0, 0.0)))
				.collect();
			for (a, b) in pairs {
				let (a, b) = (ids[a % count], ids[b % count]);
				let before = scene.links().len();
				let created = scene.create_link(a, b);
				prop_assert_eq!(created.is_some(), a != b);
				prop_assert_eq!(scene.links().len(), before + usize::from(a != b));
			}
			for (i, x, y) in moves {
				scene.move_node(ids[i % count], Point::new(x, y));
				for link in scene.links() {
					prop_assert_eq!(link.line.start, scene.node(link.from).unwrap().position);
					prop_assert_eq!(link.line.end, scene.node(link.to).unwrap().position);
				}
			}
		}
	}
}
