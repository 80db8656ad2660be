use std::f64::consts::TAU;

use super::types::{ChartNode, Point, WedgeGeometry};

/// A laid-out arc: where it sits in the tree and where it sits on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Wedge {
	pub path: Vec<usize>,
	pub geometry: WedgeGeometry,
}

/// Partition layout of a chart tree into concentric rings.
///
/// The root fills the center disk and gets no wedge. Every other node gets
/// an angular span proportional to its aggregated size within its parent.
#[derive(Clone, Debug)]
pub struct SunburstLayout {
	pub root: ChartNode,
	pub radius: f64,
	pub ring: f64,
	pub wedges: Vec<Wedge>,
}

impl SunburstLayout {
	pub fn new(root: ChartNode, radius: f64) -> Self {
		let ring = radius / (root.depth() + 1) as f64;
		let mut wedges = Vec::new();
		let mut path = Vec::new();
		partition(&root, 0, 0.0, TAU, ring, &mut path, &mut wedges);
		Self {
			root,
			radius,
			ring,
			wedges,
		}
	}

	pub fn node(&self, path: &[usize]) -> Option<&ChartNode> {
		self.root.descendant(path)
	}

	/// Wedge under `point` (relative to the chart center), if any.
	pub fn hit_test(&self, point: Point) -> Option<&Wedge> {
		let r = point.x.hypot(point.y);
		if !r.is_finite() || r < self.ring || r > self.radius {
			return None;
		}
		let theta = point.y.atan2(point.x).rem_euclid(TAU);
		self.wedges.iter().find(|w| {
			let g = &w.geometry;
			g.angle > g.angle0
				&& r >= g.radius0
				&& r <= g.radius
				&& theta >= g.angle0
				&& theta < g.angle
		})
	}
}

fn partition(
	node: &ChartNode,
	depth: usize,
	start: f64,
	end: f64,
	ring: f64,
	path: &mut Vec<usize>,
	wedges: &mut Vec<Wedge>,
) {
	if depth > 0 {
		wedges.push(Wedge {
			path: path.clone(),
			geometry: WedgeGeometry {
				radius0: depth as f64 * ring,
				radius: (depth + 1) as f64 * ring,
				angle0: start,
				angle: end,
			},
		});
	}

	if node.is_leaf() {
		return;
	}
	let total = node.aggregated_size();
	let span = end - start;
	let mut cursor = start;
	for (i, child) in node.children().iter().enumerate() {
		let share = if total == 0 {
			0.0
		} else {
			span * child.aggregated_size() as f64 / total as f64
		};
		path.push(i);
		partition(child, depth + 1, cursor, cursor + share, ring, path, wedges);
		path.pop();
		cursor += share;
	}
}

#[cfg(test)]
mod tests {
	use std::f64::consts::PI;

	use super::*;
	use crate::components::sunburst::tree::build;
	use crate::components::sunburst::types::{Building, Room};

	fn building(name: &str, occupied: usize, free: usize) -> Building {
		let rooms = std::iter::repeat(Room { occupied: true })
			.take(occupied)
			.chain(std::iter::repeat(Room { occupied: false }).take(free))
			.collect();
		Building {
			name: name.into(),
			location: String::new(),
			rooms: Some(rooms),
		}
	}

	fn layout() -> SunburstLayout {
		let root = build(&[building("A", 3, 1), building("B", 0, 4)]).unwrap();
		SunburstLayout::new(root, 90.0)
	}

	#[test]
	fn rings_split_radius_by_depth() {
		let l = layout();
		assert_eq!(l.ring, 30.0);
		// 2 buildings + 6 status leaves
		assert_eq!(l.wedges.len(), 8);
		let a = &l.wedges[0];
		assert_eq!(a.path, vec![0]);
		assert_eq!((a.geometry.radius0, a.geometry.radius), (30.0, 60.0));
		let leaf = &l.wedges[1];
		assert_eq!(leaf.path, vec![0, 0]);
		assert_eq!((leaf.geometry.radius0, leaf.geometry.radius), (60.0, 90.0));
	}

	#[test]
	fn spans_are_proportional_and_cover_the_parent() {
		let l = layout();
		let span = |path: &[usize]| {
			let w = l.wedges.iter().find(|w| w.path == path).unwrap();
			w.geometry.angle - w.geometry.angle0
		};
		assert!((span(&[0]) - PI).abs() < 1e-12);
		assert!((span(&[1]) - PI).abs() < 1e-12);
		assert!((span(&[0, 0]) - 0.75 * PI).abs() < 1e-12);
		assert_eq!(span(&[0, 1]), 0.0);
		let children: f64 = (0..3).map(|i| span(&[1, i])).sum();
		assert!((children - span(&[1])).abs() < 1e-12);
	}

	#[test]
	fn hit_test_finds_wedges() {
		let l = layout();
		// Just below +x axis: first building, inner ring
		let hit = l.hit_test(Point { x: 45.0, y: 1.0 }).unwrap();
		assert_eq!(hit.path, vec![0]);
		assert_eq!(l.node(&hit.path).unwrap().title(), "rooms in A");

		// Upper half in canvas orientation is the second building's free leaf
		let hit = l.hit_test(Point { x: 0.0, y: -75.0 }).unwrap();
		assert_eq!(l.node(&hit.path).unwrap().title(), "Free");
		assert_eq!(hit.path, vec![1, 2]);
	}

	#[test]
	fn center_and_outside_miss() {
		let l = layout();
		assert!(l.hit_test(Point { x: 0.0, y: 0.0 }).is_none());
		assert!(l.hit_test(Point { x: 10.0, y: 10.0 }).is_none());
		assert!(l.hit_test(Point { x: 100.0, y: 0.0 }).is_none());
		assert!(l.hit_test(Point { x: f64::NAN, y: 0.0 }).is_none());
	}

	#[test]
	fn empty_tree_has_no_wedges() {
		let l = SunburstLayout::new(build(&[]).unwrap(), 90.0);
		assert!(l.wedges.is_empty());
		assert_eq!(l.ring, 90.0);
		assert!(l.hit_test(Point { x: 50.0, y: 0.0 }).is_none());
	}
}
