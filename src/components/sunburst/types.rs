use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Room {
	pub occupied: bool,
}

/// A building record as delivered by the data source.
///
/// `rooms` stays optional here so that a record whose rooms were never
/// populated is rejected by the tree builder instead of reading as empty.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Building {
	pub name: String,
	// Unused while every building shares the brand color
	#[allow(dead_code)]
	pub location: String,
	pub rooms: Option<Vec<Room>>,
}

/// Node of the hierarchical chart model.
///
/// Only leaves carry a count; an internal node's size is the sum of the
/// leaves below it (see [`ChartNode::aggregated_size`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChartNode {
	Leaf {
		title: String,
		color: Option<String>,
		size: u64,
	},
	Internal {
		title: String,
		color: Option<String>,
		children: Vec<ChartNode>,
	},
}

impl ChartNode {
	pub fn title(&self) -> &str {
		match self {
			ChartNode::Leaf { title, .. } | ChartNode::Internal { title, .. } => title,
		}
	}

	pub fn color(&self) -> Option<&str> {
		match self {
			ChartNode::Leaf { color, .. } | ChartNode::Internal { color, .. } => color.as_deref(),
		}
	}

	pub fn children(&self) -> &[ChartNode] {
		match self {
			ChartNode::Leaf { .. } => &[],
			ChartNode::Internal { children, .. } => children,
		}
	}

	pub fn is_leaf(&self) -> bool {
		matches!(self, ChartNode::Leaf { .. })
	}

	pub fn aggregated_size(&self) -> u64 {
		match self {
			ChartNode::Leaf { size, .. } => *size,
			ChartNode::Internal { children, .. } => {
				children.iter().map(ChartNode::aggregated_size).sum()
			}
		}
	}

	/// Number of rings below this node (0 for a leaf).
	pub fn depth(&self) -> usize {
		self.children()
			.iter()
			.map(|child| child.depth() + 1)
			.max()
			.unwrap_or(0)
	}

	/// Follow child indices from this node.
	pub fn descendant(&self, path: &[usize]) -> Option<&ChartNode> {
		path.iter()
			.try_fold(self, |node, &idx| node.children().get(idx))
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

/// Wedge geometry as reported for a hovered arc. Angles are in radians,
/// measured the way the canvas measures them (clockwise from +x).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WedgeGeometry {
	pub radius0: f64,
	pub radius: f64,
	pub angle0: f64,
	pub angle: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipView {
	pub anchor: Point,
	pub label: String,
	pub color: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelStyle {
	Primary,
	Secondary,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelAnnotation {
	pub x: f64,
	pub y: f64,
	pub label: String,
	pub style: LabelStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendItem {
	pub title: &'static str,
	pub color: &'static str,
}
