use log::debug;

use super::hover::{HoverAggregator, HoverEvent};
use super::layout::SunburstLayout;
use super::types::{ChartNode, LabelAnnotation, Point};

/// Space left around the outer ring.
pub const MARGIN: f64 = 10.0;
const HIGHLIGHT_SPEED: f64 = 6.0;

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HighlightState {
	pub path: Option<Vec<usize>>,
	pub t: f64,
}

pub struct SunburstState {
	pub layout: SunburstLayout,
	pub labels: Vec<LabelAnnotation>,
	pub hover: HoverAggregator,
	pub highlight: HighlightState,
	pub transform: ViewTransform,
	pub width: f64,
	pub height: f64,
}

fn outer_radius(width: f64, height: f64) -> f64 {
	(width.min(height) / 2.0 - MARGIN).max(0.0)
}

impl SunburstState {
	pub fn new(root: ChartNode, labels: Vec<LabelAnnotation>, width: f64, height: f64) -> Self {
		let hover = HoverAggregator::new().with_diagnostics(|event| match event {
			HoverEvent::Started(target) => debug!(
				"hover {} r={:.1} at ({:.1}, {:.1})",
				target.node.title(),
				target.geometry.radius,
				target.anchor.x,
				target.anchor.y
			),
			HoverEvent::Rejected { title, error } => debug!("hover on {title} ignored: {error}"),
			HoverEvent::Ended => debug!("hover ended"),
		});

		Self {
			layout: SunburstLayout::new(root, outer_radius(width, height)),
			labels,
			hover,
			highlight: HighlightState::default(),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
			},
			width,
			height,
		}
	}

	pub fn screen_to_chart(&self, sx: f64, sy: f64) -> Point {
		Point {
			x: sx - self.transform.x,
			y: sy - self.transform.y,
		}
	}

	/// Route a pointer position to the hover aggregator.
	pub fn pointer_moved(&mut self, sx: f64, sy: f64) {
		let point = self.screen_to_chart(sx, sy);
		let hit = self
			.layout
			.hit_test(point)
			.map(|w| (w.path.clone(), w.geometry));

		let current = self.highlight.path.as_deref();
		if current == hit.as_ref().map(|(path, _)| path.as_slice()) {
			return;
		}

		let Some((path, geometry)) = hit else {
			self.pointer_left();
			return;
		};
		let Some(node) = self.layout.node(&path) else {
			self.pointer_left();
			return;
		};
		// `t` carries over so moving between wedges does not restart the fade
		self.hover.on_hover_start(node, geometry);
		self.highlight.path = self.hover.target().map(|_| path);
	}

	pub fn pointer_left(&mut self) {
		self.hover.on_hover_end();
		self.highlight.path = None;
	}

	/// Top-left corner of a `w` x `h` tooltip box for `anchor`, in chart
	/// coordinates. The box opens toward the chart center and stays on the canvas.
	pub fn tooltip_origin(&self, anchor: Point, w: f64, h: f64) -> Point {
		let x = if anchor.x > 0.0 { anchor.x - w } else { anchor.x };
		let y = if anchor.y < 0.0 { anchor.y } else { anchor.y - h };
		let (min_x, min_y) = (-self.transform.x, -self.transform.y);
		let (max_x, max_y) = (
			self.width - self.transform.x - w,
			self.height - self.transform.y - h,
		);
		Point {
			x: x.min(max_x).max(min_x),
			y: y.min(max_y).max(min_y),
		}
	}

	pub fn is_highlighted(&self, path: &[usize]) -> bool {
		self.highlight
			.path
			.as_deref()
			.is_some_and(|hovered| path.starts_with(hovered))
	}

	pub fn tick(&mut self, dt: f64) {
		let target = if self.highlight.path.is_some() { 1.0 } else { 0.0 };
		self.highlight.t += (target - self.highlight.t) * (HIGHLIGHT_SPEED * dt).min(1.0);
		if (target - self.highlight.t).abs() < 0.01 {
			self.highlight.t = target;
		}
	}
}
