use std::fmt;

use super::error::UnresolvableGeometryError;
use super::types::{ChartNode, Point, TooltipView, WedgeGeometry};

/// Map the wedge's mid angle at its outer radius to a point.
pub fn resolve_anchor(geometry: &WedgeGeometry) -> Result<Point, UnresolvableGeometryError> {
	let WedgeGeometry {
		radius,
		angle,
		angle0,
		..
	} = *geometry;
	let mid = (angle + angle0) / 2.0;
	let point = Point {
		x: radius * mid.cos(),
		y: radius * mid.sin(),
	};
	if point.x.is_finite() && point.y.is_finite() {
		Ok(point)
	} else {
		Err(UnresolvableGeometryError {
			radius,
			angle,
			angle0,
		})
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct HoverTarget {
	pub node: ChartNode,
	pub geometry: WedgeGeometry,
	pub anchor: Point,
}

/// Hover transitions, as seen by a diagnostic hook.
#[derive(Debug)]
pub enum HoverEvent<'a> {
	Started(&'a HoverTarget),
	Rejected {
		title: &'a str,
		error: &'a UnresolvableGeometryError,
	},
	Ended,
}

type DiagnosticHook = Box<dyn FnMut(&HoverEvent<'_>)>;

/// Tracks the hovered chart node and projects it into a tooltip.
///
/// The latest call always wins; there is no debouncing.
#[derive(Default)]
pub struct HoverAggregator {
	target: Option<HoverTarget>,
	hook: Option<DiagnosticHook>,
}

impl HoverAggregator {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_diagnostics(mut self, hook: impl FnMut(&HoverEvent<'_>) + 'static) -> Self {
		self.hook = Some(Box::new(hook));
		self
	}

	pub fn on_hover_start(&mut self, node: &ChartNode, geometry: WedgeGeometry) {
		match resolve_anchor(&geometry) {
			Ok(anchor) => {
				let target = self.target.insert(HoverTarget {
					node: node.clone(),
					geometry,
					anchor,
				});
				if let Some(hook) = self.hook.as_mut() {
					hook(&HoverEvent::Started(target));
				}
			}
			Err(error) => {
				self.target = None;
				if let Some(hook) = self.hook.as_mut() {
					hook(&HoverEvent::Rejected {
						title: node.title(),
						error: &error,
					});
				}
			}
		}
	}

	pub fn on_hover_end(&mut self) {
		let was_hovering = self.target.take().is_some();
		if was_hovering {
			if let Some(hook) = self.hook.as_mut() {
				hook(&HoverEvent::Ended);
			}
		}
	}

	pub fn target(&self) -> Option<&HoverTarget> {
		self.target.as_ref()
	}

	pub fn current_tooltip(&self) -> Option<TooltipView> {
		self.target.as_ref().map(|t| TooltipView {
			anchor: t.anchor,
			label: format!("{} {}", t.node.aggregated_size(), t.node.title()),
			color: t.node.color().map(str::to_owned),
		})
	}
}

impl fmt::Debug for HoverAggregator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HoverAggregator")
			.field("target", &self.target)
			.field("hook", &self.hook.is_some())
			.finish()
	}
}
