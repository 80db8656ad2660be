//! Colors, label styles and the legend table.

use super::types::{LabelStyle, LegendItem};

/// Building wedges all share the brand color; per-location coloring is off.
pub const BRAND_COLOR: &str = "#e20074";
pub const BACKGROUND_COLOR: &str = "#FFF";
pub const OCCUPIED_COLOR: &str = "#8a0047";
pub const FREE_COLOR: &str = "#7ccf3c";
/// Fill for nodes that carry no color of their own.
pub const NEUTRAL_COLOR: &str = "#c2c2c2";
pub const WEDGE_STROKE: &str = "#fff";

pub const ROOT_TITLE: &str = "Buildings";
pub const OCCUPIED: &str = "Occupied";
pub const RESERVED: &str = "Reserved";
pub const FREE: &str = "Free";
pub const ROOMS_CAPTION: &str = "Rooms Available";

pub const DEFAULT_WIDTH: f64 = 350.0;
pub const DEFAULT_HEIGHT: f64 = 300.0;

pub struct TextStyle {
	pub fill: &'static str,
	pub font: &'static str,
}

pub fn text_style(style: LabelStyle) -> TextStyle {
	match style {
		LabelStyle::Primary => TextStyle {
			fill: "#5a5a5a",
			font: "46px sans-serif",
		},
		LabelStyle::Secondary => TextStyle {
			fill: "#000",
			font: "16px sans-serif",
		},
	}
}

pub const LEGEND: &[LegendItem] = &[
	LegendItem {
		title: "Building",
		color: BRAND_COLOR,
	},
	LegendItem {
		title: OCCUPIED,
		color: OCCUPIED_COLOR,
	},
	LegendItem {
		title: RESERVED,
		color: NEUTRAL_COLOR,
	},
	LegendItem {
		title: FREE,
		color: FREE_COLOR,
	},
];
