//! Sunburst chart of room occupancy per building.

mod component;
mod error;
mod hover;
mod layout;
mod render;
mod source;
mod state;
mod theme;
mod tree;
mod types;

pub use component::OccupancySunburst;
pub use source::{SAMPLE_BUILDINGS, parse_buildings};
pub use tree::build;
