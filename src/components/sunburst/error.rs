use thiserror::Error;

/// Building data the chart cannot be built from.
#[derive(Debug, Error)]
pub enum InvalidInputError {
	#[error("building {building:?} has no room list")]
	MissingRooms { building: String },

	#[error("malformed building data: {0}")]
	Malformed(#[from] serde_json::Error),
}

/// Hover geometry that does not map to a finite point.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[error("wedge geometry (radius {radius}, angle {angle}, angle0 {angle0}) has no finite anchor")]
pub struct UnresolvableGeometryError {
	pub radius: f64,
	pub angle: f64,
	pub angle0: f64,
}
