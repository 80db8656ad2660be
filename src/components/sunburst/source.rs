use super::error::InvalidInputError;
use super::types::Building;

/// Sample payload in the shape the buildings endpoint returns with rooms populated.
pub const SAMPLE_BUILDINGS: &str = include_str!("../../../assets/buildings.json");

/// Parse a building list payload. Unknown fields are ignored.
pub fn parse_buildings(json: &str) -> Result<Vec<Building>, InvalidInputError> {
	Ok(serde_json::from_str(json)?)
}
