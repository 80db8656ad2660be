use super::error::InvalidInputError;
use super::theme::{
	BACKGROUND_COLOR, BRAND_COLOR, FREE, FREE_COLOR, LEGEND, OCCUPIED, OCCUPIED_COLOR, RESERVED,
	ROOMS_CAPTION, ROOT_TITLE,
};
use super::types::{Building, ChartNode, LabelAnnotation, LabelStyle, LegendItem};

/// Build the chart model: root -> one node per building -> status leaves.
///
/// Building order is preserved. Fails on the first building without a room list.
pub fn build(buildings: &[Building]) -> Result<ChartNode, InvalidInputError> {
	let children = buildings
		.iter()
		.map(building_node)
		.collect::<Result<Vec<_>, _>>()?;

	Ok(ChartNode::Internal {
		title: ROOT_TITLE.into(),
		color: Some(BACKGROUND_COLOR.into()),
		children,
	})
}

fn building_node(building: &Building) -> Result<ChartNode, InvalidInputError> {
	let rooms = building
		.rooms
		.as_deref()
		.ok_or_else(|| InvalidInputError::MissingRooms {
			building: building.name.clone(),
		})?;
	let used = rooms.iter().filter(|r| r.occupied).count() as u64;
	let unused = rooms.len() as u64 - used;

	Ok(ChartNode::Internal {
		title: format!("rooms in {}", building.name),
		color: Some(BRAND_COLOR.into()),
		children: vec![
			ChartNode::Leaf {
				title: OCCUPIED.into(),
				color: Some(OCCUPIED_COLOR.into()),
				size: used,
			},
			// No reservation data upstream yet
			ChartNode::Leaf {
				title: RESERVED.into(),
				color: None,
				size: 0,
			},
			ChartNode::Leaf {
				title: FREE.into(),
				color: Some(FREE_COLOR.into()),
				size: unused,
			},
		],
	})
}

/// Labels drawn in the center of the chart.
pub fn center_labels(building_count: usize) -> Vec<LabelAnnotation> {
	vec![
		LabelAnnotation {
			x: 0.0,
			y: -5.0,
			label: building_count.to_string(),
			style: LabelStyle::Primary,
		},
		LabelAnnotation {
			x: 0.0,
			y: -20.0,
			label: ROOMS_CAPTION.into(),
			style: LabelStyle::Secondary,
		},
	]
}

pub fn legend() -> &'static [LegendItem] {
	LEGEND
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::sunburst::types::Room;

	fn building(name: &str, occupied: &[bool]) -> Building {
		Building {
			name: name.into(),
			location: "Factoria".into(),
			rooms: Some(occupied.iter().map(|&occupied| Room { occupied }).collect()),
		}
	}

	fn sizes(node: &ChartNode) -> Vec<(String, u64)> {
		node.children()
			.iter()
			.map(|c| (c.title().to_string(), c.aggregated_size()))
			.collect()
	}

	#[test]
	fn hq_scenario() {
		let root = build(&[building("HQ", &[true, true, false])]).unwrap();
		assert_eq!(root.title(), "Buildings");
		assert_eq!(root.color(), Some(BACKGROUND_COLOR));

		let hq = &root.children()[0];
		assert_eq!(hq.title(), "rooms in HQ");
		assert_eq!(hq.color(), Some(BRAND_COLOR));
		assert_eq!(
			sizes(hq),
			vec![
				("Occupied".to_string(), 2),
				("Reserved".to_string(), 0),
				("Free".to_string(), 1)
			]
		);
		assert!(hq.children().iter().all(ChartNode::is_leaf));
	}

	#[test]
	fn one_node_per_building_in_input_order() {
		let input = vec![
			building("A", &[]),
			building("B", &[false, false, false, true]),
			building("C", &[true; 7]),
		];
		let root = build(&input).unwrap();
		assert_eq!(root.children().len(), input.len());

		for (node, b) in root.children().iter().zip(&input) {
			let rooms = b.rooms.as_ref().unwrap();
			assert_eq!(node.title(), format!("rooms in {}", b.name));
			let s = sizes(node);
			assert_eq!(s[0].1 + s[2].1, rooms.len() as u64);
			assert_eq!(s[1].1, 0);
			assert_eq!(node.aggregated_size(), rooms.len() as u64);
		}
	}

	#[test]
	fn empty_input_gives_childless_root() {
		let root = build(&[]).unwrap();
		assert!(root.children().is_empty());
		assert!(!root.is_leaf());
	}

	#[test]
	fn build_is_deterministic() {
		let input = vec![building("A", &[true, false]), building("B", &[false])];
		assert_eq!(build(&input).unwrap(), build(&input).unwrap());
	}

	#[test]
	fn missing_rooms_is_an_error() {
		let mut broken = building("Annex", &[]);
		broken.rooms = None;
		let err = build(&[building("HQ", &[true]), broken]).unwrap_err();
		assert!(matches!(
			err,
			InvalidInputError::MissingRooms { ref building } if building == "Annex"
		));
	}

	#[test]
	fn center_labels_count_buildings() {
		let labels = center_labels(4);
		assert_eq!(labels[0].label, "4");
		assert_eq!(labels[0].style, LabelStyle::Primary);
		assert_eq!((labels[0].x, labels[0].y), (0.0, -5.0));
		assert_eq!(labels[1].label, "Rooms Available");
		assert_eq!(labels[1].style, LabelStyle::Secondary);
	}
}
