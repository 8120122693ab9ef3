//! Input data model for the portal map.

use serde::Deserialize;

/// Static layout data consumed by the map builder.
///
/// `grid` holds small integer codes per cell: 0 = no portal, 1 = portal,
/// 2 = empty (decorative) portal. `names` is consumed in row-major scan
/// order over the nonzero grid cells. `links` name pairs of portals to
/// connect with a curve.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MapData {
	pub grid: Vec<Vec<u8>>,
	pub names: Vec<String>,
	pub links: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_deserialize_map_data() {
		let json = r#"{
			"grid": [[1, 0], [0, 2]],
			"names": ["A", "B"],
			"links": [["A", "B"]]
		}"#;

		let data: MapData = serde_json::from_str(json).unwrap();
		assert_eq!(data.grid, vec![vec![1, 0], vec![0, 2]]);
		assert_eq!(data.names, vec!["A", "B"]);
		assert_eq!(data.links, vec![("A".to_string(), "B".to_string())]);
	}

	#[test]
	fn test_deserialize_rejects_malformed_links() {
		// A three-element link pair is not a (String, String)
		let json = r#"{ "grid": [], "names": [], "links": [["A", "B", "C"]] }"#;
		assert!(serde_json::from_str::<MapData>(json).is_err());
	}
}
