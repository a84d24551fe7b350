//! Fixed category to marker color table.

/// Marker color used for categories outside the table.
pub const DEFAULT_COLOR: &str = "black";

/// Maps a node category to its marker fill. Matching is case-sensitive.
pub fn category_color(category: &str) -> &'static str {
	match category {
		"Solar" | "Gen" => "yellow",
		"Wind" => "blue",
		"Nuclear" => "purple",
		"Thermal" => "orange",
		"Bus" | "Storage" => "green",
		"Railway" => "teal",
		"Factory" => "red",
		"Residential" => "gray",
		_ => DEFAULT_COLOR,
	}
}
