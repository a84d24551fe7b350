//! Pure scene construction from a node/edge snapshot.

use log::{debug, warn};

use super::palette::category_color;
use super::types::{EdgeRecord, NodeMap};

pub const MARKER_RADIUS: f64 = 10.0;
/// Label anchor relative to the marker center, clear of the marker's radius.
pub const LABEL_OFFSET: (f64, f64) = (14.0, 4.0);

const EDGE_WIDTH: f64 = 3.0;
const FLOW_WIDTH_UNIT: f64 = 2000.0;
const FLOW_WIDTH_RANGE: (f64, f64) = (1.5, 8.0);

#[derive(Clone, Debug, PartialEq)]
pub struct SceneLine {
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
	pub flow: Option<f64>,
}

impl SceneLine {
	/// Stroke width; heavier for larger dispatched flows.
	pub fn stroke_width(&self) -> f64 {
		match self.flow {
			Some(flow) if flow.is_finite() => {
				(flow.abs() / FLOW_WIDTH_UNIT).clamp(FLOW_WIDTH_RANGE.0, FLOW_WIDTH_RANGE.1)
			}
			_ => EDGE_WIDTH,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneMarker {
	pub id: String,
	pub category: String,
	pub x: f64,
	pub y: f64,
	pub color: &'static str,
}

impl SceneMarker {
	pub fn label_pos(&self) -> (f64, f64) {
		(self.x + LABEL_OFFSET.0, self.y + LABEL_OFFSET.1)
	}
}

/// Everything one render draws: lines under markers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	pub lines: Vec<SceneLine>,
	pub markers: Vec<SceneMarker>,
	/// Edges dropped because an endpoint was not in the node set.
	pub skipped_edges: usize,
}

impl Scene {
	/// Builds the scene for a node/edge snapshot.
	///
	/// Returns `None` when there is no node data, so the caller keeps whatever
	/// it was showing. Edges with an unknown endpoint are dropped one by one.
	pub fn build(nodes: Option<&NodeMap>, edges: &[EdgeRecord]) -> Option<Self> {
		let nodes = nodes?;
		let mut scene = Scene::default();

		for edge in edges {
			let (Some(s), Some(d)) = (nodes.get(edge.src()), nodes.get(edge.dst())) else {
				warn!(
					"skipping edge {} -> {}: unknown endpoint",
					edge.src(),
					edge.dst()
				);
				scene.skipped_edges += 1;
				continue;
			};
			scene.lines.push(SceneLine {
				x1: s.x,
				y1: s.y,
				x2: d.x,
				y2: d.y,
				flow: edge.flow(),
			});
		}

		scene.markers = nodes
			.iter()
			.map(|(id, node)| SceneMarker {
				id: id.clone(),
				category: node.kind.clone(),
				x: node.x,
				y: node.y,
				color: category_color(&node.kind),
			})
			.collect();

		debug!(
			"built scene: {} markers, {} lines, {} skipped",
			scene.marker_count(),
			scene.line_count(),
			scene.skipped_edges
		);
		Some(scene)
	}

	pub fn line_count(&self) -> usize {
		self.lines.len()
	}

	pub fn marker_count(&self) -> usize {
		self.markers.len()
	}
}
