use std::collections::BTreeMap;

use serde::Deserialize;

/// A labeled point of the grid topology, positioned in logical canvas units.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GridNode {
	/// Horizontal position in logical units.
	pub x: f64,
	/// Vertical position in logical units.
	pub y: f64,
	/// Generation or load category, e.g. `Solar` or `Residential`.
	#[serde(rename = "type", default)]
	pub kind: String,
}

/// Nodes keyed by id. Ordered so scenes are built deterministically.
pub type NodeMap = BTreeMap<String, GridNode>;

/// A connection between two nodes, as sent by the solver backend.
///
/// The backend emits either bare `[src, dst]` pairs or flow records that carry
/// the dispatched amount; both only need their endpoints to be drawn.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EdgeRecord {
	/// `["src", "dst"]`
	Pair(String, String),
	/// `{"src": .., "dst": .., "flow": ..}`
	Flow {
		/// Source node id.
		src: String,
		/// Destination node id.
		dst: String,
		/// Dispatched power along the edge, if the solver reported one.
		#[serde(default)]
		flow: Option<f64>,
	},
}

impl EdgeRecord {
	/// Source node id.
	pub fn src(&self) -> &str {
		match self {
			Self::Pair(src, _) | Self::Flow { src, .. } => src,
		}
	}

	/// Destination node id.
	pub fn dst(&self) -> &str {
		match self {
			Self::Pair(_, dst) | Self::Flow { dst, .. } => dst,
		}
	}

	/// Flow amount, only present on flow records.
	pub fn flow(&self) -> Option<f64> {
		match self {
			Self::Pair(..) => None,
			Self::Flow { flow, .. } => *flow,
		}
	}
}

/// Immutable node/edge snapshot handed to the diagram on each solver run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TopologySnapshot {
	/// `None` when the backend response carried no node data.
	pub nodes: Option<NodeMap>,
	/// Edges in backend order.
	pub edges: Vec<EdgeRecord>,
}
