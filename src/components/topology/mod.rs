//! Grid topology diagram: scene construction, pan/zoom viewport and hover tooltip.

mod component;
mod palette;
mod scene;
mod tooltip;
mod types;
mod viewport;

pub use component::TopologyDiagram;
pub use types::{EdgeRecord, GridNode, NodeMap, TopologySnapshot};
