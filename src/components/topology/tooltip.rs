//! Hover tooltip shared by every marker of a diagram.

use super::scene::SceneMarker;

/// Pixel offset of the tooltip from the pointer.
pub const POINTER_OFFSET: f64 = 12.0;

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
	pub id: String,
	pub category: String,
	pub x: f64,
	pub y: f64,
}

/// The single hover tooltip of a diagram.
///
/// `left`/`top` are pixels relative to the diagram container.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TooltipState {
	#[default]
	Hidden,
	Visible {
		content: TooltipContent,
		left: f64,
		top: f64,
	},
}

impl TooltipState {
	/// Shows `marker`'s details next to the pointer at (`px`, `py`).
	pub fn show(&mut self, marker: &SceneMarker, px: f64, py: f64) {
		*self = TooltipState::Visible {
			content: TooltipContent {
				id: marker.id.clone(),
				category: marker.category.clone(),
				x: marker.x,
				y: marker.y,
			},
			left: px + POINTER_OFFSET,
			top: py + POINTER_OFFSET,
		};
	}

	pub fn hide(&mut self) {
		*self = TooltipState::Hidden;
	}

	pub fn is_visible(&self) -> bool {
		matches!(self, TooltipState::Visible { .. })
	}

	pub fn content(&self) -> Option<&TooltipContent> {
		match self {
			TooltipState::Visible { content, .. } => Some(content),
			TooltipState::Hidden => None,
		}
	}

	/// Inline style for the tooltip element.
	pub fn style(&self) -> String {
		match self {
			TooltipState::Visible { left, top, .. } => format!(
				"position: absolute; left: {left}px; top: {top}px; display: block; \
				 pointer-events: none; background: rgba(20, 20, 30, 0.9); color: white; \
				 padding: 4px 8px; border-radius: 4px; font-size: 12px; white-space: pre;"
			),
			TooltipState::Hidden => "position: absolute; display: none;".into(),
		}
	}
}

impl TooltipContent {
	pub fn lines(&self) -> [String; 3] {
		[
			self.id.clone(),
			format!("Type: {}", self.category),
			format!("Pos: ({}, {})", self.x, self.y),
		]
	}
}
