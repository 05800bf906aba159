//! Single-entity focus for the info popup.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use super::error::Result;
use super::model::{GraphSnapshot, LinkId};

/// Horizontal gap between an entity's box and its popup.
pub const POPUP_OFFSET: f64 = 10.0;

/// A point in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
	/// Pixels from the left edge.
	pub x: f64,
	/// Pixels from the top edge.
	pub y: f64,
}

impl Position {
	/// A position at `(x, y)`.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Screen-space box around a drawn entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
	/// Left edge.
	pub left: f64,
	/// Top edge.
	pub top: f64,
	/// Horizontal extent.
	pub width: f64,
	/// Vertical extent.
	pub height: f64,
}

impl BoundingBox {
	/// Right edge.
	pub fn right(&self) -> f64 {
		self.left + self.width
	}

	/// Where a popup attaches: just right of the box, vertically centered.
	pub fn popup_anchor(&self) -> Position {
		Position::new(self.right() + POPUP_OFFSET, self.top + self.height / 2.0)
	}
}

/// A node or a link, as addressed by the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntityId {
	/// Node by id.
	Node(String),
	/// Link by endpoints and label.
	Link(LinkId),
}

impl fmt::Display for EntityId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			EntityId::Node(id) => write!(f, "node {id}"),
			EntityId::Link(id) => write!(f, "link {id}"),
		}
	}
}

/// On-screen geometry of rendered entities.
pub trait ElementGeometryProvider {
	/// Fails with [`GraphError::NoGeometry`](super::GraphError::NoGeometry) when
	/// `entity` is not currently drawn.
	fn bounding_box(&self, entity: &EntityId) -> Result<BoundingBox>;
}

/// What kind of entity, if any, has the focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusKind {
	/// Nothing focused.
	None,
	/// A node is focused.
	Node,
	/// A link is focused.
	Link,
}

/// Focus state behind the info popup. At most one entity is focused.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Selection {
	/// No popup.
	#[default]
	Idle,
	/// Popup for a node.
	NodeFocused {
		/// Focused node id.
		id: String,
		/// Popup anchor.
		position: Position,
	},
	/// Popup for a link.
	LinkFocused {
		/// Focused link.
		id: LinkId,
		/// Popup anchor.
		position: Position,
	},
}

impl Selection {
	/// Kind of the focused entity.
	pub fn focus_kind(&self) -> FocusKind {
		match self {
			Selection::Idle => FocusKind::None,
			Selection::NodeFocused { .. } => FocusKind::Node,
			Selection::LinkFocused { .. } => FocusKind::Link,
		}
	}

	/// The focused entity.
	pub fn focused(&self) -> Option<EntityId> {
		match self {
			Selection::Idle => None,
			Selection::NodeFocused { id, .. } => Some(EntityId::Node(id.clone())),
			Selection::LinkFocused { id, .. } => Some(EntityId::Link(id.clone())),
		}
	}

	/// Popup anchor while something is focused.
	pub fn position(&self) -> Option<Position> {
		match self {
			Selection::Idle => None,
			Selection::NodeFocused { position, .. } | Selection::LinkFocused { position, .. } => {
				Some(*position)
			}
		}
	}

	/// Focuses `id`, or clears the focus if `id` is already the focused node.
	pub fn click_node(&mut self, id: &str, position: Position) {
		*self = match &*self {
			Selection::NodeFocused { id: current, .. } if current == id => Selection::Idle,
			_ => Selection::NodeFocused {
				id: id.to_string(),
				position,
			},
		};
		debug!("selection after node click: {:?}", self.focused());
	}

	/// Focuses `id`, or clears the focus if `id` is already the focused link.
	pub fn click_link(&mut self, id: &LinkId, position: Position) {
		*self = match &*self {
			Selection::LinkFocused { id: current, .. } if current == id => Selection::Idle,
			_ => Selection::LinkFocused {
				id: id.clone(),
				position,
			},
		};
		debug!("selection after link click: {:?}", self.focused());
	}

	/// Any click that hits neither a node nor a link.
	pub fn click_outside(&mut self) {
		*self = Selection::Idle;
	}

	/// Drops the focus if the focused entity is gone from `snapshot`.
	pub fn data_changed(&mut self, snapshot: &GraphSnapshot) {
		let present = match &*self {
			Selection::Idle => true,
			Selection::NodeFocused { id, .. } => snapshot.contains_node(id),
			Selection::LinkFocused { id, .. } => snapshot.contains_link(id),
		};
		if !present {
			debug!("focused entity vanished, clearing selection");
			*self = Selection::Idle;
		}
	}

	/// Moves the popup next to the focused entity. Focus itself never changes;
	/// a failed lookup keeps the previous position.
	pub fn reposition(&mut self, geometry: &dyn ElementGeometryProvider) {
		let Some(entity) = self.focused() else {
			return;
		};
		match geometry.bounding_box(&entity) {
			Ok(bbox) => match self {
				Selection::NodeFocused { position, .. } | Selection::LinkFocused { position, .. } => {
					*position = bbox.popup_anchor();
				}
				Selection::Idle => {}
			},
			Err(err) => debug!("keeping popup position: {err}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;
	use crate::graph::error::GraphError;
	use crate::graph::model::{Role, Shape, StyledLink, StyledNode};

	struct FixedGeometry(HashMap<EntityId, BoundingBox>);

	impl ElementGeometryProvider for FixedGeometry {
		fn bounding_box(&self, entity: &EntityId) -> Result<BoundingBox> {
			self.0
				.get(entity)
				.copied()
				.ok_or_else(|| GraphError::NoGeometry(entity.to_string()))
		}
	}

	fn link() -> LinkId {
		LinkId {
			source: "a".into(),
			target: "b".into(),
			label: "p".into(),
		}
	}

	fn snapshot(ids: &[&str]) -> GraphSnapshot {
		GraphSnapshot {
			nodes: ids
				.iter()
				.map(|id| StyledNode {
					id: id.to_string(),
					label: id.to_string(),
					role: Role::Source,
					color: None,
					shape: Shape::Circle,
					size: None,
				})
				.collect(),
			links: vec![StyledLink {
				source: "a".into(),
				label: "p".into(),
				target: "b".into(),
			}],
			criteria: vec![],
		}
	}

	#[test]
	fn clicking_a_node_twice_toggles_off() {
		let mut selection = Selection::default();
		selection.click_node("a", Position::new(1.0, 2.0));
		assert_eq!(selection.focus_kind(), FocusKind::Node);
		assert_eq!(selection.position(), Some(Position::new(1.0, 2.0)));
		selection.click_node("a", Position::new(5.0, 5.0));
		assert_eq!(selection, Selection::Idle);
		assert_eq!(selection.position(), None);
	}

	#[test]
	fn clicking_another_node_switches_focus() {
		let mut selection = Selection::default();
		selection.click_node("a", Position::default());
		selection.click_node("b", Position::new(3.0, 4.0));
		assert_eq!(selection.focused(), Some(EntityId::Node("b".into())));
	}

	#[test]
	fn node_click_switches_away_from_link() {
		let mut selection = Selection::default();
		selection.click_link(&link(), Position::default());
		assert_eq!(selection.focus_kind(), FocusKind::Link);
		selection.click_node("a", Position::default());
		assert_eq!(selection.focus_kind(), FocusKind::Node);
		selection.click_link(&link(), Position::default());
		selection.click_link(&link(), Position::default());
		assert_eq!(selection, Selection::Idle);
	}

	#[test]
	fn outside_click_always_clears() {
		let mut selection = Selection::default();
		selection.click_outside();
		assert_eq!(selection, Selection::Idle);
		selection.click_link(&link(), Position::default());
		selection.click_outside();
		assert_eq!(selection, Selection::Idle);
	}

	#[test]
	fn data_change_clears_vanished_focus_only() {
		let mut selection = Selection::default();
		selection.click_node("a", Position::default());
		selection.data_changed(&snapshot(&["a", "b"]));
		assert_eq!(selection.focus_kind(), FocusKind::Node);
		selection.data_changed(&snapshot(&["b"]));
		assert_eq!(selection, Selection::Idle);

		selection.click_link(&link(), Position::default());
		selection.data_changed(&GraphSnapshot::default());
		assert_eq!(selection, Selection::Idle);
	}

	#[test]
	fn reposition_anchors_right_of_box() {
		let geometry = FixedGeometry(HashMap::from([(
			EntityId::Node("a".into()),
			BoundingBox {
				left: 100.0,
				top: 50.0,
				width: 20.0,
				height: 10.0,
			},
		)]));
		let mut selection = Selection::default();
		selection.click_node("a", Position::default());
		selection.reposition(&geometry);
		assert_eq!(selection.position(), Some(Position::new(130.0, 55.0)));

		selection.click_link(&link(), Position::new(7.0, 7.0));
		selection.reposition(&geometry);
		assert_eq!(selection.position(), Some(Position::new(7.0, 7.0)));
	}
}
