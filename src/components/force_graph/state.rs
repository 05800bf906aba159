use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::graph::{
	BoundingBox, ElementGeometryProvider, EntityId, GraphError, GraphSnapshot, LinkId, Result,
	Shape,
};

pub const NODE_RADIUS: f64 = 5.0;
pub const HIT_RADIUS: f64 = 12.0;
/// Screen-space distance within which a press on a link counts as a hit.
pub const LINK_HIT_DISTANCE: f64 = 5.0;
/// Pointer travel below which a press/release pair is a click, not a drag.
pub const CLICK_TOLERANCE: f64 = 4.0;

#[derive(Clone, Debug)]
pub struct NodeInfo {
	pub id: String,
	pub label: String,
	pub color: String,
	pub shape: Shape,
	pub radius: f64,
}

#[derive(Clone, Debug)]
pub struct EdgeInfo {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	pub id: LinkId,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

/// What a click landed on.
#[derive(Clone, Debug, PartialEq)]
pub enum Hit {
	Node(String),
	Link(LinkId),
	Background,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub flow_time: f64,
	/// Entity drawn with the selection ring.
	pub selected: Option<EntityId>,
	/// Pointer position of the last mousedown, for click detection.
	pub press: Option<(f64, f64)>,
	id_to_idx: HashMap<String, DefaultNodeIdx>,
	edges: Vec<EdgeInfo>,
	default_color: String,
}

fn simulation() -> ForceGraph<NodeInfo, ()> {
	ForceGraph::new(SimulationParameters {
		force_charge: 150.0,
		force_spring: 0.05,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	})
}

impl ForceGraphState {
	pub fn new(snapshot: &GraphSnapshot, default_color: &str, width: f64, height: f64) -> Self {
		let mut state = Self {
			graph: simulation(),
			id_to_idx: HashMap::new(),
			edges: Vec::new(),
			default_color: default_color.to_string(),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
			selected: None,
			press: None,
		};
		state.populate(snapshot, &HashMap::new());
		state
	}

	/// Replaces the drawn graph, keeping the position of every node that survives.
	pub fn rebuild(&mut self, snapshot: &GraphSnapshot) {
		let mut positions = HashMap::new();
		self.graph.visit_nodes(|node| {
			positions.insert(node.data.user_data.id.clone(), (node.x(), node.y()));
		});
		self.graph = simulation();
		self.id_to_idx.clear();
		self.edges.clear();
		self.drag = DragState::default();
		self.hover = HoverState::default();
		self.populate(snapshot, &positions);
	}

	fn populate(&mut self, snapshot: &GraphSnapshot, positions: &HashMap<String, (f32, f32)>) {
		let count = snapshot.nodes.len().max(1) as f64;
		for (i, node) in snapshot.nodes.iter().enumerate() {
			let (x, y) = positions.get(&node.id).copied().unwrap_or_else(|| {
				// Fresh nodes start on a ring around the origin of graph space.
				let angle = (i as f64) * 2.0 * PI / count;
				((100.0 * angle.cos()) as f32, (100.0 * angle.sin()) as f32)
			});
			let idx = self.graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					label: node.label.clone(),
					color: node.color.clone().unwrap_or_else(|| self.default_color.clone()),
					shape: node.shape,
					radius: node.size.map_or(NODE_RADIUS, |s| s.clamp(2.0, 30.0)),
				},
			});
			self.id_to_idx.insert(node.id.clone(), idx);
		}

		for link in &snapshot.links {
			if let (Some(&source), Some(&target)) =
				(self.id_to_idx.get(&link.source), self.id_to_idx.get(&link.target))
			{
				self.graph.add_edge(source, target, EdgeData::default());
				self.edges.push(EdgeInfo {
					source,
					target,
					id: link.id(),
				});
			}
		}
	}

	pub fn edges(&self) -> &[EdgeInfo] {
		&self.edges
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn graph_to_screen(&self, gx: f64, gy: f64) -> (f64, f64) {
		(
			gx * self.transform.k + self.transform.x,
			gy * self.transform.k + self.transform.y,
		)
	}

	/// Graph-space position and radius of every node.
	pub fn layout(&self) -> HashMap<DefaultNodeIdx, (f64, f64, f64)> {
		let mut layout = HashMap::new();
		self.graph.visit_nodes(|node| {
			layout.insert(
				node.index(),
				(node.x() as f64, node.y() as f64, node.data.user_data.radius),
			);
		});
		layout
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// HIT_RADIUS is in world-space, scales with zoom like nodes
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS.max(node.data.user_data.radius) {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn link_at_position(&self, sx: f64, sy: f64) -> Option<&LinkId> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let tolerance = LINK_HIT_DISTANCE / self.transform.k;
		let layout = self.layout();
		self.edges
			.iter()
			.filter_map(|edge| {
				let (x1, y1, _) = *layout.get(&edge.source)?;
				let (x2, y2, _) = *layout.get(&edge.target)?;
				Some((segment_distance(gx, gy, x1, y1, x2, y2), &edge.id))
			})
			.filter(|(distance, _)| *distance < tolerance)
			.min_by(|a, b| a.0.total_cmp(&b.0))
			.map(|(_, id)| id)
	}

	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut id = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				id = Some(node.data.user_data.id.clone());
			}
		});
		id
	}

	/// Nodes win over links, links over the background.
	pub fn hit_test(&self, sx: f64, sy: f64) -> Hit {
		if let Some(id) = self.node_at_position(sx, sy).and_then(|idx| self.node_id(idx)) {
			return Hit::Node(id);
		}
		match self.link_at_position(sx, sy) {
			Some(id) => Hit::Link(id.clone()),
			None => Hit::Background,
		}
	}

	pub fn is_selected_node(&self, id: &str) -> bool {
		matches!(&self.selected, Some(EntityId::Node(selected)) if selected == id)
	}

	pub fn is_selected_link(&self, id: &LinkId) -> bool {
		matches!(&self.selected, Some(EntityId::Link(selected)) if selected == id)
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Save previous state for fade-out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for edge in &self.edges {
				if edge.source == idx {
					self.hover.neighbors.insert(edge.target);
				} else if edge.target == idx {
					self.hover.neighbors.insert(edge.source);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

impl ElementGeometryProvider for ForceGraphState {
	fn bounding_box(&self, entity: &EntityId) -> Result<BoundingBox> {
		let missing = || GraphError::NoGeometry(entity.to_string());
		let layout = self.layout();
		match entity {
			EntityId::Node(id) => {
				let idx = self.id_to_idx.get(id).ok_or_else(missing)?;
				let &(gx, gy, radius) = layout.get(idx).ok_or_else(missing)?;
				let (x, y) = self.graph_to_screen(gx, gy);
				let r = radius * self.transform.k;
				Ok(BoundingBox {
					left: x - r,
					top: y - r,
					width: 2.0 * r,
					height: 2.0 * r,
				})
			}
			EntityId::Link(id) => {
				let edge = self.edges.iter().find(|e| &e.id == id).ok_or_else(missing)?;
				let &(x1, y1, _) = layout.get(&edge.source).ok_or_else(missing)?;
				let &(x2, y2, _) = layout.get(&edge.target).ok_or_else(missing)?;
				let (sx1, sy1) = self.graph_to_screen(x1, y1);
				let (sx2, sy2) = self.graph_to_screen(x2, y2);
				Ok(BoundingBox {
					left: sx1.min(sx2),
					top: sy1.min(sy2),
					width: (sx1 - sx2).abs(),
					height: (sy1 - sy2).abs(),
				})
			}
		}
	}
}

/// Distance from `(px, py)` to the segment `(x1, y1)-(x2, y2)`.
fn segment_distance(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
	let (dx, dy) = (x2 - x1, y2 - y1);
	let len2 = dx * dx + dy * dy;
	let t = if len2 < f64::EPSILON {
		0.0
	} else {
		(((px - x1) * dx + (py - y1) * dy) / len2).clamp(0.0, 1.0)
	};
	let (cx, cy) = (x1 + t * dx, y1 + t * dy);
	((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{GraphData, GraphLink, GraphNode, StyleConfig, ViewConfig, transform};

	fn state() -> ForceGraphState {
		let data = GraphData {
			nodes: vec![GraphNode::new("a", "ex:a"), GraphNode::new("b", "\"b\"")],
			links: vec![GraphLink::new("a", "ex:p", "b")],
		};
		let snapshot = transform(&data, &ViewConfig::default(), &StyleConfig::default()).unwrap();
		ForceGraphState::new(&snapshot, "lightgreen", 800.0, 600.0)
	}

	#[test]
	fn segment_distance_clamps_to_endpoints() {
		assert_eq!(segment_distance(5.0, 3.0, 0.0, 0.0, 10.0, 0.0), 3.0);
		assert_eq!(segment_distance(-4.0, 3.0, 0.0, 0.0, 10.0, 0.0), 5.0);
	}

	#[test]
	fn hit_test_finds_nodes_links_and_background() {
		let s = state();
		// a starts at (100, 0), b at (-100, 0) in graph space; origin is the canvas center.
		assert_eq!(s.hit_test(500.0, 300.0), Hit::Node("a".into()));
		assert_eq!(s.hit_test(300.0, 300.0), Hit::Node("b".into()));
		assert!(matches!(s.hit_test(400.0, 300.0), Hit::Link(_)));
		assert_eq!(s.hit_test(400.0, 100.0), Hit::Background);
	}

	#[test]
	fn geometry_follows_view_transform() {
		let s = state();
		let bbox = s.bounding_box(&EntityId::Node("a".into())).unwrap();
		assert_eq!(bbox.left, 500.0 - NODE_RADIUS);
		assert_eq!(bbox.width, 2.0 * NODE_RADIUS);
		assert!(s.bounding_box(&EntityId::Node("zzz".into())).is_err());
	}

	#[test]
	fn rebuild_keeps_surviving_positions() {
		let mut s = state();
		let before = s.bounding_box(&EntityId::Node("a".into())).unwrap();
		let snapshot = GraphSnapshot {
			nodes: vec![crate::graph::StyledNode {
				id: "a".into(),
				label: "ex:a".into(),
				role: crate::graph::Role::Isolated,
				color: None,
				shape: Shape::Circle,
				size: None,
			}],
			links: vec![],
			criteria: vec![],
		};
		s.rebuild(&snapshot);
		assert_eq!(s.bounding_box(&EntityId::Node("a".into())).unwrap(), before);
		assert!(s.edges().is_empty());
	}
}
