use log::{debug, error, info, warn};

use super::classify::{RoleSets, classify};
use super::config::{StyleConfig, ViewConfig, ViewKind};
use super::error::{GraphError, Result};
use super::model::{GraphData, GraphSnapshot, LinkId};
use super::selection::{ElementGeometryProvider, Position, Selection};
use super::transform::{NodeProperty, node_properties, transform};

/// Everything the UI can ask the store to do.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphEvent {
	/// Replaces the dataset, e.g. from the start-up load.
	Loaded(GraphData),
	/// Text content of an uploaded file.
	Imported(String),
	/// Switches the active view.
	ViewSelected(ViewKind),
	/// rdf:type to highlight; `None` or empty clears it.
	CriterionSelected(Option<String>),
	/// Override color; must be one of the configured criterion colors.
	ColorSelected(Option<String>),
	/// A click on a node.
	NodeClicked {
		/// Clicked node.
		id: String,
		/// Pointer position.
		position: Position,
	},
	/// A click on a link.
	LinkClicked {
		/// Clicked link.
		id: LinkId,
		/// Pointer position.
		position: Position,
	},
	/// A click on empty canvas.
	OutsideClicked,
}

/// Explicit state container: raw data in, snapshot and selection out.
#[derive(Clone, Debug, Default)]
pub struct GraphStore {
	config: StyleConfig,
	data: GraphData,
	roles: RoleSets,
	view: ViewConfig,
	snapshot: GraphSnapshot,
	selection: Selection,
	last_error: Option<String>,
}

impl GraphStore {
	/// An empty store using `config` for every pass.
	pub fn new(config: StyleConfig) -> Self {
		Self {
			config,
			..Self::default()
		}
	}

	/// Styling configuration.
	pub fn config(&self) -> &StyleConfig {
		&self.config
	}

	/// Last successfully loaded dataset.
	pub fn data(&self) -> &GraphData {
		&self.data
	}

	/// Active view.
	pub fn view(&self) -> &ViewConfig {
		&self.view
	}

	/// What the canvas draws.
	pub fn snapshot(&self) -> &GraphSnapshot {
		&self.snapshot
	}

	/// Current focus.
	pub fn selection(&self) -> &Selection {
		&self.selection
	}

	/// Message of the last failed event, cleared by the next success.
	pub fn last_error(&self) -> Option<&str> {
		self.last_error.as_deref()
	}

	/// Applies `event`. On error the previous snapshot and selection are kept
	/// and the message is remembered for display.
	pub fn dispatch(&mut self, event: GraphEvent) -> Result<()> {
		let result = self.apply(event);
		match &result {
			Ok(()) => self.last_error = None,
			Err(err) => {
				error!("{err}");
				self.last_error = Some(err.to_string());
			}
		}
		result
	}

	fn apply(&mut self, event: GraphEvent) -> Result<()> {
		match event {
			GraphEvent::Loaded(data) => self.load(data),
			GraphEvent::Imported(text) => {
				let data = GraphData::from_json(&text)?;
				self.load(data)
			}
			GraphEvent::ViewSelected(kind) => {
				info!("switching to {} view", kind.name());
				self.reconfigure(ViewConfig {
					kind,
					..self.view.clone()
				})
			}
			GraphEvent::CriterionSelected(type_id) => {
				let mut view = self.view.clone();
				view.criterion.type_id = type_id.filter(|t| !t.is_empty());
				self.reconfigure(view)
			}
			GraphEvent::ColorSelected(color) => {
				let color = color.filter(|c| !c.is_empty());
				if let Some(code) = &color {
					if !self.config.is_criterion_color(code) {
						return Err(GraphError::UnknownColor(code.clone()));
					}
				}
				let mut view = self.view.clone();
				view.criterion.color = color;
				self.reconfigure(view)
			}
			GraphEvent::NodeClicked { id, position } => {
				self.selection.click_node(&id, position);
				Ok(())
			}
			GraphEvent::LinkClicked { id, position } => {
				self.selection.click_link(&id, position);
				Ok(())
			}
			GraphEvent::OutsideClicked => {
				self.selection.click_outside();
				Ok(())
			}
		}
	}

	/// Re-anchors the popup of the focused entity.
	pub fn reposition(&mut self, geometry: &dyn ElementGeometryProvider) {
		self.selection.reposition(geometry);
	}

	/// Literal-valued properties of a node, for its popup.
	pub fn node_properties(&self, id: &str) -> Vec<NodeProperty> {
		node_properties(&self.data, &self.roles, id)
	}

	fn load(&mut self, data: GraphData) -> Result<()> {
		let roles = classify(&data)?;
		let snapshot = transform(&data, &self.view, &self.config)?;
		info!(
			"loaded graph with {} nodes and {} links",
			data.nodes.len(),
			data.links.len()
		);
		self.data = data;
		self.roles = roles;
		self.commit(snapshot);
		Ok(())
	}

	fn reconfigure(&mut self, view: ViewConfig) -> Result<()> {
		let snapshot = transform(&self.data, &view, &self.config)?;
		if view.kind == ViewKind::TypeColored && view.criterion.type_id.is_none() {
			warn!("type-colored view without a criterion, every node is drawn gray");
		}
		self.view = view;
		self.commit(snapshot);
		Ok(())
	}

	fn commit(&mut self, snapshot: GraphSnapshot) {
		self.selection.data_changed(&snapshot);
		debug!(
			"snapshot now has {} nodes and {} links",
			snapshot.nodes.len(),
			snapshot.links.len()
		);
		self.snapshot = snapshot;
	}
}
