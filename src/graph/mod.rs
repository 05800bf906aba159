//! Classification, styling and selection for RDF-like graphs.
//!
//! Raw data flows through [`transform`] (classify, then style, then filter)
//! into a [`GraphSnapshot`] for the canvas; clicks flow through
//! [`Selection`]. [`GraphStore`] ties both together behind [`GraphEvent`]s.

mod classify;
mod config;
mod error;
mod filter;
mod model;
mod sample;
mod selection;
mod store;
mod style;
mod transform;

pub use classify::{RoleSets, classify};
pub use config::{NamedColor, StyleConfig, TypeCriterion, ViewConfig, ViewKind};
pub use error::{GraphError, Result};
pub use filter::{filter_links, filter_nodes};
pub use model::{
	GraphData, GraphLink, GraphNode, GraphSnapshot, LinkId, RDF_TYPE, Role, Shape, StyledLink,
	StyledNode,
};
pub use sample::sample_graph;
pub use selection::{
	BoundingBox, ElementGeometryProvider, EntityId, FocusKind, POPUP_OFFSET, Position, Selection,
};
pub use store::{GraphEvent, GraphStore};
pub use style::{GroupKey, StyleAssigner, grouping_key, shape_for};
pub use transform::{NodeProperty, node_properties, rdf_types, transform};
