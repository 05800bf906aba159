use std::collections::HashMap;

use log::debug;

use super::classify::{RoleSets, classify};
use super::config::{StyleConfig, TypeCriterion, ViewConfig, ViewKind};
use super::error::Result;
use super::filter::{filter_links, filter_nodes};
use super::model::{GraphData, GraphSnapshot, StyledNode};
use super::style::StyleAssigner;

/// Classifies, styles and filters `data` into a snapshot for the active view.
///
/// Styling always covers the full node list so color bindings do not depend
/// on the view; the view only decides which nodes and links are emitted.
pub fn transform(data: &GraphData, view: &ViewConfig, config: &StyleConfig) -> Result<GraphSnapshot> {
	let roles = classify(data)?;
	let rdf_types = rdf_types(data);
	let criteria = data.type_criteria();

	let mut styles = StyleAssigner::new(config);
	let styled: Vec<StyledNode> = data
		.nodes
		.iter()
		.map(|node| {
			let role = roles.role_of(&node.id);
			let (color, shape) =
				styles.assign(node, role, rdf_types.get(node.id.as_str()).copied());
			StyledNode {
				id: node.id.clone(),
				label: node.label.clone(),
				role,
				color: color.or_else(|| node.color.clone()),
				shape,
				size: node.size,
			}
		})
		.collect();

	let links = filter_links(&styled, &data.links, view.kind);
	let mut nodes = filter_nodes(styled, view.kind);
	if view.kind == ViewKind::TypeColored {
		apply_criterion(&mut nodes, &rdf_types, &view.criterion, &criteria, config);
	}

	debug!(
		"transformed {} nodes / {} links into {} nodes / {} links ({})",
		data.nodes.len(),
		data.links.len(),
		nodes.len(),
		links.len(),
		view.kind.name()
	);
	Ok(GraphSnapshot {
		nodes,
		links,
		criteria,
	})
}

/// First rdf:type target of every typed node, in link order.
pub fn rdf_types(data: &GraphData) -> HashMap<&str, &str> {
	let mut types = HashMap::new();
	for link in data.links.iter().filter(|l| l.is_rdf_type()) {
		types
			.entry(link.source.as_str())
			.or_insert(link.target.as_str());
	}
	types
}

fn apply_criterion(
	nodes: &mut [StyledNode],
	rdf_types: &HashMap<&str, &str>,
	criterion: &TypeCriterion,
	criteria: &[String],
	config: &StyleConfig,
) {
	let selected = criterion
		.type_id
		.as_deref()
		.filter(|t| criteria.iter().any(|c| c == t));
	for node in nodes {
		let matches = selected.is_some() && rdf_types.get(node.id.as_str()).copied() == selected;
		node.color = match (&criterion.color, matches) {
			(Some(color), true) => Some(color.clone()),
			_ => Some(config.fallback_color.clone()),
		};
	}
}

/// A literal-valued property of a node, as listed in its popup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeProperty {
	/// Predicate of the link.
	pub label: String,
	/// Label of the link's target.
	pub value: String,
}

/// Links leaving `id` towards non-resource nodes, paired with the target's label.
pub fn node_properties(data: &GraphData, roles: &RoleSets, id: &str) -> Vec<NodeProperty> {
	data.links
		.iter()
		.filter(|l| l.source == id && !roles.is_resource(&l.target))
		.filter_map(|l| {
			data.node(&l.target).map(|target| NodeProperty {
				label: l.label.clone(),
				value: target.label.clone(),
			})
		})
		.collect()
}
