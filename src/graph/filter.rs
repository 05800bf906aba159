use std::collections::HashSet;

use super::config::ViewKind;
use super::model::{GraphLink, StyledLink, StyledNode};

/// Keeps the nodes admitted by `view`, preserving order.
pub fn filter_nodes(nodes: Vec<StyledNode>, view: ViewKind) -> Vec<StyledNode> {
	nodes.into_iter().filter(|n| view.admits(n.role)).collect()
}

/// Keeps the links whose endpoints are both in `nodes` and admitted by `view`.
///
/// A link to an id missing from `nodes` is dropped without complaint, so the
/// output never references a node the renderer does not have.
pub fn filter_links(nodes: &[StyledNode], links: &[GraphLink], view: ViewKind) -> Vec<StyledLink> {
	let active: HashSet<&str> = nodes
		.iter()
		.filter(|n| view.admits(n.role))
		.map(|n| n.id.as_str())
		.collect();

	links
		.iter()
		.filter(|l| active.contains(l.source.as_str()) && active.contains(l.target.as_str()))
		.map(StyledLink::from)
		.collect()
}
