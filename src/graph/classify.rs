//! Node role classification.
//!
//! Roles are computed as five raw sets and resolved to one role per node by
//! precedence: rdf:type target, source, isolated, literal, rest.

use std::collections::HashSet;

use super::error::Result;
use super::model::{GraphData, Role};

/// Raw role sets. A node may sit in several; [`RoleSets::role_of`] picks one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleSets {
	/// Nodes that are the source of some link.
	pub sources: HashSet<String>,
	/// Targets of `rdf:type` links.
	pub rdf_type_targets: HashSet<String>,
	/// Nodes that are targets but never sources.
	pub literals: HashSet<String>,
	/// Nodes in no link and with no explicit link references.
	pub isolated: HashSet<String>,
	/// Whatever the other sets leave out.
	pub rest: HashSet<String>,
}

impl RoleSets {
	/// Resolved role of `id`.
	pub fn role_of(&self, id: &str) -> Role {
		if self.rdf_type_targets.contains(id) {
			Role::RdfTypeTarget
		} else if self.sources.contains(id) {
			Role::Source
		} else if self.isolated.contains(id) {
			Role::Isolated
		} else if self.literals.contains(id) {
			Role::Literal
		} else {
			Role::Rest
		}
	}

	/// Member of the resource category: a link source or an rdf:type target.
	pub fn is_resource(&self, id: &str) -> bool {
		self.sources.contains(id) || self.rdf_type_targets.contains(id)
	}
}

/// Computes the role sets of `data`. Fails on duplicate node ids.
pub fn classify(data: &GraphData) -> Result<RoleSets> {
	data.validate()?;

	let all: HashSet<&str> = data.nodes.iter().map(|n| n.id.as_str()).collect();
	let mut link_sources = HashSet::new();
	let mut link_targets = HashSet::new();
	let mut rdf_type_targets = HashSet::new();

	for link in &data.links {
		link_sources.insert(link.source.as_str());
		link_targets.insert(link.target.as_str());
		if link.is_rdf_type() {
			rdf_type_targets.insert(link.target.as_str());
		}
	}

	let sources: HashSet<&str> = all
		.iter()
		.copied()
		.filter(|id| link_sources.contains(id) || rdf_type_targets.contains(id))
		.collect();
	let rdf_type_targets: HashSet<&str> = all
		.iter()
		.copied()
		.filter(|id| rdf_type_targets.contains(id))
		.collect();
	let isolated: HashSet<&str> = data
		.nodes
		.iter()
		.filter(|n| n.links.is_empty())
		.map(|n| n.id.as_str())
		.filter(|id| !link_sources.contains(id) && !link_targets.contains(id))
		.collect();
	let literals: HashSet<&str> = all
		.iter()
		.copied()
		.filter(|id| {
			!sources.contains(id) && !rdf_type_targets.contains(id) && !isolated.contains(id)
		})
		.collect();
	let rest: HashSet<&str> = all
		.iter()
		.copied()
		.filter(|id| {
			!sources.contains(id)
				&& !rdf_type_targets.contains(id)
				&& !literals.contains(id)
				&& !isolated.contains(id)
		})
		.collect();

	Ok(RoleSets {
		sources: owned(sources),
		rdf_type_targets: owned(rdf_type_targets),
		literals: owned(literals),
		isolated: owned(isolated),
		rest: owned(rest),
	})
}

fn owned(set: HashSet<&str>) -> HashSet<String> {
	set.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::error::GraphError;
	use crate::graph::model::{GraphLink, GraphNode, RDF_TYPE};

	fn ids(set: &HashSet<String>) -> Vec<&str> {
		let mut v: Vec<&str> = set.iter().map(String::as_str).collect();
		v.sort();
		v
	}

	fn dataset() -> GraphData {
		GraphData {
			nodes: ["ex:LJ", "foaf:Person", "lit_lili", "ex:alone", "ex:univ"]
				.into_iter()
				.map(|id| GraphNode::new(id, id))
				.collect(),
			links: vec![
				GraphLink::new("ex:LJ", RDF_TYPE, "foaf:Person"),
				GraphLink::new("ex:LJ", "rdfs:label", "lit_lili"),
				GraphLink::new("ex:LJ", "ex:studiesIn", "ex:univ"),
			],
		}
	}

	#[test]
	fn computes_raw_sets() {
		let roles = classify(&dataset()).unwrap();
		assert_eq!(ids(&roles.sources), vec!["ex:LJ", "foaf:Person"]);
		assert_eq!(ids(&roles.rdf_type_targets), vec!["foaf:Person"]);
		assert_eq!(ids(&roles.isolated), vec!["ex:alone"]);
		assert_eq!(ids(&roles.literals), vec!["ex:univ", "lit_lili"]);
		assert!(roles.rest.is_empty());
	}

	#[test]
	fn resolves_precedence() {
		let roles = classify(&dataset()).unwrap();
		assert_eq!(roles.role_of("foaf:Person"), Role::RdfTypeTarget);
		assert_eq!(roles.role_of("ex:LJ"), Role::Source);
		assert_eq!(roles.role_of("ex:alone"), Role::Isolated);
		assert_eq!(roles.role_of("lit_lili"), Role::Literal);
		assert_eq!(roles.role_of("unknown"), Role::Rest);
	}

	#[test]
	fn explicit_link_references_prevent_isolation() {
		let mut data = dataset();
		data.nodes[3].links = vec!["somewhere".into()];
		let roles = classify(&data).unwrap();
		assert!(!roles.isolated.contains("ex:alone"));
		assert_eq!(roles.role_of("ex:alone"), Role::Literal);
	}

	#[test]
	fn dangling_endpoints_are_not_classified() {
		let mut data = dataset();
		data.links.push(GraphLink::new("ghost", RDF_TYPE, "ghost:Type"));
		let roles = classify(&data).unwrap();
		assert!(!roles.sources.contains("ghost"));
		assert!(!roles.rdf_type_targets.contains("ghost:Type"));
	}

	#[test]
	fn duplicate_ids_fail_fast() {
		let mut data = dataset();
		data.nodes.push(GraphNode::new("ex:LJ", "again"));
		assert!(matches!(classify(&data), Err(GraphError::DuplicateNodeId(_))));
	}
}
