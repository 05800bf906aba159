use super::model::{GraphData, GraphLink, GraphNode, RDF_TYPE};

/// Small FOAF dataset shown until the user imports a file.
pub fn sample_graph() -> GraphData {
	let nodes = [
		("_b0", "_b0"),
		("lit_anonyme", "\"node-blanc\""),
		("ex:MDR", "ex:MDR"),
		("ex:IRD", "ex:IRD"),
		("ex:ISA", "ex:ISA"),
		("ex:LJ", "ex:LJ"),
		("lit_lijuan", "\"Lijuan\""),
		("lit_JIANG", "\"JIANG\""),
		("foaf:Person", "foaf:Person"),
		("lit_lili", "\"lili\""),
		(
			"lit_comm",
			"\"lili est une étudiante de l'Université de Montpellier\"",
		),
		("ex:univ_UM", "ex:univ_UM"),
		("foaf:Organization", "foaf:Organization"),
		("lit_nameU", "\"Université de Montpellier\""),
	];
	let links = [
		("ex:LJ", RDF_TYPE, "foaf:Person"),
		("ex:MDR", RDF_TYPE, "foaf:Person"),
		("ex:LJ", "rdfs:label", "lit_lili"),
		("ex:LJ", "rdfs:comment", "lit_comm"),
		("_b0", "rdfs:comment", "lit_anonyme"),
		("ex:LJ", "foaf:firstName", "lit_lijuan"),
		("ex:LJ", "foaf:familyName", "lit_JIANG"),
		("ex:LJ", "ex:studiesIn", "ex:univ_UM"),
		("ex:univ_UM", RDF_TYPE, "foaf:Organization"),
		("ex:univ_UM", "foaf:name", "lit_nameU"),
	];

	GraphData {
		nodes: nodes
			.into_iter()
			.map(|(id, label)| GraphNode::new(id, label))
			.collect(),
		links: links
			.into_iter()
			.map(|(source, label, target)| GraphLink::new(source, label, target))
			.collect(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::classify::classify;
	use crate::graph::model::Role;

	#[test]
	fn sample_is_valid() {
		let data = sample_graph();
		data.validate().unwrap();
		assert_eq!(data.nodes.len(), 14);
		assert_eq!(data.links.len(), 10);
	}

	#[test]
	fn sample_covers_every_resolved_role_but_rest() {
		let roles = classify(&sample_graph()).unwrap();
		assert_eq!(roles.role_of("ex:LJ"), Role::Source);
		assert_eq!(roles.role_of("foaf:Person"), Role::RdfTypeTarget);
		assert_eq!(roles.role_of("ex:ISA"), Role::Isolated);
		assert_eq!(roles.role_of("lit_nameU"), Role::Literal);
	}
}
