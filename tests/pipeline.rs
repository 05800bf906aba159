//! End-to-end checks of the classify -> style -> filter pipeline and the
//! selection state machine, over hand-written and generated graphs.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rdf_graph_canvas::graph::{
	GraphData, GraphEvent, GraphLink, GraphNode, GraphStore, Position, RDF_TYPE, Role, Selection,
	StyleConfig, ViewConfig, ViewKind, classify, rdf_types, sample_graph, transform,
};

const LABEL_PREFIXES: &[&str] = &["ex:", "foaf:", "\"lit ", "plain "];
const PREDICATES: &[&str] = &[RDF_TYPE, "ex:knows", "foaf:name"];

/// Graphs of up to a dozen nodes whose links may point past the node list.
fn arb_graph() -> impl Strategy<Value = GraphData> {
	(1usize..12)
		.prop_flat_map(|n| {
			(
				prop::collection::vec(0..LABEL_PREFIXES.len(), n),
				prop::collection::vec((0..n + 3, 0..PREDICATES.len(), 0..n + 3), 0..24),
			)
		})
		.prop_map(|(labels, links)| GraphData {
			nodes: labels
				.iter()
				.enumerate()
				.map(|(i, l)| GraphNode::new(format!("n{i}"), format!("{}{i}", LABEL_PREFIXES[*l])))
				.collect(),
			links: links
				.into_iter()
				.map(|(s, p, t)| GraphLink::new(format!("n{s}"), PREDICATES[p], format!("n{t}")))
				.collect(),
		})
}

fn arb_view() -> impl Strategy<Value = ViewKind> {
	prop::sample::select(ViewKind::ALL.to_vec())
}

proptest! {
	#[test]
	fn classification_is_idempotent(data in arb_graph()) {
		prop_assert_eq!(classify(&data).unwrap(), classify(&data).unwrap());
	}

	#[test]
	fn role_sets_cover_every_node(data in arb_graph()) {
		let roles = classify(&data).unwrap();
		let all: HashSet<String> = data.nodes.iter().map(|n| n.id.clone()).collect();
		let union: HashSet<String> = roles
			.sources
			.iter()
			.chain(&roles.rdf_type_targets)
			.chain(&roles.literals)
			.chain(&roles.isolated)
			.chain(&roles.rest)
			.cloned()
			.collect();
		prop_assert_eq!(union, all);
		prop_assert!(roles.sources.is_disjoint(&roles.isolated));
		prop_assert!(roles.literals.is_disjoint(&roles.isolated));
	}

	#[test]
	fn no_view_emits_dangling_links(data in arb_graph(), kind in arb_view()) {
		let snapshot = transform(&data, &ViewConfig::new(kind), &StyleConfig::default()).unwrap();
		let ids: HashSet<&str> = snapshot.nodes.iter().map(|n| n.id.as_str()).collect();
		for link in &snapshot.links {
			prop_assert!(ids.contains(link.source.as_str()));
			prop_assert!(ids.contains(link.target.as_str()));
		}
		for node in &snapshot.nodes {
			prop_assert!(kind.admits(node.role));
		}
	}

	#[test]
	fn shared_rdf_type_means_shared_color(data in arb_graph()) {
		let snapshot = transform(&data, &ViewConfig::default(), &StyleConfig::default()).unwrap();
		let types = rdf_types(&data);
		for a in &snapshot.nodes {
			for b in &snapshot.nodes {
				let (ta, tb) = (types.get(a.id.as_str()), types.get(b.id.as_str()));
				if ta.is_some() && ta == tb {
					prop_assert_eq!(&a.color, &b.color);
				}
			}
		}
	}

	#[test]
	fn clicking_the_same_node_twice_is_idle(id in "[a-z]{1,8}", x in -1e3f64..1e3, y in -1e3f64..1e3) {
		let mut selection = Selection::default();
		selection.click_node(&id, Position::new(x, y));
		selection.click_node(&id, Position::new(x, y));
		prop_assert_eq!(selection, Selection::Idle);
	}
}

#[test]
fn typed_subjects_share_their_type_color() {
	let data = GraphData {
		nodes: ["A", "B", "C", "Type1", "Type2"]
			.into_iter()
			.map(|id| GraphNode::new(id, id))
			.collect(),
		links: vec![
			GraphLink::new("A", RDF_TYPE, "Type1"),
			GraphLink::new("B", RDF_TYPE, "Type1"),
			GraphLink::new("C", RDF_TYPE, "Type2"),
		],
	};
	let roles = classify(&data).unwrap();
	let mut targets: Vec<&str> = roles.rdf_type_targets.iter().map(String::as_str).collect();
	targets.sort();
	assert_eq!(targets, vec!["Type1", "Type2"]);
	for id in ["A", "B", "C"] {
		assert_eq!(roles.role_of(id), Role::Source);
	}

	let snapshot = transform(&data, &ViewConfig::default(), &StyleConfig::default()).unwrap();
	let color = |id: &str| snapshot.node(id).unwrap().color.clone();
	assert_eq!(color("A"), color("B"));
	assert_ne!(color("A"), color("C"));
}

#[test]
fn invalid_upload_leaves_snapshot_untouched() {
	let mut store = GraphStore::new(StyleConfig::default());
	store.dispatch(GraphEvent::Loaded(sample_graph())).unwrap();
	store
		.dispatch(GraphEvent::NodeClicked {
			id: "ex:LJ".into(),
			position: Position::new(10.0, 20.0),
		})
		.unwrap();
	let (snapshot, selection) = (store.snapshot().clone(), store.selection().clone());

	assert!(store.dispatch(GraphEvent::Imported("not json at all".into())).is_err());
	assert_eq!(store.snapshot(), &snapshot);
	assert_eq!(store.selection(), &selection);
	assert!(store.last_error().is_some());
}

#[test]
fn sample_snapshot_serializes_with_shapes() {
	let snapshot =
		transform(&sample_graph(), &ViewConfig::default(), &StyleConfig::default()).unwrap();
	let json = serde_json::to_value(&snapshot).unwrap();
	let lit = json["nodes"]
		.as_array()
		.unwrap()
		.iter()
		.find(|n| n["id"] == "lit_lili")
		.unwrap();
	assert_eq!(lit["shape"], "square");
	assert_eq!(lit["role"], "literal");
}
