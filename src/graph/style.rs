use std::collections::HashMap;

use super::config::StyleConfig;
use super::model::{GraphNode, Role, Shape};

/// What a node's color is grouped by. Type ids and label prefixes never share a color slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GroupKey {
	/// The node's rdf:type target.
	Type(String),
	/// Label prefix before the first `:` of an untyped node.
	Prefix(String),
}

/// Binds grouping keys to palette colors for the duration of one pass.
pub struct StyleAssigner<'a> {
	config: &'a StyleConfig,
	bindings: HashMap<GroupKey, Option<String>>,
	next_slot: usize,
}

impl<'a> StyleAssigner<'a> {
	/// An assigner with no keys bound yet.
	pub fn new(config: &'a StyleConfig) -> Self {
		Self {
			config,
			bindings: HashMap::new(),
			next_slot: 0,
		}
	}

	/// Returns `(color, shape)` for `node`, binding its grouping key on first sight.
	pub fn assign(
		&mut self,
		node: &GraphNode,
		role: Role,
		rdf_type: Option<&str>,
	) -> (Option<String>, Shape) {
		let color = grouping_key(node, rdf_type).and_then(|key| self.color_for(key));
		(color, shape_for(role))
	}

	/// Color bound to `key`, if any. Never binds.
	pub fn bound(&self, key: &GroupKey) -> Option<&str> {
		self.bindings.get(key).and_then(|c| c.as_deref())
	}

	fn color_for(&mut self, key: GroupKey) -> Option<String> {
		if let Some(color) = self.bindings.get(&key) {
			return color.clone();
		}
		// Keys past the end of the palette stay uncolored.
		let color = self.config.palette.get(self.next_slot).cloned();
		self.next_slot += 1;
		self.bindings.insert(key, color.clone());
		color
	}
}

/// Circles for resources and isolated nodes, squares for everything else.
pub fn shape_for(role: Role) -> Shape {
	match role {
		Role::Source | Role::RdfTypeTarget | Role::Isolated => Shape::Circle,
		Role::Literal | Role::Rest => Shape::Square,
	}
}

/// The rdf:type target, or failing that the label prefix before the first `:`.
pub fn grouping_key(node: &GraphNode, rdf_type: Option<&str>) -> Option<GroupKey> {
	match rdf_type {
		Some(ty) => Some(GroupKey::Type(ty.to_string())),
		None => node
			.label
			.split_once(':')
			.map(|(prefix, _)| GroupKey::Prefix(prefix.to_string())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shapes_follow_roles() {
		assert_eq!(shape_for(Role::Source), Shape::Circle);
		assert_eq!(shape_for(Role::RdfTypeTarget), Shape::Circle);
		assert_eq!(shape_for(Role::Isolated), Shape::Circle);
		assert_eq!(shape_for(Role::Literal), Shape::Square);
		assert_eq!(shape_for(Role::Rest), Shape::Square);
	}

	#[test]
	fn grouping_key_prefers_rdf_type() {
		let node = GraphNode::new("ex:LJ", "ex:LJ");
		assert_eq!(
			grouping_key(&node, Some("foaf:Person")),
			Some(GroupKey::Type("foaf:Person".into()))
		);
		assert_eq!(grouping_key(&node, None), Some(GroupKey::Prefix("ex".into())));
		assert_eq!(grouping_key(&GraphNode::new("lit", "\"lili\""), None), None);
	}

	#[test]
	fn shared_keys_share_colors() {
		let config = StyleConfig::default();
		let mut styles = StyleAssigner::new(&config);
		let (a, _) = styles.assign(&GraphNode::new("a", "ex:a"), Role::Source, None);
		let (b, _) = styles.assign(&GraphNode::new("b", "foaf:b"), Role::Source, None);
		let (c, _) = styles.assign(&GraphNode::new("c", "ex:c"), Role::Source, None);
		assert_eq!(a.as_deref(), Some(config.palette[0].as_str()));
		assert_eq!(b.as_deref(), Some(config.palette[1].as_str()));
		assert_eq!(a, c);
		assert_eq!(styles.bound(&GroupKey::Prefix("ex".into())), a.as_deref());
	}

	#[test]
	fn overflowing_groups_stay_uncolored() {
		let config = StyleConfig {
			palette: vec!["red".into(), "blue".into()],
			..StyleConfig::default()
		};
		let mut styles = StyleAssigner::new(&config);
		let colors: Vec<_> = ["a:1", "b:1", "c:1", "a:2"]
			.into_iter()
			.map(|label| styles.assign(&GraphNode::new(label, label), Role::Source, None).0)
			.collect();
		assert_eq!(
			colors,
			vec![Some("red".into()), Some("blue".into()), None, Some("red".into())]
		);
	}

	#[test]
	fn type_ids_and_label_prefixes_do_not_alias() {
		let config = StyleConfig::default();
		let mut styles = StyleAssigner::new(&config);
		let (typed, _) = styles.assign(&GraphNode::new("a", "a"), Role::Source, Some("Person"));
		let (prefixed, _) = styles.assign(&GraphNode::new("b", "Person:bob"), Role::Source, None);
		assert_eq!(typed.as_deref(), Some(config.palette[0].as_str()));
		assert_eq!(prefixed.as_deref(), Some(config.palette[1].as_str()));
	}
}
