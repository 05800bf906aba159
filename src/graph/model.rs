use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{GraphError, Result};

/// Label marking a link as an instance-of relation.
pub const RDF_TYPE: &str = "rdf:type";

/// A node as it appears in the input document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
	/// Unique within a dataset.
	pub id: String,
	/// Display text. Its prefix before `:` is the fallback grouping key.
	pub label: String,
	/// Used when styling assigns no color.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub color: Option<String>,
	/// Relative render size.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub size: Option<f64>,
	/// Explicit link references. A node listing any is never isolated.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub links: Vec<String>,
}

impl GraphNode {
	/// A node with no color, size or explicit links.
	pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			color: None,
			size: None,
			links: Vec::new(),
		}
	}
}

/// A labeled, directed link between two node ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
	/// Subject node id.
	pub source: String,
	/// Predicate, e.g. `rdf:type` or `foaf:knows`.
	pub label: String,
	/// Object node id.
	pub target: String,
}

impl GraphLink {
	/// Builds a link from its three parts.
	pub fn new(
		source: impl Into<String>,
		label: impl Into<String>,
		target: impl Into<String>,
	) -> Self {
		Self {
			source: source.into(),
			label: label.into(),
			target: target.into(),
		}
	}

	/// Identity used by selection and hit testing.
	pub fn id(&self) -> LinkId {
		LinkId {
			source: self.source.clone(),
			target: self.target.clone(),
			label: self.label.clone(),
		}
	}

	/// Whether this is an instance-of link.
	pub fn is_rdf_type(&self) -> bool {
		self.label == RDF_TYPE
	}
}

/// Composite identity of a link: two links with the same endpoints and label are the same link.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LinkId {
	/// Subject node id.
	pub source: String,
	/// Object node id.
	pub target: String,
	/// Predicate.
	pub label: String,
}

impl fmt::Display for LinkId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} -[{}]-> {}", self.source, self.label, self.target)
	}
}

/// Raw dataset as uploaded or bundled.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
	/// All nodes, in document order.
	#[serde(default)]
	pub nodes: Vec<GraphNode>,
	/// All links. Endpoints may be missing from `nodes`.
	#[serde(default)]
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// Parses and validates a dataset. Node ids must be unique.
	pub fn from_json(text: &str) -> Result<Self> {
		let data: GraphData = serde_json::from_str(text)?;
		data.validate()?;
		Ok(data)
	}

	/// Rejects datasets with duplicate node ids.
	pub fn validate(&self) -> Result<()> {
		let mut seen = HashSet::with_capacity(self.nodes.len());
		for node in &self.nodes {
			if !seen.insert(node.id.as_str()) {
				return Err(GraphError::DuplicateNodeId(node.id.clone()));
			}
		}
		Ok(())
	}

	/// Node with the given id.
	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Distinct rdf:type targets in first-encounter link order.
	pub fn type_criteria(&self) -> Vec<String> {
		let mut seen = HashSet::new();
		self.links
			.iter()
			.filter(|l| l.is_rdf_type())
			.filter(|l| seen.insert(l.target.as_str()))
			.map(|l| l.target.clone())
			.collect()
	}
}

/// Semantic role of a node after precedence resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
	/// Subject of at least one link.
	Source,
	/// Object of an `rdf:type` link.
	RdfTypeTarget,
	/// Only ever the object of links.
	Literal,
	/// Takes part in no link.
	Isolated,
	/// None of the above.
	Rest,
}

impl Role {
	/// Sources and type targets, the nodes every resource view keeps.
	pub fn is_resource(self) -> bool {
		matches!(self, Role::Source | Role::RdfTypeTarget)
	}
}

/// Glyph drawn for a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
	/// Resources and isolated nodes.
	Circle,
	/// Literals.
	Square,
}

/// A node with its resolved role and style.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyledNode {
	/// Id of the input node.
	pub id: String,
	/// Label of the input node.
	pub label: String,
	/// Role after precedence resolution.
	pub role: Role,
	/// `None` draws with the renderer's default color.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub color: Option<String>,
	/// Glyph for the role.
	pub shape: Shape,
	/// Size carried over from the input.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub size: Option<f64>,
}

/// A link whose endpoints are both in the snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledLink {
	/// Subject node id.
	pub source: String,
	/// Predicate.
	pub label: String,
	/// Object node id.
	pub target: String,
}

impl StyledLink {
	/// Identity of the link.
	pub fn id(&self) -> LinkId {
		LinkId {
			source: self.source.clone(),
			target: self.target.clone(),
			label: self.label.clone(),
		}
	}
}

impl From<&GraphLink> for StyledLink {
	fn from(link: &GraphLink) -> Self {
		Self {
			source: link.source.clone(),
			label: link.label.clone(),
			target: link.target.clone(),
		}
	}
}

/// One transformation pass' output, handed to the renderer as a whole.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
	/// Nodes admitted by the view.
	pub nodes: Vec<StyledNode>,
	/// Links between admitted nodes.
	pub links: Vec<StyledLink>,
	/// rdf:type targets selectable as a coloring criterion.
	#[serde(default)]
	pub criteria: Vec<String>,
}

impl GraphSnapshot {
	/// Styled node with the given id.
	pub fn node(&self, id: &str) -> Option<&StyledNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Whether the node survived filtering.
	pub fn contains_node(&self, id: &str) -> bool {
		self.node(id).is_some()
	}

	/// Whether the link survived filtering.
	pub fn contains_link(&self, id: &LinkId) -> bool {
		self.links
			.iter()
			.any(|l| l.source == id.source && l.target == id.target && l.label == id.label)
	}
}
