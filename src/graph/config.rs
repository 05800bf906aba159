use serde::{Deserialize, Serialize};

use super::model::Role;

const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

const CRITERION_COLORS: &[(&str, &str)] = &[
	("#0000FF", "Blue"),
	("#008000", "Green"),
	("#FF0000", "Red"),
	("#FFA500", "Orange"),
	("#800080", "Purple"),
	("#00FFFF", "Cyan"),
	("#FF00FF", "Magenta"),
	("#FFFF00", "Yellow"),
	("#808080", "Gray"),
	("#FFC0CB", "Pink"),
];

/// A color offered for the type-colored override.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColor {
	/// CSS color, e.g. `#0000FF`.
	pub code: String,
	/// Name shown in the picker.
	pub name: String,
}

/// Immutable styling configuration shared by every transformation pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
	/// Colors bound to grouping keys, in encounter order. Not reused once exhausted.
	pub palette: Vec<String>,
	/// Color of non-matching nodes in the type-colored view.
	pub fallback_color: String,
	/// Color drawn for nodes the styling pass left uncolored.
	pub default_color: String,
	/// Choices offered for the type-colored override.
	pub criterion_colors: Vec<NamedColor>,
}

impl Default for StyleConfig {
	fn default() -> Self {
		Self {
			palette: COLORS.iter().map(|c| c.to_string()).collect(),
			fallback_color: "gray".into(),
			default_color: "lightgreen".into(),
			criterion_colors: CRITERION_COLORS
				.iter()
				.map(|(code, name)| NamedColor {
					code: code.to_string(),
					name: name.to_string(),
				})
				.collect(),
		}
	}
}

impl StyleConfig {
	/// Whether `code` is one of the offered override colors.
	pub fn is_criterion_color(&self, code: &str) -> bool {
		self.criterion_colors.iter().any(|c| c.code == code)
	}
}

/// Which subset of classified nodes a view emits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewKind {
	/// Every node.
	#[default]
	Full,
	/// Sources and type targets.
	ResourcesOnly,
	/// Resources plus isolated nodes.
	ResourcesAndIsolated,
	/// Like `ResourcesAndIsolated`, with one rdf:type group highlighted.
	TypeColored,
}

impl ViewKind {
	/// Every view, in menu order.
	pub const ALL: [ViewKind; 4] = [
		ViewKind::Full,
		ViewKind::ResourcesOnly,
		ViewKind::ResourcesAndIsolated,
		ViewKind::TypeColored,
	];

	/// Node predicate of the view.
	pub fn admits(self, role: Role) -> bool {
		match self {
			ViewKind::Full => true,
			ViewKind::ResourcesOnly => role.is_resource(),
			ViewKind::ResourcesAndIsolated | ViewKind::TypeColored => {
				role.is_resource() || role == Role::Isolated
			}
		}
	}

	/// Stable identifier, used as the select value.
	pub fn name(self) -> &'static str {
		match self {
			ViewKind::Full => "full",
			ViewKind::ResourcesOnly => "resources",
			ViewKind::ResourcesAndIsolated => "resources-isolated",
			ViewKind::TypeColored => "type-colored",
		}
	}

	/// Human-readable menu entry.
	pub fn title(self) -> &'static str {
		match self {
			ViewKind::Full => "Full graph",
			ViewKind::ResourcesOnly => "Resources only",
			ViewKind::ResourcesAndIsolated => "Resources and isolated nodes",
			ViewKind::TypeColored => "Colored by rdf:type",
		}
	}

	/// Inverse of [`ViewKind::name`].
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|v| v.name() == name)
	}
}

/// User-chosen rdf:type group and the color it is forced to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCriterion {
	/// The rdf:type target whose instances are highlighted.
	pub type_id: Option<String>,
	/// Override color; without one every node is drawn in the fallback color.
	pub color: Option<String>,
}

/// Active view and its criterion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
	/// Which nodes are emitted.
	pub kind: ViewKind,
	/// Only read by [`ViewKind::TypeColored`].
	#[serde(default)]
	pub criterion: TypeCriterion,
}

impl ViewConfig {
	/// A view with no criterion chosen.
	pub fn new(kind: ViewKind) -> Self {
		Self {
			kind,
			criterion: TypeCriterion::default(),
		}
	}
}
