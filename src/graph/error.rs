use thiserror::Error;

/// Everything that can go wrong between an uploaded file and a styled snapshot.
#[derive(Debug, Error)]
pub enum GraphError {
	/// The uploaded text is not a graph document.
	#[error("malformed graph JSON: {0}")]
	Parse(#[from] serde_json::Error),

	/// Two nodes share an id; the whole dataset is rejected.
	#[error("duplicate node id `{0}`")]
	DuplicateNodeId(String),

	/// The renderer has no element for the entity.
	#[error("no visual representation for {0}")]
	NoGeometry(String),

	/// Override color outside the configured criterion colors.
	#[error("color `{0}` is not one of the criterion colors")]
	UnknownColor(String),
}

/// Result alias used throughout [`crate::graph`].
pub type Result<T> = std::result::Result<T, GraphError>;
