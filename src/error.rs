use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PathError>;

/// Panic message for [`crate::must_get`] when nothing matched.
pub const NO_MATCH: &str = "pathwalk: no match";

/// Errors produced while compiling textual paths.
#[derive(Debug, Error)]
pub enum PathError {
	/// Path expression syntax is invalid.
	#[error("invalid path: {path}")]
	InvalidPath {
		/// Original user-provided path string.
		path: String,
	},
}
