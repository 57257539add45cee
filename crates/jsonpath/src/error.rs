//! Error types for field path compilation.

use thiserror::Error;

/// A field path that could not be relaxed or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid field path {path:?} at position {position}: {message}")]
pub struct PathError {
	/// The path as the caller supplied it.
	pub path: String,
	/// Human-readable description of the problem.
	pub message: String,
	/// Byte offset into the normalized `{...}` template where parsing stopped.
	pub position: usize,
}

impl PathError {
	pub(crate) fn new(path: impl Into<String>, position: usize, message: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			message: message.into(),
			position,
		}
	}
}

/// Result type for field path operations.
pub type Result<T> = std::result::Result<T, PathError>;
