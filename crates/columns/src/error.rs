//! Error types for column compilation and view configuration.

use std::path::PathBuf;

use tabula_jsonpath::PathError;
use thiserror::Error;

/// Errors that abort the compilation of a single column specification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
	/// The text does not follow `<name>[:<path>][|<flags>]`.
	#[error("invalid column definition {0:?}")]
	MalformedSpec(String),

	/// The path expression was rejected by the field path engine.
	#[error("invalid field path in column definition {spec:?}: {source}")]
	InvalidPath {
		/// The full column specification.
		spec: String,
		/// The underlying engine error.
		source: PathError,
	},
}

/// Errors that can occur when loading view configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or schema.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Result type for column compilation.
pub type Result<T> = std::result::Result<T, ColumnError>;
