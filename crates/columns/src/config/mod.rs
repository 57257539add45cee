//! Custom view definitions.
//!
//! A views file maps resource names to the column specifications that
//! replace the default table layout:
//!
//! ```toml
//! [views."v1/pods"]
//! columns = [
//!     "NAME",
//!     "IP:.status.podIP|W",
//!     "AGE:.metadata.creationTimestamp|T",
//! ]
//! ```
//!
//! Each entry compiles on its own. A bad entry is recorded in
//! [`CompiledView::errors`] and the remaining columns still load.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::attrs::FlagWarning;
use crate::descriptor::{ColumnDescriptor, HeaderColumn};
use crate::error::{ColumnError, ConfigError};

#[cfg(test)]
mod tests;

/// Parsed views file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewsConfig {
	#[serde(default)]
	pub views: BTreeMap<String, ViewSetting>,
}

/// Column layout for one resource view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSetting {
	#[serde(default)]
	pub columns: Vec<String>,
}

/// A view whose column specifications have been compiled.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledView {
	pub name: String,
	/// Successfully compiled columns, in file order.
	pub columns: Vec<ColumnDescriptor>,
	pub errors: Vec<EntryError>,
	pub warnings: Vec<FlagWarning>,
}

/// A column entry that failed to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryError {
	/// Position of the entry in the view's `columns` list.
	pub index: usize,
	pub error: ColumnError,
}

impl fmt::Display for EntryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "column #{}: {}", self.index, self.error)
	}
}

impl ViewsConfig {
	/// Parse a TOML string into a [`ViewsConfig`].
	pub fn parse(input: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(input)?)
	}

	/// Load a views file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Merge another config into this one.
	///
	/// Views in `other` replace views of the same name in `self`.
	pub fn merge(&mut self, other: ViewsConfig) {
		self.views.extend(other.views);
	}

	pub fn view(&self, name: &str) -> Option<&ViewSetting> {
		self.views.get(name)
	}

	/// Compiles the named view, or returns `None` if it is not defined.
	pub fn compile_view(&self, name: &str) -> Option<CompiledView> {
		self.views.get(name).map(|view| view.compile(name))
	}

	/// Compiles every view, ordered by name.
	pub fn compile_all(&self) -> Vec<CompiledView> {
		self.views.iter().map(|(name, view)| view.compile(name)).collect()
	}
}

impl ViewSetting {
	/// Compiles every column entry independently.
	pub fn compile(&self, name: &str) -> CompiledView {
		let mut view = CompiledView {
			name: name.to_string(),
			columns: Vec::with_capacity(self.columns.len()),
			errors: Vec::new(),
			warnings: Vec::new(),
		};

		for (index, spec) in self.columns.iter().enumerate() {
			match ColumnDescriptor::compile_with_warnings(spec) {
				Ok(compiled) => {
					view.columns.push(compiled.descriptor);
					view.warnings.extend(compiled.warnings);
				}
				Err(error) => {
					warn!(view = name, index, error = %error, "Skipping column definition");
					view.errors.push(EntryError { index, error });
				}
			}
		}

		debug!(
			view = name,
			columns = view.columns.len(),
			errors = view.errors.len(),
			"Compiled view columns"
		);
		view
	}
}

impl CompiledView {
	/// Returns `true` when every entry compiled without errors or warnings.
	pub fn is_clean(&self) -> bool {
		self.errors.is_empty() && self.warnings.is_empty()
	}

	/// Header entries for the compiled columns.
	pub fn header(&self) -> Vec<HeaderColumn> {
		self.columns.iter().map(HeaderColumn::from).collect()
	}
}
