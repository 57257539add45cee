//! Compiled column descriptors.

use std::str::FromStr;

use serde::Serialize;
use tabula_jsonpath::FieldPath;
use tracing::warn;

use crate::attrs::{ColumnAttrs, FlagWarning};
use crate::error::{ColumnError, Result};
use crate::spec::decompose;


/// Where a column's cell values come from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSource {
	/// Evaluate a field path against the resource. Compiled columns always
	/// start here; an empty path means the renderer matches by name.
	Path(FieldPath),
	/// Read a fixed slot of a pre-rendered row.
	Slot(usize),
}

/// One compiled column.
///
/// Built once per specification and never changed in place; [`Self::bind_slot`]
/// returns a new descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDescriptor {
	name: String,
	source: ColumnSource,
	attrs: ColumnAttrs,
}

/// A descriptor together with the non-fatal diagnostics raised while compiling it.
#[derive(Debug, Clone, PartialEq)]
pub struct Compiled {
	pub descriptor: ColumnDescriptor,
	pub warnings: Vec<FlagWarning>,
}

impl ColumnDescriptor {
	/// Compiles `<name>[:<path>][|<flags>]` into a descriptor.
	///
	/// Unknown flags are logged and otherwise ignored; use
	/// [`Self::compile_with_warnings`] to collect them.
	///
	/// # Errors
	///
	/// [`ColumnError::MalformedSpec`] when the text cannot be decomposed, and
	/// [`ColumnError::InvalidPath`] when the path expression does not compile.
	pub fn compile(spec: &str) -> Result<Self> {
		Self::compile_with_warnings(spec).map(|compiled| compiled.descriptor)
	}

	/// Like [`Self::compile`], also returning the unknown-flag warnings.
	pub fn compile_with_warnings(spec: &str) -> Result<Compiled> {
		let parts = decompose(spec)?;

		let path = FieldPath::compile(parts.path).map_err(|source| ColumnError::InvalidPath {
			spec: spec.to_string(),
			source,
		})?;

		let mut warnings = Vec::new();
		let attrs = ColumnAttrs::from_flags(parts.flags, |flag| {
			warn!(flag = %flag, spec, "Unknown column attribute");
			warnings.push(FlagWarning {
				flag,
				spec: spec.to_string(),
			});
		});

		Ok(Compiled {
			descriptor: Self {
				name: parts.name.to_string(),
				source: ColumnSource::Path(path),
				attrs,
			},
			warnings,
		})
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn source(&self) -> &ColumnSource {
		&self.source
	}

	pub fn attrs(&self) -> &ColumnAttrs {
		&self.attrs
	}

	/// The field path, unless the column has been bound to a slot.
	pub fn path(&self) -> Option<&FieldPath> {
		match &self.source {
			ColumnSource::Path(path) => Some(path),
			ColumnSource::Slot(_) => None,
		}
	}

	/// The fixed row slot, or `None` while the column resolves by path.
	pub fn positional_index(&self) -> Option<usize> {
		match self.source {
			ColumnSource::Slot(index) => Some(index),
			ColumnSource::Path(_) => None,
		}
	}

	/// Returns a copy of this column reading from row slot `index`.
	pub fn bind_slot(&self, index: usize) -> Self {
		Self {
			source: ColumnSource::Slot(index),
			..self.clone()
		}
	}

	/// The header entry handed to the table renderer.
	pub fn header_column(&self) -> HeaderColumn {
		HeaderColumn {
			name: self.name.clone(),
			attrs: self.attrs,
		}
	}
}

impl FromStr for ColumnDescriptor {
	type Err = ColumnError;

	fn from_str(s: &str) -> Result<Self> {
		Self::compile(s)
	}
}

/// A table header entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HeaderColumn {
	pub name: String,
	pub attrs: ColumnAttrs,
}

impl From<&ColumnDescriptor> for HeaderColumn {
	fn from(descriptor: &ColumnDescriptor) -> Self {
		descriptor.header_column()
	}
}
