//! Relaxed JSONPath field accessors.
//!
//! Column definitions name the value they display with a forgiving path
//! syntax. All of these address the same field:
//!
//! ```text
//! metadata.name
//! .metadata.name
//! {metadata.name}
//! {.metadata.name}
//! ```
//!
//! [`relax`] normalizes the shorthand into the canonical `{.metadata.name}`
//! template and [`FieldPath::compile`] parses that template into an accessor
//! that can be evaluated against any [`serde_json::Value`].
//!
//! An empty path is valid and compiles to an empty [`FieldPath`]: it selects
//! nothing and tells the caller to resolve the column some other way.

mod error;
mod eval;
mod parser;
pub mod segment;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

pub use error::{PathError, Result};
pub use segment::Segment;

const RELAXED_FORMS: &str = "expected a 'name1.name2' or '.name1.name2' or '{name1.name2}' or '{.name1.name2}'";

/// Normalizes relaxed shorthand into a `{.path}` template.
///
/// Empty input passes through unchanged.
///
/// # Errors
///
/// Returns a [`PathError`] when the input has unbalanced or nested braces.
pub fn relax(raw: &str) -> Result<String> {
	if raw.is_empty() {
		return Ok(String::new());
	}

	let inner = raw
		.strip_prefix('{')
		.and_then(|rest| rest.strip_suffix('}'))
		.unwrap_or(raw);
	let field = inner.strip_prefix('.').unwrap_or(inner);

	if field.is_empty() || field.contains(['{', '}']) {
		return Err(PathError::new(raw, 0, format!("unexpected path string, {RELAXED_FORMS}")));
	}

	Ok(format!("{{.{field}}}"))
}

/// A compiled field accessor.
///
/// Immutable once compiled; clones are independent and the type is
/// `Send + Sync`, so one path may be shared by any number of readers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldPath {
	template: String,
	segments: Vec<Segment>,
}

impl FieldPath {
	/// Relaxes and parses `raw` into an accessor.
	///
	/// # Errors
	///
	/// Returns a [`PathError`] naming `raw` when it is not a valid path.
	pub fn compile(raw: &str) -> Result<Self> {
		let template = relax(raw)?;
		if template.is_empty() {
			return Ok(Self::default());
		}

		let segments = parser::parse_template(&template).map_err(|e| PathError {
			path: raw.to_string(),
			..e
		})?;
		Ok(Self { template, segments })
	}

	/// Returns `true` for the empty path, which selects nothing.
	pub fn is_empty(&self) -> bool {
		self.template.is_empty()
	}

	/// The normalized `{...}` template, or `""` for the empty path.
	pub fn template(&self) -> &str {
		&self.template
	}

	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}

	/// Returns every node the path selects from `root`, in document order.
	///
	/// Missing fields select nothing; they are not errors.
	pub fn evaluate<'v>(&self, root: &'v Value) -> Vec<&'v Value> {
		if self.is_empty() {
			return Vec::new();
		}
		eval::evaluate(&self.segments, root)
	}

	/// Renders the selected nodes as display text.
	///
	/// Strings are written raw and everything else as compact JSON; multiple
	/// results are joined with a single space. Returns `None` when nothing
	/// was selected.
	pub fn render(&self, root: &Value) -> Option<String> {
		let values = self.evaluate(root);
		if values.is_empty() {
			return None;
		}

		let rendered: Vec<String> = values
			.into_iter()
			.map(|value| match value {
				Value::String(s) => s.clone(),
				other => other.to_string(),
			})
			.collect();
		Some(rendered.join(" "))
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.template)
	}
}

impl FromStr for FieldPath {
	type Err = PathError;

	fn from_str(s: &str) -> Result<Self> {
		Self::compile(s)
	}
}

impl Serialize for FieldPath {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.template)
	}
}

impl<'de> Deserialize<'de> for FieldPath {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		Self::compile(&raw).map_err(serde::de::Error::custom)
	}
}
