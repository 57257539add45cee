//! Structural decomposition of column specifications.
//!
//! ```text
//! spec  = name [":"] path ["|"] flags
//! name  = (word | space | "%" | "/" | "-")+
//! path  = any*                      (lazy: as short as possible)
//! flags = "|" alpha{0,3}            (explicit)
//!       | [NTWSLRH]{0,3}            (bare suffix)
//! ```
//!
//! Both separators are optional, so the grammar is ambiguous; the lazy path
//! resolves it by leaving as many trailing characters as possible to the flags.
//! Without a `|`, only flag letters can be split off the end of the path. After
//! an explicit `|`, any letters are taken as flags and unknown ones are reported
//! later instead of being folded into the path.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ColumnError, Result};


const SPEC_PATTERN: &str = r"(?s)^([[:word:][:space:]%/-]+):?(.*?)(?:\|([[:alpha:]]{0,3})|([NTWSLRH]{0,3}))$";

static SPEC_RX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(SPEC_PATTERN).expect("column spec pattern must compile"));

/// The three textual slots of a column specification.
///
/// Separators are not retained: `NAME:.a|T` and `NAME.a|T` decompose identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecParts<'a> {
	/// Display name, at least one character.
	pub name: &'a str,
	/// Raw path expression, possibly empty.
	pub path: &'a str,
	/// Zero to three flag characters.
	pub flags: &'a str,
}

/// Splits `spec` into name, path and flags.
///
/// The regex engine runs in linear time, so adversarial input cannot trigger
/// backtracking blowups.
///
/// # Errors
///
/// Returns [`ColumnError::MalformedSpec`] carrying `spec` when it does not match.
pub fn decompose(spec: &str) -> Result<SpecParts<'_>> {
	let caps = SPEC_RX
		.captures(spec)
		.ok_or_else(|| ColumnError::MalformedSpec(spec.to_string()))?;

	let name = caps.get(1).map_or("", |m| m.as_str());
	let path = caps.get(2).map_or("", |m| m.as_str());
	let flags = caps
		.get(3)
		.or_else(|| caps.get(4))
		.map_or("", |m| m.as_str());

	Ok(SpecParts { name, path, flags })
}
