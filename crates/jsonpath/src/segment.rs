//! Compiled path segments.

/// One step of a compiled field path.
///
/// Each segment maps a set of input nodes to a set of output nodes; a path is
/// evaluated by folding its segments left to right starting from the root.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
	/// `.name` or `['name']`.
	Key(String),
	/// `['a','b']`: several keys, results in listed order.
	Keys(Vec<String>),
	/// `.*` or `[*]`: every object value or array element.
	Wildcard,
	/// `[0]`, `[-1]`, `[0,2]`.
	Indices(Vec<i64>),
	/// `[start:end:step]` with Python-style negative bounds.
	Slice {
		start: Option<i64>,
		end: Option<i64>,
		step: i64,
	},
	/// `..name`: the key looked up on the node and all of its descendants.
	RecursiveKey(String),
	/// `..*`: every descendant of the node.
	RecursiveWildcard,
	/// `[?(...)]`: array elements satisfying the predicate.
	Filter(Filter),
}

/// Predicate of a `[?(@.path <op> literal)]` segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
	/// Keys walked from the candidate element (`@.a.b` is `["a", "b"]`).
	pub path: Vec<String>,
	/// `None` tests only for the presence of `path`.
	pub comparison: Option<(CmpOp, Literal)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
	Eq,
	Ne,
	Lt,
	Le,
	Gt,
	Ge,
}

/// Right-hand side of a filter comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
	String(String),
	Number(f64),
	Bool(bool),
	Null,
}
