//! Evaluation of compiled segments against JSON documents.

use std::cmp::Ordering;

use serde_json::Value;

use crate::segment::{CmpOp, Filter, Literal, Segment};


/// Folds `segments` over `root`, returning every selected node in document order.
pub(crate) fn evaluate<'v>(segments: &[Segment], root: &'v Value) -> Vec<&'v Value> {
	segments.iter().fold(vec![root], |nodes, segment| {
		let mut next = Vec::new();
		for node in nodes {
			segment.apply(node, &mut next);
		}
		next
	})
}

impl Segment {
	fn apply<'v>(&self, node: &'v Value, out: &mut Vec<&'v Value>) {
		match self {
			Self::Key(key) => out.extend(node.get(key.as_str())),
			Self::Keys(keys) => out.extend(keys.iter().filter_map(|key| node.get(key.as_str()))),
			Self::Wildcard => children(node, out),
			Self::Indices(indices) => {
				if let Value::Array(items) = node {
					out.extend(
						indices
							.iter()
							.filter_map(|&index| resolve_index(index, items.len()))
							.map(|index| &items[index]),
					);
				}
			}
			Self::Slice { start, end, step } => {
				if let Value::Array(items) = node {
					let len = items.len() as i64;
					let clamp = |bound: i64| if bound < 0 { (len + bound).max(0) } else { bound.min(len) };
					let start = start.map_or(0, clamp) as usize;
					let end = end.map_or(len, clamp) as usize;
					if start < end {
						out.extend(items[start..end].iter().step_by(*step as usize));
					}
				}
			}
			Self::RecursiveKey(key) => {
				let mut nodes = vec![node];
				descendants(node, &mut nodes);
				out.extend(nodes.into_iter().filter_map(|n| n.get(key.as_str())));
			}
			Self::RecursiveWildcard => descendants(node, out),
			Self::Filter(filter) => {
				if let Value::Array(items) = node {
					out.extend(items.iter().filter(|item| filter.matches(item)));
				}
			}
		}
	}
}

fn resolve_index(index: i64, len: usize) -> Option<usize> {
	let len = len as i64;
	let index = if index < 0 { len + index } else { index };
	(0..len).contains(&index).then_some(index as usize)
}

fn children<'v>(node: &'v Value, out: &mut Vec<&'v Value>) {
	match node {
		Value::Object(map) => out.extend(map.values()),
		Value::Array(items) => out.extend(items),
		_ => {}
	}
}

/// Pushes every descendant of `node` in pre-order, excluding `node` itself.
fn descendants<'v>(node: &'v Value, out: &mut Vec<&'v Value>) {
	let mut direct = Vec::new();
	children(node, &mut direct);
	for child in direct {
		out.push(child);
		descendants(child, out);
	}
}

impl Filter {
	fn matches(&self, item: &Value) -> bool {
		let Some(found) = self.path.iter().try_fold(item, |value, key| value.get(key.as_str())) else {
			return false;
		};
		match &self.comparison {
			None => !found.is_null(),
			Some((op, literal)) => compare(found, *op, literal),
		}
	}
}

/// Values of different kinds are unordered: only `!=` holds between them.
fn compare(value: &Value, op: CmpOp, literal: &Literal) -> bool {
	let ordering = match (value, literal) {
		(Value::String(a), Literal::String(b)) => Some(a.as_str().cmp(b.as_str())),
		(Value::Number(a), Literal::Number(b)) => a.as_f64().and_then(|a| a.partial_cmp(b)),
		(Value::Bool(a), Literal::Bool(b)) => Some(a.cmp(b)),
		(Value::Null, Literal::Null) => Some(Ordering::Equal),
		_ => None,
	};

	let Some(ordering) = ordering else {
		return op == CmpOp::Ne;
	};
	match op {
		CmpOp::Eq => ordering == Ordering::Equal,
		CmpOp::Ne => ordering != Ordering::Equal,
		CmpOp::Lt => ordering == Ordering::Less,
		CmpOp::Le => ordering != Ordering::Greater,
		CmpOp::Gt => ordering == Ordering::Greater,
		CmpOp::Ge => ordering != Ordering::Less,
	}
}
