//! Human-readable summaries of compiled views.

use std::fmt::Write;

use tabula_columns::{Align, ColumnAttrs, ColumnDescriptor, ColumnSource, CompiledView};


/// Reconstructs a canonical flag string from attributes.
///
/// `R` is omitted when implied by `N`.
pub fn flag_summary(attrs: &ColumnAttrs) -> String {
	let mut flags = String::new();
	if attrs.capacity {
		flags.push('N');
	}
	if attrs.time {
		flags.push('T');
	}
	if attrs.wide {
		flags.push('W');
	}
	if attrs.show {
		flags.push('S');
	}
	if attrs.hide {
		flags.push('H');
	}
	match (attrs.align, attrs.capacity) {
		(Align::Right, false) => flags.push('R'),
		(Align::Left, true) => flags.push('L'),
		_ => {}
	}
	flags
}

fn source_summary(column: &ColumnDescriptor) -> String {
	match column.source() {
		ColumnSource::Path(path) if path.is_empty() => "(by name)".to_string(),
		ColumnSource::Path(path) => path.to_string(),
		ColumnSource::Slot(index) => format!("slot {index}"),
	}
}

/// One block per view: a header line, its columns, then problems.
pub fn render_view(view: &CompiledView) -> String {
	let mut out = String::new();
	let _ = writeln!(
		out,
		"{}: {} column(s), {} error(s), {} warning(s)",
		view.name,
		view.columns.len(),
		view.errors.len(),
		view.warnings.len()
	);

	let width = view.columns.iter().map(|c| c.name().len()).max().unwrap_or(0);
	for column in &view.columns {
		let flags = flag_summary(column.attrs());
		let _ = write!(out, "  {:<width$}  {}", column.name(), source_summary(column));
		if !flags.is_empty() {
			let _ = write!(out, "  [{flags}]");
		}
		out.push('\n');
	}

	for error in &view.errors {
		let _ = writeln!(out, "  error: {error}");
	}
	for warning in &view.warnings {
		let _ = writeln!(out, "  warning: {warning}");
	}
	out
}
