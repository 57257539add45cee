use std::io::Write;

use pretty_assertions::assert_eq;

use super::*;

const VIEWS: &str = r#"
[views."v1/pods"]
columns = [
	"NAME",
	"IP:.status.podIP|W",
	"BROKEN:.spec[[",
	"AGE:.metadata.creationTimestamp|T",
	"***",
	"ODD|Q",
]

[views."apps/v1/deployments"]
columns = ["NAME", "READY:.status.readyReplicas|R"]
"#;

#[test]
fn parse_views() {
	let config = ViewsConfig::parse(VIEWS).unwrap();
	assert_eq!(config.views.len(), 2);
	assert_eq!(config.view("v1/pods").unwrap().columns.len(), 6);
	assert!(config.view("v1/services").is_none());
}

#[test]
fn parse_empty_document() {
	assert_eq!(ViewsConfig::parse("").unwrap(), ViewsConfig::default());
}

#[test]
fn parse_rejects_wrong_shape() {
	assert!(matches!(
		ViewsConfig::parse("views = 3"),
		Err(ConfigError::Toml(_))
	));
}

#[test]
fn compile_view_aggregates_per_entry() {
	let config = ViewsConfig::parse(VIEWS).unwrap();
	let view = config.compile_view("v1/pods").unwrap();

	let names: Vec<&str> = view.columns.iter().map(ColumnDescriptor::name).collect();
	assert_eq!(names, vec!["NAME", "IP", "AGE", "ODD"]);

	let failed: Vec<usize> = view.errors.iter().map(|e| e.index).collect();
	assert_eq!(failed, vec![2, 4]);
	assert!(matches!(view.errors[0].error, ColumnError::InvalidPath { .. }));
	assert_eq!(view.errors[1].error, ColumnError::MalformedSpec("***".to_string()));

	assert_eq!(view.warnings.len(), 1);
	assert_eq!(view.warnings[0].flag, 'Q');
	assert!(!view.is_clean());
}

#[test]
fn clean_view() {
	let config = ViewsConfig::parse(VIEWS).unwrap();
	let view = config.compile_view("apps/v1/deployments").unwrap();
	assert!(view.is_clean());

	let header = view.header();
	assert_eq!(header.len(), 2);
	assert_eq!(header[1].name, "READY");
	assert_eq!(header[1].attrs.align, crate::Align::Right);
}

#[test]
fn compile_all_is_ordered_by_name() {
	let config = ViewsConfig::parse(VIEWS).unwrap();
	let names: Vec<String> = config.compile_all().into_iter().map(|v| v.name).collect();
	assert_eq!(names, vec!["apps/v1/deployments", "v1/pods"]);
}

#[test]
fn entry_error_display() {
	let error = EntryError {
		index: 4,
		error: ColumnError::MalformedSpec("***".to_string()),
	};
	assert_eq!(error.to_string(), r#"column #4: invalid column definition "***""#);
}

#[test]
fn merge_replaces_views_by_name() {
	let mut base = ViewsConfig::parse(VIEWS).unwrap();
	let overlay = ViewsConfig::parse(
		r#"
[views."v1/pods"]
columns = ["NAME", "NODE:.spec.nodeName"]

[views."v1/services"]
columns = ["NAME"]
"#,
	)
	.unwrap();

	base.merge(overlay);
	assert_eq!(base.views.len(), 3);
	assert_eq!(base.view("v1/pods").unwrap().columns, vec!["NAME", "NODE:.spec.nodeName"]);
}

#[test]
fn load_from_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(VIEWS.as_bytes()).unwrap();

	let config = ViewsConfig::load(file.path()).unwrap();
	assert_eq!(config.views.len(), 2);
}

#[test]
fn load_missing_file_reports_path() {
	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join("views.toml");
	match ViewsConfig::load(&missing) {
		Err(ConfigError::Io { path, .. }) => assert_eq!(path, missing),
		other => panic!("expected Io error, got {other:?}"),
	}
}
