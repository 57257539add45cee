use rstest::rstest;
use serde_json::json;

use super::*;

#[rstest]
#[case("metadata.name", "{.metadata.name}")]
#[case(".metadata.name", "{.metadata.name}")]
#[case("{metadata.name}", "{.metadata.name}")]
#[case("{.metadata.name}", "{.metadata.name}")]
#[case(".status.containerStatuses[0].ready", "{.status.containerStatuses[0].ready}")]
fn relax_normalizes_shorthand(#[case] raw: &str, #[case] expected: &str) {
	assert_eq!(relax(raw).unwrap(), expected);
}

#[test]
fn relax_passes_empty_through() {
	assert_eq!(relax("").unwrap(), "");
}

#[rstest]
#[case("{.metadata.name")]
#[case(".metadata.name}")]
#[case("{{.a}}")]
#[case("{}")]
#[case(".")]
fn relax_rejects_bad_braces(#[case] raw: &str) {
	let err = relax(raw).unwrap_err();
	assert_eq!(err.path, raw);
}

#[test]
fn compile_empty_path() {
	let path = FieldPath::compile("").unwrap();
	assert!(path.is_empty());
	assert_eq!(path.template(), "");
	assert!(path.evaluate(&json!({"a": 1})).is_empty());
	assert_eq!(path.render(&json!({"a": 1})), None);
}

#[test]
fn compile_reports_raw_input_on_parse_failure() {
	let err = FieldPath::compile("$invalid[[path").unwrap_err();
	assert_eq!(err.path, "$invalid[[path");
	assert!(err.to_string().contains("$invalid[[path"));
}

#[rstest]
#[case("spec.containers[")]
#[case("spec.containers[0")]
#[case("spec.containers[abc]")]
#[case("metadata..")]
#[case("items[?(@.a ~ 1)]")]
#[case("items['unterminated]")]
#[case("items[0:2:0]")]
fn compile_rejects_malformed_paths(#[case] raw: &str) {
	assert!(FieldPath::compile(raw).is_err(), "{raw} should not compile");
}

#[test]
fn render_scalar_and_string_values() {
	let pod = json!({
		"metadata": { "name": "nginx", "generation": 3 },
		"status": { "ready": true },
	});

	let name = FieldPath::compile(".metadata.name").unwrap();
	assert_eq!(name.render(&pod).as_deref(), Some("nginx"));

	let generation = FieldPath::compile("metadata.generation").unwrap();
	assert_eq!(generation.render(&pod).as_deref(), Some("3"));

	let ready = FieldPath::compile("{.status.ready}").unwrap();
	assert_eq!(ready.render(&pod).as_deref(), Some("true"));
}

#[test]
fn render_joins_multiple_results() {
	let pod = json!({
		"spec": { "containers": [ { "name": "app" }, { "name": "sidecar" } ] }
	});
	let names = FieldPath::compile(".spec.containers[*].name").unwrap();
	assert_eq!(names.render(&pod).as_deref(), Some("app sidecar"));
}

#[test]
fn render_missing_field_is_none() {
	let path = FieldPath::compile(".status.podIP").unwrap();
	assert_eq!(path.render(&json!({ "status": {} })), None);
}

#[test]
fn display_is_normalized_template() {
	let path: FieldPath = "metadata.labels".parse().unwrap();
	assert_eq!(path.to_string(), "{.metadata.labels}");
}

#[test]
fn serde_uses_template_string() {
	let path = FieldPath::compile("metadata.name").unwrap();
	let encoded = serde_json::to_string(&path).unwrap();
	assert_eq!(encoded, r#""{.metadata.name}""#);

	let decoded: FieldPath = serde_json::from_str(&encoded).unwrap();
	assert_eq!(decoded, path);

	assert!(serde_json::from_str::<FieldPath>(r#""a[[b""#).is_err());
}

#[test]
fn compiled_paths_are_independent_values() {
	let a = FieldPath::compile(".metadata.name").unwrap();
	let b = FieldPath::compile(".metadata.name").unwrap();
	assert_eq!(a, b);
	assert_eq!(a.clone(), b);
	assert_ne!(a, FieldPath::compile(".metadata.namespace").unwrap());
}

#[test]
fn field_path_is_send_and_sync() {
	fn assert_send_sync<T: Send + Sync>() {}
	assert_send_sync::<FieldPath>();
}
