use super::*;

#[test]
fn parse_compile_specs() {
	let cli = Cli::try_parse_from(["tabula", "compile", "NAME", "AGE:.metadata.creationTimestamp|T"]).unwrap();
	assert!(!cli.verbose);
	assert_eq!(
		cli.command,
		Command::Compile {
			specs: vec!["NAME".into(), "AGE:.metadata.creationTimestamp|T".into()]
		}
	);
}

#[test]
fn compile_requires_a_spec() {
	assert!(Cli::try_parse_from(["tabula", "compile"]).is_err());
}

#[test]
fn parse_check_with_view() {
	let cli = Cli::try_parse_from(["tabula", "check", "views.toml", "--view", "v1/pods", "-v"]).unwrap();
	assert!(cli.verbose);
	assert_eq!(
		cli.command,
		Command::Check {
			file: PathBuf::from("views.toml"),
			view: Some("v1/pods".into()),
		}
	);
}

#[test]
fn subcommand_is_required() {
	assert!(Cli::try_parse_from(["tabula"]).is_err());
}
