/// Colors used by the status indicator headline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorStyles {
	pub fg: String,
	pub bg: String,
	pub logo: String,
	/// Application version.
	pub revision: String,
	/// Context, cluster and server version.
	pub info_fg: String,
	pub cpu: String,
	pub mem: String,
	/// Separator between the CPU and memory figures.
	pub body_fg: String,
}

impl Default for IndicatorStyles {
	fn default() -> Self {
		Self {
			fg: "cadetblue".into(),
			bg: "black".into(),
			logo: "orange".into(),
			revision: "aqua".into(),
			info_fg: "white".into(),
			cpu: "lawngreen".into(),
			mem: "lawngreen".into(),
			body_fg: "cadetblue".into(),
		}
	}
}
