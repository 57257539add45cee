//! Status indicator shown in place of the collapsed header.
//!
//! The indicator owns two pieces of text: a permanent headline built from
//! cluster metadata, and the text currently on display. Flash messages
//! ([`StatusIndicator::info`], [`StatusIndicator::warn`],
//! [`StatusIndicator::err`]) replace the display text and schedule a reset
//! back to the headline after [`RESET_DELAY`]. A newer flash cancels the
//! pending reset of the previous one.
//!
//! Text uses `[color::attrs]` markup; drawing it is left to the caller,
//! which reads [`StatusIndicator::text`] on each redraw.

mod styles;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{trace, warn};

pub use styles::IndicatorStyles;

/// How long a flash message stays up.
pub const RESET_DELAY: Duration = Duration::from_secs(5);

const PRODUCT: &str = "Tabula";

/// Severity of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
	Info,
	Warn,
	Err,
}

impl FlashLevel {
	pub fn color(self) -> &'static str {
		match self {
			Self::Info => "lawngreen",
			Self::Warn => "mediumvioletred",
			Self::Err => "orangered",
		}
	}
}

/// Cluster facts shown in the headline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterMeta {
	pub app_version: String,
	pub context: String,
	pub cluster: String,
	pub server_version: String,
	/// CPU utilization in percent.
	pub cpu: i64,
	/// Memory utilization in percent.
	pub mem: i64,
}

/// Receives skin changes.
pub trait StylesListener {
	fn styles_changed(&self, styles: &IndicatorStyles);
}

/// Receives cluster metadata refreshes.
pub trait ClusterInfoListener {
	/// Full refresh; percentages are shown as-is.
	fn cluster_info_updated(&self, meta: &ClusterMeta);
	/// Incremental refresh; percentages carry a trend marker against `prev`.
	fn cluster_info_changed(&self, prev: &ClusterMeta, cur: &ClusterMeta);
}

#[derive(Debug)]
struct State {
	styles: IndicatorStyles,
	permanent: String,
	text: String,
	pending: Option<CancellationToken>,
}

/// Cheaply cloneable handle to one indicator; clones share state.
#[derive(Debug, Clone)]
pub struct StatusIndicator {
	state: Arc<Mutex<State>>,
	delay: Duration,
}

impl StatusIndicator {
	pub fn new(styles: IndicatorStyles) -> Self {
		Self::with_delay(styles, RESET_DELAY)
	}

	/// Creates an indicator whose flashes last `delay`.
	pub fn with_delay(styles: IndicatorStyles, delay: Duration) -> Self {
		Self {
			state: Arc::new(Mutex::new(State {
				styles,
				permanent: String::new(),
				text: String::new(),
				pending: None,
			})),
			delay,
		}
	}

	/// The text to draw right now.
	pub fn text(&self) -> String {
		self.state.lock().text.clone()
	}

	pub fn permanent(&self) -> String {
		self.state.lock().permanent.clone()
	}

	pub fn styles(&self) -> IndicatorStyles {
		self.state.lock().styles.clone()
	}

	/// Sets the headline that flashes reset to, and shows it immediately.
	pub fn set_permanent(&self, info: impl Into<String>) {
		let mut state = self.state.lock();
		state.permanent = info.into();
		state.text = state.permanent.clone();
	}

	/// Drops any flash message and shows the headline again.
	pub fn reset(&self) {
		let mut state = self.state.lock();
		if let Some(pending) = state.pending.take() {
			pending.cancel();
		}
		state.text = state.permanent.clone();
	}

	pub fn info(&self, msg: &str) {
		self.flash(FlashLevel::Info, msg);
	}

	pub fn warn(&self, msg: &str) {
		self.flash(FlashLevel::Warn, msg);
	}

	pub fn err(&self, msg: &str) {
		self.flash(FlashLevel::Err, msg);
	}

	/// Shows `msg` until the reset delay elapses or another flash replaces it.
	///
	/// The reset runs on the ambient tokio runtime. Without one the message
	/// stays up until [`Self::reset`] is called.
	pub fn flash(&self, level: FlashLevel, msg: &str) {
		let token = CancellationToken::new();
		{
			let mut state = self.state.lock();
			if let Some(previous) = state.pending.replace(token.clone()) {
				previous.cancel();
			}
			state.text = format!("[{}::b] <{msg}> ", level.color());
		}

		let Ok(handle) = Handle::try_current() else {
			warn!(?level, "No async runtime; status flash will not reset on its own");
			return;
		};

		let deadline = Instant::now() + self.delay;
		let state = Arc::clone(&self.state);
		handle.spawn(async move {
			tokio::select! {
				_ = token.cancelled() => {}
				_ = tokio::time::sleep_until(deadline) => {
					let mut state = state.lock();
					// A newer flash cancels under the lock, so this check cannot race it.
					if !token.is_cancelled() {
						trace!("Status flash expired");
						state.pending = None;
						state.text = state.permanent.clone();
					}
				}
			}
		});
	}

	fn headline(&self, meta: &ClusterMeta, cpu: String, mem: String) -> String {
		let styles = self.state.lock().styles.clone();
		format!(
			"[{}::b]{PRODUCT} [{}::]{} [{}::]{}:{}:{} [{}::]{}[{}::]::[{}::]{}",
			styles.logo,
			styles.revision,
			meta.app_version,
			styles.info_fg,
			meta.context,
			meta.cluster,
			meta.server_version,
			styles.cpu,
			cpu,
			styles.body_fg,
			styles.mem,
			mem,
		)
	}
}

impl StylesListener for StatusIndicator {
	fn styles_changed(&self, styles: &IndicatorStyles) {
		self.state.lock().styles = styles.clone();
	}
}

impl ClusterInfoListener for StatusIndicator {
	fn cluster_info_updated(&self, meta: &ClusterMeta) {
		let headline = self.headline(meta, print_perc(meta.cpu), print_perc(meta.mem));
		self.set_permanent(headline);
	}

	fn cluster_info_changed(&self, prev: &ClusterMeta, cur: &ClusterMeta) {
		let headline = self.headline(
			cur,
			as_perc_delta(prev.cpu, cur.cpu),
			as_perc_delta(prev.mem, cur.mem),
		);
		self.set_permanent(headline);
	}
}

/// Trend marker for an increase.
pub const PLUS_SIGN: &str = "[red::b]↑";
/// Trend marker for a decrease.
pub const MINUS_SIGN: &str = "[green::b]↓";

pub fn print_perc(value: i64) -> String {
	format!("{value}%")
}

/// Formats `cur` as a percentage followed by its trend against `prev`.
pub fn as_perc_delta(prev: i64, cur: i64) -> String {
	let sign = match prev.cmp(&cur) {
		std::cmp::Ordering::Less => PLUS_SIGN,
		std::cmp::Ordering::Greater => MINUS_SIGN,
		std::cmp::Ordering::Equal => "",
	};
	format!("{cur}%{sign}")
}
