//! Active and favorite namespace tracking.
//!
//! [`Namespace`] remembers the namespace a session is scoped to and a short,
//! most-recent-first list of favorites. The list never holds duplicates and
//! never grows beyond [`MAX_FAVORITES`]. Locking the favorites freezes the
//! list while still allowing the active namespace to change.

use serde::{Deserialize, Serialize};
use tracing::debug;


/// Number of favorite namespaces kept in the configuration.
pub const MAX_FAVORITES: usize = 9;

pub const DEFAULT_NAMESPACE: &str = "default";

/// Pseudo-namespace selecting every namespace.
pub const ALL_NAMESPACES: &str = "all";

pub const BLANK_NAMESPACE: &str = "";

/// Answers whether a namespace exists on the live connection.
pub trait NamespaceProbe {
	fn is_valid_namespace(&self, namespace: &str) -> bool;
}

impl<F> NamespaceProbe for F
where
	F: Fn(&str) -> bool,
{
	fn is_valid_namespace(&self, namespace: &str) -> bool {
		self(namespace)
	}
}

/// Tracks the active namespace and the favorites list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
	pub active: String,
	#[serde(default)]
	pub lock_favorites: bool,
	#[serde(default)]
	pub favorites: Vec<String>,
}

impl Default for Namespace {
	fn default() -> Self {
		Self::new()
	}
}

impl Namespace {
	/// Creates a tracker scoped to the default namespace.
	pub fn new() -> Self {
		Self::with_active(DEFAULT_NAMESPACE)
	}

	/// Creates a tracker scoped to `namespace`; blank means the default namespace.
	pub fn with_active(namespace: &str) -> Self {
		let active = if namespace == BLANK_NAMESPACE {
			DEFAULT_NAMESPACE
		} else {
			namespace
		};
		Self {
			active: active.to_string(),
			lock_favorites: false,
			favorites: vec![DEFAULT_NAMESPACE.to_string()],
		}
	}

	/// Makes `namespace` active and, unless locked, the first favorite.
	///
	/// A blank namespace selects all namespaces.
	pub fn set_active(&mut self, namespace: &str) {
		let namespace = if namespace == BLANK_NAMESPACE {
			ALL_NAMESPACES
		} else {
			namespace
		};
		self.active = namespace.to_string();

		if !self.lock_favorites {
			self.add_favorite(namespace);
		}
	}

	pub fn is_all_namespaces(&self) -> bool {
		self.active == ALL_NAMESPACES || self.active == BLANK_NAMESPACE
	}

	/// Appends favorites from a previous configuration that are not already
	/// present, then trims to [`MAX_FAVORITES`]. No-op when locked.
	pub fn merge(&mut self, old: &Namespace) {
		if self.lock_favorites {
			return;
		}
		for favorite in &old.favorites {
			if !self.favorites.contains(favorite) {
				self.favorites.push(favorite.clone());
			}
		}
		self.trim_favorites();
	}

	/// Drops favorites the connection does not know about.
	///
	/// Skipped entirely when the active namespace itself is invalid, since
	/// that usually means the connection cannot answer reliably.
	pub fn validate(&mut self, probe: &impl NamespaceProbe) {
		if !probe.is_valid_namespace(&self.active) {
			return;
		}

		if !self.lock_favorites {
			let all = self.is_all_namespaces();
			self.favorites.retain(|namespace| {
				let valid = probe.is_valid_namespace(namespace);
				if !valid {
					debug!(namespace = %namespace, all_namespaces = all, "Invalid favorite found");
				}
				valid
			});
		}

		self.trim_favorites();
	}

	/// Removes `namespace` from the favorites. No-op when locked.
	pub fn remove_favorite(&mut self, namespace: &str) {
		if self.lock_favorites {
			return;
		}
		if let Some(index) = self.favorites.iter().position(|f| f == namespace) {
			self.favorites.remove(index);
		}
	}

	fn add_favorite(&mut self, namespace: &str) {
		if self.favorites.iter().any(|f| f == namespace) {
			return;
		}
		self.favorites.insert(0, namespace.to_string());
		self.favorites.truncate(MAX_FAVORITES);
	}

	fn trim_favorites(&mut self) {
		if self.favorites.len() > MAX_FAVORITES {
			debug!(max = MAX_FAVORITES, "Number of favorites exceeds hard limit. Trimming.");
			self.favorites.truncate(MAX_FAVORITES);
		}
	}
}
