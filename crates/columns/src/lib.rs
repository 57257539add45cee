//! Column specification compiler.
//!
//! Resource views describe each table column with a compact string:
//!
//! ```text
//! <name>[:<path>][|<flags>]
//!
//! NAME
//! IP:.status.podIP|W
//! AGE:.metadata.creationTimestamp|T
//! CPU:.status.cpu|N
//! ```
//!
//! Compilation runs in three stages:
//!
//! 1. [`spec::decompose`] splits the text into name, path and flags.
//! 2. The path is compiled by [`tabula_jsonpath::FieldPath::compile`].
//! 3. [`ColumnAttrs::from_flags`] folds the flag letters into display attributes.
//!
//! | flag | effect |
//! |------|--------|
//! | `H`  | hide |
//! | `W`  | wide only (clears show) |
//! | `S`  | always show (clears wide) |
//! | `L`  | align left |
//! | `R`  | align right |
//! | `T`  | render as age |
//! | `N`  | capacity value, align right |
//!
//! Flags apply left to right and each one assigns, so `X|WS` ends up shown
//! and `X|SW` ends up wide. Unknown flags are logged as warnings and skipped.
//!
//! Compilation is a pure function of the input string and is safe to run
//! from any number of threads.

pub mod attrs;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod spec;

pub use attrs::{Align, ColumnAttrs, ColumnFlag, FlagWarning};
pub use config::{CompiledView, EntryError, ViewSetting, ViewsConfig};
pub use descriptor::{ColumnDescriptor, ColumnSource, Compiled, HeaderColumn};
pub use error::{ColumnError, ConfigError, Result};
pub use tabula_jsonpath::{FieldPath, PathError};

/// Compiles one column specification. See [`ColumnDescriptor::compile`].
pub fn compile(spec: &str) -> Result<ColumnDescriptor> {
	ColumnDescriptor::compile(spec)
}
