//! Column display attributes and the flag letters that set them.

use std::fmt;

use serde::Serialize;


/// Horizontal alignment of a column's cells.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Align {
	#[default]
	Left,
	Right,
}

/// A recognized flag letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnFlag {
	/// `N`: numeric capacity value, right aligned.
	Number,
	/// `T`: timestamp rendered as an age.
	Age,
	/// `W`: only shown in wide mode.
	Wide,
	/// `S`: always shown, even when it would otherwise be wide-only.
	Show,
	/// `L`: left aligned.
	AlignLeft,
	/// `R`: right aligned.
	AlignRight,
	/// `H`: hidden.
	Hide,
}

impl ColumnFlag {
	pub const ALL: [ColumnFlag; 7] = [
		Self::Number,
		Self::Age,
		Self::Wide,
		Self::Show,
		Self::AlignLeft,
		Self::AlignRight,
		Self::Hide,
	];

	pub fn as_char(self) -> char {
		match self {
			Self::Number => 'N',
			Self::Age => 'T',
			Self::Wide => 'W',
			Self::Show => 'S',
			Self::AlignLeft => 'L',
			Self::AlignRight => 'R',
			Self::Hide => 'H',
		}
	}

	/// Applies this flag's rule. Each rule assigns; `W` and `S` both
	/// overwrite the wide/show pair, so the last of them wins.
	pub fn apply(self, attrs: &mut ColumnAttrs) {
		match self {
			Self::Hide => attrs.hide = true,
			Self::Wide => (attrs.wide, attrs.show) = (true, false),
			Self::Show => (attrs.show, attrs.wide) = (true, false),
			Self::AlignLeft => attrs.align = Align::Left,
			Self::AlignRight => attrs.align = Align::Right,
			Self::Age => attrs.time = true,
			Self::Number => (attrs.capacity, attrs.align) = (true, Align::Right),
		}
	}
}

impl TryFrom<char> for ColumnFlag {
	type Error = char;

	fn try_from(ch: char) -> Result<Self, Self::Error> {
		Self::ALL.into_iter().find(|flag| flag.as_char() == ch).ok_or(ch)
	}
}

impl fmt::Display for ColumnFlag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_char())
	}
}

/// Display attributes of one column.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColumnAttrs {
	pub align: Align,
	pub wide: bool,
	pub show: bool,
	pub hide: bool,
	pub time: bool,
	pub capacity: bool,
	/// Metrics column. Reserved for the metrics subsystem; never set from flags.
	pub mx: bool,
	/// Metrics CPU column. Reserved, as `mx`.
	pub mxc: bool,
	/// Metrics memory column. Reserved, as `mx`.
	pub mxm: bool,
}

impl ColumnAttrs {
	/// Folds `flags` left to right over the default attributes.
	///
	/// Characters that are not flag letters are handed to `on_unknown` and
	/// otherwise ignored.
	pub fn from_flags(flags: &str, mut on_unknown: impl FnMut(char)) -> Self {
		flags.chars().fold(Self::default(), |mut attrs, ch| {
			match ColumnFlag::try_from(ch) {
				Ok(flag) => flag.apply(&mut attrs),
				Err(unknown) => on_unknown(unknown),
			}
			attrs
		})
	}
}

/// A flag character that matched no rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagWarning {
	pub flag: char,
	/// The full column specification the flag came from.
	pub spec: String,
}

impl fmt::Display for FlagWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unknown column attribute '{}' in {:?}", self.flag, self.spec)
	}
}
