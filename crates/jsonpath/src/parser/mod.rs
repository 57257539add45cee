//! # Parser
//!
//! Recursive-descent parser for normalized path templates such as
//! `{.metadata.labels['app.kubernetes.io/name']}`.
//!
//! ## Supported Syntax
//!
//! ```text
//! template = "{" segment* "}"
//! segment  = ".." (ident | "*")
//!          | "." (ident | "*")?
//!          | "[" bracket "]"
//! bracket  = "*" | "?(" filter ")" | quoted ("," quoted)* | int ("," int)* | slice
//! slice    = int? ":" int? (":" int)?
//! filter   = "@" ("." ident)* (op literal)?
//! op       = "==" | "!=" | "<" | "<=" | ">" | ">="
//! literal  = quoted | number | "true" | "false" | "null"
//! ```

use crate::error::{PathError, Result};
use crate::segment::{CmpOp, Filter, Literal, Segment};


/// Maintains the parser's state for recursive descent parsing.
struct Parser<'a> {
	/// The complete template, kept for error reporting.
	source: &'a str,
	/// The unconsumed remainder of the template.
	input: &'a str,
	/// Current byte position in the template.
	position: usize,
}

impl<'a> Parser<'a> {
	fn new(source: &'a str) -> Self {
		Self {
			source,
			input: source,
			position: 0,
		}
	}

	fn peek(&self) -> Option<char> {
		self.input.chars().next()
	}

	fn peek_at(&self, n: usize) -> Option<char> {
		self.input.chars().nth(n)
	}

	/// Consumes and returns the next character, advancing the parser.
	fn next(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.position += ch.len_utf8();
		self.input = &self.input[ch.len_utf8()..];
		Some(ch)
	}

	fn is_end(&self) -> bool {
		self.input.is_empty()
	}

	/// Consumes the next character if it matches the expected one.
	///
	/// # Errors
	///
	/// Returns a [`PathError`] if the character doesn't match or if input is exhausted.
	fn take(&mut self, expected: char) -> Result<()> {
		match self.peek() {
			Some(ch) if ch == expected => {
				self.next();
				Ok(())
			}
			Some(ch) => Err(self.error(format!("expected '{expected}', found '{ch}'"))),
			None => Err(self.error(format!("expected '{expected}', found end of input"))),
		}
	}

	/// Consumes `expected` if it is next, reporting whether it did.
	fn eat(&mut self, expected: char) -> bool {
		if self.peek() == Some(expected) {
			self.next();
			true
		} else {
			false
		}
	}

	fn eat_str(&mut self, expected: &str) -> bool {
		if self.input.starts_with(expected) {
			self.position += expected.len();
			self.input = &self.input[expected.len()..];
			true
		} else {
			false
		}
	}

	/// Consumes and returns characters that satisfy a predicate.
	fn take_while<F>(&mut self, predicate: F) -> String
	where
		F: Fn(char) -> bool,
	{
		let mut result = String::new();
		while let Some(ch) = self.peek() {
			if !predicate(ch) {
				break;
			}
			result.push(ch);
			self.next();
		}
		result
	}

	fn skip_spaces(&mut self) {
		while self.peek().is_some_and(char::is_whitespace) {
			self.next();
		}
	}

	/// Creates a [`PathError`] at the current parser position.
	fn error(&self, message: impl Into<String>) -> PathError {
		self.error_at(self.position, message)
	}

	fn error_at(&self, position: usize, message: impl Into<String>) -> PathError {
		PathError::new(self.source, position, message)
	}
}

/// Parses a normalized `{...}` template into its segments.
///
/// `{.}` yields no segments and therefore selects the root node.
pub(crate) fn parse_template(template: &str) -> Result<Vec<Segment>> {
	let mut parser = Parser::new(template);
	parser.take('{')?;

	let mut segments = Vec::new();
	while !matches!(parser.peek(), Some('}') | None) {
		if let Some(segment) = parse_segment(&mut parser)? {
			segments.push(segment);
		}
	}
	parser.take('}')?;

	if !parser.is_end() {
		return Err(parser.error(format!("expected end of input, found '{}'", parser.input)));
	}

	Ok(segments)
}

/// Parses one segment. A lone `.` before `[` or the closing brace is a no-op.
fn parse_segment(parser: &mut Parser) -> Result<Option<Segment>> {
	match parser.peek() {
		Some('.') if parser.peek_at(1) == Some('.') => {
			parser.eat_str("..");
			if parser.eat('*') {
				return Ok(Some(Segment::RecursiveWildcard));
			}
			parse_ident(parser).map(|name| Some(Segment::RecursiveKey(name)))
		}
		Some('.') => {
			parser.next();
			match parser.peek() {
				Some('*') => {
					parser.next();
					Ok(Some(Segment::Wildcard))
				}
				Some('[' | '}') | None => Ok(None),
				_ => parse_ident(parser).map(|name| Some(Segment::Key(name))),
			}
		}
		Some('[') => parse_bracket(parser).map(Some),
		Some(ch) => Err(parser.error(format!("expected '.' or '[', found '{ch}'"))),
		None => Err(parser.error("unexpected end of input")),
	}
}

fn is_ident_char(ch: char) -> bool {
	ch.is_alphanumeric() || matches!(ch, '_' | '-' | '/')
}

fn parse_ident(parser: &mut Parser) -> Result<String> {
	let name = parser.take_while(is_ident_char);
	if !name.is_empty() {
		return Ok(name);
	}
	match parser.peek() {
		Some(ch) => Err(parser.error(format!("expected field name, found '{ch}'"))),
		None => Err(parser.error("expected field name, found end of input")),
	}
}

fn parse_bracket(parser: &mut Parser) -> Result<Segment> {
	parser.take('[')?;
	parser.skip_spaces();

	let segment = match parser.peek() {
		Some('*') => {
			parser.next();
			Segment::Wildcard
		}
		Some('?') => {
			parser.next();
			Segment::Filter(parse_filter(parser)?)
		}
		Some('\'' | '"') => parse_keys(parser)?,
		Some(ch) if ch == '-' || ch == ':' || ch.is_ascii_digit() => parse_indices(parser)?,
		Some(ch) => return Err(parser.error(format!("invalid bracket expression starting with '{ch}'"))),
		None => return Err(parser.error("unterminated bracket")),
	};

	parser.skip_spaces();
	parser.take(']')?;
	Ok(segment)
}

fn parse_keys(parser: &mut Parser) -> Result<Segment> {
	let mut keys = vec![parse_quoted(parser)?];
	parser.skip_spaces();
	while parser.eat(',') {
		parser.skip_spaces();
		keys.push(parse_quoted(parser)?);
		parser.skip_spaces();
	}

	if keys.len() == 1 {
		Ok(Segment::Key(keys.remove(0)))
	} else {
		Ok(Segment::Keys(keys))
	}
}

/// Parses a single- or double-quoted string; `\` escapes the next character.
fn parse_quoted(parser: &mut Parser) -> Result<String> {
	let start = parser.position;
	let quote = match parser.next() {
		Some(ch @ ('\'' | '"')) => ch,
		Some(ch) => return Err(parser.error_at(start, format!("expected quoted string, found '{ch}'"))),
		None => return Err(parser.error_at(start, "expected quoted string, found end of input")),
	};

	let mut value = String::new();
	loop {
		match parser.next() {
			Some('\\') => match parser.next() {
				Some(ch) => value.push(ch),
				None => break,
			},
			Some(ch) if ch == quote => return Ok(value),
			Some(ch) => value.push(ch),
			None => break,
		}
	}
	Err(parser.error_at(start, "unterminated quoted string"))
}

fn parse_indices(parser: &mut Parser) -> Result<Segment> {
	let first = parse_int(parser)?;
	parser.skip_spaces();

	if parser.eat(':') {
		let end = parse_int(parser)?;
		parser.skip_spaces();
		let step = if parser.eat(':') { parse_int(parser)?.unwrap_or(1) } else { 1 };
		if step <= 0 {
			return Err(parser.error("slice step must be positive"));
		}
		return Ok(Segment::Slice { start: first, end, step });
	}

	let Some(first) = first else {
		return Err(parser.error("expected array index"));
	};
	let mut indices = vec![first];
	while parser.eat(',') {
		match parse_int(parser)? {
			Some(index) => indices.push(index),
			None => return Err(parser.error("expected array index")),
		}
		parser.skip_spaces();
	}
	Ok(Segment::Indices(indices))
}

/// Parses an optionally negative integer, or nothing.
fn parse_int(parser: &mut Parser) -> Result<Option<i64>> {
	parser.skip_spaces();
	let start = parser.position;
	let negative = parser.eat('-');
	let digits = parser.take_while(|ch| ch.is_ascii_digit());

	if digits.is_empty() {
		if negative {
			return Err(parser.error("expected digits after '-'"));
		}
		return Ok(None);
	}

	let text = if negative { format!("-{digits}") } else { digits };
	text.parse()
		.map(Some)
		.map_err(|_| parser.error_at(start, format!("array index out of range: {text}")))
}

fn parse_filter(parser: &mut Parser) -> Result<Filter> {
	parser.take('(')?;
	parser.skip_spaces();
	parser.take('@')?;

	let mut path = Vec::new();
	while parser.eat('.') {
		path.push(parse_ident(parser)?);
	}
	parser.skip_spaces();

	let comparison = if parser.peek() == Some(')') {
		None
	} else {
		let op = parse_cmp_op(parser)?;
		parser.skip_spaces();
		let literal = parse_literal(parser)?;
		parser.skip_spaces();
		Some((op, literal))
	};

	parser.take(')')?;
	Ok(Filter { path, comparison })
}

fn parse_cmp_op(parser: &mut Parser) -> Result<CmpOp> {
	let op = if parser.eat_str("==") {
		CmpOp::Eq
	} else if parser.eat_str("!=") {
		CmpOp::Ne
	} else if parser.eat_str("<=") {
		CmpOp::Le
	} else if parser.eat_str(">=") {
		CmpOp::Ge
	} else if parser.eat('<') {
		CmpOp::Lt
	} else if parser.eat('>') {
		CmpOp::Gt
	} else {
		return Err(parser.error("expected comparison operator"));
	};
	Ok(op)
}

fn parse_literal(parser: &mut Parser) -> Result<Literal> {
	let start = parser.position;
	match parser.peek() {
		Some('\'' | '"') => parse_quoted(parser).map(Literal::String),
		Some(ch) if ch == '-' || ch.is_ascii_digit() => {
			let text = parser.take_while(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | 'e' | 'E'));
			text.parse()
				.map(Literal::Number)
				.map_err(|_| parser.error_at(start, format!("invalid number literal '{text}'")))
		}
		_ => {
			let word = parser.take_while(|ch| ch.is_ascii_alphabetic());
			match word.as_str() {
				"true" => Ok(Literal::Bool(true)),
				"false" => Ok(Literal::Bool(false)),
				"null" => Ok(Literal::Null),
				_ => Err(parser.error_at(start, "expected literal")),
			}
		}
	}
}
