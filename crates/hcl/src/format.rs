//! Canonicalizing text rewrites applied to printed documents.
//!
//! The printer quotes every key and spells nested objects as assignments.
//! The rules below rewrite that output, in table order, over the whole text:
//!
//! 1. `"key" =` becomes `key =` unless the key starts with a digit
//! 2. `key = {` becomes `key {`, except `tags = {`
//! 3. a blank line is inserted before every line opening a block
//! 4. every `\n\n` collapses to `\n`
//! 5. a blank line is inserted after every line ending in `}`
//! 6. `"type" "a" "b" {` becomes `type "a" "b" {`
//!
//! Each rule sees the output of the previous one, so the order is part of the
//! contract. Rule 5 makes the whole pass non-idempotent: run it exactly once
//! per document.
//!
//! Patterns use explicit ASCII classes: `\w` is `[0-9A-Za-z_]`, `\d` is
//! `[0-9]` and whitespace is `[\t\n\f\r ]`.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::bytes::{Captures, Regex};

#[cfg(test)]
mod tests;

/// Attribute that keeps its assignment spelling because its value is a map,
/// not a nested block.
pub const MAP_ATTRIBUTE: &str = "tags";

const IDENT: &str = "[0-9A-Za-z_-]";
const IDENT_DOTTED: &str = "[0-9A-Za-z_.-]";
const SPACE: &str = r"[\t\n\f\r ]";

/// How a matched span is rewritten.
enum Rewrite {
	/// Replacement template; `${n}` expands to capture group `n`.
	Template(&'static [u8]),
	/// Replacement computed from the whole match.
	Func(fn(&[u8]) -> Vec<u8>),
}

struct Rule {
	name: &'static str,
	pattern: Regex,
	rewrite: Rewrite,
}

impl Rule {
	fn new(name: &'static str, pattern: &str, rewrite: Rewrite) -> Self {
		Self {
			name,
			pattern: Regex::new(pattern).expect("formatter pattern must compile"),
			rewrite,
		}
	}

	fn apply<'t>(&self, text: &'t [u8]) -> Cow<'t, [u8]> {
		match self.rewrite {
			Rewrite::Template(template) => self.pattern.replace_all(text, template),
			Rewrite::Func(f) => self.pattern.replace_all(text, |caps: &Captures<'_>| f(&caps[0])),
		}
	}
}

static RULES: LazyLock<[Rule; 6]> = LazyLock::new(|| {
	[
		Rule::new(
			"unquote-keys",
			&format!(r#""([^0-9]{IDENT}+)"{SPACE}="#),
			Rewrite::Template(b"${1} ="),
		),
		Rule::new(
			"unwrap-block-assignments",
			&format!(r"({IDENT}+){SPACE}={SPACE}\{{"),
			Rewrite::Func(unwrap_block_assignment),
		),
		Rule::new(
			"blank-before-blocks",
			&format!(r"\n(\t*)(?:({IDENT_DOTTED}+{SPACE}\{{)|({IDENT_DOTTED}+{SPACE}={SPACE}\{{))"),
			Rewrite::Template(b"\n\n${1}${2}${3}"),
		),
		Rule::new("collapse-blank-lines", r"\n\n", Rewrite::Template(b"\n")),
		Rule::new("blank-after-blocks", r"\}\n", Rewrite::Template(b"}\n\n")),
		Rule::new(
			"unquote-block-type",
			&format!(
				r#""({IDENT_DOTTED}+)"{SPACE}("{IDENT_DOTTED}+"){SPACE}("{IDENT_DOTTED}+"){SPACE}\{{"#
			),
			Rewrite::Template(b"${1} ${2} ${3} {"),
		),
	]
});

/// Drops the `= ` of a `key = {` match, leaving `tags = {` untouched.
fn unwrap_block_assignment(m: &[u8]) -> Vec<u8> {
	if m.strip_suffix(b" = {") == Some(MAP_ATTRIBUTE.as_bytes()) {
		return m.to_vec();
	}
	match m.windows(2).position(|w| w == b"= ") {
		Some(at) => [&m[..at], &m[at + 2..]].concat(),
		None => m.to_vec(),
	}
}

/// Applies every rule, in order, to `input`.
///
/// Total over any input: a rule that matches nothing leaves the text as is.
pub fn format(input: &[u8]) -> Vec<u8> {
	let mut text = input.to_vec();
	for rule in RULES.iter() {
		let rewritten = match rule.apply(&text) {
			Cow::Borrowed(_) => continue,
			Cow::Owned(rewritten) => rewritten,
		};
		tracing::trace!(rule = rule.name, "rewrote document");
		text = rewritten;
	}
	text
}

/// [`format`] for text input.
pub fn format_str(input: &str) -> String {
	// Matches always start and end on character boundaries.
	String::from_utf8_lossy(&format(input.as_bytes())).into_owned()
}
