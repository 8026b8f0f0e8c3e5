//! Canonical-style enforcement for rewritten documents.
//!
//! This is the last stage before bytes reach the output sink. The built-in
//! [`CanonicalStyle`] reads the text that [`crate::format`] leaves behind
//! with the `hcl` parser and writes it back out through the `hcl` formatter:
//!
//! * indentation is `indent_width` spaces per nesting level
//! * blocks are separated from their neighbours by exactly one blank line
//! * arrays are kept on one line unless `compact_arrays` is off
//!
//! Text the parser rejects is never written.

use std::io;

use hcl::format::{Format, Formatter};
use serde::{Deserialize, Serialize};

use crate::error::FormatError;


/// Final style pass writing a document to a sink.
pub trait StyleEnforcer {
	/// Validates `input` and writes its canonical form to `out`.
	///
	/// Implementations write nothing when validation fails.
	fn enforce(&self, input: &[u8], out: &mut dyn io::Write) -> Result<(), FormatError>;
}

/// Layout options for [`CanonicalStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StyleOptions {
	/// Spaces per nesting level.
	pub indent_width: usize,
	/// Print arrays on a single line.
	pub compact_arrays: bool,
}

impl Default for StyleOptions {
	fn default() -> Self {
		Self {
			indent_width: 2,
			compact_arrays: true,
		}
	}
}

/// Built-in [`StyleEnforcer`] backed by the `hcl` parser and formatter.
#[derive(Debug, Clone, Default)]
pub struct CanonicalStyle {
	options: StyleOptions,
}

impl CanonicalStyle {
	/// Creates an enforcer laying documents out according to `options`.
	pub fn new(options: StyleOptions) -> Self {
		Self { options }
	}

	/// Returns the canonical form of `input`.
	///
	/// # Errors
	///
	/// Returns [`FormatError::Parse`] if `input` is not valid HCL and
	/// [`FormatError::Render`] if the parsed body cannot be formatted.
	pub fn render(&self, input: &str) -> Result<String, FormatError> {
		let body = hcl::parse(input).map_err(FormatError::Parse)?;

		let indent = " ".repeat(self.options.indent_width);
		let mut out = Vec::with_capacity(input.len());
		{
			let mut formatter = Formatter::builder()
				.indent(indent.as_bytes())
				.compact_arrays(self.options.compact_arrays)
				.build(&mut out);
			body.format(&mut formatter).map_err(FormatError::Render)?;
		}
		tracing::trace!(bytes = out.len(), "enforced canonical style");

		Ok(String::from_utf8(out).map_err(|e| e.utf8_error())?)
	}
}

impl StyleEnforcer for CanonicalStyle {
	fn enforce(&self, input: &[u8], out: &mut dyn io::Write) -> Result<(), FormatError> {
		let rendered = self.render(std::str::from_utf8(input)?)?;
		out.write_all(rendered.as_bytes())?;
		Ok(())
	}
}
