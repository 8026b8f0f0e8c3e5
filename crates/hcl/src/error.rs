//! Error types for the document stages.

use thiserror::Error;

/// Errors raised while reading JSON text into a [`crate::Body`].
#[derive(Debug, Error)]
pub enum ParseError {
	/// The input is not well-formed JSON.
	#[error("syntax error at line {line}, column {column}: {message}")]
	Syntax {
		/// One-based line of the offending token.
		line: usize,
		/// One-based column of the offending token.
		column: usize,
		/// Diagnostic from the JSON reader.
		message: String,
	},

	/// The document root is not an object.
	#[error("document root must be an object, found {0}")]
	Root(&'static str),

	/// An object member has an empty name.
	#[error("empty key under {path:?}")]
	EmptyKey {
		/// Dotted path of the enclosing keys.
		path: String,
	},
}

impl From<serde_json::Error> for ParseError {
	fn from(error: serde_json::Error) -> Self {
		Self::Syntax {
			line: error.line(),
			column: error.column(),
			message: error.to_string(),
		}
	}
}

/// Errors raised while pretty-printing a [`crate::Body`].
#[derive(Debug, Error)]
pub enum PrintError {
	/// The output buffer rejected a write.
	#[error("failed to write output: {0}")]
	Fmt(#[from] std::fmt::Error),

	/// An item has no keys to print.
	#[error("item without keys")]
	MissingKey,

	/// A multi-key header carries something other than an object body.
	#[error("block {keys:?} must hold an object body")]
	InvalidBlock {
		/// Header keys of the offending item.
		keys: Vec<String>,
	},
}

/// Errors raised by a [`crate::StyleEnforcer`].
#[derive(Debug, Error)]
pub enum FormatError {
	/// Input is not valid UTF-8.
	#[error("input is not valid UTF-8: {0}")]
	Utf8(#[from] std::str::Utf8Error),

	/// Input is not valid HCL.
	#[error("invalid HCL: {0}")]
	Parse(#[source] hcl::Error),

	/// The parsed body could not be formatted.
	#[error("failed to format HCL: {0}")]
	Render(#[source] hcl::Error),

	/// Writing to the sink failed.
	#[error("failed to write output: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type for document parsing.
pub type Result<T> = std::result::Result<T, ParseError>;
