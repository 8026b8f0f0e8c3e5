//! Error types for resource writers.

use hclw_hcl::{FormatError, ParseError, PrintError};
use thiserror::Error;

/// Errors returned by [`crate::Writer`] implementations.
///
/// The first four variants reject caller input before anything is stored.
/// The others come from [`crate::Writer::sync`] and name the stage that failed.
#[derive(Debug, Error)]
pub enum Error {
	/// The key is the empty string.
	#[error("a key is required")]
	EmptyKey,

	/// The value is `null`.
	#[error("a value is required")]
	NilValue,

	/// The key is not of the form `"<type>.<name>"`.
	#[error("invalid key {key:?}: expected \"<type>.<name>\"")]
	InvalidKey {
		/// The rejected key.
		key: String,
	},

	/// The key has already been written.
	#[error("key {key:?} already exists")]
	DuplicateKey {
		/// The repeated key.
		key: String,
	},

	/// A value could not be encoded as JSON.
	#[error("encoding stage failed: {0}")]
	Encoding(#[source] serde_json::Error),

	/// The encoded document could not be read back as a block document.
	#[error("parse stage failed: {0}")]
	Parse(#[source] ParseError),

	/// The block document could not be printed.
	#[error("print stage failed: {0}")]
	Print(#[source] PrintError),

	/// The canonical-style pass rejected the document or could not write it.
	#[error("format stage failed: {0}")]
	Format(#[source] FormatError),
}

impl Error {
	/// Returns `true` for errors caused by the arguments of a write.
	pub fn is_input_error(&self) -> bool {
		matches!(
			self,
			Self::EmptyKey | Self::NilValue | Self::InvalidKey { .. } | Self::DuplicateKey { .. }
		)
	}
}

/// Result type for writer operations.
pub type Result<T> = std::result::Result<T, Error>;
