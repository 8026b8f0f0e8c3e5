//! Resource keys.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A `"<type>.<name>"` key split into its two parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey {
	/// Resource type, e.g. `aws_instance`.
	pub kind: String,
	/// Resource name within its type, e.g. `web`.
	pub name: String,
}

impl ResourceKey {
	/// Parses a `"<type>.<name>"` key.
	///
	/// # Errors
	///
	/// Returns [`Error::EmptyKey`] for `""` and [`Error::InvalidKey`] unless
	/// the key has exactly one dot with text on both sides.
	pub fn parse(key: &str) -> Result<Self> {
		if key.is_empty() {
			return Err(Error::EmptyKey);
		}

		let mut parts = key.split('.');
		match (parts.next(), parts.next(), parts.next()) {
			(Some(kind), Some(name), None) if !kind.is_empty() && !name.is_empty() => Ok(Self {
				kind: kind.to_string(),
				name: name.to_string(),
			}),
			_ => Err(Error::InvalidKey { key: key.to_string() }),
		}
	}
}

impl FromStr for ResourceKey {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}

impl fmt::Display for ResourceKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.kind, self.name)
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[test]
	fn splits_type_and_name() {
		let key: ResourceKey = "aws_instance.web".parse().unwrap();
		assert_eq!(key.kind, "aws_instance");
		assert_eq!(key.name, "web");
		assert_eq!(key.to_string(), "aws_instance.web");
	}

	#[test]
	fn rejects_empty_key() {
		assert!(matches!(ResourceKey::parse(""), Err(Error::EmptyKey)));
	}

	#[rstest]
	#[case::single_segment("only-one-segment")]
	#[case::empty_type(".web")]
	#[case::empty_name("aws_instance.")]
	#[case::lone_dot(".")]
	#[case::three_segments("aws_instance.web.extra")]
	fn rejects_malformed_keys(#[case] key: &str) {
		match ResourceKey::parse(key) {
			Err(Error::InvalidKey { key: rejected }) => assert_eq!(rejected, key),
			other => panic!("expected InvalidKey, got {other:?}"),
		}
	}
}
