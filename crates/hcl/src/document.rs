//! Block-syntax document tree.
//!
//! A document is a [`Body`]: an ordered list of [`Item`]s. An item with a
//! single key is an attribute (`"key" = value`), an item with several keys is
//! a block whose header lists every key (`"resource" "type" "name" { ... }`).

use serde_json::Number;

/// Ordered contents of a document or of a `{ ... }` body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Body {
	/// Items in document order.
	pub items: Vec<Item>,
}

impl Body {
	/// Creates an empty body.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends an item at the end of the body.
	pub fn push(&mut self, item: Item) {
		self.items.push(item);
	}

	/// Iterates over the items in document order.
	pub fn iter(&self) -> impl Iterator<Item = &Item> {
		self.items.iter()
	}

	/// Number of items, not counting nested ones.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns `true` if the body holds no items.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl FromIterator<Item> for Body {
	fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
		Self {
			items: iter.into_iter().collect(),
		}
	}
}

/// A keyed entry of a [`Body`].
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
	/// Header keys, outermost first. Never empty for items produced by [`crate::parse`].
	pub keys: Vec<String>,
	/// Attribute value, or the body of a block.
	pub value: Value,
}

impl Item {
	/// Creates an item keyed by `keys`, outermost first.
	pub fn new(keys: Vec<String>, value: Value) -> Self {
		Self { keys, value }
	}

	/// Shorthand for a single-key item.
	pub fn attribute(key: impl Into<String>, value: Value) -> Self {
		Self::new(vec![key.into()], value)
	}

	/// Returns `true` when the item prints as a labelled block header.
	pub fn is_block(&self) -> bool {
		self.keys.len() > 1
	}
}

/// Value held by an [`Item`] or a list element.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// `null`, kept only as a list element.
	Null,
	/// `true` or `false`.
	Bool(bool),
	/// Number exactly as encoded.
	Number(Number),
	/// Unescaped string contents.
	String(String),
	/// `[ ... ]` elements in order.
	List(Vec<Value>),
	/// `{ ... }` body.
	Object(Body),
}

impl Value {
	/// Scalars print on a single line without nested structure.
	pub fn is_scalar(&self) -> bool {
		matches!(self, Self::Null | Self::Bool(_) | Self::Number(_) | Self::String(_))
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Number(value.into())
	}
}

impl From<Body> for Value {
	fn from(value: Body) -> Self {
		Self::Object(value)
	}
}
