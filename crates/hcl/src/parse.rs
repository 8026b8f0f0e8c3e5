//! JSON text into a block-structured [`Body`].
//!
//! Object member order is preserved, so a given JSON document always yields
//! the same item order.
//!
//! Root members whose value is an object made only of objects are flattened
//! into block headers: `{"resource": {"aws_instance": {"web": {..}}}}`
//! becomes a single item keyed `resource aws_instance web`. Flattening stops
//! at [`MAX_BLOCK_KEYS`] keys, so resource bodies whose attributes happen to
//! all be objects are not folded into the header. It also stops as soon as a
//! level holds anything but objects: `{"resource": {"aws_instance": {"web": "x"}}}`
//! yields a two-key block `resource aws_instance` holding the attribute
//! `web = "x"`, which later stages print with a quoted block type that the
//! canonical-style pass rejects.
//!
//! Inside bodies:
//! * arrays made only of non-empty objects expand into one item per element,
//!   all sharing the same key (repeated nested blocks)
//! * `null` members are dropped; `null` list elements are kept

use serde_json::{Map, Value as Json};

use crate::document::{Body, Item, Value};
use crate::error::{ParseError, Result};

/// Maximum number of keys folded into one block header.
pub const MAX_BLOCK_KEYS: usize = 3;


/// Parses JSON text into a document body.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] for malformed JSON, [`ParseError::Root`] when
/// the root is not an object and [`ParseError::EmptyKey`] for empty member names.
pub fn parse(input: &[u8]) -> Result<Body> {
	let root: Json = serde_json::from_slice(input)?;
	let Json::Object(members) = root else {
		return Err(ParseError::Root(kind(&root)));
	};

	let mut body = Body::new();
	for (key, value) in members {
		check_key(&[], &key)?;
		flatten_into(&mut body, vec![key], value)?;
	}
	Ok(body)
}

fn flatten_into(body: &mut Body, keys: Vec<String>, value: Json) -> Result<()> {
	match value {
		Json::Object(members) if keys.len() < MAX_BLOCK_KEYS && is_object_of_objects(&members) => {
			for (key, child) in members {
				check_key(&keys, &key)?;
				let mut child_keys = keys.clone();
				child_keys.push(key);
				flatten_into(body, child_keys, child)?;
			}
			Ok(())
		}
		value => push_items(body, &[], keys, value),
	}
}

/// Pushes `keys = value` into `body`, where `parent` is the path of the body
/// itself and only serves error reporting.
fn push_items(body: &mut Body, parent: &[String], keys: Vec<String>, value: Json) -> Result<()> {
	let path = [parent, keys.as_slice()].concat();
	match value {
		Json::Null => Ok(()),
		Json::Array(elements) if is_list_of_objects(&elements) => {
			for element in elements {
				body.push(Item::new(keys.clone(), convert(&path, element)?));
			}
			Ok(())
		}
		value => {
			let value = convert(&path, value)?;
			body.push(Item::new(keys, value));
			Ok(())
		}
	}
}

fn convert(path: &[String], value: Json) -> Result<Value> {
	Ok(match value {
		Json::Null => Value::Null,
		Json::Bool(b) => Value::Bool(b),
		Json::Number(n) => Value::Number(n),
		Json::String(s) => Value::String(s),
		Json::Array(elements) => Value::List(
			elements
				.into_iter()
				.map(|element| convert(path, element))
				.collect::<Result<_>>()?,
		),
		Json::Object(members) => {
			let mut body = Body::new();
			for (key, child) in members {
				check_key(path, &key)?;
				push_items(&mut body, path, vec![key], child)?;
			}
			Value::Object(body)
		}
	})
}

fn check_key(path: &[String], key: &str) -> Result<()> {
	if key.is_empty() {
		return Err(ParseError::EmptyKey { path: path.join(".") });
	}
	Ok(())
}

fn is_object_of_objects(members: &Map<String, Json>) -> bool {
	!members.is_empty() && members.values().all(Json::is_object)
}

fn is_list_of_objects(elements: &[Json]) -> bool {
	!elements.is_empty()
		&& elements
			.iter()
			.all(|e| e.as_object().is_some_and(|members| !members.is_empty()))
}

fn kind(value: &Json) -> &'static str {
	match value {
		Json::Null => "null",
		Json::Bool(_) => "a boolean",
		Json::Number(_) => "a number",
		Json::String(_) => "a string",
		Json::Array(_) => "an array",
		Json::Object(_) => "an object",
	}
}
