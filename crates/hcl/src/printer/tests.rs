use pretty_assertions::assert_eq;

use super::*;
use crate::parse;

fn printed(json: &str) -> String {
	to_string(&parse(json.as_bytes()).unwrap()).unwrap()
}

#[test]
fn prints_resource_block() {
	let out = printed(r#"{"resource":{"aws_instance":{"web":{"ami":"x","tags":{"env":"prod"}}}}}"#);

	assert_eq!(
		out,
		"\"resource\" \"aws_instance\" \"web\" {\n\
		 \t\"ami\" = \"x\"\n\
		 \t\"tags\" = {\n\
		 \t\t\"env\" = \"prod\"\n\
		 \t}\n\
		 }\n"
	);
}

#[test]
fn prints_scalars() {
	let out = printed(r#"{"a":true,"b":1.5,"c":-3,"d":[]}"#);
	assert_eq!(out, "\"a\" = true\n\"b\" = 1.5\n\"c\" = -3\n\"d\" = []\n");
}

#[test]
fn prints_scalar_lists_inline() {
	let out = printed(r#"{"groups":["a","b",null,2]}"#);
	assert_eq!(out, "\"groups\" = [\"a\", \"b\", null, 2]\n");
}

#[test]
fn prints_nested_lists_one_per_line() {
	let out = printed(r#"{"matrix":[["a"],{"k":1}]}"#);
	assert_eq!(
		out,
		"\"matrix\" = [\n\
		 \t[\"a\"],\n\
		 \t{\n\
		 \t\t\"k\" = 1\n\
		 \t},\n\
		 ]\n"
	);
}

#[test]
fn prints_empty_bodies_inline() {
	let out = printed(r#"{"resource":{"aws_vpc":{"main":{}}}}"#);
	assert_eq!(out, "\"resource\" \"aws_vpc\" \"main\" {}\n");
}

#[test]
fn escapes_strings() {
	let out = printed(r#"{"policy":"say \"hi\"\n\\ ${var.x}\u0001"}"#);
	assert_eq!(out, "\"policy\" = \"say \\\"hi\\\"\\n\\\\ ${var.x}\\u0001\"\n");
}

#[test]
fn rejects_items_without_keys() {
	let body: Body = [Item::new(vec![], Value::Null)].into_iter().collect();
	assert!(matches!(to_string(&body), Err(PrintError::MissingKey)));
}

#[test]
fn rejects_blocks_without_object_body() {
	let body: Body = [Item::new(vec!["a".into(), "b".into()], "x".into())]
		.into_iter()
		.collect();
	assert!(matches!(to_string(&body), Err(PrintError::InvalidBlock { .. })));
}
