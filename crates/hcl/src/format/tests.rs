use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

#[rstest]
#[case::unquotes_identifier_keys(r#""my_key" = "v""#, r#"my_key = "v""#)]
#[case::keeps_digit_keys_quoted(r#""0bad" = "v""#, r#""0bad" = "v""#)]
#[case::keeps_single_char_keys_quoted(r#""a" = 1"#, r#""a" = 1"#)]
#[case::keeps_keys_with_colons_quoted(r#""aws:owner" = "me""#, r#""aws:owner" = "me""#)]
#[case::unwraps_block_assignment("block = {", "block {")]
#[case::keeps_tags_assignment("tags = {", "tags = {")]
#[case::unwraps_quoted_block_assignment(r#""ebs" = {"#, "ebs {")]
#[case::unquotes_resource_type(r#""aws_instance" "name" "id" {"#, r#"aws_instance "name" "id" {"#)]
fn single_line_rewrites(#[case] input: &str, #[case] expected: &str) {
	assert_eq!(format_str(input), expected);
}

#[test]
fn separates_adjacent_blocks_with_one_blank_line() {
	let input = "a {\n\tx = 1\n}\nb {\n\ty = 2\n}\n";
	assert_eq!(format_str(input), "a {\n\tx = 1\n}\n\nb {\n\ty = 2\n}\n\n");
}

#[test]
fn widens_existing_blank_line_before_block() {
	// Rule 3 adds a newline, rule 4 only halves pairs, rule 5 adds another.
	let input = "a {\n}\n\nb {\n}\n";
	assert_eq!(format_str(input), "a {\n}\n\n\nb {\n}\n\n");
}

#[test]
fn collapses_blank_lines_between_attributes() {
	assert_eq!(format_str("a = 1\n\nb = 2\n"), "a = 1\nb = 2\n");
}

#[test]
fn nested_blocks() {
	let input = "x {\n\tinner = {\n\t\tk = 1\n\t}\n}\n";
	assert_eq!(format_str(input), "x {\n\tinner {\n\t\tk = 1\n\t}\n\n}\n\n");
}

#[test]
fn printed_resource() {
	let input = "\"resource\" \"aws_instance\" \"web\" {\n\
	             \t\"ami\" = \"x\"\n\
	             \t\"tags\" = {\n\
	             \t\t\"env\" = \"prod\"\n\
	             \t}\n\
	             }\n";

	assert_eq!(
		format_str(input),
		"resource \"aws_instance\" \"web\" {\n\
		 \tami = \"x\"\n\
		 \ttags = {\n\
		 \t\tenv = \"prod\"\n\
		 \t}\n\
		 \n\
		 }\n\
		 \n"
	);
}

#[test]
fn is_not_idempotent() {
	let once = format_str("a {\n}\nb {\n}\n");
	let twice = format_str(&once);

	assert_eq!(once, "a {\n}\n\nb {\n}\n\n");
	assert_eq!(twice, "a {\n}\n\n\nb {\n}\n\n");
}

#[test]
fn preserves_utf8() {
	assert_eq!(format_str("\"name\" = \"café\"\n"), "name = \"café\"\n");
}

#[test]
fn total_over_invalid_utf8() {
	assert_eq!(format(&[0xff, 0xfe, b'}', b'\n']), [0xff, 0xfe, b'}', b'\n', b'\n']);
}

#[test]
fn empty_input() {
	assert!(format(b"").is_empty());
}
