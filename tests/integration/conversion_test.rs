//! Integration tests for env-text-to-JSON conversion
//!
//! These exercise the library end to end: line splitting, comment
//! stripping, assignment scanning, quoting, and JSON encoding.

use envconv::{convert_input_to_json, parse_env_vars, ConvertError, EnvVar};
use pretty_assertions::assert_eq;

const EMPTY_ENVIRONMENT_ARRAY: &str = "[]";

fn convert_ok(input: &str) -> String {
    let (json, err) = convert_input_to_json(input);
    assert_eq!(err, None, "unexpected error for input {:?}", input);
    json
}

#[test]
fn test_blank_input_returns_empty_array_and_error() {
    let (json, err) = convert_input_to_json("");
    assert_eq!(err, Some(ConvertError::EmptyInput));
    assert_eq!(json, EMPTY_ENVIRONMENT_ARRAY);
}

#[test]
fn test_single_line_single_assignment() {
    assert_eq!(convert_ok("A=B"), r#"[{"name":"A","value":"B"}]"#);
}

#[test]
fn test_single_line_with_spaces_around_equals() {
    assert_eq!(
        convert_ok("X = 1 Y = 1"),
        r#"[{"name":"X","value":"1"},{"name":"Y","value":"1"}]"#
    );
}

#[test]
fn test_quotes_and_spaces() {
    assert_eq!(
        convert_ok(r#"A = "test string""#),
        r#"[{"name":"A","value":"test string"}]"#
    );
}

#[test]
fn test_multi_line_input() {
    assert_eq!(
        convert_ok("\nA=B\nD=E\n"),
        r#"[{"name":"A","value":"B"},{"name":"D","value":"E"}]"#
    );
}

#[test]
fn test_multi_line_input_with_blank_lines() {
    assert_eq!(
        convert_ok("\n\nL=M\n\nN=O\n"),
        r#"[{"name":"L","value":"M"},{"name":"N","value":"O"}]"#
    );
}

#[test]
fn test_single_line_with_multiple_assignments() {
    assert_eq!(
        convert_ok("W=X   Y=Z"),
        r#"[{"name":"W","value":"X"},{"name":"Y","value":"Z"}]"#
    );
}

#[test]
fn test_value_needing_json_escaping() {
    // The value is a literal backslash-quote sequence; the encoder escapes
    // both characters.
    assert_eq!(
        convert_ok(r#"A=\""#),
        r#"[{"name":"A","value":"\\\""}]"#
    );
}

#[test]
fn test_multi_line_input_with_comments() {
    assert_eq!(
        convert_ok("\n# this is a comment\nQ=R\nS=T\n"),
        r#"[{"name":"Q","value":"R"},{"name":"S","value":"T"}]"#
    );
}

#[test]
fn test_hash_in_value_is_preserved() {
    assert_eq!(
        convert_ok("WITHHASH=#FOO#"),
        r##"[{"name":"WITHHASH","value":"#FOO#"}]"##
    );
}

#[test]
fn test_trailing_equals_in_value() {
    // Base64 strings always end with an equals.
    assert_eq!(
        convert_ok("A=abcdefg="),
        r#"[{"name":"A","value":"abcdefg="}]"#
    );
}

#[test]
fn test_trailing_equals_in_value_with_more_lines() {
    assert_eq!(
        convert_ok("\nA=abcdefg=\nB=C\n"),
        r#"[{"name":"A","value":"abcdefg="},{"name":"B","value":"C"}]"#
    );
}

#[test]
fn test_quoted_value() {
    assert_eq!(
        convert_ok(r#"WITHQUOTES="this is a test""#),
        r#"[{"name":"WITHQUOTES","value":"this is a test"}]"#
    );
}

#[test]
fn test_mixed_bare_spaced_and_quoted_assignments() {
    let input = concat!(
        "A=1 B = 2 C=\"test string\" D = \"another test string\" E=\"1\" F = \"2\"\n",
        "G = \"another test string\"\n",
        "H=\"test string\""
    );
    let expected = concat!(
        r#"[{"name":"A","value":"1"},{"name":"B","value":"2"},"#,
        r#"{"name":"C","value":"test string"},{"name":"D","value":"another test string"},"#,
        r#"{"name":"E","value":"1"},{"name":"F","value":"2"},"#,
        r#"{"name":"G","value":"another test string"},{"name":"H","value":"test string"}]"#
    );
    assert_eq!(convert_ok(input), expected);
}

#[test]
fn test_duplicate_names_are_kept_in_order() {
    assert_eq!(
        convert_ok("A=1\nA=2"),
        r#"[{"name":"A","value":"1"},{"name":"A","value":"2"}]"#
    );
}

#[test]
fn test_conversion_is_deterministic() {
    let input = "A=1 B = 2\n# comment\nC=\"x y\"";
    assert_eq!(convert_ok(input), convert_ok(input));
}

#[test]
fn test_lines_without_assignments_are_dropped() {
    assert_eq!(
        convert_ok("not an assignment\nA=B"),
        r#"[{"name":"A","value":"B"}]"#
    );
}

#[test]
fn test_unterminated_quote_takes_rest_of_line() {
    assert_eq!(
        convert_ok(r#"A="no closing quote"#),
        r#"[{"name":"A","value":"no closing quote"}]"#
    );
}

#[test]
fn test_parse_env_vars_matches_json_entries() {
    let vars = parse_env_vars("Q=R\nS=T");
    assert_eq!(vars, vec![EnvVar::new("Q", "R"), EnvVar::new("S", "T")]);
}

#[test]
fn test_output_is_valid_json() {
    let json = convert_ok("A=1 B = 2 C=\"x y\"\nD=e=f=");
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 4);
    for entry in &parsed {
        assert!(entry["name"].is_string());
        assert!(entry["value"].is_string());
    }
}
