//! Core conversion engine for environment-variable text to JSON

use crate::converter::scanner::scan_line;
use crate::error::{ConvertError, ConvertResult};
use serde::Serialize;

/// JSON payload produced for inputs with no assignments.
pub const EMPTY_ARRAY: &str = "[]";

/// One parsed `NAME=VALUE` assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

impl EnvVar {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Parse environment-variable text into its assignments.
///
/// Entries keep source appearance order: top-to-bottom across lines,
/// left-to-right within a line. Duplicate names are kept as separate
/// entries. Malformed tokens are dropped, never fatal.
pub fn parse_env_vars(input: &str) -> Vec<EnvVar> {
    input.lines().flat_map(scan_line).collect()
}

/// Encode assignments as a JSON array of `{"name", "value"}` objects.
pub fn encode(vars: &[EnvVar], pretty: bool) -> ConvertResult<String> {
    let result = if pretty {
        serde_json::to_string_pretty(vars)
    } else {
        serde_json::to_string(vars)
    };
    result.map_err(|err| ConvertError::encode(err.to_string()))
}

/// Convert environment-variable text to a compact JSON array string.
///
/// The return mirrors a Go-style `(value, error)` pair on purpose: empty
/// input yields the usable `[]` payload *and* [`ConvertError::EmptyInput`],
/// and callers are expected to check both. Every other input converts
/// without error; lines that carry no assignment simply produce no entries.
pub fn convert_input_to_json(input: &str) -> (String, Option<ConvertError>) {
    if input.is_empty() {
        return (EMPTY_ARRAY.to_string(), Some(ConvertError::EmptyInput));
    }

    match encode(&parse_env_vars(input), false) {
        Ok(json) => (json, None),
        Err(err) => (EMPTY_ARRAY.to_string(), Some(err)),
    }
}
