//! Environment-variable text to JSON converter
//!
//! A Rust CLI tool for converting `KEY=VALUE` environment-variable text
//! (comments, quoted values, multiple assignments per line) into a JSON
//! array of `{"name", "value"}` objects.

pub mod cli;
pub mod converter;
pub mod error;

// Re-export commonly used types
pub use converter::{convert_input_to_json, encode, parse_env_vars, EnvVar, EMPTY_ARRAY};
pub use error::{ConvertError, ConvertResult};

/// Convert environment-variable text to a compact JSON array string.
///
/// Empty input returns the `[]` payload together with
/// [`ConvertError::EmptyInput`]; see [`converter::convert_input_to_json`].
pub fn convert_env(input: &str) -> (String, Option<ConvertError>) {
    converter::convert_input_to_json(input)
}
