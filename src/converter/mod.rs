//! KEY=VALUE text to JSON conversion module
//!
//! This module contains the core conversion engine, the line scanner, and
//! file/directory batch helpers.

pub mod batch;
pub mod engine;
mod scanner;

pub use batch::{
    convert_directory, convert_file, convert_file_to_file, find_env_files, BatchOptions,
};
pub use engine::{convert_input_to_json, encode, parse_env_vars, EnvVar, EMPTY_ARRAY};
