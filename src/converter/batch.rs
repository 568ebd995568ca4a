//! File and directory conversion on top of the core engine
//!
//! The engine itself never touches the filesystem; everything here reads
//! `*.env` files, converts them, and writes `.json` files next to where the
//! caller asked.

use crate::cli::path_mapping::map_input_to_output;
use crate::converter::engine::{encode, parse_env_vars, EMPTY_ARRAY};
use crate::error::{ConvertError, ConvertResult};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Options for file and directory conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    pub recursive: bool,
    pub pretty: bool,
    pub continue_on_error: bool,
}

/// Convert one env file and return its JSON text.
///
/// An empty file is not an error here; it maps to the empty-array payload.
pub fn convert_file(input: &Path, pretty: bool) -> ConvertResult<String> {
    let text = fs::read_to_string(input)
        .map_err(|err| ConvertError::io(err.to_string(), Some(input.to_path_buf())))?;

    if text.is_empty() {
        return Ok(EMPTY_ARRAY.to_string());
    }
    encode(&parse_env_vars(&text), pretty)
}

/// Convert one env file and write the JSON next to `output`, creating
/// parent directories as needed.
pub fn convert_file_to_file(input: &Path, output: &Path, pretty: bool) -> ConvertResult<()> {
    let json = convert_file(input, pretty)?;

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| ConvertError::io(err.to_string(), Some(parent.to_path_buf())))?;
    }
    fs::write(output, json)
        .map_err(|err| ConvertError::io(err.to_string(), Some(output.to_path_buf())))
}

/// Find env files in a directory. If recursive is true, use walkdir;
/// otherwise list files.
pub fn find_env_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut env_files = Vec::new();

    if recursive {
        for entry in WalkDir::new(dir) {
            let entry = entry?;
            let path = entry.path();
            if is_env_file(path) {
                env_files.push(path.to_path_buf());
            }
        }
    } else {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if is_env_file(&path) {
                env_files.push(path);
            }
        }
    }

    // Directory iteration order is platform-dependent.
    env_files.sort();
    Ok(env_files)
}

/// Check whether a path looks like an env file (`*.env`).
pub fn is_env_file(path: &Path) -> bool {
    path.is_file() && path.extension().map_or(false, |ext| ext == "env")
}

/// Convert every env file under `input_dir` into `output_dir`, preserving
/// relative structure and swapping the extension to `.json`. Returns the
/// paths written.
pub fn convert_directory(
    input_dir: &Path,
    output_dir: &Path,
    options: &BatchOptions,
) -> ConvertResult<Vec<PathBuf>> {
    let env_files = find_env_files(input_dir, options.recursive)
        .map_err(|err| ConvertError::io(err.to_string(), Some(input_dir.to_path_buf())))?;

    let mut written = Vec::new();
    for env_file in env_files {
        let output_file = map_input_to_output(input_dir, &env_file, output_dir, "json");

        match convert_file_to_file(&env_file, &output_file, options.pretty) {
            Ok(()) => written.push(output_file),
            Err(err) if options.continue_on_error => {
                eprintln!(
                    "✗ Error converting {}: {}",
                    env_file.display(),
                    err.user_message()
                );
            }
            Err(err) => return Err(err),
        }
    }

    Ok(written)
}
