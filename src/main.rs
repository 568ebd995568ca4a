use anyhow::Result;
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};

use envconv::cli::Args;
use envconv::converter::{
    convert_directory, convert_file, encode, parse_env_vars, BatchOptions, EMPTY_ARRAY,
};

fn main() -> Result<()> {
    let args = Args::parse();

    if args.stdin {
        let text = read_stdin()?;
        convert_text(&text, &args)
    } else if let Some(input) = &args.input {
        let path = PathBuf::from(input);

        if path.is_file() {
            convert_env_file(&path, &args)
        } else if path.is_dir() {
            convert_env_directory(&path, &args)
        } else {
            // Not a path on disk; treat the argument as literal env text.
            convert_text(input, &args)
        }
    } else {
        Err(anyhow::anyhow!(
            "No input provided. Use --stdin or provide an input path"
        ))
    }
}

fn convert_text(text: &str, args: &Args) -> Result<()> {
    // Empty input still produces the empty-array payload; the error comes
    // after the output has been written.
    if text.is_empty() {
        write_output(EMPTY_ARRAY, args)?;
        return Err(anyhow::anyhow!("input is empty"));
    }

    let json = encode(&parse_env_vars(text), args.pretty)?;
    write_output(&json, args)
}

fn convert_env_file(input_path: &Path, args: &Args) -> Result<()> {
    let json = convert_file(input_path, args.pretty)?;
    write_output(&json, args)
}

fn convert_env_directory(input_dir: &Path, args: &Args) -> Result<()> {
    let output_dir = args
        .output
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("Output directory required for directory conversion"))?;

    let options = BatchOptions {
        recursive: args.recursive,
        pretty: args.pretty,
        continue_on_error: args.continue_on_error,
    };

    let written = convert_directory(input_dir, output_dir, &options)?;

    if written.is_empty() {
        if !args.quiet {
            println!("No env files found in {}", input_dir.display());
        }
        return Ok(());
    }

    if !args.quiet {
        for output_file in &written {
            println!("✓ {}", output_file.display());
        }
        println!("Converted {} env files", written.len());
    }

    Ok(())
}

fn write_output(json: &str, args: &Args) -> Result<()> {
    if let Some(output_path) = &args.output {
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_path, json)?;

        if !args.quiet {
            println!("✓ Converted to: {}", output_path.display());
        }
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
