//! Line scanner for KEY=VALUE assignment text
//!
//! A line may carry several assignments separated by whitespace, names and
//! values may be padded with spaces around the `=`, and values may be
//! double-quoted. The scanner walks each line once instead of splitting on
//! `=`, because `=` is only a delimiter the first time it appears in an
//! assignment; later ones (base64 padding, for example) belong to the value.

use crate::converter::engine::EnvVar;

/// Scan a single line and return the assignments found on it.
///
/// Comment lines (first non-whitespace byte is `#`) and blank lines yield
/// nothing. Tokens without any `=` left on the line are dropped.
pub(crate) fn scan_line(line: &str) -> Vec<EnvVar> {
    let bytes = line.as_bytes();
    let mut vars = Vec::new();

    let mut pos = skip_spaces(bytes, 0);
    if pos >= bytes.len() || bytes[pos] == b'#' {
        return vars;
    }

    while pos < bytes.len() {
        let Some(eq) = find_byte(bytes, pos, b'=') else {
            break;
        };
        let name = last_field(&line[pos..eq]);

        let quote = skip_spaces(bytes, eq + 1);
        let (value, next) = if quote < bytes.len() && bytes[quote] == b'"' {
            quoted_value(line, quote)
        } else {
            unquoted_value(line, eq + 1)
        };

        // A missing name (e.g. a line starting with `=`) drops the
        // assignment, but the value region is still consumed.
        if let Some(name) = name {
            vars.push(EnvVar::new(name, value));
        }

        pos = skip_spaces(bytes, next);
    }

    vars
}

/// Extract a double-quoted value starting at the opening quote.
///
/// Interior whitespace is preserved verbatim and the quotes are stripped.
/// An unterminated quote takes the rest of the line as the value.
fn quoted_value(line: &str, open: usize) -> (String, usize) {
    match find_byte(line.as_bytes(), open + 1, b'"') {
        Some(close) => (line[open + 1..close].to_string(), close + 1),
        None => (line[open + 1..].to_string(), line.len()),
    }
}

/// Extract an unquoted value starting right after the assignment's `=`.
///
/// The value runs to the start of the next assignment or the end of the
/// line. A later `=` opens a new assignment only when whitespace separates
/// it from the value; the name of that assignment is the last
/// whitespace-delimited field before it, and everything up to that field
/// belongs to the current value.
fn unquoted_value(line: &str, start: usize) -> (String, usize) {
    let bytes = line.as_bytes();

    let mut search = start;
    while let Some(eq) = find_byte(bytes, search, b'=') {
        if let Some(field) = last_field_start(bytes, start, eq) {
            return (line[start..field].trim().to_string(), field);
        }
        // No whitespace between here and the value start, so this `=` is
        // part of the value (e.g. `A=abcdefg=`).
        search = eq + 1;
    }

    (line[start..].trim().to_string(), line.len())
}

/// Start of the last whitespace-delimited field in `bytes[from..to]`, or
/// `None` when the range holds a single unbroken run.
fn last_field_start(bytes: &[u8], from: usize, to: usize) -> Option<usize> {
    let mut end = to;
    while end > from && bytes[end - 1].is_ascii_whitespace() {
        end -= 1;
    }
    let mut begin = end;
    while begin > from && !bytes[begin - 1].is_ascii_whitespace() {
        begin -= 1;
    }
    (begin > from).then_some(begin)
}

fn last_field(segment: &str) -> Option<&str> {
    segment.split_ascii_whitespace().last()
}

fn skip_spaces(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

fn find_byte(bytes: &[u8], from: usize, byte: u8) -> Option<usize> {
    let from = from.min(bytes.len());
    bytes[from..].iter().position(|&b| b == byte).map(|i| from + i)
}
