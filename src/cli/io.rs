//! JSON I/O handling for the CLI
//!
//! - Input: JSON via stdin, one document per line for `replay`
//! - Output: one JSON envelope per line on stdout
//! - UTF-8 only

use std::io::{self, BufRead, Read, Write};

use serde::Serialize;
use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read the whole of stdin as one JSON document
pub fn read_document() -> CliResult<Value> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;

    if input.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    Ok(serde_json::from_str(&input)?)
}

/// Read JSON lines from a reader. Blank lines are skipped; each item carries
/// its 1-based line number.
pub fn read_lines<R: BufRead>(reader: R) -> impl Iterator<Item = CliResult<(usize, Value)>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| match line {
            Err(e) => Some(Err(CliError::from(e))),
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(
                serde_json::from_str(&line)
                    .map(|value| (index + 1, value))
                    .map_err(|e| CliError::action_error(format!("line {}: {}", index + 1, e))),
            ),
        })
}

/// Write a success envelope to a writer
pub fn write_response_to<W: Write, T: Serialize>(writer: &mut W, data: &T) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    serde_json::to_writer(&mut *writer, &response)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

/// Write an error envelope to a writer
pub fn write_error_to<W: Write>(writer: &mut W, code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    serde_json::to_writer(&mut *writer, &response)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

/// Write a success envelope to stdout
pub fn write_response<T: Serialize>(data: &T) -> CliResult<()> {
    write_response_to(&mut io::stdout().lock(), data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Cursor;

    #[test]
    fn test_read_lines_skips_blank() {
        let input = Cursor::new("{\"type\":\"EXPORT_TO_CSV\"}\n\n{\"type\":\"CLEAR_COMPARISON\"}\n");
        let lines: Vec<_> = read_lines(input).collect::<CliResult<_>>().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, 1);
        assert_eq!(lines[1].0, 3);
        assert_eq!(lines[1].1["type"], "CLEAR_COMPARISON");
    }

    #[test]
    fn test_read_lines_reports_line_number() {
        let input = Cursor::new("{}\n{broken\n");
        let results: Vec<_> = read_lines(input).collect();
        let err = results[1].as_ref().unwrap_err();
        assert!(err.message().starts_with("line 2:"));
    }

    #[test]
    fn test_response_envelope() {
        let mut out = Vec::new();
        write_response_to(&mut out, &json!({"totalFacts": 3})).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["status"], "ok");
        assert_eq!(parsed["data"]["totalFacts"], 3);
    }

    #[test]
    fn test_error_envelope() {
        let mut out = Vec::new();
        write_error_to(&mut out, "DRIFT_INVALID_PAGINATION", "page must be >= 1").unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["status"], "error");
        assert_eq!(parsed["code"], "DRIFT_INVALID_PAGINATION");
    }
}
