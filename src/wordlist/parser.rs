//! First-column CSV parser.
//!
//! The first record is always treated as a header and never becomes a word,
//! whatever it contains. Every following record contributes its first field,
//! trimmed; records whose first field is blank are skipped. Records may have
//! any number of fields and a leading UTF-8 BOM is ignored.
//!
//! A word never spans lines, so a line break inside the first field is a
//! quoting error. A quote left open at end of file swallows every following
//! line into one field; that is rejected too, whichever column it opened in.
//! A `"` in the middle of an unquoted field is an ordinary character.

use super::LoadError;
use crate::config::expand_home;

/// Parse raw CSV bytes into the words of the first column, in row order.
pub fn parse_first_column(raw: &[u8]) -> Result<Vec<String>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(raw);

    let mut words = Vec::new();
    let mut last = None;
    for record in reader.records() {
        let record = record.map_err(describe)?;
        if let Some(word) = record.get(0).filter(|w| !w.is_empty()) {
            if has_line_break(word) {
                return Err(malformed_quote(&record));
            }
            words.push(word.to_string());
        }
        last = Some(record);
    }

    if let Some(record) = last {
        let start = record.position().map(|p| p.byte() as usize).unwrap_or(0);
        let tail = raw.get(start..).unwrap_or_default();
        if opens_quoted_field(tail) && ends_inside_quotes(tail) {
            return Err(malformed_quote(&record));
        }
    }

    // Header-only, blank and zero-byte inputs all land here.
    if words.is_empty() {
        return Err(LoadError::EmptyInput);
    }
    Ok(words)
}

/// Read an uploaded file's raw bytes. `~/` expands to the home directory.
pub fn read_upload(path: &str) -> Result<Vec<u8>, LoadError> {
    let path = expand_home(path.trim());
    std::fs::read(&path)
        .map_err(|e| LoadError::ParseFailure(format!("{}: {}", path.display(), e)))
}

fn has_line_break(field: &str) -> bool {
    field.contains(['\n', '\r'])
}

fn opens_quoted_field(record: &[u8]) -> bool {
    record.first() == Some(&b'"') || record.windows(2).any(|w| w == b",\"")
}

/// Every well-formed quoted field, `""` escapes included, holds an even
/// number of quote characters.
fn ends_inside_quotes(tail: &[u8]) -> bool {
    tail.iter().filter(|&&b| b == b'"').count() % 2 == 1
}

fn malformed_quote(record: &csv::StringRecord) -> LoadError {
    let reason = "unterminated quote or line break inside a quoted word";
    match record.position() {
        Some(pos) => LoadError::ParseFailure(format!("line {}: {}", pos.line(), reason)),
        None => LoadError::ParseFailure(reason.to_string()),
    }
}

fn describe(err: csv::Error) -> LoadError {
    let reason = match err.kind() {
        csv::ErrorKind::Utf8 { .. } => "file is not valid UTF-8 text".to_string(),
        _ => err.to_string(),
    };
    match err.position() {
        Some(pos) => LoadError::ParseFailure(format!("line {}: {}", pos.line(), reason)),
        None => LoadError::ParseFailure(reason),
    }
}
