
use std::io::{BufRead, BufReader, Read};

use tracing::warn;

use crate::models::{Row, SpendError};

/// Reads CSV text into rows keyed by the header line.
///
/// The literal first line is the header and every following non-blank line is
/// one record. Quote state never carries across a line end. Short records are
/// padded with empty cells and extra cells are ignored. Empty input yields no
/// rows rather than an error.
///
/// # Errors
/// Returns `SpendError::Io` when the underlying stream fails. Bytes that are not
/// valid UTF-8 are replaced and the line is kept.
pub fn read_rows<R: Read>(input: R) -> Result<Vec<Row>, SpendError> {
    let mut lines = BufReader::new(input).split(b'\n').enumerate();

    let headers = match lines.next() {
        Some((_, line)) => parse_line(&decode(&line?, 1)),
        None => return Ok(Vec::new())
    };

    if headers.is_empty() {
        return Ok(Vec::new());
    }

    let mut rows = Vec::new();

    for (index, line) in lines {
        let line = decode(&line?, index + 1);

        if line.trim().is_empty() {
            continue;
        }

        rows.push(map_fields(&headers, parse_line(&line)));
    }

    Ok(rows)
}

/// Splits one line on commas outside quoted spans.
///
/// A quote toggles the quoted state wherever it appears and is not emitted;
/// `""` inside a quoted span is a literal quote.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c)
        }
    }

    fields.push(field);
    fields
}

fn map_fields(headers: &[String], fields: Vec<String>) -> Row {
    let mut fields = fields.into_iter();

    headers.iter()
        .map(|header| (header.clone(), fields.next().unwrap_or_default()))
        .collect()
}

fn decode(bytes: &[u8], line_number: usize) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    let text = String::from_utf8_lossy(bytes);

    if let std::borrow::Cow::Owned(_) = text {
        warn!("Line [{line_number}] is not valid UTF-8, undecodable bytes were replaced");
    }

    text.into_owned()
}
