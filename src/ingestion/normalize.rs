//! Row normalizer: raw text line → typed [`Record`].
//!
//! Each field is stripped of enclosing quote/line-break characters, lowercased, then cast to the
//! narrowest numeric type it parses as. A field that parses as neither integer nor float stays
//! text; that fallback is not an error.

use crate::error::AnalysisResult;
use crate::processing::{for_each, then};
use crate::types::{Record, Value};

/// Characters stripped from both ends of every field by default.
///
/// `\r` is included so CRLF input normalizes exactly like LF input.
pub const DEFAULT_STRIP_CHARS: &[char] = &['"', '\n', '\r'];

/// Field delimiter of the countries source.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Split one line into raw fields. No quoting or escaping is recognized.
pub fn split_line(line: &str, delimiter: u8) -> Vec<String> {
    line.split(char::from(delimiter)).map(str::to_owned).collect()
}

/// Integer if the text parses as one, else float, else the text itself.
///
/// Numeric parsing ignores surrounding whitespace; text is kept as given.
pub fn cast_field(text: String) -> Value {
    let trimmed = text.trim();
    if let Ok(v) = trimmed.parse::<i64>() {
        return Value::Int64(v);
    }
    if let Ok(v) = trimmed.parse::<f64>() {
        return Value::Float64(v);
    }
    Value::Utf8(text)
}

/// Strip `strip_chars` from both ends, lowercase, cast.
pub fn normalize_field(raw: &str, strip_chars: &[char]) -> Value {
    cast_field(raw.trim_matches(strip_chars).to_lowercase())
}

/// Stage normalizing every field of an already-split raw record.
pub fn record_normalizer(
    strip_chars: Vec<char>,
) -> impl Fn(&Vec<String>) -> AnalysisResult<Record> {
    for_each(move |raw: &String| Ok(normalize_field(raw, &strip_chars)))
}

/// Stage turning one raw line into a [`Record`].
pub fn line_normalizer(
    delimiter: u8,
    strip_chars: Vec<char>,
) -> impl Fn(&String) -> AnalysisResult<Record> {
    then(
        move |line: &String| Ok(split_line(line, delimiter)),
        record_normalizer(strip_chars),
    )
}

/// Normalize one line with the default delimiter and strip set.
pub fn normalize_line(line: &str) -> AnalysisResult<Record> {
    line_normalizer(DEFAULT_DELIMITER, DEFAULT_STRIP_CHARS.to_vec())(&line.to_owned())
}
