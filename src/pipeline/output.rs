//! JSON text rendering for step output
//!
//! The workflow engine consumes documents written with `", "` / `": "`
//! separators and ASCII-only strings (non-ASCII escaped as `\uXXXX`).
//! Output is rendered in that format so downstream parsing and diffing stay
//! stable.

use crate::error::Result;
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

/// Compact formatter with spaced separators and ASCII escaping.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut rest = fragment;
        while let Some(pos) = rest.find(|c: char| !c.is_ascii() || c == '\u{7f}') {
            writer.write_all(rest[..pos].as_bytes())?;
            let ch = rest[pos..].chars().next().unwrap_or_default();
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            rest = &rest[pos + ch.len_utf8()..];
        }
        writer.write_all(rest.as_bytes())
    }
}

/// Render a value as a single line of JSON text.
pub fn to_json_line<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_spaced_separators() {
        let line = to_json_line(&json!({"a": 1, "b": [1, 2, {"c": null}]})).unwrap();
        assert_eq!(line, r#"{"a": 1, "b": [1, 2, {"c": null}]}"#);
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(to_json_line(&json!({})).unwrap(), "{}");
        assert_eq!(to_json_line(&json!([])).unwrap(), "[]");
    }

    #[test]
    fn test_key_order_follows_input() {
        let value: serde_json::Value = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        assert_eq!(to_json_line(&value).unwrap(), r#"{"z": 1, "a": 2, "m": 3}"#);
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        let line = to_json_line(&json!({"name": "café €"})).unwrap();
        assert_eq!(line, r#"{"name": "caf\u00e9 \u20ac"}"#);
    }

    #[test]
    fn test_astral_chars_use_surrogate_pairs() {
        let line = to_json_line(&json!("📈")).unwrap();
        assert_eq!(line, r#""\ud83d\udcc8""#);
    }

    #[test]
    fn test_control_chars_still_escaped() {
        let line = to_json_line(&json!("a\"b\n")).unwrap();
        assert_eq!(line, r#""a\"b\n""#);
        let line = to_json_line(&json!("a\u{7f}b")).unwrap();
        assert_eq!(line, r#""a\u007fb""#);
    }

    #[test]
    fn test_float_zero() {
        assert_eq!(to_json_line(&json!({"score": 0.0})).unwrap(), r#"{"score": 0.0}"#);
    }
}
