//! JSON text output.
//!
//! By default every non-ASCII character is written as a `\uXXXX` escape (UTF-16 code
//! units, lowercase hex), so the bytes match what the load JSON consumers already receive.
use crate::error::TransformError;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};
use std::io::{self, Write};

/// Wraps another formatter and escapes non-ASCII characters in strings.
#[derive(Debug, Clone)]
pub struct AsciiEscaped<F>(pub F);

impl<F: Formatter> Formatter for AsciiEscaped<F> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.begin_object_key(writer, first)
    }

    fn end_object_key<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.end_object_key(writer)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.end_object_value(writer)
    }
}

/// Output layout options for [`to_json_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonStyle {
    /// Two-space indented output instead of a single line.
    pub pretty: bool,
    /// Escape non-ASCII characters as `\uXXXX`.
    pub escape_non_ascii: bool,
}

impl Default for JsonStyle {
    fn default() -> Self {
        Self {
            pretty: true,
            escape_non_ascii: true,
        }
    }
}

pub fn to_json_string(value: &Value, style: JsonStyle) -> Result<String, TransformError> {
    let pretty = || PrettyFormatter::with_indent(b"  ");
    match (style.pretty, style.escape_non_ascii) {
        (true, true) => write_with(value, AsciiEscaped(pretty())),
        (true, false) => write_with(value, pretty()),
        (false, true) => write_with(value, AsciiEscaped(CompactFormatter)),
        (false, false) => write_with(value, CompactFormatter),
    }
}

fn write_with<F: Formatter>(value: &Value, formatter: F) -> Result<String, TransformError> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}
