//! Binary KeyValues decoder
//!
//! Every entry is a type byte, a NUL-terminated key and a type-specific
//! payload. Integers are little-endian. A nested map ends with 0x08 (or 0x0B
//! in some newer files); the root map ends the same way or at end of input.

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{ProtonError, Result};
use crate::vdf::pure::MAX_NESTING_DEPTH;
use crate::vdf::types::{Document, Value};

const TYPE_NONE: u8 = 0x00;
const TYPE_STRING: u8 = 0x01;
const TYPE_INT32: u8 = 0x02;
const TYPE_FLOAT32: u8 = 0x03;
const TYPE_POINTER: u8 = 0x04;
const TYPE_WIDESTRING: u8 = 0x05;
const TYPE_COLOR: u8 = 0x06;
const TYPE_UINT64: u8 = 0x07;
const TYPE_END: u8 = 0x08;
const TYPE_INT64: u8 = 0x0A;
const TYPE_END_ALT: u8 = 0x0B;

fn truncated(_: std::io::Error) -> ProtonError {
    ProtonError::decode("binary vdf", "unexpected end of data")
}

fn read_cstring(cursor: &mut Cursor<&[u8]>) -> Result<String> {
    let data = *cursor.get_ref();
    let start = cursor.position() as usize;
    let len = data
        .get(start..)
        .and_then(|rest| rest.iter().position(|&b| b == 0))
        .ok_or_else(|| ProtonError::decode("binary vdf", "unterminated string"))?;

    let s = std::str::from_utf8(&data[start..start + len])
        .map_err(|e| ProtonError::decode("binary vdf", format!("invalid UTF-8: {}", e)))?
        .to_string();
    cursor.set_position((start + len + 1) as u64);
    Ok(s)
}

fn read_widestring(cursor: &mut Cursor<&[u8]>) -> Result<String> {
    let mut units = Vec::new();
    loop {
        let unit = cursor.read_u16::<LittleEndian>().map_err(truncated)?;
        if unit == 0 {
            break;
        }
        units.push(unit);
    }
    String::from_utf16(&units)
        .map_err(|e| ProtonError::decode("binary vdf", format!("invalid UTF-16: {}", e)))
}

/// Decode a binary KeyValues blob
pub fn parse_binary(bytes: &[u8]) -> Result<Document> {
    let mut cursor = Cursor::new(bytes);
    parse_map(&mut cursor, 0)
}

fn parse_map(cursor: &mut Cursor<&[u8]>, depth: usize) -> Result<Document> {
    if depth > MAX_NESTING_DEPTH {
        return Err(ProtonError::decode("binary vdf", "nesting too deep"));
    }
    let mut doc = Document::new();
    loop {
        let tag = match cursor.read_u8() {
            Ok(tag) => tag,
            Err(_) if depth == 0 => return Ok(doc),
            Err(e) => return Err(truncated(e)),
        };
        if tag == TYPE_END || tag == TYPE_END_ALT {
            return Ok(doc);
        }

        let key = read_cstring(cursor)?;
        let value = match tag {
            TYPE_NONE => Value::Doc(parse_map(cursor, depth + 1)?),
            TYPE_STRING => Value::Str(read_cstring(cursor)?),
            TYPE_WIDESTRING => Value::Str(read_widestring(cursor)?),
            TYPE_INT32 | TYPE_POINTER | TYPE_COLOR => {
                Value::Int(cursor.read_i32::<LittleEndian>().map_err(truncated)?.into())
            }
            TYPE_FLOAT32 => Value::Float(cursor.read_f32::<LittleEndian>().map_err(truncated)?),
            TYPE_UINT64 => Value::UInt64(cursor.read_u64::<LittleEndian>().map_err(truncated)?),
            TYPE_INT64 => Value::Int(cursor.read_i64::<LittleEndian>().map_err(truncated)?),
            other => {
                return Err(ProtonError::decode(
                    "binary vdf",
                    format!("unknown type byte {:#04x} for key '{}'", other, key),
                ));
            }
        };
        doc.insert(key, value);
    }
}

/// Encode a document into the binary form (test fixtures only)
#[cfg(test)]
pub(crate) fn encode(doc: &Document) -> Vec<u8> {
    fn encode_map(doc: &Document, out: &mut Vec<u8>) {
        for (key, value) in doc.iter() {
            let tag = match value {
                Value::Doc(_) => TYPE_NONE,
                Value::Str(_) => TYPE_STRING,
                Value::Int(_) => TYPE_INT32,
                Value::Float(_) => TYPE_FLOAT32,
                Value::UInt64(_) => TYPE_UINT64,
                Value::List(_) => continue,
            };
            out.push(tag);
            out.extend_from_slice(key.as_bytes());
            out.push(0);
            match value {
                Value::Doc(d) => encode_map(d, out),
                Value::Str(s) => {
                    out.extend_from_slice(s.as_bytes());
                    out.push(0);
                }
                Value::Int(i) => out.extend_from_slice(&(*i as i32).to_le_bytes()),
                Value::Float(f) => out.extend_from_slice(&f.to_le_bytes()),
                Value::UInt64(u) => out.extend_from_slice(&u.to_le_bytes()),
                Value::List(_) => {}
            }
        }
        out.push(TYPE_END);
    }

    let mut out = Vec::new();
    encode_map(doc, &mut out);
    out
}
