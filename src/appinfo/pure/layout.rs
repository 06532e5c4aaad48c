//! appinfo.vdf container layout
//!
//! File header (8 bytes):
//! - 4 bytes: magic `'DV\x07`
//! - 4 bytes: universe
//!
//! Then, until 4 bytes before the end of the file, records of:
//! - 4 bytes: app ID
//! - 4 bytes: entry size (40 + length of the VDF blob)
//! - 4 bytes: info state
//! - 4 bytes: last updated
//! - 8 bytes: access token
//! - 20 bytes: SHA-1
//! - 4 bytes: change number
//! - N bytes: binary VDF blob
//!
//! The trailing 4 bytes are a fixed terminator. All integers little-endian.

use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};
use tracing::debug;

use crate::appinfo::types::CatalogEntry;
use crate::error::{ProtonError, Result};
use crate::vdf;

/// `'DV\x07` read as a little-endian u32
pub const APPINFO_MAGIC: u32 = 0x0756_4427;

const FILE_HEADER_SIZE: usize = 8;
const RECORD_HEADER_SIZE: usize = 48;
/// Bytes of the record header counted by the entry size field
const ENTRY_SIZE_OVERHEAD: u32 = 40;
const TRAILER_SIZE: usize = 4;

fn truncated(_: std::io::Error) -> ProtonError {
    ProtonError::Format("appinfo.vdf is truncated".to_string())
}

/// Decode every record of an appinfo.vdf
///
/// Records whose VDF blob can't be decoded (Steam occasionally writes
/// invalid UTF-8) are skipped. The cursor always advances by the declared
/// entry size, so one bad record never misaligns the next.
pub fn parse_catalog(data: &[u8]) -> Result<Vec<CatalogEntry>> {
    if data.len() < FILE_HEADER_SIZE + TRAILER_SIZE {
        return Err(ProtonError::Format("appinfo.vdf is too short".to_string()));
    }
    let end = data.len() - TRAILER_SIZE;

    let mut cursor = Cursor::new(data);
    let magic = cursor.read_u32::<LittleEndian>().map_err(truncated)?;
    let _universe = cursor.read_u32::<LittleEndian>().map_err(truncated)?;
    if magic != APPINFO_MAGIC {
        return Err(ProtonError::Format(format!(
            "invalid appinfo.vdf magic number {:#010x}",
            magic
        )));
    }

    let mut entries = Vec::new();
    let mut skipped = 0usize;
    while (cursor.position() as usize) < end {
        if cursor.position() as usize + RECORD_HEADER_SIZE > end {
            return Err(ProtonError::Format("appinfo.vdf record header is truncated".to_string()));
        }

        let app_id = cursor.read_u32::<LittleEndian>().map_err(truncated)?;
        let entry_size = cursor.read_u32::<LittleEndian>().map_err(truncated)?;
        let info_state = cursor.read_u32::<LittleEndian>().map_err(truncated)?;
        let last_updated = cursor.read_u32::<LittleEndian>().map_err(truncated)?;
        let access_token = cursor.read_u64::<LittleEndian>().map_err(truncated)?;
        let mut sha1 = [0u8; 20];
        cursor.read_exact(&mut sha1).map_err(truncated)?;
        let change_number = cursor.read_u32::<LittleEndian>().map_err(truncated)?;

        let blob_size = entry_size.checked_sub(ENTRY_SIZE_OVERHEAD).ok_or_else(|| {
            ProtonError::Format(format!(
                "appinfo.vdf entry for app {} declares size {} below the header size",
                app_id, entry_size
            ))
        })? as usize;

        let start = cursor.position() as usize;
        let blob_end = start + blob_size;
        if blob_end > end {
            return Err(ProtonError::Format(format!(
                "appinfo.vdf entry for app {} runs past the end of the file",
                app_id
            )));
        }

        match vdf::parse_binary(&data[start..blob_end]) {
            Ok(doc) => entries.push(CatalogEntry {
                app_id,
                info_state,
                last_updated,
                access_token,
                sha1,
                change_number,
                data: doc,
            }),
            Err(e) => {
                debug!("Skipping appinfo section for app {}: {}", app_id, e);
                skipped += 1;
            }
        }
        cursor.set_position(blob_end as u64);
    }

    debug!("Read {} appinfo sections, skipped {}", entries.len(), skipped);
    Ok(entries)
}

/// Build an appinfo.vdf image from (app ID, VDF blob) pairs (test fixtures only)
#[cfg(test)]
pub(crate) fn encode(sections: &[(u32, Vec<u8>)]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&APPINFO_MAGIC.to_le_bytes());
    out.extend_from_slice(&1u32.to_le_bytes());
    for (app_id, blob) in sections {
        out.extend_from_slice(&app_id.to_le_bytes());
        out.extend_from_slice(&(blob.len() as u32 + ENTRY_SIZE_OVERHEAD).to_le_bytes());
        out.extend_from_slice(&2u32.to_le_bytes());
        out.extend_from_slice(&1_600_000_000u32.to_le_bytes());
        out.extend_from_slice(&0u64.to_le_bytes());
        out.extend_from_slice(&[0xab; 20]);
        out.extend_from_slice(&7u32.to_le_bytes());
        out.extend_from_slice(blob);
    }
    out.extend_from_slice(&0u32.to_le_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::vdf::{Document, Value, encode_binary};

    fn section(name: &str) -> Vec<u8> {
        let common: Document = [("name", Value::Str(name.to_string()))].into_iter().collect();
        let appinfo: Document = [("common", Value::Doc(common))].into_iter().collect();
        let root: Document = [("appinfo", Value::Doc(appinfo))].into_iter().collect();
        encode_binary(&root)
    }

    fn invalid_utf8_section() -> Vec<u8> {
        let mut blob = vec![0x01];
        blob.extend_from_slice(b"name\0");
        blob.extend_from_slice(&[0xc3, 0x28, 0x00]);
        blob.push(0x08);
        blob
    }

    #[test]
    fn test_parse_catalog() {
        let data = encode(&[(10, section("Counter-Strike")), (20, section("Day of Defeat"))]);
        let entries = parse_catalog(&data).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].app_id, 10);
        assert_eq!(entries[0].change_number, 7);
        assert_eq!(entries[0].sha1, [0xab; 20]);
        assert_eq!(
            entries[1]
                .data
                .path(&["appinfo", "common", "name"])
                .and_then(Value::as_str),
            Some("Day of Defeat")
        );
    }

    #[test]
    fn test_bad_magic() {
        let mut data = encode(&[(10, section("x"))]);
        data[3] = 0x08;
        let err = parse_catalog(&data).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_undecodable_section_is_skipped() {
        let data = encode(&[
            (10, section("first")),
            (20, invalid_utf8_section()),
            (30, section("third")),
        ]);
        let ids: Vec<u32> = parse_catalog(&data).unwrap().iter().map(|e| e.app_id).collect();
        assert_eq!(ids, vec![10, 30]);
    }

    #[test]
    fn test_deeply_nested_section_is_skipped() {
        let mut nested = Vec::new();
        for _ in 0..50_000 {
            nested.extend_from_slice(&[0x00, b'a', 0x00]);
        }
        nested.extend(std::iter::repeat_n(0x08, 50_000));

        let data = encode(&[(10, nested), (20, section("Team Fortress 2"))]);
        let entries = parse_catalog(&data).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].app_id, 20);
        assert_eq!(
            entries[0]
                .data
                .path(&["appinfo", "common", "name"])
                .and_then(Value::as_str),
            Some("Team Fortress 2")
        );
    }

    #[test]
    fn test_declared_size_is_authoritative() {
        // First record declares 3 padding bytes more than its blob holds; the
        // padding is skipped along with the blob, keeping the next record aligned
        let mut blob = section("padded");
        blob.extend_from_slice(&[0x00, 0x00, 0x00]);
        let data = encode(&[(10, blob), (20, section("next"))]);

        let entries = parse_catalog(&data).unwrap();
        assert_eq!(entries.last().map(|e| e.app_id), Some(20));
    }

    #[test]
    fn test_entry_size_below_header_size() {
        let mut data = encode(&[(10, section("x"))]);
        // entry_size lives right after the 8-byte file header and the app ID
        data[12..16].copy_from_slice(&10u32.to_le_bytes());
        assert_eq!(parse_catalog(&data).unwrap_err().kind(), ErrorKind::Format);
    }

    #[test]
    fn test_entry_running_past_trailer() {
        let mut data = encode(&[(10, section("x"))]);
        data[12..16].copy_from_slice(&10_000u32.to_le_bytes());
        assert_eq!(parse_catalog(&data).unwrap_err().kind(), ErrorKind::Format);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(parse_catalog(&encode(&[])).unwrap().is_empty());
    }
}
