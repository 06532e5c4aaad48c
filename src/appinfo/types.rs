use crate::vdf::Document;

/// One per-app section of appinfo.vdf
///
/// Only `app_id` and `data` are used for Proton resolution; the rest is
/// decoded so the record header is fully accounted for.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    pub app_id: u32,
    pub info_state: u32,
    pub last_updated: u32,
    pub access_token: u64,
    pub sha1: [u8; 20],
    pub change_number: u32,
    pub data: Document,
}
