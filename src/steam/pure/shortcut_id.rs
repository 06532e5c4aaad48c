//! App ID derivation for non-Steam shortcuts
//!
//! Steam names a shortcut's compatdata directory after an ID computed from
//! the shortcut's target and name. This must match Steam bit for bit or the
//! prefix is never found.

/// Derive the prefix app ID for a shortcut
///
/// Steam first builds the 64-bit "screenshot ID": CRC-32 of target + name
/// with the high bit set, in the upper half, and 0x02000000 in the lower
/// half. The prefix ID is the upper half.
pub fn shortcut_app_id(target: &str, name: &str) -> u64 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(target.as_bytes());
    hasher.update(name.as_bytes());
    let crc = u64::from(hasher.finalize()) & 0xffff_ffff;

    let screenshot_id = ((crc | 0x8000_0000) << 32) | 0x0200_0000;
    screenshot_id >> 32
}
