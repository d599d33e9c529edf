use super::hex::HEX_PAIRS;

use uuid::Uuid;

/// Length of the canonical hyphenated form.
pub const GUID_LEN: usize = 36;

/// Writes a GUID in the canonical hyphenated `8-4-4-4-12` lowercase form.
///
/// Field bytes are taken in RFC 4122 order (`Uuid::as_bytes`), so the output
/// is identical on every platform.
pub fn try_write_guid(guid: &Uuid, dst: &mut [u8]) -> Option<usize> {
    if dst.len() < GUID_LEN {
        return None;
    }

    let bytes = guid.as_bytes();
    let mut pos = 0;

    for (i, byte) in bytes.iter().enumerate() {
        // Hyphens sit after bytes 4, 6, 8 and 10 of the RFC layout.
        if matches!(i, 4 | 6 | 8 | 10) {
            dst[pos] = b'-';
            pos += 1;
        }
        let pair = HEX_PAIRS[*byte as usize];
        dst[pos] = pair[0];
        dst[pos + 1] = pair[1];
        pos += 2;
    }

    Some(GUID_LEN)
}
