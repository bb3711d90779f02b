//! Transparent zstd decompression.

use std::borrow::Cow;

use log::debug;

use crate::error::LoadError;

/// Low 24 bits of the zstd frame magic number, read little-endian.
const ZSTD_MAGIC_LOW: u32 = 0x2F_B5_28;

/// Returns `true` when `bytes` starts with a zstd frame marker.
pub fn is_zstd_frame(bytes: &[u8]) -> bool {
    match bytes {
        [b0, b1, b2, ..] => {
            (u32::from(*b0) | (u32::from(*b1) << 8) | (u32::from(*b2) << 16)) == ZSTD_MAGIC_LOW
        }
        _ => false,
    }
}

/// Decompresses `bytes` if they form a zstd frame, otherwise borrows them.
///
/// # Errors
///
/// Returns [`LoadError::Decompress`] when the frame is corrupt or truncated.
pub fn decompress(bytes: &[u8]) -> Result<Cow<'_, [u8]>, LoadError> {
    if !is_zstd_frame(bytes) {
        return Ok(Cow::Borrowed(bytes));
    }

    debug!(compressed_len = bytes.len(); "Decompressing zstd frame");
    let decompressed = zstd::stream::decode_all(bytes).map_err(LoadError::Decompress)?;
    debug!(decompressed_len = decompressed.len(); "Decompressed zstd frame");

    Ok(Cow::Owned(decompressed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_zstd_magic() {
        assert!(is_zstd_frame(&[0x28, 0xB5, 0x2F, 0xFD, 0x00]));
        assert!(is_zstd_frame(&[0x28, 0xB5, 0x2F]));
    }

    #[test]
    fn test_plain_json_is_not_zstd() {
        assert!(!is_zstd_frame(b"{\"declarations\": []}"));
    }

    #[test]
    fn test_short_input_is_not_zstd() {
        assert!(!is_zstd_frame(&[]));
        assert!(!is_zstd_frame(&[0x28, 0xB5]));
    }

    #[test]
    fn test_plain_bytes_are_borrowed() {
        let bytes = b"[]";
        assert!(matches!(decompress(bytes).unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_decompresses_frame() {
        let compressed = zstd::encode_all(&b"{\"a\": 1}"[..], 3).unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(&*decompressed, b"{\"a\": 1}");
    }

    #[test]
    fn test_corrupt_frame_fails() {
        let bytes = [0x28, 0xB5, 0x2F, 0xFD, 0xFF, 0xFF, 0xFF];
        assert!(matches!(decompress(&bytes), Err(LoadError::Decompress(_))));
    }
}
