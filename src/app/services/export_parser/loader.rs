//! Export file loading with encoding fallback
//!
//! UNICORN exports are UTF-8 from some software versions and UTF-16 from
//! others, with no reliable way to tell ahead of time. The loader reads the
//! whole file once, decodes as UTF-8 first, and retries as UTF-16 (BOM-aware,
//! little-endian when no BOM is present) on failure.

use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Read an export file into an ordered sequence of raw lines
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;

    let text = decode(&bytes).ok_or_else(|| Error::decode(path.display().to_string()))?;
    debug!("Loaded {} bytes from {}", bytes.len(), path.display());

    Ok(text.lines().map(|line| line.to_string()).collect())
}

/// Decode file bytes as UTF-8, falling back to UTF-16
fn decode(bytes: &[u8]) -> Option<String> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Some(text.to_string()),
        Err(_) => {
            debug!("UTF-8 decoding failed, retrying as UTF-16");
            decode_utf16(bytes)
        }
    }
}

/// Decode UTF-16 bytes, honouring a leading BOM and defaulting to
/// little-endian when none is present
fn decode_utf16(bytes: &[u8]) -> Option<String> {
    let (little_endian, payload) = match bytes {
        [0xFF, 0xFE, rest @ ..] => (true, rest),
        [0xFE, 0xFF, rest @ ..] => (false, rest),
        _ => (true, bytes),
    };

    if payload.len() % 2 != 0 {
        return None;
    }

    let units: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| {
            if little_endian {
                u16::from_le_bytes([pair[0], pair[1]])
            } else {
                u16::from_be_bytes([pair[0], pair[1]])
            }
        })
        .collect();

    String::from_utf16(&units).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16le_bytes(text: &str) -> Vec<u8> {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode(b"abc\tdef").as_deref(), Some("abc\tdef"));
    }

    #[test]
    fn test_decode_utf16_le_with_bom() {
        let bytes = utf16le_bytes("ml\tmAU");
        assert_eq!(decode(&bytes).as_deref(), Some("ml\tmAU"));
    }

    #[test]
    fn test_decode_utf16_be_with_bom() {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in "ml".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        assert_eq!(decode(&bytes).as_deref(), Some("ml"));
    }

    #[test]
    fn test_undecodable_bytes_rejected() {
        // 0xFF outside a BOM is invalid UTF-8, and three bytes cannot be UTF-16
        assert_eq!(decode(&[0x41, 0xFF, 0x41]), None);
    }
}
