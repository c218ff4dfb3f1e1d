//! Hex dump helpers used by logs and the command line tools.

use std::fmt::Write;

use crate::PacketError;

/// Format bytes as upper-case hex pairs separated by spaces (`"FE AB 00"`).
pub fn to_hex_spaced(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 3);
    for (i, b) in data.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // writing to a String cannot fail
        let _ = write!(out, "{:02X}", b);
    }
    out
}

/// Parse hex text, ignoring whitespace and an optional `0x` prefix.
///
/// Accepts `"FE AB 00"`, `"feab00"` and `"0xFEAB00"`. An empty string parses
/// to an empty buffer.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, PacketError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);

    ::hex::decode(digits).map_err(|e| PacketError::invalid_hex(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_spaced() {
        assert_eq!(to_hex_spaced(&[]), "");
        assert_eq!(to_hex_spaced(&[0xFE]), "FE");
        assert_eq!(to_hex_spaced(&[0xFE, 0xab, 0x00]), "FE AB 00");
    }

    #[test]
    fn test_to_hex_spaced_fills_capacity() {
        let data: Vec<u8> = (0..=255).collect();
        let text = to_hex_spaced(&data);
        assert_eq!(text.len(), data.len() * 3 - 1);
        assert!(text.capacity() <= data.len() * 3);
        assert_eq!(parse_hex(&text).unwrap(), data);
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse_hex("FE AB 00").unwrap(), vec![0xFE, 0xAB, 0x00]);
        assert_eq!(parse_hex("feab00").unwrap(), vec![0xFE, 0xAB, 0x00]);
        assert_eq!(parse_hex("0xFEAB00").unwrap(), vec![0xFE, 0xAB, 0x00]);
        assert_eq!(parse_hex("  ").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(matches!(parse_hex("F"), Err(PacketError::InvalidHex(_))));
        assert!(matches!(parse_hex("ZZ"), Err(PacketError::InvalidHex(_))));
    }
}
