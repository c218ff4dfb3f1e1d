//! Frame integrity checks.
//!
//! The serial link protects each frame with a two's-complement additive
//! checksum so that the sum of all covered bytes plus the checksum is zero
//! modulo 256. The BLE link uses a block check character: the XOR of every
//! covered byte. Both return 0 for an empty input.

/// Two's-complement of the byte sum, modulo 256.
pub fn additive_checksum(data: &[u8]) -> u8 {
    let sum = data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    (!sum).wrapping_add(1)
}

/// XOR of all bytes.
pub fn xor_checksum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// Selects one of the two integrity functions at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumKind {
    /// Two's-complement additive checksum (serial link).
    Additive,
    /// XOR block check (BLE link).
    Xor,
}

impl ChecksumKind {
    /// Compute the checksum of `data`.
    pub fn compute(self, data: &[u8]) -> u8 {
        match self {
            ChecksumKind::Additive => additive_checksum(data),
            ChecksumKind::Xor => xor_checksum(data),
        }
    }

    /// Check `data` against an expected checksum byte.
    pub fn verify(self, data: &[u8], expected: u8) -> bool {
        self.compute(data) == expected
    }
}

impl std::fmt::Display for ChecksumKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChecksumKind::Additive => write!(f, "additive"),
            ChecksumKind::Xor => write!(f, "xor"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(additive_checksum(&[]), 0);
        assert_eq!(xor_checksum(&[]), 0);
    }

    #[test]
    fn test_additive_checksum_cancels_sum() {
        let data = [0xFE, 0xAB, 0xFF, 0x01, 0x00, 0x09, 0x00, 0x00];
        let checksum = additive_checksum(&data);
        let total = data
            .iter()
            .fold(checksum, |acc, &b| acc.wrapping_add(b));
        assert_eq!(total, 0);
    }

    #[test]
    fn test_additive_checksum_known_value() {
        // 0x01 + 0x02 + 0x03 = 0x06, negated = 0xFA
        assert_eq!(additive_checksum(&[0x01, 0x02, 0x03]), 0xFA);
        // Sum wraps past 0xFF
        assert_eq!(additive_checksum(&[0xFF, 0x02]), 0xFF);
    }

    #[test]
    fn test_xor_checksum_known_value() {
        assert_eq!(xor_checksum(&[0x55, 0x55]), 0x00);
        assert_eq!(xor_checksum(&[0x55, 0x55, 0x0A]), 0x0A);
        assert_eq!(xor_checksum(&[0xF0, 0x0F]), 0xFF);
    }

    #[test]
    fn test_kind_dispatch() {
        let data = [0x10, 0x20, 0x30];
        assert_eq!(ChecksumKind::Additive.compute(&data), additive_checksum(&data));
        assert_eq!(ChecksumKind::Xor.compute(&data), xor_checksum(&data));
        assert!(ChecksumKind::Xor.verify(&data, 0x00));
        assert!(!ChecksumKind::Additive.verify(&data, 0x00));
    }
}
