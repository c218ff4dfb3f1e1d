//! Common types used in the protocol.

use crate::constants::*;

/// Payload encryption selected by the crypto byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CryptoType {
    /// Payload in the clear.
    #[default]
    None,
    /// Triple-DES. Carried on the wire but never applied.
    TripleDes,
    /// AES-128-CBC with PKCS7 padding.
    Aes128,
    /// Unrecognised crypto byte.
    Other(u8),
}

impl CryptoType {
    /// Whether this type actually transforms the payload.
    pub fn is_encrypted(self) -> bool {
        matches!(self, CryptoType::Aes128)
    }
}

impl From<u8> for CryptoType {
    fn from(value: u8) -> Self {
        match value {
            CRYPTO_NONE => CryptoType::None,
            CRYPTO_TRIPLE_DES => CryptoType::TripleDes,
            CRYPTO_AES128 => CryptoType::Aes128,
            other => CryptoType::Other(other),
        }
    }
}

impl From<CryptoType> for u8 {
    fn from(crypto: CryptoType) -> Self {
        match crypto {
            CryptoType::None => CRYPTO_NONE,
            CryptoType::TripleDes => CRYPTO_TRIPLE_DES,
            CryptoType::Aes128 => CRYPTO_AES128,
            CryptoType::Other(value) => value,
        }
    }
}

impl std::fmt::Display for CryptoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CryptoType::None => write!(f, "none"),
            CryptoType::TripleDes => write!(f, "3DES"),
            CryptoType::Aes128 => write!(f, "AES-128"),
            CryptoType::Other(value) => write!(f, "unknown (0x{:02X})", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crypto_type_conversion() {
        assert_eq!(CryptoType::from(0x00), CryptoType::None);
        assert_eq!(CryptoType::from(0x01), CryptoType::TripleDes);
        assert_eq!(CryptoType::from(0x02), CryptoType::Aes128);
        assert_eq!(CryptoType::from(0x09), CryptoType::Other(0x09));
        assert_eq!(u8::from(CryptoType::Other(0x09)), 0x09);
        assert_eq!(u8::from(CryptoType::Aes128), 0x02);
    }

    #[test]
    fn test_only_aes_encrypts() {
        assert!(CryptoType::Aes128.is_encrypted());
        assert!(!CryptoType::TripleDes.is_encrypted());
        assert!(!CryptoType::None.is_encrypted());
        assert!(!CryptoType::Other(2).is_encrypted());
    }
}
