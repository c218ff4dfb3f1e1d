//! Error types for frlink-packet.

use thiserror::Error;

/// Errors that can occur in the shared packet primitives.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PacketError {
    /// Ciphertext is not a whole number of AES blocks.
    #[error("ciphertext length {len} is not a multiple of the {block} byte block size")]
    InvalidCiphertextLength {
        /// Actual ciphertext length.
        len: usize,
        /// Cipher block size.
        block: usize,
    },

    /// Input text could not be parsed as hex.
    #[error("invalid hex input: {0}")]
    InvalidHex(String),
}

impl PacketError {
    /// Create an invalid hex error.
    pub fn invalid_hex(message: impl Into<String>) -> Self {
        PacketError::InvalidHex(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PacketError::InvalidCiphertextLength { len: 17, block: 16 };
        assert!(err.to_string().contains("17"));

        let err = PacketError::invalid_hex("odd number of digits");
        assert!(err.to_string().contains("odd number of digits"));
    }
}
