//! Error types for the BLE protocol.

use thiserror::Error;

/// Reasons a BLE frame cannot be built or parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BleFrameError {
    /// Buffer is shorter than the minimum frame.
    #[error("frame too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    /// Header is not `55 55`.
    #[error("bad header: 0x{0:04X}")]
    BadHeader(u16),

    /// Length field disagrees with the buffer length.
    #[error("length mismatch: declared {declared} bytes, got {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    /// Footer is not `AA AA`.
    #[error("bad footer: 0x{0:04X}")]
    BadFooter(u16),

    /// XOR checksum does not match.
    #[error("checksum mismatch: expected 0x{expected:02X}, got 0x{actual:02X}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    /// Frame would not fit in the one-byte length field.
    #[error("frame too long: {len} bytes exceeds {max}")]
    FrameTooLong { len: usize, max: usize },
}

/// Result type alias for BLE frame operations.
pub type BleResult<T> = Result<T, BleFrameError>;
