//! Protocol error types.

use thiserror::Error;

/// Structural problems that make a buffer unparseable as a serial frame.
///
/// A checksum mismatch is deliberately absent: it is reported through
/// [`ParsedWiredFrame::checksum_valid`](crate::ParsedWiredFrame::checksum_valid)
/// so that corrupted frames can still be inspected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WiredFrameError {
    /// Buffer is shorter than the fixed frame overhead.
    #[error("frame too short: expected at least {expected} bytes, got {actual}")]
    TooShort {
        /// Minimum frame length.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// First byte is not the frame head marker.
    #[error("bad frame head: expected 0xFE, got 0x{0:02X}")]
    BadHead(u8),

    /// Declared payload length does not match the buffer length.
    #[error("length mismatch: declared payload of {declared} bytes implies a {expected}-byte frame, got {actual}")]
    LengthMismatch {
        /// Payload length from the length field.
        declared: usize,
        /// Frame length implied by the length field.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// Frame does not end with the terminator pair.
    #[error("bad terminator: expected 0A 0D, got {:02X} {:02X}", .0[0], .0[1])]
    BadTerminator([u8; 2]),
}

/// Result type alias for serial frame operations.
pub type WiredResult<T> = Result<T, WiredFrameError>;
