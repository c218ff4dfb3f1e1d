//! Protocol constants for the BLE link.
//!
//! Multi-byte fields on this link are little-endian.

use frlink_packet::ChecksumKind;

// ============================================================================
// Framing
// ============================================================================

/// Frame header, little-endian on the wire (`55 55`).
pub const FRAME_HEADER: u16 = 0x5555;
/// Frame footer, little-endian on the wire (`AA AA`).
pub const FRAME_FOOTER: u16 = 0xAAAA;

/// Integrity check closing every frame.
pub const FRAME_CHECKSUM: ChecksumKind = ChecksumKind::Xor;

/// Header, total length, crypto, sequence and command id.
pub const HEADER_LEN: usize = 2 + 1 + 1 + 1 + 2;
/// XOR checksum and footer.
pub const TRAILER_LEN: usize = 1 + 2;
/// Bytes a frame carries besides its payload. Also the minimum frame length.
pub const FRAME_OVERHEAD: usize = HEADER_LEN + TRAILER_LEN;
/// Largest frame a one-byte length field can describe.
pub const MAX_FRAME_LEN: usize = u8::MAX as usize;

// ============================================================================
// Crypto Types
// ============================================================================

/// Payload sent in the clear.
pub const CRYPTO_NONE: u8 = 0x00;
/// Triple-DES. Reserved; never applied.
pub const CRYPTO_TRIPLE_DES: u8 = 0x01;
/// AES-128-CBC with PKCS7 padding.
pub const CRYPTO_AES128: u8 = 0x02;

// ============================================================================
// Command IDs
// ============================================================================

/// Acknowledgement.
pub const CMD_ACK: u16 = 0x0000;
/// Authentication result (device to phone, reply to [`CMD_CONNECT`]).
pub const CMD_AUTH_RESULT: u16 = 0x0101;
/// Forwarded FD command.
pub const CMD_FD: u16 = 0x01FD;
/// Connect/authenticate (phone to device).
pub const CMD_CONNECT: u16 = 0x01FE;
