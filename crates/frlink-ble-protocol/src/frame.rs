//! Frame encoding/decoding for the BLE link.
//!
//! ```text
//! +-------+-------+--------+------+--------+-----------+---------+-----+-------+
//! | 55 55 | total | crypto | seq  | cmd_id | payload   | ...     | xor | AA AA |
//! | 2 LE  | 1     | 1      | 1    | 2 LE   | total-10  |         | 1   | 2 LE  |
//! +-------+-------+--------+------+--------+-----------+---------+-----+-------+
//! ```
//!
//! `total` counts the whole frame, after encryption. The XOR checksum covers
//! every byte before it. Any structural or checksum problem rejects the frame.

use bytes::BufMut;
use frlink_packet::{hex::to_hex_spaced, EncryptionContext};

use crate::commands::command_label;
use crate::constants::*;
use crate::error::*;
use crate::types::*;

/// A BLE frame after validation and optional decryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedWirelessFrame {
    /// Crypto byte as received.
    pub crypto: CryptoType,
    /// Sequence number.
    pub sequence: u8,
    /// Command identifier.
    pub command_id: u16,
    /// Decoded payload. Equal to `wire_payload` unless AES decryption succeeded.
    pub payload: Vec<u8>,
    /// Payload bytes exactly as carried on the wire.
    pub wire_payload: Vec<u8>,
    /// XOR checksum byte.
    pub checksum: u8,
    /// Total frame length in bytes.
    pub total_len: usize,
}

impl ParsedWirelessFrame {
    /// One-line description for logs.
    pub fn summary(&self) -> String {
        format!(
            "{} (0x{:04X}) | seq={} | crypto={} | data={} | total_len={}",
            command_label(self.command_id),
            self.command_id,
            self.sequence,
            self.crypto,
            to_hex_spaced(&self.payload),
            self.total_len,
        )
    }
}

/// Builds and parses BLE frames with a given key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BleCodec {
    encryption: EncryptionContext,
}

impl BleCodec {
    /// Codec using the given key material.
    pub fn new(encryption: EncryptionContext) -> Self {
        BleCodec { encryption }
    }

    /// Key material in use.
    pub fn encryption(&self) -> &EncryptionContext {
        &self.encryption
    }

    /// Build a frame. AES-128 encrypts non-empty payloads; every other crypto
    /// type sends the payload as given.
    pub fn build_frame(
        &self,
        command_id: u16,
        payload: &[u8],
        crypto: CryptoType,
        sequence: u8,
    ) -> BleResult<Vec<u8>> {
        let body = if crypto.is_encrypted() && !payload.is_empty() {
            self.encryption.encrypt(payload)
        } else {
            payload.to_vec()
        };

        let total = FRAME_OVERHEAD + body.len();
        if total > MAX_FRAME_LEN {
            return Err(BleFrameError::FrameTooLong {
                len: total,
                max: MAX_FRAME_LEN,
            });
        }

        let mut buf = Vec::with_capacity(total);
        buf.put_u16_le(FRAME_HEADER);
        buf.put_u8(total as u8);
        buf.put_u8(crypto.into());
        buf.put_u8(sequence);
        buf.put_u16_le(command_id);
        buf.put_slice(&body);
        let checksum = FRAME_CHECKSUM.compute(&buf);
        buf.put_u8(checksum);
        buf.put_u16_le(FRAME_FOOTER);
        Ok(buf)
    }

    /// Parse a frame, reporting why it was rejected.
    pub fn try_parse_frame(&self, data: &[u8]) -> BleResult<ParsedWirelessFrame> {
        let len = data.len();
        if len < FRAME_OVERHEAD {
            return Err(BleFrameError::TooShort {
                expected: FRAME_OVERHEAD,
                actual: len,
            });
        }

        let header = u16::from_le_bytes([data[0], data[1]]);
        if header != FRAME_HEADER {
            return Err(BleFrameError::BadHeader(header));
        }

        let declared = data[2] as usize;
        if declared != len {
            return Err(BleFrameError::LengthMismatch {
                declared,
                actual: len,
            });
        }

        let footer = u16::from_le_bytes([data[len - 2], data[len - 1]]);
        if footer != FRAME_FOOTER {
            return Err(BleFrameError::BadFooter(footer));
        }

        let checksum_offset = len - TRAILER_LEN;
        let checksum = data[checksum_offset];
        let expected = FRAME_CHECKSUM.compute(&data[..checksum_offset]);
        if expected != checksum {
            return Err(BleFrameError::ChecksumMismatch {
                expected,
                actual: checksum,
            });
        }

        let crypto = CryptoType::from(data[3]);
        let sequence = data[4];
        let command_id = u16::from_le_bytes([data[5], data[6]]);
        let wire_payload = data[HEADER_LEN..checksum_offset].to_vec();

        let payload = if crypto.is_encrypted() && !wire_payload.is_empty() {
            match self.encryption.decrypt(&wire_payload) {
                Ok(plain) => plain,
                Err(e) => {
                    log::debug!(
                        "BLE frame 0x{:04X}: {}, keeping payload as received",
                        command_id,
                        e
                    );
                    wire_payload.clone()
                }
            }
        } else {
            wire_payload.clone()
        };

        Ok(ParsedWirelessFrame {
            crypto,
            sequence,
            command_id,
            payload,
            wire_payload,
            checksum,
            total_len: len,
        })
    }

    /// Parse a frame, returning `None` for anything malformed.
    pub fn parse_frame(&self, data: &[u8]) -> Option<ParsedWirelessFrame> {
        match self.try_parse_frame(data) {
            Ok(frame) => Some(frame),
            Err(e) => {
                log::trace!("BLE frame rejected: {}", e);
                None
            }
        }
    }
}

/// Build a frame with the default key (see [`BleCodec::build_frame`]).
pub fn build_frame(
    command_id: u16,
    payload: &[u8],
    crypto: CryptoType,
    sequence: u8,
) -> BleResult<Vec<u8>> {
    BleCodec::default().build_frame(command_id, payload, crypto, sequence)
}

/// Parse a frame with the default key (see [`BleCodec::try_parse_frame`]).
pub fn try_parse_frame(data: &[u8]) -> BleResult<ParsedWirelessFrame> {
    BleCodec::default().try_parse_frame(data)
}

/// Parse a frame with the default key (see [`BleCodec::parse_frame`]).
pub fn parse_frame(data: &[u8]) -> Option<ParsedWirelessFrame> {
    BleCodec::default().parse_frame(data)
}
