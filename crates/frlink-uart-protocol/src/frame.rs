//! Frame encoding/decoding for the serial link.
//!
//! Multi-byte fields are big-endian. The checksum is the two's-complement of
//! the byte sum from `head` through the last payload byte.
//!
//! ```text
//! +------+------+---------+---------+---------+-----------+-----+------+------+
//! | 0xFE | sync | feature | cmd_id  | length  | payload   | sum | 0x0A | 0x0D |
//! | 1    | 1    | 2 (BE)  | 2 (BE)  | 2 (BE)  | length    | 1   | 1    | 1    |
//! +------+------+---------+---------+---------+-----------+-----+------+------+
//! ```
//!
//! The transport delivers exactly one frame per buffer; there is no resync or
//! reassembly here.

use bytes::BufMut;
use frlink_packet::hex::to_hex_spaced;

use crate::commands::command_label;
use crate::constants::*;
use crate::error::*;
use crate::types::*;

/// A serial frame ready to be encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiredFrame {
    /// Direction marker.
    pub sync: u8,
    /// Channel selector.
    pub feature: u16,
    /// Command identifier.
    pub command_id: u16,
    /// Payload bytes.
    pub payload: Vec<u8>,
}

impl WiredFrame {
    /// Create a frame from its fields.
    pub fn new(sync: u8, feature: u16, command_id: u16, payload: impl Into<Vec<u8>>) -> Self {
        WiredFrame {
            sync,
            feature,
            command_id,
            payload: payload.into(),
        }
    }

    /// Host command on the command channel: payload is `sequence` followed by `data`.
    pub fn request(command_id: u16, sequence: u8, data: &[u8]) -> Self {
        let mut payload = Vec::with_capacity(1 + data.len());
        payload.push(sequence);
        payload.extend_from_slice(data);
        WiredFrame::new(SYNC_SOC_TO_MCU, FEATURE_CMD, command_id, payload)
    }

    /// MCU reply on the response channel: payload is `sequence`, `result_code`, then `extra`.
    pub fn response(command_id: u16, sequence: u8, result_code: u8, extra: &[u8]) -> Self {
        let mut payload = Vec::with_capacity(2 + extra.len());
        payload.push(sequence);
        payload.push(result_code);
        payload.extend_from_slice(extra);
        WiredFrame::new(SYNC_MCU_TO_SOC, FEATURE_RESP, command_id, payload)
    }

    /// Direction implied by the sync byte.
    pub fn direction(&self) -> Direction {
        Direction::from_sync(self.sync)
    }

    /// Encode to wire bytes.
    pub fn encode(&self) -> Vec<u8> {
        build_frame(self.sync, self.feature, self.command_id, &self.payload)
    }
}

/// Build a serial frame.
///
/// Never fails. Keeping the result within [`MAX_FRAME_LEN`] is up to the caller.
pub fn build_frame(sync: u8, feature: u16, command_id: u16, payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(FRAME_OVERHEAD + payload.len());
    buf.put_u8(FRAME_HEAD);
    buf.put_u8(sync);
    buf.put_u16(feature);
    buf.put_u16(command_id);
    buf.put_u16(payload.len() as u16);
    buf.put_slice(payload);

    let checksum = FRAME_CHECKSUM.compute(&buf);
    buf.put_u8(checksum);
    buf.put_slice(&FRAME_END);
    buf
}

/// Build a host command frame (see [`WiredFrame::request`]).
pub fn build_request(command_id: u16, sequence: u8, data: &[u8]) -> Vec<u8> {
    WiredFrame::request(command_id, sequence, data).encode()
}

/// Build an MCU reply frame (see [`WiredFrame::response`]).
pub fn build_response(command_id: u16, sequence: u8, result_code: u8, extra: &[u8]) -> Vec<u8> {
    WiredFrame::response(command_id, sequence, result_code, extra).encode()
}

/// A structurally valid serial frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedWiredFrame {
    /// Direction marker.
    pub sync: u8,
    /// Channel selector.
    pub feature: u16,
    /// Command identifier.
    pub command_id: u16,
    /// Payload bytes.
    pub payload: Vec<u8>,
    /// Checksum byte as received.
    pub checksum: u8,
    /// Whether the received checksum matches the frame contents.
    pub checksum_valid: bool,
    /// Direction implied by the sync byte.
    pub direction: Direction,
    /// Total frame length in bytes.
    pub total_len: usize,
}

impl ParsedWiredFrame {
    /// Payload length (the value of the length field).
    pub fn length(&self) -> usize {
        self.payload.len()
    }

    /// Channel as a typed value.
    pub fn feature_kind(&self) -> Feature {
        Feature::from(self.feature)
    }

    /// Sequence number, the first payload byte by convention.
    pub fn sequence(&self) -> Option<u8> {
        self.payload.first().copied()
    }

    /// Result code of a reply, the second payload byte by convention.
    pub fn result_code(&self) -> Option<ResultCode> {
        self.payload.get(1).copied().map(ResultCode::from)
    }

    /// One-line description for logs.
    pub fn summary(&self) -> String {
        format!(
            "[{}] {} (0x{:02X}) | sync=0x{:02X} | feature=0x{:04X} | data_len={} | data={} | checksum=0x{:02X} ({}) | total_len={}",
            self.direction,
            command_label(self.command_id),
            self.command_id,
            self.sync,
            self.feature,
            self.payload.len(),
            to_hex_spaced(&self.payload),
            self.checksum,
            if self.checksum_valid { "valid" } else { "invalid" },
            self.total_len,
        )
    }
}

/// Parse one serial frame.
///
/// Structural problems are errors; a bad checksum only clears
/// [`ParsedWiredFrame::checksum_valid`].
pub fn parse_frame(data: &[u8]) -> WiredResult<ParsedWiredFrame> {
    if data.len() < FRAME_OVERHEAD {
        return Err(WiredFrameError::TooShort {
            expected: FRAME_OVERHEAD,
            actual: data.len(),
        });
    }

    if data[0] != FRAME_HEAD {
        return Err(WiredFrameError::BadHead(data[0]));
    }

    let sync = data[1];
    let feature = u16::from_be_bytes([data[2], data[3]]);
    let command_id = u16::from_be_bytes([data[4], data[5]]);
    let declared = u16::from_be_bytes([data[6], data[7]]) as usize;

    // Length comes from the field, never from the buffer size
    let expected = FRAME_OVERHEAD + declared;
    if data.len() != expected {
        return Err(WiredFrameError::LengthMismatch {
            declared,
            expected,
            actual: data.len(),
        });
    }

    let checksum_offset = HEADER_LEN + declared;
    let end = [data[checksum_offset + 1], data[checksum_offset + 2]];
    if end != FRAME_END {
        return Err(WiredFrameError::BadTerminator(end));
    }

    let checksum = data[checksum_offset];
    let checksum_valid = FRAME_CHECKSUM.verify(&data[..checksum_offset], checksum);
    if !checksum_valid {
        log::debug!(
            "serial frame 0x{:02X}: {} checksum mismatch (received 0x{:02X})",
            command_id,
            FRAME_CHECKSUM,
            checksum
        );
    }

    Ok(ParsedWiredFrame {
        sync,
        feature,
        command_id,
        payload: data[HEADER_LEN..checksum_offset].to_vec(),
        checksum,
        checksum_valid,
        direction: Direction::from_sync(sync),
        total_len: data.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_known_bytes() {
        let frame = build_frame(SYNC_SOC_TO_MCU, FEATURE_CMD, CMD_DEVICE_STATUS, &[]);
        assert_eq!(
            frame,
            vec![0xFE, 0xAB, 0xFF, 0x01, 0x02, 0x09, 0x00, 0x00, 0x4C, 0x0A, 0x0D]
        );
    }

    #[test]
    fn test_roundtrip() {
        let payload: Vec<u8> = (0..40).collect();
        let frame = build_frame(0xAB, 0xFF03, 0x0117, &payload);
        assert_eq!(frame.len(), FRAME_OVERHEAD + payload.len());

        let parsed = parse_frame(&frame).unwrap();
        assert_eq!(parsed.sync, 0xAB);
        assert_eq!(parsed.feature, 0xFF03);
        assert_eq!(parsed.feature_kind(), Feature::Settings);
        assert_eq!(parsed.command_id, 0x0117);
        assert_eq!(parsed.payload, payload);
        assert!(parsed.checksum_valid);
        assert_eq!(parsed.direction, Direction::SocToMcu);
        assert_eq!(parsed.total_len, frame.len());
    }

    #[test]
    fn test_roundtrip_max_payload() {
        let payload = vec![0xEE; MAX_PAYLOAD_LEN];
        let frame = build_frame(0xBA, FEATURE_RESP, 0x0208, &payload);
        assert_eq!(frame.len(), MAX_FRAME_LEN);

        let parsed = parse_frame(&frame).unwrap();
        assert_eq!(parsed.length(), MAX_PAYLOAD_LEN);
        assert!(parsed.checksum_valid);
    }

    #[test]
    fn test_empty_payload() {
        let frame = build_frame(0xAB, FEATURE_CMD, CMD_CONNECT, &[]);
        assert_eq!(frame.len(), FRAME_OVERHEAD);

        let parsed = parse_frame(&frame).unwrap();
        assert_eq!(parsed.length(), 0);
        assert!(parsed.checksum_valid);
        assert_eq!(parsed.total_len, FRAME_OVERHEAD);
        assert_eq!(parsed.sequence(), None);
    }

    #[test]
    fn test_payload_corruption_flags_checksum() {
        let payload = [0x01, 0x02, 0x03, 0x04, 0x05];
        let frame = build_frame(0xAB, FEATURE_CMD, CMD_NFC_UNLOCK, &payload);

        for i in 0..payload.len() {
            let mut corrupted = frame.clone();
            corrupted[HEADER_LEN + i] ^= 0x5A;
            let parsed = parse_frame(&corrupted).expect("structure still valid");
            assert!(!parsed.checksum_valid, "flip at payload byte {} went unnoticed", i);
        }
    }

    #[test]
    fn test_frame_sum_cancels_to_zero() {
        let frame = build_frame(0xAB, FEATURE_CMD, CMD_DEVICE_STATUS, &[0x05]);
        let covered = &frame[..frame.len() - FRAME_END.len()];
        let total = covered.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
        assert_eq!(total, 0);
        assert_eq!(FRAME_CHECKSUM, frlink_packet::ChecksumKind::Additive);
    }

    #[test]
    fn test_checksum_byte_corruption() {
        let mut frame = build_frame(0xAB, FEATURE_CMD, CMD_CONNECT, &[0x07]);
        let offset = HEADER_LEN + 1;
        frame[offset] = frame[offset].wrapping_add(1);
        let parsed = parse_frame(&frame).unwrap();
        assert!(!parsed.checksum_valid);
    }

    #[test]
    fn test_too_short() {
        let result = parse_frame(&[0xFE, 0xAB, 0xFF]);
        assert_eq!(
            result,
            Err(WiredFrameError::TooShort {
                expected: FRAME_OVERHEAD,
                actual: 3
            })
        );
    }

    #[test]
    fn test_bad_head() {
        let mut frame = build_frame(0xAB, FEATURE_CMD, CMD_CONNECT, &[]);
        frame[0] = 0xFF;
        assert_eq!(parse_frame(&frame), Err(WiredFrameError::BadHead(0xFF)));
    }

    #[test]
    fn test_length_mismatch() {
        let mut frame = build_frame(0xAB, FEATURE_CMD, CMD_CONNECT, &[1, 2, 3]);
        frame[7] = 4;
        assert!(matches!(
            parse_frame(&frame),
            Err(WiredFrameError::LengthMismatch {
                declared: 4,
                expected: 15,
                actual: 14
            })
        ));

        let mut frame = build_frame(0xAB, FEATURE_CMD, CMD_CONNECT, &[1, 2, 3]);
        frame.push(0x00);
        assert!(matches!(
            parse_frame(&frame),
            Err(WiredFrameError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_bad_terminator() {
        let mut frame = build_frame(0xAB, FEATURE_CMD, CMD_CONNECT, &[0x01]);
        let last = frame.len() - 1;
        frame[last] = 0x0A;
        assert_eq!(
            parse_frame(&frame),
            Err(WiredFrameError::BadTerminator([0x0A, 0x0A]))
        );
    }

    #[test]
    fn test_build_response() {
        let frame = build_response(CMD_DEVICE_STATUS, 0x07, RESULT_SUCCESS, &[0x00, 0x00, 0x01, 0x01]);
        let parsed = parse_frame(&frame).unwrap();
        assert_eq!(parsed.sync, SYNC_MCU_TO_SOC);
        assert_eq!(parsed.feature, FEATURE_RESP);
        assert_eq!(parsed.direction, Direction::McuToSoc);
        assert_eq!(parsed.payload, vec![0x07, 0x00, 0x00, 0x00, 0x01, 0x01]);
        assert_eq!(parsed.sequence(), Some(0x07));
        assert_eq!(parsed.result_code(), Some(ResultCode::Success));
    }

    #[test]
    fn test_build_request() {
        let frame = build_request(CMD_CHORD_HORN_VOLUME, 3, &[0x0A]);
        let parsed = parse_frame(&frame).unwrap();
        assert_eq!(parsed.sync, SYNC_SOC_TO_MCU);
        assert_eq!(parsed.feature, FEATURE_CMD);
        assert_eq!(parsed.payload, vec![3, 0x0A]);
    }

    #[test]
    fn test_summary_mentions_fields() {
        let frame = build_request(CMD_DEVICE_STATUS, 1, &[]);
        let summary = parse_frame(&frame).unwrap().summary();
        assert!(summary.contains("SOC→MCU"));
        assert!(summary.contains("Device status query"));
        assert!(summary.contains("valid"));
        assert!(summary.contains("total_len=12"));
    }
}
