//! A fake MCU/vehicle that answers request frames with simulated replies.

use frlink_ble_protocol::{BleCodec, CryptoType, ParsedWirelessFrame};
use frlink_uart_protocol::{
    build_frame, build_response, parse_frame, ParsedWiredFrame, FEATURE_RESP, RESULT_SUCCESS,
    SYNC_MCU_TO_SOC,
};

use crate::error::*;
use crate::sequence::SequenceCounter;
use crate::simulator::ResponseSimulator;

/// Answers serial and BLE requests.
#[derive(Debug, Default)]
pub struct FakePeripheral {
    simulator: ResponseSimulator,
    ble_codec: BleCodec,
    ble_sequence: SequenceCounter,
}

impl FakePeripheral {
    pub fn new(simulator: ResponseSimulator, ble_codec: BleCodec, ble_start_sequence: u8) -> Self {
        FakePeripheral {
            simulator,
            ble_codec,
            ble_sequence: SequenceCounter::new(ble_start_sequence),
        }
    }

    pub fn simulator(&self) -> &ResponseSimulator {
        &self.simulator
    }

    /// Reply to a parsed serial request.
    ///
    /// The sequence byte is echoed from the first request payload byte (0 when
    /// the payload is empty). A success code is inserted before the simulated
    /// data unless the data already starts with one.
    pub fn reply_wired(&self, request: &ParsedWiredFrame) -> Vec<u8> {
        let sequence = request.sequence().unwrap_or(0);
        let data = self
            .simulator
            .get_response(request.command_id, &request.payload);

        let frame = match data.split_first() {
            Some((&first, rest)) if first == RESULT_SUCCESS => {
                build_response(request.command_id, sequence, RESULT_SUCCESS, rest)
            }
            Some(_) => build_response(request.command_id, sequence, RESULT_SUCCESS, &data),
            // an empty simulated reply carries only the sequence byte
            None => build_frame(SYNC_MCU_TO_SOC, FEATURE_RESP, request.command_id, &[sequence]),
        };

        tracing::debug!(
            command_id = request.command_id,
            sequence,
            len = frame.len(),
            "serial reply"
        );
        frame
    }

    /// Parse a serial request frame and reply to it.
    pub fn respond_wired(&self, request: &[u8]) -> SimResult<Vec<u8>> {
        let parsed = parse_frame(request)?;
        if !parsed.checksum_valid {
            tracing::warn!(command_id = parsed.command_id, "request checksum invalid, replying anyway");
        }
        Ok(self.reply_wired(&parsed))
    }

    /// Reply to a parsed BLE request with an unencrypted frame carrying the
    /// next peripheral sequence number.
    pub fn reply_ble(&self, request: &ParsedWirelessFrame) -> SimResult<Vec<u8>> {
        let data = self
            .simulator
            .get_response(request.command_id, &request.payload);
        let sequence = self.ble_sequence.next();
        let frame = self
            .ble_codec
            .build_frame(request.command_id, &data, CryptoType::None, sequence)?;

        tracing::debug!(
            command_id = request.command_id,
            sequence,
            len = frame.len(),
            "BLE reply"
        );
        Ok(frame)
    }

    /// Parse a BLE request frame and reply to it.
    pub fn respond_ble(&self, request: &[u8]) -> SimResult<Vec<u8>> {
        let parsed = self.ble_codec.try_parse_frame(request)?;
        self.reply_ble(&parsed)
    }
}
