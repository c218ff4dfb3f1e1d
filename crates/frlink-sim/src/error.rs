//! Error types for the simulator.

use frlink_ble_protocol::BleFrameError;
use frlink_uart_protocol::WiredFrameError;
use thiserror::Error;

/// Errors raised while decoding telemetry blocks or answering requests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A telemetry block had the wrong size.
    #[error("{block}: expected {expected} bytes, got {actual}")]
    BlockLength {
        block: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Request was not a valid serial frame.
    #[error("invalid serial request: {0}")]
    Wired(#[from] WiredFrameError),

    /// Request was not a valid BLE frame, or the reply could not be built.
    #[error("invalid BLE frame: {0}")]
    Ble(#[from] BleFrameError),
}

/// Result type alias for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
