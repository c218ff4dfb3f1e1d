//! Error types for the runner.

use frlink_ble_protocol::BleFrameError;
use frlink_packet::PacketError;
use frlink_sim::SimError;
use frlink_uart_protocol::WiredFrameError;
use thiserror::Error;

/// Errors surfaced by `frlink` commands.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("{0}")]
    Packet(#[from] PacketError),

    #[error("serial frame error: {0}")]
    Wired(#[from] WiredFrameError),

    #[error("BLE frame error: {0}")]
    Ble(#[from] BleFrameError),

    #[error("{0}")]
    Sim(#[from] SimError),

    #[error("payload too long: {len} bytes, max {max}")]
    PayloadTooLong { len: usize, max: usize },

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// Result type alias for runner operations.
pub type RunnerResult<T> = Result<T, RunnerError>;
