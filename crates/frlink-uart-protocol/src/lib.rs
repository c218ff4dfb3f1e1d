//! Serial link protocol between the host controller (SOC) and the vehicle
//! microcontroller (MCU).
//!
//! Every message is a single frame carrying a 16-bit command id and a
//! length-prefixed payload, protected by an additive checksum.
//!
//! # Example
//!
//! ```rust
//! use frlink_uart_protocol::{build_request, parse_frame, CMD_DEVICE_STATUS};
//!
//! let frame = build_request(CMD_DEVICE_STATUS, 1, &[]);
//! let parsed = parse_frame(&frame).unwrap();
//! assert_eq!(parsed.command_id, CMD_DEVICE_STATUS);
//! assert!(parsed.checksum_valid);
//! ```

mod commands;
mod constants;
mod error;
mod frame;
mod types;

pub use commands::*;
pub use constants::*;
pub use error::*;
pub use frame::*;
pub use types::*;
