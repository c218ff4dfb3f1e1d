//! BLE link protocol between a phone and the vehicle.
//!
//! Frames are little-endian with a one-byte total length, an XOR checksum and
//! optional AES-128 payload encryption.
//!
//! # Example
//!
//! ```rust
//! use frlink_ble_protocol::{build_frame, parse_frame, CryptoType, CMD_CONNECT};
//!
//! let frame = build_frame(CMD_CONNECT, &[1, 2, 3], CryptoType::Aes128, 7).unwrap();
//! let parsed = parse_frame(&frame).unwrap();
//! assert_eq!(parsed.payload, vec![1, 2, 3]);
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
