//! Simulated MCU for the frlink protocols.
//!
//! [`simulate`] maps a command id to a canned reply payload.
//! [`FakePeripheral`] wraps that in full reply frames for either link.

mod error;
mod peripheral;
mod sequence;
mod simulator;
mod telemetry;

pub use error::*;
pub use peripheral::*;
pub use sequence::*;
pub use simulator::*;
pub use telemetry::*;
