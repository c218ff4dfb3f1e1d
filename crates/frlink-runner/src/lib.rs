//! `frlink` command-line front end.
//!
//! Wraps the serial and BLE codecs and the simulated peripheral behind a small
//! CLI, configured from an optional YAML file.

pub mod app;
pub mod cli;
pub mod config;
mod error;
pub mod logging;

pub use app::{list_commands, run, App, RespondStats};
pub use cli::{Cli, Command, Protocol};
pub use config::{BleConfig, Config, CryptoSetting, WiredConfig};
pub use error::*;
