//! YAML configuration for the `frlink` tool.
//!
//! ```yaml
//! wired:
//!   sync: 0xAB
//!   feature: 0xFF01
//!   prepend_sequence: true
//!   start_sequence: 0
//! ble:
//!   crypto: aes128
//!   start_sequence: 0
//! log_level: debug
//! ```
//!
//! Every section and field is optional.

use std::path::Path;

use clap::ValueEnum;
use frlink_ble_protocol::CryptoType;
use frlink_uart_protocol::{FEATURE_CMD, SYNC_SOC_TO_MCU};
use serde::{Deserialize, Serialize};

use crate::error::*;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Serial frame defaults.
    #[serde(default)]
    pub wired: WiredConfig,
    /// BLE frame defaults.
    #[serde(default)]
    pub ble: BleConfig,
    /// Log filter, used when `RUST_LOG` and `--log-level` are absent.
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    /// Parse configuration from YAML text.
    pub fn from_yaml(text: &str) -> RunnerResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> RunnerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }
}

/// Defaults for frames built on the serial link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WiredConfig {
    pub sync: u8,
    pub feature: u16,
    /// Put the sequence byte in front of the data.
    pub prepend_sequence: bool,
    pub start_sequence: u8,
}

impl Default for WiredConfig {
    fn default() -> Self {
        WiredConfig {
            sync: SYNC_SOC_TO_MCU,
            feature: FEATURE_CMD,
            prepend_sequence: true,
            start_sequence: 0,
        }
    }
}

/// Defaults for frames built on the BLE link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BleConfig {
    pub crypto: CryptoSetting,
    pub start_sequence: u8,
}

/// Crypto byte choice for BLE frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CryptoSetting {
    #[default]
    None,
    #[value(alias = "triple_des")]
    TripleDes,
    Aes128,
}

impl From<CryptoSetting> for CryptoType {
    fn from(setting: CryptoSetting) -> Self {
        match setting {
            CryptoSetting::None => CryptoType::None,
            CryptoSetting::TripleDes => CryptoType::TripleDes,
            CryptoSetting::Aes128 => CryptoType::Aes128,
        }
    }
}
