//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::CryptoSetting;

/// Build, inspect and answer frlink serial and BLE frames.
#[derive(Parser, Debug)]
#[command(name = "frlink", version)]
pub struct Cli {
    /// YAML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `frlink_sim=trace`. Overrides `RUST_LOG`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serial link frames.
    Wired {
        #[command(subcommand)]
        action: WiredAction,
    },
    /// BLE link frames.
    Ble {
        #[command(subcommand)]
        action: BleAction,
    },
    /// Print the simulated reply payload for a command.
    Simulate {
        /// Command id, decimal or 0x-prefixed hex.
        #[arg(long, value_parser = parse_u16)]
        cmd: u16,
        /// Request payload as hex.
        #[arg(long, default_value = "")]
        data: String,
    },
    /// Read one hex frame per stdin line and write the simulated reply frame.
    Respond {
        #[arg(long, value_enum, default_value = "wired")]
        protocol: Protocol,
    },
    /// List the command catalog.
    Commands {
        #[arg(long, value_enum, default_value = "wired")]
        protocol: Protocol,
    },
}

#[derive(Subcommand, Debug)]
pub enum WiredAction {
    /// Build a frame and print it as hex.
    Build(WiredBuildArgs),
    /// Parse a hex frame and print a summary.
    Parse {
        /// Frame bytes as hex.
        hex: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct WiredBuildArgs {
    /// Command id, decimal or 0x-prefixed hex.
    #[arg(long, value_parser = parse_u16)]
    pub cmd: u16,
    /// Payload data as hex.
    #[arg(long, default_value = "")]
    pub data: String,
    /// Sync byte. Defaults to the configured value.
    #[arg(long, value_parser = parse_u8)]
    pub sync: Option<u8>,
    /// Feature field. Defaults to the configured value.
    #[arg(long, value_parser = parse_u16)]
    pub feature: Option<u16>,
    /// Sequence byte put in front of the data.
    #[arg(long, value_parser = parse_u8)]
    pub seq: Option<u8>,
    /// Send the data as given, without a sequence byte.
    #[arg(long, conflicts_with = "seq")]
    pub no_seq: bool,
}

#[derive(Subcommand, Debug)]
pub enum BleAction {
    /// Build a frame and print it as hex.
    Build(BleBuildArgs),
    /// Parse a hex frame and print a summary.
    Parse {
        /// Frame bytes as hex.
        hex: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct BleBuildArgs {
    /// Command id, decimal or 0x-prefixed hex.
    #[arg(long, value_parser = parse_u16)]
    pub cmd: u16,
    /// Payload data as hex (plaintext).
    #[arg(long, default_value = "")]
    pub data: String,
    /// Payload encryption. Defaults to the configured value.
    #[arg(long, value_enum)]
    pub crypto: Option<CryptoSetting>,
    /// Sequence byte. Defaults to the configured start sequence.
    #[arg(long, value_parser = parse_u8)]
    pub seq: Option<u8>,
}

/// Which link a subcommand works on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Protocol {
    Wired,
    Ble,
}

fn parse_number(text: &str) -> Result<u64, String> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(digits) => u64::from_str_radix(digits, 16),
        None => text.parse::<u64>(),
    };
    parsed.map_err(|e| format!("invalid number '{}': {}", text, e))
}

/// Parse a decimal or `0x` hex value that fits in 16 bits.
pub fn parse_u16(text: &str) -> Result<u16, String> {
    let value = parse_number(text)?;
    u16::try_from(value).map_err(|_| format!("{} does not fit in 16 bits", value))
}

/// Parse a decimal or `0x` hex value that fits in 8 bits.
pub fn parse_u8(text: &str) -> Result<u8, String> {
    let value = parse_number(text)?;
    u8::try_from(value).map_err(|_| format!("{} does not fit in 8 bits", value))
}
