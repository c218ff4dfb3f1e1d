//! Command handlers behind the `frlink` binary.

use std::io::{BufRead, Write};

use frlink_ble_protocol::{self as ble, BleCodec, CryptoType, ParsedWirelessFrame};
use frlink_packet::hex::{parse_hex, to_hex_spaced};
use frlink_sim::{FakePeripheral, ResponseSimulator};
use frlink_uart_protocol::{self as uart, ParsedWiredFrame, MAX_PAYLOAD_LEN};
use tracing::{debug, info, warn};

use crate::cli::*;
use crate::config::Config;
use crate::error::*;

/// Outcome of a `respond` session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RespondStats {
    /// Lines answered with a reply frame.
    pub replied: usize,
    /// Non-empty lines that could not be answered.
    pub skipped: usize,
}

/// Runs `frlink` subcommands against a loaded configuration.
#[derive(Debug)]
pub struct App {
    config: Config,
    codec: BleCodec,
    peripheral: FakePeripheral,
}

impl App {
    pub fn new(config: Config) -> Self {
        let codec = BleCodec::default();
        let peripheral =
            FakePeripheral::new(ResponseSimulator::new(), codec, config.ble.start_sequence);
        App {
            config,
            codec,
            peripheral,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one subcommand, reading `input` and writing results to `out`.
    pub fn execute<R: BufRead, W: Write>(
        &self,
        command: &Command,
        input: R,
        out: &mut W,
    ) -> RunnerResult<()> {
        match command {
            Command::Wired {
                action: WiredAction::Build(args),
            } => {
                let frame = self.wired_build(args)?;
                writeln!(out, "{}", to_hex_spaced(&frame))?;
            }
            Command::Wired {
                action: WiredAction::Parse { hex },
            } => {
                let frame = self.wired_parse(hex)?;
                writeln!(out, "{}", frame.summary())?;
            }
            Command::Ble {
                action: BleAction::Build(args),
            } => {
                let frame = self.ble_build(args)?;
                writeln!(out, "{}", to_hex_spaced(&frame))?;
            }
            Command::Ble {
                action: BleAction::Parse { hex },
            } => {
                let frame = self.ble_parse(hex)?;
                writeln!(out, "{}", frame.summary())?;
            }
            Command::Simulate { cmd, data } => {
                let reply = self.simulate(*cmd, data)?;
                writeln!(out, "{}", to_hex_spaced(&reply))?;
            }
            Command::Respond { protocol } => {
                let stats = self.respond(*protocol, input, out)?;
                info!(replied = stats.replied, skipped = stats.skipped, "input closed");
            }
            Command::Commands { protocol } => list_commands(*protocol, out)?,
        }
        Ok(())
    }

    /// Build a serial frame. Unset flags fall back to the `wired` config section.
    pub fn wired_build(&self, args: &WiredBuildArgs) -> RunnerResult<Vec<u8>> {
        let wired = &self.config.wired;
        let data = parse_hex(&args.data)?;

        let prepend = !args.no_seq && (args.seq.is_some() || wired.prepend_sequence);
        let payload = if prepend {
            let mut payload = Vec::with_capacity(1 + data.len());
            payload.push(args.seq.unwrap_or(wired.start_sequence));
            payload.extend_from_slice(&data);
            payload
        } else {
            data
        };

        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(RunnerError::PayloadTooLong {
                len: payload.len(),
                max: MAX_PAYLOAD_LEN,
            });
        }

        let sync = args.sync.unwrap_or(wired.sync);
        let feature = args.feature.unwrap_or(wired.feature);
        debug!(command_id = args.cmd, sync, feature, len = payload.len(), "building serial frame");
        Ok(uart::build_frame(sync, feature, args.cmd, &payload))
    }

    pub fn wired_parse(&self, hex: &str) -> RunnerResult<ParsedWiredFrame> {
        let bytes = parse_hex(hex)?;
        Ok(uart::parse_frame(&bytes)?)
    }

    /// Build a BLE frame. Unset flags fall back to the `ble` config section.
    pub fn ble_build(&self, args: &BleBuildArgs) -> RunnerResult<Vec<u8>> {
        let data = parse_hex(&args.data)?;
        let crypto: CryptoType = args.crypto.unwrap_or(self.config.ble.crypto).into();
        let sequence = args.seq.unwrap_or(self.config.ble.start_sequence);
        debug!(command_id = args.cmd, %crypto, sequence, "building BLE frame");
        Ok(self.codec.build_frame(args.cmd, &data, crypto, sequence)?)
    }

    pub fn ble_parse(&self, hex: &str) -> RunnerResult<ParsedWirelessFrame> {
        let bytes = parse_hex(hex)?;
        Ok(self.codec.try_parse_frame(&bytes)?)
    }

    /// Simulated reply payload for a command.
    pub fn simulate(&self, command_id: u16, data: &str) -> RunnerResult<Vec<u8>> {
        let request = parse_hex(data)?;
        Ok(self
            .peripheral
            .simulator()
            .get_response(command_id, &request))
    }

    /// Answer one hex frame per input line with one hex reply line.
    ///
    /// Blank lines are ignored. Lines that are not valid frames are logged and
    /// produce no output.
    pub fn respond<R: BufRead, W: Write>(
        &self,
        protocol: Protocol,
        input: R,
        out: &mut W,
    ) -> RunnerResult<RespondStats> {
        let mut stats = RespondStats::default();

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let reply = parse_hex(line)
                .map_err(RunnerError::from)
                .and_then(|request| {
                    let reply = match protocol {
                        Protocol::Wired => self.peripheral.respond_wired(&request)?,
                        Protocol::Ble => self.peripheral.respond_ble(&request)?,
                    };
                    Ok(reply)
                });

            match reply {
                Ok(reply) => {
                    writeln!(out, "{}", to_hex_spaced(&reply))?;
                    out.flush()?;
                    stats.replied += 1;
                }
                Err(e) => {
                    warn!(line = index + 1, error = %e, "skipping input line");
                    stats.skipped += 1;
                }
            }
        }

        Ok(stats)
    }
}

/// Print the command catalog for one link, one `0xNNNN  name` per line.
pub fn list_commands<W: Write>(protocol: Protocol, out: &mut W) -> RunnerResult<()> {
    let catalog = match protocol {
        Protocol::Wired => uart::COMMANDS,
        Protocol::Ble => ble::COMMANDS,
    };
    for (id, name) in catalog {
        writeln!(out, "0x{:04X}  {}", id, name)?;
    }
    Ok(())
}

/// Entry point used by the binary: load config, set up logging, run the command.
pub fn run(cli: Cli) -> RunnerResult<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let level = cli.log_level.as_deref().or(config.log_level.as_deref());
    crate::logging::init_logging(level)?;

    let app = App::new(config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app.execute(&cli.command, stdin.lock(), &mut out)
}
