//! End-to-end tests driving `frlink` subcommands through the library API.

use clap::Parser;
use frlink_ble_protocol as ble;
use frlink_packet::hex::{parse_hex, to_hex_spaced};
use frlink_runner::{App, Cli, Config};
use frlink_uart_protocol as uart;

/// Parse `args` as a command line and run it with `input` on stdin.
fn run_with_config(config: Config, args: &[&str], input: &str) -> String {
    let mut argv = vec!["frlink"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("arguments should parse");

    let app = App::new(config);
    let mut out = Vec::new();
    app.execute(&cli.command, input.as_bytes(), &mut out)
        .expect("command should succeed");
    String::from_utf8(out).expect("output is UTF-8")
}

fn run(args: &[&str]) -> String {
    run_with_config(Config::default(), args, "")
}

// ============================================================================
// Serial Link
// ============================================================================

#[test]
fn test_wired_build_then_parse() {
    let hex = run(&["wired", "build", "--cmd", "0x209", "--seq", "5"]);
    assert_eq!(hex.trim(), "FE AB FF 01 02 09 00 01 05 46 0A 0D");

    let summary = run(&["wired", "parse", hex.trim()]);
    assert!(summary.contains("SOC→MCU"));
    assert!(summary.contains("Device status query (0x209)"));
    assert!(summary.contains("checksum=0x46 (valid)"));
}

#[test]
fn test_wired_parse_reports_bad_checksum() {
    let summary = run(&["wired", "parse", "FE AB FF 01 02 09 00 01 05 47 0A 0D"]);
    assert!(summary.contains("(invalid)"));
}

#[test]
fn test_wired_parse_structural_error() {
    let cli = Cli::try_parse_from(["frlink", "wired", "parse", "FE AB FF 01 02 09 00 05 05 46 0A 0D"])
        .unwrap();
    let app = App::new(Config::default());
    let mut out = Vec::new();
    let err = app
        .execute(&cli.command, "".as_bytes(), &mut out)
        .unwrap_err();
    assert!(err.to_string().contains("length mismatch"));
}

#[test]
fn test_respond_wired_session() {
    let requests = [
        uart::build_request(uart::CMD_DEVICE_STATUS, 1, &[]),
        uart::build_request(uart::CMD_DEVICE_SYNC, 2, &[]),
        uart::build_request(uart::CMD_BLE_RSSI_READ, 3, &[]),
    ];
    let input: String = requests
        .iter()
        .map(|frame| format!("{}\n", to_hex_spaced(frame)))
        .collect();

    let output = run_with_config(Config::default(), &["respond", "--protocol", "wired"], &input);
    let replies: Vec<uart::ParsedWiredFrame> = output
        .lines()
        .map(|line| uart::parse_frame(&parse_hex(line).unwrap()).unwrap())
        .collect();

    assert_eq!(replies.len(), 3);
    for reply in &replies {
        assert_eq!(reply.direction, uart::Direction::McuToSoc);
        assert_eq!(reply.feature, uart::FEATURE_RESP);
        assert!(reply.checksum_valid);
    }

    assert_eq!(replies[0].payload, vec![1, 0x00, 0x00, 0x01, 0x01]);
    // bulk settings already lead with 0x01, so a success code is inserted
    assert_eq!(replies[1].payload.len(), 2 + 43);
    assert_eq!(&replies[1].payload[..3], &[2, 0x00, 0x01]);
    assert_eq!(replies[2].payload, vec![3, 0x00, 0x7F, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66]);
}

// ============================================================================
// BLE Link
// ============================================================================

#[test]
fn test_ble_build_then_parse() {
    let hex = run(&["ble", "build", "--cmd", "0x01FE", "--data", "AABB", "--crypto", "aes128", "--seq", "4"]);
    let frame = parse_hex(hex.trim()).unwrap();
    assert_eq!(frame.len(), 26);
    assert_eq!(&frame[..5], &[0x55, 0x55, 26, 0x02, 0x04]);

    let summary = run(&["ble", "parse", hex.trim()]);
    assert!(summary.contains("Connect (0x01FE)"));
    assert!(summary.contains("data=AA BB"));
    assert!(summary.contains("crypto=AES-128"));
}

#[test]
fn test_ble_config_crypto() {
    let config = Config::from_yaml("ble:\n  crypto: aes128\n  start_sequence: 12\n").unwrap();
    let hex = run_with_config(config, &["ble", "build", "--cmd", "0x01FD", "--data", "01"], "");
    let parsed = ble::parse_frame(&parse_hex(hex.trim()).unwrap()).unwrap();
    assert_eq!(parsed.crypto, ble::CryptoType::Aes128);
    assert_eq!(parsed.sequence, 12);
    assert_eq!(parsed.payload, vec![0x01]);
}

#[test]
fn test_respond_ble_session() {
    let config = Config::from_yaml("ble:\n  start_sequence: 255\n").unwrap();
    let request = ble::build_frame(ble::CMD_CONNECT, b"token", ble::CryptoType::Aes128, 0).unwrap();
    let line = to_hex_spaced(&request);
    let input = format!("{}\n{}\n", line, line);

    let output = run_with_config(config, &["respond", "--protocol", "ble"], &input);
    let sequences: Vec<u8> = output
        .lines()
        .map(|line| ble::parse_frame(&parse_hex(line).unwrap()).unwrap().sequence)
        .collect();
    assert_eq!(sequences, vec![255, 0]);
}

// ============================================================================
// Simulator And Catalog
// ============================================================================

#[test]
fn test_simulate() {
    assert_eq!(run(&["simulate", "--cmd", "0x209"]).trim(), "00 00 01 01");
    assert_eq!(run(&["simulate", "--cmd", "0x22"]).trim(), "00 02");
    assert_eq!(run(&["simulate", "--cmd", "13"]).trim(), "00");

    let bulk = run(&["simulate", "--cmd", "520"]);
    assert_eq!(parse_hex(bulk.trim()).unwrap().len(), 43);
}

#[test]
fn test_commands_listing() {
    let wired = run(&["commands"]);
    assert_eq!(wired.lines().count(), uart::COMMANDS.len());
    assert!(wired.contains("0x0209  Device status query"));

    let ble = run(&["commands", "--protocol", "ble"]);
    assert!(ble.contains("0x0101  Authentication result"));
}
