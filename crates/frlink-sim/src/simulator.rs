//! Canned MCU responses keyed by command id.
//!
//! Every command in the serial catalog has a rule. Most simply acknowledge
//! with `[0x00]`; a few return fixed data and three build their reply from a
//! telemetry block. Ids without a rule also get `[0x00]`.

use std::collections::HashMap;

use frlink_uart_protocol::*;
use once_cell::sync::Lazy;

use crate::telemetry::{BulkSettings, DeviceStatus, TirePressure};

/// Payload returned for commands that only acknowledge.
pub const ACK_PAYLOAD: &[u8] = &[RESULT_SUCCESS];

/// How the reply payload for a command is produced.
#[derive(Debug, Clone, Copy)]
pub enum ResponseRule {
    /// Always the same bytes.
    Fixed(&'static [u8]),
    /// Built from the request payload.
    Computed(fn(&[u8]) -> Vec<u8>),
}

impl ResponseRule {
    /// Produce the reply payload for `request`.
    pub fn apply(&self, request: &[u8]) -> Vec<u8> {
        match self {
            ResponseRule::Fixed(bytes) => bytes.to_vec(),
            ResponseRule::Computed(build) => build(request),
        }
    }
}

fn device_status(_request: &[u8]) -> Vec<u8> {
    DeviceStatus::default().encode()
}

fn bulk_settings(_request: &[u8]) -> Vec<u8> {
    BulkSettings::default().encode()
}

fn tire_pressure(_request: &[u8]) -> Vec<u8> {
    TirePressure::default().encode()
}

static RULES: Lazy<HashMap<u16, ResponseRule>> = Lazy::new(|| {
    let mut rules: HashMap<u16, ResponseRule> = COMMANDS
        .iter()
        .map(|(id, _)| (*id, ResponseRule::Fixed(ACK_PAYLOAD)))
        .collect();

    // MAC 00:11:22:33:44:55
    rules.insert(CMD_BLE_MAC_READ, ResponseRule::Fixed(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]));
    // two keys enrolled
    rules.insert(CMD_FIND_NFC_KEY, ResponseRule::Fixed(&[0x00, 0x02]));
    // found, volume 5
    rules.insert(CMD_FIND_VEHICLE, ResponseRule::Fixed(&[0x00, 0x05]));
    // all four sensors normal
    rules.insert(CMD_TIRE_SENSOR_STATUS, ResponseRule::Fixed(&[0x00, 0x00, 0x00, 0x00]));
    // medium sensitivity
    rules.insert(CMD_THEFT_SENSITIVITY_READ, ResponseRule::Fixed(&[0x00, 0x01]));
    // RSSI then MAC 11:22:33:44:55:66
    rules.insert(
        CMD_BLE_RSSI_READ,
        ResponseRule::Fixed(&[0x7F, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66]),
    );

    rules.insert(CMD_TIRE_PRESSURE_GET, ResponseRule::Computed(tire_pressure));
    rules.insert(CMD_DEVICE_SYNC, ResponseRule::Computed(bulk_settings));
    rules.insert(CMD_DEVICE_STATUS, ResponseRule::Computed(device_status));
    rules
});

/// Reply payload for `command_id` from the built-in table.
pub fn simulate(command_id: u16, request: &[u8]) -> Vec<u8> {
    match RULES.get(&command_id) {
        Some(rule) => rule.apply(request),
        None => {
            tracing::trace!(command_id, "no rule, acknowledging");
            ACK_PAYLOAD.to_vec()
        }
    }
}

/// Built-in table plus optional per-instance overrides.
#[derive(Debug, Clone, Default)]
pub struct ResponseSimulator {
    overrides: HashMap<u16, ResponseRule>,
}

impl ResponseSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rule for one command on this instance only.
    pub fn with_rule(mut self, command_id: u16, rule: ResponseRule) -> Self {
        self.overrides.insert(command_id, rule);
        self
    }

    /// Reply payload for `command_id`.
    pub fn get_response(&self, command_id: u16, request: &[u8]) -> Vec<u8> {
        match self.overrides.get(&command_id) {
            Some(rule) => rule.apply(request),
            None => simulate(command_id, request),
        }
    }

    /// Whether `command_id` has an explicit rule.
    pub fn has_rule(&self, command_id: u16) -> bool {
        self.overrides.contains_key(&command_id) || RULES.contains_key(&command_id)
    }

    /// Number of commands with an explicit rule.
    pub fn rule_count(&self) -> usize {
        RULES.len()
            + self
                .overrides
                .keys()
                .filter(|id| !RULES.contains_key(id))
                .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_status_query() {
        let reply = simulate(CMD_DEVICE_STATUS, &[]);
        assert_eq!(reply.len(), 4);
        assert_eq!(reply[2], 0x01);
        assert_eq!(reply, vec![0x00, 0x00, 0x01, 0x01]);
    }

    #[test]
    fn test_bulk_settings_sync() {
        let reply = simulate(CMD_DEVICE_SYNC, &[]);
        assert_eq!(reply.len(), 43);
        assert_eq!(&reply[..3], &[0x01, 0x3C, 0x64]);
        assert_eq!(&reply[39..], &[0x00, 0x64, 0x50, 0x02]);
    }

    #[test]
    fn test_fixed_replies() {
        assert_eq!(simulate(CMD_BLE_MAC_READ, &[]), vec![0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
        assert_eq!(simulate(CMD_FIND_NFC_KEY, &[]), vec![0x00, 0x02]);
        assert_eq!(simulate(CMD_FIND_VEHICLE, &[]), vec![0x00, 0x05]);
        assert_eq!(simulate(CMD_TIRE_PRESSURE_GET, &[]), vec![0x30, 0x32, 0x30, 0x32]);
        assert_eq!(simulate(CMD_TIRE_SENSOR_STATUS, &[]), vec![0x00; 4]);
        assert_eq!(simulate(CMD_THEFT_SENSITIVITY_READ, &[]), vec![0x00, 0x01]);
        assert_eq!(
            simulate(CMD_BLE_RSSI_READ, &[]),
            vec![0x7F, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66]
        );
    }

    #[test]
    fn test_acknowledging_commands() {
        for id in [CMD_CONNECT, CMD_ARM, CMD_RADAR_SENSITIVITY, CMD_ENERGY_RECOVERY_OFF] {
            assert_eq!(simulate(id, &[0x01, 0x02]), vec![0x00]);
        }
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(simulate(0x0D, &[]), vec![0x00]);
        assert_eq!(simulate(0xFFFF, &[1, 2, 3]), vec![0x00]);
    }

    #[test]
    fn test_request_payload_ignored_by_builtin_rules() {
        assert_eq!(simulate(CMD_DEVICE_STATUS, &[9, 9, 9]), simulate(CMD_DEVICE_STATUS, &[]));
    }

    #[test]
    fn test_every_catalog_command_has_rule() {
        let sim = ResponseSimulator::new();
        for (id, name) in COMMANDS {
            assert!(sim.has_rule(*id), "{} (0x{:02X}) has no rule", name, id);
        }
        assert_eq!(sim.rule_count(), COMMANDS.len());
        assert!(!sim.has_rule(0x0D));
    }

    #[test]
    fn test_overrides() {
        fn echo(request: &[u8]) -> Vec<u8> {
            request.to_vec()
        }

        let sim = ResponseSimulator::new()
            .with_rule(CMD_CONNECT, ResponseRule::Fixed(&[0x04]))
            .with_rule(0x0D, ResponseRule::Computed(echo));

        assert_eq!(sim.get_response(CMD_CONNECT, &[]), vec![0x04]);
        assert_eq!(sim.get_response(0x0D, &[7, 8]), vec![7, 8]);
        assert_eq!(sim.get_response(CMD_FIND_VEHICLE, &[]), vec![0x00, 0x05]);
        assert_eq!(sim.rule_count(), COMMANDS.len() + 1);

        // the shared table is untouched
        assert_eq!(simulate(CMD_CONNECT, &[]), vec![0x00]);
    }

    #[test]
    fn test_concurrent_readers() {
        let expected = simulate(CMD_DEVICE_SYNC, &[]);
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..100 {
                        assert_eq!(simulate(CMD_DEVICE_SYNC, &[]), expected);
                        assert_eq!(simulate(CMD_FIND_VEHICLE, &[]), vec![0x00, 0x05]);
                    }
                });
            }
        });
    }
}
