//! Command catalog for the BLE link.

use crate::constants::*;

/// Known BLE commands with a short display name.
pub const COMMANDS: &[(u16, &str)] = &[
    (CMD_ACK, "ACK"),
    (CMD_AUTH_RESULT, "Authentication result"),
    (CMD_FD, "FD command"),
    (CMD_CONNECT, "Connect"),
];

/// Look up the display name of a command.
pub fn command_name(command_id: u16) -> Option<&'static str> {
    COMMANDS
        .iter()
        .find(|(id, _)| *id == command_id)
        .map(|(_, name)| *name)
}

/// Display name, or `"Unknown command 0xNNNN"` for ids not in the catalog.
pub fn command_label(command_id: u16) -> String {
    match command_name(command_id) {
        Some(name) => name.to_string(),
        None => format!("Unknown command 0x{:04X}", command_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_lookup() {
        assert_eq!(command_name(0x01FE), Some("Connect"));
        assert_eq!(command_name(0x0000), Some("ACK"));
        assert_eq!(command_name(0x1234), None);
        assert_eq!(command_label(0x0042), "Unknown command 0x0042");
    }
}
