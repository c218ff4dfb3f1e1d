//! Command catalog for the serial link.
//!
//! Names are for display only; nothing in the codec consults this table.

use crate::constants::*;

/// Every command the MCU understands, with a short display name.
pub const COMMANDS: &[(u16, &str)] = &[
    (CMD_CONNECT, "Bluetooth connect"),
    (CMD_BLE_FACTORY_RESET, "Bluetooth factory reset"),
    (CMD_BLE_CANCEL_PAIRING, "Cancel Bluetooth pairing"),
    (CMD_ADD_NFC_KEY, "Add NFC key"),
    (CMD_DELETE_NFC_KEY, "Delete NFC key"),
    (CMD_FIND_NFC_KEY, "Find NFC key"),
    (CMD_NFC_UNLOCK, "NFC unlock"),
    (CMD_NFC_LOCK, "NFC lock"),
    (CMD_NFC_SWITCH, "NFC switch"),
    (CMD_DISARM, "Disarm"),
    (CMD_ARM, "Arm"),
    (CMD_FIND_VEHICLE, "Find vehicle status"),
    (CMD_UNLOCK_TRUNK, "Unlock tail box"),
    (CMD_LOCK_TRUNK, "Lock tail box"),
    (CMD_UNLOCK_SEAT, "Unlock seat"),
    (CMD_LOCK_SEAT, "Lock seat"),
    (CMD_MUTE_SETTING, "Mute setting"),
    (CMD_UNLOCK_MIDDLE_BOX, "Unlock middle box"),
    (CMD_LOCK_MIDDLE_BOX, "Lock middle box"),
    (CMD_EMERGENCY_MODE_ON, "Emergency mode on"),
    (CMD_EMERGENCY_MODE_OFF, "Emergency mode off"),
    (CMD_BLE_MAC_READ, "Read Bluetooth MAC"),
    (CMD_SINGLE_CONTROL_UNLOCK, "Single-control unlock (tail box)"),
    (CMD_ASSISTED_PUSH_ON, "Assisted push on"),
    (CMD_ASSISTED_PUSH_OFF, "Assisted push off"),
    (CMD_ASSISTED_PUSH_DEFAULT, "Assisted push default"),
    (CMD_DELAYED_HEADLIGHT_ON, "Delayed headlight on"),
    (CMD_DELAYED_HEADLIGHT_OFF, "Delayed headlight off"),
    (CMD_DELAYED_HEADLIGHT_DEFAULT, "Delayed headlight default"),
    (CMD_DELAYED_HEADLIGHT_TIME, "Delayed headlight time"),
    (CMD_CHARGING_POWER, "Charging power"),
    (CMD_AUTO_PARK_ON, "Auto park on"),
    (CMD_AUTO_PARK_OFF, "Auto park off"),
    (CMD_AUTO_PARK_DEFAULT, "Auto park default"),
    (CMD_AUTO_PARK_TIME, "Auto park time"),
    (CMD_CHORD_HORN_ON, "Chord horn on"),
    (CMD_CHORD_HORN_OFF, "Chord horn off"),
    (CMD_CHORD_HORN_DEFAULT, "Chord horn default"),
    (CMD_CHORD_HORN_SOURCE, "Chord horn source"),
    (CMD_CHORD_HORN_VOLUME, "Chord horn volume"),
    (CMD_AMBIENT_LIGHT_ON, "Ambient light on"),
    (CMD_AMBIENT_LIGHT_OFF, "Ambient light off"),
    (CMD_AMBIENT_LIGHT_DEFAULT, "Ambient light default"),
    (CMD_AMBIENT_LIGHT_MODE, "Ambient light mode"),
    (CMD_REVERSE_ASSIST_ON, "Reverse assist on"),
    (CMD_REVERSE_ASSIST_OFF, "Reverse assist off"),
    (CMD_REVERSE_ASSIST_DEFAULT, "Reverse assist default"),
    (CMD_AUTO_STEERING_RESET_ON, "Auto steering reset on"),
    (CMD_AUTO_STEERING_RESET_OFF, "Auto steering reset off"),
    (CMD_AUTO_STEERING_RESET_DEFAULT, "Auto steering reset default"),
    (CMD_EBS_ON, "EBS on"),
    (CMD_LOW_GEAR_ON, "Low gear on"),
    (CMD_LOW_GEAR_OFF, "Low gear off"),
    (CMD_LOW_GEAR_DEFAULT, "Low gear default"),
    (CMD_LOW_GEAR_SPEED, "Low gear speed"),
    (CMD_MEDIUM_GEAR_ON, "Medium gear on"),
    (CMD_MEDIUM_GEAR_OFF, "Medium gear off"),
    (CMD_MEDIUM_GEAR_DEFAULT, "Medium gear default"),
    (CMD_MEDIUM_GEAR_SPEED, "Medium gear speed"),
    (CMD_HIGH_GEAR_ON, "High gear on"),
    (CMD_HIGH_GEAR_OFF, "High gear off"),
    (CMD_HIGH_GEAR_DEFAULT, "High gear default"),
    (CMD_HIGH_GEAR_SPEED, "High gear speed"),
    (CMD_LOST_MODE_ON, "Lost mode on"),
    (CMD_LOST_MODE_OFF, "Lost mode off"),
    (CMD_TCS_ON, "TCS on"),
    (CMD_TCS_OFF, "TCS off"),
    (CMD_SIDE_STAND_ON, "Side stand on"),
    (CMD_SIDE_STAND_OFF, "Side stand off"),
    (CMD_BATTERY_TYPE, "Battery type"),
    (CMD_BATTERY_CAPACITY, "Battery capacity"),
    (CMD_KFA_SYNC, "KFA/2KGA/2MQA data sync"),
    (CMD_HDC_ON, "HDC on"),
    (CMD_HDC_OFF, "HDC off"),
    (CMD_HHC_ON, "HHC on"),
    (CMD_HHC_OFF, "HHC off"),
    (CMD_STARTING_STRENGTH, "Starting strength"),
    (CMD_SPORT_MODE_ON, "Sport mode on"),
    (CMD_SPORT_MODE_OFF, "Sport mode off"),
    (CMD_SPORT_MODE_DEFAULT, "Sport mode default"),
    (CMD_SPORT_MODE_TYPE, "Sport mode type"),
    (CMD_ECO_MODE_ON, "Eco mode on"),
    (CMD_ECO_MODE_OFF, "Eco mode off"),
    (CMD_ECO_MODE_DEFAULT, "Eco mode default"),
    (CMD_ECO_MODE_TYPE, "Eco mode type"),
    (CMD_RADAR_ON, "Radar on"),
    (CMD_RADAR_OFF, "Radar off"),
    (CMD_RADAR_DEFAULT, "Radar default"),
    (CMD_RADAR_SENSITIVITY, "Radar sensitivity"),
    (CMD_TIRE_PRESSURE_GET, "Read tire pressure"),
    (CMD_BLE_RSSI_READ, "Read Bluetooth RSSI"),
    (CMD_PROXIMITY_UNLOCK_SENSITIVITY, "Proximity unlock sensitivity"),
    (CMD_PROXIMITY_UNLOCK_ON, "Proximity unlock on"),
    (CMD_PROXIMITY_UNLOCK_OFF, "Proximity unlock off"),
    (CMD_TIRE_SENSOR_STATUS, "Tire sensor status"),
    (CMD_TIRE_SENSOR_PAIR, "Tire sensor pairing"),
    (CMD_THEFT_SENSITIVITY_READ, "Read anti-theft sensitivity"),
    (CMD_THEFT_SENSITIVITY_SET, "Set anti-theft sensitivity"),
    (CMD_CHARGING_DISPLAY_ON, "Charging display on"),
    (CMD_CHARGING_DISPLAY_OFF, "Charging display off"),
    (CMD_ENERGY_RECOVERY_ON, "Energy recovery on"),
    (CMD_ENERGY_RECOVERY_OFF, "Energy recovery off"),
    (CMD_DEVICE_SYNC, "Device settings sync"),
    (CMD_DEVICE_STATUS, "Device status query"),
];

/// Look up the display name of a command.
pub fn command_name(command_id: u16) -> Option<&'static str> {
    COMMANDS
        .iter()
        .find(|(id, _)| *id == command_id)
        .map(|(_, name)| *name)
}

/// Display name, or `"Unknown command 0xNN"` for ids not in the catalog.
pub fn command_label(command_id: u16) -> String {
    match command_name(command_id) {
        Some(name) => name.to_string(),
        None => format!("Unknown command 0x{:02X}", command_id),
    }
}
