//! Protocol constants
//!
//! Framing markers, channel selectors, result codes and command identifiers
//! used on the SOC to MCU serial link.

use frlink_packet::ChecksumKind;

// ============================================================================
// Framing
// ============================================================================

/// First byte of every frame.
pub const FRAME_HEAD: u8 = 0xFE;
/// First terminator byte.
pub const FRAME_END0: u8 = 0x0A;
/// Second terminator byte.
pub const FRAME_END1: u8 = 0x0D;
/// Terminator pair closing every frame.
pub const FRAME_END: [u8; 2] = [FRAME_END0, FRAME_END1];

/// Sync byte for frames sent by the SOC to the MCU.
pub const SYNC_SOC_TO_MCU: u8 = 0xAB;
/// Sync byte for frames sent by the MCU to the SOC.
pub const SYNC_MCU_TO_SOC: u8 = 0xBA;

/// Integrity check closing every frame.
pub const FRAME_CHECKSUM: ChecksumKind = ChecksumKind::Additive;
/// Size of the checksum field.
pub const CHECKSUM_LEN: usize = 1;
/// Bytes preceding the payload: head, sync, feature, command id, length.
pub const HEADER_LEN: usize = 1 + 1 + 2 + 2 + 2;
/// Fixed per-frame overhead (a frame with an empty payload is this long).
pub const FRAME_OVERHEAD: usize = HEADER_LEN + CHECKSUM_LEN + FRAME_END.len();
/// Largest frame the MCU accepts. Not enforced by the codec.
pub const MAX_FRAME_LEN: usize = 256;
/// Largest payload that fits in [`MAX_FRAME_LEN`].
pub const MAX_PAYLOAD_LEN: usize = MAX_FRAME_LEN - FRAME_OVERHEAD;

// ============================================================================
// Channels (feature field)
// ============================================================================

/// Command channel (SOC → MCU).
pub const FEATURE_CMD: u16 = 0xFF01;
/// Command response channel (MCU → SOC).
pub const FEATURE_RESP: u16 = 0xFF02;
/// Settings channel.
pub const FEATURE_SETTINGS: u16 = 0xFF03;
/// Settings response channel.
pub const FEATURE_RESP_SETTINGS: u16 = 0xFF04;

// ============================================================================
// Result Codes
// ============================================================================

/// Operation succeeded.
pub const RESULT_SUCCESS: u8 = 0x00;
/// Operation failed.
pub const RESULT_FAILURE: u8 = 0x01;
/// Request parameters were invalid.
pub const RESULT_PARAM_ERROR: u8 = 0x02;
/// Command not supported.
pub const RESULT_NOT_SUPPORTED: u8 = 0x03;
/// MCU busy.
pub const RESULT_BUSY: u8 = 0x04;
/// MCU in the wrong state for this command.
pub const RESULT_STATUS_ERROR: u8 = 0x05;

// ============================================================================
// Command Identifiers
// ============================================================================

/// Bluetooth connected (sent after BLE authentication completes).
pub const CMD_CONNECT: u16 = 0x01;
/// Restore Bluetooth factory settings.
pub const CMD_BLE_FACTORY_RESET: u16 = 0x16;
/// Cancel Bluetooth pairing.
pub const CMD_BLE_CANCEL_PAIRING: u16 = 0x17;

/// Add NFC key.
pub const CMD_ADD_NFC_KEY: u16 = 0x20;
/// Delete NFC key.
pub const CMD_DELETE_NFC_KEY: u16 = 0x21;
/// Find NFC keys.
pub const CMD_FIND_NFC_KEY: u16 = 0x22;
/// NFC unlock.
pub const CMD_NFC_UNLOCK: u16 = 0x23;
/// NFC lock.
pub const CMD_NFC_LOCK: u16 = 0x24;
/// Enable or disable NFC (data 00 off, 01 on).
pub const CMD_NFC_SWITCH: u16 = 0x25;

/// Disarm the anti-theft alarm.
pub const CMD_DISARM: u16 = 0x30;
/// Arm the anti-theft alarm.
pub const CMD_ARM: u16 = 0x31;
/// Find-my-vehicle status query (data carries the volume).
pub const CMD_FIND_VEHICLE: u16 = 0x32;
/// Unlock the tail box.
pub const CMD_UNLOCK_TRUNK: u16 = 0x33;
/// Lock the tail box.
pub const CMD_LOCK_TRUNK: u16 = 0x34;
/// Unlock the seat bucket.
pub const CMD_UNLOCK_SEAT: u16 = 0x35;
/// Lock the seat bucket.
pub const CMD_LOCK_SEAT: u16 = 0x36;
/// Mute setting (data 00 off, 01 on).
pub const CMD_MUTE_SETTING: u16 = 0x37;
/// Unlock the middle box.
pub const CMD_UNLOCK_MIDDLE_BOX: u16 = 0x38;
/// Lock the middle box.
pub const CMD_LOCK_MIDDLE_BOX: u16 = 0x39;
/// Emergency mode on.
pub const CMD_EMERGENCY_MODE_ON: u16 = 0x40;
/// Emergency mode off.
pub const CMD_EMERGENCY_MODE_OFF: u16 = 0x41;
/// Read the Bluetooth MAC address.
pub const CMD_BLE_MAC_READ: u16 = 0x42;
/// Single-control unlock (tail box).
pub const CMD_SINGLE_CONTROL_UNLOCK: u16 = 0x43;

/// Assisted push mode on.
pub const CMD_ASSISTED_PUSH_ON: u16 = 0x44;
/// Assisted push mode off.
pub const CMD_ASSISTED_PUSH_OFF: u16 = 0x45;
/// Assisted push mode default.
pub const CMD_ASSISTED_PUSH_DEFAULT: u16 = 0x46;
/// Delayed headlight on.
pub const CMD_DELAYED_HEADLIGHT_ON: u16 = 0x47;
/// Delayed headlight off.
pub const CMD_DELAYED_HEADLIGHT_OFF: u16 = 0x48;
/// Delayed headlight default.
pub const CMD_DELAYED_HEADLIGHT_DEFAULT: u16 = 0x49;
/// Delayed headlight time.
pub const CMD_DELAYED_HEADLIGHT_TIME: u16 = 0x50;
/// Charging power.
pub const CMD_CHARGING_POWER: u16 = 0x51;
/// Auto park gear on.
pub const CMD_AUTO_PARK_ON: u16 = 0x52;
/// Auto park gear off.
pub const CMD_AUTO_PARK_OFF: u16 = 0x53;
/// Auto park gear default.
pub const CMD_AUTO_PARK_DEFAULT: u16 = 0x54;
/// Auto park gear delay.
pub const CMD_AUTO_PARK_TIME: u16 = 0x55;
/// Chord horn on.
pub const CMD_CHORD_HORN_ON: u16 = 0x56;
/// Chord horn off.
pub const CMD_CHORD_HORN_OFF: u16 = 0x57;
/// Chord horn default.
pub const CMD_CHORD_HORN_DEFAULT: u16 = 0x58;
/// Chord horn sound source.
pub const CMD_CHORD_HORN_SOURCE: u16 = 0x59;
/// Chord horn volume.
pub const CMD_CHORD_HORN_VOLUME: u16 = 0x60;
/// Ambient light on.
pub const CMD_AMBIENT_LIGHT_ON: u16 = 0x61;
/// Ambient light off.
pub const CMD_AMBIENT_LIGHT_OFF: u16 = 0x62;
/// Ambient light default.
pub const CMD_AMBIENT_LIGHT_DEFAULT: u16 = 0x63;
/// Ambient light mode.
pub const CMD_AMBIENT_LIGHT_MODE: u16 = 0x64;
/// Reverse assist on.
pub const CMD_REVERSE_ASSIST_ON: u16 = 0x65;
/// Reverse assist off.
pub const CMD_REVERSE_ASSIST_OFF: u16 = 0x66;
/// Reverse assist default.
pub const CMD_REVERSE_ASSIST_DEFAULT: u16 = 0x67;
/// Automatic turn-signal cancel on.
pub const CMD_AUTO_STEERING_RESET_ON: u16 = 0x75;
/// Automatic turn-signal cancel off.
pub const CMD_AUTO_STEERING_RESET_OFF: u16 = 0x76;
/// Automatic turn-signal cancel default.
pub const CMD_AUTO_STEERING_RESET_DEFAULT: u16 = 0x77;
/// Electronic braking (EBS) on.
pub const CMD_EBS_ON: u16 = 0x78;
/// Low speed gear on.
pub const CMD_LOW_GEAR_ON: u16 = 0x79;
/// Low speed gear off.
pub const CMD_LOW_GEAR_OFF: u16 = 0x80;
/// Low speed gear default.
pub const CMD_LOW_GEAR_DEFAULT: u16 = 0x81;
/// Low speed gear speed.
pub const CMD_LOW_GEAR_SPEED: u16 = 0x82;
/// Medium speed gear on.
pub const CMD_MEDIUM_GEAR_ON: u16 = 0x83;
/// Medium speed gear off.
pub const CMD_MEDIUM_GEAR_OFF: u16 = 0x84;
/// Medium speed gear default.
pub const CMD_MEDIUM_GEAR_DEFAULT: u16 = 0x85;
/// Medium speed gear speed.
pub const CMD_MEDIUM_GEAR_SPEED: u16 = 0x86;
/// High speed gear on.
pub const CMD_HIGH_GEAR_ON: u16 = 0x87;
/// High speed gear off.
pub const CMD_HIGH_GEAR_OFF: u16 = 0x88;
/// High speed gear default.
pub const CMD_HIGH_GEAR_DEFAULT: u16 = 0x89;
/// High speed gear speed.
pub const CMD_HIGH_GEAR_SPEED: u16 = 0x90;
/// Lost mode on.
pub const CMD_LOST_MODE_ON: u16 = 0x91;
/// Lost mode off.
pub const CMD_LOST_MODE_OFF: u16 = 0x92;
/// Traction control on.
pub const CMD_TCS_ON: u16 = 0x93;
/// Traction control off.
pub const CMD_TCS_OFF: u16 = 0x94;
/// Side stand detection on.
pub const CMD_SIDE_STAND_ON: u16 = 0x95;
/// Side stand detection off.
pub const CMD_SIDE_STAND_OFF: u16 = 0x96;
/// Battery type.
pub const CMD_BATTERY_TYPE: u16 = 0x97;
/// Battery capacity.
pub const CMD_BATTERY_CAPACITY: u16 = 0x98;
/// KFA/2KGA/2MQA data sync.
pub const CMD_KFA_SYNC: u16 = 0x99;
/// Hill descent control on.
pub const CMD_HDC_ON: u16 = 0x100;
/// Hill descent control off.
pub const CMD_HDC_OFF: u16 = 0x101;
/// Hill hold control on.
pub const CMD_HHC_ON: u16 = 0x102;
/// Hill hold control off.
pub const CMD_HHC_OFF: u16 = 0x103;
/// Launch strength.
pub const CMD_STARTING_STRENGTH: u16 = 0x104;
/// Sport mode on.
pub const CMD_SPORT_MODE_ON: u16 = 0x105;
/// Sport mode off.
pub const CMD_SPORT_MODE_OFF: u16 = 0x106;
/// Sport mode default.
pub const CMD_SPORT_MODE_DEFAULT: u16 = 0x107;
/// Sport mode type.
pub const CMD_SPORT_MODE_TYPE: u16 = 0x108;
/// Eco mode on.
pub const CMD_ECO_MODE_ON: u16 = 0x109;
/// Eco mode off.
pub const CMD_ECO_MODE_OFF: u16 = 0x110;
/// Eco mode default.
pub const CMD_ECO_MODE_DEFAULT: u16 = 0x111;
/// Eco mode type.
pub const CMD_ECO_MODE_TYPE: u16 = 0x112;
/// Radar on.
pub const CMD_RADAR_ON: u16 = 0x113;
/// Radar off.
pub const CMD_RADAR_OFF: u16 = 0x114;
/// Radar default.
pub const CMD_RADAR_DEFAULT: u16 = 0x115;
/// Radar sensitivity.
pub const CMD_RADAR_SENSITIVITY: u16 = 0x116;
/// Read tire pressure.
pub const CMD_TIRE_PRESSURE_GET: u16 = 0x117;
/// Read Bluetooth RSSI and peer MAC.
pub const CMD_BLE_RSSI_READ: u16 = 0x118;
/// Proximity unlock sensitivity.
pub const CMD_PROXIMITY_UNLOCK_SENSITIVITY: u16 = 0x119;
/// Proximity unlock on.
pub const CMD_PROXIMITY_UNLOCK_ON: u16 = 0x120;
/// Proximity unlock off.
pub const CMD_PROXIMITY_UNLOCK_OFF: u16 = 0x121;
/// Read tire pressure sensor status.
pub const CMD_TIRE_SENSOR_STATUS: u16 = 0x11A;
/// Pair a tire pressure sensor.
pub const CMD_TIRE_SENSOR_PAIR: u16 = 0x11B;
/// Read anti-theft sensitivity.
pub const CMD_THEFT_SENSITIVITY_READ: u16 = 0xA0;
/// Set anti-theft sensitivity.
pub const CMD_THEFT_SENSITIVITY_SET: u16 = 0xA1;
/// Charging display on.
pub const CMD_CHARGING_DISPLAY_ON: u16 = 0x200;
/// Charging display off.
pub const CMD_CHARGING_DISPLAY_OFF: u16 = 0x201;
/// Energy recovery (EBS) on.
pub const CMD_ENERGY_RECOVERY_ON: u16 = 0x202;
/// Energy recovery (EBS) off.
pub const CMD_ENERGY_RECOVERY_OFF: u16 = 0x203;
/// Device-initiated settings sync.
pub const CMD_DEVICE_SYNC: u16 = 0x208;
/// Device status query.
pub const CMD_DEVICE_STATUS: u16 = 0x209;
