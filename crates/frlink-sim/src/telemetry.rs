//! Typed views of the fixed-layout blocks the MCU reports.

use bytes::{Buf, BufMut};

use crate::error::*;

// ============================================================================
// Device Status
// ============================================================================

/// Reply to the device status query (0x209).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceStatus {
    /// Device state, 0 = normal.
    pub device: u8,
    /// Battery state, 0 = normal.
    pub battery: u8,
    /// Phone connected over Bluetooth.
    pub bluetooth_connected: bool,
    /// GPS has a fix.
    pub gps_fixed: bool,
}

impl DeviceStatus {
    /// Encoded size in bytes.
    pub const LEN: usize = 4;

    pub fn encode(&self) -> Vec<u8> {
        vec![
            self.device,
            self.battery,
            self.bluetooth_connected as u8,
            self.gps_fixed as u8,
        ]
    }

    pub fn decode(data: &[u8]) -> SimResult<Self> {
        check_len("device status", data, Self::LEN)?;
        Ok(DeviceStatus {
            device: data[0],
            battery: data[1],
            bluetooth_connected: data[2] != 0,
            gps_fixed: data[3] != 0,
        })
    }
}

impl Default for DeviceStatus {
    fn default() -> Self {
        DeviceStatus {
            device: 0x00,
            battery: 0x00,
            bluetooth_connected: true,
            gps_fixed: true,
        }
    }
}

// ============================================================================
// Tire Pressure
// ============================================================================

/// Four-wheel tire pressure reading (0x117), one raw byte per wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TirePressure {
    pub front_left: u8,
    pub front_right: u8,
    pub rear_left: u8,
    pub rear_right: u8,
}

impl TirePressure {
    /// Encoded size in bytes.
    pub const LEN: usize = 4;

    pub fn encode(&self) -> Vec<u8> {
        vec![
            self.front_left,
            self.front_right,
            self.rear_left,
            self.rear_right,
        ]
    }

    pub fn decode(data: &[u8]) -> SimResult<Self> {
        check_len("tire pressure", data, Self::LEN)?;
        Ok(TirePressure {
            front_left: data[0],
            front_right: data[1],
            rear_left: data[2],
            rear_right: data[3],
        })
    }
}

impl Default for TirePressure {
    fn default() -> Self {
        TirePressure {
            front_left: 0x30,
            front_right: 0x32,
            rear_left: 0x30,
            rear_right: 0x32,
        }
    }
}

// ============================================================================
// Bulk Settings
// ============================================================================

/// RGB triple for the ambient light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    fn read(buf: &mut &[u8]) -> Self {
        let r = buf.get_u8();
        let g = buf.get_u8();
        let b = buf.get_u8();
        Rgb { r, g, b }
    }
}

/// Settings block the device pushes once per connection (0x208).
///
/// The `switches_*` fields are bitmaps:
///
/// - `switches_1`: b7 EBS, b6 seat sensor lock, b5 ABS warning, b3 position
///   light, b2 emergency brake alarm, b1 middle box lock, b0 tail box lock.
/// - `switches_2`: b7 armed, b6 theft sensitivity, b5 welcome light, b4 hazard
///   lights, b3 emergency mode, b2 low battery mode.
/// - `switches_3`: b7 BSD, b6 LCW, b5 RCW, b4 reverse radar, b3 GPS, b2 side
///   stand, b1 TCS, b0 lost mode.
/// - `switches_4`: b7 charging light, b6 low battery mode, b5 welcome light,
///   b4 radar sensitivity, b3 HDC, b2 HHC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkSettings {
    pub user_gear_enabled: u8,
    pub user_gear_speed: u8,
    pub user_gear_torque: u8,
    pub assisted_push_enabled: u8,
    pub assisted_push_speed: u8,
    pub delayed_headlight_enabled: u8,
    /// Seconds.
    pub delayed_headlight_time: u8,
    pub charging_power: u8,
    pub auto_park_enabled: u8,
    /// Seconds.
    pub auto_park_time: u8,
    pub chord_horn_source: u8,
    pub chord_horn_volume: u8,
    pub ambient_light_effect: u8,
    pub ambient_light_gradient: u8,
    pub ambient_solid: Rgb,
    pub ambient_breathing: Rgb,
    pub ambient_marquee: Rgb,
    pub switches_1: u8,
    pub switches_2: u8,
    pub reverse_enabled: u8,
    pub reverse_speed: u8,
    pub theft_arm_state: u8,
    pub theft_sensitivity: u8,
    pub theft_volume: u8,
    pub auto_steering_reset: u8,
    pub ebs_strength: u8,
    pub low_gear_torque: u8,
    pub medium_gear_torque: u8,
    pub high_gear_torque: u8,
    pub switches_3: u8,
    pub switches_4: u8,
    pub eco_speed: u8,
    pub starting_strength: u8,
    /// Big-endian on the wire.
    pub proximity_unlock_sensitivity: u16,
    pub sport_speed: u8,
    pub ebs_level: u8,
}

impl BulkSettings {
    /// Encoded size in bytes.
    pub const LEN: usize = 43;

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::LEN);
        buf.put_u8(self.user_gear_enabled);
        buf.put_u8(self.user_gear_speed);
        buf.put_u8(self.user_gear_torque);
        buf.put_u8(self.assisted_push_enabled);
        buf.put_u8(self.assisted_push_speed);
        buf.put_u8(self.delayed_headlight_enabled);
        buf.put_u8(self.delayed_headlight_time);
        buf.put_u8(self.charging_power);
        buf.put_u8(self.auto_park_enabled);
        buf.put_u8(self.auto_park_time);
        buf.put_u8(self.chord_horn_source);
        buf.put_u8(self.chord_horn_volume);
        buf.put_u8(self.ambient_light_effect);
        buf.put_u8(self.ambient_light_gradient);
        for rgb in [self.ambient_solid, self.ambient_breathing, self.ambient_marquee] {
            buf.put_slice(&[rgb.r, rgb.g, rgb.b]);
        }
        buf.put_u8(self.switches_1);
        buf.put_u8(self.switches_2);
        buf.put_u8(self.reverse_enabled);
        buf.put_u8(self.reverse_speed);
        buf.put_u8(self.theft_arm_state);
        buf.put_u8(self.theft_sensitivity);
        buf.put_u8(self.theft_volume);
        buf.put_u8(self.auto_steering_reset);
        buf.put_u8(self.ebs_strength);
        buf.put_u8(self.low_gear_torque);
        buf.put_u8(self.medium_gear_torque);
        buf.put_u8(self.high_gear_torque);
        buf.put_u8(self.switches_3);
        buf.put_u8(self.switches_4);
        buf.put_u8(self.eco_speed);
        buf.put_u8(self.starting_strength);
        buf.put_u16(self.proximity_unlock_sensitivity);
        buf.put_u8(self.sport_speed);
        buf.put_u8(self.ebs_level);
        buf
    }

    pub fn decode(data: &[u8]) -> SimResult<Self> {
        check_len("bulk settings", data, Self::LEN)?;
        let mut buf = data;

        Ok(BulkSettings {
            user_gear_enabled: buf.get_u8(),
            user_gear_speed: buf.get_u8(),
            user_gear_torque: buf.get_u8(),
            assisted_push_enabled: buf.get_u8(),
            assisted_push_speed: buf.get_u8(),
            delayed_headlight_enabled: buf.get_u8(),
            delayed_headlight_time: buf.get_u8(),
            charging_power: buf.get_u8(),
            auto_park_enabled: buf.get_u8(),
            auto_park_time: buf.get_u8(),
            chord_horn_source: buf.get_u8(),
            chord_horn_volume: buf.get_u8(),
            ambient_light_effect: buf.get_u8(),
            ambient_light_gradient: buf.get_u8(),
            ambient_solid: Rgb::read(&mut buf),
            ambient_breathing: Rgb::read(&mut buf),
            ambient_marquee: Rgb::read(&mut buf),
            switches_1: buf.get_u8(),
            switches_2: buf.get_u8(),
            reverse_enabled: buf.get_u8(),
            reverse_speed: buf.get_u8(),
            theft_arm_state: buf.get_u8(),
            theft_sensitivity: buf.get_u8(),
            theft_volume: buf.get_u8(),
            auto_steering_reset: buf.get_u8(),
            ebs_strength: buf.get_u8(),
            low_gear_torque: buf.get_u8(),
            medium_gear_torque: buf.get_u8(),
            high_gear_torque: buf.get_u8(),
            switches_3: buf.get_u8(),
            switches_4: buf.get_u8(),
            eco_speed: buf.get_u8(),
            starting_strength: buf.get_u8(),
            proximity_unlock_sensitivity: buf.get_u16(),
            sport_speed: buf.get_u8(),
            ebs_level: buf.get_u8(),
        })
    }
}

impl Default for BulkSettings {
    fn default() -> Self {
        BulkSettings {
            user_gear_enabled: 0x01,
            user_gear_speed: 0x3C,
            user_gear_torque: 0x64,
            assisted_push_enabled: 0x01,
            assisted_push_speed: 0x0A,
            delayed_headlight_enabled: 0x01,
            delayed_headlight_time: 0x1E,
            charging_power: 0x1E,
            auto_park_enabled: 0x01,
            auto_park_time: 0x0A,
            chord_horn_source: 0x01,
            chord_horn_volume: 0x0A,
            ambient_light_effect: 0x01,
            ambient_light_gradient: 0x01,
            ambient_solid: Rgb::new(0xFF, 0x00, 0x00),
            ambient_breathing: Rgb::new(0x00, 0xFF, 0x00),
            ambient_marquee: Rgb::new(0x00, 0x00, 0xFF),
            switches_1: 0b1110_1111,
            switches_2: 0b1111_1100,
            reverse_enabled: 0x01,
            reverse_speed: 0x0A,
            theft_arm_state: 0x0B,
            theft_sensitivity: 0x0B,
            theft_volume: 0x0A,
            auto_steering_reset: 0x01,
            ebs_strength: 0x02,
            low_gear_torque: 0x64,
            medium_gear_torque: 0x7D,
            high_gear_torque: 0x96,
            switches_3: 0b1111_1111,
            switches_4: 0b1111_1100,
            eco_speed: 0x32,
            starting_strength: 0x02,
            proximity_unlock_sensitivity: 0x0064,
            sport_speed: 0x50,
            ebs_level: 0x02,
        }
    }
}

fn check_len(block: &'static str, data: &[u8], expected: usize) -> SimResult<()> {
    if data.len() != expected {
        return Err(SimError::BlockLength {
            block,
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULK_DEFAULT: [u8; 43] = [
        0x01, 0x3C, 0x64, 0x01, 0x0A, 0x01, 0x1E, 0x1E, 0x01, 0x0A, 0x01, 0x0A, 0x01, 0x01, 0xFF,
        0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0xFF, 0xEF, 0xFC, 0x01, 0x0A, 0x0B, 0x0B, 0x0A,
        0x01, 0x02, 0x64, 0x7D, 0x96, 0xFF, 0xFC, 0x32, 0x02, 0x00, 0x64, 0x50, 0x02,
    ];

    #[test]
    fn test_bulk_settings_default_layout() {
        assert_eq!(BulkSettings::default().encode(), BULK_DEFAULT.to_vec());
    }

    #[test]
    fn test_bulk_settings_decode() {
        let settings = BulkSettings::decode(&BULK_DEFAULT).unwrap();
        assert_eq!(settings, BulkSettings::default());
        assert_eq!(settings.ambient_breathing, Rgb::new(0x00, 0xFF, 0x00));
        assert_eq!(settings.proximity_unlock_sensitivity, 100);
        assert_eq!(settings.sport_speed, 80);

        let mut modified = BULK_DEFAULT;
        modified[39] = 0x01;
        let settings = BulkSettings::decode(&modified).unwrap();
        assert_eq!(settings.proximity_unlock_sensitivity, 0x0164);
    }

    #[test]
    fn test_bulk_settings_wrong_length() {
        assert_eq!(
            BulkSettings::decode(&BULK_DEFAULT[..42]),
            Err(SimError::BlockLength {
                block: "bulk settings",
                expected: 43,
                actual: 42
            })
        );
    }

    #[test]
    fn test_device_status() {
        let status = DeviceStatus::default();
        assert_eq!(status.encode(), vec![0x00, 0x00, 0x01, 0x01]);
        assert_eq!(DeviceStatus::decode(&[0x01, 0x02, 0x00, 0x01]).unwrap(), DeviceStatus {
            device: 0x01,
            battery: 0x02,
            bluetooth_connected: false,
            gps_fixed: true,
        });
        assert!(DeviceStatus::decode(&[0x00]).is_err());
    }

    #[test]
    fn test_tire_pressure() {
        assert_eq!(TirePressure::default().encode(), vec![0x30, 0x32, 0x30, 0x32]);
        let reading = TirePressure::decode(&[1, 2, 3, 4]).unwrap();
        assert_eq!(reading.rear_left, 3);
        assert!(TirePressure::decode(&[1, 2, 3, 4, 5]).is_err());
    }
}
