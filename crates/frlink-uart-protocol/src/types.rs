//! Common types used in the protocol.

use crate::constants::*;

/// Direction of travel, derived from the sync byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Host controller to microcontroller.
    SocToMcu,
    /// Microcontroller to host controller.
    McuToSoc,
}

impl Direction {
    /// Classify a sync byte. Anything other than [`SYNC_SOC_TO_MCU`] is
    /// treated as MCU → SOC.
    pub fn from_sync(sync: u8) -> Self {
        if sync == SYNC_SOC_TO_MCU {
            Direction::SocToMcu
        } else {
            Direction::McuToSoc
        }
    }

    /// The sync byte that marks this direction.
    pub fn sync(self) -> u8 {
        match self {
            Direction::SocToMcu => SYNC_SOC_TO_MCU,
            Direction::McuToSoc => SYNC_MCU_TO_SOC,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::SocToMcu => write!(f, "SOC→MCU"),
            Direction::McuToSoc => write!(f, "MCU→SOC"),
        }
    }
}

/// Logical channel carried in the feature field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Commands (0xFF01).
    Command,
    /// Command responses (0xFF02).
    Response,
    /// Settings (0xFF03).
    Settings,
    /// Settings responses (0xFF04).
    SettingsResponse,
    /// Any other value.
    Other(u16),
}

impl From<u16> for Feature {
    fn from(value: u16) -> Self {
        match value {
            FEATURE_CMD => Feature::Command,
            FEATURE_RESP => Feature::Response,
            FEATURE_SETTINGS => Feature::Settings,
            FEATURE_RESP_SETTINGS => Feature::SettingsResponse,
            other => Feature::Other(other),
        }
    }
}

impl From<Feature> for u16 {
    fn from(feature: Feature) -> Self {
        match feature {
            Feature::Command => FEATURE_CMD,
            Feature::Response => FEATURE_RESP,
            Feature::Settings => FEATURE_SETTINGS,
            Feature::SettingsResponse => FEATURE_RESP_SETTINGS,
            Feature::Other(value) => value,
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feature::Command => write!(f, "command"),
            Feature::Response => write!(f, "response"),
            Feature::Settings => write!(f, "settings"),
            Feature::SettingsResponse => write!(f, "settings response"),
            Feature::Other(value) => write!(f, "0x{:04X}", value),
        }
    }
}

/// Result code carried in the second byte of a response payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultCode {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Failure,
    /// Invalid parameters.
    ParamError,
    /// Command not supported.
    NotSupported,
    /// MCU busy.
    Busy,
    /// Wrong state for this command.
    StatusError,
    /// Unrecognised result code.
    Unknown(u8),
}

impl From<u8> for ResultCode {
    fn from(code: u8) -> Self {
        match code {
            RESULT_SUCCESS => ResultCode::Success,
            RESULT_FAILURE => ResultCode::Failure,
            RESULT_PARAM_ERROR => ResultCode::ParamError,
            RESULT_NOT_SUPPORTED => ResultCode::NotSupported,
            RESULT_BUSY => ResultCode::Busy,
            RESULT_STATUS_ERROR => ResultCode::StatusError,
            other => ResultCode::Unknown(other),
        }
    }
}

impl From<ResultCode> for u8 {
    fn from(code: ResultCode) -> Self {
        match code {
            ResultCode::Success => RESULT_SUCCESS,
            ResultCode::Failure => RESULT_FAILURE,
            ResultCode::ParamError => RESULT_PARAM_ERROR,
            ResultCode::NotSupported => RESULT_NOT_SUPPORTED,
            ResultCode::Busy => RESULT_BUSY,
            ResultCode::StatusError => RESULT_STATUS_ERROR,
            ResultCode::Unknown(code) => code,
        }
    }
}

impl std::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultCode::Success => write!(f, "success"),
            ResultCode::Failure => write!(f, "failure"),
            ResultCode::ParamError => write!(f, "parameter error"),
            ResultCode::NotSupported => write!(f, "not supported"),
            ResultCode::Busy => write!(f, "busy"),
            ResultCode::StatusError => write!(f, "status error"),
            ResultCode::Unknown(code) => write!(f, "unknown (0x{:02X})", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_sync() {
        assert_eq!(Direction::from_sync(0xAB), Direction::SocToMcu);
        assert_eq!(Direction::from_sync(0xBA), Direction::McuToSoc);
        assert_eq!(Direction::from_sync(0x00), Direction::McuToSoc);
        assert_eq!(Direction::McuToSoc.sync(), 0xBA);
        assert_eq!(Direction::SocToMcu.to_string(), "SOC→MCU");
    }

    #[test]
    fn test_feature_conversion() {
        assert_eq!(Feature::from(0xFF02), Feature::Response);
        assert_eq!(Feature::from(0x1234), Feature::Other(0x1234));
        assert_eq!(u16::from(Feature::SettingsResponse), 0xFF04);
        assert_eq!(u16::from(Feature::Other(7)), 7);
    }

    #[test]
    fn test_result_code_conversion() {
        for code in 0u8..=5 {
            assert_eq!(u8::from(ResultCode::from(code)), code);
        }
        assert_eq!(ResultCode::from(0x42), ResultCode::Unknown(0x42));
        assert_eq!(ResultCode::Busy.to_string(), "busy");
    }
}
