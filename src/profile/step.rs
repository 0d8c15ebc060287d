//! Profile step definitions
//!
//! A profile step is one lighting snapshot for a dome. Field values are
//! forwarded to the controller untouched; their meaning lives on the device.

use serde::{Deserialize, Serialize};

/// White channel targets (per mille)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CctChannels {
    /// Cool "day" white
    pub day: u16,
    /// Warm white
    pub warm: u16,
}

/// UVA channel setpoint and clamp (per mille)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UvaChannel {
    /// Requested output
    pub set: u16,
    /// Upper bound the controller may drive
    pub clamp: u16,
}

/// UVB channel with its periodic duty setting
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UvbChannel {
    /// Requested output
    pub set: u16,
    /// Upper bound the controller may drive
    pub clamp: u16,
    /// Length of one duty period in seconds
    pub period_s: u32,
    /// On-time within each period (per mille)
    pub duty_pm: u16,
}

/// One lighting configuration snapshot pushed to the controller
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileStep {
    /// White channels
    pub cct: CctChannels,
    /// UVA channel
    pub uva: UvaChannel,
    /// UVB channel
    pub uvb: UvbChannel,
    /// Sky scene index
    pub sky: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_step() -> ProfileStep {
        ProfileStep {
            cct: CctChannels {
                day: 9000,
                warm: 2000,
            },
            uva: UvaChannel {
                set: 5000,
                clamp: 8000,
            },
            uvb: UvbChannel {
                set: 4500,
                clamp: 6000,
                period_s: 60,
                duty_pm: 4500,
            },
            sky: 1,
        }
    }

    #[test]
    fn test_step_serializes_to_controller_shape() {
        let value = serde_json::to_value(sample_step()).unwrap();
        assert_eq!(
            value,
            json!({
                "cct": {"day": 9000, "warm": 2000},
                "uva": {"set": 5000, "clamp": 8000},
                "uvb": {"set": 4500, "clamp": 6000, "period_s": 60, "duty_pm": 4500},
                "sky": 1
            })
        );
    }

    #[test]
    fn test_step_rejects_missing_channel() {
        let result: Result<ProfileStep, _> = serde_json::from_value(json!({
            "cct": {"day": 1, "warm": 2},
            "uva": {"set": 0, "clamp": 0},
            "sky": 0
        }));
        assert!(result.is_err());
    }
}
