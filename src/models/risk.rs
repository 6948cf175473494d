use serde::{Deserialize, Serialize};

use crate::error::TrustError;

/// The closed set of spoofing signals an external detector can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpoofingIndicator {
    MockLocation,
    FakeGpsApp,
    DeveloperMode,
    ImpossibleTravel,
    CoordinateAnomaly,
    DeviceIntegrityFailed,
}

impl SpoofingIndicator {
    pub const ALL: [SpoofingIndicator; 6] = [
        SpoofingIndicator::MockLocation,
        SpoofingIndicator::FakeGpsApp,
        SpoofingIndicator::DeveloperMode,
        SpoofingIndicator::ImpossibleTravel,
        SpoofingIndicator::CoordinateAnomaly,
        SpoofingIndicator::DeviceIntegrityFailed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpoofingIndicator::MockLocation => "mock_location",
            SpoofingIndicator::FakeGpsApp => "fake_gps_app",
            SpoofingIndicator::DeveloperMode => "developer_mode",
            SpoofingIndicator::ImpossibleTravel => "impossible_travel",
            SpoofingIndicator::CoordinateAnomaly => "coordinate_anomaly",
            SpoofingIndicator::DeviceIntegrityFailed => "device_integrity_failed",
        }
    }
}

/// Per-evaluation indicator flags, supplied by the device-signal
/// detector upstream.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpoofingIndicators {
    pub mock_location: bool,
    pub fake_gps_app: bool,
    pub developer_mode: bool,
    pub impossible_travel: bool,
    pub coordinate_anomaly: bool,
    pub device_integrity_failed: bool,
}

impl SpoofingIndicators {
    pub fn is_flagged(&self, indicator: SpoofingIndicator) -> bool {
        match indicator {
            SpoofingIndicator::MockLocation => self.mock_location,
            SpoofingIndicator::FakeGpsApp => self.fake_gps_app,
            SpoofingIndicator::DeveloperMode => self.developer_mode,
            SpoofingIndicator::ImpossibleTravel => self.impossible_travel,
            SpoofingIndicator::CoordinateAnomaly => self.coordinate_anomaly,
            SpoofingIndicator::DeviceIntegrityFailed => self.device_integrity_failed,
        }
    }
}

/// Admin-configured weight per indicator, each within 0..=100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskWeights {
    pub mock_location: u8,
    pub fake_gps_app: u8,
    pub developer_mode: u8,
    pub impossible_travel: u8,
    pub coordinate_anomaly: u8,
    pub device_integrity_failed: u8,
}

impl RiskWeights {
    pub fn weight(&self, indicator: SpoofingIndicator) -> u8 {
        match indicator {
            SpoofingIndicator::MockLocation => self.mock_location,
            SpoofingIndicator::FakeGpsApp => self.fake_gps_app,
            SpoofingIndicator::DeveloperMode => self.developer_mode,
            SpoofingIndicator::ImpossibleTravel => self.impossible_travel,
            SpoofingIndicator::CoordinateAnomaly => self.coordinate_anomaly,
            SpoofingIndicator::DeviceIntegrityFailed => self.device_integrity_failed,
        }
    }

    pub fn validate(&self) -> Result<(), TrustError> {
        for indicator in SpoofingIndicator::ALL {
            let value = self.weight(indicator);
            if value > 100 {
                return Err(TrustError::WeightOutOfRange {
                    indicator: indicator.as_str(),
                    value,
                });
            }
        }
        Ok(())
    }
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            mock_location: 40,
            fake_gps_app: 35,
            developer_mode: 15,
            impossible_travel: 30,
            coordinate_anomaly: 20,
            device_integrity_failed: 35,
        }
    }
}

/// Which detection methods are active. A disabled indicator contributes
/// nothing to the score even when flagged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionToggles {
    pub mock_location: bool,
    pub fake_gps_app: bool,
    pub developer_mode: bool,
    pub impossible_travel: bool,
    pub coordinate_anomaly: bool,
    pub device_integrity_failed: bool,
}

impl DetectionToggles {
    pub fn is_enabled(&self, indicator: SpoofingIndicator) -> bool {
        match indicator {
            SpoofingIndicator::MockLocation => self.mock_location,
            SpoofingIndicator::FakeGpsApp => self.fake_gps_app,
            SpoofingIndicator::DeveloperMode => self.developer_mode,
            SpoofingIndicator::ImpossibleTravel => self.impossible_travel,
            SpoofingIndicator::CoordinateAnomaly => self.coordinate_anomaly,
            SpoofingIndicator::DeviceIntegrityFailed => self.device_integrity_failed,
        }
    }
}

impl Default for DetectionToggles {
    fn default() -> Self {
        Self {
            mock_location: true,
            fake_gps_app: true,
            developer_mode: true,
            impossible_travel: true,
            coordinate_anomaly: true,
            device_integrity_failed: true,
        }
    }
}

/// Ascending score thresholds; a score at or above a threshold reaches
/// that level. `low < medium < high < critical` is enforced at load.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub low: u8,
    pub medium: u8,
    pub high: u8,
    pub critical: u8,
}

impl RiskThresholds {
    pub fn validate(&self) -> Result<(), TrustError> {
        let ascending =
            self.low < self.medium && self.medium < self.high && self.high < self.critical;
        if !ascending || self.critical > 100 {
            return Err(TrustError::ThresholdsNotAscending {
                low: self.low,
                medium: self.medium,
                high: self.high,
                critical: self.critical,
            });
        }
        Ok(())
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low: 20,
            medium: 40,
            high: 60,
            critical: 80,
        }
    }
}

/// What to do automatically per risk level. When a flag is off the
/// level falls back to the next-milder action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionPolicy {
    pub auto_block_critical: bool,
    pub auto_block_high: bool,
    pub auto_flag_medium: bool,
    pub auto_warn_low: bool,
}

impl Default for ActionPolicy {
    fn default() -> Self {
        Self {
            auto_block_critical: true,
            auto_block_high: true,
            auto_flag_medium: true,
            auto_warn_low: true,
        }
    }
}

/// The one canonical spoofing-detection configuration shape. Loaded by
/// the surrounding application and passed by value per evaluation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    pub weights: RiskWeights,
    pub thresholds: RiskThresholds,
    pub detections: DetectionToggles,
    pub policy: ActionPolicy,
}

impl RiskConfig {
    pub fn validate(&self) -> Result<(), TrustError> {
        self.weights.validate()?;
        self.thresholds.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::None => "none",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    None,
    Warning,
    Flagged,
    Blocked,
}

/// Aggregate spoofing-risk verdict for one evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u8,
    pub level: RiskLevel,
    pub recommended_action: RecommendedAction,
}

#[cfg(test)]
mod tests {
    use super::{RiskThresholds, RiskWeights};

    #[test]
    fn default_thresholds_are_strictly_ascending() {
        assert!(RiskThresholds::default().validate().is_ok());
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        let thresholds = RiskThresholds {
            low: 40,
            medium: 20,
            high: 60,
            critical: 80,
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn equal_thresholds_are_rejected() {
        let thresholds = RiskThresholds {
            low: 20,
            medium: 20,
            high: 60,
            critical: 80,
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn overweight_indicator_is_rejected() {
        let weights = RiskWeights {
            mock_location: 101,
            ..RiskWeights::default()
        };
        assert!(weights.validate().is_err());
    }
}
