use std::env;

use chrono::NaiveTime;

use crate::engine::checkin::TrustZone;
use crate::error::TrustError;
use crate::models::geo::{GeoFence, GeoPoint};
use crate::models::risk::{
    ActionPolicy, DetectionToggles, RiskConfig, RiskThresholds, RiskWeights,
};
use crate::models::schedule::ShiftWindow;

/// Environment-backed configuration for one work location. Every value
/// has a default, so an empty environment yields a usable zone; all
/// values are validated before the zone is handed out.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub zone_center: GeoPoint,
    pub zone_radius_meters: f64,
    pub shift: ShiftWindow,
    pub risk: RiskConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, TrustError> {
        let _ = dotenvy::dotenv();

        let shift = ShiftWindow {
            shift_start: parse_time_or_default("SHIFT_START", "08:00")?,
            shift_end: parse_time_or_default("SHIFT_END", "17:00")?,
            late_tolerance_minutes: parse_or_default("LATE_TOLERANCE_MINUTES", 15)?,
            early_departure_tolerance_minutes: parse_or_default(
                "EARLY_DEPARTURE_TOLERANCE_MINUTES",
                15,
            )?,
        };

        let weights = RiskWeights {
            mock_location: parse_or_default("RISK_WEIGHT_MOCK_LOCATION", 40)?,
            fake_gps_app: parse_or_default("RISK_WEIGHT_FAKE_GPS_APP", 35)?,
            developer_mode: parse_or_default("RISK_WEIGHT_DEVELOPER_MODE", 15)?,
            impossible_travel: parse_or_default("RISK_WEIGHT_IMPOSSIBLE_TRAVEL", 30)?,
            coordinate_anomaly: parse_or_default("RISK_WEIGHT_COORDINATE_ANOMALY", 20)?,
            device_integrity_failed: parse_or_default("RISK_WEIGHT_DEVICE_INTEGRITY_FAILED", 35)?,
        };

        let thresholds = RiskThresholds {
            low: parse_or_default("RISK_THRESHOLD_LOW", 20)?,
            medium: parse_or_default("RISK_THRESHOLD_MEDIUM", 40)?,
            high: parse_or_default("RISK_THRESHOLD_HIGH", 60)?,
            critical: parse_or_default("RISK_THRESHOLD_CRITICAL", 80)?,
        };

        let detections = DetectionToggles {
            mock_location: parse_or_default("DETECT_MOCK_LOCATION", true)?,
            fake_gps_app: parse_or_default("DETECT_FAKE_GPS_APP", true)?,
            developer_mode: parse_or_default("DETECT_DEVELOPER_MODE", true)?,
            impossible_travel: parse_or_default("DETECT_IMPOSSIBLE_TRAVEL", true)?,
            coordinate_anomaly: parse_or_default("DETECT_COORDINATE_ANOMALY", true)?,
            device_integrity_failed: parse_or_default("DETECT_DEVICE_INTEGRITY_FAILED", true)?,
        };

        let policy = ActionPolicy {
            auto_block_critical: parse_or_default("AUTO_BLOCK_CRITICAL", true)?,
            auto_block_high: parse_or_default("AUTO_BLOCK_HIGH", true)?,
            auto_flag_medium: parse_or_default("AUTO_FLAG_MEDIUM", true)?,
            auto_warn_low: parse_or_default("AUTO_WARN_LOW", true)?,
        };

        let config = Self {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            zone_center: GeoPoint {
                lat: parse_or_default("ZONE_LAT", -6.2088)?,
                lng: parse_or_default("ZONE_LNG", 106.8456)?,
            },
            zone_radius_meters: parse_or_default("ZONE_RADIUS_METERS", 100.0)?,
            shift,
            risk: RiskConfig {
                weights,
                thresholds,
                detections,
                policy,
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), TrustError> {
        self.zone_center.validate()?;
        self.risk.validate()?;
        // Radius validity is enforced by fence construction.
        GeoFence::new(self.zone_center, self.zone_radius_meters)?;
        Ok(())
    }

    /// Materializes the validated per-location snapshot the evaluators
    /// consume.
    pub fn trust_zone(&self) -> Result<TrustZone, TrustError> {
        Ok(TrustZone {
            fence: GeoFence::new(self.zone_center, self.zone_radius_meters)?,
            risk: self.risk,
            shift: self.shift,
        })
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, TrustError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|err| TrustError::InvalidConfig(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}

fn parse_time_or_default(key: &str, default: &str) -> Result<NaiveTime, TrustError> {
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    NaiveTime::parse_from_str(&raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
        .map_err(|err| TrustError::InvalidConfig(format!("invalid {key}: {err}")))
}
