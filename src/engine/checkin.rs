use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::engine::{geofence, risk, window};
use crate::models::geo::{GeoFence, GeoPoint, GeofenceResult};
use crate::models::risk::{
    RecommendedAction, RiskAssessment, RiskConfig, SpoofingIndicator, SpoofingIndicators,
};
use crate::models::schedule::{CheckInTiming, ShiftWindow};

/// Per-work-location configuration snapshot. Passed by value on every
/// evaluation; the surrounding application owns loading and caching.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrustZone {
    pub fence: GeoFence,
    pub risk: RiskConfig,
    pub shift: ShiftWindow,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CheckInRequest {
    pub point: GeoPoint,
    pub accuracy_meters: Option<f64>,
    #[serde(default)]
    pub indicators: SpoofingIndicators,
    pub checked_in_at: NaiveTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckInIssue {
    OutsideWorkZone,
    SpoofingBlocked,
    BeforeCheckInWindow,
}

/// Combined verdict for one check-in attempt. A late arrival is
/// reported in `timing` but does not make the check-in unacceptable;
/// what lateness costs is the caller's decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInEvaluation {
    pub geofence: GeofenceResult,
    pub risk: RiskAssessment,
    pub timing: CheckInTiming,
    pub issues: Vec<CheckInIssue>,
    pub acceptable: bool,
}

pub fn evaluate_check_in(request: &CheckInRequest, zone: &TrustZone) -> CheckInEvaluation {
    let geofence = geofence::evaluate(&request.point, &zone.fence, request.accuracy_meters);
    let risk = risk::assess(&request.indicators, &zone.risk);
    let timing = window::classify_check_in(request.checked_in_at, &zone.shift);

    let mut issues = Vec::new();
    if !geofence.is_within_zone {
        issues.push(CheckInIssue::OutsideWorkZone);
    }
    if risk.recommended_action == RecommendedAction::Blocked {
        issues.push(CheckInIssue::SpoofingBlocked);
    }
    if timing == CheckInTiming::Early {
        issues.push(CheckInIssue::BeforeCheckInWindow);
    }

    let acceptable = issues.is_empty();

    if acceptable {
        info!(
            distance_meters = geofence.distance_meters,
            risk_score = risk.score,
            timing = timing.as_str(),
            "check-in accepted"
        );
    } else {
        let flagged: Vec<&str> = SpoofingIndicator::ALL
            .into_iter()
            .filter(|indicator| request.indicators.is_flagged(*indicator))
            .map(|indicator| indicator.as_str())
            .collect();
        warn!(
            distance_meters = geofence.distance_meters,
            margin_meters = geofence.margin_meters,
            risk_score = risk.score,
            risk_level = risk.level.as_str(),
            indicators = ?flagged,
            timing = timing.as_str(),
            issues = ?issues,
            "check-in rejected"
        );
    }

    CheckInEvaluation {
        geofence,
        risk,
        timing,
        issues,
        acceptable,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::{CheckInIssue, CheckInRequest, TrustZone, evaluate_check_in};
    use crate::models::geo::{GeoFence, GeoPoint};
    use crate::models::risk::{RiskConfig, SpoofingIndicators};
    use crate::models::schedule::{CheckInTiming, ShiftWindow};

    fn zone() -> TrustZone {
        let center = GeoPoint {
            lat: -6.2088,
            lng: 106.8456,
        };
        TrustZone {
            fence: GeoFence::new(center, 100.0).unwrap(),
            risk: RiskConfig::default(),
            shift: ShiftWindow {
                shift_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                shift_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                late_tolerance_minutes: 15,
                early_departure_tolerance_minutes: 15,
            },
        }
    }

    fn clean_request(h: u32, m: u32) -> CheckInRequest {
        CheckInRequest {
            point: GeoPoint {
                lat: -6.2089,
                lng: 106.8457,
            },
            accuracy_meters: Some(5.0),
            indicators: SpoofingIndicators::default(),
            checked_in_at: NaiveTime::from_hms_opt(h, m, 0).unwrap(),
        }
    }

    #[test]
    fn clean_on_time_check_in_is_acceptable() {
        let evaluation = evaluate_check_in(&clean_request(8, 5), &zone());

        assert!(evaluation.acceptable);
        assert!(evaluation.issues.is_empty());
        assert_eq!(evaluation.timing, CheckInTiming::OnTime);
        assert!(evaluation.geofence.is_within_zone);
    }

    #[test]
    fn late_check_in_is_acceptable_but_reported() {
        let evaluation = evaluate_check_in(&clean_request(9, 0), &zone());

        assert!(evaluation.acceptable);
        assert_eq!(evaluation.timing, CheckInTiming::Late);
    }

    #[test]
    fn early_check_in_raises_an_issue() {
        let evaluation = evaluate_check_in(&clean_request(7, 0), &zone());

        assert!(!evaluation.acceptable);
        assert_eq!(evaluation.issues, vec![CheckInIssue::BeforeCheckInWindow]);
    }

    #[test]
    fn check_in_outside_the_zone_is_rejected() {
        let mut request = clean_request(8, 5);
        request.point = GeoPoint {
            lat: -6.2200,
            lng: 106.8600,
        };

        let evaluation = evaluate_check_in(&request, &zone());

        assert!(!evaluation.acceptable);
        assert_eq!(evaluation.issues, vec![CheckInIssue::OutsideWorkZone]);
    }

    #[test]
    fn blocked_spoofing_risk_rejects_the_check_in() {
        let mut request = clean_request(8, 5);
        request.indicators = SpoofingIndicators {
            mock_location: true,
            fake_gps_app: true,
            ..SpoofingIndicators::default()
        };

        let evaluation = evaluate_check_in(&request, &zone());

        assert!(!evaluation.acceptable);
        assert_eq!(evaluation.issues, vec![CheckInIssue::SpoofingBlocked]);
        assert_eq!(evaluation.risk.score, 75);
    }

    #[test]
    fn multiple_failures_report_every_issue() {
        let mut request = clean_request(6, 0);
        request.point = GeoPoint {
            lat: -6.2200,
            lng: 106.8600,
        };
        request.indicators = SpoofingIndicators {
            mock_location: true,
            fake_gps_app: true,
            device_integrity_failed: true,
            ..SpoofingIndicators::default()
        };

        let evaluation = evaluate_check_in(&request, &zone());

        assert!(!evaluation.acceptable);
        assert_eq!(
            evaluation.issues,
            vec![
                CheckInIssue::OutsideWorkZone,
                CheckInIssue::SpoofingBlocked,
                CheckInIssue::BeforeCheckInWindow,
            ]
        );
    }
}
