use crate::models::risk::{
    ActionPolicy, DetectionToggles, RecommendedAction, RiskAssessment, RiskConfig, RiskLevel,
    RiskThresholds, RiskWeights, SpoofingIndicator, SpoofingIndicators,
};

pub const MAX_RISK_SCORE: u8 = 100;

/// Sums the weights of indicators that are both flagged and enabled,
/// clamped at 100. All weights zero or all detections off yields 0,
/// which is the valid "detection disabled" outcome.
pub fn score(
    indicators: &SpoofingIndicators,
    weights: &RiskWeights,
    detections: &DetectionToggles,
) -> u8 {
    let mut total: u32 = 0;

    for indicator in SpoofingIndicator::ALL {
        if detections.is_enabled(indicator) && indicators.is_flagged(indicator) {
            total += u32::from(weights.weight(indicator));
        }
    }

    total.min(u32::from(MAX_RISK_SCORE)) as u8
}

/// Highest threshold the score meets or exceeds wins; a score equal to
/// a threshold counts as meeting it.
pub fn classify(score: u8, thresholds: &RiskThresholds) -> RiskLevel {
    if score >= thresholds.critical {
        RiskLevel::Critical
    } else if score >= thresholds.high {
        RiskLevel::High
    } else if score >= thresholds.medium {
        RiskLevel::Medium
    } else if score >= thresholds.low {
        RiskLevel::Low
    } else {
        RiskLevel::None
    }
}

pub fn recommend_action(level: RiskLevel, policy: &ActionPolicy) -> RecommendedAction {
    match level {
        RiskLevel::Critical if policy.auto_block_critical => RecommendedAction::Blocked,
        RiskLevel::Critical => RecommendedAction::Flagged,
        RiskLevel::High if policy.auto_block_high => RecommendedAction::Blocked,
        RiskLevel::High => RecommendedAction::Flagged,
        RiskLevel::Medium if policy.auto_flag_medium => RecommendedAction::Flagged,
        RiskLevel::Medium => RecommendedAction::Warning,
        RiskLevel::Low if policy.auto_warn_low => RecommendedAction::Warning,
        RiskLevel::Low => RecommendedAction::None,
        RiskLevel::None => RecommendedAction::None,
    }
}

pub fn assess(indicators: &SpoofingIndicators, config: &RiskConfig) -> RiskAssessment {
    let score = score(indicators, &config.weights, &config.detections);
    let level = classify(score, &config.thresholds);

    RiskAssessment {
        score,
        level,
        recommended_action: recommend_action(level, &config.policy),
    }
}
