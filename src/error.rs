use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrustError {
    #[error("risk thresholds must be strictly ascending, got {low}/{medium}/{high}/{critical}")]
    ThresholdsNotAscending {
        low: u8,
        medium: u8,
        high: u8,
        critical: u8,
    },

    #[error("geofence radius must be a finite non-negative number of meters, got {0}")]
    InvalidRadius(f64),

    #[error("weight for {indicator} must be within 0..=100, got {value}")]
    WeightOutOfRange { indicator: &'static str, value: u8 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("internal error: {0}")]
    Internal(String),
}
