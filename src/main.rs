use std::io::Read;

use tracing_subscriber::EnvFilter;

use location_trust::config::Config;
use location_trust::engine::checkin::{CheckInRequest, evaluate_check_in};
use location_trust::error::TrustError;

/// Reads one check-in request as JSON on stdin, evaluates it against
/// the zone configured in the environment, and prints the evaluation
/// as JSON on stdout.
fn main() -> Result<(), TrustError> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false)
        .compact()
        .init();

    let zone = config.trust_zone()?;

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .map_err(|err| TrustError::InvalidInput(format!("failed to read stdin: {err}")))?;

    let request: CheckInRequest = serde_json::from_str(&raw)
        .map_err(|err| TrustError::InvalidInput(format!("invalid request json: {err}")))?;
    request.point.validate()?;

    let evaluation = evaluate_check_in(&request, &zone);

    let rendered = serde_json::to_string_pretty(&evaluation)
        .map_err(|err| TrustError::Internal(format!("failed to render evaluation: {err}")))?;
    println!("{rendered}");

    Ok(())
}
