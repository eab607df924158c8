use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parse a `MAJOR=SEATS` quota flag. Flag order on the command line becomes
/// ledger order, which is the adjustment scan order.
pub(crate) fn parse_quota(raw: &str) -> Result<(String, u32), String> {
    let (major, seats) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected MAJOR=SEATS, got '{raw}'"))?;
    let major = major.trim();
    if major.is_empty() {
        return Err(format!("quota '{raw}' has an empty major name"));
    }
    let seats = seats
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("quota '{raw}' has an invalid seat count ({err})"))?;
    Ok((major.to_string(), seats))
}

/// Parse a `CODE=MAJOR>MAJOR>...` preference override flag.
pub(crate) fn parse_code(raw: &str) -> Result<(String, Vec<String>), String> {
    let (code, majors) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected CODE=MAJOR>MAJOR, got '{raw}'"))?;
    let code = code.trim();
    if code.is_empty() {
        return Err(format!("preference override '{raw}' has an empty code"));
    }
    let majors: Vec<String> = majors
        .split('>')
        .map(|major| major.trim().to_string())
        .filter(|major| !major.is_empty())
        .collect();
    if majors.is_empty() {
        return Err(format!("preference override '{raw}' lists no majors"));
    }
    Ok((code.to_string(), majors))
}
