use serde_json::Value;

use super::super::domain::{CandidateRecord, QuotaLedger};
use super::super::preferences::PreferenceTable;
use super::config::AllocationOptions;
use super::policy::AssignmentOutcome;

/// Interpret a candidate's ranking field as a float. Rosters arrive from
/// spreadsheets, so numeric strings count; anything unusable falls back to
/// 0.0 rather than failing the pass.
pub(crate) fn ranking_value(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        Some(Value::String(raw)) => raw.trim().parse().unwrap_or(0.0),
        Some(Value::Bool(flag)) => {
            if *flag {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

/// Normalize a preference code: trimmed and uppercased, with a missing or
/// null field treated as the empty string. Blank is "no preference", which
/// is distinct from an unrecognized code.
pub(crate) fn normalize_choice(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(raw)) => raw.trim().to_uppercase(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string().to_uppercase(),
        _ => String::new(),
    }
}

/// Stable sort by the ranking field; ties keep their input order, which is
/// the documented tie-break.
pub(crate) fn sort_by_ranking(items: &mut [CandidateRecord], options: &AllocationOptions) {
    items.sort_by(|a, b| {
        let left = ranking_value(a.field(&options.ranking_key));
        let right = ranking_value(b.field(&options.ranking_key));
        if options.sort_descending {
            right.total_cmp(&left)
        } else {
            left.total_cmp(&right)
        }
    });
}

/// Place one candidate, consuming at most one seat from the ledger.
///
/// A non-empty code that the table does not know is terminal. Otherwise the
/// candidate's preference list is walked in order, then adjustment scans the
/// ledger in entry order. Adjustment deliberately reconsiders majors the
/// candidate already ranked and lost.
pub(crate) fn place_candidate(
    code: &str,
    table: &PreferenceTable,
    ledger: &mut QuotaLedger,
) -> AssignmentOutcome {
    if !code.is_empty() && !table.contains(code) {
        return AssignmentOutcome::InvalidChoice;
    }

    if !code.is_empty() {
        if let Some(majors) = table.majors(code) {
            for major in majors {
                if ledger.consume(major) {
                    return AssignmentOutcome::Direct(major.clone());
                }
            }
        }
    }

    match ledger.consume_first_open() {
        Some(major) => AssignmentOutcome::Adjusted(major),
        None => AssignmentOutcome::Unassigned,
    }
}
