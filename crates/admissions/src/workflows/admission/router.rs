use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{CandidateRecord, QuotaLedger};
use super::engine::{AllocationEngine, AllocationOptions};
use super::preferences::PreferenceTable;
use super::report::AllocationSummary;

/// Router builder exposing the stateless allocation endpoint.
pub fn admission_router() -> Router {
    Router::new().route("/api/v1/admissions/allocate", post(allocate_handler))
}

/// One allocation request: the roster, the quota ledger (entry order is the
/// adjustment order), and optional table/option overrides.
#[derive(Debug, Deserialize)]
pub struct AllocationRequest {
    pub candidates: Vec<CandidateRecord>,
    pub quotas: QuotaLedger,
    /// Defaults to the deployed A-F table when omitted.
    #[serde(default)]
    pub preference_table: Option<PreferenceTable>,
    #[serde(default)]
    pub options: AllocationOptions,
}

#[derive(Debug, Serialize)]
pub struct AllocationResponse {
    pub generated_at: DateTime<Utc>,
    pub students: Vec<CandidateRecord>,
    pub remaining_quotas: QuotaLedger,
    pub summary: AllocationSummary,
}

pub(crate) async fn allocate_handler(
    Json(request): Json<AllocationRequest>,
) -> Json<AllocationResponse> {
    let AllocationRequest {
        candidates,
        quotas,
        preference_table,
        options,
    } = request;

    let table = preference_table.unwrap_or_else(PreferenceTable::standard);
    let engine = AllocationEngine::new(table, options);
    let result = engine.run(candidates, &quotas);
    let summary = AllocationSummary::from_result(&result, engine.options());

    info!(
        candidates = summary.total_candidates,
        admitted = summary.admitted,
        unassigned = summary.unassigned,
        invalid = summary.invalid_choice,
        "allocation pass completed"
    );

    Json(AllocationResponse {
        generated_at: Utc::now(),
        students: result.students,
        remaining_quotas: result.remaining_quotas,
        summary,
    })
}
