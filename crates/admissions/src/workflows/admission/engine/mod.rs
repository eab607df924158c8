mod config;
mod policy;
mod rules;

pub use config::AllocationOptions;
pub use policy::AssignmentOutcome;

use serde::{Deserialize, Serialize};

use super::domain::{CandidateRecord, QuotaLedger};
use super::preferences::PreferenceTable;

/// Stateless allocator applying one greedy single-pass assignment.
///
/// The engine owns the shared preference table and option set; every `run`
/// works on its own copy of the quota ledger, so concurrent callers simply
/// hold their own engine reference and pass independent ledgers.
pub struct AllocationEngine {
    table: PreferenceTable,
    options: AllocationOptions,
}

impl AllocationEngine {
    pub fn new(table: PreferenceTable, options: AllocationOptions) -> Self {
        Self { table, options }
    }

    /// Engine over the deployed A-F table with default field keys.
    pub fn standard() -> Self {
        Self::new(PreferenceTable::standard(), AllocationOptions::default())
    }

    pub fn options(&self) -> &AllocationOptions {
        &self.options
    }

    pub fn table(&self) -> &PreferenceTable {
        &self.table
    }

    /// Run one allocation pass.
    ///
    /// Candidates are sorted by the ranking field (stable, so ties keep
    /// their input order) and processed best-first; earlier candidates have
    /// first claim on capacity. Each record comes back annotated with the
    /// assignment label under the configured key. The routine is total: it
    /// never fails, whatever the field bags contain.
    pub fn run<I>(&self, candidates: I, quotas: &QuotaLedger) -> AllocationResult
    where
        I: IntoIterator<Item = CandidateRecord>,
    {
        let mut remaining = quotas.clone();
        let mut students: Vec<CandidateRecord> = candidates.into_iter().collect();

        rules::sort_by_ranking(&mut students, &self.options);

        for student in &mut students {
            let code = rules::normalize_choice(student.field(&self.options.preference_key));
            let outcome = rules::place_candidate(&code, &self.table, &mut remaining);
            student.set_field(
                self.options.assigned_key.as_str(),
                outcome.label(&self.options),
            );
        }

        AllocationResult {
            students,
            remaining_quotas: remaining,
        }
    }
}

/// Annotated candidates in processing order plus the post-pass ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub students: Vec<CandidateRecord>,
    pub remaining_quotas: QuotaLedger,
}
