//! Major admission allocation: domain types, the allocation engine, and the
//! HTTP surface that exposes a single stateless allocation pass.

pub mod domain;
mod engine;
pub mod preferences;
pub mod report;
pub mod router;

pub use domain::{CandidateRecord, QuotaEntry, QuotaLedger};
pub use engine::{AllocationEngine, AllocationOptions, AllocationResult, AssignmentOutcome};
pub use preferences::PreferenceTable;
pub use report::{AllocationSummary, MajorTally};
pub use router::{admission_router, AllocationRequest, AllocationResponse};
