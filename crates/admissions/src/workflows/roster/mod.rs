//! Roster file adapters: delimited-text import into candidate field bags
//! and export of annotated results. Structural problems (a missing ranking
//! or preference column) surface here; the allocation engine itself never
//! fails on row contents.

mod parser;
mod writer;

pub use parser::{read_candidates, Roster};
pub use writer::write_candidates;

/// Error enumeration for roster import/export failures.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to parse roster: {0}")]
    Csv(#[from] csv::Error),
    #[error("roster is missing required column '{0}'")]
    MissingColumn(String),
    #[error("failed to write roster: {0}")]
    Io(#[from] std::io::Error),
}
