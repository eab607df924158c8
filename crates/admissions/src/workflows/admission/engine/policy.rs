use serde::{Deserialize, Serialize};

use super::config::AllocationOptions;

/// Terminal outcome of placing one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentOutcome {
    /// Placed into a major from the candidate's own preference list.
    Direct(String),
    /// Placed into a major with spare capacity after preference exhaustion.
    Adjusted(String),
    /// Preference code present but absent from the table; no seat consumed.
    InvalidChoice,
    /// No major anywhere had remaining capacity; no seat consumed.
    Unassigned,
}

impl AssignmentOutcome {
    /// The label written into the candidate's assigned field.
    pub fn label(&self, options: &AllocationOptions) -> String {
        match self {
            AssignmentOutcome::Direct(major) => major.clone(),
            AssignmentOutcome::Adjusted(major) => {
                format!("{major}{}", options.adjust_suffix)
            }
            AssignmentOutcome::InvalidChoice => options.invalid_choice_label.clone(),
            AssignmentOutcome::Unassigned => options.unassigned_label.clone(),
        }
    }
}
