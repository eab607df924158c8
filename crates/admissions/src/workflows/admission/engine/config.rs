use serde::{Deserialize, Serialize};

/// Field keys and sentinel labels consumed by the allocation pass. Every
/// field has a deployment default so API callers only override what their
/// roster schema actually renames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationOptions {
    /// Field holding the ranking value candidates are sorted by.
    pub ranking_key: String,
    /// True when a higher ranking value is better (raw score); false when a
    /// lower value is better (rank position).
    pub sort_descending: bool,
    /// Field holding the preference code.
    pub preference_key: String,
    /// Output field the assignment label is written into.
    pub assigned_key: String,
    /// Suffix appended to the major name when placement happened via
    /// adjustment rather than direct preference.
    pub adjust_suffix: String,
    /// Label written when the preference code is present but unrecognized.
    pub invalid_choice_label: String,
    /// Label written when no major anywhere has remaining capacity.
    pub unassigned_label: String,
}

impl Default for AllocationOptions {
    fn default() -> Self {
        Self {
            ranking_key: "score".to_string(),
            sort_descending: true,
            preference_key: "choice".to_string(),
            assigned_key: "assignedMajor".to_string(),
            adjust_suffix: "(adjusted)".to_string(),
            invalid_choice_label: "invalid-choice".to_string(),
            unassigned_label: "unassigned".to_string(),
        }
    }
}

impl AllocationOptions {
    pub fn with_ranking_key(mut self, key: impl Into<String>) -> Self {
        self.ranking_key = key.into();
        self
    }

    pub fn with_sort_descending(mut self, descending: bool) -> Self {
        self.sort_descending = descending;
        self
    }

    pub fn with_preference_key(mut self, key: impl Into<String>) -> Self {
        self.preference_key = key.into();
        self
    }

    pub fn with_assigned_key(mut self, key: impl Into<String>) -> Self {
        self.assigned_key = key.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_contract() {
        let options = AllocationOptions::default();
        assert_eq!(options.ranking_key, "score");
        assert!(options.sort_descending);
        assert_eq!(options.preference_key, "choice");
        assert_eq!(options.assigned_key, "assignedMajor");
        assert_eq!(options.adjust_suffix, "(adjusted)");
        assert_eq!(options.invalid_choice_label, "invalid-choice");
        assert_eq!(options.unassigned_label, "unassigned");
    }

    #[test]
    fn partial_payloads_fill_in_defaults() {
        let options: AllocationOptions =
            serde_json::from_str(r#"{"ranking_key": "rank", "sort_descending": false}"#)
                .expect("options parse");
        assert_eq!(options.ranking_key, "rank");
        assert!(!options.sort_descending);
        assert_eq!(options.assigned_key, "assignedMajor");
    }
}
