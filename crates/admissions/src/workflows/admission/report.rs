use serde::{Deserialize, Serialize};

use super::engine::{AllocationOptions, AllocationResult};

/// Per-major admission tally, reported in ledger order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorTally {
    pub major: String,
    pub admitted: usize,
    pub direct: usize,
    pub adjusted: usize,
    pub remaining: u32,
}

/// Headline counts derived purely from the labels an allocation pass wrote,
/// so any front-end rendering the annotated roster reaches the same numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationSummary {
    pub total_candidates: usize,
    pub admitted: usize,
    pub unassigned: usize,
    pub invalid_choice: usize,
    pub majors: Vec<MajorTally>,
}

impl AllocationSummary {
    pub fn from_result(result: &AllocationResult, options: &AllocationOptions) -> Self {
        let mut majors: Vec<MajorTally> = result
            .remaining_quotas
            .entries()
            .iter()
            .map(|entry| MajorTally {
                major: entry.major.clone(),
                admitted: 0,
                direct: 0,
                adjusted: 0,
                remaining: entry.seats,
            })
            .collect();

        let mut unassigned = 0;
        let mut invalid_choice = 0;

        for student in &result.students {
            let label = student.text(&options.assigned_key).unwrap_or_default();
            if label == options.unassigned_label {
                unassigned += 1;
                continue;
            }
            if label == options.invalid_choice_label {
                invalid_choice += 1;
                continue;
            }

            let (major, adjusted) = match label.strip_suffix(&options.adjust_suffix) {
                Some(base) if !options.adjust_suffix.is_empty() => (base, true),
                _ => (label, false),
            };

            if let Some(tally) = majors.iter_mut().find(|tally| tally.major == major) {
                tally.admitted += 1;
                if adjusted {
                    tally.adjusted += 1;
                } else {
                    tally.direct += 1;
                }
            }
        }

        let total_candidates = result.students.len();
        Self {
            total_candidates,
            admitted: total_candidates - unassigned - invalid_choice,
            unassigned,
            invalid_choice,
            majors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::admission::domain::{CandidateRecord, QuotaLedger};
    use serde_json::json;

    fn student(label: &str) -> CandidateRecord {
        let mut record = CandidateRecord::new();
        record.set_field("assignedMajor", json!(label));
        record
    }

    #[test]
    fn summary_reconciles_labels_with_tallies() {
        let options = AllocationOptions::default();
        let remaining: QuotaLedger = [("Alpha", 0), ("Beta", 2)].into_iter().collect();
        let result = AllocationResult {
            students: vec![
                student("Alpha"),
                student("Alpha(adjusted)"),
                student("Beta"),
                student("unassigned"),
                student("invalid-choice"),
            ],
            remaining_quotas: remaining,
        };

        let summary = AllocationSummary::from_result(&result, &options);
        assert_eq!(summary.total_candidates, 5);
        assert_eq!(summary.admitted, 3);
        assert_eq!(summary.unassigned, 1);
        assert_eq!(summary.invalid_choice, 1);

        let alpha = &summary.majors[0];
        assert_eq!(alpha.major, "Alpha");
        assert_eq!(alpha.admitted, 2);
        assert_eq!(alpha.direct, 1);
        assert_eq!(alpha.adjusted, 1);
        assert_eq!(alpha.remaining, 0);

        let beta = &summary.majors[1];
        assert_eq!(beta.admitted, 1);
        assert_eq!(beta.adjusted, 0);
        assert_eq!(beta.remaining, 2);
    }
}
