use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The three majors offered by the standard undergraduate program.
pub const ELECTRONIC_ENGINEERING: &str = "Electronic Information Engineering";
pub const COMMUNICATIONS_ENGINEERING: &str = "Communications Engineering";
pub const ELECTROMAGNETICS: &str = "Electromagnetic Fields and Wireless Technology";

/// Immutable mapping from a preference code to an ordered major list
/// (most-preferred first). Codes are normalized (trimmed, uppercased) at
/// construction so lookups never re-normalize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Vec<String>>",
    into = "BTreeMap<String, Vec<String>>"
)]
pub struct PreferenceTable {
    codes: BTreeMap<String, Vec<String>>,
}

impl PreferenceTable {
    /// The deployed A-F table: every permutation of the three standard majors.
    pub fn standard() -> Self {
        Self::from_entries([
            (
                "A",
                vec![
                    ELECTRONIC_ENGINEERING,
                    COMMUNICATIONS_ENGINEERING,
                    ELECTROMAGNETICS,
                ],
            ),
            (
                "B",
                vec![
                    ELECTRONIC_ENGINEERING,
                    ELECTROMAGNETICS,
                    COMMUNICATIONS_ENGINEERING,
                ],
            ),
            (
                "C",
                vec![
                    ELECTROMAGNETICS,
                    ELECTRONIC_ENGINEERING,
                    COMMUNICATIONS_ENGINEERING,
                ],
            ),
            (
                "D",
                vec![
                    ELECTROMAGNETICS,
                    COMMUNICATIONS_ENGINEERING,
                    ELECTRONIC_ENGINEERING,
                ],
            ),
            (
                "E",
                vec![
                    COMMUNICATIONS_ENGINEERING,
                    ELECTRONIC_ENGINEERING,
                    ELECTROMAGNETICS,
                ],
            ),
            (
                "F",
                vec![
                    COMMUNICATIONS_ENGINEERING,
                    ELECTROMAGNETICS,
                    ELECTRONIC_ENGINEERING,
                ],
            ),
        ])
    }

    pub fn from_entries<C, M, I, L>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, L)>,
        L: IntoIterator<Item = M>,
        C: AsRef<str>,
        M: Into<String>,
    {
        let codes = entries
            .into_iter()
            .map(|(code, majors)| {
                (
                    normalize_code(code.as_ref()),
                    majors.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Self { codes }
    }

    /// Whether the (already normalized) code selects a preference list.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains_key(code)
    }

    pub fn majors(&self, code: &str) -> Option<&[String]> {
        self.codes.get(code).map(Vec::as_slice)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

pub(crate) fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

impl From<BTreeMap<String, Vec<String>>> for PreferenceTable {
    fn from(codes: BTreeMap<String, Vec<String>>) -> Self {
        Self::from_entries(codes)
    }
}

impl From<PreferenceTable> for BTreeMap<String, Vec<String>> {
    fn from(table: PreferenceTable) -> Self {
        table.codes
    }
}
