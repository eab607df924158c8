use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One applicant row as an open field bag. Imports come from spreadsheets
/// with arbitrary columns, so the record keeps every field verbatim and the
/// engine reads only the keys named in its options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateRecord {
    fields: Map<String, Value>,
}

impl CandidateRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Convenience accessor for string-valued fields such as the assigned
    /// major label.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for CandidateRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl FromIterator<(String, Value)> for CandidateRecord {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// A single major's seat count within the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaEntry {
    pub major: String,
    pub seats: u32,
}

/// Ordered major -> remaining-seat mapping. Entry order is insertion order
/// and drives the adjustment scan, so the ledger serializes as an entry
/// sequence rather than a JSON object (object key order is not guaranteed).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<QuotaEntry>", into = "Vec<QuotaEntry>")]
pub struct QuotaLedger {
    entries: Vec<QuotaEntry>,
}

impl QuotaLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a major's seat count. An existing entry keeps its
    /// position so re-configuring a count never reorders the scan.
    pub fn insert(&mut self, major: impl Into<String>, seats: u32) {
        let major = major.into();
        match self.entries.iter_mut().find(|entry| entry.major == major) {
            Some(entry) => entry.seats = seats,
            None => self.entries.push(QuotaEntry { major, seats }),
        }
    }

    /// Remaining seats for a major; majors absent from the ledger report 0.
    pub fn available(&self, major: &str) -> u32 {
        self.entries
            .iter()
            .find(|entry| entry.major == major)
            .map(|entry| entry.seats)
            .unwrap_or(0)
    }

    /// Consume one seat if the major has remaining capacity. Returns whether
    /// a seat was taken; counts never go below zero.
    pub fn consume(&mut self, major: &str) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.major == major && entry.seats > 0)
        {
            Some(entry) => {
                entry.seats -= 1;
                true
            }
            None => false,
        }
    }

    /// Consume a seat from the first open major in ledger order.
    pub fn consume_first_open(&mut self) -> Option<String> {
        let entry = self.entries.iter_mut().find(|entry| entry.seats > 0)?;
        entry.seats -= 1;
        Some(entry.major.clone())
    }

    pub fn total_seats(&self) -> u64 {
        self.entries.iter().map(|entry| u64::from(entry.seats)).sum()
    }

    pub fn entries(&self) -> &[QuotaEntry] {
        &self.entries
    }

    pub fn majors(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.major.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<QuotaEntry>> for QuotaLedger {
    fn from(entries: Vec<QuotaEntry>) -> Self {
        let mut ledger = Self::new();
        for entry in entries {
            ledger.insert(entry.major, entry.seats);
        }
        ledger
    }
}

impl From<QuotaLedger> for Vec<QuotaEntry> {
    fn from(ledger: QuotaLedger) -> Self {
        ledger.entries
    }
}

impl<M: Into<String>> FromIterator<(M, u32)> for QuotaLedger {
    fn from_iter<I: IntoIterator<Item = (M, u32)>>(iter: I) -> Self {
        let mut ledger = Self::new();
        for (major, seats) in iter {
            ledger.insert(major, seats);
        }
        ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> QuotaLedger {
        [("Alpha", 2), ("Beta", 0), ("Gamma", 1)]
            .into_iter()
            .collect()
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut ledger = ledger();
        ledger.insert("Beta", 5);
        let majors: Vec<_> = ledger.majors().collect();
        assert_eq!(majors, vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(ledger.available("Beta"), 5);
    }

    #[test]
    fn consume_stops_at_zero() {
        let mut ledger = ledger();
        assert!(ledger.consume("Gamma"));
        assert!(!ledger.consume("Gamma"));
        assert_eq!(ledger.available("Gamma"), 0);
    }

    #[test]
    fn consume_ignores_unknown_majors() {
        let mut ledger = ledger();
        assert!(!ledger.consume("Delta"));
        assert_eq!(ledger.available("Delta"), 0);
    }

    #[test]
    fn first_open_respects_entry_order() {
        let mut ledger = ledger();
        assert_eq!(ledger.consume_first_open().as_deref(), Some("Alpha"));
        assert_eq!(ledger.consume_first_open().as_deref(), Some("Alpha"));
        assert_eq!(ledger.consume_first_open().as_deref(), Some("Gamma"));
        assert_eq!(ledger.consume_first_open(), None);
    }

    #[test]
    fn deserializing_duplicates_keeps_last_count() {
        let raw = r#"[
            {"major": "Alpha", "seats": 1},
            {"major": "Beta", "seats": 2},
            {"major": "Alpha", "seats": 7}
        ]"#;
        let ledger: QuotaLedger = serde_json::from_str(raw).expect("ledger parses");
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.available("Alpha"), 7);
        let majors: Vec<_> = ledger.majors().collect();
        assert_eq!(majors, vec!["Alpha", "Beta"]);
    }
}
