use std::io::Read;

use serde_json::{Map, Value};
use tracing::debug;

use super::RosterError;
use crate::workflows::admission::{AllocationOptions, CandidateRecord};

/// Parsed roster: the candidate field bags plus the source column order, so
/// exports can keep the original layout.
#[derive(Debug, Clone)]
pub struct Roster {
    pub columns: Vec<String>,
    pub candidates: Vec<CandidateRecord>,
}

/// Read a delimited roster into candidate records.
///
/// Every cell is kept as a string field except the ranking column, which is
/// coerced to a number when it parses. The engine re-normalizes both the
/// ranking and the preference code defensively, so coercion here is a
/// convenience, not a contract.
pub fn read_candidates<R: Read>(
    reader: R,
    options: &AllocationOptions,
) -> Result<Roster, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(str::to_string)
        .collect();

    for required in [options.ranking_key.as_str(), options.preference_key.as_str()] {
        if !columns.iter().any(|column| column == required) {
            return Err(RosterError::MissingColumn(required.to_string()));
        }
    }

    let mut candidates = Vec::new();
    for record in csv_reader.records() {
        let row = record?;
        let mut fields = Map::new();
        for (column, cell) in columns.iter().zip(row.iter()) {
            let value = if column == &options.ranking_key {
                coerce_ranking(cell)
            } else {
                Value::String(cell.to_string())
            };
            fields.insert(column.clone(), value);
        }
        candidates.push(CandidateRecord::from(fields));
    }

    debug!(rows = candidates.len(), "roster parsed");

    Ok(Roster {
        columns,
        candidates,
    })
}

fn coerce_ranking(cell: &str) -> Value {
    let trimmed = cell.trim();
    // Keep integer cells integral so exports render them unchanged.
    if let Ok(integer) = trimmed.parse::<i64>() {
        return Value::Number(integer.into());
    }
    match trimmed.parse::<f64>() {
        Ok(number) => serde_json::Number::from_f64(number)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(cell.to_string())),
        Err(_) => Value::String(cell.to_string()),
    }
}
