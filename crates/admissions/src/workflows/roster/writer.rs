use std::io::Write;

use serde_json::Value;

use super::RosterError;
use crate::workflows::admission::CandidateRecord;

/// Write candidate records as delimited text using the given column order,
/// appending the assigned column when the source roster did not have one.
/// Fields a record lacks render as empty cells.
pub fn write_candidates<W: Write>(
    writer: W,
    columns: &[String],
    candidates: &[CandidateRecord],
    assigned_key: &str,
) -> Result<(), RosterError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = columns.iter().map(String::as_str).collect();
    if !header.contains(&assigned_key) {
        header.push(assigned_key);
    }
    csv_writer.write_record(&header)?;

    for candidate in candidates {
        let row: Vec<String> = header
            .iter()
            .map(|column| render_cell(candidate.field(column)))
            .collect();
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn render_cell(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(raw)) => raw.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
