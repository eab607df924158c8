use crate::infra::{parse_code, parse_quota};
use admissions::error::AppError;
use admissions::workflows::admission::{
    preferences, AllocationEngine, AllocationOptions, AllocationSummary, CandidateRecord,
    PreferenceTable, QuotaLedger,
};
use admissions::workflows::roster::{read_candidates, write_candidates};
use clap::Args;
use serde_json::json;
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AllocateArgs {
    /// Input roster CSV; must carry the ranking and preference columns
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Output CSV for the annotated roster
    #[arg(long)]
    pub(crate) output: PathBuf,
    /// Per-major seat quota as MAJOR=SEATS, repeatable; flag order sets the
    /// adjustment scan order
    #[arg(long = "quota", value_parser = parse_quota, required = true)]
    pub(crate) quotas: Vec<(String, u32)>,
    /// Preference override as CODE=MAJOR>MAJOR, repeatable; omit to use the
    /// standard A-F table
    #[arg(long = "code", value_parser = parse_code)]
    pub(crate) codes: Vec<(String, Vec<String>)>,
    /// Field holding the ranking value
    #[arg(long, default_value = "score")]
    pub(crate) ranking_key: String,
    /// Sort ascending (the ranking value is a rank position, lower is better)
    #[arg(long)]
    pub(crate) ascending: bool,
    /// Field holding the preference code
    #[arg(long, default_value = "choice")]
    pub(crate) preference_key: String,
    /// Output field for the assignment label
    #[arg(long, default_value = "assignedMajor")]
    pub(crate) assigned_key: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seats opened per standard major in the demo ledger
    #[arg(long, default_value_t = 2)]
    pub(crate) seats: u32,
}

pub(crate) fn run_allocate(args: AllocateArgs) -> Result<(), AppError> {
    let AllocateArgs {
        input,
        output,
        quotas,
        codes,
        ranking_key,
        ascending,
        preference_key,
        assigned_key,
    } = args;

    let options = AllocationOptions::default()
        .with_ranking_key(ranking_key)
        .with_sort_descending(!ascending)
        .with_preference_key(preference_key)
        .with_assigned_key(assigned_key);

    let roster = read_candidates(File::open(&input)?, &options)?;
    let ledger: QuotaLedger = quotas.into_iter().collect();
    let table = if codes.is_empty() {
        PreferenceTable::standard()
    } else {
        PreferenceTable::from_entries(codes)
    };

    let engine = AllocationEngine::new(table, options);
    let result = engine.run(roster.candidates, &ledger);
    let summary = AllocationSummary::from_result(&result, engine.options());

    write_candidates(
        File::create(&output)?,
        &roster.columns,
        &result.students,
        &engine.options().assigned_key,
    )?;

    println!("Annotated roster written to {}", output.display());
    render_summary(&summary);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = AllocationEngine::standard();
    let ledger: QuotaLedger = [
        (preferences::ELECTRONIC_ENGINEERING, args.seats),
        (preferences::COMMUNICATIONS_ENGINEERING, args.seats),
        (preferences::ELECTROMAGNETICS, args.seats),
    ]
    .into_iter()
    .collect();

    println!("# Major admission allocation demo");
    println!(
        "Each of the {} standard majors opens {} seat(s).",
        ledger.len(),
        args.seats
    );

    let result = engine.run(sample_candidates(), &ledger);
    let summary = AllocationSummary::from_result(&result, engine.options());

    println!("\n## Assigned roster (best score first)");
    for student in &result.students {
        let name = student.text("name").unwrap_or("?");
        let score = student
            .field("score")
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(0.0);
        let choice = student.text("choice").unwrap_or("");
        let choice = if choice.is_empty() { "-" } else { choice };
        let label = student.text("assignedMajor").unwrap_or("?");
        println!("{score:>6.1}  {choice:<2} {name:<8} -> {label}");
    }

    println!("\n## Summary");
    render_summary(&summary);
    Ok(())
}

fn sample_candidates() -> Vec<CandidateRecord> {
    let rows = [
        ("Wei", 92.5, "A"),
        ("Ana", 88.0, "C"),
        ("Jun", 86.0, "A"),
        ("Mira", 84.5, "E"),
        ("Tomas", 81.0, "A"),
        ("Lea", 79.5, "B"),
        ("Noor", 74.0, ""),
        ("Sam", 70.0, "Q"),
    ];

    rows.into_iter()
        .map(|(name, score, choice)| {
            let mut record = CandidateRecord::new();
            record.set_field("name", json!(name));
            record.set_field("score", json!(score));
            record.set_field("choice", json!(choice));
            record
        })
        .collect()
}

fn render_summary(summary: &AllocationSummary) {
    println!(
        "Candidates: {} | admitted {} | unassigned {} | invalid codes {}",
        summary.total_candidates, summary.admitted, summary.unassigned, summary.invalid_choice
    );
    for tally in &summary.majors {
        println!(
            "  {:<46} admitted {:>3} (direct {}, adjusted {}) | seats left {}",
            tally.major, tally.admitted, tally.direct, tally.adjusted, tally.remaining
        );
    }
}
