//! Integration specifications for the allocation engine and its HTTP
//! surface. Scenarios exercise the public facade end-to-end: sorting,
//! preference walks, adjustment, sentinel labels, and the stateless router.

mod common {
    use admissions::workflows::admission::{
        AllocationOptions, CandidateRecord, PreferenceTable, QuotaLedger,
    };
    use serde_json::{json, Value};

    pub(super) fn candidate(id: &str, ranking: Value, choice: &str) -> CandidateRecord {
        let mut record = CandidateRecord::new();
        record.set_field("id", json!(id));
        record.set_field("score", ranking);
        record.set_field("choice", json!(choice));
        record
    }

    /// Single-code table: "A" ranks X > Y > Z.
    pub(super) fn table() -> PreferenceTable {
        PreferenceTable::from_entries([("A", vec!["X", "Y", "Z"])])
    }

    pub(super) fn quotas(x: u32, y: u32, z: u32) -> QuotaLedger {
        [("X", x), ("Y", y), ("Z", z)].into_iter().collect()
    }

    pub(super) fn options() -> AllocationOptions {
        AllocationOptions::default()
    }

    pub(super) fn assigned(record: &CandidateRecord) -> &str {
        record.text("assignedMajor").expect("assignment label written")
    }

    pub(super) fn id_of(record: &CandidateRecord) -> &str {
        record.text("id").expect("id field")
    }
}

mod scenarios {
    use super::common::*;
    use admissions::workflows::admission::AllocationEngine;
    use serde_json::json;

    #[test]
    fn unknown_code_is_labelled_invalid_and_consumes_no_seat() {
        let engine = AllocationEngine::new(table(), options());
        let result = engine.run([candidate("1", json!(100), "Z")], &quotas(1, 1, 1));

        assert_eq!(assigned(&result.students[0]), "invalid-choice");
        assert_eq!(result.remaining_quotas.total_seats(), 3);
    }

    #[test]
    fn blank_code_adjusts_into_the_open_major() {
        let engine = AllocationEngine::new(table(), options());
        let result = engine.run([candidate("1", json!(100), "")], &quotas(0, 0, 1));

        assert_eq!(assigned(&result.students[0]), "Z(adjusted)");
        assert_eq!(result.remaining_quotas.available("Z"), 0);
    }

    #[test]
    fn higher_score_claims_the_first_preference_first() {
        let engine = AllocationEngine::new(table(), options());
        let result = engine.run(
            [
                candidate("low", json!(10), "A"),
                candidate("high", json!(99), "A"),
            ],
            &quotas(1, 1, 1),
        );

        assert_eq!(id_of(&result.students[0]), "high");
        assert_eq!(assigned(&result.students[0]), "X");
        assert_eq!(id_of(&result.students[1]), "low");
        assert_eq!(assigned(&result.students[1]), "Y");
    }

    #[test]
    fn preference_exhaustion_without_adjustment_target_leaves_unassigned() {
        let engine = AllocationEngine::new(table(), options());
        let students = [
            candidate("s1", json!(100), "A"),
            candidate("s2", json!(90), "A"),
            candidate("s3", json!(80), "A"),
            candidate("s4", json!(70), "A"),
        ];

        let result = engine.run(students.clone(), &quotas(1, 1, 0));
        assert_eq!(assigned(&result.students[0]), "X");
        assert_eq!(assigned(&result.students[1]), "Y");
        assert_eq!(assigned(&result.students[2]), "unassigned");
        assert_eq!(assigned(&result.students[3]), "unassigned");

        // With a third seat open the 3rd candidate still reaches it through
        // their own preference list, so no adjustment suffix appears.
        let result = engine.run(students, &quotas(1, 1, 1));
        assert_eq!(assigned(&result.students[2]), "Z");
        assert_eq!(assigned(&result.students[3]), "unassigned");
    }

    #[test]
    fn ascending_ranking_processes_rank_one_first() {
        let engine = AllocationEngine::new(
            table(),
            options().with_ranking_key("score").with_sort_descending(false),
        );
        let result = engine.run(
            [
                candidate("r2", json!(2), "A"),
                candidate("r1", json!(1), "A"),
            ],
            &quotas(2, 0, 0),
        );

        assert_eq!(id_of(&result.students[0]), "r1");
        assert_eq!(id_of(&result.students[1]), "r2");
        assert_eq!(assigned(&result.students[0]), "X");
    }

    #[test]
    fn adjustment_reconsiders_majors_the_candidate_already_lost() {
        // "A" ranks only X; once X is gone the lower-ranked candidate is
        // adjusted into ledger order, which may well start at X again for
        // another ledger -- here Y is the first open entry.
        let engine = AllocationEngine::new(
            admissions::workflows::admission::PreferenceTable::from_entries([(
                "A",
                vec!["X"],
            )]),
            options(),
        );
        let result = engine.run(
            [
                candidate("first", json!(90), "A"),
                candidate("second", json!(80), "A"),
            ],
            &quotas(1, 1, 0),
        );

        assert_eq!(assigned(&result.students[0]), "X");
        assert_eq!(assigned(&result.students[1]), "Y(adjusted)");
    }
}

mod properties {
    use super::common::*;
    use admissions::workflows::admission::{AllocationEngine, AllocationSummary};
    use serde_json::json;

    #[test]
    fn ties_keep_their_input_order() {
        let engine = AllocationEngine::new(table(), options());
        let result = engine.run(
            [
                candidate("first", json!(50), "A"),
                candidate("second", json!(50), "A"),
                candidate("third", json!(50), "A"),
            ],
            &quotas(3, 0, 0),
        );

        let ids: Vec<_> = result.students.iter().map(id_of).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn malformed_rankings_default_to_zero_and_never_fail() {
        let engine = AllocationEngine::new(table(), options());
        let result = engine.run(
            [
                candidate("text", json!("not-a-number"), "A"),
                candidate("numeric", json!("88.5"), "A"),
                {
                    let mut record = candidate("missing", json!(0), "A");
                    record.set_field("score", json!(null));
                    record
                },
            ],
            &quotas(3, 0, 0),
        );

        // The parseable string sorts first; the two zero-ranked candidates
        // keep their relative input order.
        let ids: Vec<_> = result.students.iter().map(id_of).collect();
        assert_eq!(ids, vec!["numeric", "text", "missing"]);
    }

    #[test]
    fn assignments_never_exceed_total_seats() {
        let engine = AllocationEngine::new(table(), options());
        let initial = quotas(2, 1, 0);
        let students: Vec<_> = (0..10)
            .map(|index| candidate(&format!("s{index}"), json!(100 - index), "A"))
            .collect();

        let result = engine.run(students, &initial);
        let summary = AllocationSummary::from_result(&result, engine.options());

        assert_eq!(summary.admitted as u64, initial.total_seats());
        assert_eq!(summary.unassigned, 7);
        assert!(result
            .remaining_quotas
            .entries()
            .iter()
            .all(|entry| entry.seats <= initial.available(&entry.major)));
    }

    #[test]
    fn invalid_count_matches_unrecognized_codes() {
        let engine = AllocationEngine::new(table(), options());
        let result = engine.run(
            [
                candidate("ok", json!(90), "a"),
                candidate("bad-1", json!(80), "Q"),
                candidate("bad-2", json!(70), " nope "),
                candidate("blank", json!(60), "  "),
            ],
            &quotas(1, 1, 1),
        );

        let summary = AllocationSummary::from_result(&result, engine.options());
        assert_eq!(summary.invalid_choice, 2);
        // The blank code is not invalid; it goes through adjustment instead.
        assert_eq!(summary.admitted, 2);
    }

    #[test]
    fn allocation_is_pure_given_a_fresh_ledger() {
        let engine = AllocationEngine::new(table(), options());
        let initial = quotas(1, 1, 1);
        let students = vec![
            candidate("s1", json!(95), "A"),
            candidate("s2", json!(85), ""),
            candidate("s3", json!(75), "Q"),
        ];

        let first = engine.run(students.clone(), &initial);
        let second = engine.run(students, &initial);

        assert_eq!(first, second);
        // The caller's ledger is untouched by both passes.
        assert_eq!(initial.total_seats(), 3);
    }
}

mod routing {
    use admissions::workflows::admission::admission_router;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn allocate_request(payload: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/admissions/allocate")
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn allocate_endpoint_returns_annotated_students_and_summary() {
        let router = admission_router();
        let payload = json!({
            "candidates": [
                { "id": "low", "score": 10, "choice": "A" },
                { "id": "high", "score": 99, "choice": "A" },
            ],
            "quotas": [
                { "major": "X", "seats": 1 },
                { "major": "Y", "seats": 1 },
                { "major": "Z", "seats": 1 },
            ],
            "preference_table": { "A": ["X", "Y", "Z"] },
        });

        let response = router
            .oneshot(allocate_request(&payload))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let parsed: Value = serde_json::from_slice(&body).expect("json");

        assert_eq!(parsed["students"].as_array().map(Vec::len), Some(2));
        assert_eq!(parsed["students"][0]["id"], json!("high"));
        assert_eq!(parsed["students"][0]["assignedMajor"], json!("X"));
        assert_eq!(parsed["students"][1]["assignedMajor"], json!("Y"));
        assert_eq!(parsed["summary"]["admitted"], json!(2));
        assert_eq!(
            parsed["remaining_quotas"],
            json!([
                { "major": "X", "seats": 0 },
                { "major": "Y", "seats": 0 },
                { "major": "Z", "seats": 1 },
            ])
        );
        assert!(parsed.get("generated_at").is_some());
    }

    #[tokio::test]
    async fn allocate_endpoint_defaults_to_the_standard_table() {
        let router = admission_router();
        let payload = json!({
            "candidates": [
                { "id": "1", "score": 88, "choice": "A" },
            ],
            "quotas": [
                { "major": "Electronic Information Engineering", "seats": 1 },
            ],
        });

        let response = router
            .oneshot(allocate_request(&payload))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let parsed: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(
            parsed["students"][0]["assignedMajor"],
            json!("Electronic Information Engineering")
        );
    }
}
