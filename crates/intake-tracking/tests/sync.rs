//! Integration tests for the status synchronizer, run against the
//! in-memory store.

use intake_core::models::client::ClientRecord;
use intake_core::models::response::{ResponseCell, SelectedOption};
use intake_core::models::status::FormStatus;
use intake_sheets::mem::MemorySheets;
use intake_tracking::error::TrackingError;
use intake_tracking::locks::SubmissionLocks;
use intake_tracking::registry::{find_client, require_client};
use intake_tracking::status::form_statuses;
use intake_tracking::sync::record_submission;

const CENTRAL: &str = "central";
const CLIENT_DOC: &str = "client-doc";
const CLIENT_ID: &str = "jane_doe_1700000000000";

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

fn ts(s: &str) -> jiff::Timestamp {
    s.parse().unwrap()
}

fn client() -> ClientRecord {
    ClientRecord {
        client_id: CLIENT_ID.to_string(),
        display_name: "Jane Doe".to_string(),
        assigned_form_ids: vec!["gad7".to_string()],
        date_of_birth: "1990-04-02".to_string(),
        evaluation_type: "initial".to_string(),
        age_range: "adult".to_string(),
        user_type: "self".to_string(),
        created_at: ts("2023-11-14T22:13:20Z"),
        document_id: CLIENT_DOC.to_string(),
        document_url: format!("https://docs.google.com/spreadsheets/d/{CLIENT_DOC}"),
    }
}

/// Registry + client document as the provisioner leaves them after
/// assigning gad7.
fn seeded() -> MemorySheets {
    let store = MemorySheets::new();
    store.insert_document(CENTRAL, "Central Registry");
    store.seed_tab(
        CENTRAL,
        "Clients",
        grid(&[
            &[
                "clientId",
                "displayName",
                "assignedForms",
                "dob",
                "evalType",
                "ageRange",
                "userType",
                "createdAt",
                "documentId",
                "documentUrl",
            ],
            &[
                CLIENT_ID,
                "Jane Doe",
                "gad7",
                "1990-04-02",
                "initial",
                "adult",
                "self",
                "2023-11-14T22:13:20Z",
                CLIENT_DOC,
                "https://docs.google.com/spreadsheets/d/client-doc",
            ],
        ]),
    );
    store.seed_tab(
        CENTRAL,
        "MeasurementTracking",
        grid(&[
            &["clientId", "displayName", "formId", "userType", "Status", "Timestamp"],
            &[CLIENT_ID, "Jane Doe", "gad7", "self", "Not Started", "2023-11-14T22:13:20Z"],
        ]),
    );

    store.insert_document(CLIENT_DOC, "Client_jane_doe_1700000000000_Submissions");
    store.seed_tab(
        CLIENT_DOC,
        "Submissions",
        grid(&[
            &["ClientID", "FormID", "Status", "Timestamp"],
            &[CLIENT_ID, "gad7", "Not Started", "2023-11-14T22:13:20Z"],
        ]),
    );
    store.seed_tab(
        CLIENT_DOC,
        "gad7",
        grid(&[
            &["Feeling nervous, anxious, or on edge"],
            &["Not being able to stop or control worrying"],
            &["Worrying too much about different things"],
            &["Trouble relaxing"],
            &["Being so restless that it is hard to sit still"],
            &["Becoming easily annoyed or irritable"],
            &["Feeling afraid, as if something awful might happen"],
        ]),
    );
    store
}

fn answers(count: usize) -> Vec<ResponseCell> {
    (0..count)
        .map(|_| {
            ResponseCell::Answered(SelectedOption {
                label: "Several days".to_string(),
                value: 1,
            })
        })
        .collect()
}

#[tokio::test]
async fn submission_marks_both_tables_completed_with_one_timestamp() {
    let store = seeded();
    let now = ts("2023-11-15T09:30:00Z");

    record_submission(
        &store,
        &SubmissionLocks::new(),
        CENTRAL,
        &client(),
        "gad7",
        &answers(7),
        now,
    )
    .await
    .unwrap();

    let submissions = store.tab_rows(CLIENT_DOC, "Submissions").unwrap();
    assert_eq!(submissions.len(), 2);
    assert_eq!(submissions[1][2], "Completed");
    assert_eq!(submissions[1][3], now.to_string());

    let tracking = store.tab_rows(CENTRAL, "MeasurementTracking").unwrap();
    assert_eq!(tracking.len(), 2);
    assert_eq!(tracking[1][4], "Completed");
    assert_eq!(tracking[1][5], now.to_string());

    // Answers sit in columns B:C, aligned row-for-row with the prompts.
    let form_tab = store.tab_rows(CLIENT_DOC, "gad7").unwrap();
    assert_eq!(form_tab.len(), 7);
    assert_eq!(form_tab[0][1], "Several days");
    assert_eq!(form_tab[0][2], "1");
    assert_eq!(form_tab[6][1], "Several days");
}

#[tokio::test]
async fn resubmission_updates_the_existing_rows_in_place() {
    let store = seeded();
    let locks = SubmissionLocks::new();
    let first = ts("2023-11-15T09:30:00Z");
    let second = ts("2023-11-16T18:00:00Z");

    record_submission(&store, &locks, CENTRAL, &client(), "gad7", &answers(7), first)
        .await
        .unwrap();
    record_submission(&store, &locks, CENTRAL, &client(), "gad7", &answers(7), second)
        .await
        .unwrap();

    // Exactly one status row per table; the second timestamp wins; the
    // key columns are untouched.
    let submissions = store.tab_rows(CLIENT_DOC, "Submissions").unwrap();
    assert_eq!(submissions.len(), 2);
    assert_eq!(submissions[1][0], CLIENT_ID);
    assert_eq!(submissions[1][2], "Completed");
    assert_eq!(submissions[1][3], second.to_string());

    let tracking = store.tab_rows(CENTRAL, "MeasurementTracking").unwrap();
    assert_eq!(tracking.len(), 2);
    assert_eq!(tracking[1][5], second.to_string());

    // Answers were overwritten, not appended below the prompts.
    let form_tab = store.tab_rows(CLIENT_DOC, "gad7").unwrap();
    assert_eq!(form_tab.len(), 7);
}

#[tokio::test]
async fn response_count_mismatch_writes_nothing() {
    let store = seeded();
    let err = record_submission(
        &store,
        &SubmissionLocks::new(),
        CENTRAL,
        &client(),
        "gad7",
        &answers(5),
        ts("2023-11-15T09:30:00Z"),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        TrackingError::ResponseCount { expected: 7, got: 5, .. }
    ));

    let submissions = store.tab_rows(CLIENT_DOC, "Submissions").unwrap();
    assert_eq!(submissions[1][2], "Not Started");
    let form_tab = store.tab_rows(CLIENT_DOC, "gad7").unwrap();
    assert!(form_tab.iter().all(|row| row.len() == 1));
}

#[tokio::test]
async fn missing_status_rows_are_appended_with_full_identity() {
    let store = seeded();
    // A client whose seeding predates the tracking rows.
    store.seed_tab(
        CLIENT_DOC,
        "Submissions",
        grid(&[&["ClientID", "FormID", "Status", "Timestamp"]]),
    );
    store.seed_tab(
        CENTRAL,
        "MeasurementTracking",
        grid(&[&["clientId", "displayName", "formId", "userType", "Status", "Timestamp"]]),
    );

    let now = ts("2023-11-15T09:30:00Z");
    record_submission(
        &store,
        &SubmissionLocks::new(),
        CENTRAL,
        &client(),
        "gad7",
        &answers(7),
        now,
    )
    .await
    .unwrap();

    let submissions = store.tab_rows(CLIENT_DOC, "Submissions").unwrap();
    assert_eq!(submissions.len(), 2);
    assert_eq!(
        submissions[1],
        vec![
            CLIENT_ID.to_string(),
            "gad7".to_string(),
            "Completed".to_string(),
            now.to_string(),
        ]
    );

    let tracking = store.tab_rows(CENTRAL, "MeasurementTracking").unwrap();
    assert_eq!(tracking.len(), 2);
    assert_eq!(
        tracking[1],
        vec![
            CLIENT_ID.to_string(),
            "Jane Doe".to_string(),
            "gad7".to_string(),
            "self".to_string(),
            "Completed".to_string(),
            now.to_string(),
        ]
    );
}

#[tokio::test]
async fn unknown_form_tab_is_rejected_before_any_write() {
    let store = seeded();
    let err = record_submission(
        &store,
        &SubmissionLocks::new(),
        CENTRAL,
        &client(),
        "phq9",
        &answers(9),
        ts("2023-11-15T09:30:00Z"),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, TrackingError::UnknownForm { .. }));
    let submissions = store.tab_rows(CLIENT_DOC, "Submissions").unwrap();
    assert_eq!(submissions.len(), 2);
    assert_eq!(submissions[1][2], "Not Started");
}

#[tokio::test]
async fn registry_scan_finds_clients_by_trimmed_id() {
    let store = seeded();

    let found = find_client(&store, CENTRAL, CLIENT_ID).await.unwrap().unwrap();
    assert_eq!(found.display_name, "Jane Doe");
    assert_eq!(found.document_id, CLIENT_DOC);
    assert_eq!(found.assigned_form_ids, vec!["gad7"]);

    assert!(find_client(&store, CENTRAL, "nobody_1")
        .await
        .unwrap()
        .is_none());
    assert!(matches!(
        require_client(&store, CENTRAL, "nobody_1").await,
        Err(TrackingError::UnknownClient(_))
    ));
}

#[tokio::test]
async fn form_statuses_default_to_not_started_and_follow_completion() {
    let store = seeded();
    let mut record = client();
    record.assigned_form_ids = vec!["gad7".to_string(), "phq9".to_string()];

    let statuses = form_statuses(&store, &record).await.unwrap();
    assert_eq!(
        statuses,
        vec![
            ("gad7".to_string(), FormStatus::NotStarted),
            ("phq9".to_string(), FormStatus::NotStarted),
        ]
    );

    record_submission(
        &store,
        &SubmissionLocks::new(),
        CENTRAL,
        &client(),
        "gad7",
        &answers(7),
        ts("2023-11-15T09:30:00Z"),
    )
    .await
    .unwrap();

    let statuses = form_statuses(&store, &record).await.unwrap();
    assert_eq!(statuses[0], ("gad7".to_string(), FormStatus::Completed));
    assert_eq!(statuses[1].1, FormStatus::NotStarted);
}
