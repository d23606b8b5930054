use gantt_ingest::CsvTable;
use gantt_model::{GanttError, StageStatus, parse_timestamp};
use gantt_normalize::{normalize_dataset, summarize_date_range};
use proptest::prelude::*;

fn table(headers: &[&str], rows: Vec<Vec<&str>>) -> CsvTable {
    CsvTable {
        headers: headers.iter().map(|h| (*h).to_string()).collect(),
        rows: rows
            .into_iter()
            .map(|row| row.into_iter().map(str::to_string).collect())
            .collect(),
    }
}

const LEGACY_HEADERS: [&str; 11] = [
    "project_name",
    "category",
    "priority",
    "preparing_start",
    "preparing_end",
    "execution_end",
    "progress_percent",
    "description",
    "team_lead",
    "preparing_status",
    "execution_status",
];

const MULTISTAGE_HEADERS: [&str; 6] = [
    "project_name",
    "category",
    "priority",
    "description",
    "team_lead",
    "stages",
];

#[test]
fn legacy_row_becomes_two_stages() {
    let input = table(
        &LEGACY_HEADERS,
        vec![vec![
            "Launch",
            "Ops",
            "high",
            "2024-01-01",
            "2024-01-10",
            "2024-02-09",
            "40",
            "initial rollout",
            "Kim",
            "completed",
            "warning",
        ]],
    );
    let projects = normalize_dataset(&input).expect("normalize");
    assert_eq!(projects.len(), 1);
    let project = &projects[0];
    assert_eq!(project.id.as_str(), "project_0");
    assert_eq!(project.name, "Launch");
    assert_eq!(project.team_lead, "Kim");
    assert_eq!(project.total_duration_days, 39);
    assert_eq!(project.stages.len(), 2);

    let preparing = &project.stages[0];
    assert_eq!(preparing.name, "Preparing");
    assert_eq!(Some(preparing.start), parse_timestamp("2024-01-01"));
    assert_eq!(Some(preparing.end), parse_timestamp("2024-01-10"));
    assert_eq!(preparing.duration_days, 9);
    assert_eq!(preparing.progress_percent, 100);
    assert_eq!(preparing.status, StageStatus::Completed);

    let execution = &project.stages[1];
    assert_eq!(execution.name, "Execution");
    assert_eq!(Some(execution.start), parse_timestamp("2024-01-10"));
    assert_eq!(Some(execution.end), parse_timestamp("2024-02-09"));
    assert_eq!(execution.duration_days, 30);
    assert_eq!(execution.progress_percent, 40);
    assert_eq!(execution.status, StageStatus::Warning);
}

#[test]
fn legacy_statuses_default_to_normal() {
    let input = table(
        &LEGACY_HEADERS,
        vec![vec![
            "Launch",
            "Ops",
            "high",
            "2024-01-01",
            "2024-01-10",
            "2024-02-09",
            "40",
            "",
            "Kim",
            "",
            "",
        ]],
    );
    let projects = normalize_dataset(&input).expect("normalize");
    assert_eq!(projects[0].stages[0].status, StageStatus::Normal);
    assert_eq!(projects[0].stages[1].status, StageStatus::Normal);
}

#[test]
fn multistage_rows_keep_stage_order_and_overlap() {
    // Stage 2 starts before stage 1 ends; the span still covers the
    // earliest start to the latest end.
    let stages_json = r#"[
        {"name": "Research", "start": "2024-01-05", "end": "2024-02-01", "progress": 100, "status": "completed"},
        {"name": "Prototype", "start": "2024-01-20", "end": "2024-03-15", "progress": 60},
        {"name": "Rollout", "start": "2024-03-01", "end": "2024-04-14", "progress": 5, "status": "warning"}
    ]"#;
    let input = table(
        &MULTISTAGE_HEADERS,
        vec![vec!["Atlas", "R&D", "medium", "moonshot", "Lee", stages_json]],
    );
    let projects = normalize_dataset(&input).expect("normalize");
    let project = &projects[0];
    let names: Vec<&str> = project
        .stages
        .iter()
        .map(|stage| stage.name.as_str())
        .collect();
    assert_eq!(names, vec!["Research", "Prototype", "Rollout"]);
    assert_eq!(project.stages[1].status, StageStatus::Normal);
    // 2024-01-05 -> 2024-04-14
    assert_eq!(project.total_duration_days, 100);
}

#[test]
fn multistage_float_progress_truncates() {
    let stages_json =
        r#"[{"name": "Build", "start": "2024-01-01", "end": "2024-02-01", "progress": 87.5}]"#;
    let input = table(
        &MULTISTAGE_HEADERS,
        vec![vec!["Atlas", "R&D", "low", "", "Lee", stages_json]],
    );
    let projects = normalize_dataset(&input).expect("normalize");
    assert_eq!(projects[0].stages[0].progress_percent, 87);
}

#[test]
fn ids_follow_row_order() {
    let stages_json =
        r#"[{"name": "Build", "start": "2024-01-01", "end": "2024-02-01", "progress": 10}]"#;
    let input = table(
        &MULTISTAGE_HEADERS,
        vec![
            vec!["One", "a", "low", "", "Lee", stages_json],
            vec!["Two", "b", "low", "", "Kim", stages_json],
        ],
    );
    let projects = normalize_dataset(&input).expect("normalize");
    assert_eq!(projects[0].id.as_str(), "project_0");
    assert_eq!(projects[1].id.as_str(), "project_1");
}

#[test]
fn first_bad_row_aborts_the_dataset() {
    let good = vec![
        "Good", "Ops", "high", "2024-01-01", "2024-01-10", "2024-02-09", "40", "", "Kim", "", "",
    ];
    let bad = vec![
        "Bad", "Ops", "high", "2024-05-10", "2024-05-01", "2024-06-01", "40", "", "Kim", "", "",
    ];
    let input = table(&LEGACY_HEADERS, vec![good, bad]);
    let error = normalize_dataset(&input).unwrap_err();
    match error {
        GanttError::Order { row, .. } => assert_eq!(row, 1),
        other => panic!("expected order error, got {other:?}"),
    }
}

#[test]
fn missing_columns_fail_before_any_row() {
    let input = table(&["project_name", "category"], vec![vec!["Launch", "Ops"]]);
    assert!(matches!(
        normalize_dataset(&input).unwrap_err(),
        GanttError::Schema { .. }
    ));
}

#[test]
fn headers_only_dataset_normalizes_to_nothing() {
    let input = table(&LEGACY_HEADERS, vec![]);
    let projects = normalize_dataset(&input).expect("normalize");
    assert!(projects.is_empty());
    assert!(matches!(
        summarize_date_range(&projects).unwrap_err(),
        GanttError::EmptyDataset
    ));
}

#[test]
fn range_summary_spans_the_dataset() {
    let input = table(
        &LEGACY_HEADERS,
        vec![
            vec![
                "One", "Ops", "high", "2024-01-01", "2024-01-10", "2024-02-09", "40", "", "Kim",
                "", "",
            ],
            vec![
                "Two", "Ops", "low", "2023-12-01", "2024-01-05", "2024-03-20", "10", "", "Lee",
                "", "",
            ],
        ],
    );
    let projects = normalize_dataset(&input).expect("normalize");
    let range = summarize_date_range(&projects).expect("range");
    assert_eq!(Some(range.min_date), parse_timestamp("2023-12-01"));
    assert_eq!(Some(range.max_date), parse_timestamp("2024-03-20"));
}

proptest! {
    // Durations are plain day subtraction: building a legacy row from two
    // date offsets yields exactly those offsets back as durations.
    #[test]
    fn legacy_durations_match_day_offsets(prep in 1i64..200, exec in 1i64..200) {
        let base = parse_timestamp("2024-01-01").unwrap();
        let prep_end = base + chrono::Duration::days(prep);
        let exec_end = prep_end + chrono::Duration::days(exec);
        let prep_end_text = prep_end.format("%Y-%m-%d").to_string();
        let exec_end_text = exec_end.format("%Y-%m-%d").to_string();
        let row = vec![
            "P", "c", "p", "2024-01-01", &prep_end_text, &exec_end_text, "50", "", "t", "", "",
        ];
        let input = table(&LEGACY_HEADERS, vec![row]);
        let projects = normalize_dataset(&input).unwrap();
        prop_assert_eq!(projects[0].stages[0].duration_days, prep);
        prop_assert_eq!(projects[0].stages[1].duration_days, exec);
        prop_assert_eq!(projects[0].total_duration_days, prep + exec);
    }
}
