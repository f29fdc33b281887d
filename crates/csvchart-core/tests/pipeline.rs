// File: crates/csvchart-core/tests/pipeline.rs
// Purpose: End-to-end pipeline behavior on small Oura-style exports.

use csvchart_core::{
    align, build_chart, default_title, extract_numbers, extract_strings, resolve, Alignment,
    ChartKind, ChartRequest, PipelineError, Stage, Table,
};

const SLEEP: &str = "date,sleep_score,steps\n2024-01-01,85,8500\n2024-01-02,78,7200\n2024-01-03,92,9100";

fn table(src: &str) -> Table {
    Table::from_bytes(src.as_bytes()).expect("parse")
}

#[test]
fn headers_and_rows_keep_file_order() {
    let t = table(SLEEP);
    assert_eq!(t.headers(), ["date", "sleep_score", "steps"]);
    assert_eq!(t.row_count(), 3);
    assert_eq!(t.rows()[2], vec!["2024-01-03", "92", "9100"]);
}

#[test]
fn extracts_numbers_and_strings() {
    let t = table(SLEEP);
    assert_eq!(extract_numbers(&t, "sleep_score").unwrap(), vec![85.0, 78.0, 92.0]);
    assert_eq!(
        extract_strings(&t, "date").unwrap(),
        vec!["2024-01-01", "2024-01-02", "2024-01-03"]
    );
}

#[test]
fn malformed_number_row_is_dropped() {
    let src = format!("{SLEEP}\n2024-01-04,notanumber,9999");
    let t = table(&src);
    let scores = extract_numbers(&t, "sleep_score").unwrap();
    assert_eq!(scores, vec![85.0, 78.0, 92.0]);
    // the string column still sees all four rows
    assert_eq!(extract_strings(&t, "date").unwrap().len(), 4);
}

#[test]
fn cells_are_trimmed() {
    let t = table("date , score\n  2024-01-01 ,  85 \n");
    assert_eq!(extract_strings(&t, "date ").unwrap(), vec!["2024-01-01"]);
    assert_eq!(extract_numbers(&t, " score").unwrap(), vec![85.0]);
}

#[test]
fn short_rows_are_skipped() {
    let t = table("date,score,steps\n2024-01-01,85,100\n2024-01-02\n2024-01-03,90\n");
    assert_eq!(extract_strings(&t, "date").unwrap().len(), 3);
    assert_eq!(extract_numbers(&t, "score").unwrap(), vec![85.0, 90.0]);
    assert_eq!(extract_numbers(&t, "steps").unwrap(), vec![100.0]);
}

#[test]
fn empty_input_fails_at_parse_stage() {
    let err = Table::from_bytes(b"").unwrap_err();
    assert!(matches!(err, PipelineError::EmptyInput));
    assert_eq!(err.stage(), Stage::Parse);
}

#[test]
fn unbalanced_quote_fails_at_parse_stage() {
    let req = ChartRequest::new(ChartKind::Line, "date", "score");
    let err = build_chart(b"date,score\n\"2024-01-01,85\n2024-01-02,78\n", &req).unwrap_err();
    assert!(matches!(err, PipelineError::MalformedInput { .. }));
    assert_eq!(err.stage(), Stage::Parse);
}

#[test]
fn stray_bytes_in_unused_column_still_chart() {
    let req = ChartRequest::new(ChartKind::Bar, "date", "score");
    let chart = build_chart(b"date,score,note\n2024-01-01,85,\xFF\n2024-01-02,78,ok\n", &req).unwrap();
    assert_eq!(chart.values().collect::<Vec<_>>(), vec![85.0, 78.0]);
}

#[test]
fn header_only_has_nothing_to_plot() {
    let t = table("date,sleep_score\n");
    let cats = extract_strings(&t, "date").unwrap();
    let vals = extract_numbers(&t, "sleep_score").unwrap();
    assert!(cats.is_empty() && vals.is_empty());
    let err = align(cats, vals).unwrap_err();
    assert!(matches!(err, PipelineError::EmptyResult));
    assert_eq!(err.stage(), Stage::Chart);
}

#[test]
fn column_names_are_case_insensitive() {
    let t = table(SLEEP);
    let want = resolve(t.headers(), "date").unwrap();
    for name in ["Date", "DATE", "dAtE"] {
        assert_eq!(resolve(t.headers(), name).unwrap(), want);
    }
    assert_eq!(
        extract_numbers(&t, "Sleep_Score").unwrap(),
        extract_numbers(&t, "sleep_score").unwrap()
    );
}

#[test]
fn unknown_column_is_reported_by_name() {
    let t = table(SLEEP);
    match extract_numbers(&t, "bogus") {
        Err(PipelineError::ColumnNotFound { column }) => assert_eq!(column, "bogus"),
        other => panic!("expected ColumnNotFound, got {other:?}"),
    }
    let err = build_chart(SLEEP.as_bytes(), &ChartRequest::new(ChartKind::Line, "bogus", "steps")).unwrap_err();
    assert_eq!(err.to_string(), "column 'bogus' not found");
}

#[test]
fn builds_line_chart() {
    let req = ChartRequest::new(ChartKind::Line, "date", "sleep_score").with_title("Sleep");
    let chart = build_chart(SLEEP.as_bytes(), &req).unwrap();
    assert_eq!(chart.kind, ChartKind::Line);
    assert_eq!(chart.title, "Sleep");
    assert_eq!(chart.category_axis.label, "date");
    assert_eq!(chart.value_axis.label, "sleep_score");
    assert_eq!(chart.series_name, "sleep_score");
    assert_eq!(chart.categories().collect::<Vec<_>>(), ["2024-01-01", "2024-01-02", "2024-01-03"]);
    assert_eq!(chart.values().collect::<Vec<_>>(), [85.0, 78.0, 92.0]);
}

#[test]
fn labels_use_the_requested_spelling() {
    let req = ChartRequest::new(ChartKind::Bar, "DATE", "Steps").with_title(default_title("Steps", "DATE"));
    let chart = build_chart(SLEEP.as_bytes(), &req).unwrap();
    assert_eq!(chart.title, "Steps vs DATE");
    assert_eq!(chart.series_name, "Steps");
    assert_eq!(chart.len(), 3);
}

#[test]
fn pipeline_is_deterministic() {
    let req = ChartRequest::new(ChartKind::Bar, "date", "steps");
    let a = build_chart(SLEEP.as_bytes(), &req).unwrap();
    let b = build_chart(SLEEP.as_bytes(), &req).unwrap();
    assert_eq!(a, b);
}

// A blank score on the first row: independent filtering shifts the scores
// one row up, row-synchronized extraction keeps them with their dates.
const GAPPED: &str = "date,score\n2024-01-01,\n2024-01-02,80\n2024-01-03,90\n";

#[test]
fn truncate_alignment_pairs_by_position() {
    let req = ChartRequest::new(ChartKind::Line, "date", "score").with_alignment(Alignment::Truncate);
    let chart = build_chart(GAPPED.as_bytes(), &req).unwrap();
    let pairs: Vec<_> = chart.points.iter().map(|p| (p.category.as_str(), p.value)).collect();
    assert_eq!(pairs, [("2024-01-01", 80.0), ("2024-01-02", 90.0)]);
}

#[test]
fn row_synchronized_alignment_keeps_rows_together() {
    let req = ChartRequest::new(ChartKind::Line, "date", "score");
    assert_eq!(req.alignment, Alignment::RowSynchronized);
    let chart = build_chart(GAPPED.as_bytes(), &req).unwrap();
    let pairs: Vec<_> = chart.points.iter().map(|p| (p.category.as_str(), p.value)).collect();
    assert_eq!(pairs, [("2024-01-02", 80.0), ("2024-01-03", 90.0)]);
}

#[test]
fn all_values_unusable_is_empty_result() {
    let src = "date,score\n2024-01-01,N/A\n2024-01-02,\n";
    for alignment in [Alignment::RowSynchronized, Alignment::Truncate] {
        let req = ChartRequest::new(ChartKind::Bar, "date", "score").with_alignment(alignment);
        assert!(matches!(build_chart(src.as_bytes(), &req), Err(PipelineError::EmptyResult)));
    }
}

#[test]
fn chart_kind_tokens_are_exact() {
    assert_eq!("line".parse::<ChartKind>().unwrap(), ChartKind::Line);
    assert_eq!("bar".parse::<ChartKind>().unwrap(), ChartKind::Bar);
    assert!("Line".parse::<ChartKind>().is_err());
    assert!("pie".parse::<ChartKind>().is_err());
}
