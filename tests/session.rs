use overplot::ingest::HeaderStrategy;
use overplot::session::{load_files, FileWarning};

fn files(items: &[(&str, &str)]) -> Vec<(String, Vec<u8>)> {
    items
        .iter()
        .map(|(name, csv)| (name.to_string(), csv.as_bytes().to_vec()))
        .collect()
}

const FIRST_ROW_HEADER: HeaderStrategy = HeaderStrategy::ExplicitRows {
    label_row: 0,
    data_start_row: 1,
};

#[test]
fn missing_time_column_drops_file_with_exactly_one_warning() {
    let batch = files(&[
        ("good.csv", "Time,V\n0,1\n"),
        ("no_time.csv", "Timestamp,V\n0,1\n"),
    ]);
    let outcome = load_files(&batch, FIRST_ROW_HEADER);
    assert_eq!(outcome.tables.len(), 1);
    assert_eq!(outcome.tables[0].source, "good.csv");
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].file(), "no_time.csv");
    assert!(matches!(
        outcome.warnings[0],
        FileWarning::MissingTimeColumn { .. }
    ));
}

#[test]
fn malformed_file_drops_only_that_file() {
    // Label row 1 exists in good.csv but lies beyond short.csv.
    let strategy = HeaderStrategy::ExplicitRows {
        label_row: 1,
        data_start_row: 2,
    };
    let batch = files(&[("short.csv", "Time,V\n"), ("good.csv", "x\nTime,V\n0,1\n")]);
    let outcome = load_files(&batch, strategy);
    assert_eq!(outcome.tables.len(), 1);
    assert_eq!(outcome.tables[0].source, "good.csv");
    assert_eq!(outcome.warnings.len(), 1);
    assert!(matches!(
        &outcome.warnings[0],
        FileWarning::Malformed { file, .. } if file == "short.csv"
    ));
}

#[test]
fn upload_order_is_preserved() {
    let batch = files(&[
        ("b.csv", "Time,V\n0,1\n"),
        ("a.csv", "Time,V\n0,2\n"),
        ("c.csv", "Time,V\n0,3\n"),
    ]);
    let outcome = load_files(&batch, FIRST_ROW_HEADER);
    let sources: Vec<&str> = outcome.tables.iter().map(|t| t.source.as_str()).collect();
    assert_eq!(sources, vec!["b.csv", "a.csv", "c.csv"]);
}

#[test]
fn empty_batch_yields_nothing() {
    let outcome = load_files(&[], FIRST_ROW_HEADER);
    assert!(outcome.tables.is_empty());
    assert!(outcome.warnings.is_empty());
}

#[test]
fn warning_text_names_the_file() {
    let batch = files(&[("no_time.csv", "Timestamp,V\n0,1\n")]);
    let outcome = load_files(&batch, FIRST_ROW_HEADER);
    let text = outcome.warnings[0].to_string();
    assert!(text.contains("no_time.csv"));
    assert!(text.contains("Time"));
}
