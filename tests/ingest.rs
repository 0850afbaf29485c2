use overplot::ingest::{ingest, HeaderStrategy, TaggedTable, SOURCE_COLUMN};

fn explicit(label_row: usize, data_start_row: usize) -> HeaderStrategy {
    HeaderStrategy::ExplicitRows {
        label_row,
        data_start_row,
    }
}

fn ingest_ok(name: &str, csv: &str, strategy: HeaderStrategy) -> TaggedTable {
    ingest(name, csv.as_bytes(), strategy).unwrap()
}

#[test]
fn explicit_rows_names_from_label_row_and_data_from_start_row() {
    // 5-row CSV: row 0 is a comment-ish banner, row 1 the labels, rows 2-4 data.
    let csv = "exported by device,\nTime,V\n0,1.0\n1,1.5\n2,2.0\n";
    let table = ingest_ok("a.csv", csv, explicit(1, 2));
    assert_eq!(table.columns, vec!["Time", "V", SOURCE_COLUMN]);
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[0], vec!["0", "1.0", "a.csv"]);
    assert_eq!(table.rows[2], vec!["2", "2.0", "a.csv"]);
}

#[test]
fn rows_between_label_and_data_start_are_dropped() {
    let csv = "Time,V\nunits,volts\n0,1\n1,2\n";
    let table = ingest_ok("a.csv", csv, explicit(0, 2));
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0][0], "0");
}

#[test]
fn data_start_at_or_before_label_row_is_accepted() {
    // No ordering is enforced between the two indices; the label row itself
    // then reappears as a data row.
    let csv = "Time,V\n0,1\n";
    let table = ingest_ok("a.csv", csv, explicit(0, 0));
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["Time", "V", "a.csv"]);
}

#[test]
fn skip_rows_consumes_next_row_as_header() {
    let csv = "junk\nmore junk\nTime,V\n0,1\n1,2\n";
    let table = ingest_ok("a.csv", csv, HeaderStrategy::SkipRows { count: 2 });
    assert_eq!(table.columns, vec!["Time", "V", SOURCE_COLUMN]);
    assert_eq!(table.rows.len(), 2);
}

#[test]
fn skip_rows_equals_explicit_rows_at_same_offset() {
    let csv = "banner\nTime,V\n0,1\n1,2\n";
    let skipped = ingest_ok("a.csv", csv, HeaderStrategy::SkipRows { count: 1 });
    let explicit = ingest_ok("a.csv", csv, explicit(1, 2));
    assert_eq!(skipped, explicit);
}

#[test]
fn label_row_beyond_file_is_malformed() {
    let csv = "Time,V\n0,1\n";
    let err = ingest("short.csv", csv.as_bytes(), explicit(5, 6)).unwrap_err();
    assert_eq!(err.file(), "short.csv");
}

#[test]
fn data_start_beyond_file_is_malformed() {
    let csv = "Time,V\n0,1\n";
    let err = ingest("short.csv", csv.as_bytes(), explicit(0, 3)).unwrap_err();
    assert_eq!(err.file(), "short.csv");
}

#[test]
fn data_start_at_row_count_gives_empty_table() {
    let csv = "Time,V\n0,1\n";
    let table = ingest_ok("a.csv", csv, explicit(0, 2));
    assert!(table.rows.is_empty());
    assert_eq!(table.columns, vec!["Time", "V", SOURCE_COLUMN]);
    assert_eq!(table.source, "a.csv");
}

#[test]
fn empty_file_is_malformed() {
    assert!(ingest("empty.csv", b"", HeaderStrategy::SkipRows { count: 0 }).is_err());
}

#[test]
fn source_tag_is_appended_to_every_row() {
    let csv = "Time,V\n0,1\n1,2\n2,3\n";
    let table = ingest_ok("measurements.csv", csv, explicit(0, 1));
    assert!(table.rows.iter().all(|r| r.last().unwrap() == "measurements.csv"));
    let tags: Vec<&str> = table.column(SOURCE_COLUMN).unwrap().collect();
    assert_eq!(tags, vec!["measurements.csv"; 3]);
}

#[test]
fn ragged_rows_are_padded_and_truncated_to_header_width() {
    let csv = "Time,V,I\n0,1\n1,2,3,4\n";
    let table = ingest_ok("a.csv", csv, explicit(0, 1));
    assert_eq!(table.rows[0], vec!["0", "1", "", "a.csv"]);
    assert_eq!(table.rows[1], vec!["1", "2", "3", "a.csv"]);
}

#[test]
fn quoted_cells_and_whitespace_follow_csv_rules() {
    let csv = "Time,\"V, filtered\"\n 0 ,\"1.5\"\n";
    let table = ingest_ok("a.csv", csv, explicit(0, 1));
    assert_eq!(table.columns[1], "V, filtered");
    assert_eq!(table.rows[0][0], "0");
    assert_eq!(table.rows[0][1], "1.5");
}

#[test]
fn column_lookup_uses_first_occurrence_of_duplicate_names() {
    let csv = "Time,V,V\n0,first,second\n";
    let table = ingest_ok("a.csv", csv, explicit(0, 1));
    let cells: Vec<&str> = table.column("V").unwrap().collect();
    assert_eq!(cells, vec!["first"]);
}
