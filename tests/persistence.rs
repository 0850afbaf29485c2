use overplot::ingest::HeaderStrategy;
use overplot::persistence::{load_settings, save_settings, SessionSettings};

#[test]
fn settings_survive_a_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let settings = SessionSettings {
        strategy: HeaderStrategy::ExplicitRows {
            label_row: 3,
            data_start_row: 7,
        },
        primary_columns: vec!["Voltage".into(), "Current".into()],
        secondary_columns: vec!["Power".into()],
    };
    save_settings(&path, &settings).unwrap();
    assert_eq!(load_settings(&path).unwrap(), settings);
}

#[test]
fn skip_rows_strategy_round_trips_too() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let settings = SessionSettings {
        strategy: HeaderStrategy::SkipRows { count: 4 },
        ..Default::default()
    };
    save_settings(&path, &settings).unwrap();
    assert_eq!(load_settings(&path).unwrap(), settings);
}

#[test]
fn loading_garbage_is_an_error_not_a_panic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(load_settings(&path).is_err());
}
