use std::fs;

use cardboard_config::{TraceRow, load_trace_csv};
use rstest::rstest;
use tempfile::tempdir;

const HEADER: &str = "now,dt,magnitude,touch_active,touch_moved,key_down,key_up";

#[rstest]
fn loads_rows_with_optional_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.csv");
    fs::write(
        &path,
        format!(
            "{HEADER}\n0.01,0.01,300.0,false,false,,\n0.02,0.01,301.5,true,true,,\n0.03,0.01,301.0,false,false,space,\n0.04,0.01,301.0,false,false,,space\n"
        ),
    )
    .unwrap();

    let rows = load_trace_csv(&path).unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(
        rows[1],
        TraceRow {
            now: 0.02,
            dt: 0.01,
            magnitude: 301.5,
            touch_active: true,
            touch_moved: true,
            key_down: None,
            key_up: None,
        }
    );
    assert_eq!(rows[2].key_down.as_deref(), Some("space"));
    assert_eq!(rows[3].key_up.as_deref(), Some("space"));
}

#[rstest]
fn rejects_bad_headers() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.csv");
    fs::write(&path, "time,dt,magnitude\n0.0,0.01,300.0\n").unwrap();

    let err = load_trace_csv(&path).unwrap_err();
    assert!(format!("{err}").contains("trace CSV must have headers"));
}

#[rstest]
#[case("0.01,-0.01,300.0,false,false,,", "dt must be >= 0")]
#[case("0.01,0.01,abc,false,false,,", "invalid CSV row 2")]
#[case("0.01,0.01,300.0,maybe,false,,", "invalid CSV row 2")]
fn rejects_bad_rows(#[case] row: &str, #[case] needle: &str) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.csv");
    fs::write(&path, format!("{HEADER}\n{row}\n")).unwrap();

    let err = load_trace_csv(&path).unwrap_err();
    assert!(format!("{err}").contains(needle), "got: {err}");
}

#[rstest]
fn rejects_time_going_backwards() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.csv");
    fs::write(
        &path,
        format!("{HEADER}\n0.02,0.01,300.0,false,false,,\n0.01,0.01,300.0,false,false,,\n"),
    )
    .unwrap();

    let err = load_trace_csv(&path).unwrap_err();
    assert!(format!("{err}").contains("time went backwards"));
}

#[rstest]
fn missing_file_is_reported() {
    let dir = tempdir().unwrap();
    let err = load_trace_csv(&dir.path().join("nope.csv")).unwrap_err();
    assert!(format!("{err}").contains("open trace CSV"));
}
