// File: crates/demo/tests/cli.rs
// Purpose: Demo argument parsing, CSV timestamp units and the hover/leave session.

use linegraph_core::{GraphOptions, HoverState, LeaveBehavior, LineGraph};
use linegraph_demo::{load_series_csv, parse_args, simulate_pointer, synthetic_series, Args, TimeUnit};
use std::path::PathBuf;

fn args(list: &[&str]) -> anyhow::Result<Args> {
    parse_args(list.iter().map(|s| s.to_string()))
}

fn write_csv(name: &str, body: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir).expect("create test dir");
    let path = dir.join(name);
    std::fs::write(&path, body).expect("write csv");
    path
}

#[test]
fn parses_flags_and_path() {
    let a = args(&[
        "data.csv", "--hover", "150", "--leave", "--clear-on-leave", "--width", "600", "--theme", "dark",
        "--timestamp-unit", "s",
    ])
    .unwrap();
    assert_eq!(a.csv_path, Some(PathBuf::from("data.csv")));
    assert_eq!(a.hover, Some(150.0));
    assert!(a.leave && a.clear_on_leave);
    assert_eq!((a.width, a.height), (Some(600.0), None));
    assert_eq!(a.theme.as_deref(), Some("dark"));
    assert_eq!(a.time_unit, TimeUnit::Seconds);

    assert_eq!(args(&[]).unwrap(), Args::default());
    assert!(args(&["--hover"]).is_err());
    assert!(args(&["--hover", "abc"]).is_err());
    assert!(args(&["--bogus"]).is_err());
    assert!(args(&["--timestamp-unit", "min"]).is_err());
    assert!(args(&["a.csv", "b.csv"]).is_err());
}

#[test]
fn leave_after_hover_follows_leave_behavior() {
    let series = synthetic_series().unwrap();
    let mut g = LineGraph::new("demo", series.clone());
    let state = simulate_pointer(&mut g, Some(150.0), true);
    assert!(state.is_hovering(), "default leave keeps the last hover");

    let options = GraphOptions { leave: LeaveBehavior::Clear, ..GraphOptions::default() };
    let mut g = LineGraph::new("demo", series).with_options(options);
    assert!(simulate_pointer(&mut g, Some(150.0), false).is_hovering());
    assert_eq!(simulate_pointer(&mut g, None, true), HoverState::Idle);
}

#[test]
fn small_millisecond_timestamps_are_kept_as_is() {
    let path = write_csv("ms.csv", "x,y,timestamp\n0,10,0\n1,20,1000\n2,5,2000\n");
    let pts = load_series_csv(&path, TimeUnit::Millis).unwrap();
    let ts: Vec<i64> = pts.iter().map(|p| p.timestamp_ms).collect();
    assert_eq!(ts, vec![0, 1000, 2000]);
}

#[test]
fn seconds_unit_scales_and_timestamp_ms_header_wins() {
    let path = write_csv("secs.csv", "X,Y,Time\n0,1,1700000000\n1,2,1700000000.5\n");
    let pts = load_series_csv(&path, TimeUnit::Seconds).unwrap();
    assert_eq!(pts[0].timestamp_ms, 1_700_000_000_000);
    assert_eq!(pts[1].timestamp_ms, 1_700_000_000_500);

    let path = write_csv("ms_header.csv", "x,y,timestamp_ms\n0,1,1500\n");
    let pts = load_series_csv(&path, TimeUnit::Seconds).unwrap();
    assert_eq!(pts[0].timestamp_ms, 1500);
}

#[test]
fn unparseable_rows_are_skipped() {
    let path = write_csv("bad_rows.csv", "x,y,timestamp\n0,1,10\n1,oops,20\n2,3,later\n3,4,40\n");
    let pts = load_series_csv(&path, TimeUnit::Millis).unwrap();
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 3.0]);
}
