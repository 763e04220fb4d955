//! Integration tests for the command reports.

use trakx_cli::commands::{run_best_match, run_distance, run_select};
use trakx_cli::summary::{ReportFormat, candidates_table, render_select_report, statistics_table};
use trakx_match::SelectionOptions;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn test_distance_report() {
    let report = run_distance("hello", "heLlo");
    assert_eq!(report.distance, 0.5);
    assert_eq!(report.source, "hello");
    assert_eq!(report.target, "heLlo");
}

#[test]
fn test_best_match_report() {
    let candidates = strings(&["heLLo", "hewLLo", "heLlo", "heWLLo"]);

    let report = run_best_match("hello", &candidates, f64::INFINITY);

    assert_eq!(report.best_match.as_deref(), Some("heLlo"));
    assert_eq!(report.distance, Some(0.5));
}

#[test]
fn test_best_match_report_without_match() {
    let candidates = strings(&["hellllllo", "HELLO"]);

    let report = run_best_match("hello", &candidates, 1.0);

    assert_eq!(report.best_match, None);
    assert_eq!(report.distance, None);
}

#[test]
fn test_select_report_json() {
    let values = strings(&["10", "11", "9", "oops", "NaN"]);

    let report = run_select(&values, SelectionOptions::default()).unwrap();
    let json = render_select_report(&report, ReportFormat::Json).unwrap();

    insta::assert_snapshot!(json, @r#"
    {
      "values": [
        10.0,
        11.0,
        9.0
      ],
      "ignored": [
        "oops",
        "NaN"
      ],
      "max_standard_deviations": 0.2,
      "use_median": false,
      "selection": {
        "selection": 10.0,
        "mean": 10.0,
        "standard_deviation": 1.0,
        "median": 10.0
      }
    }
    "#);
}

#[test]
fn test_select_strict_failure() {
    let values = strings(&["1.3", "1.2", "1.0", "0.9", "0.8", "0.8", "1.2"]);
    let options = SelectionOptions::default()
        .with_max_standard_deviations(0.01)
        .with_throw_if_no_match(true);

    let error = run_select(&values, options).unwrap_err();

    assert_eq!(error.to_string(), "no selection among 7 value(s)");
    assert!(
        format!("{error:#}").contains("failed to find a valid value within 0.01 standard deviations")
    );
}

#[test]
fn test_select_lenient_fallback() {
    let values = strings(&["1.3", "1.2", "1.0", "0.9", "0.8", "0.8", "1.2"]);
    let options = SelectionOptions::default().with_max_standard_deviations(0.01);

    let report = run_select(&values, options).unwrap();

    assert_eq!(report.selection.selection, Some(1.0));
}

#[test]
fn test_select_without_usable_values() {
    let report = run_select(&strings(&["abc", "NaN"]), SelectionOptions::default()).unwrap();

    assert!(report.values.is_empty());
    assert!(report.selection.is_empty());
    assert!(report.selection.mean.is_nan());
}

#[test]
fn test_select_tables() {
    let values = strings(&["40", "10", "10", "10"]);
    let options = SelectionOptions::default().with_median(true);

    let report = run_select(&values, options).unwrap();
    assert_eq!(report.selection.selection, Some(10.0));

    let statistics = statistics_table(&report).to_string();
    assert!(statistics.contains("Selection"));
    assert!(statistics.contains("0.2 sd from median"));
    assert!(!statistics.contains("Ignored"));

    let candidates = candidates_table(&report).to_string();
    assert!(candidates.contains("30"));
    assert!(candidates.contains("yes"));
    assert!(candidates.contains("no"));

    let rendered = render_select_report(&report, ReportFormat::Table).unwrap();
    assert!(rendered.contains("Standard deviation"));
    assert!(rendered.contains("Deviation"));
}
