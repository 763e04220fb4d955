use serde::Serialize;
use trakx_match::{
    Selection, SelectionError, SelectionOptions, mean_standard_deviation,
    select_least_deviated_from_mean, select_least_deviated_from_median,
    select_with_deviation_threshold,
};

const DISTRIBUTION: [f64; 7] = [1.3, 1.2, 1.0, 0.9, 0.8, 0.8, 1.2];

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

fn select(values: &[f64], options: SelectionOptions) -> trakx_match::Result<Selection<f64>> {
    select_with_deviation_threshold(values, |v| Some(*v), options)
}

#[test]
fn chooses_first_value_if_not_too_deviant() {
    let options = SelectionOptions::default().with_max_standard_deviations(3.0);
    let result = select(&DISTRIBUTION, options).unwrap();

    assert_eq!(result.selection, Some(1.3));
    assert!(close(result.mean, 1.028_571_428_571_428_5));
    assert!(close(result.standard_deviation, 0.205_866_345_916_355_14));
    assert_eq!(result.median, 1.0);
}

#[test]
fn skips_preferences_that_are_too_deviant() {
    let (mean, standard_deviation) = mean_standard_deviation(&DISTRIBUTION);
    let max_standard_deviations = 0.5;
    assert!((DISTRIBUTION[0] - mean).abs() >= standard_deviation * max_standard_deviations);
    assert!((DISTRIBUTION[1] - mean).abs() >= standard_deviation * max_standard_deviations);

    let options = SelectionOptions::default().with_max_standard_deviations(max_standard_deviations);
    let result = select(&DISTRIBUTION, options).unwrap();

    assert_eq!(result.selection, Some(1.0));
}

#[test]
fn fails_when_no_value_matches_in_strict_mode() {
    let options = SelectionOptions::default()
        .with_max_standard_deviations(0.01)
        .with_throw_if_no_match(true);

    let error = select(&DISTRIBUTION, options).unwrap_err();

    let SelectionError::NoMatchWithinDeviationThreshold {
        mean,
        standard_deviation,
        median,
        max_standard_deviations,
    } = error;
    assert!(close(mean, 1.028_571_428_571_428_5));
    assert!(close(standard_deviation, 0.205_866_345_916_355_14));
    assert_eq!(median, 1.0);
    assert_eq!(max_standard_deviations, 0.01);
}

#[test]
fn falls_back_to_least_deviated_when_lenient() {
    let options = SelectionOptions::default().with_max_standard_deviations(0.01);
    let result = select(&DISTRIBUTION, options).unwrap();

    // 1.0 is the closest value to the mean.
    assert_eq!(result.selection, Some(1.0));
}

#[test]
fn empty_input_never_fails() {
    for throw_if_no_match in [false, true] {
        let options = SelectionOptions::default().with_throw_if_no_match(throw_if_no_match);
        let result = select(&[], options).unwrap();
        assert!(result.is_empty());
        assert!(result.mean.is_nan());
        assert!(result.standard_deviation.is_nan());
        assert!(result.median.is_nan());
    }
}

#[test]
fn unusable_values_are_filtered_before_statistics() {
    let values = [Some(f64::NAN), None, Some(0.245), None];
    let options = SelectionOptions::default().with_throw_if_no_match(true);

    let result = select_with_deviation_threshold(&values, |v| *v, options).unwrap();

    assert_eq!(result.selection, Some(Some(0.245)));
    assert_eq!(result.mean, 0.245);
    assert_eq!(result.median, 0.245);
    assert_eq!(result.standard_deviation, 0.0);
}

#[test]
fn only_unusable_values_select_nothing() {
    let values = [f64::NAN, f64::NAN];
    let result = select(&values, SelectionOptions::default()).unwrap();
    assert!(result.is_empty());
    assert!(result.mean.is_nan());
}

#[test]
fn huge_finite_values_keep_finite_statistics() {
    let result = select(&[1e308; 3], SelectionOptions::default()).unwrap();

    assert_eq!(result.selection, Some(1e308));
    assert_eq!(result.mean, 1e308);
    assert_eq!(result.median, 1e308);
    assert_eq!(result.standard_deviation, 0.0);
}

#[test]
fn least_deviated_from_mean_prefers_earliest_on_ties() {
    // mean is 2.0, both 1.0 and 3.0 are one away.
    let values = [3.0, 1.0, 2.5, 1.5];
    let result = select_least_deviated_from_mean(&[1.0, 3.0], |v: &f64| Some(*v));
    assert_eq!(result.selection, Some(1.0));

    let result = select_least_deviated_from_mean(&values, |v| Some(*v));
    assert_eq!(result.selection, Some(2.5));
}

#[test]
fn least_deviated_from_median_uses_lower_median() {
    // Sorted: 1, 2, 10, 11. Lower median is 2, mean is 6.
    let values = [10.0, 1.0, 11.0, 2.0];

    let from_median = select_least_deviated_from_median(&values, |v| Some(*v));
    assert_eq!(from_median.median, 2.0);
    assert_eq!(from_median.selection, Some(2.0));

    let from_mean = select_least_deviated_from_mean(&values, |v| Some(*v));
    assert_eq!(from_mean.mean, 6.0);
    assert_eq!(from_mean.selection, Some(10.0));
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Quote {
    provider: &'static str,
    price: f64,
}

fn quotes() -> Vec<Quote> {
    vec![
        Quote {
            provider: "rogue",
            price: 40.0,
        },
        Quote {
            provider: "kaiko",
            price: 10.0,
        },
        Quote {
            provider: "coingecko",
            price: 10.0,
        },
        Quote {
            provider: "messari",
            price: 10.0,
        },
    ]
}

#[test]
fn median_center_resists_outlier() {
    let quotes = quotes();
    let options = SelectionOptions::default().with_median(true);

    let result = select_with_deviation_threshold(&quotes, |q| Some(q.price), options).unwrap();

    insta::assert_snapshot!(serde_json::to_string_pretty(&result).unwrap(), @r#"
    {
      "selection": {
        "provider": "kaiko",
        "price": 10.0
      },
      "mean": 17.5,
      "standard_deviation": 15.0,
      "median": 10.0
    }
    "#);
}

#[test]
fn mean_center_with_outlier_falls_back() {
    let quotes = quotes();

    let strict = SelectionOptions::default().with_throw_if_no_match(true);
    let error = select_with_deviation_threshold(&quotes, |q| Some(q.price), strict).unwrap_err();
    assert_eq!(
        error.to_string(),
        "failed to find a valid value within 0.2 standard deviations of the center, \
         with mean 17.5, median 10 and standard deviation 15"
    );

    let lenient = SelectionOptions::default();
    let result = select_with_deviation_threshold(&quotes, |q| Some(q.price), lenient).unwrap();
    assert_eq!(result.selection.map(|q| q.provider), Some("kaiko"));
}
