use kiln_shell_toolbox::stats::outlier::{detect, StatsError, MIN_SAMPLES};

#[test]
fn reference_batch_flags_only_the_spike() {
    // 정렬: [10,11,12,12,12,13,13,14,100] → Q1(인덱스 2.0)=12, Q3(인덱스 6.0)=13
    let values = [10.0, 12.0, 12.0, 13.0, 12.0, 11.0, 14.0, 13.0, 100.0];
    let report = detect(&values, 1.5).expect("n=9");
    assert_eq!(report.q1, 12.0);
    assert_eq!(report.q3, 13.0);
    assert_eq!(report.iqr, 1.0);
    assert_eq!(report.lower_bound, 10.5);
    assert_eq!(report.upper_bound, 14.5);
    let expected = [true, false, false, false, false, false, false, false, true];
    assert_eq!(report.is_outlier, expected);
}

#[test]
fn quartiles_interpolate_between_order_statistics() {
    // [1,2,3,4]: Q1 인덱스 0.75 → 1.75, Q3 인덱스 2.25 → 3.25
    let report = detect(&[1.0, 2.0, 3.0, 4.0], 1.5).unwrap();
    assert_eq!(report.q1, 1.75);
    assert_eq!(report.q3, 3.25);
    assert_eq!(report.iqr, 1.5);
}

#[test]
fn fewer_than_four_values_is_an_error() {
    let err = detect(&[10.0, 12.0, 11.0], 1.5).unwrap_err();
    assert_eq!(
        err,
        StatsError::InsufficientData {
            count: 3,
            min: MIN_SAMPLES
        }
    );
    assert!(detect(&[], 1.5).is_err());
    assert!(detect(&[1.0, 2.0, 3.0, 4.0], 1.5).is_ok());
}

#[test]
fn non_positive_fence_is_an_error() {
    assert_eq!(
        detect(&[1.0, 2.0, 3.0, 4.0], 0.0).unwrap_err(),
        StatsError::InvalidFence(0.0)
    );
    assert!(detect(&[1.0, 2.0, 3.0, 4.0], -1.5).is_err());
    assert!(detect(&[1.0, 2.0, 3.0, 4.0], f64::NAN).is_err());
}

#[test]
fn identical_values_yield_zero_iqr_and_no_outliers() {
    let report = detect(&[7.0; 6], 1.5).unwrap();
    assert_eq!(report.q1, 7.0);
    assert_eq!(report.q3, 7.0);
    assert_eq!(report.iqr, 0.0);
    assert_eq!(report.lower_bound, report.upper_bound);
    assert!(report.is_outlier.iter().all(|&o| !o));
}

#[test]
fn degenerate_cluster_flags_any_deviation() {
    // IQR=0이면 경계가 상수로 붕괴하고, 그 상수와 다른 값은 모두 이상치다.
    let report = detect(&[10.0, 10.0, 10.0, 10.0, 10.5], 1.5).unwrap();
    assert_eq!(report.iqr, 0.0);
    assert_eq!(report.is_outlier, [false, false, false, false, true]);
}

#[test]
fn value_on_the_bound_is_not_an_outlier_one_ulp_beyond_is() {
    // 경계값 자체는 엄격 부등호로 제외되고, 한 ULP만 넘어도 판정된다.
    let on_bound = [10.0, 10.0, 10.0, 10.0];
    let report = detect(&on_bound, 1.5).unwrap();
    assert_eq!(report.upper_bound, 10.0);
    assert!(report.is_outlier.iter().all(|&o| !o));

    let ulp_above = f64::from_bits(10.0f64.to_bits() + 1);
    let report = detect(&[10.0, 10.0, 10.0, 10.0, ulp_above], 1.5).unwrap();
    assert_eq!(report.is_outlier, [false, false, false, false, true]);

    // 하한 쪽도 대칭으로 동작한다: 한 ULP 아래면 판정된다.
    let ulp_below = f64::from_bits(10.0f64.to_bits() - 1);
    let report = detect(&[10.0, 10.0, 10.0, 10.0, ulp_below], 1.5).unwrap();
    assert_eq!(report.lower_bound, 10.0);
    assert_eq!(report.is_outlier, [false, false, false, false, true]);
}

#[test]
fn detect_is_idempotent() {
    let values = [10.0, 12.0, 12.0, 13.0, 12.0, 11.0, 14.0, 13.0, 100.0];
    let a = detect(&values, 1.5).unwrap();
    let b = detect(&values, 1.5).unwrap();
    assert_eq!(a, b);
}

#[test]
fn permutation_changes_flag_order_only() {
    let values = [10.0, 12.0, 12.0, 13.0, 12.0, 11.0, 14.0, 13.0, 100.0];
    let mut shuffled = values;
    shuffled.reverse();
    shuffled.swap(1, 5);

    let a = detect(&values, 1.5).unwrap();
    let b = detect(&shuffled, 1.5).unwrap();
    assert_eq!(a.q1, b.q1);
    assert_eq!(a.q3, b.q3);
    assert_eq!(a.iqr, b.iqr);
    assert_eq!(a.lower_bound, b.lower_bound);
    assert_eq!(a.upper_bound, b.upper_bound);

    let mut flagged_a: Vec<f64> = values
        .iter()
        .zip(&a.is_outlier)
        .filter(|(_, &o)| o)
        .map(|(&v, _)| v)
        .collect();
    let mut flagged_b: Vec<f64> = shuffled
        .iter()
        .zip(&b.is_outlier)
        .filter(|(_, &o)| o)
        .map(|(&v, _)| v)
        .collect();
    flagged_a.sort_by(|x, y| x.total_cmp(y));
    flagged_b.sort_by(|x, y| x.total_cmp(y));
    assert_eq!(flagged_a, flagged_b);
}

#[test]
fn bounds_bracket_the_quartiles() {
    let values = [3.2, -1.0, 8.5, 4.4, 4.6, 5.0, 7.7, 2.1, 9.9, 4.0];
    let report = detect(&values, 1.5).unwrap();
    assert!(report.lower_bound <= report.q1);
    assert!(report.q1 <= report.q3);
    assert!(report.q3 <= report.upper_bound);
    assert!(report.iqr >= 0.0);
}

#[test]
fn extreme_mode_uses_wider_fences() {
    // k=3.0은 별도 알고리즘이 아니라 같은 판정의 넓은 경계다.
    let values = [10.0, 11.0, 12.0, 12.0, 12.0, 13.0, 13.0, 14.0, 15.0];
    let normal = detect(&values, 1.5).unwrap();
    let extreme = detect(&values, 3.0).unwrap();
    assert!(normal.is_outlier.iter().any(|&o| o));
    assert!(extreme.is_outlier.iter().all(|&o| !o));
    assert!(extreme.lower_bound < normal.lower_bound);
    assert!(extreme.upper_bound > normal.upper_bound);
}
