//! Integration tests for the hypothesis-test pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end path every caller takes: raw samples through a
//!   test-family procedure to a `TestResult`, then across the mapping /
//!   JSON boundary and back.
//! - Check cross-family consistency on shared data rather than re-pinning
//!   each family's reference values.
//!
//! Coverage
//! --------
//! - `statistical_tests`: every family, driven through its public entry
//!   points with realistic small samples.
//! - `common::serialization`: key layout, JSON round trips and infinite
//!   interval bounds.
//! - Determinism of procedures called concurrently from several threads.
//!
//! Exclusions
//! ----------
//! - Reference values and error branches of each family; those are covered
//!   by the unit tests next to each module.
//! - Python bindings, which are exercised at the Python level.
use approx::assert_abs_diff_eq;
use ndarray::array;
use rust_hypotests::{
    common::{
        from_json, serialization::KEYS, to_json, to_mapping, Labeled, StatError, TailType,
        TestOptions, TestResult, VarianceAssumption,
    },
    statistical_tests::{
        anova, chi_square, mann_whitney, proportion, sample_size, t_test, z_test,
    },
};
use serde_json::Value;

const CONTROL: [f64; 8] = [12.1, 11.4, 13.0, 12.7, 11.9, 12.3, 12.8, 11.6];
const TREATED: [f64; 8] = [13.2, 12.9, 14.1, 13.5, 12.6, 13.8, 14.0, 13.1];
const PLACEBO: [f64; 8] = [12.0, 12.5, 11.8, 12.9, 12.2, 11.7, 12.6, 12.4];

/// Run one procedure of every family on the shared fixtures.
fn every_family() -> Vec<TestResult> {
    let groups = [CONTROL.to_vec(), TREATED.to_vec(), PLACEBO.to_vec()];
    vec![
        anova::one_way_anova(&groups, 0.05).unwrap(),
        t_test::one_sample(&CONTROL, 12.0, TailType::Two, 0.05).unwrap(),
        t_test::paired(&TREATED, &CONTROL, TailType::Right, 0.05).unwrap(),
        t_test::independent(&TREATED, &CONTROL, VarianceAssumption::Unpooled, TailType::Two, 0.05)
            .unwrap(),
        z_test::one_sample(&CONTROL, 12.0, 0.6, TailType::Left, 0.05).unwrap(),
        z_test::independent(&TREATED, &CONTROL, 0.6, 0.6, TailType::Two, 0.01).unwrap(),
        proportion::one_sample(42, 100, 0.5, TailType::Left, 0.05).unwrap(),
        proportion::two_sample(42, 100, 55, 110, VarianceAssumption::Pooled, TailType::Two, 0.05)
            .unwrap(),
        chi_square::goodness_of_fit(&[18.0, 22.0, 20.0], &[20.0, 20.0, 20.0], 0.05).unwrap(),
        chi_square::independence(array![[12.0, 18.0], [20.0, 10.0]].view(), 0.05).unwrap(),
        chi_square::variance(&CONTROL, 0.5, TailType::Two, 0.05).unwrap(),
        mann_whitney::u_test(&TREATED, &CONTROL, TailType::Two, 0.05).unwrap(),
    ]
}

#[test]
// Purpose
// -------
// Every family's result survives the JSON boundary unchanged.
//
// Expect
// ------
// - Six keys in the canonical order for every result.
// - `from_json(to_json(r)) == r`, including one-sided infinite bounds.
fn every_family_round_trips_through_json() {
    for result in every_family() {
        // Arrange
        let map = to_mapping(&result);
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();

        // Act
        let text = to_json(&result).unwrap();
        let back = from_json(&text).unwrap();

        // Assert
        assert_eq!(keys, KEYS);
        assert_eq!(back, result, "round trip changed {text}");
    }
}

#[test]
// Purpose
// -------
// One-sided location tests encode their open bound as JSON null.
fn one_sided_bounds_are_null_in_json() {
    // Arrange
    let left = z_test::one_sample(&CONTROL, 12.0, 0.6, TailType::Left, 0.05).unwrap();
    let right = t_test::paired(&TREATED, &CONTROL, TailType::Right, 0.05).unwrap();

    // Act
    let left_json: Value = serde_json::from_str(&to_json(&left).unwrap()).unwrap();
    let right_json: Value = serde_json::from_str(&to_json(&right).unwrap()).unwrap();

    // Assert
    assert_eq!(left_json["confidence_interval"][0], Value::Null);
    assert!(left_json["confidence_interval"][1].is_f64());
    assert!(right_json["confidence_interval"][0].is_f64());
    assert_eq!(right_json["confidence_interval"][1], Value::Null);
    let back = from_json(&to_json(&left).unwrap()).unwrap();
    assert_eq!(back.confidence_interval().0, f64::NEG_INFINITY);
}

#[test]
// Purpose
// -------
// The treatment effect in the fixtures is large; every location test that
// compares TREATED with CONTROL should agree on the direction.
fn location_families_agree_on_a_clear_effect() {
    let welch =
        t_test::independent(&TREATED, &CONTROL, VarianceAssumption::Unpooled, TailType::Right, 0.05)
            .unwrap();
    let pooled = t_test::independent_with(
        &TREATED,
        &CONTROL,
        &TestOptions::new(0.05)
            .unwrap()
            .with_tail(TailType::Right)
            .with_variance(VarianceAssumption::Pooled),
    )
    .unwrap();
    let z = z_test::independent(&TREATED, &CONTROL, 0.6, 0.6, TailType::Right, 0.05).unwrap();
    let u = mann_whitney::u_test(&TREATED, &CONTROL, TailType::Right, 0.05).unwrap();

    for r in [&welch, &pooled, &z, &u] {
        assert!(r.reject_null(), "{}: p = {}", r.alt_hypothesis(), r.p_value());
    }
    assert!(welch.test_statistic() > 0.0);
    assert_abs_diff_eq!(welch.test_statistic(), pooled.test_statistic(), epsilon = 1e-12);
    assert!(welch.confidence_interval().0 > 0.0);
}

#[test]
// Purpose
// -------
// Labels flow into error messages of the procedure that rejects them.
fn labeled_samples_name_the_offending_sample() {
    let bad = [1.0, f64::NAN, 3.0];
    let err = t_test::one_sample(&Labeled::new("dose 10mg", &bad), 0.0, TailType::Two, 0.05)
        .unwrap_err();

    assert!(matches!(err, StatError::NonFiniteData { .. }));
    assert!(err.to_string().contains("dose 10mg"), "{err}");
}

#[test]
// Purpose
// -------
// Planning and testing agree: a sample of the size the planner asks for,
// drawn exactly at the planned effect, is significant.
fn planned_sample_size_detects_planned_effect() {
    let n = sample_size::z_sample_size(0.5, 0.05, 0.8, 1.0, TailType::Two).unwrap() as usize;
    let data: Vec<f64> = (0..n).map(|i| 0.5 + if i % 2 == 0 { 1.0 } else { -1.0 }).collect();

    let r = z_test::one_sample(&data, 0.0, 1.0, TailType::Two, 0.05).unwrap();

    assert_eq!(n, 32);
    assert!(r.reject_null());
}

#[test]
// Purpose
// -------
// Procedures share no state: the same calls from several threads give
// results identical to a sequential run.
fn concurrent_runs_are_deterministic() {
    let sequential = every_family();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(every_family)).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), sequential);
        }
    });
}
