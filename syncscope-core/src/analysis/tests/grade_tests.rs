use crate::analysis::PerformanceGrade;
use crate::conf::GradeThresholds;
use pretty_assertions::assert_eq;

#[test]
fn tiers_are_evaluated_best_first() {
    let t = GradeThresholds::default();

    assert_eq!(PerformanceGrade::classify(0.0, 0.0, &t), PerformanceGrade::Excellent);
    assert_eq!(PerformanceGrade::classify(500.0, 50.0, &t), PerformanceGrade::Excellent);
    assert_eq!(PerformanceGrade::classify(501.0, 0.0, &t), PerformanceGrade::Good);
    assert_eq!(PerformanceGrade::classify(100.0, 150.0, &t), PerformanceGrade::Fair);
    assert_eq!(PerformanceGrade::classify(2000.0, 200.0, &t), PerformanceGrade::Fair);
    assert_eq!(PerformanceGrade::classify(2000.1, 0.0, &t), PerformanceGrade::Poor);
}

#[test]
fn drift_is_compared_by_magnitude() {
    let t = GradeThresholds::default();

    assert_eq!(PerformanceGrade::classify(10.0, -40.0, &t), PerformanceGrade::Excellent);
    assert_eq!(PerformanceGrade::classify(10.0, -250.0, &t), PerformanceGrade::Poor);
}

#[test]
fn excellent_inputs_never_grade_worse() {
    let t = GradeThresholds::default();

    for jitter in [0.0, 100.0, 250.0, 499.9, 500.0] {
        for drift in [-50.0, -10.0, 0.0, 25.0, 50.0] {
            assert_eq!(
                PerformanceGrade::classify(jitter, drift, &t),
                PerformanceGrade::Excellent
            );
        }
    }
}

#[test]
fn grades_are_ordered_best_to_worst() {
    assert!(PerformanceGrade::Excellent < PerformanceGrade::Good);
    assert!(PerformanceGrade::Good < PerformanceGrade::Fair);
    assert!(PerformanceGrade::Fair < PerformanceGrade::Poor);
    assert_eq!(PerformanceGrade::Fair.to_string(), "Fair");
}
