use hr_dashboard::algorithm::{GenderDistribution, HrStatistics};
use hr_dashboard::load_hr_table;

use crate::utils::{ten_employee_csv, write_csv};

#[test]
fn test_ten_employee_kpis() {
    let (_dir, path) = write_csv(&ten_employee_csv(), "HR Data.csv");
    let kpis = HrStatistics::calculate(&load_hr_table(&path)).unwrap();

    assert_eq!(kpis.headcount, 10);
    assert_eq!(kpis.attrition_count, 3);
    assert!((kpis.female_ratio_pct - 60.0).abs() < 1e-9);
    assert!((kpis.mean_age - 44.7).abs() < 1e-9);
    assert_eq!(kpis.headcount_display(), "10명");
    assert_eq!(kpis.female_ratio_display(), "60.0%");
    assert_eq!(kpis.mean_age_display(), "44.7세");
}

#[test]
fn test_kpi_bounds_hold() {
    let csv = "나이,퇴직여부,성별\n22,Yes,Male\n33,Yes,Male\n44,No,Other\n,No,\n";
    let (_dir, path) = write_csv(csv, "HR Data.csv");
    let kpis = HrStatistics::calculate(&load_hr_table(&path)).unwrap();

    assert!(kpis.attrition_count <= kpis.headcount);
    assert!((0.0..=100.0).contains(&kpis.female_ratio_pct));
    assert!((kpis.mean_age - 33.0).abs() < 1e-9);
}

#[test]
fn test_female_ratio_uses_headcount_as_denominator() {
    let csv = "나이,퇴직여부,성별\n30,No,Female\n31,No,\n32,No,Male\n33,No,Female\n";
    let (_dir, path) = write_csv(csv, "HR Data.csv");
    let ratio = HrStatistics::female_ratio_pct(&load_hr_table(&path)).unwrap();
    assert!((ratio - 50.0).abs() < 1e-9);
}

#[test]
fn test_gender_distribution_from_table() {
    let (_dir, path) = write_csv(&ten_employee_csv(), "HR Data.csv");
    let dist = GenderDistribution::from_table(&load_hr_table(&path)).unwrap();

    let labels: Vec<&str> = dist.slices.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Female", "Male"]);
    let sum: f64 = dist.slices.iter().map(|s| s.percentage).sum();
    assert!((sum - 100.0).abs() < 1e-6);
}

#[test]
fn test_gender_ties_keep_first_seen_order() {
    let csv = "나이,퇴직여부,성별\n30,No,Male\n31,No,Female\n32,No,Female\n33,No,Male\n";
    let (_dir, path) = write_csv(csv, "HR Data.csv");
    let dist = GenderDistribution::from_table(&load_hr_table(&path)).unwrap();

    let labels: Vec<&str> = dist.slices.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Male", "Female"]);
}
