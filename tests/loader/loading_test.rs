use std::fs;

use hr_dashboard::schema::{EMPLOYEE_COUNT, IS_ADULT, RETIRED_FLAG};
use hr_dashboard::{load_hr_table, read_hr_csv, DashboardError};

use crate::utils::{missing_path, ten_employee_csv, write_csv};

#[test]
fn test_load_adds_flag_and_drops_constant_columns() {
    let (_dir, path) = write_csv(&ten_employee_csv(), "HR Data.csv");
    let table = load_hr_table(&path);

    assert_eq!(table.num_rows(), 10);
    assert!(table.has_column(RETIRED_FLAG));
    assert!(!table.has_column(EMPLOYEE_COUNT));
    assert!(!table.has_column(IS_ADULT));

    let flags = table.retired_flags().unwrap();
    assert_eq!(flags.iter().flatten().sum::<f64>(), 3.0);
}

#[test]
fn test_loading_twice_gives_identical_tables() {
    let (_dir, path) = write_csv(&ten_employee_csv(), "HR Data.csv");
    let first = load_hr_table(&path);
    let second = load_hr_table(&path);

    assert_eq!(first, second);
    for table in [&first, &second] {
        assert!(!table.has_column(EMPLOYEE_COUNT));
        assert!(!table.has_column(IS_ADULT));
    }
}

#[test]
fn test_missing_file_is_an_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let table = load_hr_table(&missing_path(dir.path()));
    assert!(table.is_empty());
}

#[test]
fn test_invalid_utf8_is_an_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.csv");
    fs::write(&path, b"\xb3\xaa\xc0\xcc,x\n1,2\n").unwrap();

    assert!(matches!(read_hr_csv(&path), Err(DashboardError::Encoding { .. })));
    assert!(load_hr_table(&path).is_empty());
}

#[test]
fn test_missing_required_column_is_an_empty_table() {
    let (_dir, path) = write_csv("나이,성별\n30,Male\n", "HR Data.csv");

    assert!(matches!(
        read_hr_csv(&path),
        Err(DashboardError::ColumnNotFound { .. })
    ));
    assert!(load_hr_table(&path).is_empty());
}

#[test]
fn test_header_only_file_is_empty() {
    let (_dir, path) = write_csv("나이,퇴직여부,성별\n", "HR Data.csv");
    assert!(load_hr_table(&path).is_empty());
}

#[test]
fn test_ragged_rows_are_an_empty_table() {
    let (_dir, path) = write_csv("나이,퇴직여부,성별\n30,No\n31,Yes,Male,extra\n", "HR Data.csv");
    assert!(load_hr_table(&path).is_empty());
}
