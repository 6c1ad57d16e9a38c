use std::sync::Arc;

use hr_dashboard::TableCache;

use crate::utils::{missing_path, ten_employee_csv, write_csv};

#[test]
fn test_repeated_loads_share_one_table() {
    let (_dir, path) = write_csv(&ten_employee_csv(), "HR Data.csv");
    let cache = TableCache::new(2);

    let first = cache.load(&path);
    let second = cache.load(&path);

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.misses(), 1);
    assert_eq!(cache.hits(), 1);
}

#[test]
fn test_relative_and_absolute_paths_share_an_entry() {
    let (dir, path) = write_csv(&ten_employee_csv(), "HR Data.csv");
    let cache = TableCache::new(2);

    cache.load(&path);
    cache.load(&dir.path().join(".").join("HR Data.csv"));

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.hits(), 1);
}

#[test]
fn test_missing_file_is_retried() {
    let dir = tempfile::tempdir().unwrap();
    let cache = TableCache::new(2);
    let path = missing_path(dir.path());

    assert!(cache.load(&path).is_empty());
    std::fs::write(&path, ten_employee_csv()).unwrap();
    assert_eq!(cache.load(&path).num_rows(), 10);
}

#[test]
fn test_clear_forces_reload() {
    let (_dir, path) = write_csv(&ten_employee_csv(), "HR Data.csv");
    let cache = TableCache::new(2);

    cache.load(&path);
    cache.clear();
    assert!(cache.is_empty());
    cache.load(&path);
    assert_eq!(cache.misses(), 2);
}
