use hr_dashboard::algorithm::{CrossTab, OvertimeSlice, OvertimeView};
use hr_dashboard::load_hr_table;

use crate::utils::{ten_employee_csv, write_csv};

#[test]
fn test_numeric_overtime_levels_select_second_by_value() {
    let csv = "나이,퇴직여부,성별,결혼여부,야근정도\n\
               30,No,Male,10,5\n\
               31,No,Female,9,10\n\
               32,Yes,Male,9,20\n\
               33,No,Female,10,5\n";
    let (_dir, path) = write_csv(csv, "HR Data.csv");
    let table = load_hr_table(&path);

    let crosstab = CrossTab::from_table(&table).unwrap();
    assert_eq!(crosstab.columns, vec!["5", "10", "20"]);
    assert_eq!(crosstab.marital_statuses, vec!["9", "10"]);

    let slice = OvertimeSlice::from_crosstab(&crosstab).unwrap();
    assert_eq!(slice.level, "10");
    assert_eq!(slice.marital_statuses, vec!["9", "10"]);
    assert_eq!(slice.percentage("9", "Female"), Some(100.0));
    assert_eq!(slice.percentage("10", "Female"), Some(0.0));
}

#[test]
fn test_text_levels_keep_label_order() {
    let (_dir, path) = write_csv(&ten_employee_csv(), "HR Data.csv");
    let OvertimeView::Chart(slice) = OvertimeView::from_table(&load_hr_table(&path)).unwrap() else {
        panic!("expected an overtime chart");
    };

    assert_eq!(slice.level, "Yes");
    assert_eq!(slice.marital_statuses, vec!["Divorced", "Married", "Single"]);
    assert_eq!(slice.genders, vec!["Female", "Male"]);
}
