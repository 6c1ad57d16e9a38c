use hr_dashboard::algorithm::OvertimeView;
use hr_dashboard::dashboard::{
    AGE_SECTION, DASHBOARD_TITLE, GENDER_SECTION, MISSING_COLUMNS_NOTICE, OVERTIME_SECTION,
};
use hr_dashboard::{Dashboard, DashboardConfig, RenderOutcome};

use crate::utils::{Element, RecordingSurface, missing_path, ten_employee_csv, write_csv};

fn dashboard_for(path: &std::path::Path) -> Dashboard {
    Dashboard::new(DashboardConfig::default().with_data_path(path))
}

#[test]
fn test_full_render() {
    let (_dir, path) = write_csv(&ten_employee_csv(), "HR Data.csv");
    let mut surface = RecordingSurface::default();

    let outcome = dashboard_for(&path).render(&mut surface).unwrap();

    assert_eq!(surface.elements.first(), Some(&Element::Title(DASHBOARD_TITLE.to_string())));
    assert_eq!(
        surface.metrics(),
        vec![
            ("전체 직원 수".to_string(), "10명".to_string()),
            ("여성 비율".to_string(), "60.0%".to_string()),
            ("평균 연령".to_string(), "44.7세".to_string()),
        ]
    );
    assert_eq!(surface.charts().len(), 3);
    assert!(surface.infos().is_empty());
    assert!(surface.errors().is_empty());

    let subheaders: Vec<&Element> = surface
        .elements
        .iter()
        .filter(|e| matches!(e, Element::Subheader(_)))
        .collect();
    assert_eq!(
        subheaders,
        vec![
            &Element::Subheader(GENDER_SECTION.to_string()),
            &Element::Subheader(AGE_SECTION.to_string()),
            &Element::Subheader(OVERTIME_SECTION.to_string()),
        ]
    );

    let RenderOutcome::Rendered(snapshot) = outcome else {
        panic!("expected a rendered dashboard");
    };
    assert_eq!(snapshot.kpis.attrition_count, 3);
    assert!((snapshot.attrition_rate_pct - 30.0).abs() < 1e-9);

    let OvertimeView::Chart(slice) = &snapshot.overtime else {
        panic!("expected an overtime chart");
    };
    assert_eq!(slice.level, "Yes");
    assert_eq!(slice.percentage("Married", "Female"), Some(50.0));
    assert_eq!(slice.percentage("Divorced", "Male"), Some(100.0));
    assert_eq!(slice.percentage("Single", "Male"), Some(0.0));
    let single_female = slice.percentage("Single", "Female").unwrap();
    assert!((single_female - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_missing_file_halts_with_one_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut surface = RecordingSurface::default();

    let outcome = dashboard_for(&missing_path(dir.path()))
        .render(&mut surface)
        .unwrap();

    assert_eq!(outcome, RenderOutcome::Halted);
    assert_eq!(surface.elements.len(), 1);
    assert_eq!(surface.errors().len(), 1);
    assert!(surface.errors()[0].contains("HR Data.csv"));
    assert!(surface.metrics().is_empty());
    assert!(surface.charts().is_empty());
}

#[test]
fn test_missing_marital_status_degrades_third_section() {
    let csv = "나이,퇴직여부,성별,야근정도\n30,No,Male,Yes\n40,Yes,Female,No\n";
    let (_dir, path) = write_csv(csv, "HR Data.csv");
    let mut surface = RecordingSurface::default();

    let outcome = dashboard_for(&path).render(&mut surface).unwrap();

    assert_eq!(surface.metrics().len(), 3);
    assert_eq!(surface.charts().len(), 2);
    assert_eq!(surface.infos(), vec![MISSING_COLUMNS_NOTICE]);
    assert!(surface.errors().is_empty());
    assert_eq!(surface.elements.last(), Some(&Element::Info(MISSING_COLUMNS_NOTICE.to_string())));

    let RenderOutcome::Rendered(snapshot) = outcome else {
        panic!("expected a rendered dashboard");
    };
    assert_eq!(
        snapshot.overtime,
        OvertimeView::MissingColumns {
            columns: vec!["결혼여부".to_string()]
        }
    );
}

#[test]
fn test_single_overtime_level_is_guarded() {
    let csv = "나이,퇴직여부,성별,결혼여부,야근정도\n30,No,Male,Single,Yes\n40,Yes,Female,Married,Yes\n";
    let (_dir, path) = write_csv(csv, "HR Data.csv");
    let mut surface = RecordingSurface::default();

    dashboard_for(&path).render(&mut surface).unwrap();

    assert_eq!(surface.charts().len(), 2);
    assert_eq!(surface.infos().len(), 1);
    assert!(surface.infos()[0].contains("야근정도"));
}

#[test]
fn test_repeated_renders_hit_the_cache() {
    let (_dir, path) = write_csv(&ten_employee_csv(), "HR Data.csv");
    let dashboard = dashboard_for(&path);

    let first = dashboard.render(&mut RecordingSurface::default()).unwrap();
    let second = dashboard.render(&mut RecordingSurface::default()).unwrap();

    assert_eq!(dashboard.cache().hits(), 1);
    let (RenderOutcome::Rendered(a), RenderOutcome::Rendered(b)) = (first, second) else {
        panic!("expected two rendered dashboards");
    };
    assert_eq!(a.kpis, b.kpis);
    assert_eq!(a.age, b.age);
}
