use std::path::Path;

use hr_dashboard::{Dashboard, DashboardConfig, FontResource, HtmlSurface, RenderOutcome};

use crate::utils::{missing_path, ten_employee_csv, write_csv};

#[test]
fn test_page_embeds_font_and_charts() {
    let (dir, path) = write_csv(&ten_employee_csv(), "HR Data.csv");
    let font_path = dir.path().join("font.ttf");
    std::fs::write(&font_path, [0u8, 1, 0, 0, 1, 2, 3, 4]).unwrap();

    let font = FontResource::load(&font_path).unwrap();
    let dashboard = Dashboard::new(DashboardConfig::default().with_data_path(&path));
    let mut surface = HtmlSurface::new().with_font(&font);
    dashboard.render(&mut surface).unwrap();
    let html = surface.finish(&dashboard.config().page_title);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>퇴직율 대시보드</title>"));
    assert!(html.contains("@font-face"));
    assert_eq!(html.matches("<svg").count(), 3);
    assert!(html.contains("다양성 HR 대시보드"));
}

#[test]
fn test_halted_page_has_only_the_error() {
    let dir = tempfile::tempdir().unwrap();
    let dashboard =
        Dashboard::new(DashboardConfig::default().with_data_path(missing_path(dir.path())));
    let mut surface = HtmlSurface::new();

    let outcome = dashboard.render(&mut surface).unwrap();
    let html = surface.finish("page");

    assert_eq!(outcome, RenderOutcome::Halted);
    assert_eq!(html.matches(r#"class="notice error""#).count(), 1);
    assert!(!html.contains("<svg"));
    assert!(!html.contains(r#"class="metric""#));
}

#[test]
fn test_snapshot_is_written_as_json() {
    let (dir, path) = write_csv(&ten_employee_csv(), "HR Data.csv");
    let dashboard = Dashboard::new(DashboardConfig::default().with_data_path(&path));

    let RenderOutcome::Rendered(snapshot) = dashboard.render(&mut HtmlSurface::new()).unwrap()
    else {
        panic!("expected a rendered dashboard");
    };
    let out = dir.path().join("out").join("dashboard.json");
    snapshot.write(&out).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["kpis"]["headcount"], 10);
    assert_eq!(json["overtime"]["status"], "chart");
    assert_eq!(json["age"]["buckets"].as_array().unwrap().len(), 5);
}

#[test]
fn test_missing_font_is_an_error() {
    assert!(FontResource::load(Path::new("fonts/does-not-exist.ttf")).is_err());
}
