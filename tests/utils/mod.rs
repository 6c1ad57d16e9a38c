use std::fs;
use std::path::{Path, PathBuf};

use hr_dashboard::Surface;
use tempfile::TempDir;

/// Header of the full dataset layout
pub const FULL_HEADER: &str = "나이,퇴직여부,성별,결혼여부,야근정도,직원수,18세이상";

/// Ten employees: 3 retired, 6 female, ages 25..=70
#[must_use]
pub fn ten_employee_csv() -> String {
    let rows = [
        "25,Yes,Female,Single,Yes,1,Y",
        "29,No,Female,Single,No,1,Y",
        "30,No,Male,Married,No,1,Y",
        "34,Yes,Female,Married,Yes,1,Y",
        "41,No,Male,Married,Yes,1,Y",
        "45,No,Female,Divorced,No,1,Y",
        "52,No,Male,Single,No,1,Y",
        "58,Yes,Female,Married,No,1,Y",
        "63,No,Male,Divorced,Yes,1,Y",
        "70,No,Female,Single,Yes,1,Y",
    ];
    format!("{FULL_HEADER}\n{}\n", rows.join("\n"))
}

/// Write `content` as `name` inside a fresh temporary directory
pub fn write_csv(content: &str, name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write csv fixture");
    (dir, path)
}

/// Path inside `dir` that does not exist
#[must_use]
pub fn missing_path(dir: &Path) -> PathBuf {
    dir.join("HR Data.csv")
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Title(String),
    Columns(usize),
    Column,
    EndColumns,
    Metric(String, String),
    Subheader(String),
    Chart(String),
    Info(String),
    Error(String),
}

/// Surface that records every call for later inspection
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub elements: Vec<Element>,
}

impl RecordingSurface {
    pub fn metrics(&self) -> Vec<(String, String)> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Metric(label, value) => Some((label.clone(), value.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn charts(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Chart(svg) => Some(svg.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn infos(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Info(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Error(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn title(&mut self, text: &str) {
        self.elements.push(Element::Title(text.to_string()));
    }

    fn columns(&mut self, count: usize) {
        self.elements.push(Element::Columns(count));
    }

    fn column(&mut self) {
        self.elements.push(Element::Column);
    }

    fn end_columns(&mut self) {
        self.elements.push(Element::EndColumns);
    }

    fn metric(&mut self, label: &str, value: &str) {
        self.elements
            .push(Element::Metric(label.to_string(), value.to_string()));
    }

    fn subheader(&mut self, text: &str) {
        self.elements.push(Element::Subheader(text.to_string()));
    }

    fn chart(&mut self, svg: &str) {
        self.elements.push(Element::Chart(svg.to_string()));
    }

    fn info(&mut self, text: &str) {
        self.elements.push(Element::Info(text.to_string()));
    }

    fn error(&mut self, text: &str) {
        self.elements.push(Element::Error(text.to_string()));
    }
}
