//! Categorical cell values that keep the ordering of their source column
//!
//! CSV inference may type a categorical column as integers or floats. Such
//! values sort by number (`5 < 10 < 20`), text values sort by their label.

use std::cmp::Ordering;

/// One categorical cell: its display label plus, for numeric columns, its value
#[derive(Debug, Clone)]
pub struct Category {
    label: String,
    value: Option<f64>,
}

impl Category {
    /// A value from a text column
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
        }
    }

    /// A value from a numeric column
    pub fn number(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value: Some(value),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn into_label(self) -> String {
        self.label
    }
}

impl Ord for Category {
    // Numbers sort before text when a column mixes both
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.value, other.value) {
            (Some(a), Some(b)) => a.total_cmp(&b).then_with(|| self.label.cmp(&other.label)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.label.cmp(&other.label),
        }
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Category {}
