use std::fmt;

use serde::Deserialize;

/// One row of the classification list served at `<base>`.
///
/// `actual_class` keeps the server's label text as sent (`"Ham"`, `"Spam"`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationRecord {
    pub file: String,
    pub spam_probability: f64,
    pub actual_class: String,
}

impl ClassificationRecord {
    /// Table cells in display order: file, spam probability, actual class.
    pub fn cells(&self) -> [String; 3] {
        [
            self.file.clone(),
            number_text(self.spam_probability),
            self.actual_class.clone(),
        ]
    }
}

/// Formats a number the way a browser prints it: shortest round-trip
/// digits, switching to exponent form below `1e-6` and from `1e21` up.
pub fn number_text(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() || (1e-6..1e21).contains(&magnitude) {
        return if value == 0.0 { "0".to_string() } else { value.to_string() };
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

/// Classification list in server response order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ResultSet(Vec<ClassificationRecord>);

impl ResultSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassificationRecord> {
        self.0.iter()
    }
}

impl From<Vec<ClassificationRecord>> for ResultSet {
    fn from(records: Vec<ClassificationRecord>) -> Self {
        Self(records)
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ClassificationRecord;
    type IntoIter = std::slice::Iter<'a, ClassificationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Body of the `/accuracy` and `/precision` endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MetricValue {
    pub val: f64,
}

impl MetricValue {
    pub fn placeholder_text(&self) -> String {
        number_text(self.val)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Accuracy,
    Precision,
}

impl MetricKind {
    /// Path segment appended to the base URL.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Accuracy => "accuracy",
            Self::Precision => "precision",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}
