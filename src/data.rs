//! Columnar data source.
//!
//! A [`ColumnDataSource`] holds named columns that glyph attributes can
//! reference by field name. The construction API only asks two things of
//! it: whether a column exists, and its values at draw time.

use std::collections::BTreeMap;

use crate::color::Rgba;

/// A single column of values.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Numeric values.
    Numbers(Vec<f64>),
    /// Text values.
    Texts(Vec<String>),
    /// Per-row colors.
    Colors(Vec<Rgba>),
    /// Per-row numeric lists (e.g. one polyline's coordinates per row).
    Lists(Vec<Vec<f64>>),
}

impl Column {
    /// Number of rows in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Column::Numbers(v) => v.len(),
            Column::Texts(v) => v.len(),
            Column::Colors(v) => v.len(),
            Column::Lists(v) => v.len(),
        }
    }

    /// Whether the column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A columnar data source shared by glyph renderers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnDataSource {
    columns: BTreeMap<String, Column>,
}

impl ColumnDataSource {
    /// Create a new empty data source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from x and y arrays.
    #[must_use]
    pub fn from_xy(x: &[f64], y: &[f64]) -> Self {
        let mut source = Self::new();
        source.add_column_f64("x", x);
        source.add_column_f64("y", y);
        source
    }

    /// Add a numeric column.
    pub fn add_column_f64(&mut self, name: &str, data: &[f64]) {
        self.columns.insert(name.to_string(), Column::Numbers(data.to_vec()));
    }

    /// Add a text column.
    pub fn add_column_str(&mut self, name: &str, data: &[&str]) {
        let values = data.iter().map(|&s| s.to_string()).collect();
        self.columns.insert(name.to_string(), Column::Texts(values));
    }

    /// Add a color column.
    pub fn add_column_colors(&mut self, name: &str, data: &[Rgba]) {
        self.columns.insert(name.to_string(), Column::Colors(data.to_vec()));
    }

    /// Add a column of per-row numeric lists.
    pub fn add_column_lists(&mut self, name: &str, data: &[Vec<f64>]) {
        self.columns.insert(name.to_string(), Column::Lists(data.to_vec()));
    }

    /// Check if a column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Get a column.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Get number of rows (the longest column's length).
    #[must_use]
    pub fn nrow(&self) -> usize {
        self.columns.values().map(Column::len).max().unwrap_or(0)
    }

    /// Get number of columns.
    #[must_use]
    pub fn ncol(&self) -> usize {
        self.columns.len()
    }

    /// Get column names.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }
}
