//! View filters.
//!
//! A [`ViewFilter`] narrows which rows of a data source a renderer draws.
//! The construction API only carries the filter; it is applied at draw time.

/// Row-subset filter applied to a renderer's data source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewFilter {
    /// Every row is visible.
    #[default]
    All,
    /// Only the listed row indices are visible.
    Indices(Vec<usize>),
}

impl ViewFilter {
    /// Create a filter keeping only the given row indices.
    #[must_use]
    pub fn indices(indices: impl Into<Vec<usize>>) -> Self {
        ViewFilter::Indices(indices.into())
    }

    /// Row indices visible for a source of `nrow` rows.
    ///
    /// Indices beyond the row count are dropped rather than reported; a
    /// stale filter narrows the view, it never breaks the draw.
    #[must_use]
    pub fn select(&self, nrow: usize) -> Vec<usize> {
        match self {
            ViewFilter::All => (0..nrow).collect(),
            ViewFilter::Indices(indices) => {
                indices.iter().copied().filter(|&i| i < nrow).collect()
            }
        }
    }
}
