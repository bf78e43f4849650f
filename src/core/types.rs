use std::ops::Range;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Size of the drawing surface in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// One named, ordered collection of `(x, y)` samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    name: String,
    points: Vec<DataPoint>,
}

impl Series {
    /// Builds a series, rejecting non-finite samples.
    pub fn new<P>(name: impl Into<String>, points: impl IntoIterator<Item = P>) -> ChartResult<Self>
    where
        P: Into<DataPoint>,
    {
        let name = name.into();
        let points: Vec<DataPoint> = points.into_iter().map(Into::into).collect();
        if let Some(index) = points.iter().position(|point| !point.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "series `{name}` has a non-finite value at index {index}"
            )));
        }
        Ok(Self { name, points })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Insertion-ordered set of uniquely named series.
///
/// Order is significant: it drives legend order and the series index used for
/// side-by-side bar placement and pie slice categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSet {
    series: IndexMap<String, Vec<DataPoint>>,
}

impl SeriesSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one series. Duplicate names are rejected.
    pub fn push(&mut self, series: Series) -> ChartResult<()> {
        if self.series.contains_key(&series.name) {
            return Err(ChartError::InvalidData(format!(
                "series `{}` already exists",
                series.name
            )));
        }
        self.series.insert(series.name, series.points);
        Ok(())
    }

    /// Appends several series at once; nothing is inserted when any entry is
    /// rejected.
    pub fn extend_checked(&mut self, batch: Vec<Series>) -> ChartResult<()> {
        for (index, series) in batch.iter().enumerate() {
            let duplicated_in_batch = batch[..index]
                .iter()
                .any(|earlier| earlier.name == series.name);
            if duplicated_in_batch || self.series.contains_key(&series.name) {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` already exists",
                    series.name
                )));
            }
        }
        for series in batch {
            self.series.insert(series.name, series.points);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.series.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[DataPoint]> {
        self.series.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DataPoint])> {
        self.series
            .iter()
            .map(|(name, points)| (name.as_str(), points.as_slice()))
    }

    pub fn x_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.series.values().flatten().map(|point| point.x)
    }

    pub fn y_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.series.values().flatten().map(|point| point.y)
    }

    #[must_use]
    pub fn total_points(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }

    /// Length of the longest series.
    #[must_use]
    pub fn longest_len(&self) -> usize {
        self.series.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Unique-indices policy for irregular series lengths: categories are the
    /// sample positions of the longest series.
    #[must_use]
    pub fn category_indices(&self) -> Range<usize> {
        0..self.longest_len()
    }
}
