// File: crates/csvchart-core/src/align.rs
// Summary: Series aligner; reconciles a category column and a value column to a common length.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::column::{extract_numbers, extract_pairs, extract_strings};
use crate::error::{PipelineError, Result};
use crate::table::Table;

/// Category/value sequences of equal, non-zero length.
#[derive(Clone, Debug, PartialEq)]
pub struct AlignedSeries {
    categories: Vec<String>,
    values: Vec<f64>,
}

impl AlignedSeries {
    pub fn categories(&self) -> &[String] { &self.categories }

    pub fn values(&self) -> &[f64] { &self.values }

    pub fn len(&self) -> usize { self.values.len() }

    /// Always false for a value produced by [`align`]; kept for API symmetry.
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// `(category, value)` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.categories.iter().map(String::as_str).zip(self.values.iter().copied())
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<f64>) {
        (self.categories, self.values)
    }
}

/// Truncate both inputs to the shorter length, keeping the leading prefix.
/// Only lengths are reconciled: when the inputs were filtered independently,
/// the i-th category and the i-th value may come from different source rows.
pub fn align(mut categories: Vec<String>, mut values: Vec<f64>) -> Result<AlignedSeries> {
    let n = categories.len().min(values.len());
    if n == 0 {
        return Err(PipelineError::EmptyResult);
    }
    categories.truncate(n);
    values.truncate(n);
    Ok(AlignedSeries { categories, values })
}

/// How category and value columns are paired into points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    /// One pass over the rows; a row is dropped unless both cells are usable.
    #[default]
    RowSynchronized,
    /// Extract each column on its own, then cut both to the shorter length.
    Truncate,
}

impl Alignment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RowSynchronized => "row-synchronized",
            Self::Truncate => "truncate",
        }
    }

    /// Extract `category` and `value` from `table` and align them.
    pub fn apply(self, table: &Table, category: &str, value: &str) -> Result<AlignedSeries> {
        let (categories, values) = match self {
            Self::RowSynchronized => extract_pairs(table, category, value)?,
            Self::Truncate => (extract_strings(table, category)?, extract_numbers(table, value)?),
        };
        align(categories, values)
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown alignment '{0}' (expected 'row-synchronized' or 'truncate')")]
pub struct UnknownAlignment(pub String);

impl FromStr for Alignment {
    type Err = UnknownAlignment;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "row-synchronized" => Ok(Self::RowSynchronized),
            "truncate" => Ok(Self::Truncate),
            other => Err(UnknownAlignment(other.to_owned())),
        }
    }
}
