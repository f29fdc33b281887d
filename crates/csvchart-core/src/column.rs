// File: crates/csvchart-core/src/column.rs
// Summary: Case-insensitive column resolution and lenient per-cell column extraction.
// Notes:
// - Extraction is strict about the column existing and permissive about cells:
//   a short row or an unparseable number drops that row from the output.
// - `extract_strings` / `extract_numbers` filter each column independently, so
//   their outputs are not positionally aligned once any row is dropped.
//   `extract_pairs` keeps row correspondence by filtering both columns at once.

use crate::error::{PipelineError, Result};
use crate::table::Table;

/// Header position obtained from a case-insensitive name match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnIndex(usize);

impl ColumnIndex {
    pub const fn get(self) -> usize { self.0 }
}

/// Resolve `name` against `headers`: exact match ignoring case, no trimming.
/// The earliest matching header wins when names repeat.
pub fn resolve(headers: &[String], name: &str) -> Result<ColumnIndex> {
    headers
        .iter()
        .position(|h| eq_ignore_case(h, name))
        .map(ColumnIndex)
        .ok_or_else(|| PipelineError::ColumnNotFound { column: name.to_owned() })
}

/// Trimmed text of `column` for every row that has a cell there.
pub fn extract_strings(table: &Table, column: &str) -> Result<Vec<String>> {
    let ix = resolve(table.headers(), column)?;
    Ok(table
        .rows()
        .iter()
        .filter_map(|row| string_cell(row, ix))
        .collect())
}

/// Values of `column` for every row whose trimmed cell parses as `f64`.
pub fn extract_numbers(table: &Table, column: &str) -> Result<Vec<f64>> {
    let ix = resolve(table.headers(), column)?;
    Ok(table
        .rows()
        .iter()
        .filter_map(|row| number_cell(row, ix))
        .collect())
}

/// Single row-synchronized pass over a category and a value column.
/// A row is kept only when both its category cell exists and its value cell
/// parses, so every returned pair comes from the same source row.
pub fn extract_pairs(table: &Table, category: &str, value: &str) -> Result<(Vec<String>, Vec<f64>)> {
    let cat_ix = resolve(table.headers(), category)?;
    let val_ix = resolve(table.headers(), value)?;

    let mut categories = Vec::new();
    let mut values = Vec::new();
    for row in table.rows() {
        if let (Some(c), Some(v)) = (string_cell(row, cat_ix), number_cell(row, val_ix)) {
            categories.push(c);
            values.push(v);
        }
    }
    Ok((categories, values))
}

#[inline]
fn string_cell(row: &[String], ix: ColumnIndex) -> Option<String> {
    row.get(ix.get()).map(|cell| cell.trim().to_owned())
}

#[inline]
fn number_cell(row: &[String], ix: ColumnIndex) -> Option<f64> {
    row.get(ix.get()).and_then(|cell| parse_number(cell.trim()))
}

/// Decimal parse that rejects out-of-range literals such as `1e400`.
/// A spelled-out infinity (`inf`, `-Infinity`) is still accepted.
fn parse_number(text: &str) -> Option<f64> {
    let value = text.parse::<f64>().ok()?;
    let spelled_inf = text
        .trim_start_matches(['+', '-'])
        .get(..3)
        .is_some_and(|head| head.eq_ignore_ascii_case("inf"));
    (!value.is_infinite() || spelled_inf).then_some(value)
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn first_duplicate_header_wins() {
        let h = headers(&["Score", "date", "score"]);
        assert_eq!(resolve(&h, "SCORE").unwrap().get(), 0);
    }

    #[test]
    fn no_trimming_or_substring_matching() {
        let h = headers(&[" date", "sleep_score"]);
        assert!(resolve(&h, "date").is_err());
        assert!(resolve(&h, "sleep").is_err());
        assert_eq!(resolve(&h, " DATE").unwrap().get(), 0);
    }

    #[test]
    fn non_ascii_headers_fold_case() {
        let h = headers(&["Größe", "ÉTAT"]);
        assert_eq!(resolve(&h, "größe").unwrap().get(), 0);
        assert_eq!(resolve(&h, "état").unwrap().get(), 1);
    }

    #[test]
    fn missing_column_names_the_column() {
        let err = resolve(&headers(&["date"]), "bogus").unwrap_err();
        assert_eq!(err.to_string(), "column 'bogus' not found");
    }

    #[test]
    fn overflowing_numbers_are_skipped() {
        assert_eq!(parse_number("1e400"), None);
        assert_eq!(parse_number("-1e400"), None);
        assert_eq!(parse_number("1e308"), Some(1e308));
        assert_eq!(parse_number("-Inf"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number("infinity"), Some(f64::INFINITY));
        assert_eq!(parse_number("abc"), None);
    }
}
