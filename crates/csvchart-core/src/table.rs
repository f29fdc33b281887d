// File: crates/csvchart-core/src/table.rs
// Summary: In-memory tabular store (headers + raw string rows) parsed from CSV bytes.

use crate::error::{PipelineError, ReadError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parsed delimited data: the first record as headers, the rest as rows.
/// Contract: rows keep file order and are never mutated after construction;
/// a row may hold fewer (or more) cells than there are headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table directly from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Parse RFC-4180 style CSV from a byte slice, materializing every record.
    ///
    /// A leading UTF-8 BOM is ignored. Cells that are not valid UTF-8 are
    /// decoded lossily; quoting errors fail the whole stream.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        check_quotes(bytes).map_err(|source| PipelineError::MalformedInput { source })?;

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);

        let mut records = rdr.byte_records();
        let headers = match records.next() {
            Some(first) => record_cells(&first?),
            None => return Err(PipelineError::EmptyInput),
        };

        let mut rows = Vec::new();
        for rec in records {
            rows.push(record_cells(&rec?));
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] { &self.headers }

    pub fn rows(&self) -> &[Vec<String>] { &self.rows }

    /// Number of data rows (the header record is not counted).
    pub fn row_count(&self) -> usize { self.rows.len() }
}

fn record_cells(record: &csv::ByteRecord) -> Vec<String> {
    record.iter().map(|cell| String::from_utf8_lossy(cell).into_owned()).collect()
}

#[derive(Clone, Copy)]
enum QuoteState {
    FieldStart,
    Bare,
    Quoted,
    /// A `"` was seen inside a quoted field: either an escape or the close.
    QuoteInQuoted,
    /// Closing quote followed by `\r`; only `\n` (or EOF) may follow.
    ClosedCr,
}

/// Reject the quoting the `csv` reader would otherwise recover from: a `"`
/// inside an unquoted field, text after a closing quote, and a quoted field
/// still open at end of input.
fn check_quotes(bytes: &[u8]) -> std::result::Result<(), ReadError> {
    use QuoteState::*;

    let mut state = FieldStart;
    let mut line: u64 = 1;
    let mut opened_on: u64 = 1;

    for &b in bytes {
        state = match (state, b) {
            (FieldStart, b'"') => {
                opened_on = line;
                Quoted
            }
            (Bare, b'"') => return Err(ReadError::BareQuote { line }),
            (FieldStart | Bare, b',' | b'\n') => FieldStart,
            (FieldStart | Bare, _) => Bare,
            (Quoted, b'"') => QuoteInQuoted,
            (Quoted, _) => Quoted,
            (QuoteInQuoted, b'"') => Quoted,
            (QuoteInQuoted, b',' | b'\n') => FieldStart,
            (QuoteInQuoted, b'\r') => ClosedCr,
            (ClosedCr, b'\n') => FieldStart,
            (QuoteInQuoted | ClosedCr, _) => return Err(ReadError::Quote { line }),
        };
        if b == b'\n' {
            line += 1;
        }
    }

    match state {
        Quoted => Err(ReadError::Quote { line: opened_on }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_is_not_part_of_first_header() {
        let table = Table::from_bytes(b"\xEF\xBB\xBFdate,steps\n2024-01-01,10").unwrap();
        assert_eq!(table.headers(), ["date", "steps"]);
    }

    #[test]
    fn quoted_fields_keep_embedded_delimiters() {
        let table = Table::from_bytes(b"name,note\n\"a,b\",\"say \"\"hi\"\"\"\n").unwrap();
        assert_eq!(table.rows()[0], vec!["a,b".to_string(), "say \"hi\"".to_string()]);
    }

    #[test]
    fn ragged_rows_are_kept_as_is() {
        let table = Table::from_bytes(b"a,b,c\n1\n1,2,3,4\n").unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0], ["1"]);
        assert_eq!(table.rows()[1], ["1", "2", "3", "4"]);
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(matches!(Table::from_bytes(b""), Err(PipelineError::EmptyInput)));
        assert!(matches!(Table::from_bytes(b"\n\n"), Err(PipelineError::EmptyInput)));
        assert!(matches!(Table::from_bytes(UTF8_BOM), Err(PipelineError::EmptyInput)));
    }

    #[test]
    fn unterminated_quote_is_malformed() {
        let err = Table::from_bytes(b"date,score\n\"2024-01-01,85\n2024-01-02,78\n").unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MalformedInput { source: ReadError::Quote { line: 2 } }
        ));
        assert_eq!(err.stage(), crate::error::Stage::Parse);
    }

    #[test]
    fn bare_quote_in_unquoted_field_is_malformed() {
        let err = Table::from_bytes(b"date,score\n2024\"01,85\n").unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MalformedInput { source: ReadError::BareQuote { line: 2 } }
        ));
    }

    #[test]
    fn text_after_closing_quote_is_malformed() {
        let err = Table::from_bytes(b"a,b\n\"x\"y,1\n").unwrap_err();
        assert!(matches!(err, PipelineError::MalformedInput { source: ReadError::Quote { .. } }));
    }

    #[test]
    fn quoted_fields_may_span_lines_and_end_with_crlf() {
        let table = Table::from_bytes(b"a,b\r\n\"multi\nline\",\"1\"\r\n2,3").unwrap();
        assert_eq!(table.headers(), ["a", "b"]);
        assert_eq!(table.rows()[0], ["multi\nline", "1"]);
        assert_eq!(table.rows()[1], ["2", "3"]);
    }

    #[test]
    fn invalid_utf8_cells_are_decoded_lossily() {
        let table = Table::from_bytes(b"date,score,note\n2024-01-01,85,\xFF\xFE\n").unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows()[0][0], "2024-01-01");
        assert_eq!(table.rows()[0][1], "85");
        assert_eq!(table.rows()[0][2], "\u{FFFD}\u{FFFD}");
    }
}
