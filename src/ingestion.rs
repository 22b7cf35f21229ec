//! Input boundary: turns already-decoded string records into a
//! [`StatementTable`]. Spreadsheet/CSV decoding itself belongs to the
//! caller; this module only enforces the three-column shape and the
//! numeric-coercion policy.

use crate::error::{Result, StatementError};
use crate::schema::{LineItem, StatementTable};
use log::debug;

/// One raw record as it arrives from the decoder, all cells still text.
#[derive(Debug, Clone)]
pub struct RawStatementRow {
    pub label: String,
    pub prior: String,
    pub current: String,
}

/// Coerce one cell to a number. Malformed cells become `0.0` rather than
/// an error, keeping the pipeline total over dirty inputs.
pub fn coerce_cell(cell: &str) -> f64 {
    cell.trim().parse::<f64>().unwrap_or(0.0)
}

/// Build a statement table from raw rows, coercing both numeric columns.
pub fn build_statement_table(rows: &[RawStatementRow]) -> StatementTable {
    let items = rows
        .iter()
        .map(|row| LineItem {
            label: row.label.trim().to_string(),
            prior: coerce_cell(&row.prior),
            current: coerce_cell(&row.current),
        })
        .collect();

    StatementTable::new(items)
}

impl StatementTable {
    /// Build a table from generic string records. Each record must have
    /// exactly three fields (label, prior, current); anything else is a
    /// fatal shape error. Header rows are the decoder's concern and are
    /// not detected here.
    pub fn from_records<I, R, S>(records: I) -> Result<StatementTable>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut raw_rows = Vec::new();

        for (idx, record) in records.into_iter().enumerate() {
            let fields = record.as_ref();
            if fields.len() != 3 {
                return Err(StatementError::InvalidShape(format!(
                    "record {} has {} column(s), expected 3 (label, prior, current)",
                    idx,
                    fields.len()
                )));
            }

            raw_rows.push(RawStatementRow {
                label: fields[0].as_ref().to_string(),
                prior: fields[1].as_ref().to_string(),
                current: fields[2].as_ref().to_string(),
            });
        }

        debug!("Ingested {} statement rows", raw_rows.len());
        Ok(build_statement_table(&raw_rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_cell() {
        assert_eq!(coerce_cell("123.5"), 123.5);
        assert_eq!(coerce_cell("  -42 "), -42.0);
        assert_eq!(coerce_cell("n/a"), 0.0);
        assert_eq!(coerce_cell(""), 0.0);
    }

    #[test]
    fn test_build_statement_table_coerces_bad_cells() {
        let rows = vec![
            RawStatementRow {
                label: " Cash ".to_string(),
                prior: "100".to_string(),
                current: "abc".to_string(),
            },
            RawStatementRow {
                label: "Inventory".to_string(),
                prior: "".to_string(),
                current: "250.75".to_string(),
            },
        ];

        let table = build_statement_table(&rows);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].label, "Cash");
        assert_eq!(table.rows[0].prior, 100.0);
        assert_eq!(table.rows[0].current, 0.0);
        assert_eq!(table.rows[1].prior, 0.0);
        assert_eq!(table.rows[1].current, 250.75);
    }

    #[test]
    fn test_from_records_preserves_order() {
        let records = vec![
            vec!["TOTAL ASSETS", "100", "150"],
            vec!["CURRENT ASSETS", "40", "90"],
        ];

        let table = StatementTable::from_records(records).unwrap();
        assert_eq!(table.rows[0].label, "TOTAL ASSETS");
        assert_eq!(table.rows[1].label, "CURRENT ASSETS");
    }

    #[test]
    fn test_from_records_rejects_wrong_column_count() {
        let records = vec![vec!["TOTAL ASSETS", "100"]];
        let err = StatementTable::from_records(records).unwrap_err();
        assert!(matches!(err, StatementError::InvalidShape(_)));
    }
}
