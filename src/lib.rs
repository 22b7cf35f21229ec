//! # Statement Analyzer
//!
//! A library for analyzing two-period financial statements (a line-item
//! label plus prior- and current-period values per row).
//!
//! ## Core Concepts
//!
//! - **Statement table**: the ordered raw input, with malformed numeric
//!   cells coerced to zero so the pipeline never partial-fails on dirty data
//! - **Derived table**: every row extended with a growth percentage and its
//!   share of total assets in each period
//! - **Anchors**: specific rows located by case-insensitive substring match.
//!   Total assets is mandatory; current assets/liabilities are optional and
//!   only gate the liquidity ratio
//! - **AI commentary** (feature `gemini`): the serialized analysis can be
//!   sent to Gemini for narrative commentary and follow-up chat
//!
//! ## Example
//!
//! ```rust
//! use statement_analyzer::*;
//!
//! let table = StatementTable::new(vec![
//!     LineItem::new("TOTAL ASSETS", 100.0, 150.0),
//!     LineItem::new("CURRENT ASSETS", 40.0, 90.0),
//!     LineItem::new("CURRENT LIABILITIES", 20.0, 30.0),
//! ]);
//!
//! let analysis = analyze_statement(&table).unwrap();
//! assert_eq!(analysis.table.len(), 3);
//! println!("{}", render_markdown(&analysis));
//! ```

pub mod engine;
pub mod error;
pub mod ingestion;
pub mod report;
pub mod schema;
pub mod session;

#[cfg(feature = "gemini")]
pub mod llm;

pub use engine::{
    compute_current_ratio, derive_statement, growth_pct, locate_anchor, share_pct, AnchorConfig,
    ZERO_DENOMINATOR_EPSILON,
};
pub use error::{Result, StatementError};
pub use ingestion::{build_statement_table, coerce_cell, RawStatementRow};
pub use report::{format_grouped, format_pct, format_ratio, render_markdown, render_ratio_summary};
pub use schema::{
    CurrentRatio, DerivedRow, DerivedTable, LineItem, RatioValue, StatementAnalysis,
    StatementTable,
};
pub use session::{AnalysisSession, ChatMessage, ChatRole};

/// Run the full derivation with the default anchor configuration.
pub fn analyze_statement(table: &StatementTable) -> Result<StatementAnalysis> {
    derive_statement(table, &AnchorConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_analysis() {
        let table = StatementTable::new(vec![
            LineItem::new("A. TÀI SẢN NGẮN HẠN", 40.0, 90.0),
            LineItem::new("B. TÀI SẢN DÀI HẠN", 60.0, 60.0),
            LineItem::new("TỔNG CỘNG TÀI SẢN (A+B)", 100.0, 150.0),
            LineItem::new("I. NỢ NGẮN HẠN", 20.0, 30.0),
        ]);

        let analysis = analyze_statement(&table).unwrap();
        assert_eq!(analysis.table.len(), 4);
        assert_eq!(analysis.current_ratio.current, RatioValue::Available(3.0));

        let rendered = render_markdown(&analysis);
        assert!(rendered.contains("TỔNG CỘNG TÀI SẢN"));
    }

    #[test]
    fn test_missing_mandatory_anchor() {
        let table = StatementTable::new(vec![LineItem::new("Cash", 1.0, 2.0)]);
        assert!(matches!(
            analyze_statement(&table),
            Err(StatementError::MissingAnchor(_))
        ));
    }
}
