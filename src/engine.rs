//! The ratio engine: a pure pipeline from a [`StatementTable`] to a
//! [`StatementAnalysis`].
//!
//! Per row the engine computes a period-over-period growth percentage and
//! the share of each value against the total-assets anchor. Two scalar
//! current-ratio metrics are resolved by label lookup. The total-assets
//! anchor is mandatory; the current-assets/current-liabilities anchors are
//! optional and only degrade the liquidity metric when absent.

use crate::error::{Result, StatementError};
use crate::schema::{
    CurrentRatio, DerivedRow, DerivedTable, LineItem, RatioValue, StatementAnalysis,
    StatementTable,
};
use log::{debug, info, warn};

/// Substituted for zero denominators so division stays total. The resulting
/// percentage is very large but finite and signals "near-zero base"; callers
/// must treat such values as informational, not precise.
pub const ZERO_DENOMINATOR_EPSILON: f64 = 1e-9;

fn denom(x: f64) -> f64 {
    if x != 0.0 {
        x
    } else {
        ZERO_DENOMINATOR_EPSILON
    }
}

/// Label substrings used to resolve the anchor rows. Matching is
/// case-insensitive; the first needle that hits wins.
///
/// The defaults cover English and Vietnamese balance sheet captions, since
/// statements in either language are common inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorConfig {
    pub total_assets: Vec<String>,
    pub current_assets: Vec<String>,
    pub current_liabilities: Vec<String>,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            total_assets: vec!["total assets".into(), "tổng cộng tài sản".into()],
            current_assets: vec!["current assets".into(), "tài sản ngắn hạn".into()],
            current_liabilities: vec!["current liabilities".into(), "nợ ngắn hạn".into()],
        }
    }
}

/// Case-insensitive substring search over row labels. Returns the first
/// matching row in table order; multiple matches are not an error.
pub fn locate_anchor<'a>(table: &'a StatementTable, needle: &str) -> Option<&'a LineItem> {
    let needle = needle.to_lowercase();
    table
        .iter()
        .find(|item| item.label.to_lowercase().contains(&needle))
}

fn locate_any<'a>(table: &'a StatementTable, needles: &[String]) -> Option<&'a LineItem> {
    needles
        .iter()
        .find_map(|needle| locate_anchor(table, needle))
}

/// `(current - prior) / prior * 100`, with epsilon substitution for a zero
/// base.
pub fn growth_pct(prior: f64, current: f64) -> f64 {
    (current - prior) / denom(prior) * 100.0
}

/// `value / total * 100`, with epsilon substitution for a zero total.
pub fn share_pct(value: f64, total: f64) -> f64 {
    value / denom(total) * 100.0
}

/// Resolve the optional anchors and compute the current ratio for both
/// periods. A missing anchor row disables both periods; a zero
/// liabilities value disables only the period it occurs in.
pub fn compute_current_ratio(table: &StatementTable, anchors: &AnchorConfig) -> CurrentRatio {
    let assets = locate_any(table, &anchors.current_assets);
    let liabilities = locate_any(table, &anchors.current_liabilities);

    let (assets, liabilities) = match (assets, liabilities) {
        (Some(a), Some(l)) => (a, l),
        _ => {
            warn!("Current assets/liabilities anchors not found; liquidity ratio unavailable");
            return CurrentRatio::UNAVAILABLE;
        }
    };

    let period_ratio = |assets_value: f64, liabilities_value: f64| {
        if liabilities_value == 0.0 {
            RatioValue::Unavailable
        } else {
            RatioValue::Available(assets_value / liabilities_value)
        }
    };

    CurrentRatio {
        prior: period_ratio(assets.prior, liabilities.prior),
        current: period_ratio(assets.current, liabilities.current),
    }
}

/// Run the full derivation with explicit anchor configuration.
///
/// Fails with [`StatementError::MissingAnchor`] when no row matches the
/// total-assets needles; no partial output is produced in that case.
pub fn derive_statement(
    table: &StatementTable,
    anchors: &AnchorConfig,
) -> Result<StatementAnalysis> {
    let total_assets = locate_any(table, &anchors.total_assets).ok_or_else(|| {
        StatementError::MissingAnchor(
            anchors
                .total_assets
                .first()
                .cloned()
                .unwrap_or_else(|| "total assets".to_string()),
        )
    })?;

    let total_prior = total_assets.prior;
    let total_current = total_assets.current;

    info!(
        "Deriving statement: {} rows, total assets {} -> {}",
        table.len(),
        total_prior,
        total_current
    );

    let rows = table
        .iter()
        .map(|item| DerivedRow {
            label: item.label.clone(),
            prior: item.prior,
            current: item.current,
            growth_pct: growth_pct(item.prior, item.current),
            prior_share_pct: share_pct(item.prior, total_prior),
            current_share_pct: share_pct(item.current, total_current),
        })
        .collect();

    let current_ratio = compute_current_ratio(table, anchors);
    debug!(
        "Current ratio: prior={:?}, current={:?}",
        current_ratio.prior, current_ratio.current
    );

    Ok(StatementAnalysis {
        table: DerivedTable { rows },
        current_ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::LineItem;

    fn sample_table() -> StatementTable {
        StatementTable::new(vec![
            LineItem::new("TOTAL ASSETS", 100.0, 150.0),
            LineItem::new("CURRENT ASSETS", 40.0, 90.0),
            LineItem::new("CURRENT LIABILITIES", 20.0, 30.0),
        ])
    }

    #[test]
    fn test_worked_example() {
        let analysis = derive_statement(&sample_table(), &AnchorConfig::default()).unwrap();

        let current_assets = &analysis.table.rows[1];
        assert!((current_assets.growth_pct - 125.0).abs() < 1e-9);
        assert!((current_assets.current_share_pct - 60.0).abs() < 1e-9);

        assert_eq!(analysis.current_ratio.current, RatioValue::Available(3.0));
        assert_eq!(analysis.current_ratio.prior, RatioValue::Available(2.0));
    }

    #[test]
    fn test_zero_base_growth_is_finite() {
        let pct = growth_pct(0.0, 5.0);
        assert!(pct.is_finite());
        assert!(pct > 1e9);
    }

    #[test]
    fn test_missing_total_assets_is_fatal() {
        let table = StatementTable::new(vec![LineItem::new("Cash", 10.0, 20.0)]);
        let err = derive_statement(&table, &AnchorConfig::default()).unwrap_err();
        assert!(matches!(err, StatementError::MissingAnchor(_)));
    }

    #[test]
    fn test_missing_liabilities_degrades_softly() {
        let table = StatementTable::new(vec![
            LineItem::new("TOTAL ASSETS", 100.0, 150.0),
            LineItem::new("CURRENT ASSETS", 40.0, 90.0),
        ]);

        let analysis = derive_statement(&table, &AnchorConfig::default()).unwrap();
        assert_eq!(analysis.table.len(), 2);
        assert_eq!(analysis.current_ratio, CurrentRatio::UNAVAILABLE);
    }

    #[test]
    fn test_zero_liabilities_degrades_per_period() {
        let table = StatementTable::new(vec![
            LineItem::new("TOTAL ASSETS", 100.0, 150.0),
            LineItem::new("CURRENT ASSETS", 40.0, 90.0),
            LineItem::new("CURRENT LIABILITIES", 0.0, 30.0),
        ]);

        let analysis = derive_statement(&table, &AnchorConfig::default()).unwrap();
        assert_eq!(analysis.current_ratio.prior, RatioValue::Unavailable);
        assert_eq!(analysis.current_ratio.current, RatioValue::Available(3.0));
        assert_eq!(analysis.current_ratio.delta(), None);
    }

    #[test]
    fn test_vietnamese_label_matching() {
        let item = LineItem::new("Tổng cộng tài sản (A+B)", 100.0, 150.0);
        let table = StatementTable::new(vec![item]);
        let found = locate_anchor(&table, "tổng cộng tài sản");
        assert!(found.is_some());

        let analysis = derive_statement(&table, &AnchorConfig::default()).unwrap();
        assert_eq!(analysis.table.len(), 1);
    }

    #[test]
    fn test_first_match_wins() {
        let table = StatementTable::new(vec![
            LineItem::new("Total assets held for sale", 10.0, 10.0),
            LineItem::new("TOTAL ASSETS", 100.0, 150.0),
        ]);

        let found = locate_anchor(&table, "total assets").unwrap();
        assert_eq!(found.prior, 10.0);
    }
}
