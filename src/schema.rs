use serde::{Deserialize, Serialize};

/// One row of a two-period statement: a label and the values reported for
/// the prior and current periods. Labels are not guaranteed to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub prior: f64,
    pub current: f64,
}

impl LineItem {
    pub fn new(label: impl Into<String>, prior: f64, current: f64) -> Self {
        Self {
            label: label.into(),
            prior,
            current,
        }
    }
}

/// An ordered two-period statement. Insertion order is presentation order
/// and matches the source row order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatementTable {
    pub rows: Vec<LineItem>,
}

impl StatementTable {
    pub fn new(rows: Vec<LineItem>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.rows.iter()
    }
}

/// A statement row extended with the three derived percentage columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedRow {
    pub label: String,
    pub prior: f64,
    pub current: f64,
    pub growth_pct: f64,
    pub prior_share_pct: f64,
    pub current_share_pct: f64,
}

/// The derived statement. Same row count and order as the source table;
/// every row carries all three derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedTable {
    pub rows: Vec<DerivedRow>,
}

impl DerivedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A liquidity ratio for one period. `Unavailable` is the soft-fail
/// sentinel used when an optional anchor is missing or its liabilities
/// value is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RatioValue {
    Available(f64),
    Unavailable,
}

impl RatioValue {
    pub fn value(self) -> Option<f64> {
        match self {
            RatioValue::Available(v) => Some(v),
            RatioValue::Unavailable => None,
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, RatioValue::Available(_))
    }
}

/// Current ratio (current assets / current liabilities) for both periods.
/// The two periods degrade independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentRatio {
    pub prior: RatioValue,
    pub current: RatioValue,
}

impl CurrentRatio {
    pub const UNAVAILABLE: CurrentRatio = CurrentRatio {
        prior: RatioValue::Unavailable,
        current: RatioValue::Unavailable,
    };

    /// Change between the two periods, available only when both are.
    pub fn delta(&self) -> Option<f64> {
        match (self.current.value(), self.prior.value()) {
            (Some(cur), Some(prev)) => Some(cur - prev),
            _ => None,
        }
    }
}

/// Complete output of one derivation: the derived table plus the scalar
/// liquidity metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementAnalysis {
    pub table: DerivedTable,
    pub current_ratio: CurrentRatio,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_delta() {
        let ratio = CurrentRatio {
            prior: RatioValue::Available(2.0),
            current: RatioValue::Available(3.0),
        };
        assert_eq!(ratio.delta(), Some(1.0));

        let degraded = CurrentRatio {
            prior: RatioValue::Unavailable,
            current: RatioValue::Available(3.0),
        };
        assert_eq!(degraded.delta(), None);
        assert!(degraded.current.is_available());
        assert!(!degraded.prior.is_available());
    }

    #[test]
    fn test_serialization_round_trip() {
        let table = StatementTable::new(vec![
            LineItem::new("TOTAL ASSETS", 100.0, 150.0),
            LineItem::new("Cash", 40.0, 90.0),
        ]);

        let json = serde_json::to_string(&table).unwrap();
        let deserialized: StatementTable = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, table);
        assert_eq!(deserialized.len(), 2);
    }
}
