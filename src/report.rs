//! Formatting for the display collaborator and for the text payload sent
//! to the AI collaborator: raw values with integer thousands grouping,
//! derived columns with two decimal places, `N/A` for unavailable ratios.

use crate::schema::{CurrentRatio, RatioValue, StatementAnalysis};
use std::fmt::Write;

/// Round to an integer and group thousands with commas, e.g. `-1234567.8`
/// becomes `-1,234,568`.
pub fn format_grouped(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Two-decimal percentage, e.g. `125.0` becomes `125.00%`.
pub fn format_pct(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Two-decimal ratio or `N/A`.
pub fn format_ratio(value: RatioValue) -> String {
    match value {
        RatioValue::Available(v) => format!("{:.2}", v),
        RatioValue::Unavailable => "N/A".to_string(),
    }
}

/// Render the liquidity metrics as three summary lines.
pub fn render_ratio_summary(ratio: &CurrentRatio) -> String {
    let delta = match ratio.delta() {
        Some(d) => format!("{:+.2}", d),
        None => "N/A".to_string(),
    };

    format!(
        "Current ratio (prior period): {}\n\
         Current ratio (current period): {}\n\
         Current ratio change: {}",
        format_ratio(ratio.prior),
        format_ratio(ratio.current),
        delta
    )
}

/// Render the full analysis as a markdown table followed by the liquidity
/// summary. This is the exact serialization forwarded to the AI
/// collaborator and is also suitable for terminal display.
pub fn render_markdown(analysis: &StatementAnalysis) -> String {
    let mut out = String::new();

    out.push_str(
        "| Line item | Prior | Current | Growth % | Prior share % | Current share % |\n",
    );
    out.push_str("|---|---|---|---|---|---|\n");

    for row in &analysis.table.rows {
        // Pipes inside labels would break the table layout.
        let label = row.label.replace('|', "/");
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} |",
            label,
            format_grouped(row.prior),
            format_grouped(row.current),
            format_pct(row.growth_pct),
            format_pct(row.prior_share_pct),
            format_pct(row.current_share_pct),
        );
    }

    out.push('\n');
    out.push_str(&render_ratio_summary(&analysis.current_ratio));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{derive_statement, AnchorConfig};
    use crate::schema::{LineItem, StatementTable};

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(1234567.8), "1,234,568");
        assert_eq!(format_grouped(-1234567.8), "-1,234,568");
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(125.0), "125.00%");
        assert_eq!(format_pct(-3.456), "-3.46%");
    }

    #[test]
    fn test_render_markdown_contains_all_rows() {
        let table = StatementTable::new(vec![
            LineItem::new("TOTAL ASSETS", 100_000.0, 150_000.0),
            LineItem::new("CURRENT ASSETS", 40_000.0, 90_000.0),
            LineItem::new("CURRENT LIABILITIES", 20_000.0, 30_000.0),
        ]);
        let analysis = derive_statement(&table, &AnchorConfig::default()).unwrap();

        let rendered = render_markdown(&analysis);
        assert!(rendered.contains("| TOTAL ASSETS | 100,000 | 150,000 |"));
        assert!(rendered.contains("125.00%"));
        assert!(rendered.contains("Current ratio (current period): 3.00"));
        assert!(rendered.contains("Current ratio change: +1.00"));
    }

    #[test]
    fn test_render_ratio_summary_unavailable() {
        let summary = render_ratio_summary(&CurrentRatio::UNAVAILABLE);
        assert!(summary.contains("Current ratio (prior period): N/A"));
        assert!(summary.contains("Current ratio change: N/A"));
    }
}
