//! Plain-text wage report, ready to paste into a message.

use crate::models::wage_summary::WageSummary;
use crate::utils::formatting::{fmt_hours, fmt_money};

const RULE: &str = "───────────";

/// One line per employee with hours in the range, then the grand total.
pub fn wage_report_text(summary: &WageSummary, label: &str, currency: &str) -> String {
    let mut lines = vec![format!("📋 Wage report: {}", label), RULE.to_string()];

    for row in summary.rows.iter().filter(|r| r.hours > 0.0) {
        lines.push(format!(
            "{}: {} → {}",
            row.name,
            fmt_hours(row.hours),
            fmt_money(currency, row.wage)
        ));
    }

    lines.push(RULE.to_string());
    lines.push(format!(
        "Total: {} → {}",
        fmt_hours(summary.total_hours),
        fmt_money(currency, summary.total_wage)
    ));

    lines.join("\n")
}
