//! Report rows for the batch CSV output.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::waybill::DocumentSummary;

/// One CSV row: filename, MAWB-or-empty, total-or-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub filename: String,
    pub mawb: String,
    pub total: String,
}

impl ReportRow {
    fn new(filename: &str, mawb: impl Into<String>, total: impl Into<String>) -> Self {
        Self {
            filename: filename.to_string(),
            mawb: mawb.into(),
            total: total.into(),
        }
    }
}

/// Build the report rows for one scanned document.
///
/// With at least one MAWB and a numeric total, the total is divided evenly
/// across the MAWBs and each row carries its share formatted to exactly two
/// decimals. A non-numeric total leaves the MAWB rows' total cells empty but
/// is passed through verbatim on the single no-MAWB row. A document without
/// MAWBs yields exactly one row with an empty MAWB cell.
pub fn rows_for_document(filename: &str, summary: &DocumentSummary) -> Vec<ReportRow> {
    let total_text = summary.total.as_ref().map(|t| t.amount.as_str());

    if summary.mawbs.is_empty() {
        return vec![ReportRow::new(filename, "", total_text.unwrap_or(""))];
    }

    let share = total_text
        .and_then(|t| Decimal::from_str(t).ok())
        .map(|total| {
            let share = total / Decimal::from(summary.mawbs.len() as u64);
            format!("{:.2}", share.round_dp(2))
        })
        .unwrap_or_default();

    summary
        .mawbs
        .iter()
        .map(|mawb| ReportRow::new(filename, mawb.clone(), share.clone()))
        .collect()
}
