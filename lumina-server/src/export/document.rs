//! Report document payload
//!
//! The structured content a PDF renderer consumes: headline cards plus the
//! in-window transaction table. Layout, fonts and drawing are the renderer's
//! concern; this module fixes the content.

use serde::Serialize;
use shared::models::{DashboardSummary, SalesReportItem};

/// One KPI card of the document header
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCard {
    pub title: String,
    pub value: String,
    /// Secondary line, e.g. the surplus/shortfall label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
}

/// Full printable document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    pub title: String,
    /// "start to end" of the active window
    pub period: String,
    pub cards: Vec<DocumentCard>,
    pub table_columns: Vec<String>,
    pub table_rows: Vec<Vec<String>>,
    pub footer: String,
}

/// Millions with one decimal, the card display format
fn millions(value: f64) -> String {
    format!("Rp {:.1}M", value / 1_000_000.0)
}

/// Build the dashboard document for a window.
///
/// `items` is the full report list; the table keeps rows checked in inside
/// the window, sorted by check-in date (stable, so input order breaks ties).
pub fn build_report_document(
    summary: &DashboardSummary,
    items: &[SalesReportItem],
    start: &str,
    end: &str,
) -> ReportDocument {
    let variance = summary.revenue_variance;
    let cards = vec![
        DocumentCard {
            title: "Total Revenue".to_string(),
            value: millions(summary.total_revenue),
            sub: None,
        },
        DocumentCard {
            title: "Avg Occupancy".to_string(),
            value: format!("{:.1}%", summary.average_occupancy),
            sub: None,
        },
        DocumentCard {
            title: "Target Revenue".to_string(),
            value: millions(summary.total_target_revenue),
            sub: None,
        },
        DocumentCard {
            title: "Revenue Status".to_string(),
            value: if variance >= 0.0 {
                format!("+{}", millions(variance))
            } else {
                millions(variance)
            },
            sub: Some(if variance >= 0.0 { "Surplus" } else { "Shortfall" }.to_string()),
        },
        DocumentCard {
            title: "Total Bookings".to_string(),
            value: summary.total_bookings.to_string(),
            sub: None,
        },
    ];

    let mut in_window: Vec<&SalesReportItem> = items
        .iter()
        .filter(|i| i.check_in.as_str() >= start && i.check_in.as_str() <= end)
        .collect();
    in_window.sort_by(|a, b| a.check_in.cmp(&b.check_in));

    let table_rows = in_window
        .iter()
        .map(|item| {
            vec![
                item.pic_name.clone(),
                item.group_name.clone(),
                item.unit_name.clone(),
                item.check_in.clone(),
                item.check_out.clone(),
                format!("Rp {}", item.amount),
                item.status.to_string(),
            ]
        })
        .collect();

    ReportDocument {
        title: "Lembah Hijau Sales Performances - Dashboard".to_string(),
        period: format!("{} to {}", start, end),
        cards,
        table_columns: ["Sales Name", "Group / Guest", "Unit", "Check In", "Check Out", "Amount", "Status"]
            .into_iter()
            .map(str::to_string)
            .collect(),
        table_rows,
        footer: "Lembah Hijau Sales Performances".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{PicRef, SaleStatus};

    fn summary(variance: f64) -> DashboardSummary {
        DashboardSummary {
            total_revenue: 57_900_000.0,
            average_occupancy: 3.2,
            top_performing_room_type: "Bungalow 3 kamar Deluxe Twin".to_string(),
            total_bookings: 5,
            total_target_revenue: 57_900_000.0 - variance,
            revenue_variance: variance,
        }
    }

    fn item(check_in: &str) -> SalesReportItem {
        SalesReportItem {
            id: 1,
            sales_id: 2,
            group_name: "BRI".to_string(),
            pic: PicRef::Label("Raka".to_string()),
            pic_name: "Raka".to_string(),
            check_in: check_in.to_string(),
            check_out: "2025-12-01".to_string(),
            pax: 50,
            status: SaleStatus::Dp,
            unit_id: 85,
            unit_name: "Bungalow 3 kamar Deluxe Twin".to_string(),
            amount: 55_000_000.0,
            dp_amount: 10_000_000.0,
            duration_nights: 3,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_variance_sign_labels() {
        let doc = build_report_document(&summary(1_000_000.0), &[], "2025-11-01", "2025-11-30");
        let status = &doc.cards[3];
        assert!(status.value.starts_with('+'));
        assert_eq!(status.sub.as_deref(), Some("Surplus"));

        let doc = build_report_document(&summary(-1_000_000.0), &[], "2025-11-01", "2025-11-30");
        assert_eq!(doc.cards[3].sub.as_deref(), Some("Shortfall"));
    }

    #[test]
    fn test_table_restricted_to_window_and_sorted() {
        let items = vec![item("2025-12-05"), item("2025-11-28"), item("2025-11-02")];
        let doc = build_report_document(&summary(0.0), &items, "2025-11-01", "2025-11-30");
        assert_eq!(doc.table_rows.len(), 2);
        assert_eq!(doc.table_rows[0][3], "2025-11-02");
        assert_eq!(doc.table_rows[1][3], "2025-11-28");
        assert_eq!(doc.table_columns.len(), 7);
    }
}
