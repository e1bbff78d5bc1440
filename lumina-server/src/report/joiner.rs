//! Sales Report Joiner
//!
//! Denormalizes each sale against the unit and PIC tables. Unresolved
//! references substitute placeholders rather than erroring; the output
//! preserves sale order and is recomputed on every read.

use std::collections::HashMap;

use shared::models::{Pic, Sale, SalesReportItem, Unit};

use crate::utils::time::stay_nights;

/// Join the sales table against units and PICs, preserving sale order.
pub fn join_sales_report(sales: &[Sale], units: &[Unit], pics: &[Pic]) -> Vec<SalesReportItem> {
    let unit_names: HashMap<i64, &str> = units.iter().map(|u| (u.id, u.name.as_str())).collect();
    let pic_names: HashMap<i64, &str> = pics.iter().map(|p| (p.id, p.name.as_str())).collect();

    sales
        .iter()
        .map(|sale| {
            let unit_name = match unit_names.get(&sale.unit_id) {
                Some(name) => (*name).to_string(),
                None => format!("Unknown Unit ({})", sale.unit_id),
            };

            // Resolve via the PIC directory; fall back to the raw reference
            // rendered as text (free-text entries and stale ids alike).
            let pic_name = sale
                .pic
                .id()
                .and_then(|id| pic_names.get(&id))
                .map(|name| (*name).to_string())
                .unwrap_or_else(|| sale.pic.to_string());

            SalesReportItem {
                id: sale.id,
                sales_id: sale.sales_id,
                group_name: sale.group_name.clone(),
                pic: sale.pic.clone(),
                pic_name,
                check_in: sale.check_in.clone(),
                check_out: sale.check_out.clone(),
                pax: sale.pax,
                status: sale.status,
                unit_id: sale.unit_id,
                unit_name,
                amount: sale.amount,
                dp_amount: sale.dp_amount,
                duration_nights: stay_nights(&sale.check_in, &sale.check_out),
                created_at: sale.created_at.clone(),
                updated_at: sale.updated_at.clone(),
            }
        })
        .collect()
}
