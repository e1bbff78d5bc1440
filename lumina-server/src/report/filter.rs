//! Filter / Sort Engine
//!
//! Search, room-type and check-in date predicates over the report item list,
//! plus a single-key stable sort. Sortable fields are an explicit enum with
//! typed comparators; there is no by-name field reflection.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use shared::models::SalesReportItem;

/// Filter criteria; all predicates must pass for an item to be kept.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    /// Case-insensitive needle matched against PIC name, group name, unit
    /// name, or the sales id rendered as text. Empty matches everything.
    pub search: String,
    /// Resolved room types to keep; empty means no restriction.
    pub room_types: Vec<String>,
    /// Lower check-in bound (inclusive, ISO date compared lexically)
    pub start_date: Option<String>,
    /// Upper check-in bound (inclusive)
    pub end_date: Option<String>,
}

/// Sortable columns of the report table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    PicName,
    GroupName,
    UnitName,
    CheckIn,
    CheckOut,
    Amount,
    DpAmount,
    DurationNights,
    Pax,
    SalesId,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// An active sort: one key, one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    /// Column-header click semantics: clicking the active key flips the
    /// direction, switching keys resets to ascending.
    pub fn toggle(current: Option<SortSpec>, clicked: SortField) -> SortSpec {
        match current {
            Some(spec) if spec.field == clicked && spec.direction == SortDirection::Asc => {
                SortSpec {
                    field: clicked,
                    direction: SortDirection::Desc,
                }
            }
            _ => SortSpec::ascending(clicked),
        }
    }
}

impl SortField {
    /// Typed comparison of two items on this column. Numeric columns compare
    /// numerically, text and ISO-date columns lexically.
    fn compare(&self, a: &SalesReportItem, b: &SalesReportItem) -> Ordering {
        match self {
            SortField::PicName => a.pic_name.cmp(&b.pic_name),
            SortField::GroupName => a.group_name.cmp(&b.group_name),
            SortField::UnitName => a.unit_name.cmp(&b.unit_name),
            SortField::CheckIn => a.check_in.cmp(&b.check_in),
            SortField::CheckOut => a.check_out.cmp(&b.check_out),
            SortField::Amount => a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal),
            SortField::DpAmount => a
                .dp_amount
                .partial_cmp(&b.dp_amount)
                .unwrap_or(Ordering::Equal),
            SortField::DurationNights => a.duration_nights.cmp(&b.duration_nights),
            SortField::Pax => a.pax.cmp(&b.pax),
            SortField::SalesId => a.sales_id.cmp(&b.sales_id),
            SortField::Status => a.status.as_str().cmp(b.status.as_str()),
        }
    }
}

fn matches(item: &SalesReportItem, spec: &FilterSpec) -> bool {
    let needle = spec.search.to_lowercase();
    let matches_search = needle.is_empty()
        || item.pic_name.to_lowercase().contains(&needle)
        || item.group_name.to_lowercase().contains(&needle)
        || item.unit_name.to_lowercase().contains(&needle)
        || item.sales_id.to_string().contains(&spec.search);

    let matches_room_type =
        spec.room_types.is_empty() || spec.room_types.iter().any(|t| t == item.room_type());

    // ISO dates sort lexically = chronologically
    let matches_start = spec
        .start_date
        .as_deref()
        .is_none_or(|start| item.check_in.as_str() >= start);
    let matches_end = spec
        .end_date
        .as_deref()
        .is_none_or(|end| item.check_in.as_str() <= end);

    matches_search && matches_room_type && matches_start && matches_end
}

/// Apply the filter predicates, then at most one sort key. The sort is
/// stable: equal values keep their relative input order.
pub fn apply_filters(
    items: &[SalesReportItem],
    spec: &FilterSpec,
    sort: Option<SortSpec>,
) -> Vec<SalesReportItem> {
    let mut filtered: Vec<SalesReportItem> = items
        .iter()
        .filter(|item| matches(item, spec))
        .cloned()
        .collect();

    if let Some(SortSpec { field, direction }) = sort {
        filtered.sort_by(|a, b| {
            let ord = field.compare(a, b);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }

    filtered
}
