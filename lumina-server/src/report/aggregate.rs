//! Aggregator
//!
//! Room-type breakdowns over per-night records, plus the reservation-amount
//! groupings (Top Groups, Sales Trend) and the occupancy trend. Two distinct
//! bases are in play: occupancy counts sold room-nights from the daily
//! expansion, while Top Groups and the Sales Trend sum the un-expanded
//! reservation amount keyed by check-in date.

use std::collections::HashMap;

use shared::models::{
    AggregatedBucket, DailyNightRecord, OccupancyTrendPoint, SalesReportItem, SalesTrendPoint,
    TopGroup, Unit,
};

use crate::utils::time::window_dates;

/// Top Groups ranking depth
const TOP_GROUPS_LIMIT: usize = 10;

/// Distinct room types (unit names), ascending.
pub fn room_types(units: &[Unit]) -> Vec<String> {
    let mut types: Vec<String> = units.iter().map(|u| u.name.clone()).collect();
    types.sort();
    types.dedup();
    types
}

/// Unit count per room type: the capacity-grouping denominator.
pub fn capacity_by_type(units: &[Unit]) -> HashMap<String, i64> {
    let mut capacity = HashMap::new();
    for unit in units {
        *capacity.entry(unit.name.clone()).or_insert(0) += 1;
    }
    capacity
}

/// Room-type breakdown for a window (Contract A).
///
/// One bucket per known room type, zero-activity types included. Night
/// records whose room type matches no unit name (unresolved placeholders)
/// are ignored. `total_bookings` carries sold room-nights. The result is
/// stable-sorted descending by revenue, so zero buckets trail in name order.
pub fn aggregate_by_room_type(
    records: &[DailyNightRecord],
    units: &[Unit],
    window_days: i64,
) -> Vec<AggregatedBucket> {
    let types = room_types(units);
    let capacity = capacity_by_type(units);
    let index: HashMap<&str, usize> = types
        .iter()
        .enumerate()
        .map(|(i, t)| (t.as_str(), i))
        .collect();

    let mut revenue = vec![0.0_f64; types.len()];
    let mut sold_nights = vec![0_i64; types.len()];
    for record in records {
        if let Some(&i) = index.get(record.room_type.as_str()) {
            revenue[i] += record.revenue;
            sold_nights[i] += 1;
        }
    }

    let mut buckets: Vec<AggregatedBucket> = types
        .iter()
        .enumerate()
        .map(|(i, room_type)| {
            let type_capacity = capacity.get(room_type).copied().unwrap_or(0) * window_days;
            let occupancy = if type_capacity > 0 {
                sold_nights[i] as f64 / type_capacity as f64 * 100.0
            } else {
                0.0
            };
            AggregatedBucket {
                room_type: room_type.clone(),
                total_revenue: revenue[i],
                average_occupancy: occupancy,
                total_bookings: sold_nights[i],
            }
        })
        .collect();

    buckets.sort_by(|a, b| {
        b.total_revenue
            .partial_cmp(&a.total_revenue)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    buckets
}

/// Items whose check-in falls inside the inclusive window (lexical ISO
/// comparison, the grouping basis of Contract B).
fn checked_in_within<'a>(
    items: &'a [SalesReportItem],
    start: &str,
    end: &str,
) -> impl Iterator<Item = &'a SalesReportItem> {
    let start = start.to_string();
    let end = end.to_string();
    items
        .iter()
        .filter(move |item| item.check_in >= start && item.check_in <= end)
}

/// Top guest groups by summed reservation amount (Contract B).
///
/// First-seen key order is preserved under the stable descending sort, then
/// the ranking is cut to the top 10.
pub fn top_groups(items: &[SalesReportItem], start: &str, end: &str) -> Vec<TopGroup> {
    let mut order: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<TopGroup> = Vec::new();

    for item in checked_in_within(items, start, end) {
        match order.get(item.group_name.as_str()) {
            Some(&i) => groups[i].value += item.amount,
            None => {
                order.insert(item.group_name.as_str(), groups.len());
                groups.push(TopGroup {
                    name: item.group_name.clone(),
                    value: item.amount,
                });
            }
        }
    }

    groups.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    groups.truncate(TOP_GROUPS_LIMIT);
    groups
}

/// Reservation amount per check-in day, every window day present (Contract B).
///
/// Days without sales carry 0; the result is ascending and empty when
/// start > end or either bound is malformed.
pub fn sales_trend(items: &[SalesReportItem], start: &str, end: &str) -> Vec<SalesTrendPoint> {
    let mut by_day: HashMap<String, f64> = HashMap::new();
    for item in checked_in_within(items, start, end) {
        *by_day.entry(item.check_in.clone()).or_insert(0.0) += item.amount;
    }

    window_dates(start, end)
        .into_iter()
        .map(|day| {
            let date = day.to_string();
            let amount = by_day.get(&date).copied().unwrap_or(0.0);
            SalesTrendPoint { date, amount }
        })
        .collect()
}

/// Occupancy percentage per window day, optionally restricted to one room
/// type. Shares the Sales-Trend day axis so gaps fill identically; the
/// denominator is the restricted type's unit count or the total inventory,
/// and zero capacity yields 0% rather than a fault.
pub fn occupancy_trend(
    records: &[DailyNightRecord],
    units: &[Unit],
    start: &str,
    end: &str,
    room_type: Option<&str>,
) -> Vec<OccupancyTrendPoint> {
    let capacity = match room_type {
        Some(t) => capacity_by_type(units).get(t).copied().unwrap_or(0),
        None => units.len() as i64,
    };

    let mut sold_by_date: HashMap<&str, i64> = HashMap::new();
    for record in records {
        if room_type.is_none_or(|t| record.room_type == t) {
            *sold_by_date.entry(record.date.as_str()).or_insert(0) += 1;
        }
    }

    window_dates(start, end)
        .into_iter()
        .map(|day| {
            let date = day.to_string();
            let sold = sold_by_date.get(date.as_str()).copied().unwrap_or(0);
            let avg_occ = if capacity > 0 {
                sold as f64 / capacity as f64 * 100.0
            } else {
                0.0
            };
            OccupancyTrendPoint { date, avg_occ }
        })
        .collect()
}
