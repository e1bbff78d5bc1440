//! Sale Model
//!
//! A raw reservation row. One row per unit booked; multi-unit bookings share
//! a `sales_id`. Dates are ISO `YYYY-MM-DD` strings; `check_out` is the
//! exclusive end of the stay.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::PicRef;

/// Payment status of a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SaleStatus {
    /// Down payment received
    Dp,
    /// Fully paid
    Paid,
    /// Cancelled
    Cancel,
}

impl SaleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Dp => "DP",
            SaleStatus::Paid => "PAID",
            SaleStatus::Cancel => "CANCEL",
        }
    }
}

impl std::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown sale status: {0}")]
pub struct StatusParseError(pub String);

impl FromStr for SaleStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DP" => Ok(SaleStatus::Dp),
            "PAID" => Ok(SaleStatus::Paid),
            "CANCEL" => Ok(SaleStatus::Cancel),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

/// A raw reservation
///
/// Invariants (`check_out >= check_in`, `amount >= dp_amount >= 0`) are
/// enforced at the entry boundary; rows loaded from the data source are
/// tolerated as-is and clamped downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    /// Groups the unit-rows of one multi-unit booking (NOT unique per row)
    pub sales_id: i64,
    /// Guest or group label
    pub group_name: String,
    /// Salesperson reference; polymorphic, see [`PicRef`]
    pub pic: PicRef,
    /// ISO date, inclusive start of stay
    pub check_in: String,
    /// ISO date, exclusive end of stay
    pub check_out: String,
    pub pax: i32,
    pub status: SaleStatus,
    pub unit_id: i64,
    /// Total revenue for this unit for this stay
    pub amount: f64,
    /// Down payment (<= amount)
    pub dp_amount: f64,
    pub created_at: String,
    pub updated_at: String,
}
