//! Transaction Entry
//!
//! The one mutation path into the record store: a booking form covering one
//! or more units, validated up front and split into one sale row per unit.
//! Money splits use rust_decimal for exact 2-dp rounding; pax splits by
//! ceiling. Validation failures reject the request before any mutation.

use rust_decimal::prelude::*;
use serde::Deserialize;
use shared::models::{PicRef, SaleStatus};

use crate::store::SaleDraft;
use crate::utils::time::require_date;
use crate::utils::validation::{MAX_NAME_LEN, validate_amount, validate_required_text};
use crate::utils::{AppError, AppResult};

/// Rounding for split monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// A new booking as submitted by the entry form
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub group_name: String,
    /// Selected PIC, if any; absent entries keep the raw zero reference
    pub pic_id: Option<i64>,
    /// Units covered by this booking (at least one)
    pub unit_ids: Vec<i64>,
    pub check_in: String,
    pub check_out: String,
    #[serde(default)]
    pub pax: i32,
    pub amount: f64,
    #[serde(default)]
    pub dp_amount: f64,
    pub status: SaleStatus,
}

impl BookingRequest {
    /// Reject malformed bookings before anything is written.
    pub fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.group_name, "group_name", MAX_NAME_LEN)?;

        if self.unit_ids.is_empty() {
            return Err(AppError::validation("At least one unit must be selected"));
        }

        let check_in = require_date(&self.check_in, "check_in")?;
        let check_out = require_date(&self.check_out, "check_out")?;
        if check_out < check_in {
            return Err(AppError::validation(
                "Check-out date cannot be before check-in date",
            ));
        }

        validate_amount(self.amount, "amount")?;
        validate_amount(self.dp_amount, "dp_amount")?;
        if self.amount == 0.0 {
            return Err(AppError::validation("amount must not be zero"));
        }
        if self.dp_amount > self.amount {
            return Err(AppError::validation(
                "DP amount cannot be greater than total amount",
            ));
        }

        Ok(())
    }
}

/// Split a validated booking into one draft row per selected unit.
///
/// Amounts divide evenly (2-dp half-up), pax by ceiling; every row carries
/// the same dates, status and PIC reference. The store assigns ids and the
/// shared sales_id at append time.
pub fn split_booking(request: &BookingRequest) -> Vec<SaleDraft> {
    let unit_count = request.unit_ids.len().max(1);
    let n = Decimal::from(unit_count as u64);

    let amount_per_unit = to_f64(to_decimal(request.amount) / n);
    let dp_per_unit = to_f64(to_decimal(request.dp_amount) / n);
    let pax_per_unit = (request.pax as u32).div_ceil(unit_count as u32) as i32;

    let pic = match request.pic_id {
        Some(id) => PicRef::Id(id),
        None => PicRef::Id(0),
    };

    request
        .unit_ids
        .iter()
        .map(|&unit_id| SaleDraft {
            group_name: request.group_name.clone(),
            pic: pic.clone(),
            check_in: request.check_in.clone(),
            check_out: request.check_out.clone(),
            pax: pax_per_unit,
            status: request.status,
            unit_id,
            amount: amount_per_unit,
            dp_amount: dp_per_unit,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request() -> BookingRequest {
        BookingRequest {
            group_name: "Family Gathering".to_string(),
            pic_id: Some(1),
            unit_ids: vec![1, 2],
            check_in: "2025-12-01".to_string(),
            check_out: "2025-12-03".to_string(),
            pax: 5,
            amount: 1_000_000.0,
            dp_amount: 400_000.0,
            status: SaleStatus::Dp,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(make_request().validate().is_ok());
    }

    #[test]
    fn test_rejects_missing_fields() {
        let mut req = make_request();
        req.group_name = "  ".to_string();
        assert!(req.validate().is_err());

        let mut req = make_request();
        req.unit_ids.clear();
        assert!(req.validate().is_err());

        let mut req = make_request();
        req.amount = 0.0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_dates() {
        let mut req = make_request();
        req.check_out = "2025-11-30".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_equal_dates_are_allowed() {
        let mut req = make_request();
        req.check_out = req.check_in.clone();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_rejects_dp_above_amount() {
        let mut req = make_request();
        req.dp_amount = 2_000_000.0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_split_divides_money_evenly_and_pax_by_ceiling() {
        let drafts = split_booking(&make_request());
        assert_eq!(drafts.len(), 2);
        for d in &drafts {
            assert_eq!(d.amount, 500_000.0);
            assert_eq!(d.dp_amount, 200_000.0);
            assert_eq!(d.pax, 3); // ceil(5 / 2)
            assert_eq!(d.pic, PicRef::Id(1));
        }
        assert_eq!(drafts[0].unit_id, 1);
        assert_eq!(drafts[1].unit_id, 2);
    }

    #[test]
    fn test_split_rounds_to_two_decimals() {
        let mut req = make_request();
        req.unit_ids = vec![1, 2, 3];
        req.amount = 1_000_000.0;
        let drafts = split_booking(&req);
        assert_eq!(drafts[0].amount, 333_333.33);
    }

    #[test]
    fn test_missing_pic_keeps_zero_reference() {
        let mut req = make_request();
        req.pic_id = None;
        let drafts = split_booking(&req);
        assert_eq!(drafts[0].pic, PicRef::Id(0));
    }
}
