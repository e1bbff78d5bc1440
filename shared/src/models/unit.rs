//! Unit Model
//!
//! A bookable room/bungalow category instance. Multiple physical units share
//! a name; all units sharing a name constitute that room type's inventory.

use serde::{Deserialize, Serialize};

/// A single bookable unit (room or bungalow)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: i64,
    /// Room-type label; doubles as the capacity-grouping key
    pub name: String,
    /// Human-readable room number/letter (not guaranteed unique or numeric)
    pub code: String,
    /// Number of rooms inside the unit
    pub rooms: i32,
    /// Guest capacity
    pub pax: i32,
    /// Nightly price
    pub price: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl Unit {
    /// Room type of this unit. The display name IS the type; there is no
    /// separate dimension.
    pub fn room_type(&self) -> &str {
        &self.name
    }
}
