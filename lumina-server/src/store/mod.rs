//! Record Store
//!
//! Repository abstraction over the three base tables (units, PICs, sales).
//! Reads are pure snapshots; the single mutation path is the append-only
//! booking entry. The default backend is in-memory, seeded from CSV; the
//! trait keeps aggregation logic independent of the backing store.

mod memory;
mod seed;

pub use memory::InMemoryStore;
pub use seed::{SeedData, SeedError};

use shared::models::{Pic, PicRef, Sale, SaleStatus, Unit};

/// A sale row awaiting insertion; ids, the shared `sales_id` and timestamps
/// are assigned by the store at append time.
#[derive(Debug, Clone)]
pub struct SaleDraft {
    pub group_name: String,
    pub pic: PicRef,
    pub check_in: String,
    pub check_out: String,
    pub pax: i32,
    pub status: SaleStatus,
    pub unit_id: i64,
    pub amount: f64,
    pub dp_amount: f64,
}

/// Read/append access to the base tables.
///
/// All reads return point-in-time snapshots; derived report structures are
/// recomputed from them per query and never written back.
pub trait RecordStore: Send + Sync {
    /// Room inventory (immutable reference data)
    fn units(&self) -> Vec<Unit>;

    /// Salesperson directory (immutable reference data)
    fn pics(&self) -> Vec<Pic>;

    /// All reservation rows, in insertion order
    fn sales(&self) -> Vec<Sale>;

    /// Append one booking as one row per unit. Every row receives a fresh
    /// incrementing `id`, the whole batch shares one new `sales_id`
    /// (max existing + 1), and timestamps are stamped from the clock.
    /// Returns the stored rows.
    fn append_booking(&self, rows: Vec<SaleDraft>) -> Vec<Sale>;
}
