//! In-memory Record Store
//!
//! Reference tables are immutable after construction; the sales table sits
//! behind a `parking_lot::RwLock` so the append-only booking path is
//! single-writer while reads stay lock-cheap snapshots.

use parking_lot::RwLock;
use shared::models::{Pic, Sale, Unit};
use shared::util::now_timestamp;

use super::{RecordStore, SaleDraft, SeedData};

/// In-memory store over the parsed seed tables
pub struct InMemoryStore {
    units: Vec<Unit>,
    pics: Vec<Pic>,
    sales: RwLock<Vec<Sale>>,
}

impl InMemoryStore {
    pub fn new(seed: SeedData) -> Self {
        Self {
            units: seed.units,
            pics: seed.pics,
            sales: RwLock::new(seed.sales),
        }
    }
}

impl RecordStore for InMemoryStore {
    fn units(&self) -> Vec<Unit> {
        self.units.clone()
    }

    fn pics(&self) -> Vec<Pic> {
        self.pics.clone()
    }

    fn sales(&self) -> Vec<Sale> {
        self.sales.read().clone()
    }

    fn append_booking(&self, rows: Vec<SaleDraft>) -> Vec<Sale> {
        let mut sales = self.sales.write();

        // Fresh ids under the write lock: per-row ids keep incrementing,
        // the whole batch shares one new sales_id.
        let mut next_id = sales.iter().map(|s| s.id).max().unwrap_or(0);
        let batch_sales_id = sales.iter().map(|s| s.sales_id).max().unwrap_or(0) + 1;
        let stamp = now_timestamp();

        let stored: Vec<Sale> = rows
            .into_iter()
            .map(|draft| {
                next_id += 1;
                Sale {
                    id: next_id,
                    sales_id: batch_sales_id,
                    group_name: draft.group_name,
                    pic: draft.pic,
                    check_in: draft.check_in,
                    check_out: draft.check_out,
                    pax: draft.pax,
                    status: draft.status,
                    unit_id: draft.unit_id,
                    amount: draft.amount,
                    dp_amount: draft.dp_amount,
                    created_at: stamp.clone(),
                    updated_at: stamp.clone(),
                }
            })
            .collect();

        sales.extend(stored.iter().cloned());
        stored
    }
}
