//! CSV seed data loading
//!
//! The base tables ship as CSV (the export format of the property-management
//! system). The embedded snapshot covers November 2025; `DATA_DIR` points the
//! loader at replacement files with the same headers.
//!
//! | File | Header |
//! |------|--------|
//! | `units.csv` | id,name,code,rooms,pax,price,created_at,updated_at |
//! | `pics.csv` | id,name,created_at,updated_at |
//! | `sales.csv` | id,group,pic,check_in,check_out,pax,sales_id,status,unit_id,amount,dp_amount,created_at,updated_at |

use std::path::Path;

use serde::Deserialize;
use shared::models::{Pic, PicRef, Sale, SaleStatus, StatusParseError, Unit};

const UNITS_CSV: &str = include_str!("../../data/units.csv");
const PICS_CSV: &str = include_str!("../../data/pics.csv");
const SALES_CSV: &str = include_str!("../../data/sales.csv");

/// Seed loading errors
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Status(#[from] StatusParseError),
}

/// The three parsed base tables
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub units: Vec<Unit>,
    pub pics: Vec<Pic>,
    pub sales: Vec<Sale>,
}

/// Raw PIC row; the directory model keeps only id + name
#[derive(Debug, Deserialize)]
struct PicRow {
    id: i64,
    name: String,
    #[allow(dead_code)]
    created_at: String,
    #[allow(dead_code)]
    updated_at: String,
}

/// Raw sale row; `group` maps to `group_name` and `pic` stays textual until
/// classified into a [`PicRef`]
#[derive(Debug, Deserialize)]
struct SaleRow {
    id: i64,
    group: String,
    pic: String,
    check_in: String,
    check_out: String,
    pax: i32,
    sales_id: i64,
    status: String,
    unit_id: i64,
    amount: f64,
    dp_amount: f64,
    created_at: String,
    updated_at: String,
}

impl SaleRow {
    fn into_sale(self) -> Result<Sale, SeedError> {
        Ok(Sale {
            id: self.id,
            sales_id: self.sales_id,
            group_name: self.group,
            pic: PicRef::from_raw(&self.pic),
            check_in: self.check_in,
            check_out: self.check_out,
            pax: self.pax,
            status: self.status.parse::<SaleStatus>()?,
            unit_id: self.unit_id,
            amount: self.amount,
            dp_amount: self.dp_amount,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl SeedData {
    /// Parse the embedded CSV snapshot.
    pub fn load_embedded() -> Result<Self, SeedError> {
        Self::from_csv(UNITS_CSV, PICS_CSV, SALES_CSV)
    }

    /// Parse `units.csv`, `pics.csv` and `sales.csv` from a directory.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, SeedError> {
        let dir = dir.as_ref();
        let read = |name: &str| std::fs::read_to_string(dir.join(name));
        Self::from_csv(&read("units.csv")?, &read("pics.csv")?, &read("sales.csv")?)
    }

    fn from_csv(units: &str, pics: &str, sales: &str) -> Result<Self, SeedError> {
        let units: Vec<Unit> = parse_table(units)?;
        let pics = parse_table::<PicRow>(pics)?
            .into_iter()
            .map(|row| Pic {
                id: row.id,
                name: row.name,
            })
            .collect();
        let sales = parse_table::<SaleRow>(sales)?
            .into_iter()
            .map(SaleRow::into_sale)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { units, pics, sales })
    }
}

fn parse_table<T: serde::de::DeserializeOwned>(data: &str) -> Result<Vec<T>, csv::Error> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes())
        .deserialize()
        .collect()
}
