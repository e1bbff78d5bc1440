//! Lumina Server - hotel sales-performance reporting service
//!
//! # Architecture
//!
//! A thin HTTP surface over a pure aggregation core. The base tables (units,
//! PICs, sales) live in an in-memory record store; every report is a fresh
//! computation over a snapshot:
//!
//! - **Record Store** (`store`): repository trait + in-memory backend,
//!   CSV-seeded, append-only booking entry
//! - **Reporting core** (`report`): joiner, daily expansion, aggregator,
//!   KPI calculator, filter/sort engine
//! - **HTTP API** (`api`): axum routers for dashboard, sales report,
//!   reference data and health
//! - **Exports** (`export`): CSV payloads and the printable document shape
//! - **Services** (`services`): AI narrative client with fixed fallback
//!
//! # Module layout
//!
//! ```text
//! lumina-server/src/
//! ├── core/          # config, state, server runner
//! ├── api/           # HTTP routes and handlers
//! ├── report/        # aggregation core (pure)
//! ├── store/         # record store + CSV seed
//! ├── export/        # CSV / document payloads
//! ├── services/      # external narrative endpoint
//! └── utils/         # errors, logging, date helpers, validation
//! ```

pub mod api;
pub mod core;
pub mod export;
pub mod report;
pub mod services;
pub mod store;
pub mod utils;

// Re-export common types
pub use core::{Config, Server, ServerState};
pub use store::{InMemoryStore, RecordStore, SeedData};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
