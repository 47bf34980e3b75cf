//! Spend KPIs computed from SMS transaction exports in CSV form.
//!
//! The pipeline is read ([`reader`]) → normalize ([`models::Transaction::from_row`])
//! → aggregate ([`aggregate`]). [`engine::SpendEngine`] composes the three and can
//! run them on tokio's blocking pool.

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod models;
pub mod reader;
pub mod report;
pub mod types;

pub use config::ParseConfig;
pub use engine::SpendEngine;
pub use models::{AggregationResult, MonthDetail, MonthPoint, SpendError, Transaction};
pub use types::MonthKey;
