mod errors;
mod summary;
mod transaction;

use std::collections::HashMap;

pub use errors::{Discard, SpendError};
pub use summary::{AggregationResult, MonthDetail, MonthPoint};
pub use transaction::{normalize_rows, Batch, Transaction};
pub use transaction::{AMOUNT_COLUMN, DATE_COLUMN, LABEL_COLUMN, SENDER_COLUMN};

/// One CSV record keyed by the header line's column names.
pub type Row = HashMap<String, String>;
