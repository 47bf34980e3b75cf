use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonthKeyError {
    #[error("Month key error: {0}")]
    InvalidFormat(String),
    #[error("Month key error: {0}")]
    ParseInt(#[from] ParseIntError),
    #[error("Month key error: month {0} is out of range")]
    MonthOutOfRange(u32)
}
