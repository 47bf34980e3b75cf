use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

use crate::config::ParseConfig;
use crate::models::errors::Discard;
use crate::models::Row;
use crate::types::{Label, MonthKey};

pub const SENDER_COLUMN: &str = "Sender";
pub const DATE_COLUMN: &str = "Date";
pub const AMOUNT_COLUMN: &str = "Amount";
pub const LABEL_COLUMN: &str = "Label";

/// A validated spend event normalized from one CSV row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// Originating SMS sender, kept verbatim.
    pub sender: String,
    pub timestamp: NaiveDateTime,
    pub amount: Decimal,
    /// Trimmed label; never empty.
    pub label: Label
}

impl Transaction {
    /// Normalizes a row, naming the first discard rule that matches.
    ///
    /// Rules are checked in a fixed order: required columns, non-spend label,
    /// amount, then date.
    pub fn from_row(row: &Row, config: &ParseConfig) -> Result<Self, Discard> {
        let sender = row.get(SENDER_COLUMN).ok_or(Discard::MissingField(SENDER_COLUMN))?;
        let date = row.get(DATE_COLUMN).ok_or(Discard::MissingField(DATE_COLUMN))?;
        let amount = row.get(AMOUNT_COLUMN).ok_or(Discard::MissingField(AMOUNT_COLUMN))?;

        let label = match row.get(LABEL_COLUMN).map(|label| label.trim()) {
            Some(label) if !label.is_empty() => label,
            _ => config.fallback_label.as_str()
        };

        if config.is_non_spend(label) {
            return Err(Discard::NonSpendLabel);
        }

        let amount = parse_amount(amount).ok_or(Discard::InvalidAmount)?;
        let timestamp = parse_timestamp(date, &config.date_format).ok_or(Discard::InvalidDate)?;

        Ok(Self {
            sender: sender.clone(),
            timestamp,
            amount,
            label: label.to_string()
        })
    }

    pub fn month(&self) -> MonthKey {
        MonthKey::from(&self.timestamp)
    }
}

/// Valid transactions of one input, plus how many rows were dropped on the way.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    pub transactions: Vec<Transaction>,
    pub discarded: usize
}

/// Runs every row through [`Transaction::from_row`], dropping the rejects.
pub fn normalize_rows<I>(rows: I, config: &ParseConfig) -> Batch
where
    I: IntoIterator<Item = Row>,
{
    let mut batch = Batch::default();

    for (index, row) in rows.into_iter().enumerate() {
        match Transaction::from_row(&row, config) {
            Ok(transaction) => batch.transactions.push(transaction),
            Err(reason) => {
                //NOTE: Row numbers are 1-based and exclude the header line
                debug!("Discarding row [{}]: {reason}", index + 1);
                batch.discarded += 1;
            }
        }
    }

    batch
}

fn parse_amount(value: &str) -> Option<Decimal> {
    let value = value.trim();

    //NOTE: Decimal::from_str tolerates `_` separators, which exports never contain
    if !value.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')) {
        return None;
    }

    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

fn parse_timestamp(value: &str, format: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if !matches_shape(value, format) {
        return None;
    }

    NaiveDateTime::parse_from_str(value, format).ok()
}

/// Checks that numeric fields have their full zero-padded width and that literals
/// match exactly. chrono alone accepts `4-1-2026 9:05` for `%d-%m-%Y %H:%M`.
///
/// Formats using specifiers other than the fixed-width numeric ones are left to
/// chrono.
fn matches_shape(value: &str, format: &str) -> bool {
    let mut value = value.chars();
    let mut format = format.chars();

    while let Some(expected) = format.next() {
        if expected != '%' {
            if value.next() != Some(expected) {
                return false;
            }
            continue;
        }

        let width = match format.next() {
            Some('d' | 'm' | 'H' | 'M' | 'S' | 'y') => 2,
            Some('Y') => 4,
            Some('%') => {
                if value.next() != Some('%') {
                    return false;
                }
                continue;
            }
            _ => return true
        };

        for _ in 0..width {
            if !value.next().is_some_and(|c| c.is_ascii_digit()) {
                return false;
            }
        }
    }

    value.next().is_none()
}
