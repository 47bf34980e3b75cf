use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::Transaction;
use crate::types::{Label, MonthKey};

/// Summed spend of a single calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthPoint {
    pub month: MonthKey,
    pub total: Decimal
}

/// Headline figures computed from every valid transaction of an input.
///
/// Amounts are raw decimals; rendering them is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationResult {
    /// Month with the largest total. Ties go to the earliest month.
    pub max_month: MonthKey,
    pub max_amount: Decimal,
    /// Month with the smallest total. Ties go to the earliest month.
    pub min_month: MonthKey,
    pub min_amount: Decimal,
    /// Label with the largest total. Ties go to the lexicographically smallest label.
    pub top_category: Label,
    pub top_category_amount: Decimal,
    /// Every month present in the input, ascending.
    pub monthly_series: Vec<MonthPoint>,
    pub category_totals: BTreeMap<Label, Decimal>,
    /// Rows dropped by normalization. Diagnostic only.
    pub discarded_rows: usize
}

/// Spend narrowed to a single month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthDetail {
    pub month: MonthKey,
    pub total: Decimal,
    pub by_label: BTreeMap<Label, Decimal>,
    /// Newest first.
    pub transactions: Vec<Transaction>
}

impl MonthDetail {
    /// Positive label totals, largest first.
    pub fn labels_by_amount(&self) -> Vec<(&str, Decimal)> {
        let mut labels: Vec<(&str, Decimal)> = self.by_label.iter()
            .filter(|(_, total)| total.is_sign_positive() && !total.is_zero())
            .map(|(label, total)| (label.as_str(), *total))
            .collect();

        labels.sort_by(|left, right| right.1.cmp(&left.1));
        labels
    }
}
