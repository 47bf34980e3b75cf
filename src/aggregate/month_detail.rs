use rust_decimal::Decimal;
use tracing::info;

use crate::aggregate::totals_by_label;
use crate::models::{MonthDetail, SpendError, Transaction};
use crate::types::MonthKey;

/// Narrows transactions to one month and breaks its spend down by label.
///
/// A month without transactions yields a zero total rather than an error.
pub fn compute_month_detail(transactions: Vec<Transaction>, month: MonthKey) -> Result<MonthDetail, SpendError> {
    let mut included: Vec<Transaction> = transactions.into_iter()
        .filter(|transaction| transaction.month() == month)
        .collect();

    // Stable sort keeps input order for identical timestamps
    included.sort_by(|left, right| right.timestamp.cmp(&left.timestamp));

    let total = included.iter()
        .try_fold(Decimal::ZERO, |total, transaction| total.checked_add(transaction.amount))
        .ok_or_else(|| SpendError::Overflow(format!("month [{month}]")))?;

    let by_label = totals_by_label(&included)?;

    info!("Month [{month}] holds [{}] transactions totalling [{total}]", included.len());

    Ok(MonthDetail {
        month,
        total,
        by_label,
        transactions: included
    })
}
