use tracing::info;

use crate::aggregate::{largest, smallest, totals_by_label, totals_by_month};
use crate::models::{AggregationResult, Batch, MonthPoint, SpendError};

/// Computes the headline spend figures of a normalized batch.
///
/// # Errors
/// Returns `SpendError::NoValidData` when the batch holds no transactions, and
/// `SpendError::Overflow` if a total exceeds the decimal range.
pub fn compute_kpis(batch: &Batch) -> Result<AggregationResult, SpendError> {
    if batch.transactions.is_empty() {
        return Err(SpendError::NoValidData);
    }

    let month_totals = totals_by_month(&batch.transactions)?;
    let (max_month, max_amount) = largest(&month_totals).ok_or(SpendError::NoValidData)?;
    let (min_month, min_amount) = smallest(&month_totals).ok_or(SpendError::NoValidData)?;

    let category_totals = totals_by_label(&batch.transactions)?;
    let (top_category, top_category_amount) = largest(&category_totals).ok_or(SpendError::NoValidData)?;

    let monthly_series: Vec<MonthPoint> = month_totals.into_iter()
        .map(|(month, total)| MonthPoint { month, total })
        .collect();

    info!(
        "Aggregated [{}] transactions over [{}] months and [{}] categories, [{}] rows discarded",
        batch.transactions.len(),
        monthly_series.len(),
        category_totals.len(),
        batch.discarded
    );

    Ok(AggregationResult {
        max_month,
        max_amount,
        min_month,
        min_amount,
        top_category,
        top_category_amount,
        monthly_series,
        category_totals,
        discarded_rows: batch.discarded
    })
}
