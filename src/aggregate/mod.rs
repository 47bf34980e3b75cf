mod kpis;
mod month_detail;

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{SpendError, Transaction};
use crate::types::{Label, MonthKey};

pub use kpis::compute_kpis;
pub use month_detail::compute_month_detail;

/// Sums amounts per calendar month. Keys iterate chronologically.
pub fn totals_by_month(transactions: &[Transaction]) -> Result<BTreeMap<MonthKey, Decimal>, SpendError> {
    let mut totals = BTreeMap::new();

    for transaction in transactions {
        let month = transaction.month();
        accumulate(&mut totals, month, transaction.amount)
            .ok_or_else(|| SpendError::Overflow(format!("month [{month}]")))?;
    }

    Ok(totals)
}

/// Sums amounts per label. Keys iterate in lexicographic order.
pub fn totals_by_label(transactions: &[Transaction]) -> Result<BTreeMap<Label, Decimal>, SpendError> {
    let mut totals = BTreeMap::new();

    for transaction in transactions {
        accumulate(&mut totals, transaction.label.clone(), transaction.amount)
            .ok_or_else(|| SpendError::Overflow(format!("label [{}]", transaction.label)))?;
    }

    Ok(totals)
}

fn accumulate<K: Ord>(totals: &mut BTreeMap<K, Decimal>, key: K, amount: Decimal) -> Option<()> {
    let total = totals.entry(key).or_insert(Decimal::ZERO);
    *total = total.checked_add(amount)?;
    Some(())
}

/// Entry with the largest total. On ties the first key in map order wins.
fn largest<K: Clone>(totals: &BTreeMap<K, Decimal>) -> Option<(K, Decimal)> {
    let mut best: Option<(&K, Decimal)> = None;

    for (key, total) in totals {
        match best {
            Some((_, best_total)) if *total <= best_total => {}
            _ => best = Some((key, *total))
        }
    }

    best.map(|(key, total)| (key.clone(), total))
}

/// Entry with the smallest total. On ties the first key in map order wins.
fn smallest<K: Clone>(totals: &BTreeMap<K, Decimal>) -> Option<(K, Decimal)> {
    let mut best: Option<(&K, Decimal)> = None;

    for (key, total) in totals {
        match best {
            Some((_, best_total)) if *total >= best_total => {}
            _ => best = Some((key, *total))
        }
    }

    best.map(|(key, total)| (key.clone(), total))
}
