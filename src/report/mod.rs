//! Text and JSON rendering of aggregation results for the command line.


use std::io::Write;

use clap::ValueEnum;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::{AggregationResult, MonthDetail, MonthPoint};

/// Trailing window applied to the displayed monthly series.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, ValueEnum)]
pub enum Timeframe {
    #[value(name = "last3")]
    Last3,
    #[value(name = "last6")]
    Last6,
    #[value(name = "last12")]
    Last12,
    #[default]
    Lifetime
}

impl Timeframe {
    pub fn months(&self) -> Option<usize> {
        match self {
            Timeframe::Last3 => Some(3),
            Timeframe::Last6 => Some(6),
            Timeframe::Last12 => Some(12),
            Timeframe::Lifetime => None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Last3 => "Last 3 Months",
            Timeframe::Last6 => "Last 6 Months",
            Timeframe::Last12 => "Last Year",
            Timeframe::Lifetime => "Lifetime"
        }
    }

    /// The most recent points of an ascending series.
    pub fn window<'a>(&self, series: &'a [MonthPoint]) -> &'a [MonthPoint] {
        match self.months() {
            Some(months) => &series[series.len().saturating_sub(months)..],
            None => series
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json
}

/// Fixed-point rendering with two decimals, rounding half away from zero.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

pub fn write_kpis<W: Write>(output: &mut W, result: &AggregationResult, timeframe: Timeframe) -> std::io::Result<()> {
    writeln!(output, "Max monthly spend: {} ({})", format_money(result.max_amount), result.max_month.long_name())?;
    writeln!(output, "Min monthly spend: {} ({})", format_money(result.min_amount), result.min_month.long_name())?;
    writeln!(output, "Top category: {} ({})", result.top_category, format_money(result.top_category_amount))?;
    writeln!(output)?;
    writeln!(output, "Monthly spend - {}", timeframe.label())?;

    for point in timeframe.window(&result.monthly_series) {
        writeln!(output, "{}: {}", point.month, format_money(point.total))?;
    }

    if result.discarded_rows > 0 {
        writeln!(output)?;
        writeln!(output, "Rows skipped: {}", result.discarded_rows)?;
    }

    Ok(())
}

pub fn write_month_detail<W: Write>(output: &mut W, detail: &MonthDetail) -> std::io::Result<()> {
    writeln!(output, "{}", detail.month.long_name())?;
    writeln!(output, "Total expenses: {}", format_money(detail.total))?;
    writeln!(output)?;
    writeln!(output, "Spending by label")?;

    for (label, total) in detail.labels_by_amount() {
        writeln!(output, "{label}: {}", format_money(total))?;
    }

    writeln!(output)?;
    writeln!(output, "Transactions")?;

    for transaction in &detail.transactions {
        writeln!(
            output,
            "{}  {:>10}  {}",
            transaction.timestamp.format("%d-%m-%Y %H:%M"),
            format_money(transaction.amount),
            transaction.label
        )?;
    }

    Ok(())
}

/// Pretty-printed JSON of any result, followed by a newline.
pub fn write_json<W: Write, T: Serialize>(output: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *output, value)?;
    writeln!(output)?;

    Ok(())
}
