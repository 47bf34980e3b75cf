use std::path::Path;
use std::process::Command;
use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;

use spend_kpis::{MonthKey, SpendEngine, SpendError};

#[test]
fn test_cli_outputs_expected_overview_for_fixture() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_spend-kpis");
    let fixture_path = Path::new("samples").join("fixed.csv");

    let output = Command::new(binary_path)
        .arg(fixture_path)
        .output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("Max monthly spend: 150.00 (January 2026)"));
    assert!(stdout.contains("Min monthly spend: 30.00 (February 2026)"));
    assert!(stdout.contains("Top category: Food (150.00)"));
    assert!(stdout.contains("2026-01: 150.00"));
    assert!(stdout.contains("2026-02: 30.00"));

    Ok(())
}

#[test]
fn test_cli_outputs_month_detail_newest_first() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_spend-kpis");
    let fixture_path = Path::new("samples").join("fixed.csv");

    let output = Command::new(binary_path)
        .arg(fixture_path)
        .args(["--month", "2026-01"])
        .output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.first(), Some(&"January 2026"));
    assert!(stdout.contains("Total expenses: 150.00"));

    let newest = lines.iter().position(|line| line.starts_with("04-01-2026 12:00"));
    let oldest = lines.iter().position(|line| line.starts_with("04-01-2026 10:00"));

    assert!(newest.is_some() && oldest.is_some());
    assert!(newest < oldest);

    Ok(())
}

#[test]
fn test_cli_outputs_json_for_sample_export() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_spend-kpis");
    let sample_path = Path::new("samples").join("sms_export.csv");

    let output = Command::new(binary_path)
        .arg(sample_path)
        .args(["--format", "json"])
        .output()?;

    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;

    assert_eq!(json["max_month"], "2026-01");
    assert_eq!(json["min_month"], "2026-02");
    assert_eq!(json["top_category"], "Food");
    assert_eq!(json["discarded_rows"], 4);
    assert_eq!(json["monthly_series"].as_array().map(|series| series.len()), Some(3));
    assert_eq!(json["category_totals"]["Food, Groceries"], "65.25");
    assert_eq!(json["category_totals"]["Unknown"], "20.00");

    Ok(())
}

#[test]
fn test_cli_fails_cleanly_when_no_valid_data() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_spend-kpis");
    let fixture_path = Path::new("samples").join("header_only.csv");

    let output = Command::new(binary_path)
        .arg(fixture_path)
        .output()?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)?.contains("No valid data found"));

    Ok(())
}

#[test]
fn test_cli_rejects_malformed_month_argument() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_spend-kpis");
    let fixture_path = Path::new("samples").join("fixed.csv");

    let output = Command::new(binary_path)
        .arg(fixture_path)
        .args(["--month", "January"])
        .output()?;

    assert!(!output.status.success());

    Ok(())
}

#[test]
fn test_library_sums_agree_on_sample_export() -> Result<()> {
    let sample = std::fs::read(Path::new("samples").join("sms_export.csv"))?;
    let result = SpendEngine::new().compute_kpis(sample.as_slice())?;

    let by_month: Decimal = result.monthly_series.iter().map(|point| point.total).sum();
    let by_category: Decimal = result.category_totals.values().copied().sum();

    assert_eq!(by_month, Decimal::from_str("265.25")?);
    assert_eq!(by_category, by_month);

    let march = SpendEngine::new().month_detail(sample.as_slice(), MonthKey::from_str("2026-03")?)?;

    assert_eq!(march.total, Decimal::from_str("85.25")?);
    assert_eq!(march.transactions.len(), 2);
    assert_eq!(march.transactions[0].label, "Unknown");

    Ok(())
}

#[tokio::test]
async fn test_library_reports_no_valid_data_for_header_only_file() {
    let result = SpendEngine::new().run_kpis(Path::new("samples").join("header_only.csv")).await;

    assert!(matches!(result, Err(SpendError::NoValidData)));
}
