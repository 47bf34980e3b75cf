use std::env;
use std::fs::{create_dir_all, File};
use std::io::{self, stdout, Write};
use std::path::Path;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::seq::IndexedRandom;
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

const PROBABILITY_SPEND: f64 = 0.85;
const PROBABILITY_INCOME: f64 = 0.05;
const PROBABILITY_NON_PAYMENT: f64 = 0.05;

const SENDERS: [&str; 4] = ["AX-HDFCBK", "VM-ICICIB", "JD-SBIINB", "BZ-KOTAKB"];
const SPEND_LABELS: [&str; 7] = ["Food", "Transport", "Bills", "Shopping", "Fuel", "Food, Groceries", ""];
const DATE_FORMAT: &str = "%d-%m-%Y %H:%M";

struct GeneratorConfig {
    num_records: usize,
    num_months: i64,
    output_path: String,
}

impl GeneratorConfig {
    fn from_args() -> Self {
        let args: Vec<String> = env::args().collect();
        let num_records = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
        let num_months = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(24);

        Self {
            num_records,
            num_months,
            output_path: "samples/generated_sms_export.csv".to_string(),
        }
    }
}

fn main() -> io::Result<()> {
    let config = GeneratorConfig::from_args();

    println!(
        "Generating {} SMS rows over {} months in {}...",
        config.num_records, config.num_months, config.output_path
    );

    if let Some(parent) = Path::new(&config.output_path).parent() {
        create_dir_all(parent)?;
    }

    let file = File::create(&config.output_path)?;
    let mut writer = io::BufWriter::new(file);

    writeln!(writer, "Sender,Date,Amount,Status,Label,Message")?;

    let mut rng = rand::rng();
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default();
    let span_minutes = config.num_months * 30 * 24 * 60;

    for row in 1..=config.num_records {
        let timestamp = start + Duration::minutes(rng.random_range(0..span_minutes.max(1)));
        let sender = SENDERS.choose(&mut rng).copied().unwrap_or("AX-HDFCBK");
        let roll: f64 = rng.random();

        if roll < PROBABILITY_SPEND {
            generate_spend(&mut writer, &mut rng, sender, timestamp)?;
        } else if roll < PROBABILITY_SPEND + PROBABILITY_INCOME {
            generate_labelled(&mut writer, &mut rng, sender, timestamp, "Personal-income", "Salary credited")?;
        } else if roll < PROBABILITY_SPEND + PROBABILITY_INCOME + PROBABILITY_NON_PAYMENT {
            generate_labelled(&mut writer, &mut rng, sender, timestamp, "NON-PAYMENT", "OTP for login")?;
        } else {
            generate_edge_record(&mut writer, &mut rng, sender, timestamp)?;
        }

        if row % 10_000 == 0 {
            print!(".");
            stdout().flush()?;
        }
    }

    writer.flush()?;
    println!("\nGeneration complete.");

    Ok(())
}

fn generate_random_amount<R: Rng>(rng: &mut R, max: f64) -> Decimal {
    let amount_val = if rng.random_bool(0.02) {
        rng.random_range(-500.0..-0.01)
    } else {
        rng.random_range(0.01..max)
    };

    Decimal::from_f64(amount_val).unwrap_or_default().round_dp(2)
}

fn generate_spend<W: Write, R: Rng>(writer: &mut W, rng: &mut R, sender: &str, timestamp: NaiveDateTime) -> io::Result<()> {
    let amount = generate_random_amount(rng, 5000.0);
    let label = SPEND_LABELS.choose(rng).copied().unwrap_or("");

    writeln!(
        writer,
        "{},{},{},OK,\"{}\",\"Rs {} debited, ref {}\"",
        sender, timestamp.format(DATE_FORMAT), amount, label, amount, rng.random_range(100_000..999_999)
    )?;

    Ok(())
}

fn generate_labelled<W: Write, R: Rng>(writer: &mut W, rng: &mut R, sender: &str, timestamp: NaiveDateTime, label: &str, message: &str) -> io::Result<()> {
    let amount = generate_random_amount(rng, 100_000.0);
    writeln!(writer, "{},{},{},OK,{},{}", sender, timestamp.format(DATE_FORMAT), amount, label, message)?;

    Ok(())
}

fn generate_edge_record<W: Write, R: Rng>(writer: &mut W, rng: &mut R, sender: &str, timestamp: NaiveDateTime) -> io::Result<()> {
    let date = timestamp.format(DATE_FORMAT).to_string();
    let invalid_types = [
        format!("{},{},abc,OK,Food,Garbled amount", sender, date),
        format!("{},{},12.50,OK,Food,Wrong date layout", sender, timestamp.format("%Y/%m/%d %H:%M")),
        format!("{},{},,OK,Food,Missing amount", sender, date),
        format!("{},{}", sender, date),
        format!("{},{},10.00,OK,Food,\"Quoted, with \"\"extra\"\" text\",surplus", sender, date),
        "   ".to_string(),
    ];

    if let Some(record) = invalid_types.choose(rng) {
        writeln!(writer, "{}", record)?;
    }

    Ok(())
}
