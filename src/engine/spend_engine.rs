use crate::aggregate::{compute_kpis, compute_month_detail};
use crate::config::ParseConfig;
use crate::models::{normalize_rows, AggregationResult, Batch, MonthDetail, SpendError};
use crate::reader::read_rows;
use crate::types::MonthKey;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;
use tokio::task::spawn_blocking;
use tracing::{debug, error};

/// Read, normalize and aggregate pipeline over SMS transaction exports.
///
/// The synchronous methods run on the calling thread. The `run_*` methods move the
/// blocking file read and computation onto tokio's blocking pool.
#[derive(Debug, Clone)]
pub struct SpendEngine {
    config: Arc<ParseConfig>
}

impl SpendEngine {
    /// Creates an engine using the default SMS export rules.
    pub fn new() -> Self {
        Self {
            config: Arc::new(ParseConfig::default())
        }
    }

    pub fn with_config(mut self, config: ParseConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Computes headline KPIs from CSV text.
    ///
    /// # Errors
    /// `SpendError::NoValidData` when no row survives normalization.
    pub fn compute_kpis<R: Read>(&self, input: R) -> Result<AggregationResult, SpendError> {
        let batch = self.load(input)?;
        compute_kpis(&batch)
    }

    /// Computes the spend breakdown of a single month from CSV text.
    pub fn month_detail<R: Read>(&self, input: R, month: MonthKey) -> Result<MonthDetail, SpendError> {
        let batch = self.load(input)?;
        compute_month_detail(batch.transactions, month)
    }

    /// Computes KPIs for the CSV file at `path` on the blocking pool.
    pub async fn run_kpis(&self, path: impl AsRef<Path>) -> Result<AggregationResult, SpendError> {
        let engine = self.clone();
        let path = path.as_ref().to_path_buf();

        spawn_blocking(move || engine.compute_kpis(open(&path)?)).await?
    }

    /// Computes the month detail for the CSV file at `path` on the blocking pool.
    pub async fn run_month_detail(&self, path: impl AsRef<Path>, month: MonthKey) -> Result<MonthDetail, SpendError> {
        let engine = self.clone();
        let path = path.as_ref().to_path_buf();

        spawn_blocking(move || engine.month_detail(open(&path)?, month)).await?
    }

    fn load<R: Read>(&self, input: R) -> Result<Batch, SpendError> {
        let rows = read_rows(input)?;
        let row_count = rows.len();
        let batch = normalize_rows(rows, &self.config);

        debug!("Normalized [{}] of [{row_count}] rows", batch.transactions.len());

        Ok(batch)
    }
}

impl Default for SpendEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn open(path: &Path) -> Result<BufReader<File>, SpendError> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(error) => {
            error!("Error opening CSV at path: {} | {error}", path.display());
            Err(SpendError::Io(error))
        }
    }
}
