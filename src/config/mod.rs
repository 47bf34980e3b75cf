
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y %H:%M";
pub const DEFAULT_FALLBACK_LABEL: &str = "Unknown";
pub const DEFAULT_NON_SPEND_LABELS: [&str; 2] = ["personal-income", "non-payment"];

/// Rules used to turn raw CSV rows into spend transactions.
///
/// The defaults match the SMS export format: `Date` cells like `04-01-2026 20:52`,
/// and income / non-payment rows excluded from every total.
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// `chrono` format string applied to the trimmed `Date` cell.
    pub date_format: String,
    /// Labels (already lowercased) that mark a row as not being a spend event.
    non_spend_labels: Vec<String>,
    /// Label given to rows with a missing or blank `Label` cell.
    pub fallback_label: String
}

impl ParseConfig {
    pub fn new() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            non_spend_labels: DEFAULT_NON_SPEND_LABELS.iter().map(|label| label.to_string()).collect(),
            fallback_label: DEFAULT_FALLBACK_LABEL.to_string()
        }
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    pub fn with_non_spend_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.non_spend_labels = labels.into_iter()
            .map(|label| label.as_ref().trim().to_lowercase())
            .collect();
        self
    }

    pub fn with_fallback_label(mut self, label: impl Into<String>) -> Self {
        self.fallback_label = label.into();
        self
    }

    /// Case-insensitive check against the configured non-spend labels.
    pub fn is_non_spend(&self, label: &str) -> bool {
        let normalized = label.to_lowercase();
        self.non_spend_labels.iter().any(|excluded| *excluded == normalized)
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new()
    }
}
