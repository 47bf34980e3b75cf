mod errors;
mod month_key;

pub use errors::MonthKeyError;
pub use month_key::MonthKey;

pub type Label = String;
