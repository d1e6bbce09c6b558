mod frequency;
mod summary;
pub mod views;

pub use frequency::FrequencyTable;
pub use summary::{filter_options, summarize};
pub use views::{FilterOptions, FrequencyEntry, PostingSummary, SalaryStats};
