//! Internship posting pipeline: load raw rows, enrich them once, then filter and aggregate.

mod cache;
mod catalog;
pub mod domain;
pub mod fields;
mod filter;
mod ingest;
mod normalizer;
pub mod report;
pub mod sample;

pub use cache::{CatalogCache, DataSource, SourceFingerprint};
pub use catalog::PostingCatalog;
pub use domain::{CompanySizeBucket, EnrichedRecord, RawRecord, SkillSet};
pub use filter::{filter_records, FilterSpec, SalaryRange};
pub use ingest::PostingLoader;
pub use normalizer::{enrich_record, normalize_records};
pub use report::{FilterOptions, FrequencyEntry, PostingSummary, SalaryStats};

/// Structural failures while loading a postings source.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read postings source: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid postings CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("postings source is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),
    #[error("postings source contains no records")]
    Empty,
}
