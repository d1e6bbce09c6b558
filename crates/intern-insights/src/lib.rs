//! Normalization, filtering and aggregation of internship job postings.
//!
//! Raw spreadsheet rows are loaded through [`postings::PostingLoader`], enriched once into a
//! [`postings::PostingCatalog`] and then queried with [`postings::FilterSpec`] values.

pub mod config;
pub mod error;
pub mod postings;
pub mod telemetry;
