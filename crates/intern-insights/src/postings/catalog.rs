use super::cache::DataSource;
use super::domain::{EnrichedRecord, RawRecord};
use super::fields::SkillTaxonomy;
use super::filter::{filter_records, FilterSpec};
use super::ingest::PostingLoader;
use super::normalizer::normalize_records;
use super::report::{filter_options, summarize, FilterOptions, PostingSummary};
use super::{sample, DatasetError};
use chrono::{DateTime, Utc};
use tracing::info;

/// The enriched record set for one data load. Records are never mutated after
/// construction; queries hand out borrowed subsets.
#[derive(Debug, Clone)]
pub struct PostingCatalog {
    records: Vec<EnrichedRecord>,
    loaded_at: DateTime<Utc>,
}

impl PostingCatalog {
    pub fn from_raw(raw: Vec<RawRecord>) -> Result<Self, DatasetError> {
        Self::with_taxonomy(raw, &SkillTaxonomy::standard())
    }

    pub fn with_taxonomy(
        raw: Vec<RawRecord>,
        taxonomy: &SkillTaxonomy,
    ) -> Result<Self, DatasetError> {
        if raw.is_empty() {
            return Err(DatasetError::Empty);
        }

        Ok(Self {
            records: normalize_records(raw, taxonomy),
            loaded_at: Utc::now(),
        })
    }

    /// Load and enrich the records behind `source`.
    pub fn load(source: &DataSource) -> Result<Self, DatasetError> {
        let raw = match source {
            DataSource::Path(path) => PostingLoader::from_path(path)?,
            DataSource::Sample => sample::sample_records(),
        };
        let catalog = Self::from_raw(raw)?;
        info!(
            source = %source,
            records = catalog.len(),
            "posting catalog loaded"
        );
        Ok(catalog)
    }

    pub fn records(&self) -> &[EnrichedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn filter(&self, spec: &FilterSpec) -> Vec<&EnrichedRecord> {
        filter_records(&self.records, spec)
    }

    pub fn summarize(&self, spec: &FilterSpec) -> PostingSummary {
        summarize(self.filter(spec))
    }

    pub fn options(&self) -> FilterOptions {
        filter_options(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        let error = PostingCatalog::from_raw(Vec::new()).expect_err("empty rejected");
        assert!(matches!(error, DatasetError::Empty));
    }

    #[test]
    fn sample_catalog_answers_queries() {
        let catalog = PostingCatalog::load(&DataSource::Sample).expect("sample loads");
        assert_eq!(catalog.len(), 5);

        let spec = FilterSpec::default().with_city("北京");
        let summary = catalog.summarize(&spec);
        assert_eq!(summary.total_postings, 3);
        assert_eq!(summary.city_count, 1);

        let everything = catalog.summarize(&FilterSpec::default());
        assert_eq!(everything.total_postings, catalog.len());
        assert_eq!(everything.skill_frequency[0].label, "SQL");
        assert_eq!(everything.skill_frequency[0].count, 5);
    }

    #[test]
    fn missing_file_is_not_replaced_by_sample_data() {
        let source = DataSource::Path("./no-such-postings.csv".into());
        let error = PostingCatalog::load(&source).expect_err("missing file fails");
        assert!(matches!(error, DatasetError::Io(_)));
    }
}
