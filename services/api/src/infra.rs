use crate::cli::SourceArgs;
use intern_insights::config::{ConfigError, DataConfig};
use intern_insights::postings::{CatalogCache, DataSource, DatasetError, PostingCatalog};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) postings: Arc<PostingSession>,
}

/// Owns the catalog cache for one data source across requests.
pub(crate) struct PostingSession {
    source: DataSource,
    cache: Mutex<CatalogCache>,
}

impl PostingSession {
    pub(crate) fn new(source: DataSource) -> Self {
        Self {
            source,
            cache: Mutex::new(CatalogCache::new()),
        }
    }

    pub(crate) fn source(&self) -> &DataSource {
        &self.source
    }

    pub(crate) fn catalog(&self) -> Result<Arc<PostingCatalog>, DatasetError> {
        self.cache().load(&self.source)
    }

    /// Drop the cached catalog and load the source again.
    pub(crate) fn reload(&self) -> Result<(Arc<PostingCatalog>, u64), DatasetError> {
        let mut cache = self.cache();
        cache.invalidate();
        let catalog = cache.load(&self.source)?;
        Ok((catalog, cache.generation()))
    }

    pub(crate) fn generation(&self) -> u64 {
        self.cache().generation()
    }

    fn cache(&self) -> MutexGuard<'_, CatalogCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// `--sample` wins, then `--data`, then the configured path.
pub(crate) fn resolve_source(
    args: SourceArgs,
    config: &DataConfig,
) -> Result<DataSource, ConfigError> {
    if args.sample {
        return Ok(DataSource::Sample);
    }

    args.data
        .or_else(|| config.source_path.clone())
        .map(DataSource::Path)
        .ok_or(ConfigError::MissingDataSource)
}
