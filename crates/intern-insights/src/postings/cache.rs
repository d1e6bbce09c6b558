use super::catalog::PostingCatalog;
use super::DatasetError;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;
use tracing::info;

/// Where a catalog's raw records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Path(PathBuf),
    Sample,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Path(path) => write!(f, "{}", path.display()),
            DataSource::Sample => write!(f, "built-in sample"),
        }
    }
}

/// Identity of a data load. A file source also records its modification time, so an
/// edited file no longer matches a cached fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFingerprint {
    pub source: DataSource,
    pub modified: Option<SystemTime>,
}

impl SourceFingerprint {
    pub fn capture(source: &DataSource) -> Self {
        let modified = match source {
            DataSource::Path(path) => std::fs::metadata(path)
                .and_then(|metadata| metadata.modified())
                .ok(),
            DataSource::Sample => None,
        };

        Self {
            source: source.clone(),
            modified,
        }
    }
}

#[derive(Debug)]
struct CacheEntry {
    fingerprint: SourceFingerprint,
    catalog: Arc<PostingCatalog>,
}

/// Session-owned cache holding the enriched catalog for the current data source.
#[derive(Debug, Default)]
pub struct CatalogCache {
    entry: Option<CacheEntry>,
    generation: u64,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached catalog for `source`, running `loader` when nothing is cached or
    /// the source changed. A failed load keeps the previous entry.
    pub fn get_or_load<F>(
        &mut self,
        source: &DataSource,
        loader: F,
    ) -> Result<Arc<PostingCatalog>, DatasetError>
    where
        F: FnOnce(&DataSource) -> Result<PostingCatalog, DatasetError>,
    {
        let fingerprint = SourceFingerprint::capture(source);
        if let Some(entry) = &self.entry {
            if entry.fingerprint == fingerprint {
                return Ok(Arc::clone(&entry.catalog));
            }
        }

        let catalog = Arc::new(loader(source)?);
        self.generation += 1;
        info!(
            %source,
            generation = self.generation,
            records = catalog.len(),
            "posting catalog cached"
        );
        self.entry = Some(CacheEntry {
            fingerprint,
            catalog: Arc::clone(&catalog),
        });
        Ok(catalog)
    }

    pub fn load(&mut self, source: &DataSource) -> Result<Arc<PostingCatalog>, DatasetError> {
        self.get_or_load(source, PostingCatalog::load)
    }

    /// Drop the cached catalog. Returns whether anything was cached.
    pub fn invalidate(&mut self) -> bool {
        self.entry.take().is_some()
    }

    pub fn current(&self) -> Option<Arc<PostingCatalog>> {
        self.entry.as_ref().map(|entry| Arc::clone(&entry.catalog))
    }

    pub fn is_cached(&self) -> bool {
        self.entry.is_some()
    }

    /// Number of loads performed by this cache.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
