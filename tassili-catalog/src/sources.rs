use std::path::PathBuf;

use tassili_domain::Catalog;
use tassili_store::app_config::{DataConfig, DataSourceConfig};

use crate::loader::CatalogLoader;

/// Where one collection comes from: an optional remote endpoint and the
/// mandatory local fallback file.
#[derive(Debug, Clone)]
pub struct DataSource {
    pub endpoint: Option<String>,
    pub fallback_file: PathBuf,
}

impl From<&DataSourceConfig> for DataSource {
    fn from(config: &DataSourceConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            fallback_file: PathBuf::from(&config.fallback_file),
        }
    }
}

/// Sources for all five collections.
#[derive(Debug, Clone)]
pub struct CatalogSources {
    pub flights: DataSource,
    pub hotels: DataSource,
    pub trips: DataSource,
    pub activities: DataSource,
    pub destinations: DataSource,
}

impl CatalogSources {
    pub fn from_config(data: &DataConfig) -> Self {
        Self {
            flights: (&data.flights).into(),
            hotels: (&data.hotels).into(),
            trips: (&data.trips).into(),
            activities: (&data.activities).into(),
            destinations: (&data.destinations).into(),
        }
    }
}

impl CatalogLoader {
    /// Load every collection, each independently degrading to empty when
    /// both its endpoint and its fallback file fail.
    pub async fn load_catalog(&self, sources: &CatalogSources) -> Catalog {
        Catalog {
            flights: self.load_collection(&sources.flights).await,
            hotels: self.load_collection(&sources.hotels).await,
            trips: self.load_collection(&sources.trips).await,
            activities: self.load_collection(&sources.activities).await,
            destinations: self.load_collection(&sources.destinations).await,
        }
    }

    async fn load_collection<T: serde::de::DeserializeOwned>(
        &self,
        source: &DataSource,
    ) -> Vec<T> {
        self.fetch_with_fallback(source.endpoint.as_deref(), &source.fallback_file)
            .await
            .unwrap_or_default()
    }
}
