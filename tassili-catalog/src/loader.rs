use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{CatalogError, CatalogResult};

/// Loads collection data from an optional remote endpoint with a local JSON
/// file as fallback.
///
/// Any remote failure (network error or non-success status) substitutes the
/// fallback file; when that also fails the result is absent and callers
/// render the empty state instead of crashing.
pub struct CatalogLoader {
    client: reqwest::Client,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch_with_fallback<T: DeserializeOwned>(
        &self,
        endpoint: Option<&str>,
        fallback: &Path,
    ) -> Option<T> {
        if let Some(url) = endpoint {
            tracing::info!("Attempting to fetch from API: {url}");
            match self.fetch_remote(url).await {
                Ok(data) => {
                    tracing::info!("Successfully fetched from API: {url}");
                    return Some(data);
                }
                Err(err) => {
                    tracing::warn!("API fetch failed: {err}. Using fallback data.");
                }
            }
        }
        self.load_fallback(fallback).await
    }

    async fn fetch_remote<T: DeserializeOwned>(&self, url: &str) -> CatalogResult<T> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }

    async fn load_fallback<T: DeserializeOwned>(&self, path: &Path) -> Option<T> {
        match self.read_fallback(path).await {
            Ok(data) => {
                tracing::info!("Loaded fallback data from: {}", path.display());
                Some(data)
            }
            Err(err) => {
                tracing::error!("Error loading fallback data: {err}");
                None
            }
        }
    }

    async fn read_fallback<T: DeserializeOwned>(&self, path: &Path) -> CatalogResult<T> {
        let raw = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tassili_domain::Destination;

    fn fallback_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const DESTINATIONS: &str =
        r#"[{"name": "Ghardaia", "country": "Algeria", "description": "M'zab valley"}]"#;

    #[tokio::test]
    async fn test_no_endpoint_loads_the_fallback_file() {
        let file = fallback_file(DESTINATIONS);
        let loader = CatalogLoader::new();
        let destinations: Vec<Destination> = loader
            .fetch_with_fallback(None, file.path())
            .await
            .expect("Fallback should load");
        assert_eq!(destinations.len(), 1);
        assert_eq!(destinations[0].name, "Ghardaia");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_falls_back_to_local_file() {
        let file = fallback_file(DESTINATIONS);
        let loader = CatalogLoader::new();
        // Nothing listens on the discard port, so the fetch fails fast.
        let destinations: Vec<Destination> = loader
            .fetch_with_fallback(Some("http://127.0.0.1:9/destinations"), file.path())
            .await
            .expect("Fallback should load");
        assert_eq!(destinations.len(), 1);
    }

    #[tokio::test]
    async fn test_double_failure_yields_absent() {
        let loader = CatalogLoader::new();
        let destinations: Option<Vec<Destination>> = loader
            .fetch_with_fallback(
                Some("http://127.0.0.1:9/destinations"),
                Path::new("/nonexistent/destinations.json"),
            )
            .await;
        assert!(destinations.is_none());
    }

    #[tokio::test]
    async fn test_malformed_fallback_yields_absent() {
        let file = fallback_file("{not json");
        let loader = CatalogLoader::new();
        let destinations: Option<Vec<Destination>> =
            loader.fetch_with_fallback(None, file.path()).await;
        assert!(destinations.is_none());
    }
}
