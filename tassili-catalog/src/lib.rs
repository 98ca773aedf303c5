pub mod loader;
pub mod sources;

pub use loader::CatalogLoader;
pub use sources::{CatalogSources, DataSource};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API responded with status {0}")]
    Status(u16),
    #[error("Failed to read fallback file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse data: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
