//! JSON catalog provider
//!
//! Loads the course catalog from a JSON array, either from disk or from the
//! copy bundled into the binary.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use shared::{Component, Course, SharedError, cart_info, cart_warn};

use crate::core::Catalog;
use crate::error::{WebServerError, WebServerResult};
use crate::traits::CatalogProvider;

/// Catalog shipped with the binary
pub const BUNDLED_CATALOG: &str = include_str!("../../data/courses.json");

#[derive(Debug, Clone, PartialEq, Eq)]
enum CatalogSource {
    Bundled,
    File(PathBuf),
}

/// Real catalog provider backed by JSON
#[derive(Debug, Clone)]
pub struct JsonCatalogProvider {
    source: CatalogSource,
}

impl JsonCatalogProvider {
    /// Provider reading the bundled catalog
    pub fn bundled() -> Self {
        Self {
            source: CatalogSource::Bundled,
        }
    }

    /// Provider reading `path` at load time
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            source: CatalogSource::File(path.as_ref().to_path_buf()),
        }
    }

    /// Bundled catalog unless a path is configured
    pub fn from_optional_path(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    /// Parse a JSON array of courses into a catalog
    pub fn parse(raw: &str) -> Result<Catalog, SharedError> {
        let courses: Vec<Course> = serde_json::from_str(raw)?;
        Ok(Catalog::new(courses))
    }

    async fn read_source(&self) -> WebServerResult<String> {
        match &self.source {
            CatalogSource::Bundled => Ok(BUNDLED_CATALOG.to_string()),
            CatalogSource::File(path) => fs::read_to_string(path)
                .await
                .map_err(|e| WebServerError::catalog(path.display().to_string(), e.to_string())),
        }
    }
}

#[async_trait]
impl CatalogProvider for JsonCatalogProvider {
    async fn load(&self) -> WebServerResult<Catalog> {
        let raw = self.read_source().await?;
        let catalog = Self::parse(&raw)
            .map_err(|e| WebServerError::catalog(self.describe(), e.to_string()))?;

        for duplicate in catalog.duplicates() {
            cart_warn!(
                Component::Catalog,
                "⚠️ Duplicate course identifier {} in {}; keeping the first entry",
                duplicate,
                self.describe()
            );
        }

        cart_info!(
            Component::Catalog,
            "📚 Loaded {} courses from {}",
            catalog.len(),
            self.describe()
        );
        Ok(catalog)
    }

    fn describe(&self) -> String {
        match &self.source {
            CatalogSource::Bundled => "bundled catalog".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
        }
    }
}

impl Default for JsonCatalogProvider {
    fn default() -> Self {
        Self::bundled()
    }
}
