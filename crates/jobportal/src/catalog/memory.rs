//! In-memory catalog backed by bundled or file-loaded JSON.

use std::collections::HashSet;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::{bundled_blogs, bundled_jobs, Catalog};
use crate::config::DataConfig;
use crate::error::{Error, Result};
use crate::model::{Blog, Job};

/// Catalog holding every record in memory.
///
/// Records are validated once on construction:
/// - ids are non-empty and unique per record kind
/// - blog slugs are non-empty and unique
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    jobs: Vec<Job>,
    blogs: Vec<Blog>,
}

impl InMemoryCatalog {
    /// Build a catalog from the records compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled data fails to parse or validate.
    pub fn bundled() -> Result<Self> {
        Self::from_records(bundled_jobs()?, bundled_blogs()?)
    }

    /// Build a catalog from explicit records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CatalogInvalid`] if ids or slugs are empty or repeated.
    pub fn from_records(jobs: Vec<Job>, blogs: Vec<Blog>) -> Result<Self> {
        validate_unique("job id", jobs.iter().map(|j| j.id.as_str()))?;
        validate_unique("blog id", blogs.iter().map(|b| b.id.as_str()))?;
        validate_unique("blog slug", blogs.iter().map(|b| b.slug.as_str()))?;

        debug!("Catalog holds {} jobs and {} blogs", jobs.len(), blogs.len());
        Ok(Self { jobs, blogs })
    }

    /// Load records from JSON files, falling back to the bundled data for
    /// whichever path is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read, does not parse, or the
    /// resulting records fail validation.
    pub fn from_files(jobs_path: Option<&Path>, blogs_path: Option<&Path>) -> Result<Self> {
        let jobs = match jobs_path {
            Some(path) => read_json(path)?,
            None => bundled_jobs()?,
        };
        let blogs = match blogs_path {
            Some(path) => read_json(path)?,
            None => bundled_blogs()?,
        };
        Self::from_records(jobs, blogs)
    }

    /// Load the catalog described by the `[data]` configuration section.
    ///
    /// # Errors
    ///
    /// See [`InMemoryCatalog::from_files`].
    pub fn from_config(data: &DataConfig) -> Result<Self> {
        let catalog = Self::from_files(data.jobs_path.as_deref(), data.blogs_path.as_deref())?;
        info!(
            jobs = catalog.jobs.len(),
            blogs = catalog.blogs.len(),
            bundled = data.jobs_path.is_none() && data.blogs_path.is_none(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Number of jobs held.
    #[must_use]
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Number of blog posts held.
    #[must_use]
    pub fn blog_count(&self) -> usize {
        self.blogs.len()
    }
}

impl Catalog for InMemoryCatalog {
    fn jobs(&self) -> Result<Vec<Job>> {
        Ok(self.jobs.clone())
    }

    fn job(&self, id: &str) -> Result<Option<Job>> {
        Ok(self.jobs.iter().find(|j| j.id == id).cloned())
    }

    fn blogs(&self) -> Result<Vec<Blog>> {
        Ok(self.blogs.clone())
    }

    fn blog(&self, id: &str) -> Result<Option<Blog>> {
        Ok(self.blogs.iter().find(|b| b.id == id).cloned())
    }

    fn blog_by_slug(&self, slug: &str) -> Result<Option<Blog>> {
        Ok(self.blogs.iter().find(|b| b.slug == slug).cloned())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    debug!("Reading catalog data from {}", path.display());
    let text = std::fs::read_to_string(path).map_err(|source| Error::CatalogLoad {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| Error::CatalogParse {
        path: path.to_path_buf(),
        source,
    })
}

fn validate_unique<'a>(what: &str, values: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for value in values {
        if value.trim().is_empty() {
            return Err(Error::catalog_invalid(format!("empty {what}")));
        }
        if !seen.insert(value) {
            return Err(Error::catalog_invalid(format!("duplicate {what} '{value}'")));
        }
    }
    Ok(())
}
