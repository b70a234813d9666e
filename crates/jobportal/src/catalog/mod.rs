//! Read-only access to job and blog records.
//!
//! Page code talks to the [`Catalog`] trait and never to a concrete data
//! source, so the bundled in-memory data can be swapped for another backend
//! without touching the pages.

mod bundled;
mod memory;

pub use bundled::{bundled_blogs, bundled_jobs};
pub use memory::InMemoryCatalog;

use crate::error::{Error, Result};
use crate::model::{Blog, Job};

/// Read-only data source for jobs and blog posts.
pub trait Catalog: Send + Sync + std::fmt::Debug {
    /// All jobs in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing source cannot be read.
    fn jobs(&self) -> Result<Vec<Job>>;

    /// A job by its exact id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing source cannot be read.
    fn job(&self, id: &str) -> Result<Option<Job>>;

    /// All blog posts in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing source cannot be read.
    fn blogs(&self) -> Result<Vec<Blog>>;

    /// A blog post by its exact id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing source cannot be read.
    fn blog(&self, id: &str) -> Result<Option<Blog>>;

    /// A blog post by its exact slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing source cannot be read.
    fn blog_by_slug(&self, slug: &str) -> Result<Option<Blog>> {
        Ok(self.blogs()?.into_iter().find(|b| b.slug == slug))
    }

    /// A job by id, treating a missing record as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no job has this id.
    fn require_job(&self, id: &str) -> Result<Job> {
        self.job(id)?.ok_or_else(|| Error::job_not_found(id))
    }

    /// A blog post by id or, failing that, by slug.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if neither matches.
    fn require_blog(&self, id_or_slug: &str) -> Result<Blog> {
        if let Some(blog) = self.blog(id_or_slug)? {
            return Ok(blog);
        }
        self.blog_by_slug(id_or_slug)?
            .ok_or_else(|| Error::blog_not_found(id_or_slug))
    }
}
