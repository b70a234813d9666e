//! Records compiled into the binary.

use crate::error::Result;
use crate::model::{Blog, Job};

const JOBS_JSON: &str = include_str!("../../data/jobs.json");
const BLOGS_JSON: &str = include_str!("../../data/blogs.json");

/// Parse the bundled job postings.
///
/// # Errors
///
/// Returns an error if the bundled JSON does not match the job schema.
pub fn bundled_jobs() -> Result<Vec<Job>> {
    Ok(serde_json::from_str(JOBS_JSON)?)
}

/// Parse the bundled blog posts.
///
/// # Errors
///
/// Returns an error if the bundled JSON does not match the blog schema.
pub fn bundled_blogs() -> Result<Vec<Blog>> {
    Ok(serde_json::from_str(BLOGS_JSON)?)
}
