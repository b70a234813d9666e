//! Search and filtering over catalog records.
//!
//! Filters mirror the listing pages:
//!
//! - **Jobs**: a free-text search across title, department and description,
//!   plus AND-combined sidebar criteria (category, location, department, job
//!   type, status, qualification).
//! - **Blogs**: a free-text search across title, excerpt, content and tags,
//!   plus category and tag.
//!
//! Both filters round-trip through the page query string so a listing can be
//! linked to and restored.
//!
//! # Example
//!
//! ```
//! use jobportal::search::JobFilter;
//! use jobportal::model::JobCategory;
//!
//! let filter = JobFilter::from_query("category=banking&search=officer").unwrap();
//! assert_eq!(filter.category, Some(JobCategory::Banking));
//! assert_eq!(filter.to_query(), "search=officer&category=banking");
//! ```

mod blogs;
mod jobs;
mod query;

use std::collections::HashSet;
use std::hash::Hash;

pub use blogs::{BlogFacets, BlogFilter, CategoryCount};
pub use jobs::{AppliedFilter, FilterKey, JobFacets, JobFilter};

/// Distinct items in the order they first appear.
fn first_seen<T: Eq + Hash + Clone>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_keeps_order() {
        let values = first_seen(["b", "a", "b", "c", "a"]);
        assert_eq!(values, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_first_seen_empty() {
        let values: Vec<u8> = first_seen(Vec::new());
        assert!(values.is_empty());
    }
}
