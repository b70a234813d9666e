//! Core record types for jobportal.
//!
//! Jobs and blog posts are immutable once loaded. Their JSON form uses the
//! camelCase field names of the bundled data files.

pub mod blog;
pub mod job;

pub use blog::Blog;
pub use job::{
    ApplicationFee, Badge, FeeCategory, ImportantDates, Job, JobCategory, JobStatus, JobType,
};
