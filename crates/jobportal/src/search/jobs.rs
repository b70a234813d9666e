//! Job search and filtering.

use serde::Serialize;
use tracing::{debug, trace};

use super::first_seen;
use super::query::{contains_folded, encode_pairs, normalize, parse_pairs, present, same_text};
use crate::error::Result;
use crate::model::{Job, JobCategory, JobStatus, JobType};

/// One criterion of a [`JobFilter`], excluding the free-text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKey {
    /// Exact category.
    Category,
    /// Location substring.
    Location,
    /// Department substring.
    Department,
    /// Exact job type.
    JobType,
    /// Exact status.
    Status,
    /// Substring of any qualification.
    Qualification,
}

impl FilterKey {
    /// Keys in applied-filter badge order.
    pub const ALL: [Self; 6] = [
        Self::Category,
        Self::Location,
        Self::Department,
        Self::JobType,
        Self::Status,
        Self::Qualification,
    ];

    /// Badge label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Location => "Location",
            Self::Department => "Department",
            Self::JobType => "Job Type",
            Self::Status => "Status",
            Self::Qualification => "Qualification",
        }
    }

    /// Query-string key.
    #[must_use]
    pub fn query_key(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Location => "location",
            Self::Department => "department",
            Self::JobType => "jobType",
            Self::Status => "status",
            Self::Qualification => "qualification",
        }
    }
}

/// An active criterion, as shown in the "Applied Filters" strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedFilter {
    pub key: FilterKey,
    pub label: &'static str,
    pub value: String,
}

/// Search term plus sidebar criteria for the job listing.
///
/// Every set criterion must hold for a job to match. Text criteria match
/// case-insensitive substrings; enum criteria match exactly. A blank text
/// criterion is the same as an absent one.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    /// Matched against title, department and description.
    pub search: Option<String>,
    pub category: Option<JobCategory>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub status: Option<JobStatus>,
    /// Matched against each qualification line.
    pub qualification: Option<String>,
}

impl PartialEq for JobFilter {
    fn eq(&self, other: &Self) -> bool {
        same_text(self.search.as_deref(), other.search.as_deref())
            && self.category == other.category
            && same_text(self.department.as_deref(), other.department.as_deref())
            && same_text(self.location.as_deref(), other.location.as_deref())
            && self.job_type == other.job_type
            && self.status == other.status
            && same_text(self.qualification.as_deref(), other.qualification.as_deref())
    }
}

impl Eq for JobFilter {}

impl JobFilter {
    /// A filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search term. Blank input clears it.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = normalize(term);
        self
    }

    /// Restrict to one category.
    #[must_use]
    pub fn with_category(mut self, category: JobCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Restrict to departments containing `department`.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = normalize(department);
        self
    }

    /// Restrict to locations containing `location`.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = normalize(location);
        self
    }

    /// Restrict to one job type.
    #[must_use]
    pub fn with_job_type(mut self, job_type: JobType) -> Self {
        self.job_type = Some(job_type);
        self
    }

    /// Restrict to one status.
    #[must_use]
    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict to jobs with a qualification containing `qualification`.
    #[must_use]
    pub fn with_qualification(mut self, qualification: impl Into<String>) -> Self {
        self.qualification = normalize(qualification);
        self
    }

    /// Parse the filter from a `/jobs` query string.
    ///
    /// Unknown keys are ignored and blank values count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidFilter`] for an unknown category, job
    /// type or status value.
    pub fn from_query(query: &str) -> Result<Self> {
        let mut filter = Self::default();
        for (key, value) in parse_pairs(query) {
            let Some(value) = normalize(value) else {
                continue;
            };
            match key.as_str() {
                "search" => filter.search = Some(value),
                "category" => filter.category = Some(value.parse()?),
                "department" => filter.department = Some(value),
                "location" => filter.location = Some(value),
                "jobType" => filter.job_type = Some(value.parse()?),
                "status" => filter.status = Some(value.parse()?),
                "qualification" => filter.qualification = Some(value),
                other => trace!(key = other, "Ignoring unknown job query key"),
            }
        }
        Ok(filter)
    }

    /// Encode the filter as a query string (no leading `?`).
    ///
    /// Keys appear in a fixed order and absent criteria are omitted, so an
    /// empty filter encodes to the empty string.
    #[must_use]
    pub fn to_query(&self) -> String {
        encode_pairs([
            ("search", text(self.search.as_deref())),
            ("category", self.category.map(|c| c.to_string())),
            ("department", text(self.department.as_deref())),
            ("location", text(self.location.as_deref())),
            ("jobType", self.job_type.map(|t| t.to_string())),
            ("status", self.status.map(|s| s.to_string())),
            ("qualification", text(self.qualification.as_deref())),
        ])
    }

    /// Whether any sidebar criterion is set. The search term does not count.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        FilterKey::ALL.into_iter().any(|key| self.value_of(key).is_some())
    }

    /// Whether nothing at all is set, search term included.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        present(self.search.as_deref()).is_none() && !self.has_active_filters()
    }

    /// Reset every criterion and the search term.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Drop a single criterion.
    pub fn remove(&mut self, key: FilterKey) {
        match key {
            FilterKey::Category => self.category = None,
            FilterKey::Location => self.location = None,
            FilterKey::Department => self.department = None,
            FilterKey::JobType => self.job_type = None,
            FilterKey::Status => self.status = None,
            FilterKey::Qualification => self.qualification = None,
        }
    }

    /// Active criteria in badge order.
    #[must_use]
    pub fn applied(&self) -> Vec<AppliedFilter> {
        FilterKey::ALL
            .into_iter()
            .filter_map(|key| {
                self.value_of(key).map(|value| AppliedFilter {
                    key,
                    label: key.label(),
                    value,
                })
            })
            .collect()
    }

    fn value_of(&self, key: FilterKey) -> Option<String> {
        match key {
            FilterKey::Category => self.category.map(|c| c.to_string()),
            FilterKey::Location => text(self.location.as_deref()),
            FilterKey::Department => text(self.department.as_deref()),
            FilterKey::JobType => self.job_type.map(|t| t.to_string()),
            FilterKey::Status => self.status.map(|s| s.to_string()),
            FilterKey::Qualification => text(self.qualification.as_deref()),
        }
    }

    /// Whether a single job satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(term) = present(self.search.as_deref()) {
            let term = term.to_lowercase();
            if !(contains_folded(&job.title, &term)
                || contains_folded(&job.department, &term)
                || contains_folded(&job.description, &term))
            {
                return false;
            }
        }

        if self.category.is_some_and(|c| c != job.category) {
            return false;
        }

        if let Some(department) = present(self.department.as_deref()) {
            if !contains_folded(&job.department, &department.to_lowercase()) {
                return false;
            }
        }

        if let Some(location) = present(self.location.as_deref()) {
            if !contains_folded(&job.location, &location.to_lowercase()) {
                return false;
            }
        }

        if self.job_type.is_some_and(|t| t != job.job_type) {
            return false;
        }

        if self.status.is_some_and(|s| s != job.status) {
            return false;
        }

        if let Some(qualification) = present(self.qualification.as_deref()) {
            let needle = qualification.to_lowercase();
            if !job
                .qualifications
                .iter()
                .any(|q| contains_folded(q, &needle))
            {
                return false;
            }
        }

        true
    }

    /// Keep the matching jobs, preserving their order.
    #[must_use]
    pub fn apply(&self, jobs: Vec<Job>) -> Vec<Job> {
        let total = jobs.len();
        let matched: Vec<Job> = jobs.into_iter().filter(|job| self.matches(job)).collect();
        debug!(
            total,
            matched = matched.len(),
            query = %self.to_query(),
            "Applied job filter"
        );
        matched
    }
}

fn text(value: Option<&str>) -> Option<String> {
    present(value).map(str::to_string)
}

/// Option lists for the job filter sidebar.
///
/// Each list holds distinct values in the order they first appear in the
/// catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFacets {
    pub departments: Vec<String>,
    pub locations: Vec<String>,
    pub categories: Vec<JobCategory>,
    pub job_types: Vec<JobType>,
    pub statuses: Vec<JobStatus>,
}

impl JobFacets {
    /// Collect the option lists from a set of jobs.
    #[must_use]
    pub fn from_jobs(jobs: &[Job]) -> Self {
        Self {
            departments: first_seen(jobs.iter().map(|j| j.department.clone())),
            locations: first_seen(jobs.iter().map(|j| j.location.clone())),
            categories: first_seen(jobs.iter().map(|j| j.category)),
            job_types: first_seen(jobs.iter().map(|j| j.job_type)),
            statuses: first_seen(jobs.iter().map(|j| j.status)),
        }
    }
}
