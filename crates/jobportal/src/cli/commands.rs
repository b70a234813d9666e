//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::error::Result;
use crate::model::{JobCategory, JobStatus, JobType};
use crate::render::OutputFormat;
use crate::search::{BlogFilter, JobFilter};

/// Home page arguments.
#[derive(Debug, Args)]
pub struct HomeCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Jobs listing arguments.
///
/// Flags are applied on top of `--query`, so a pasted query string can be
/// narrowed further from the command line.
#[derive(Debug, Args)]
pub struct JobsCommand {
    /// Search title, department and description
    #[arg(short, long)]
    pub search: Option<String>,

    /// Filter by category
    #[arg(long, value_enum)]
    pub category: Option<CategoryArg>,

    /// Filter by location (substring)
    #[arg(short, long)]
    pub location: Option<String>,

    /// Filter by department (substring)
    #[arg(short, long)]
    pub department: Option<String>,

    /// Filter by job type
    #[arg(short = 't', long, value_enum)]
    pub job_type: Option<JobTypeArg>,

    /// Filter by status
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,

    /// Filter by qualification (substring)
    #[arg(long)]
    pub qualification: Option<String>,

    /// Listing query string (e.g. "category=central&status=open")
    #[arg(long)]
    pub query: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl JobsCommand {
    /// The filter these arguments describe.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidFilter`] if `--query` holds an unknown
    /// category, job type or status.
    pub fn filter(&self) -> Result<JobFilter> {
        let mut filter = match &self.query {
            Some(query) => JobFilter::from_query(query)?,
            None => JobFilter::new(),
        };
        if let Some(search) = &self.search {
            filter = filter.with_search(search.as_str());
        }
        if let Some(category) = self.category {
            filter = filter.with_category(category.into());
        }
        if let Some(location) = &self.location {
            filter = filter.with_location(location.as_str());
        }
        if let Some(department) = &self.department {
            filter = filter.with_department(department.as_str());
        }
        if let Some(job_type) = self.job_type {
            filter = filter.with_job_type(job_type.into());
        }
        if let Some(status) = self.status {
            filter = filter.with_status(status.into());
        }
        if let Some(qualification) = &self.qualification {
            filter = filter.with_qualification(qualification.as_str());
        }
        Ok(filter)
    }
}

/// Blog listing arguments.
#[derive(Debug, Args)]
pub struct BlogsCommand {
    /// Search title, excerpt, content and tags
    #[arg(short, long)]
    pub search: Option<String>,

    /// Filter by category (exact name)
    #[arg(long)]
    pub category: Option<String>,

    /// Filter by tag
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Listing query string (e.g. "tag=UPSC")
    #[arg(long)]
    pub query: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

impl BlogsCommand {
    /// The filter these arguments describe.
    #[must_use]
    pub fn filter(&self) -> BlogFilter {
        let mut filter = self
            .query
            .as_deref()
            .map(BlogFilter::from_query)
            .unwrap_or_default();
        if let Some(search) = &self.search {
            filter = filter.with_search(search.as_str());
        }
        if let Some(category) = &self.category {
            filter = filter.with_category(category.as_str());
        }
        if let Some(tag) = &self.tag {
            filter = filter.with_tag(tag.as_str());
        }
        filter
    }
}

/// Arguments for a single job or blog post.
#[derive(Debug, Args)]
pub struct DetailCommand {
    /// Record id (blog posts also accept a slug)
    pub id: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Open a site path or URL.
#[derive(Debug, Args)]
pub struct OpenCommand {
    /// Path or URL, e.g. "/jobs?category=state" or a shared link
    pub target: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Admin dashboard commands.
///
/// Nothing here changes the catalog; submissions and deletions are
/// validated and reported only.
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// List jobs and blog posts
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Print a job form as JSON (empty, or prefilled for editing)
    JobForm {
        /// Job to edit
        #[arg(long)]
        edit: Option<String>,
    },

    /// Print a blog form as JSON (empty, or prefilled for editing)
    BlogForm {
        /// Blog post to edit (id or slug)
        #[arg(long)]
        edit: Option<String>,
    },

    /// Validate and submit a job form
    SubmitJob {
        /// JSON file holding the form
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    /// Validate and submit a blog form
    SubmitBlog {
        /// JSON file holding the form
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    /// Delete a job
    DeleteJob {
        /// Job id
        id: String,
    },

    /// Delete a blog post
    DeleteBlog {
        /// Blog post id or slug
        id: String,
    },
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Job category argument for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    /// Central government
    Central,
    /// State government
    State,
    /// Public sector undertakings
    Psu,
    /// Banking
    Banking,
    /// Defence and police
    Defence,
}

impl From<CategoryArg> for JobCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Central => Self::Central,
            CategoryArg::State => Self::State,
            CategoryArg::Psu => Self::Psu,
            CategoryArg::Banking => Self::Banking,
            CategoryArg::Defence => Self::Defence,
        }
    }
}

/// Job type argument for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum JobTypeArg {
    /// Permanent posts
    Permanent,
    /// Contract posts
    Contract,
    /// Temporary posts
    Temporary,
}

impl From<JobTypeArg> for JobType {
    fn from(arg: JobTypeArg) -> Self {
        match arg {
            JobTypeArg::Permanent => Self::Permanent,
            JobTypeArg::Contract => Self::Contract,
            JobTypeArg::Temporary => Self::Temporary,
        }
    }
}

/// Job status argument for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Accepting applications
    Open,
    /// Applications closed
    Closed,
    /// Not yet open
    Upcoming,
}

impl From<StatusArg> for JobStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Open => Self::Open,
            StatusArg::Closed => Self::Closed,
            StatusArg::Upcoming => Self::Upcoming,
        }
    }
}
