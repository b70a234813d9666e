//! Admin dashboard: record tables and add/edit forms.
//!
//! Submitting a form validates it and returns the record it would produce.
//! Deleting returns a notice. Neither touches the catalog.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use super::PageContext;
use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::format;
use crate::model::{
    ApplicationFee, Badge, Blog, ImportantDates, Job, JobCategory, JobStatus, JobType,
};

/// Runs of characters that cannot appear in a slug.
static SLUG_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid regex pattern"));

/// Average reading speed used for new posts.
const WORDS_PER_MINUTE: usize = 200;

/// URL-safe slug for a title: "SSC CGL 2025: A Guide" becomes
/// "ssc-cgl-2025-a-guide".
#[must_use]
pub fn slugify(title: &str) -> String {
    SLUG_SEPARATORS
        .replace_all(&title.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminJobRow {
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub last_date: String,
    pub status: JobStatus,
    pub badge: Badge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBlogRow {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub published: String,
}

/// Job and blog tables.
#[derive(Debug, Clone, Serialize)]
pub struct AdminPage {
    pub jobs: Vec<AdminJobRow>,
    pub blogs: Vec<AdminBlogRow>,
}

impl AdminPage {
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read.
    pub fn build(ctx: &PageContext<'_>) -> Result<Self> {
        let jobs = ctx
            .catalog
            .jobs()?
            .into_iter()
            .map(|job| AdminJobRow {
                last_date: format::short_date(job.last_date),
                badge: job.status.badge(),
                status: job.status,
                id: job.id,
                title: job.title,
                department: job.department,
                location: job.location,
            })
            .collect();

        let blogs = ctx
            .catalog
            .blogs()?
            .into_iter()
            .map(|blog| AdminBlogRow {
                published: format::short_date(blog.published_date),
                id: blog.id,
                title: blog.title,
                author: blog.author,
                category: blog.category,
            })
            .collect();

        Ok(Self { jobs, blogs })
    }
}

/// Outcome of a simulated form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission<T> {
    pub message: &'static str,
    /// The record the form would have saved.
    pub record: T,
}

/// Draft of the add/edit job form.
///
/// `id` is set when editing an existing job and absent when adding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub department: String,
    pub location: String,
    pub salary: String,
    pub posted_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub category: JobCategory,
    /// One qualification per line.
    pub qualifications: String,
    pub description: String,
    pub vacancies: u32,
    pub job_type: JobType,
    pub age_limit: String,
}

impl JobForm {
    /// Empty "add" form, posted today with one vacancy.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            posted_date: Some(today),
            vacancies: 1,
            ..Self::default()
        }
    }

    /// "Edit" form prefilled from a job.
    #[must_use]
    pub fn edit(job: &Job) -> Self {
        Self {
            id: Some(job.id.clone()),
            title: job.title.clone(),
            department: job.department.clone(),
            location: job.location.clone(),
            salary: job.salary.clone(),
            posted_date: Some(job.posted_date),
            last_date: Some(job.last_date),
            category: job.category,
            qualifications: job.qualifications.join("\n"),
            description: job.description.clone(),
            vacancies: job.vacancies,
            job_type: job.job_type,
            age_limit: job.age_limit.clone(),
        }
    }

    /// Non-blank qualification lines, trimmed.
    #[must_use]
    pub fn qualification_lines(&self) -> Vec<String> {
        self.qualifications
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect()
    }

    /// Check every required field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] for the first field that fails.
    pub fn validate(&self) -> Result<()> {
        required("title", &self.title)?;
        required("department", &self.department)?;
        required("location", &self.location)?;
        required("salary", &self.salary)?;
        required("ageLimit", &self.age_limit)?;
        required("description", &self.description)?;
        if self.qualification_lines().is_empty() {
            return Err(Error::invalid_field("qualifications", "is required"));
        }
        if self.vacancies == 0 {
            return Err(Error::invalid_field("vacancies", "must be at least 1"));
        }
        let (posted, last) = self.dates()?;
        if last < posted {
            return Err(Error::invalid_field(
                "lastDate",
                "must not be before the posted date",
            ));
        }
        Ok(())
    }

    fn dates(&self) -> Result<(NaiveDate, NaiveDate)> {
        let posted = self
            .posted_date
            .ok_or_else(|| Error::invalid_field("postedDate", "is required"))?;
        let last = self
            .last_date
            .ok_or_else(|| Error::invalid_field("lastDate", "is required"))?;
        Ok((posted, last))
    }

    /// Validate and return the job this form would save.
    ///
    /// Editing keeps the fields the form does not cover (fees, apply link,
    /// selection process, extra dates, status) from the stored job. Adding
    /// assigns the next free id and derives the status from `today`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if validation fails, or
    /// [`Error::NotFound`] when editing an id the catalog does not have.
    pub fn submit(&self, ctx: &PageContext<'_>) -> Result<Submission<Job>> {
        self.validate()?;
        let (posted_date, last_date) = self.dates()?;

        let (mut job, message) = match &self.id {
            Some(id) => (ctx.catalog.require_job(id)?, "Job updated successfully!"),
            None => {
                let id = next_id(ctx.catalog.jobs()?.iter().map(|j| j.id.as_str()))?;
                (
                    Job {
                        id,
                        title: String::new(),
                        department: String::new(),
                        location: String::new(),
                        salary: String::new(),
                        posted_date,
                        last_date,
                        category: self.category,
                        qualifications: Vec::new(),
                        description: String::new(),
                        vacancies: self.vacancies,
                        job_type: self.job_type,
                        age_limit: String::new(),
                        application_fee: ApplicationFee::default(),
                        apply_link: String::new(),
                        selection_process: Vec::new(),
                        important_dates: ImportantDates {
                            application_start: posted_date,
                            application_end: last_date,
                            exam_date: None,
                            result_date: None,
                        },
                        status: status_on(ctx.today, posted_date, last_date),
                    },
                    "Job added successfully!",
                )
            }
        };

        job.title = self.title.trim().to_string();
        job.department = self.department.trim().to_string();
        job.location = self.location.trim().to_string();
        job.salary = self.salary.trim().to_string();
        job.posted_date = posted_date;
        job.last_date = last_date;
        job.category = self.category;
        job.qualifications = self.qualification_lines();
        job.description = self.description.trim().to_string();
        job.vacancies = self.vacancies;
        job.job_type = self.job_type;
        job.age_limit = self.age_limit.trim().to_string();

        info!(id = %job.id, notice = message, "Simulated job submission; catalog unchanged");
        Ok(Submission {
            message,
            record: job,
        })
    }
}

/// Draft of the add/edit blog form.
///
/// `id` is set when editing an existing post and absent when adding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub excerpt: String,
    /// Markdown body.
    pub content: String,
    pub author: String,
    pub category: String,
    /// Comma-separated.
    pub tags: String,
    pub cover_image: String,
}

impl BlogForm {
    /// Empty "add" form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// "Edit" form prefilled from a post.
    #[must_use]
    pub fn edit(blog: &Blog) -> Self {
        Self {
            id: Some(blog.id.clone()),
            title: blog.title.clone(),
            excerpt: blog.excerpt.clone(),
            content: blog.content.clone(),
            author: blog.author.clone(),
            category: blog.category.clone(),
            tags: blog.tags.join(", "),
            cover_image: blog.cover_image.clone(),
        }
    }

    /// Tags split on commas, trimmed, blanks dropped.
    #[must_use]
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    }

    /// Check every required field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] for the first field that fails.
    pub fn validate(&self) -> Result<()> {
        required("title", &self.title)?;
        if slugify(&self.title).is_empty() {
            return Err(Error::invalid_field(
                "title",
                "must contain at least one letter or digit",
            ));
        }
        required("author", &self.author)?;
        required("category", &self.category)?;
        if self.tag_list().is_empty() {
            return Err(Error::invalid_field("tags", "is required"));
        }
        required("coverImage", &self.cover_image)?;
        let is_web_url = Url::parse(self.cover_image.trim())
            .is_ok_and(|u| matches!(u.scheme(), "http" | "https"));
        if !is_web_url {
            return Err(Error::invalid_field("coverImage", "must be an http(s) URL"));
        }
        required("excerpt", &self.excerpt)?;
        required("content", &self.content)?;
        Ok(())
    }

    fn new_slug(&self, blogs: &[Blog]) -> Result<String> {
        let slug = slugify(&self.title);
        if blogs.iter().any(|b| b.slug == slug) {
            return Err(Error::invalid_field(
                "title",
                format!("a post with slug '{slug}' already exists"),
            ));
        }
        Ok(slug)
    }

    /// Validate and return the post this form would save.
    ///
    /// New posts are dated `today` and get a slug derived from the title,
    /// which must not collide with another post. Edited posts keep their
    /// slug so existing links stay valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if validation fails or the slug is
    /// taken, or [`Error::NotFound`] when editing an id the catalog does not
    /// have.
    pub fn submit(&self, ctx: &PageContext<'_>) -> Result<Submission<Blog>> {
        self.validate()?;
        let blogs = ctx.catalog.blogs()?;

        let (mut blog, message) = match &self.id {
            Some(id) => (
                ctx.catalog.require_blog(id)?,
                "Blog post updated successfully!",
            ),
            None => (
                Blog {
                    id: next_id(blogs.iter().map(|b| b.id.as_str()))?,
                    title: String::new(),
                    slug: self.new_slug(&blogs)?,
                    excerpt: String::new(),
                    content: String::new(),
                    author: String::new(),
                    category: String::new(),
                    tags: Vec::new(),
                    cover_image: String::new(),
                    published_date: ctx.today,
                    read_time: 0,
                },
                "Blog post added successfully!",
            ),
        };

        blog.title = self.title.trim().to_string();
        blog.excerpt = self.excerpt.trim().to_string();
        blog.content.clone_from(&self.content);
        blog.author = self.author.trim().to_string();
        blog.category = self.category.trim().to_string();
        blog.tags = self.tag_list();
        blog.cover_image = self.cover_image.trim().to_string();
        blog.read_time = read_time(&self.content);

        info!(id = %blog.id, notice = message, "Simulated blog submission; catalog unchanged");
        Ok(Submission {
            message,
            record: blog,
        })
    }
}

/// Simulated job deletion.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if no job has this id.
pub fn delete_job(catalog: &dyn Catalog, id: &str) -> Result<&'static str> {
    let job = catalog.require_job(id)?;
    info!(id = %job.id, "Simulated job deletion; catalog unchanged");
    Ok("This would delete the job in a real application")
}

/// Simulated blog post deletion.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if no post has this id or slug.
pub fn delete_blog(catalog: &dyn Catalog, id: &str) -> Result<&'static str> {
    let blog = catalog.require_blog(id)?;
    info!(id = %blog.id, "Simulated blog deletion; catalog unchanged");
    Ok("This would delete the blog post in a real application")
}

fn required(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::invalid_field(field, "is required"))
    } else {
        Ok(())
    }
}

/// One past the highest numeric id; non-numeric ids are ignored.
fn next_id<'a>(ids: impl Iterator<Item = &'a str>) -> Result<String> {
    let max = ids.filter_map(|id| id.parse::<u64>().ok()).max().unwrap_or(0);
    max.checked_add(1)
        .map(|id| id.to_string())
        .ok_or_else(|| Error::catalog_invalid(format!("no id left after '{max}'")))
}

fn status_on(today: NaiveDate, posted: NaiveDate, last: NaiveDate) -> JobStatus {
    if today < posted {
        JobStatus::Upcoming
    } else if today > last {
        JobStatus::Closed
    } else {
        JobStatus::Open
    }
}

/// Whole minutes at [`WORDS_PER_MINUTE`], never less than one.
fn read_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}
