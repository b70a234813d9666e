//! Page models.
//!
//! Each page is plain data assembled from the catalog, the listing settings
//! and the current date. Nothing here renders; see [`crate::render`] for
//! turning a [`Page`] into text.

mod admin;
mod blog_detail;
mod blogs;
mod home;
mod job_detail;
mod jobs;
mod not_found;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

pub use admin::{
    delete_blog, delete_job, slugify, AdminBlogRow, AdminJobRow, AdminPage, BlogForm, JobForm,
    Submission,
};
pub use blog_detail::BlogDetailPage;
pub use blogs::BlogsPage;
pub use home::{search_path, CategoryTile, HomePage};
pub use job_detail::{DateRow, FeeRow, JobDetailPage};
pub use jobs::JobsPage;
pub use not_found::NotFoundPage;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use crate::format;
use crate::model::{Badge, Blog, Job, JobCategory, JobStatus};
use crate::route::Route;

/// What every page builder needs.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub catalog: &'a dyn Catalog,
    pub config: &'a Config,
    /// Reference date for "posted ... ago" lines.
    pub today: NaiveDate,
}

impl<'a> PageContext<'a> {
    #[must_use]
    pub fn new(catalog: &'a dyn Catalog, config: &'a Config, today: NaiveDate) -> Self {
        Self {
            catalog,
            config,
            today,
        }
    }
}

/// A fully built page.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "camelCase")]
pub enum Page {
    Home(HomePage),
    Jobs(JobsPage),
    JobDetail(JobDetailPage),
    Blogs(BlogsPage),
    BlogDetail(BlogDetailPage),
    Admin(AdminPage),
    NotFound(NotFoundPage),
}

impl Page {
    /// Build the page a route names.
    ///
    /// Detail routes for unknown ids produce the matching not-found page
    /// rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or a share URL cannot
    /// be built from the configured base URL.
    pub fn for_route(ctx: &PageContext<'_>, route: &Route) -> Result<Self> {
        debug!(path = %route.path(), "Building page");
        let page = match route {
            Route::Home => Self::Home(HomePage::build(ctx)?),
            Route::Jobs(filter) => Self::Jobs(JobsPage::build(ctx, filter.clone())?),
            Route::JobDetail(id) => match JobDetailPage::build(ctx, id)? {
                Some(page) => Self::JobDetail(page),
                None => Self::NotFound(NotFoundPage::job()),
            },
            Route::Blogs(filter) => Self::Blogs(BlogsPage::build(ctx, filter.clone())?),
            Route::BlogDetail(id) => match BlogDetailPage::build(ctx, id)? {
                Some(page) => Self::BlogDetail(page),
                None => Self::NotFound(NotFoundPage::blog()),
            },
            Route::Admin => Self::Admin(AdminPage::build(ctx)?),
            Route::NotFound(path) => Self::NotFound(NotFoundPage::page(path)),
        };
        Ok(page)
    }

    /// Heading shown at the top of the page.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Home(_) => "Find Your Dream Government Job".to_string(),
            Self::Jobs(_) => "Government Jobs".to_string(),
            Self::JobDetail(page) => page.job.title.clone(),
            Self::Blogs(_) => "Latest Updates & News".to_string(),
            Self::BlogDetail(page) => page.blog.title.clone(),
            Self::Admin(_) => "Admin Dashboard".to_string(),
            Self::NotFound(page) => page.heading.to_string(),
        }
    }

    /// Whether this is one of the not-found views.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// A job as shown on listing cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCard {
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub category: JobCategory,
    pub status: JobStatus,
    pub badge: Badge,
    pub vacancies: u32,
    pub last_date: String,
    pub posted_ago: String,
    /// Leading qualifications; `more_qualifications` marks a truncated list.
    pub qualifications: Vec<String>,
    pub more_qualifications: bool,
    pub path: String,
}

impl JobCard {
    pub(crate) fn new(job: &Job, ctx: &PageContext<'_>) -> Self {
        let (shown, more) = job.qualification_preview(ctx.config.listing.qualification_preview);
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            department: job.department.clone(),
            location: job.location.clone(),
            category: job.category,
            status: job.status,
            badge: job.status.badge(),
            vacancies: job.vacancies,
            last_date: format::short_date(job.last_date),
            posted_ago: format::relative_date(job.posted_date, ctx.today),
            qualifications: shown.to_vec(),
            more_qualifications: more,
            path: job.path(),
        }
    }
}

/// A blog post as shown on listing cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogCard {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    pub published: String,
    pub read_time: u32,
    pub tags: Vec<String>,
    pub path: String,
}

impl BlogCard {
    pub(crate) fn new(blog: &Blog, ctx: &PageContext<'_>) -> Self {
        Self {
            id: blog.id.clone(),
            title: blog.title.clone(),
            excerpt: blog.excerpt.clone(),
            author: blog.author.clone(),
            category: blog.category.clone(),
            published: format::short_date(blog.published_date),
            read_time: blog.read_time,
            tags: blog.tag_preview(ctx.config.listing.tag_preview).to_vec(),
            path: blog.path(),
        }
    }
}

/// Message shown in place of an empty listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub heading: &'static str,
    pub message: &'static str,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::model::job::tests::date;

    pub(crate) fn bundled() -> (InMemoryCatalog, Config) {
        (InMemoryCatalog::bundled().unwrap(), Config::default())
    }

    pub(crate) fn today() -> NaiveDate {
        date("2025-03-01")
    }

    #[test]
    fn test_for_route_dispatch() {
        let (catalog, config) = bundled();
        let ctx = PageContext::new(&catalog, &config, today());

        let page = Page::for_route(&ctx, &Route::Home).unwrap();
        assert!(matches!(page, Page::Home(_)));

        let page = Page::for_route(&ctx, &Route::parse("/jobs?category=psu").unwrap()).unwrap();
        let Page::Jobs(jobs) = page else {
            panic!("expected jobs page");
        };
        assert!(jobs.jobs.iter().all(|j| j.category == JobCategory::Psu));

        let page = Page::for_route(&ctx, &Route::Admin).unwrap();
        assert_eq!(page.title(), "Admin Dashboard");
    }

    #[test]
    fn test_missing_records_render_not_found() {
        let (catalog, config) = bundled();
        let ctx = PageContext::new(&catalog, &config, today());

        let page = Page::for_route(&ctx, &Route::JobDetail("999".into())).unwrap();
        assert!(page.is_not_found());
        assert_eq!(page.title(), "Job Not Found");

        let page = Page::for_route(&ctx, &Route::BlogDetail("nope".into())).unwrap();
        assert_eq!(page.title(), "Blog Post Not Found");

        let page = Page::for_route(&ctx, &Route::parse("/careers").unwrap()).unwrap();
        assert_eq!(page.title(), "Page Not Found");
    }

    #[test]
    fn test_page_json_is_tagged() {
        let (catalog, config) = bundled();
        let ctx = PageContext::new(&catalog, &config, today());

        let page = Page::for_route(&ctx, &Route::JobDetail("1".into())).unwrap();
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["page"], "jobDetail");
        assert_eq!(json["job"]["id"], "1");
    }

    #[test]
    fn test_job_card_preview() {
        let (catalog, mut config) = bundled();
        config.listing.qualification_preview = 1;
        let ctx = PageContext::new(&catalog, &config, today());

        let mut job = crate::model::job::tests::sample_job("1", "Clerk", JobCategory::Central);
        job.qualifications = vec!["Graduate".into(), "Typing".into()];
        job.posted_date = date("2025-02-26");

        let card = JobCard::new(&job, &ctx);
        assert_eq!(card.qualifications, vec!["Graduate"]);
        assert!(card.more_qualifications);
        assert_eq!(card.posted_ago, "3 days ago");
        assert_eq!(card.last_date, "Jul 1, 2025");
        assert_eq!(card.badge, Badge::Success);
    }
}
