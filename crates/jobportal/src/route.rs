//! Site routes.
//!
//! Maps a path (optionally with query string, or a full URL pasted from a
//! share link) to the page it names, and back.

use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::Result;
use crate::model::JobCategory;
use crate::search::{BlogFilter, JobFilter};

/// Base used to resolve relative paths; never shown to users.
const RESOLVE_BASE: &str = "http://jobportal.invalid/";

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/jobs` with optional filter query.
    Jobs(JobFilter),
    /// `/jobs/{id}`
    JobDetail(String),
    /// `/blogs` with optional filter query.
    Blogs(BlogFilter),
    /// `/blogs/{id}`
    BlogDetail(String),
    /// `/admin`
    Admin,
    /// Anything else; holds the requested path.
    NotFound(String),
}

impl Route {
    /// Resolve a path, path-with-query, or absolute URL.
    ///
    /// Trailing slashes and fragments are ignored. Unknown paths resolve to
    /// [`Route::NotFound`] rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidFilter`] if a `/jobs` query names an
    /// unknown category, job type or status.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let Some(url) = Url::parse(RESOLVE_BASE)
            .ok()
            .and_then(|base| base.join(input).ok())
        else {
            return Ok(Self::NotFound(input.to_string()));
        };

        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();
        let query = url.query().unwrap_or("");

        let route = match segments.as_slice() {
            [] => Self::Home,
            ["jobs"] => Self::Jobs(JobFilter::from_query(query)?),
            ["jobs", id] => Self::JobDetail((*id).to_string()),
            ["blogs"] => Self::Blogs(BlogFilter::from_query(query)),
            ["blogs", id] => Self::BlogDetail((*id).to_string()),
            ["admin"] => Self::Admin,
            _ => Self::NotFound(url.path().to_string()),
        };
        debug!(input, ?route, "Resolved route");
        Ok(route)
    }

    /// Canonical path for this route, including the filter query string.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Jobs(filter) => with_query("/jobs", &filter.to_query()),
            Self::JobDetail(id) => format!("/jobs/{id}"),
            Self::Blogs(filter) => with_query("/blogs", &filter.to_query()),
            Self::BlogDetail(id) => format!("/blogs/{id}"),
            Self::Admin => "/admin".to_string(),
            Self::NotFound(path) => path.clone(),
        }
    }

    /// Whether this is the catch-all route.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

/// A header navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub name: String,
    pub path: String,
    /// Dropdown entries, if any.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavLink>,
}

impl NavLink {
    pub(crate) fn leaf(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            children: Vec::new(),
        }
    }
}

/// Header navigation: Home, Jobs (one entry per category), Blogs, Admin.
#[must_use]
pub fn nav_links() -> Vec<NavLink> {
    let categories = JobCategory::ALL
        .into_iter()
        .map(|c| {
            NavLink::leaf(
                c.label(),
                Route::Jobs(JobFilter::new().with_category(c)).path(),
            )
        })
        .collect();

    vec![
        NavLink::leaf("Home", Route::Home.path()),
        NavLink {
            name: "Jobs".to_string(),
            path: "/jobs".to_string(),
            children: categories,
        },
        NavLink::leaf("Blogs", "/blogs"),
        NavLink::leaf("Admin", Route::Admin.path()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::JobStatus;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("/").unwrap(), Route::Home);
        assert_eq!(Route::parse("").unwrap(), Route::Home);
        assert_eq!(Route::parse("/admin").unwrap(), Route::Admin);
        assert_eq!(Route::parse("/admin/").unwrap(), Route::Admin);
    }

    #[test]
    fn test_parse_listing_with_query() {
        let route = Route::parse("/jobs?category=central&status=open").unwrap();
        let Route::Jobs(filter) = route else {
            panic!("expected jobs route");
        };
        assert_eq!(filter.category, Some(JobCategory::Central));
        assert_eq!(filter.status, Some(JobStatus::Open));

        let route = Route::parse("/blogs?tag=UPSC").unwrap();
        assert_eq!(route, Route::Blogs(BlogFilter::new().with_tag("UPSC")));
    }

    #[test]
    fn test_parse_detail_routes() {
        assert_eq!(
            Route::parse("/jobs/7").unwrap(),
            Route::JobDetail("7".to_string())
        );
        assert_eq!(
            Route::parse("/blogs/prepare-for-upsc/").unwrap(),
            Route::BlogDetail("prepare-for-upsc".to_string())
        );
    }

    #[test]
    fn test_parse_absolute_url() {
        let route = Route::parse("https://jobs.example.in/jobs/3#apply").unwrap();
        assert_eq!(route, Route::JobDetail("3".to_string()));
    }

    #[test]
    fn test_parse_unknown_is_not_found() {
        let route = Route::parse("/about").unwrap();
        assert!(route.is_not_found());
        assert_eq!(route.path(), "/about");

        assert!(Route::parse("/jobs/1/apply").unwrap().is_not_found());
    }

    #[test]
    fn test_parse_invalid_filter_value() {
        let err = Route::parse("/jobs?status=archived").unwrap_err();
        assert!(matches!(err, Error::InvalidFilter { key: "status", .. }));
    }

    #[test]
    fn test_path_round_trip() {
        for path in [
            "/",
            "/jobs",
            "/jobs?search=clerk&category=banking",
            "/jobs/12",
            "/blogs?category=Exam+Guide",
            "/blogs/3",
            "/admin",
        ] {
            assert_eq!(Route::parse(path).unwrap().path(), path);
        }
    }

    #[test]
    fn test_nav_links() {
        let links = nav_links();
        let names: Vec<_> = links.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "Jobs", "Blogs", "Admin"]);

        let jobs = &links[1];
        assert_eq!(jobs.children.len(), 5);
        assert_eq!(jobs.children[0].name, "Central Government");
        assert_eq!(jobs.children[0].path, "/jobs?category=central");
        assert_eq!(jobs.children[4].path, "/jobs?category=defence");
    }
}
