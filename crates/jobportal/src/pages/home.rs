//! Home page: featured jobs, category tiles, latest posts.

use std::cmp::Reverse;

use serde::Serialize;

use super::{BlogCard, JobCard, PageContext};
use crate::error::Result;
use crate::model::JobCategory;
use crate::route::{NavLink, Route};
use crate::search::JobFilter;

/// Categories that get a tile, with their tile names.
const TILES: [(JobCategory, &str); 4] = [
    (JobCategory::Central, "Central Government"),
    (JobCategory::State, "State Government"),
    (JobCategory::Banking, "Banking & Finance"),
    (JobCategory::Defence, "Defence & Police"),
];

/// A "Browse by Category" tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTile {
    pub name: &'static str,
    pub category: JobCategory,
    /// Jobs currently listed in the category.
    pub count: usize,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub site_name: String,
    pub popular_searches: Vec<NavLink>,
    pub categories: Vec<CategoryTile>,
    pub featured_jobs: Vec<JobCard>,
    pub latest_blogs: Vec<BlogCard>,
}

impl HomePage {
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read.
    pub fn build(ctx: &PageContext<'_>) -> Result<Self> {
        let listing = &ctx.config.listing;
        let jobs = ctx.catalog.jobs()?;

        let categories = TILES
            .into_iter()
            .map(|(category, name)| CategoryTile {
                name,
                category,
                count: jobs.iter().filter(|j| j.category == category).count(),
                path: Route::Jobs(JobFilter::new().with_category(category)).path(),
            })
            .collect();

        let featured_jobs = jobs
            .iter()
            .filter(|j| j.is_open())
            .take(listing.featured_jobs)
            .map(|j| JobCard::new(j, ctx))
            .collect();

        let mut blogs = ctx.catalog.blogs()?;
        blogs.sort_by_key(|b| Reverse(b.published_date));
        let latest_blogs = blogs
            .iter()
            .take(listing.recent_blogs)
            .map(|b| BlogCard::new(b, ctx))
            .collect();

        Ok(Self {
            site_name: ctx.config.site.name.clone(),
            popular_searches: popular_searches(),
            categories,
            featured_jobs,
            latest_blogs,
        })
    }
}

fn popular_searches() -> Vec<NavLink> {
    vec![
        NavLink::leaf(
            "Banking",
            Route::Jobs(JobFilter::new().with_category(JobCategory::Banking)).path(),
        ),
        NavLink::leaf("SSC", Route::Jobs(JobFilter::new().with_department("ssc")).path()),
        NavLink::leaf("UPSC", Route::Jobs(JobFilter::new().with_department("upsc")).path()),
        NavLink::leaf(
            "Railways",
            Route::Jobs(JobFilter::new().with_department("railway")).path(),
        ),
    ]
}

/// Jobs listing path for the hero search form. Blank fields are left out.
#[must_use]
pub fn search_path(term: &str, location: &str) -> String {
    Route::Jobs(JobFilter::new().with_search(term).with_location(location)).path()
}
