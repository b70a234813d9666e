//! Jobs listing page.

use serde::Serialize;

use super::{EmptyState, JobCard, PageContext};
use crate::error::Result;
use crate::search::{AppliedFilter, JobFacets, JobFilter};

const NO_JOBS: EmptyState = EmptyState {
    heading: "No jobs found",
    message: "We couldn't find any jobs matching your criteria. Try adjusting your filters or search term.",
};

/// Filtered job listing with sidebar facets.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobsPage {
    pub filter: JobFilter,
    pub applied: Vec<AppliedFilter>,
    /// Facets always cover the whole catalog, not just the matches.
    pub facets: JobFacets,
    pub total: usize,
    pub summary: String,
    pub jobs: Vec<JobCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<EmptyState>,
}

impl JobsPage {
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read.
    pub fn build(ctx: &PageContext<'_>, filter: JobFilter) -> Result<Self> {
        let all = ctx.catalog.jobs()?;
        let total = all.len();
        let facets = JobFacets::from_jobs(&all);

        let jobs: Vec<JobCard> = filter
            .apply(all)
            .iter()
            .map(|j| JobCard::new(j, ctx))
            .collect();

        Ok(Self {
            applied: filter.applied(),
            filter,
            facets,
            total,
            summary: format!("Showing {} jobs matching your criteria", jobs.len()),
            empty: jobs.is_empty().then_some(NO_JOBS),
            jobs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{JobCategory, JobStatus};
    use crate::pages::tests::{bundled, today};
    use crate::search::FilterKey;

    fn ids(page: &JobsPage) -> Vec<&str> {
        page.jobs.iter().map(|j| j.id.as_str()).collect()
    }

    #[test]
    fn test_unfiltered_shows_everything() {
        let (catalog, config) = bundled();
        let page = JobsPage::build(&PageContext::new(&catalog, &config, today()), JobFilter::new())
            .unwrap();

        assert_eq!(page.jobs.len(), 12);
        assert_eq!(page.total, 12);
        assert_eq!(page.summary, "Showing 12 jobs matching your criteria");
        assert!(page.applied.is_empty());
        assert!(page.empty.is_none());
    }

    #[test]
    fn test_category_narrows_to_exactly_that_category() {
        let (catalog, config) = bundled();
        let ctx = PageContext::new(&catalog, &config, today());
        let page = JobsPage::build(&ctx, JobFilter::new().with_category(JobCategory::Banking))
            .unwrap();

        assert_eq!(ids(&page), vec!["3", "4"]);
        assert_eq!(page.applied.len(), 1);
        assert_eq!(page.applied[0].key, FilterKey::Category);
        assert_eq!(page.facets.categories.len(), 5);
    }

    #[test]
    fn test_search_intersects_category() {
        let (catalog, config) = bundled();
        let ctx = PageContext::new(&catalog, &config, today());
        let filter = JobFilter::new()
            .with_search("examination")
            .with_category(JobCategory::Central);
        let page = JobsPage::build(&ctx, filter).unwrap();

        assert_eq!(ids(&page), vec!["1", "2"]);
        assert!(page.jobs.iter().all(|j| j.category == JobCategory::Central));
    }

    #[test]
    fn test_no_matches_carries_empty_state() {
        let (catalog, config) = bundled();
        let ctx = PageContext::new(&catalog, &config, today());
        let filter = JobFilter::new()
            .with_category(JobCategory::Defence)
            .with_status(JobStatus::Upcoming);
        let page = JobsPage::build(&ctx, filter).unwrap();

        assert!(page.jobs.is_empty());
        assert_eq!(page.summary, "Showing 0 jobs matching your criteria");
        assert_eq!(page.empty.map(|e| e.heading), Some("No jobs found"));
    }

    #[test]
    fn test_clearing_restores_full_list() {
        let (catalog, config) = bundled();
        let ctx = PageContext::new(&catalog, &config, today());
        let mut filter = JobFilter::new().with_location("Mumbai");
        assert_eq!(JobsPage::build(&ctx, filter.clone()).unwrap().jobs.len(), 2);

        filter.clear();
        assert_eq!(JobsPage::build(&ctx, filter).unwrap().jobs.len(), 12);
    }
}
