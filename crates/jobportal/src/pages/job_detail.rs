//! Job detail page.

use serde::Serialize;
use tracing::debug;

use super::{JobCard, PageContext};
use crate::error::Result;
use crate::format;
use crate::model::Job;
use crate::share::ShareLinks;

/// One row of the application fee table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeRow {
    pub category: &'static str,
    pub fee: String,
}

/// One row of the important dates table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRow {
    pub label: &'static str,
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetailPage {
    pub job: Job,
    pub posted_date: String,
    pub last_date: String,
    pub fees: Vec<FeeRow>,
    pub important_dates: Vec<DateRow>,
    /// Same category, excluding this job.
    pub similar_jobs: Vec<JobCard>,
    pub share: ShareLinks,
}

impl JobDetailPage {
    /// Build the page, or `None` if no job has this id.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or share links cannot
    /// be built.
    pub fn build(ctx: &PageContext<'_>, id: &str) -> Result<Option<Self>> {
        let Some(job) = ctx.catalog.job(id)? else {
            debug!(id, "Job not found");
            return Ok(None);
        };

        let similar_jobs = ctx
            .catalog
            .jobs()?
            .iter()
            .filter(|j| j.id != job.id && j.category == job.category)
            .take(ctx.config.listing.related_limit)
            .map(|j| JobCard::new(j, ctx))
            .collect();

        let fees = job
            .application_fee
            .iter()
            .map(|(category, fee)| FeeRow {
                category: category.label(),
                fee: format::rupees(fee),
            })
            .collect();

        Ok(Some(Self {
            posted_date: format::long_date(job.posted_date),
            last_date: format::long_date(job.last_date),
            fees,
            important_dates: important_dates(&job),
            similar_jobs,
            share: ShareLinks::for_job(ctx.config, &job)?,
            job,
        }))
    }
}

fn important_dates(job: &Job) -> Vec<DateRow> {
    let dates = &job.important_dates;
    [
        ("Application Start", Some(dates.application_start)),
        ("Application End", Some(dates.application_end)),
        ("Exam Date", dates.exam_date),
        ("Result Date", dates.result_date),
    ]
    .into_iter()
    .filter_map(|(label, date)| {
        date.map(|d| DateRow {
            label,
            date: format::long_date(d),
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::tests::{bundled, today};

    #[test]
    fn test_detail_fields() {
        let (catalog, config) = bundled();
        let ctx = PageContext::new(&catalog, &config, today());
        let page = JobDetailPage::build(&ctx, "1").unwrap().unwrap();

        assert_eq!(page.job.id, "1");
        assert_eq!(page.posted_date, "9 June 2025");
        assert_eq!(page.last_date, "4 July 2025");
        assert_eq!(page.fees.len(), 5);
        assert_eq!(page.fees[0].category, "General");
        assert!(page.fees[0].fee.starts_with('₹'));
        assert_eq!(page.important_dates.len(), 4);
        assert_eq!(page.important_dates[2].label, "Exam Date");
    }

    #[test]
    fn test_optional_dates_are_skipped() {
        let (catalog, config) = bundled();
        let ctx = PageContext::new(&catalog, &config, today());
        let page = JobDetailPage::build(&ctx, "5").unwrap().unwrap();

        let labels: Vec<_> = page.important_dates.iter().map(|d| d.label).collect();
        assert_eq!(labels, vec!["Application Start", "Application End"]);
    }

    #[test]
    fn test_similar_jobs_same_category_excluding_self() {
        let (catalog, config) = bundled();
        let ctx = PageContext::new(&catalog, &config, today());
        let page = JobDetailPage::build(&ctx, "1").unwrap().unwrap();

        let ids: Vec<_> = page.similar_jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "12"]);
    }

    #[test]
    fn test_related_limit() {
        let (catalog, mut config) = bundled();
        config.listing.related_limit = 1;
        let ctx = PageContext::new(&catalog, &config, today());
        let page = JobDetailPage::build(&ctx, "7").unwrap().unwrap();

        assert_eq!(page.similar_jobs.len(), 1);
        assert_eq!(page.similar_jobs[0].id, "8");
    }

    #[test]
    fn test_share_text() {
        let (catalog, config) = bundled();
        let ctx = PageContext::new(&catalog, &config, today());
        let page = JobDetailPage::build(&ctx, "3").unwrap().unwrap();

        assert!(page
            .share
            .twitter
            .ends_with("&text=Probationary+Officer+at+State+Bank+of+India"));
    }

    #[test]
    fn test_unknown_id() {
        let (catalog, config) = bundled();
        let ctx = PageContext::new(&catalog, &config, today());
        assert!(JobDetailPage::build(&ctx, "404").unwrap().is_none());
    }
}
