//! Blog listing page.

use serde::Serialize;

use super::{BlogCard, EmptyState, PageContext};
use crate::error::Result;
use crate::search::{BlogFacets, BlogFilter};

const NO_ARTICLES: EmptyState = EmptyState {
    heading: "No articles found",
    message: "We couldn't find any articles matching your search criteria. Try different keywords or categories.",
};

#[derive(Debug, Clone, Serialize)]
pub struct BlogsPage {
    pub filter: BlogFilter,
    pub facets: BlogFacets,
    pub total: usize,
    pub blogs: Vec<BlogCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<EmptyState>,
}

impl BlogsPage {
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read.
    pub fn build(ctx: &PageContext<'_>, filter: BlogFilter) -> Result<Self> {
        let all = ctx.catalog.blogs()?;
        let total = all.len();
        let facets = BlogFacets::from_blogs(&all);

        let blogs: Vec<BlogCard> = filter
            .apply(all)
            .iter()
            .map(|b| BlogCard::new(b, ctx))
            .collect();

        Ok(Self {
            filter,
            facets,
            total,
            empty: blogs.is_empty().then_some(NO_ARTICLES),
            blogs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::tests::{bundled, today};

    fn ids(page: &BlogsPage) -> Vec<&str> {
        page.blogs.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_all_posts_in_catalog_order() {
        let (catalog, config) = bundled();
        let ctx = PageContext::new(&catalog, &config, today());
        let page = BlogsPage::build(&ctx, BlogFilter::new()).unwrap();

        assert_eq!(ids(&page), vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(page.total, 6);
        assert_eq!(
            page.facets.category_names(),
            vec!["Exam Preparation", "Banking Jobs", "Career Advice", "Exam Guide"]
        );
    }

    #[test]
    fn test_category_and_tag() {
        let (catalog, config) = bundled();
        let ctx = PageContext::new(&catalog, &config, today());

        let page = BlogsPage::build(&ctx, BlogFilter::new().with_category("Banking Jobs")).unwrap();
        assert_eq!(ids(&page), vec!["2", "6"]);

        let page = BlogsPage::build(&ctx, BlogFilter::new().with_tag("exam tips")).unwrap();
        assert_eq!(ids(&page), vec!["1", "6"]);
    }

    #[test]
    fn test_card_tags_are_previewed() {
        let (catalog, mut config) = bundled();
        config.listing.tag_preview = 2;
        let ctx = PageContext::new(&catalog, &config, today());
        let page = BlogsPage::build(&ctx, BlogFilter::new()).unwrap();

        assert_eq!(page.blogs[0].tags, vec!["UPSC", "Civil Services"]);
        assert_eq!(page.blogs[0].published, "Jan 15, 2025");
    }

    #[test]
    fn test_no_articles() {
        let (catalog, config) = bundled();
        let ctx = PageContext::new(&catalog, &config, today());
        let page = BlogsPage::build(&ctx, BlogFilter::new().with_search("zzzz")).unwrap();

        assert!(page.blogs.is_empty());
        assert_eq!(page.empty.map(|e| e.heading), Some("No articles found"));
    }
}
