//! Blog post page.

use serde::Serialize;
use tracing::debug;

use super::{BlogCard, PageContext};
use crate::error::Result;
use crate::format;
use crate::model::Blog;
use crate::route::{NavLink, Route};
use crate::search::{BlogFacets, BlogFilter, CategoryCount};
use crate::share::ShareLinks;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDetailPage {
    pub blog: Blog,
    pub published_date: String,
    /// This post's tags, each linking to the filtered listing.
    pub tag_links: Vec<NavLink>,
    pub related: Vec<BlogCard>,
    /// Sidebar: every category with its post count.
    pub categories: Vec<CategoryCount>,
    /// Sidebar: every tag in the catalog.
    pub tags: Vec<String>,
    pub share: ShareLinks,
}

impl BlogDetailPage {
    /// Build the page for a post id or slug, or `None` if neither matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or share links cannot
    /// be built.
    pub fn build(ctx: &PageContext<'_>, id_or_slug: &str) -> Result<Option<Self>> {
        let blog = match ctx.catalog.blog(id_or_slug)? {
            Some(blog) => blog,
            None => match ctx.catalog.blog_by_slug(id_or_slug)? {
                Some(blog) => blog,
                None => {
                    debug!(id = id_or_slug, "Blog post not found");
                    return Ok(None);
                }
            },
        };

        let all = ctx.catalog.blogs()?;
        let related = all
            .iter()
            .filter(|b| b.id != blog.id && b.category == blog.category)
            .take(ctx.config.listing.related_limit)
            .map(|b| BlogCard::new(b, ctx))
            .collect();
        let BlogFacets { categories, tags } = BlogFacets::from_blogs(&all);

        let tag_links = blog
            .tags
            .iter()
            .map(|tag| {
                NavLink::leaf(
                    tag.clone(),
                    Route::Blogs(BlogFilter::new().with_tag(tag.clone())).path(),
                )
            })
            .collect();

        Ok(Some(Self {
            published_date: format::article_date(blog.published_date),
            tag_links,
            related,
            categories,
            tags,
            share: ShareLinks::for_blog(ctx.config, &blog)?,
            blog,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::tests::{bundled, today};

    #[test]
    fn test_by_id_and_slug() {
        let (catalog, config) = bundled();
        let ctx = PageContext::new(&catalog, &config, today());

        let by_id = BlogDetailPage::build(&ctx, "4").unwrap().unwrap();
        let by_slug = BlogDetailPage::build(&ctx, "ssc-cgl-2025-examination-guide")
            .unwrap()
            .unwrap();
        assert_eq!(by_id.blog, by_slug.blog);
        assert_eq!(by_id.published_date, "January 30, 2025");
    }

    #[test]
    fn test_related_same_category() {
        let (catalog, config) = bundled();
        let ctx = PageContext::new(&catalog, &config, today());
        let page = BlogDetailPage::build(&ctx, "1").unwrap().unwrap();

        let ids: Vec<_> = page.related.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["5"]);
    }

    #[test]
    fn test_sidebar_counts_and_tag_links() {
        let (catalog, config) = bundled();
        let ctx = PageContext::new(&catalog, &config, today());
        let page = BlogDetailPage::build(&ctx, "2").unwrap().unwrap();

        let banking = page
            .categories
            .iter()
            .find(|c| c.name == "Banking Jobs")
            .unwrap();
        assert_eq!(banking.count, 2);
        assert!(page.tags.contains(&"Study Plan".to_string()));
        assert_eq!(page.tag_links[0].path, "/blogs?tag=Banking");
        assert_eq!(page.tag_links[3].path, "/blogs?tag=Finance+Careers");
    }

    #[test]
    fn test_unknown_post() {
        let (catalog, config) = bundled();
        let ctx = PageContext::new(&catalog, &config, today());
        assert!(BlogDetailPage::build(&ctx, "missing-post").unwrap().is_none());
    }
}
